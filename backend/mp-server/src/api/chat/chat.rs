use crate::api::validate;
use crate::{ApiJson, ApiResult, AppState, ChatMessageRequest, SessionUser};

use mp_ai::{ChatReply, ChatRequest};
use mp_store::{FamilyMemberRepository, PantryRepository};

use axum::{Json, extract::State};

/// POST /api/chat
///
/// Assistant reply plus quick suggestions for the next message
pub async fn chat(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<ChatMessageRequest>,
) -> ApiResult<Json<ChatReply>> {
    let max_len = state.validation.max_message_length;
    let message = validate::required_text(&request.message, "message", max_len)?;

    let pantry_items = match request.context.pantry_items {
        Some(items) => validate::text_list(&items, "pantryItems", state.validation.max_name_length)?,
        None => PantryRepository::new(state.store.clone()).ingredient_names(user_id)?,
    };
    let family_members =
        FamilyMemberRepository::new(state.store.clone()).find_active_by_user(user_id)?;

    let chat_request = ChatRequest {
        message,
        pantry_items,
        family_members,
        previous: request.context.previous_messages,
    };

    let reply = state.ai.chat(&chat_request).await;
    Ok(Json(reply))
}
