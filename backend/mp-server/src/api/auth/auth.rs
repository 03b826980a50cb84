use crate::{ApiError, ApiResult, AppState, SessionUser, UserDto};

use mp_store::UserRepository;

use axum::{Json, extract::State};

/// GET /api/auth/user
///
/// The user the current session acts for
pub async fn get_current_user(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<UserDto>> {
    let repo = UserRepository::new(state.store.clone());
    let user = repo
        .find_by_id(user_id)?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    Ok(Json(user.into()))
}
