//! Family profile handlers

use crate::api::validate;
use crate::{
    ApiError, ApiJson, ApiResult, AppState, DeleteResponse, FamilyMemberDto, FamilyMemberRequest,
    SessionUser,
};

use mp_core::FamilyMember;
use mp_store::FamilyMemberRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

const MAX_AGE: i64 = 120;

/// GET /api/family
pub async fn list_family_members(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<Vec<FamilyMemberDto>>> {
    let repo = FamilyMemberRepository::new(state.store.clone());
    let members = repo.find_by_user(user_id)?;

    Ok(Json(members.into_iter().map(FamilyMemberDto::from).collect()))
}

/// POST /api/family
pub async fn create_family_member(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<FamilyMemberRequest>,
) -> ApiResult<(StatusCode, Json<FamilyMemberDto>)> {
    let mut member = FamilyMember::new(user_id, String::new());
    apply_request(&state, &mut member, request)?;

    let repo = FamilyMemberRepository::new(state.store.clone());
    repo.create(&member)?;

    log::info!("Added family member {} for user {}", member.id, user_id);
    Ok((StatusCode::CREATED, Json(member.into())))
}

/// PUT /api/family/{id}
pub async fn update_family_member(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<FamilyMemberRequest>,
) -> ApiResult<Json<FamilyMemberDto>> {
    let member_id = Uuid::parse_str(&id)?;
    let repo = FamilyMemberRepository::new(state.store.clone());

    let mut member = find_owned_member(&repo, member_id, user_id)?;
    apply_request(&state, &mut member, request)?;
    repo.update(&member)?;

    Ok(Json(member.into()))
}

/// DELETE /api/family/{id}
pub async fn delete_family_member(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let member_id = Uuid::parse_str(&id)?;
    let repo = FamilyMemberRepository::new(state.store.clone());

    find_owned_member(&repo, member_id, user_id)?;
    repo.delete(member_id)?;

    log::info!("Deleted family member {} for user {}", member_id, user_id);
    Ok(Json(DeleteResponse::new(member_id)))
}

fn apply_request(
    state: &AppState,
    member: &mut FamilyMember,
    request: FamilyMemberRequest,
) -> ApiResult<()> {
    let max_len = state.validation.max_name_length;

    member.name = validate::required_text(&request.name, "name", max_len)?;
    member.age = request
        .age
        .map(|age| validate::in_range(i64::from(age), "age", 0, MAX_AGE).map(|_| age))
        .transpose()?;
    member.dietary = validate::text_list(&request.dietary, "dietary", max_len)?;
    member.allergies = validate::text_list(&request.allergies, "allergies", max_len)?;
    member.preferences = validate::text_list(&request.preferences, "preferences", max_len)?;
    if let Some(is_active) = request.is_active {
        member.is_active = is_active;
    }

    Ok(())
}

fn find_owned_member(
    repo: &FamilyMemberRepository,
    member_id: Uuid,
    user_id: Uuid,
) -> ApiResult<FamilyMember> {
    repo.find_by_id(member_id)?
        .filter(|m| m.user_id == user_id)
        .ok_or_else(|| ApiError::not_found(format!("Family member {} not found", member_id)))
}
