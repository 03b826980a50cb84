//! Shopping list handlers

use crate::{
    ApiError, ApiJson, ApiResult, AppState, CURRENT_MEAL_PLAN, DeleteResponse,
    GenerateShoppingListRequest, SessionUser, ShoppingListDetailDto, ShoppingListDto,
    ShoppingListItemDto, UpdateShoppingItemRequest,
};

use mp_core::{MealPlan, week_start_for};
use mp_store::{MealPlanRepository, ShoppingListRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// POST /api/shopping/generate
///
/// Aggregates every meal of the plan into a new shopping list
pub async fn generate_shopping_list(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<GenerateShoppingListRequest>,
) -> ApiResult<(StatusCode, Json<ShoppingListDetailDto>)> {
    let plan = resolve_meal_plan(&state, user_id, &request.meal_plan_id)?;

    let repo = ShoppingListRepository::new(state.store.clone());
    let generated = repo.generate_from_meal_plan(plan.id)?;

    log::info!(
        "Generated shopping list {} ({} items) for user {}",
        generated.list.id,
        generated.items.len(),
        user_id
    );

    Ok((StatusCode::CREATED, Json(generated.into())))
}

/// GET /api/shopping-lists
pub async fn list_shopping_lists(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<Vec<ShoppingListDto>>> {
    let repo = ShoppingListRepository::new(state.store.clone());
    let lists = repo.find_by_user(user_id)?;

    Ok(Json(lists.into_iter().map(ShoppingListDto::from).collect()))
}

/// GET /api/shopping-lists/{id}
pub async fn get_shopping_list(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ShoppingListDetailDto>> {
    let list_id = Uuid::parse_str(&id)?;

    let repo = ShoppingListRepository::new(state.store.clone());
    let joined = repo
        .find_with_items(list_id)?
        .filter(|joined| joined.list.user_id == user_id)
        .ok_or_else(|| ApiError::not_found(format!("Shopping list {} not found", list_id)))?;

    Ok(Json(joined.into()))
}

/// PATCH /api/shopping-lists/items/{id}
pub async fn update_shopping_item(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateShoppingItemRequest>,
) -> ApiResult<Json<ShoppingListItemDto>> {
    let item_id = Uuid::parse_str(&id)?;
    let repo = ShoppingListRepository::new(state.store.clone());

    ensure_item_owner(&repo, item_id, user_id)?;
    let item = repo.set_item_checked(item_id, request.is_checked)?;

    Ok(Json(item.into()))
}

/// DELETE /api/shopping-lists/items/{id}
pub async fn delete_shopping_item(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let item_id = Uuid::parse_str(&id)?;
    let repo = ShoppingListRepository::new(state.store.clone());

    ensure_item_owner(&repo, item_id, user_id)?;
    repo.delete_item(item_id)?;

    Ok(Json(DeleteResponse::new(item_id)))
}

fn resolve_meal_plan(state: &AppState, user_id: Uuid, selector: &str) -> ApiResult<MealPlan> {
    let repo = MealPlanRepository::new(state.store.clone());
    let selector = selector.trim();

    if selector.eq_ignore_ascii_case(CURRENT_MEAL_PLAN) {
        let week_starting = week_start_for(Utc::now().date_naive());
        return repo.find_for_week(user_id, week_starting)?.ok_or_else(|| {
            ApiError::not_found(format!("No meal plan for the week of {}", week_starting))
        });
    }

    let plan_id = Uuid::parse_str(selector).map_err(|e| {
        ApiError::validation(format!("Invalid mealPlanId: {}", e), "mealPlanId")
    })?;

    repo.find_by_id(plan_id)?
        .filter(|plan| plan.user_id == user_id)
        .ok_or_else(|| ApiError::not_found(format!("Meal plan {} not found", plan_id)))
}

fn ensure_item_owner(repo: &ShoppingListRepository, item_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    match repo.find_item_owner(item_id)? {
        Some((_, owner)) if owner == user_id => Ok(()),
        _ => Err(ApiError::not_found(format!(
            "Shopping list item {} not found",
            item_id
        ))),
    }
}
