use crate::{ApiError, ApiResult, AppState, DeleteResponse, SessionUser};

use mp_store::MealPlanRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// DELETE /api/meals/{id}
pub async fn delete_meal(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let meal_id = Uuid::parse_str(&id)?;
    let repo = MealPlanRepository::new(state.store.clone());

    let not_found = || ApiError::not_found(format!("Meal {} not found", meal_id));

    let meal = repo.find_meal(meal_id)?.ok_or_else(not_found)?;
    let owned = repo
        .find_by_id(meal.meal_plan_id)?
        .is_some_and(|plan| plan.user_id == user_id);
    if !owned {
        return Err(not_found());
    }

    repo.remove_meal(meal_id)?;
    log::info!("Removed meal {} from plan {}", meal_id, meal.meal_plan_id);

    Ok(Json(DeleteResponse::new(meal_id)))
}
