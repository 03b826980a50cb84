use crate::api::suggestions::proactive::{
    PantryEntry, PlanStatus, SuggestionInputs, proactive_suggestions,
};
use crate::{
    ApiError, ApiJson, ApiResult, AppState, DismissSuggestionRequest,
    GenerateSuggestionsRequest, ProactiveSuggestion, SessionUser,
};

use mp_core::week_start_for;
use mp_store::{
    MealPlanRepository, PantryRepository, RecipeRepository, ShoppingListRepository,
    SuggestionRepository,
};

use axum::{Json, extract::State};
use chrono::{DateTime, FixedOffset, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

const MAX_SUGGESTION_ID_LEN: usize = 200;

/// GET /api/suggestions/proactive
pub async fn proactive(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<Vec<ProactiveSuggestion>>> {
    let now = Utc::now().fixed_offset();
    Ok(Json(suggestions_at(&state, user_id, now)?))
}

/// POST /api/suggestions/generate
///
/// Same rules as the proactive feed, evaluated at the client's clock
pub async fn generate(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<GenerateSuggestionsRequest>,
) -> ApiResult<Json<Vec<ProactiveSuggestion>>> {
    let now = request
        .context
        .current_time
        .unwrap_or_else(|| Utc::now().fixed_offset());
    Ok(Json(suggestions_at(&state, user_id, now)?))
}

/// POST /api/suggestions/dismiss
pub async fn dismiss(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<DismissSuggestionRequest>,
) -> ApiResult<Json<Value>> {
    let suggestion_id = request.suggestion_id.trim();
    if suggestion_id.is_empty() || suggestion_id.len() > MAX_SUGGESTION_ID_LEN {
        return Err(ApiError::validation(
            "suggestionId must be a non-empty id",
            "suggestionId",
        ));
    }

    SuggestionRepository::new(state.store.clone()).dismiss(user_id, suggestion_id)?;
    log::debug!("User {} dismissed suggestion {}", user_id, suggestion_id);

    Ok(Json(
        json!({ "suggestionId": suggestion_id, "dismissed": true }),
    ))
}

fn suggestions_at(
    state: &AppState,
    user_id: Uuid,
    now: DateTime<FixedOffset>,
) -> ApiResult<Vec<ProactiveSuggestion>> {
    let pantry = PantryRepository::new(state.store.clone())
        .find_by_user(user_id)?
        .into_iter()
        .map(|joined| PantryEntry {
            name: joined.ingredient.name,
            item: joined.item,
        })
        .collect();

    let best_recipe = RecipeRepository::new(state.store.clone())
        .recommended(user_id, 1)?
        .into_iter()
        .next();

    let week_starting = week_start_for(now.date_naive());
    let plans = MealPlanRepository::new(state.store.clone());
    let current_plan = match plans.find_for_week(user_id, week_starting)? {
        Some(plan) => plan_status(state, plan.id)?,
        None => None,
    };

    let dismissed = SuggestionRepository::new(state.store.clone()).dismissed_ids(user_id)?;

    let inputs = SuggestionInputs {
        now,
        pantry,
        best_recipe,
        week_starting,
        current_plan,
        dismissed,
    };

    Ok(proactive_suggestions(&inputs))
}

fn plan_status(state: &AppState, plan_id: Uuid) -> ApiResult<Option<PlanStatus>> {
    let Some(joined) = MealPlanRepository::new(state.store.clone()).find_with_meals(plan_id)? else {
        return Ok(None);
    };

    let has_shopping_list = ShoppingListRepository::new(state.store.clone())
        .find_for_meal_plan(plan_id)?
        .is_some();

    Ok(Some(PlanStatus {
        meal_count: joined.meals.len(),
        plan: joined.plan,
        has_shopping_list,
    }))
}
