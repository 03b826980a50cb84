//! Weekly meal plan handlers

use crate::{
    AddRecipeRequest, ApiError, ApiJson, ApiQuery, ApiResult, AppState, CurrentPlanQuery,
    MealPlanDto, SessionUser, WeekRequest,
};

use mp_ai::{WeeklyMealPlan, WeeklyPlanRequest};
use mp_core::{Meal, MealType, week_start_for};
use mp_store::{
    FamilyMemberRepository, MealPlanRepository, PantryRepository, PreferencesRepository,
    RecipeRepository,
};

use std::str::FromStr;

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use uuid::Uuid;

const DEFAULT_MEAL_TYPE: MealType = MealType::Dinner;

/// POST /api/meal-plans/generate
///
/// AI-generated week of meals. Nothing is persisted.
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<WeekRequest>,
) -> ApiResult<Json<WeeklyMealPlan>> {
    let week_starting = resolve_week(request.week_starting);

    let plan_request = WeeklyPlanRequest {
        family_members: FamilyMemberRepository::new(state.store.clone())
            .find_active_by_user(user_id)?,
        preferences: PreferencesRepository::new(state.store.clone()).find_by_user(user_id)?,
        pantry_items: PantryRepository::new(state.store.clone()).ingredient_names(user_id)?,
        week_starting,
    };

    log::debug!(
        "Generating weekly plan for user {} starting {}",
        user_id,
        week_starting
    );

    let plan = state.ai.generate_weekly_plan(&plan_request).await;
    Ok(Json(plan))
}

/// POST /api/meal-plans
///
/// The user's plan for the week, created when missing
pub async fn create_meal_plan(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<WeekRequest>,
) -> ApiResult<(StatusCode, Json<MealPlanDto>)> {
    let week_starting = resolve_week(request.week_starting);
    let repo = MealPlanRepository::new(state.store.clone());

    let existed = repo.find_for_week(user_id, week_starting)?.is_some();
    let plan = repo.find_or_create(user_id, week_starting)?;
    let joined = repo
        .find_with_meals(plan.id)?
        .ok_or_else(|| ApiError::internal(format!("Meal plan {} vanished", plan.id)))?;

    let status = if existed {
        StatusCode::OK
    } else {
        log::info!("Created meal plan {} for user {}", plan.id, user_id);
        StatusCode::CREATED
    };

    Ok((status, Json(joined.into())))
}

/// GET /api/meal-plans/current?weekStarting=
///
/// `null` when the user has no plan for that week
pub async fn get_current_meal_plan(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiQuery(query): ApiQuery<CurrentPlanQuery>,
) -> ApiResult<Json<Option<MealPlanDto>>> {
    let week_starting = resolve_week(query.week_starting);
    let repo = MealPlanRepository::new(state.store.clone());

    let Some(plan) = repo.find_for_week(user_id, week_starting)? else {
        return Ok(Json(None));
    };

    Ok(Json(repo.find_with_meals(plan.id)?.map(Into::into)))
}

/// POST /api/meal-plans/add-recipe
///
/// Schedules a recipe on the plan for the week containing `date`, creating
/// that plan if needed. The day defaults to the weekday of `date` and the
/// meal type to the time of day of `date`.
pub async fn add_recipe_to_plan(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<AddRecipeRequest>,
) -> ApiResult<(StatusCode, Json<MealPlanDto>)> {
    let recipe_id = Uuid::parse_str(&request.recipe_id)
        .map_err(|e| ApiError::validation(format!("Invalid recipeId: {}", e), "recipeId"))?;

    let (date, hour) = parse_schedule_date(&request.date)?;

    let recipe_exists = RecipeRepository::new(state.store.clone())
        .find_by_id(recipe_id)?
        .is_some();
    if !recipe_exists {
        return Err(ApiError::not_found(format!("Recipe {} not found", recipe_id)));
    }

    let meal_type = match request.meal_type.as_deref() {
        Some(value) => MealType::from_str(value)?,
        None => hour.map(MealType::for_hour).unwrap_or(DEFAULT_MEAL_TYPE),
    };
    let day_of_week = request
        .day_of_week
        .unwrap_or_else(|| i64::from(date.weekday().num_days_from_sunday()));

    let repo = MealPlanRepository::new(state.store.clone());
    let plan = repo.find_or_create(user_id, week_start_for(date))?;

    let meal = Meal::new(plan.id, recipe_id, day_of_week, meal_type)?;
    let meal = repo.add_meal(&meal)?;

    log::info!(
        "Scheduled recipe {} for {} {} on plan {}",
        recipe_id,
        meal.day_name(),
        meal.meal_type,
        plan.id
    );

    let joined = repo
        .find_with_meals(plan.id)?
        .ok_or_else(|| ApiError::internal(format!("Meal plan {} vanished", plan.id)))?;

    Ok((StatusCode::CREATED, Json(joined.into())))
}

fn resolve_week(week_starting: Option<NaiveDate>) -> NaiveDate {
    week_start_for(week_starting.unwrap_or_else(|| Utc::now().date_naive()))
}

/// A timestamp keeps its local hour; a bare date has none
fn parse_schedule_date(value: &str) -> ApiResult<(NaiveDate, Option<u32>)> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok((timestamp.date_naive(), Some(timestamp.hour())));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok((date, None));
    }

    Err(ApiError::validation(
        format!("Invalid date '{}' (expected RFC 3339 or YYYY-MM-DD)", value),
        "date",
    ))
}
