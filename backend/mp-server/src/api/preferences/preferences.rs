use crate::api::validate;
use crate::{ApiJson, ApiResult, AppState, PreferencesDto, SessionUser, UpdatePreferencesRequest};

use mp_core::UserPreferences;
use mp_store::PreferencesRepository;

use axum::{Json, extract::State};

const MAX_FAMILY_SIZE: i64 = 20;

/// GET /api/preferences
///
/// Stored preferences, or the defaults when the user has saved none
pub async fn get_preferences(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<PreferencesDto>> {
    let repo = PreferencesRepository::new(state.store.clone());
    let preferences = repo
        .find_by_user(user_id)?
        .unwrap_or_else(|| UserPreferences::new(user_id));

    Ok(Json(preferences.into()))
}

/// POST /api/preferences
pub async fn save_preferences(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<UpdatePreferencesRequest>,
) -> ApiResult<Json<PreferencesDto>> {
    let repo = PreferencesRepository::new(state.store.clone());
    let mut preferences = repo
        .find_by_user(user_id)?
        .unwrap_or_else(|| UserPreferences::new(user_id));

    let max_len = state.validation.max_name_length;

    if let Some(size) = request.family_size {
        validate::in_range(i64::from(size), "familySize", 1, MAX_FAMILY_SIZE)?;
        preferences.family_size = size;
    }
    if let Some(skill) = request.cooking_skill {
        preferences.cooking_skill = validate::required_text(&skill, "cookingSkill", max_len)?;
    }
    if let Some(budget) = request.budget {
        preferences.budget = validate::required_text(&budget, "budget", max_len)?;
    }
    if let Some(time) = request.cooking_time {
        preferences.cooking_time = validate::required_text(&time, "cookingTime", max_len)?;
    }
    if let Some(cuisines) = request.cuisine_preferences {
        preferences.cuisine_preferences =
            validate::text_list(&cuisines, "cuisinePreferences", max_len)?;
    }
    if let Some(value) = request.healthy_alternatives {
        preferences.healthy_alternatives = value;
    }
    if let Some(value) = request.seasonal_ingredients {
        preferences.seasonal_ingredients = value;
    }
    if let Some(value) = request.meal_variety {
        preferences.meal_variety = value;
    }

    let saved = repo.upsert(&preferences)?;
    log::info!("Saved preferences for user {}", user_id);

    Ok(Json(saved.into()))
}
