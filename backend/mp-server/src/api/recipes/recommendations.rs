//! AI-backed recipe handlers
//!
//! The gateway never fails: when the provider is unavailable these handlers
//! return the template recipes built from the pantry.

use crate::api::validate;
use crate::{
    ApiError, ApiJson, ApiResult, AppState, QuickGenerateRequest, RecipeDetailDto, RecommendationRequest,
    SessionUser,
};

use mp_ai::{RecipeRecommendation, RecipeRequest};
use mp_core::{MealType, Recipe};
use mp_store::{
    FamilyMemberRepository, NewRecipeIngredient, PantryRepository, PreferencesRepository,
    RecipeRepository,
};

use std::str::FromStr;

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

const DEFAULT_QUANTITY: &str = "1";

/// POST /api/recipes/recommendations
pub async fn recipe_recommendations(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(body): ApiJson<RecommendationRequest>,
) -> ApiResult<Json<Vec<RecipeRecommendation>>> {
    let request = build_recipe_request(&state, user_id, body)?;

    log::debug!(
        "Requesting recipe recommendations for user {} with {} available ingredients",
        user_id,
        request.available_ingredients.len()
    );

    let recipes = state.ai.recommend_recipes(&request).await;
    Ok(Json(recipes))
}

/// POST /api/recipes/quick-generate
///
/// Generates one recipe from the pantry and adds it to the catalog
pub async fn quick_generate_recipe(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(body): ApiJson<QuickGenerateRequest>,
) -> ApiResult<(StatusCode, Json<RecipeDetailDto>)> {
    let meal_type = body
        .meal_type
        .as_deref()
        .map(MealType::from_str)
        .transpose()?;

    let request = build_recipe_request(&state, user_id, RecommendationRequest::default())?;
    let recommendation = state
        .ai
        .recommend_recipes(&request)
        .await
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::internal("Recipe generation returned no recipes"))?;

    let (recipe, lines) = into_catalog_recipe(recommendation, meal_type);

    let repo = RecipeRepository::new(state.store.clone());
    let created = repo.create_with_ingredients(&recipe, &lines)?;

    log::info!(
        "Generated recipe '{}' ({}) for user {}",
        created.recipe.title,
        created.recipe.id,
        user_id
    );

    Ok((StatusCode::CREATED, Json(RecipeDetailDto::new(created, false))))
}

/// Merge the request body with what the store knows about the user
fn build_recipe_request(
    state: &AppState,
    user_id: Uuid,
    body: RecommendationRequest,
) -> ApiResult<RecipeRequest> {
    let max_len = state.validation.max_name_length;

    let available_ingredients = match body.available_ingredients {
        Some(names) => validate::text_list(&names, "availableIngredients", max_len)?,
        None => PantryRepository::new(state.store.clone()).ingredient_names(user_id)?,
    };

    let preferences = PreferencesRepository::new(state.store.clone()).find_by_user(user_id)?;
    let family_members = FamilyMemberRepository::new(state.store.clone()).find_active_by_user(user_id)?;

    let family_size = match body.family_size {
        Some(size) => {
            validate::in_range(i64::from(size), "familySize", 1, 20)?;
            size
        }
        None => preferences
            .as_ref()
            .and_then(|p| u32::try_from(p.family_size).ok())
            .filter(|size| *size > 0)
            .unwrap_or(RecipeRequest::default().family_size),
    };

    let cuisine_preferences = match body.cuisine_preferences {
        Some(cuisines) => validate::text_list(&cuisines, "cuisinePreferences", max_len)?,
        None => preferences
            .map(|p| p.cuisine_preferences)
            .unwrap_or_default(),
    };

    let mut dietary_restrictions =
        validate::text_list(&body.dietary_restrictions, "dietaryRestrictions", max_len)?;
    for member in &family_members {
        for need in member.dietary.iter().chain(&member.allergies) {
            if !dietary_restrictions.iter().any(|d| d.eq_ignore_ascii_case(need)) {
                dietary_restrictions.push(need.clone());
            }
        }
    }

    Ok(RecipeRequest {
        available_ingredients,
        dietary_restrictions,
        cuisine_preferences,
        family_size,
        family_members,
    })
}

fn into_catalog_recipe(
    recommendation: RecipeRecommendation,
    meal_type: Option<MealType>,
) -> (Recipe, Vec<NewRecipeIngredient>) {
    let cook_time = i32::try_from(recommendation.cook_time).unwrap_or(i32::MAX);
    let servings = i32::try_from(recommendation.servings).unwrap_or(i32::MAX);

    let mut recipe = Recipe::new(
        recommendation.title,
        recommendation.instructions,
        cook_time,
        servings,
    );
    recipe.description = Some(recommendation.description);
    recipe.difficulty = recommendation.difficulty;
    recipe.cuisine = recommendation.cuisine;
    recipe.tags = recommendation.tags;
    if let Some(meal_type) = meal_type
        && !recipe.tags.iter().any(|t| t.eq_ignore_ascii_case(meal_type.as_str()))
    {
        recipe.tags.push(meal_type.as_str().to_string());
    }

    let lines = recommendation
        .ingredients
        .iter()
        .map(|line| split_quantity(line))
        .collect();

    (recipe, lines)
}

/// "2 cups rice" becomes quantity "2", unit "cups", name "rice"; a line
/// without a leading number is all name
fn split_quantity(line: &str) -> NewRecipeIngredient {
    let mut parts = line.split_whitespace();
    let first = parts.next().unwrap_or_default();

    if first.starts_with(|c: char| c.is_ascii_digit()) {
        let rest: Vec<&str> = parts.collect();
        let (unit, name) = match rest.as_slice() {
            [unit, name @ ..] if !name.is_empty() => (Some(unit.to_string()), name.join(" ")),
            _ => (None, rest.join(" ")),
        };
        return NewRecipeIngredient {
            name,
            quantity: first.to_string(),
            unit,
            is_optional: false,
        };
    }

    NewRecipeIngredient {
        name: line.trim().to_string(),
        quantity: DEFAULT_QUANTITY.to_string(),
        unit: None,
        is_optional: false,
    }
}
