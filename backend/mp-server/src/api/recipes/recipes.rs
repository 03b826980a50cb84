//! Recipe catalog and favourites handlers

use crate::api::validate;
use crate::{
    ApiError, ApiJson, ApiQuery, ApiResult, AppState, DEFAULT_LIST_LIMIT, ListRecipesQuery,
    RecipeDetailDto, RecipeDto, RecommendedRecipesQuery, ScoredRecipeDto, SearchRecipesRequest,
    SessionUser,
};

use mp_core::DEFAULT_RECOMMENDATION_LIMIT;
use mp_store::{FavoriteRepository, RecipeRepository, RecipeSearch};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use uuid::Uuid;

/// GET /api/recipes?limit&offset
pub async fn list_recipes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListRecipesQuery>,
) -> ApiResult<Json<Vec<RecipeDto>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .min(state.validation.max_page_size);
    let offset = query.offset.unwrap_or(0);

    let repo = RecipeRepository::new(state.store.clone());
    let recipes = repo.list(limit, offset)?;

    Ok(Json(recipes.into_iter().map(RecipeDto::from).collect()))
}

/// GET /api/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeDetailDto>> {
    let recipe_id = Uuid::parse_str(&id)?;

    let repo = RecipeRepository::new(state.store.clone());
    let recipe = repo
        .find_with_ingredients(recipe_id)?
        .ok_or_else(|| ApiError::not_found(format!("Recipe {} not found", id)))?;

    let is_favorite = FavoriteRepository::new(state.store.clone()).is_favorite(user_id, recipe_id)?;

    Ok(Json(RecipeDetailDto::new(recipe, is_favorite)))
}

/// POST /api/recipes/search
pub async fn search_recipes(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SearchRecipesRequest>,
) -> ApiResult<Json<Vec<RecipeDto>>> {
    let max_len = state.validation.max_name_length;

    if let Some(max) = request.max_cook_time {
        validate::in_range(i64::from(max), "maxCookTime", 1, 24 * 60)?;
    }

    let search = RecipeSearch {
        query: validate::optional_text(request.query.as_deref(), "query", max_len)?,
        cuisine: validate::optional_text(request.cuisine.as_deref(), "cuisine", max_len)?,
        tags: validate::text_list(&request.tags, "tags", max_len)?,
        max_cook_time: request.max_cook_time,
    };

    let repo = RecipeRepository::new(state.store.clone());
    let recipes = repo.search(&search)?;

    Ok(Json(recipes.into_iter().map(RecipeDto::from).collect()))
}

/// GET /api/recipes/recommended
///
/// Catalog recipes ranked by how much of each is already in the pantry
pub async fn recommended_recipes(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiQuery(query): ApiQuery<RecommendedRecipesQuery>,
) -> ApiResult<Json<Vec<ScoredRecipeDto>>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT)
        .min(state.validation.max_page_size);

    let repo = RecipeRepository::new(state.store.clone());
    let scored = repo.recommended(user_id, limit)?;

    Ok(Json(scored.into_iter().map(ScoredRecipeDto::from).collect()))
}

/// POST /api/recipes/{id}/favorite
pub async fn add_favorite(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let recipe_id = Uuid::parse_str(&id)?;

    let repo = FavoriteRepository::new(state.store.clone());
    repo.add(user_id, recipe_id)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "recipeId": recipe_id.to_string(), "isFavorite": true })),
    ))
}

/// DELETE /api/recipes/{id}/favorite
pub async fn remove_favorite(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let recipe_id = Uuid::parse_str(&id)?;

    let repo = FavoriteRepository::new(state.store.clone());
    if !repo.remove(user_id, recipe_id)? {
        return Err(ApiError::not_found(format!(
            "Recipe {} is not a favourite",
            recipe_id
        )));
    }

    Ok(Json(
        json!({ "recipeId": recipe_id.to_string(), "isFavorite": false }),
    ))
}

/// GET /api/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<Vec<RecipeDto>>> {
    let repo = FavoriteRepository::new(state.store.clone());
    let recipes = repo.find_recipes(user_id)?;

    Ok(Json(recipes.into_iter().map(RecipeDto::from).collect()))
}
