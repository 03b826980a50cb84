use crate::{ApiQuery, ApiResult, AppState, IngredientDto, IngredientSearchQuery};

use mp_store::IngredientRepository;

use axum::{Json, extract::State};

/// GET /api/ingredients?q=
///
/// Every known ingredient, or those whose name contains `q`
pub async fn list_ingredients(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<IngredientSearchQuery>,
) -> ApiResult<Json<Vec<IngredientDto>>> {
    let repo = IngredientRepository::new(state.store.clone());

    let ingredients = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => repo.search(q)?,
        None => repo.list()?,
    };

    Ok(Json(ingredients.into_iter().map(IngredientDto::from).collect()))
}
