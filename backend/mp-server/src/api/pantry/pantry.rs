//! Pantry handlers

use crate::api::validate;
use crate::{
    AddPantryRequest, ApiError, ApiJson, ApiResult, AppState, DeleteResponse, PantryItemDto,
    SessionUser, UpdatePantryItemRequest,
};

use mp_store::{NewPantryItem, PantryItemWithIngredient, PantryRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

const MAX_ITEMS_PER_REQUEST: usize = 100;

/// GET /api/pantry
pub async fn list_pantry(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
) -> ApiResult<Json<Vec<PantryItemDto>>> {
    let repo = PantryRepository::new(state.store.clone());
    let items = repo.find_by_user(user_id)?;

    Ok(Json(items.into_iter().map(PantryItemDto::from).collect()))
}

/// POST /api/pantry/add
///
/// Unknown ingredient names are created on the fly. Every entry becomes a new
/// pantry item, so adding the same name twice gives two items. Entries are
/// all validated before any is stored.
pub async fn add_pantry_items(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    ApiJson(request): ApiJson<AddPantryRequest>,
) -> ApiResult<(StatusCode, Json<Vec<PantryItemDto>>)> {
    if request.ingredients.is_empty() {
        return Err(ApiError::validation(
            "At least one ingredient is required",
            "ingredients",
        ));
    }
    if request.ingredients.len() > MAX_ITEMS_PER_REQUEST {
        return Err(ApiError::validation(
            format!("At most {} ingredients per request", MAX_ITEMS_PER_REQUEST),
            "ingredients",
        ));
    }

    let max_len = state.validation.max_name_length;
    let entries = request
        .ingredients
        .iter()
        .map(|entry| -> ApiResult<NewPantryItem> {
            Ok(NewPantryItem {
                name: validate::required_text(&entry.name, "name", max_len)?,
                category: validate::optional_text(entry.category.as_deref(), "category", max_len)?,
                quantity: validate::optional_text(entry.quantity.as_deref(), "quantity", max_len)?,
                unit: validate::optional_text(entry.unit.as_deref(), "unit", max_len)?,
                expiry_date: entry.expiry_date,
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;

    let created = PantryRepository::new(state.store.clone()).create_many(user_id, &entries)?;

    log::info!("Added {} pantry items for user {}", created.len(), user_id);

    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(PantryItemDto::from).collect()),
    ))
}

/// PUT /api/pantry/{id}
pub async fn update_pantry_item(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdatePantryItemRequest>,
) -> ApiResult<Json<PantryItemDto>> {
    let item_id = Uuid::parse_str(&id)?;
    let repo = PantryRepository::new(state.store.clone());

    let existing = find_owned_item(&repo, item_id, user_id)?;

    let max_len = state.validation.max_name_length;
    let mut item = existing.item;
    item.quantity = validate::optional_text(request.quantity.as_deref(), "quantity", max_len)?;
    item.unit = validate::optional_text(request.unit.as_deref(), "unit", max_len)?;
    item.expiry_date = request.expiry_date;

    let updated = repo.update(&item)?;
    Ok(Json(updated.into()))
}

/// DELETE /api/pantry/{id}
pub async fn delete_pantry_item(
    State(state): State<AppState>,
    SessionUser(user_id): SessionUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let item_id = Uuid::parse_str(&id)?;
    let repo = PantryRepository::new(state.store.clone());

    find_owned_item(&repo, item_id, user_id)?;
    repo.delete(item_id)?;

    log::info!("Deleted pantry item {} for user {}", item_id, user_id);
    Ok(Json(DeleteResponse::new(item_id)))
}

/// Another user's item is reported as missing
fn find_owned_item(
    repo: &PantryRepository,
    item_id: Uuid,
    user_id: Uuid,
) -> ApiResult<PantryItemWithIngredient> {
    repo.find_by_id(item_id)?
        .filter(|joined| joined.item.user_id == user_id)
        .ok_or_else(|| ApiError::not_found(format!("Pantry item {} not found", item_id)))
}
