use mp_store::PantryItemWithIngredient;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Pantry item joined with its ingredient
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItemDto {
    pub id: String,
    pub ingredient_id: String,
    pub name: String,
    pub category: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

impl From<PantryItemWithIngredient> for PantryItemDto {
    fn from(joined: PantryItemWithIngredient) -> Self {
        Self {
            id: joined.item.id.to_string(),
            ingredient_id: joined.ingredient.id.to_string(),
            name: joined.ingredient.name,
            category: joined.ingredient.category,
            quantity: joined.item.quantity,
            unit: joined.item.unit,
            expiry_date: joined.item.expiry_date,
            added_at: joined.item.added_at,
        }
    }
}
