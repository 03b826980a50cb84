use mp_core::Ingredient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub nutritional_info: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<Ingredient> for IngredientDto {
    fn from(i: Ingredient) -> Self {
        Self {
            id: i.id.to_string(),
            name: i.name,
            category: i.category,
            nutritional_info: i.nutritional_info,
            created_at: i.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct IngredientSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}
