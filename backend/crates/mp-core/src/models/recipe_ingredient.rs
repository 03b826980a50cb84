use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Junction between a recipe and one of its ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: String,
    pub unit: Option<String>,
    pub is_optional: bool,
}

impl RecipeIngredient {
    pub fn new(recipe_id: Uuid, ingredient_id: Uuid, quantity: String, unit: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            ingredient_id,
            quantity,
            unit,
            is_optional: false,
        }
    }
}
