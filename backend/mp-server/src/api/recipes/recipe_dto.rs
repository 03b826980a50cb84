use mp_core::{Recipe, ScoredRecipe};
use mp_store::{RecipeIngredientDetail, RecipeWithIngredients};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Recipe DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: String,
    pub cuisine: Option<String>,
    pub tags: Vec<String>,
    pub nutritional_info: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeDto {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title,
            description: r.description,
            instructions: r.instructions,
            cook_time: r.cook_time,
            servings: r.servings,
            difficulty: r.difficulty.as_str().to_string(),
            cuisine: r.cuisine,
            tags: r.tags,
            nutritional_info: r.nutritional_info,
            image_url: r.image_url,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientDto {
    pub id: String,
    pub ingredient_id: String,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub is_optional: bool,
}

impl From<RecipeIngredientDetail> for RecipeIngredientDto {
    fn from(d: RecipeIngredientDetail) -> Self {
        Self {
            id: d.line.id.to_string(),
            ingredient_id: d.ingredient.id.to_string(),
            name: d.ingredient.name,
            category: d.ingredient.category,
            quantity: d.line.quantity,
            unit: d.line.unit,
            is_optional: d.line.is_optional,
        }
    }
}

/// Recipe with its ingredient lines
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailDto {
    #[serde(flatten)]
    pub recipe: RecipeDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub is_favorite: bool,
}

impl RecipeDetailDto {
    pub fn new(joined: RecipeWithIngredients, is_favorite: bool) -> Self {
        Self {
            recipe: joined.recipe.into(),
            ingredients: joined.ingredients.into_iter().map(Into::into).collect(),
            is_favorite,
        }
    }
}

/// Catalog recipe with its pantry match ratio
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipeDto {
    #[serde(flatten)]
    pub recipe: RecipeDto,
    pub match_ratio: f64,
}

impl From<ScoredRecipe> for ScoredRecipeDto {
    fn from(s: ScoredRecipe) -> Self {
        Self {
            recipe: s.recipe.into(),
            match_ratio: s.match_ratio,
        }
    }
}
