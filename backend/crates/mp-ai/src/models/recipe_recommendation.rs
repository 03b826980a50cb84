use crate::models::lenient;
use crate::{AiError, AiResult};

use mp_core::{Difficulty, FamilyMember};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Untitled Recipe";
pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_COOK_TIME: u32 = 30;
pub const DEFAULT_FAMILY_SIZE: u32 = 4;

/// Inputs for a recipe recommendation call
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRequest {
    pub available_ingredients: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub cuisine_preferences: Vec<String>,
    pub family_size: u32,
    pub family_members: Vec<FamilyMember>,
}

impl Default for RecipeRequest {
    fn default() -> Self {
        Self {
            available_ingredients: Vec::new(),
            dietary_restrictions: Vec::new(),
            cuisine_preferences: Vec::new(),
            family_size: DEFAULT_FAMILY_SIZE,
            family_members: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecommendation {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    pub tags: Vec<String>,
}

impl RecipeRecommendation {
    /// Validate and normalise the text model's reply.
    ///
    /// Accepts either a top-level array of recipes or an object with a
    /// `recipes` array.
    pub fn list_from_model_text(content: &str, family_size: u32) -> AiResult<Vec<Self>> {
        let parsed: Value = serde_json::from_str(content)?;

        let recipes = match parsed {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("recipes") {
                Some(Value::Array(items)) => items,
                _ => return Err(AiError::schema("expected a `recipes` array")),
            },
            _ => return Err(AiError::schema("expected a JSON object or array")),
        };

        Ok(recipes
            .iter()
            .filter(|value| value.is_object())
            .map(|value| Self::normalise(value, family_size))
            .collect())
    }

    fn normalise(value: &Value, family_size: u32) -> Self {
        let difficulty = value
            .get("difficulty")
            .and_then(Value::as_str)
            .map(Difficulty::coerce)
            .unwrap_or_default();

        Self {
            title: lenient::text(value.get("title")).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: lenient::text(value.get("description"))
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            ingredients: lenient::string_list(value.get("ingredients")),
            instructions: lenient::string_list(value.get("instructions")),
            cook_time: lenient::positive_u32(value.get("cookTime")).unwrap_or(DEFAULT_COOK_TIME),
            servings: lenient::positive_u32(value.get("servings")).unwrap_or(family_size),
            difficulty,
            cuisine: lenient::text(value.get("cuisine")),
            tags: lenient::string_list(value.get("tags")),
        }
    }
}
