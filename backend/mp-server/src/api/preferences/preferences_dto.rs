use mp_core::UserPreferences;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDto {
    pub user_id: String,
    pub family_size: i32,
    pub cooking_skill: String,
    pub budget: String,
    pub cooking_time: String,
    pub cuisine_preferences: Vec<String>,
    pub healthy_alternatives: bool,
    pub seasonal_ingredients: bool,
    pub meal_variety: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<UserPreferences> for PreferencesDto {
    fn from(p: UserPreferences) -> Self {
        Self {
            user_id: p.user_id.to_string(),
            family_size: p.family_size,
            cooking_skill: p.cooking_skill,
            budget: p.budget,
            cooking_time: p.cooking_time,
            cuisine_preferences: p.cuisine_preferences,
            healthy_alternatives: p.healthy_alternatives,
            seasonal_ingredients: p.seasonal_ingredients,
            meal_variety: p.meal_variety,
            updated_at: p.updated_at,
        }
    }
}

/// Body of POST /api/preferences. Omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    pub family_size: Option<i32>,
    pub cooking_skill: Option<String>,
    pub budget: Option<String>,
    pub cooking_time: Option<String>,
    pub cuisine_preferences: Option<Vec<String>>,
    pub healthy_alternatives: Option<bool>,
    pub seasonal_ingredients: Option<bool>,
    pub meal_variety: Option<bool>,
}
