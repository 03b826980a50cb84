use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_FAMILY_SIZE: i32 = 1;
pub const DEFAULT_COOKING_SKILL: &str = "Beginner";
pub const DEFAULT_BUDGET: &str = "Medium";
pub const DEFAULT_COOKING_TIME: &str = "30 mins";

/// Household-wide settings, one row per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub id: Uuid,
    pub user_id: Uuid,
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

impl UserPreferences {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            family_size: DEFAULT_FAMILY_SIZE,
            cooking_skill: DEFAULT_COOKING_SKILL.to_string(),
            budget: DEFAULT_BUDGET.to_string(),
            cooking_time: DEFAULT_COOKING_TIME.to_string(),
            cuisine_preferences: Vec::new(),
            healthy_alternatives: true,
            seasonal_ingredients: true,
            meal_variety: true,
            updated_at: Utc::now(),
        }
    }
}
