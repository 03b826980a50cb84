use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category assigned to ingredients created on demand from free text
pub const DEFAULT_INGREDIENT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub nutritional_info: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Ingredient {
    pub fn new(name: String, category: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            nutritional_info: None,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive name comparison used for lookups
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
