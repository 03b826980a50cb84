use crate::Difficulty;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Minutes
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: Difficulty,
    pub cuisine: Option<String>,
    pub tags: Vec<String>,
    pub nutritional_info: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(title: String, instructions: Vec<String>, cook_time: i32, servings: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            instructions,
            cook_time,
            servings,
            difficulty: Difficulty::default(),
            cuisine: None,
            tags: Vec::new(),
            nutritional_info: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive match against title and description
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}
