use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A household member whose restrictions shape recipe and plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub dietary: Vec<String>,
    pub allergies: Vec<String>,
    /// Cuisine and flavour preferences
    pub preferences: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl FamilyMember {
    pub fn new(user_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            age: None,
            dietary: Vec::new(),
            allergies: Vec::new(),
            preferences: Vec::new(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// One-line summary used when building prompts
    pub fn prompt_summary(&self) -> String {
        let age = self
            .age
            .map(|a| format!(" (age {})", a))
            .unwrap_or_default();
        format!(
            "{}{}: dietary needs: {}, allergies: {}, preferences: {}",
            self.name,
            age,
            join_or_none(&self.dietary),
            join_or_none(&self.allergies),
            join_or_none(&self.preferences),
        )
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}
