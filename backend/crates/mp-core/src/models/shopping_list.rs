use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Plan this list was generated from, if any
    pub meal_plan_id: Option<Uuid>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(user_id: Uuid, name: String, meal_plan_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            meal_plan_id,
            is_completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn name_for_week(week_starting: NaiveDate) -> String {
        format!("Shopping List - Week of {}", week_starting.format("%Y-%m-%d"))
    }
}
