use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_id: Uuid,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub added_at: DateTime<Utc>,
}

impl PantryItem {
    pub fn new(user_id: Uuid, ingredient_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            ingredient_id,
            quantity: None,
            unit: None,
            expiry_date: None,
            added_at: Utc::now(),
        }
    }

    /// True when the item expires within `days` of `now` (already expired included)
    pub fn expires_within(&self, now: DateTime<Utc>, days: i64) -> bool {
        self.expiry_date
            .is_some_and(|expiry| expiry - now <= chrono::Duration::days(days))
    }
}
