use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFavorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl UserFavorite {
    pub fn new(user_id: Uuid, recipe_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            recipe_id,
            created_at: Utc::now(),
        }
    }
}
