use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    /// Legacy single-field display name
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, email: Option<String>, name: Option<String>) -> Self {
        Self {
            id,
            email,
            first_name: None,
            last_name: None,
            profile_image_url: None,
            name,
            created_at: Utc::now(),
        }
    }

    /// Name to greet the user with: display name, then first/last, then email
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }

        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => self.email.clone(),
        }
    }
}
