use mp_core::FamilyMember;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub age: Option<i32>,
    pub dietary: Vec<String>,
    pub allergies: Vec<String>,
    pub preferences: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<FamilyMember> for FamilyMemberDto {
    fn from(m: FamilyMember) -> Self {
        Self {
            id: m.id.to_string(),
            user_id: m.user_id.to_string(),
            name: m.name,
            age: m.age,
            dietary: m.dietary,
            allergies: m.allergies,
            preferences: m.preferences,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}
