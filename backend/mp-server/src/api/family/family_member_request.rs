use serde::Deserialize;

/// Body of POST /api/family and PUT /api/family/{id}
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberRequest {
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
