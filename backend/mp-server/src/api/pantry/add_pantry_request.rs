use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of POST /api/pantry/add
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPantryEntry {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct AddPantryRequest {
    pub ingredients: Vec<NewPantryEntry>,
}
