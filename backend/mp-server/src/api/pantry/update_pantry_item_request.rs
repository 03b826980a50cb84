use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Replaces quantity, unit and expiry; omitted fields are cleared
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatePantryItemRequest {
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub expiry_date: Option<DateTime<Utc>>,
}
