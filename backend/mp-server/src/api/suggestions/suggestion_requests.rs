use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestionContext {
    /// Client clock; its offset decides the time-of-day tip
    pub current_time: Option<DateTime<FixedOffset>>,
}

/// Body of POST /api/suggestions/generate
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateSuggestionsRequest {
    pub context: SuggestionContext,
}

/// Body of POST /api/suggestions/dismiss
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DismissSuggestionRequest {
    pub suggestion_id: String,
}
