use crate::AiResult;
use crate::models::lenient;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 1.0;
/// Used when the model omits a confidence value
pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const UNKNOWN_INGREDIENT_NAME: &str = "Unknown ingredient";
pub const UNKNOWN_INGREDIENT_CATEGORY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedIngredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub confidence: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientScanResult {
    pub ingredients: Vec<DetectedIngredient>,
    pub total_confidence: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawScan {
    ingredients: Option<Vec<RawIngredient>>,
    total_confidence: Option<Value>,
    suggestions: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawIngredient {
    name: Option<Value>,
    quantity: Option<Value>,
    unit: Option<Value>,
    confidence: Option<Value>,
    category: Option<Value>,
}

/// Missing, zero or non-finite values become 0.5, then everything is
/// clamped into [0.1, 1.0]. A model reporting 0 means it gave no score.
pub fn clamp_confidence(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

impl IngredientScanResult {
    /// Validate and normalise the vision model's JSON reply
    pub fn from_model_text(content: &str) -> AiResult<Self> {
        let raw: RawScan = serde_json::from_str(content)?;

        let ingredients = raw
            .ingredients
            .unwrap_or_default()
            .into_iter()
            .map(|ing| DetectedIngredient {
                name: lenient::text(ing.name.as_ref())
                    .unwrap_or_else(|| UNKNOWN_INGREDIENT_NAME.to_string()),
                quantity: lenient::text(ing.quantity.as_ref()),
                unit: lenient::text(ing.unit.as_ref()),
                confidence: clamp_confidence(lenient::number(ing.confidence.as_ref())),
                category: lenient::text(ing.category.as_ref())
                    .unwrap_or_else(|| UNKNOWN_INGREDIENT_CATEGORY.to_string()),
            })
            .collect();

        Ok(Self {
            ingredients,
            total_confidence: clamp_confidence(lenient::number(raw.total_confidence.as_ref())),
            suggestions: lenient::string_list(raw.suggestions.as_ref()),
        })
    }
}
