//! Helpers for reading loosely-typed model output.

use serde_json::Value;

/// Non-blank text. Numbers are rendered as text.
pub(crate) fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric value, also accepted when quoted.
pub(crate) fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Positive whole number; zero and negatives count as missing.
pub(crate) fn positive_u32(value: Option<&Value>) -> Option<u32> {
    number(value)
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map(|n| n.round().min(u32::MAX as f64) as u32)
}

/// Text entries of an array; anything else yields an empty list.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(|v| text(Some(v))).collect(),
        _ => Vec::new(),
    }
}
