//! Input checks shared by the handlers

use crate::{ApiError, ApiResult};

/// Trimmed, non-empty and at most `max_len` characters
pub fn required_text(value: &str, field: &str, max_len: usize) -> ApiResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{} is required", field), field));
    }
    if trimmed.chars().count() > max_len {
        return Err(ApiError::validation(
            format!("{} must be at most {} characters", field, max_len),
            field,
        ));
    }

    Ok(trimmed.to_string())
}

/// Like [`required_text`] but blank values become `None`
pub fn optional_text(value: Option<&str>, field: &str, max_len: usize) -> ApiResult<Option<String>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => required_text(v, field, max_len).map(Some),
        None => Ok(None),
    }
}

/// Trims every entry and drops blanks
pub fn text_list(values: &[String], field: &str, max_len: usize) -> ApiResult<Vec<String>> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| required_text(v, field, max_len))
        .collect()
}

pub fn in_range(value: i64, field: &str, min: i64, max: i64) -> ApiResult<i64> {
    if value < min || value > max {
        return Err(ApiError::validation(
            format!("{} must be between {} and {}", field, min, max),
            field,
        ));
    }
    Ok(value)
}
