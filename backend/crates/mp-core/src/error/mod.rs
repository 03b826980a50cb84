use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid difficulty: {value} {location}")]
    InvalidDifficulty {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid meal type: {value} {location}")]
    InvalidMealType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid day of week: {value} (expected 0-6) {location}")]
    InvalidDayOfWeek { value: i64, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
