use std::fmt::Display;
use std::ops::RangeInclusive;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an AI provider error
    #[track_caller]
    pub fn ai<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "AI",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an auth error
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Auth",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;

/// Reject `value` unless it lies in `range`; `key` is the dotted setting name
#[track_caller]
pub(crate) fn ensure_in_range<T>(key: &str, value: T, range: RangeInclusive<T>) -> ConfigErrorResult<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }

    Err(ConfigError::config(format!(
        "{} must be {}-{}, got {}",
        key,
        range.start(),
        range.end(),
        value
    )))
}
