use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Provider request failed: {message} {location}")]
    Http {
        message: String,
        /// Connection, timeout or body decoding failure
        transient: bool,
        location: ErrorLocation,
    },

    #[error("Provider returned HTTP {status}: {body} {location}")]
    UpstreamStatus {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Provider returned no content {location}")]
    EmptyResponse { location: ErrorLocation },

    #[error("Response failed schema validation: {reason} {location}")]
    Schema {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Circuit breaker open, retry after {retry_after_secs}s {location}")]
    CircuitOpen {
        retry_after_secs: u64,
        location: ErrorLocation,
    },

    #[error("AI provider is not configured {location}")]
    Disabled { location: ErrorLocation },
}

impl AiError {
    #[track_caller]
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_response() -> Self {
        Self::EmptyResponse {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn disabled() -> Self {
        Self::Disabled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether a retry has a chance of succeeding: network failures,
    /// timeouts, rate limiting and 5xx responses.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { transient, .. } => *transient,
            Self::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            Self::EmptyResponse { .. }
            | Self::Schema { .. }
            | Self::CircuitOpen { .. }
            | Self::Disabled { .. } => false,
        }
    }

    /// Short label used in metric names and log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::EmptyResponse { .. } => "empty_response",
            Self::Schema { .. } => "schema",
            Self::CircuitOpen { .. } => "circuit_open",
            Self::Disabled { .. } => "disabled",
        }
    }
}

impl From<reqwest::Error> for AiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            transient: err.is_timeout() || err.is_connect() || err.is_request() || err.is_body(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::Schema {
            reason: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AiError>;
