use mp_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} references missing {target} {id} {location}")]
    DanglingReference {
        entity: &'static str,
        target: &'static str,
        id: Uuid,
        location: ErrorLocation,
    },

    #[error("Integrity violation: {message} {location}")]
    Integrity {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Store lock poisoned {location}")]
    LockPoisoned { location: ErrorLocation },

    #[error("{source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn dangling(entity: &'static str, target: &'static str, id: Uuid) -> Self {
        Self::DanglingReference {
            entity,
            target,
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
