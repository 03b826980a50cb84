use crate::ConfigErrorResult;
use crate::error::ensure_in_range;

use serde::Deserialize;

// Validation constraints
pub const MIN_UPLOAD_BYTES: usize = 1024;
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const MIN_MESSAGE_LENGTH: usize = 1;
pub const MAX_MESSAGE_LENGTH: usize = 20000;
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2000;

pub const MIN_PAGE_SIZE: usize = 1;
pub const MAX_PAGE_SIZE: usize = 1000;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Request field limits enforced by the HTTP layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum size of an uploaded ingredient photo
    pub max_upload_bytes: usize,
    /// Maximum length of ingredient, family member and list names
    pub max_name_length: usize,
    /// Maximum length of a chat message
    pub max_message_length: usize,
    /// Upper bound for `limit` on paged listings
    pub max_page_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let limits = [
            ("validation.max_upload_bytes", self.max_upload_bytes, MIN_UPLOAD_BYTES..=MAX_UPLOAD_BYTES),
            ("validation.max_name_length", self.max_name_length, MIN_NAME_LENGTH..=MAX_NAME_LENGTH),
            (
                "validation.max_message_length",
                self.max_message_length,
                MIN_MESSAGE_LENGTH..=MAX_MESSAGE_LENGTH,
            ),
            ("validation.max_page_size", self.max_page_size, MIN_PAGE_SIZE..=MAX_PAGE_SIZE),
        ];

        for (key, value, range) in limits {
            ensure_in_range(key, value, range)?;
        }

        Ok(())
    }
}
