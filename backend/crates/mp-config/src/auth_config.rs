use crate::{ConfigError, ConfigErrorResult, DEFAULT_REQUIRE_SESSION, DEFAULT_USER_ID};

use serde::Deserialize;
use uuid::Uuid;

/// Session handling. The session layer in front of this server sets
/// `X-User-Id`; without it requests act as `default_user_id` unless
/// `require_session` is on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub require_session: bool,
    pub default_user_id: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            require_session: DEFAULT_REQUIRE_SESSION,
            default_user_id: String::from(DEFAULT_USER_ID),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.default_user_uuid().map(|_| ())
    }

    pub fn default_user_uuid(&self) -> ConfigErrorResult<Uuid> {
        Uuid::parse_str(&self.default_user_id).map_err(|e| {
            ConfigError::auth(format!(
                "auth.default_user_id must be a UUID, got '{}': {}",
                self.default_user_id, e
            ))
        })
    }
}
