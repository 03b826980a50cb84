use crate::error::ensure_in_range;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, MIN_PORT};

use serde::Deserialize;

pub const MIN_SHUTDOWN_TIMEOUT_SECS: u64 = 1;
pub const MAX_SHUTDOWN_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Grace period for in-flight requests after a shutdown signal
    pub shutdown_timeout_secs: u64,
    /// Origins allowed by CORS; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick a free port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        ensure_in_range(
            "server.shutdown_timeout_secs",
            self.shutdown_timeout_secs,
            MIN_SHUTDOWN_TIMEOUT_SECS..=MAX_SHUTDOWN_TIMEOUT_SECS,
        )
    }
}
