mod ai_config;
mod auth_config;
mod circuit_breaker_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod server_config;
mod store_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use ai_config::AiConfig;
pub use auth_config::AuthConfig;
pub use circuit_breaker_config::CircuitBreakerConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "MP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".meal-planner";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_REQUIRE_SESSION: bool = false;
const DEFAULT_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

const DEFAULT_SEED_DEMO_DATA: bool = true;
