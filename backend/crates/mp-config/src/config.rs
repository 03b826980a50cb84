use crate::{
    AiConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CircuitBreakerConfig, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, LoggingConfig, RetryConfig, ServerConfig, StoreConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub ai: AiConfig,
    pub retry: RetryConfig,
    pub circuit_breaker: CircuitBreakerConfig,
    pub validation: ValidationConfig,
    pub store: StoreConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MP_CONFIG_DIR env var, else use ./.meal-planner/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MP_* environment variable overrides
    /// 5. Fill ai.api_key from OPENAI_API_KEY when still unset
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: MP_CONFIG_DIR env var > ./.meal-planner/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.ai.validate()?;
        self.retry.validate()?;
        self.circuit_breaker.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Absolute path of the log directory
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (shutdown grace {}s)",
            self.server.host, self.server.port, self.server.shutdown_timeout_secs
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  auth: session {} (default user {})",
            if self.auth.require_session {
                "required"
            } else {
                "optional"
            },
            self.auth.default_user_id
        );

        info!(
            "  ai: {} (models: vision={}, text={}, chat={}; timeout={}s; key {})",
            if self.ai.is_active() {
                "enabled"
            } else {
                "fallback only"
            },
            self.ai.vision_model,
            self.ai.text_model,
            self.ai.chat_model,
            self.ai.request_timeout_secs,
            if self.ai.api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );

        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier
        );

        info!(
            "  circuit_breaker: threshold={}, open={}s, window={}s",
            self.circuit_breaker.failure_threshold,
            self.circuit_breaker.open_duration_secs,
            self.circuit_breaker.failure_window_secs
        );

        info!(
            "  validation: upload={}B, name={}, message={}, page={}",
            self.validation.max_upload_bytes,
            self.validation.max_name_length,
            self.validation.max_message_length,
            self.validation.max_page_size
        );

        info!("  store: seed_demo_data={}", self.store.seed_demo_data);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("MP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("MP_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "MP_SERVER_SHUTDOWN_TIMEOUT_SECS",
            &mut self.server.shutdown_timeout_secs,
        );
        Self::apply_env_list(
            "MP_SERVER_CORS_ALLOWED_ORIGINS",
            &mut self.server.cors_allowed_origins,
        );

        // Logging
        Self::apply_env_parse("MP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MP_LOG_FILE", &mut self.logging.file);

        // Auth
        Self::apply_env_bool("MP_AUTH_REQUIRE_SESSION", &mut self.auth.require_session);
        Self::apply_env_string("MP_AUTH_DEFAULT_USER_ID", &mut self.auth.default_user_id);

        // AI
        Self::apply_env_bool("MP_AI_ENABLED", &mut self.ai.enabled);
        Self::apply_env_option_string("MP_AI_API_KEY", &mut self.ai.api_key);
        if self.ai.api_key.is_none() {
            Self::apply_env_option_string("OPENAI_API_KEY", &mut self.ai.api_key);
        }
        Self::apply_env_string("MP_AI_BASE_URL", &mut self.ai.base_url);
        Self::apply_env_string("MP_AI_VISION_MODEL", &mut self.ai.vision_model);
        Self::apply_env_string("MP_AI_TEXT_MODEL", &mut self.ai.text_model);
        Self::apply_env_string("MP_AI_CHAT_MODEL", &mut self.ai.chat_model);
        Self::apply_env_parse(
            "MP_AI_REQUEST_TIMEOUT_SECS",
            &mut self.ai.request_timeout_secs,
        );

        // Retry
        Self::apply_env_parse("MP_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "MP_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("MP_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "MP_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("MP_RETRY_JITTER", &mut self.retry.jitter);

        // Circuit Breaker
        Self::apply_env_parse(
            "MP_CB_FAILURE_THRESHOLD",
            &mut self.circuit_breaker.failure_threshold,
        );
        Self::apply_env_parse(
            "MP_CB_OPEN_DURATION_SECS",
            &mut self.circuit_breaker.open_duration_secs,
        );
        Self::apply_env_parse(
            "MP_CB_HALF_OPEN_SUCCESS_THRESHOLD",
            &mut self.circuit_breaker.half_open_success_threshold,
        );
        Self::apply_env_parse(
            "MP_CB_FAILURE_WINDOW_SECS",
            &mut self.circuit_breaker.failure_window_secs,
        );

        // Validation
        Self::apply_env_parse(
            "MP_VALIDATION_MAX_UPLOAD_BYTES",
            &mut self.validation.max_upload_bytes,
        );
        Self::apply_env_parse(
            "MP_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "MP_VALIDATION_MAX_MESSAGE_LENGTH",
            &mut self.validation.max_message_length,
        );
        Self::apply_env_parse(
            "MP_VALIDATION_MAX_PAGE_SIZE",
            &mut self.validation.max_page_size,
        );

        // Store
        Self::apply_env_bool("MP_STORE_SEED_DEMO_DATA", &mut self.store.seed_demo_data);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply a comma-separated list override
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
