use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_AI_ENABLED: bool = true;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_VISION_MODEL: &str = "gpt-5";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-5";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// LLM provider settings. Without an API key every AI operation answers
/// with its fixed fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    /// OpenAI-compatible API root; `/chat/completions` is appended
    pub base_url: String,
    pub vision_model: String,
    pub text_model: String,
    pub chat_model: String,
    pub request_timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AI_ENABLED,
            api_key: None,
            base_url: String::from(DEFAULT_BASE_URL),
            vision_model: String::from(DEFAULT_VISION_MODEL),
            text_model: String::from(DEFAULT_TEXT_MODEL),
            chat_model: String::from(DEFAULT_CHAT_MODEL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AiConfig {
    /// True when calls should reach the provider
    pub fn is_active(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::ai(format!(
                "ai.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ai(format!(
                "ai.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        for (field, model) in [
            ("vision_model", &self.vision_model),
            ("text_model", &self.text_model),
            ("chat_model", &self.chat_model),
        ] {
            if model.trim().is_empty() {
                return Err(ConfigError::ai(format!("ai.{} must not be empty", field)));
            }
        }

        Ok(())
    }
}
