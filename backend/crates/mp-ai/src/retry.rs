use crate::{AiError, AiResult};

use std::time::Duration;

use mp_config::RetryConfig;
use tokio::time::sleep;

/// Runtime form of [`RetryConfig`]
#[derive(Debug, Clone)]
pub struct RetrySettings {
    /// Attempts including the first call
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetrySettings {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            max_delay: Duration::from_secs(config.max_delay_secs),
            backoff_multiplier: config.backoff_multiplier,
            jitter: config.jitter,
        }
    }
}

impl RetrySettings {
    /// Pause before retry number `retry` (1-based), before jitter.
    /// Grows geometrically and never exceeds `max_delay`.
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let secs = self.initial_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        if secs >= self.max_delay.as_secs_f64() {
            return self.max_delay;
        }
        Duration::from_secs_f64(secs)
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if !self.jitter {
            return delay;
        }
        delay.mul_f64(0.5 + rand::random::<f64>())
    }
}

/// Run a provider call, repeating it while it fails with a retryable
/// [`AiError`] and attempts remain.
pub async fn with_retry<F, Fut, T>(
    settings: &RetrySettings,
    operation: &str,
    mut call: F,
) -> AiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AiResult<T>>,
{
    let mut attempt = 1;

    loop {
        let error: AiError = match call().await {
            Ok(value) => {
                if attempt > 1 {
                    log::info!("AI {} recovered on attempt {}", operation, attempt);
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if !error.is_retryable() || attempt >= settings.max_attempts {
            log::debug!("AI {} failed after {} attempt(s): {}", operation, attempt, error);
            return Err(error);
        }

        let delay = settings.jittered(settings.backoff(attempt));
        log::debug!(
            "AI {} attempt {} failed ({}), retrying in {:?}",
            operation,
            attempt,
            error.kind(),
            delay
        );
        sleep(delay).await;
        attempt += 1;
    }
}
