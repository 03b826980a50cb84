use crate::ConfigErrorResult;
use crate::error::ensure_in_range;

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const MAX_ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=10;
pub const INITIAL_DELAY_MS_RANGE: RangeInclusive<u64> = 10..=10_000;
pub const MAX_DELAY_SECS_RANGE: RangeInclusive<u64> = 1..=60;
pub const BACKOFF_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// How often a failed AI call is repeated before its fallback is used.
///
/// Attempts include the first call. Schema errors are never retried.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    /// Ceiling for the backoff delay
    pub max_delay_secs: u64,
    pub backoff_multiplier: f64,
    /// Spread each delay by a random factor of 0.5-1.5
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            initial_delay_ms: 250,
            max_delay_secs: 5,
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        ensure_in_range("retry.max_attempts", self.max_attempts, MAX_ATTEMPTS_RANGE)?;
        ensure_in_range(
            "retry.initial_delay_ms",
            self.initial_delay_ms,
            INITIAL_DELAY_MS_RANGE,
        )?;
        ensure_in_range("retry.max_delay_secs", self.max_delay_secs, MAX_DELAY_SECS_RANGE)?;
        ensure_in_range(
            "retry.backoff_multiplier",
            self.backoff_multiplier,
            BACKOFF_MULTIPLIER_RANGE,
        )
    }
}
