use crate::ConfigErrorResult;
use crate::error::ensure_in_range;

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const FAILURE_THRESHOLD_RANGE: RangeInclusive<u32> = 1..=100;
pub const OPEN_DURATION_SECS_RANGE: RangeInclusive<u64> = 1..=300;
pub const HALF_OPEN_SUCCESS_RANGE: RangeInclusive<u32> = 1..=50;
pub const FAILURE_WINDOW_SECS_RANGE: RangeInclusive<u64> = 1..=600;

/// Circuit breaker around the AI provider.
///
/// While open, AI operations skip the provider and answer with fallbacks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CircuitBreakerConfig {
    /// Provider failures inside `failure_window_secs` that trip the breaker
    pub failure_threshold: u32,
    /// How long fallbacks are served before the provider is probed again
    pub open_duration_secs: u64,
    /// Successful probes needed before the provider is trusted again
    pub half_open_success_threshold: u32,
    pub failure_window_secs: u64,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            open_duration_secs: 30,
            half_open_success_threshold: 2,
            failure_window_secs: 60,
        }
    }
}

impl CircuitBreakerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        ensure_in_range(
            "circuit_breaker.failure_threshold",
            self.failure_threshold,
            FAILURE_THRESHOLD_RANGE,
        )?;
        ensure_in_range(
            "circuit_breaker.open_duration_secs",
            self.open_duration_secs,
            OPEN_DURATION_SECS_RANGE,
        )?;
        ensure_in_range(
            "circuit_breaker.half_open_success_threshold",
            self.half_open_success_threshold,
            HALF_OPEN_SUCCESS_RANGE,
        )?;
        ensure_in_range(
            "circuit_breaker.failure_window_secs",
            self.failure_window_secs,
            FAILURE_WINDOW_SECS_RANGE,
        )
    }
}
