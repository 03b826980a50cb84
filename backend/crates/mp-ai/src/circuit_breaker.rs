use crate::{AiError, AiResult};

use std::panic::Location;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use error_location::ErrorLocation;
use mp_config::CircuitBreakerConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircuitState {
    /// Normal operation - requests flow through
    Closed,
    /// Too many failures - requests rejected immediately
    Open,
    /// Probing whether the provider recovered
    HalfOpen,
}

/// Runtime form of the circuit breaker configuration
#[derive(Debug, Clone)]
pub struct CircuitBreakerSettings {
    pub failure_threshold: u32,
    pub open_duration: Duration,
    pub half_open_success_threshold: u32,
    pub failure_window: Duration,
}

impl Default for CircuitBreakerSettings {
    fn default() -> Self {
        Self::from(&CircuitBreakerConfig::default())
    }
}

impl From<&CircuitBreakerConfig> for CircuitBreakerSettings {
    fn from(config: &CircuitBreakerConfig) -> Self {
        Self {
            failure_threshold: config.failure_threshold,
            open_duration: Duration::from_secs(config.open_duration_secs),
            half_open_success_threshold: config.half_open_success_threshold,
            failure_window: Duration::from_secs(config.failure_window_secs),
        }
    }
}

/// Thread-safe circuit breaker.
///
/// Timestamps are milliseconds since the breaker was created, read from a
/// monotonic clock.
pub struct CircuitBreaker {
    settings: CircuitBreakerSettings,
    started: Instant,
    state: RwLock<CircuitState>,
    failure_count: AtomicU32,
    success_count: AtomicU32,
    last_failure_ms: AtomicU64,
    opened_at_ms: AtomicU64,
}

impl CircuitBreaker {
    pub fn new(settings: CircuitBreakerSettings) -> Self {
        Self {
            settings,
            started: Instant::now(),
            state: RwLock::new(CircuitState::Closed),
            failure_count: AtomicU32::new(0),
            success_count: AtomicU32::new(0),
            last_failure_ms: AtomicU64::new(0),
            opened_at_ms: AtomicU64::new(0),
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn set_state(&self, next: CircuitState) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }

    /// Check if a request should be allowed
    #[track_caller]
    pub fn allow_request(&self) -> AiResult<()> {
        match self.state() {
            CircuitState::Closed | CircuitState::HalfOpen => Ok(()),
            CircuitState::Open => {
                let open_ms = self.settings.open_duration.as_millis() as u64;
                let elapsed = self
                    .now_ms()
                    .saturating_sub(self.opened_at_ms.load(Ordering::SeqCst));

                if elapsed >= open_ms {
                    let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
                    if *guard == CircuitState::Open {
                        *guard = CircuitState::HalfOpen;
                        self.success_count.store(0, Ordering::SeqCst);
                        log::info!("AI circuit breaker transitioning to HalfOpen");
                    }
                    Ok(())
                } else {
                    Err(AiError::CircuitOpen {
                        retry_after_secs: (open_ms - elapsed).div_ceil(1000),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }

    pub fn record_success(&self) {
        match self.state() {
            CircuitState::Closed => {
                self.failure_count.store(0, Ordering::SeqCst);
            }
            CircuitState::HalfOpen => {
                let successes = self.success_count.fetch_add(1, Ordering::SeqCst) + 1;
                if successes >= self.settings.half_open_success_threshold {
                    self.set_state(CircuitState::Closed);
                    self.failure_count.store(0, Ordering::SeqCst);
                    log::info!("AI circuit breaker closed after {} successes", successes);
                }
            }
            CircuitState::Open => {}
        }
    }

    pub fn record_failure(&self) {
        let now = self.now_ms();
        let last_failure = self.last_failure_ms.swap(now, Ordering::SeqCst);

        if now.saturating_sub(last_failure) > self.settings.failure_window.as_millis() as u64 {
            self.failure_count.store(0, Ordering::SeqCst);
        }

        let failures = self.failure_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.state() {
            CircuitState::Closed => {
                if failures >= self.settings.failure_threshold {
                    self.set_state(CircuitState::Open);
                    self.opened_at_ms.store(now, Ordering::SeqCst);
                    log::warn!("AI circuit breaker OPEN after {} failures", failures);
                }
            }
            CircuitState::HalfOpen => {
                // A single failure while probing reopens the circuit
                self.set_state(CircuitState::Open);
                self.opened_at_ms.store(now, Ordering::SeqCst);
                log::warn!("AI circuit breaker reopened after failure in HalfOpen state");
            }
            CircuitState::Open => {}
        }
    }

    pub fn state(&self) -> CircuitState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}
