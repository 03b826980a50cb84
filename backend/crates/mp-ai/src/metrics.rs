use metrics::{counter, histogram};

/// Metrics for AI gateway calls
#[derive(Clone)]
pub struct AiMetrics {
    prefix: &'static str,
}

impl AiMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "meal_planner.ai",
        }
    }

    /// Record a provider call that returned a validated result
    pub fn call_succeeded(&self, operation: &str, duration: std::time::Duration) {
        counter!(format!("{}.calls", self.prefix)).increment(1);
        counter!(format!("{}.calls.{}", self.prefix, operation)).increment(1);
        histogram!(format!("{}.latency_ms", self.prefix)).record(duration.as_millis() as f64);
    }

    /// Record an operation answered with its fixed fallback
    pub fn fallback_used(&self, operation: &str, reason: &str) {
        counter!(format!("{}.fallbacks", self.prefix)).increment(1);
        counter!(format!("{}.fallbacks.{}", self.prefix, operation)).increment(1);
        counter!(format!("{}.fallbacks.reason.{}", self.prefix, reason)).increment(1);
    }
}

impl Default for AiMetrics {
    fn default() -> Self {
        Self::new()
    }
}
