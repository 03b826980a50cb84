use mp_ai::AiGateway;
use mp_config::ValidationConfig;
use mp_store::MemoryStore;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use uuid::Uuid;

/// How requests are attributed to a user
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Reject requests without an `X-User-Id` header
    pub require_session: bool,
    /// Identity used when the header is absent and sessions are optional
    pub default_user_id: Uuid,
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub ai: Arc<AiGateway>,
    pub session: SessionSettings,
    pub validation: ValidationConfig,
    pub metrics: Option<PrometheusHandle>,
}
