use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let store = if state.store.is_available() {
        "operational"
    } else {
        "degraded"
    };
    let ai = if state.ai.is_enabled() {
        "operational"
    } else {
        "fallback_only"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "store": store,
            "ai": ai,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if !state.store.is_available() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Store unavailable").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics exporter not installed").into_response(),
    }
}
