//! Session handling and health endpoints
mod common;

use crate::common::{create_app, create_app_state, create_test_app_state, get, send};

use mp_ai::AiGateway;
use mp_server::USER_ID_HEADER;
use mp_store::{DEMO_USER_ID, MemoryStore};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

fn required_session_state() -> mp_server::AppState {
    let store = MemoryStore::seeded().unwrap();
    create_app_state(store, AiGateway::disabled(), true)
}

#[tokio::test]
async fn test_missing_session_header_returns_401_when_required() {
    let state = required_session_state();

    let (status, json) = send(create_app(state), get("/api/pantry")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_session_header_accepted_when_required() {
    let state = required_session_state();
    let request = Request::builder()
        .uri("/api/pantry")
        .header(USER_ID_HEADER, DEMO_USER_ID.to_string())
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(create_app(state), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_missing_header_uses_default_user_when_optional() {
    let state = create_test_app_state();

    let (status, json) = send(create_app(state), get("/api/auth/user")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], DEMO_USER_ID.to_string());
    assert_eq!(json["displayName"], "Sarah");
}

#[tokio::test]
async fn test_unknown_user_returns_404() {
    let state = create_test_app_state();
    let request = Request::builder()
        .uri("/api/auth/user")
        .header(USER_ID_HEADER, uuid::Uuid::new_v4().to_string())
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(create_app(state), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_components() {
    let state = create_test_app_state();

    let (status, json) = send(create_app(state), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["store"], "operational");
    assert_eq!(json["components"]["ai"], "fallback_only");
}

#[tokio::test]
async fn test_ready_and_live_probes() {
    let state = create_test_app_state();

    let (live, _) = send(create_app(state.clone()), get("/live")).await;
    let (ready, _) = send(create_app(state), get("/ready")).await;

    assert_eq!(live, StatusCode::OK);
    assert_eq!(ready, StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_without_exporter_returns_404() {
    let state = create_test_app_state();

    let (status, _) = send(create_app(state), get("/metrics")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
