#![allow(dead_code)]

//! Test infrastructure for mp-server API tests

use mp_ai::AiGateway;
use mp_config::{AiConfig, CircuitBreakerConfig, RetryConfig, ValidationConfig};
use mp_server::{AppState, SessionSettings, build_router};
use mp_store::{DEMO_USER_ID, MemoryStore};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

pub const MULTIPART_BOUNDARY: &str = "mp-test-boundary";

/// Seeded store, AI disabled, sessions optional
pub fn create_test_app_state() -> AppState {
    let store = MemoryStore::seeded().expect("Failed to seed store");
    create_app_state(store, AiGateway::disabled(), false)
}

pub fn create_app_state(store: MemoryStore, ai: AiGateway, require_session: bool) -> AppState {
    AppState {
        store,
        ai: Arc::new(ai),
        session: SessionSettings {
            require_session,
            default_user_id: DEMO_USER_ID,
        },
        validation: ValidationConfig::default(),
        metrics: None,
    }
}

pub fn create_app(state: AppState) -> Router {
    build_router(state, &[])
}

/// Gateway whose provider always answers 500
pub async fn failing_ai_gateway() -> (MockServer, AiGateway) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let ai = AiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        request_timeout_secs: 5,
        ..AiConfig::default()
    };
    let retry = RetryConfig {
        max_attempts: 1,
        initial_delay_ms: 1,
        jitter: false,
        ..RetryConfig::default()
    };

    let gateway = AiGateway::from_config(&ai, &retry, &CircuitBreakerConfig::default())
        .expect("Failed to build gateway");
    (server, gateway)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    json_request("POST", uri, body)
}

/// Multipart upload with a single file part
pub fn multipart_upload(uri: &str, field: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"upload\"\r\n",
            field
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Send one request and decode the JSON body (`Value::Null` when empty)
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}
