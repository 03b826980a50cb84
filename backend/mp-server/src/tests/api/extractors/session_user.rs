use crate::{AppState, SessionSettings, SessionUser};

use mp_ai::AiGateway;
use mp_config::ValidationConfig;
use mp_store::{DEMO_USER_ID, MemoryStore};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request, http::StatusCode};

fn create_test_state(require_session: bool) -> AppState {
    AppState {
        store: MemoryStore::new(),
        ai: Arc::new(AiGateway::disabled()),
        session: SessionSettings {
            require_session,
            default_user_id: DEMO_USER_ID,
        },
        validation: ValidationConfig::default(),
        metrics: None,
    }
}

async fn extract(state: &AppState, header: Option<&str>) -> Result<SessionUser, crate::ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("X-User-Id", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    SessionUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state(true);

    let result = extract(&state, Some("12345678-1234-1234-1234-123456789abc")).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_falls_back_to_default_user_when_missing() {
    let state = create_test_state(false);

    let result = extract(&state, None).await;

    assert_eq!(result.unwrap().0, DEMO_USER_ID);
}

#[tokio::test]
async fn test_extractor_falls_back_when_header_invalid_uuid() {
    let state = create_test_state(false);

    let result = extract(&state, Some("not-a-valid-uuid")).await;

    assert_eq!(result.unwrap().0, DEMO_USER_ID);
}

#[tokio::test]
async fn test_extractor_rejects_missing_header_when_session_required() {
    let state = create_test_state(true);

    let result = extract(&state, None).await;

    assert_eq!(result.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_extractor_rejects_invalid_header_when_session_required() {
    let state = create_test_state(true);

    let result = extract(&state, Some("not-a-valid-uuid")).await;

    assert_eq!(result.unwrap_err().status(), StatusCode::UNAUTHORIZED);
}
