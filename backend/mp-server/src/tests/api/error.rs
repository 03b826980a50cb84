use crate::ApiError;

use mp_core::CoreError;
use mp_store::StoreError;

use std::panic::Location;
use std::str::FromStr;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use axum::http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Recipe not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Recipe not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("name is required", "name");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("A valid session is required")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = ApiError::Internal {
        message: "Store lock poisoned".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "An internal error occurred");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let error: ApiError = uuid_err.into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.code(), "VALIDATION_ERROR");
}

#[test]
fn test_store_not_found_converts_to_404() {
    let error: ApiError = StoreError::not_found("Meal plan", "abc").into();

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_invalid_meal_type_converts_to_validation_with_field() {
    let core_err: CoreError = mp_core::MealType::from_str("brunch").unwrap_err();
    let error: ApiError = core_err.into();

    match error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("mealType"));
            assert!(message.contains("brunch"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_store_core_error_converts_to_validation() {
    let core_err = mp_core::Meal::new(uuid::Uuid::new_v4(), uuid::Uuid::new_v4(), 9, mp_core::MealType::Lunch)
        .unwrap_err();
    let error: ApiError = StoreError::from(core_err).into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.code(), "VALIDATION_ERROR");
}
