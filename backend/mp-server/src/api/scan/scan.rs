//! Ingredient recognition from an uploaded photo

use crate::{ApiError, ApiResult, AppState};

use mp_ai::IngredientScanResult;

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use bytes::BytesMut;

pub const IMAGE_FIELD: &str = "image";

/// POST /api/scan-ingredients
///
/// Expects a multipart form with an `image` part of an `image/*` type. Uploads
/// above `validation.max_upload_bytes` are rejected before the AI call.
pub async fn scan_ingredients(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<IngredientScanResult>> {
    let mut multipart =
        multipart.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let max_bytes = state.validation.max_upload_bytes;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(ApiError::validation(
                format!("Only image uploads are allowed, got '{}'", content_type),
                IMAGE_FIELD,
            ));
        }

        let mut image = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?
        {
            if image.len() + chunk.len() > max_bytes {
                return Err(ApiError::validation(
                    format!("Image exceeds the {} byte upload limit", max_bytes),
                    IMAGE_FIELD,
                ));
            }
            image.extend_from_slice(&chunk);
        }

        if image.is_empty() {
            return Err(ApiError::validation("Image is empty", IMAGE_FIELD));
        }

        log::debug!("Scanning {} byte {} upload", image.len(), content_type);
        let result = state.ai.identify_ingredients(&image).await;
        return Ok(Json(result));
    }

    Err(ApiError::validation("No image uploaded", IMAGE_FIELD))
}
