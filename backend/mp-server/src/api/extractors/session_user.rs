//! Request identity

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The user a request acts for.
///
/// Read from the `X-User-Id` header set by the session layer. When sessions
/// are optional a missing header falls back to the configured default user;
/// when they are required a missing or malformed header is rejected with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUser(pub Uuid);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(USER_ID_HEADER)
                .and_then(|value| value.to_str().ok());

            if let Some(raw) = header
                && let Ok(user_id) = Uuid::parse_str(raw.trim())
            {
                log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, user_id);
                return Ok(SessionUser(user_id));
            }

            if let Some(raw) = header {
                log::warn!("Invalid UUID in {} header: {}", USER_ID_HEADER, raw);
            }

            if state.session.require_session {
                return Err(ApiError::unauthorized("A valid session is required"));
            }

            Ok(SessionUser(state.session.default_user_id))
        }
    }
}
