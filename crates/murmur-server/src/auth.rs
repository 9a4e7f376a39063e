//! Shared-secret guard for the transcription endpoint.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

use crate::state::AppState;

/// Header carrying the shared secret.
pub const SECRET_HEADER: &str = "x-app-secret";

/// Reject requests whose `X-App-Secret` header does not exactly match
/// the configured secret. No-op when no secret is configured (dev
/// mode). Runs before the upload handler touches the request body, so
/// rejected requests never allocate a scratch file.
pub async fn verify_secret(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.settings.app_secret.as_deref() else {
        return next.run(request).await;
    };

    let supplied = request
        .headers()
        .get(SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    if supplied == Some(expected) {
        return next.run(request).await;
    }

    warn!(
        supplied = supplied.unwrap_or("<missing>"),
        "rejected request with invalid secret"
    );
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Unauthorized: Invalid Secret"})),
    )
        .into_response()
}
