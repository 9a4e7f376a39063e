//! Route table and middleware stack.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::verify_secret;
use crate::handlers;
use crate::state::AppState;

/// Maximum accepted upload size in bytes (50 MB).
pub const MAX_AUDIO_SIZE: usize = 50 * 1024 * 1024;

/// Build the service router.
///
/// The secret guard wraps only the transcription route; the service
/// root stays open so callers can probe liveness and guard status.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let guarded = Router::new()
        .route("/transcribe", post(handlers::transcribe))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            verify_secret,
        ));

    Router::new()
        .route("/", get(handlers::root))
        .merge(guarded)
        .layer(DefaultBodyLimit::max(MAX_AUDIO_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
