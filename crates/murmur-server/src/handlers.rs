//! HTTP handlers for the service root and the transcription endpoint.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, info, instrument};
use uuid::Uuid;

use murmur_cascade::{CascadeError, run_cascade};

use crate::scratch::ScratchFile;
use crate::state::AppState;

/// Liveness plus whether the secret guard is enforcing.
pub async fn root(State(state): State<AppState>) -> Response {
    let security = if state.settings.security_enabled() {
        "Enabled"
    } else {
        "Disabled"
    };
    (
        StatusCode::OK,
        Json(json!({"status": "Online", "security": security})),
    )
        .into_response()
}

/// Accept one multipart audio file, run the cascade, and report the
/// outcome.
///
/// The scratch file is removed on every path below — success, handled
/// error, or early return — by [`ScratchFile`]'s `Drop`.
#[instrument(skip_all, fields(request_id = %Uuid::now_v7()))]
pub async fn transcribe(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let upload = match read_file_field(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    if !upload.mime_type.starts_with("audio/") {
        info!(mime_type = %upload.mime_type, "rejected non-audio upload");
        return error_body("Invalid file type.");
    }

    let scratch = match ScratchFile::write(
        &state.settings.scratch_dir,
        &upload.filename,
        &upload.bytes,
    ) {
        Ok(scratch) => scratch,
        Err(e) => {
            error!(error = %e, "failed to persist upload");
            return error_body(&e.to_string());
        }
    };

    match run_cascade(
        state.backend.as_ref(),
        &state.models,
        scratch.path(),
        &upload.mime_type,
    )
    .await
    {
        Ok(result) => {
            info!(tier = %result.tier, model = %result.model, "transcription succeeded");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "transcription": result.text,
                    "model_used": result.model,
                })),
            )
                .into_response()
        }
        Err(CascadeError::Exhausted { source }) => {
            error!(error = %source, "all model tiers failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"detail": "Server Overloaded. Please try again."})),
            )
                .into_response()
        }
        Err(CascadeError::Fatal(err)) => {
            error!(error = %err, "transcription failed");
            error_body(&err.message)
        }
    }
}

/// One file pulled out of the multipart body.
struct Upload {
    filename: String,
    mime_type: String,
    bytes: Vec<u8>,
}

/// Take the first file-bearing field; non-file fields are skipped.
async fn read_file_field(multipart: &mut Multipart) -> Result<Upload, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(error_body("No file in request.")),
            Err(e) => return Err(error_body(&e.to_string())),
        };
        let Some(filename) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        match field.bytes().await {
            Ok(bytes) => {
                return Ok(Upload {
                    filename,
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            Err(e) => return Err(error_body(&e.to_string())),
        }
    }
}

/// Handler-level failure shape: HTTP 200 with a status/message body.
fn error_body(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(json!({"status": "error", "message": message})),
    )
        .into_response()
}
