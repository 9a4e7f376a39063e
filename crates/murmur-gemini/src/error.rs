//! Error taxonomy for Gemini API calls.

/// Statuses that signal availability problems rather than bad input.
const RETRYABLE_STATUSES: [u16; 3] = [503, 429, 404];

/// Failure of an upload or `generateContent` call.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("gemini request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API.
    #[error("gemini api error ({status}): {message}")]
    Api {
        /// HTTP status returned by the service.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// Response parsed cleanly but contained no candidate text.
    #[error("gemini returned no transcription text")]
    EmptyResponse,

    /// Local audio file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeminiError {
    /// True when the failure is availability-related (HTTP 503, 429,
    /// 404) — the call failed for reasons independent of the audio
    /// content itself.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => RETRYABLE_STATUSES.contains(status),
            _ => false,
        }
    }
}

/// Extract a readable message from an API error body.
///
/// Gemini wraps errors as `{"error": {"message": ...}}`; anything else
/// is passed through raw.
#[must_use]
pub fn parse_error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(String::from)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_statuses_are_retryable() {
        for status in [503, 429, 404] {
            let err = GeminiError::Api {
                status,
                message: "x".into(),
            };
            assert!(err.is_retryable(), "status {status} should be retryable");
        }
    }

    #[test]
    fn content_level_statuses_are_not_retryable() {
        for status in [400, 401, 403, 500] {
            let err = GeminiError::Api {
                status,
                message: "x".into(),
            };
            assert!(!err.is_retryable(), "status {status} should not escalate");
        }
    }

    #[test]
    fn transport_and_decode_errors_are_not_retryable() {
        let io = GeminiError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_retryable());
        assert!(!GeminiError::EmptyResponse.is_retryable());
    }

    #[test]
    fn api_error_display_includes_status() {
        let err = GeminiError::Api {
            status: 429,
            message: "quota exceeded".into(),
        };
        let s = err.to_string();
        assert!(s.contains("429"));
        assert!(s.contains("quota exceeded"));
    }

    #[test]
    fn parse_error_message_unwraps_gemini_envelope() {
        let body = r#"{"error": {"code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE"}}"#;
        assert_eq!(parse_error_message(body, 503), "The model is overloaded.");
    }

    #[test]
    fn parse_error_message_passes_through_non_json() {
        assert_eq!(parse_error_message("upstream timeout", 504), "upstream timeout");
    }

    #[test]
    fn parse_error_message_empty_body_falls_back_to_status() {
        assert_eq!(parse_error_message("", 503), "HTTP 503");
    }
}
