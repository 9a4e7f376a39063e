//! HTTP client for the Gemini Files and `generateContent` APIs.

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use murmur_cascade::{BackendError, TRANSCRIBE_PROMPT, TranscribeBackend};

use crate::error::{GeminiError, parse_error_message};
use crate::types::{Content, FileHandle, GenerateRequest, GenerateResponse, Part, UploadResponse};

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Header carrying the API key. Never logged.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for the Gemini API.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// API origin; tests point this at a local mock.
    pub base_url: String,
}

impl GeminiConfig {
    /// Config against the production origin.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    /// Override the API origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// Manual Debug keeps the API key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Gemini REST client.
#[derive(Debug)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client with its own connection pool.
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client with a shared `reqwest` client.
    #[must_use]
    pub fn with_client(config: GeminiConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Upload the audio file to the Files API (raw upload protocol)
    /// and return the remote handle.
    #[instrument(skip(self, audio_path))]
    pub async fn upload_file(
        &self,
        audio_path: &Path,
        mime_type: &str,
    ) -> Result<FileHandle, GeminiError> {
        let bytes = tokio::fs::read(audio_path).await?;
        let url = format!("{}/upload/v1beta/files", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header("X-Goog-Upload-Protocol", "raw")
            .header(CONTENT_TYPE, mime_type)
            .body(bytes)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let upload: UploadResponse = response.json().await?;
        debug!(file = %upload.file.name, "audio uploaded");
        Ok(upload.file)
    }

    /// Ask `model` to act on the uploaded file with `prompt`.
    #[instrument(skip(self, file, prompt))]
    pub async fn generate_content(
        &self,
        model: &str,
        file: &FileHandle,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{model}:generateContent",
            self.config.base_url
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part::file(file), Part::text(prompt)],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: GenerateResponse = response.json().await?;
        body.into_text().ok_or(GeminiError::EmptyResponse)
    }

    /// Map a non-success response into a typed API error.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GeminiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(GeminiError::Api {
            status: status.as_u16(),
            message: parse_error_message(&body, status.as_u16()),
        })
    }
}

#[async_trait]
impl TranscribeBackend for GeminiClient {
    /// Fresh upload plus one `generateContent` call per attempt.
    async fn transcribe(
        &self,
        audio_path: &Path,
        mime_type: &str,
        model: &str,
    ) -> Result<String, BackendError> {
        let file = self
            .upload_file(audio_path, mime_type)
            .await
            .map_err(into_backend_error)?;
        self.generate_content(model, &file, TRANSCRIBE_PROMPT)
            .await
            .map_err(into_backend_error)
    }
}

/// Carry the message and classification across the backend seam.
fn into_backend_error(err: GeminiError) -> BackendError {
    BackendError {
        message: err.to_string(),
        retryable: err.is_retryable(),
    }
}
