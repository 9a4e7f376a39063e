//! Wire types for the Files API and `generateContent`.

use serde::{Deserialize, Serialize};

/// Remote handle for an uploaded file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    /// Resource name, e.g. `files/abc-123`.
    pub name: String,
    /// Reference URI passed to `generateContent`.
    pub uri: String,
    /// MIME type recorded by the service.
    pub mime_type: String,
}

/// Envelope returned by the Files API upload.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub file: FileHandle,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

/// Request part: either a file reference or an instruction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub(crate) fn file(file: &FileHandle) -> Self {
        Self {
            file_data: Some(FileData {
                file_uri: file.uri.clone(),
                mime_type: file.mime_type.clone(),
            }),
            text: None,
        }
    }

    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self {
            file_data: None,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileData {
    pub file_uri: String,
    pub mime_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts.
    pub(crate) fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_handle_deserializes_camel_case() {
        let handle: FileHandle = serde_json::from_value(json!({
            "name": "files/abc-123",
            "uri": "https://example.test/v1beta/files/abc-123",
            "mimeType": "audio/wav",
        }))
        .unwrap();
        assert_eq!(handle.name, "files/abc-123");
        assert_eq!(handle.mime_type, "audio/wav");
    }

    #[test]
    fn request_parts_serialize_without_empty_fields() {
        let handle = FileHandle {
            name: "files/x".into(),
            uri: "https://example.test/files/x".into(),
            mime_type: "audio/mpeg".into(),
        };
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part::file(&handle), Part::text("transcribe")],
            }],
        };
        let val = serde_json::to_value(&request).unwrap();
        let parts = val["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts[0]["fileData"]["fileUri"], "https://example.test/files/x");
        assert_eq!(parts[0]["fileData"]["mimeType"], "audio/mpeg");
        assert!(parts[0].get("text").is_none());
        assert_eq!(parts[1]["text"], "transcribe");
        assert!(parts[1].get("fileData").is_none());
    }

    #[test]
    fn generate_response_concatenates_candidate_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "hello "}, {"text": "world"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "hello world");
    }

    #[test]
    fn generate_response_without_candidates_has_no_text() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_text().is_none());

        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": []}}]
        }))
        .unwrap();
        assert!(response.into_text().is_none());
    }
}
