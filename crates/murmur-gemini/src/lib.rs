//! # murmur-gemini
//!
//! Gemini REST client used as the remote transcription backend.
//!
//! Each attempt is two calls: a raw media upload to the Files API,
//! then a `generateContent` request referencing the uploaded file.
//! API failures carry the HTTP status so the cascade can distinguish
//! availability problems (503, 429, 404) from content-level ones.
//!
//! ## Crate Position
//!
//! Depends on: murmur-cascade (implements its backend trait).
//! Depended on by: murmur (binary wiring).

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, GeminiClient, GeminiConfig};
pub use error::GeminiError;
pub use types::FileHandle;
