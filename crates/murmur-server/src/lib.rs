//! # murmur-server
//!
//! HTTP surface of the transcription gateway: the service root, the
//! secret guard, and the upload handler that drives the cascade.
//!
//! The request pipeline is request-scoped throughout — the only shared
//! state is the immutable [`state::AppState`] built at startup.
//!
//! ## Crate Position
//!
//! Depends on: murmur-cascade, murmur-settings.
//! Depended on by: murmur (binary).

#![deny(unsafe_code)]

pub mod auth;
pub mod handlers;
pub mod router;
pub mod scratch;
pub mod state;

pub use router::{MAX_AUDIO_SIZE, build_router};
pub use state::AppState;
