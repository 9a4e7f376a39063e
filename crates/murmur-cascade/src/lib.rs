//! # murmur-cascade
//!
//! Model tiers and the sequential fallback policy for remote
//! transcription.
//!
//! One upload is tried against up to three model tiers in strict
//! preference order. A Primary failure is classified: availability
//! problems escalate, content-level problems are terminal. Past
//! Primary, every remaining tier is tried unconditionally.
//!
//! ## Crate Position
//!
//! Standalone (no sibling crate dependencies).
//! Depended on by: murmur-gemini, murmur-server.

#![deny(unsafe_code)]

pub mod backend;
pub mod cascade;
pub mod tier;

pub use backend::{BackendError, TranscribeBackend};
pub use cascade::{CascadeError, TRANSCRIBE_PROMPT, Transcription, escalation_allowed, run_cascade};
pub use tier::{Tier, TierModels};
