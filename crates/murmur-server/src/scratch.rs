//! Scratch-file lifecycle for uploaded audio.
//!
//! Exactly one scratch file exists per in-flight request; it is
//! removed on every exit path via `Drop`, so handlers cannot leak it
//! by returning early.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Make an upload filename filesystem-friendly (spaces become
/// underscores).
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.replace(' ', "_")
}

/// On-disk copy of one uploaded file, removed when dropped.
///
/// The path is derived deterministically from the sanitized original
/// filename, so concurrent uploads that share a name share a path.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `bytes` under `dir` using the sanitized `filename`.
    ///
    /// Creates `dir` if needed. The write is synchronous; uploads are
    /// bounded by the request body cap.
    pub fn write(dir: &Path, filename: &str, bytes: &[u8]) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(sanitize_filename(filename));
        fs::write(&path, bytes)?;
        Ok(Self { path })
    }

    /// Path of the materialized file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "failed to remove scratch file");
            }
        }
    }
}
