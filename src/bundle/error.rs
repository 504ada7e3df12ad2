//! Bundle error types.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failures while producing a bundle.
///
/// Unresolved inputs are not errors; they are skipped during resolution.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to create output directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to read input `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to remove previous bundle `{0}`")]
    Remove(PathBuf, #[source] std::io::Error),

    #[error("failed to lock bundle `{0}`")]
    Lock(PathBuf, #[source] std::io::Error),

    #[error("failed to write bundle `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}
