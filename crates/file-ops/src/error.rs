//! File operation error types.

use std::path::PathBuf;

/// Errors produced by publish file operations.
#[derive(Debug, thiserror::Error)]
pub enum FileOpsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to copy {source_path} to {target_path}: {reason}")]
    Copy {
        source_path: PathBuf,
        target_path: PathBuf,
        reason: String,
    },

    #[error("'{0}' is not part of a frame sequence")]
    NotASequence(PathBuf),
}
