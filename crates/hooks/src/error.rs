//! Hook error type.

use scenepub_file_ops::FileOpsError;
use scenepub_templates::TemplateError;
use scenepub_tracking::TrackingError;

/// A fatal failure raised by a hook.
///
/// Raising aborts the current phase for the whole session; per-task
/// problems are returned as data (string lists) instead, never as
/// errors.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),

    #[error(transparent)]
    FileOps(#[from] FileOpsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HookError {
    pub fn msg(message: impl Into<String>) -> Self {
        HookError::Message(message.into())
    }
}
