//! Tracking service error types.

/// Errors produced by the tracking database client.
#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("tracking service error: {0}")]
    Service(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
