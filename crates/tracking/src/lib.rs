//! Production-tracking service boundary.
//!
//! The tracking database stores publish records, review versions and
//! uploaded media. The engine only ever talks to it through the
//! [`TrackingService`] trait — the shell provides the real client, tests
//! provide recorders. [`UploadWorker`] wraps the one piece of real
//! concurrency in the app: pushing review media from a background thread
//! so a slow network upload does not stall scene-editing commands.

pub mod error;
pub mod records;
pub mod service;
pub mod uploader;

// Re-export primary types for convenience.
pub use error::TrackingError;
pub use records::{
    PublishQuery, PublishRecord, PublishRegistration, VersionRecord, VersionRequest,
};
pub use service::{REVIEW_MEDIA_FIELD, TrackingService};
pub use uploader::UploadWorker;
