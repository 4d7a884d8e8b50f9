//! Hook contracts: the seam between the publish engine and the host
//! application.
//!
//! Everything host-specific — inspecting the open scene, saving it,
//! exporting caches, grabbing viewport thumbnails — lives behind these
//! five narrow traits. One concrete [`HookSet`] is selected at startup
//! for the running host and injected into the engine; the engine itself
//! never branches on a host name.
//!
//! The secondary pre-publish and publish calls take the *whole* batch of
//! secondary tasks in one call so a hook can validate across tasks
//! (e.g. a preview-video task requiring its sibling render task), while
//! still reporting errors per task via [`TaskResult`].

pub mod contracts;
pub mod error;
pub mod views;

// Re-export primary types for convenience.
pub use contracts::{
    HookSet, PostPublishHook, PrePublishHook, PublishHook, PublishParams, ScanHook,
    ThumbnailHook,
};
pub use error::HookError;
pub use views::{OutputView, TaskResult, TaskView};
