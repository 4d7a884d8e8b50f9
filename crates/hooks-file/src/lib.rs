//! File-mode hooks.
//!
//! A complete [`HookSet`] that treats a staged directory of files as the
//! "scene": the current work file is the primary item and any render
//! frame sequences are secondary items. Useful for pipelines whose DCC
//! export step already wrote everything to disk, and as the reference
//! implementation host integrations are modeled on.
//!
//! The flow mirrors a host hook set exactly: scan finds items,
//! pre-publish validates templates and sequence continuity, publish
//! copies files to their templated destinations and registers them with
//! the tracking service (render sequences also get a review version,
//! with media uploaded on a background worker), and post-publish bumps
//! the work file to its next available version.

pub mod post_publish;
pub mod pre_publish;
pub mod publish;
pub mod scan;
pub mod scene;
pub mod thumbnail;

#[cfg(test)]
mod testkit;

use std::sync::Arc;

use scenepub_file_ops::CopyStrategy;
use scenepub_hooks::HookSet;
use scenepub_templates::Template;
use scenepub_tracking::TrackingService;

pub use post_publish::FilePostPublishHook;
pub use pre_publish::FilePrePublishHook;
pub use publish::FilePublishHook;
pub use scan::FileScanHook;
pub use scene::{FRAME_PARAM, FileScene, PATH_PARAM, RENDER_SEQUENCE_TYPE, WORK_FILE_TYPE};
pub use thumbnail::FileThumbnailHook;

/// Bundles the file-mode hooks into a ready-to-inject [`HookSet`].
pub fn file_hook_set(
    scene: FileScene,
    render_work_template: Arc<dyn Template>,
    tracking: Arc<dyn TrackingService>,
    copy: Arc<dyn CopyStrategy>,
    thumbnail: Option<std::path::PathBuf>,
) -> HookSet {
    HookSet {
        scan: Box::new(FileScanHook::new(scene)),
        pre_publish: Box::new(FilePrePublishHook::new(render_work_template.clone())),
        publish: Box::new(FilePublishHook::new(
            tracking.clone(),
            copy,
            render_work_template,
        )),
        post_publish: Box::new(FilePostPublishHook::new()),
        thumbnail: Box::new(FileThumbnailHook::new(thumbnail)),
    }
}
