//! The five hook traits.

use std::path::{Path, PathBuf};

use scenepub_model::{Context, Item, ProductionTaskRef};
use scenepub_progress::ProgressSink;
use scenepub_templates::Template;

use crate::error::HookError;
use crate::views::{TaskResult, TaskView};

/// Scans the open scene for publishable items.
///
/// Exactly one returned item must carry the primary output's scene item
/// type; the engine aborts the session otherwise.
pub trait ScanHook {
    fn scan(&mut self) -> Result<Vec<Item>, HookError>;
}

/// Validates tasks before anything is written.
pub trait PrePublishHook {
    /// Checks the primary task. Returned strings are warnings the user
    /// reviews before continuing; raise for problems that must stop the
    /// session outright.
    fn validate_primary(
        &mut self,
        task: &TaskView,
        work_template: &dyn Template,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<String>, HookError>;

    /// Checks the whole secondary batch in one call, returning per-task
    /// results.
    fn validate_secondary(
        &mut self,
        tasks: &[TaskView],
        work_template: &dyn Template,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<TaskResult>, HookError>;
}

/// Session-wide inputs shared by every publish call.
#[derive(Clone, Copy)]
pub struct PublishParams<'a> {
    pub work_template: &'a dyn Template,
    pub context: &'a Context,
    /// User comment recorded on every publish.
    pub comment: &'a str,
    /// Thumbnail image associated with the publishes, if any.
    pub thumbnail_path: Option<&'a Path>,
    /// Unit of work the publishes are associated with.
    pub production_task: Option<&'a ProductionTaskRef>,
}

/// Writes publish files and registers them with the tracking service.
pub trait PublishHook {
    /// Publishes the primary task and returns the path of the published
    /// artifact. Raising here aborts the session before any secondary
    /// publish runs.
    fn publish_primary(
        &mut self,
        task: &TaskView,
        params: &PublishParams<'_>,
        progress: &mut dyn ProgressSink,
    ) -> Result<PathBuf, HookError>;

    /// Publishes the whole secondary batch in one call. The primary
    /// publish path is threaded through as a dependency for every
    /// secondary publish record.
    fn publish_secondary(
        &mut self,
        tasks: &[TaskView],
        primary_task: &TaskView,
        primary_publish_path: &Path,
        params: &PublishParams<'_>,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<TaskResult>, HookError>;
}

/// Runs after every publish succeeded; the usual place to version up the
/// work file. Raising is recorded but the publish stands.
pub trait PostPublishHook {
    fn finalize(
        &mut self,
        work_template: &dyn Template,
        primary_task: &TaskView,
        secondary_tasks: &[TaskView],
        progress: &mut dyn ProgressSink,
    ) -> Result<(), HookError>;
}

/// Provides a pre-made thumbnail for the publish, or `None` to let the
/// user capture one in the shell.
pub trait ThumbnailHook {
    fn capture(&mut self) -> Result<Option<PathBuf>, HookError>;
}

/// The full hook complement for one host application, chosen at startup
/// and injected into the engine.
pub struct HookSet {
    pub scan: Box<dyn ScanHook>,
    pub pre_publish: Box<dyn PrePublishHook>,
    pub publish: Box<dyn PublishHook>,
    pub post_publish: Box<dyn PostPublishHook>,
    pub thumbnail: Box<dyn ThumbnailHook>,
}
