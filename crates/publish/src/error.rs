//! Publish engine error types.

use scenepub_hooks::HookError;
use scenepub_model::{MissingFieldError, TaskKey};
use scenepub_templates::TemplateError;
use scenepub_tracking::TrackingError;

/// Fatal, session-aborting errors.
///
/// Per-task problems are never represented here — they live as string
/// lists on the tasks themselves. Hook-raised causes are preserved as
/// error sources for logging while the display text stays user-facing.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("scanning the scene failed: {0}")]
    Scan(#[source] HookError),

    #[error(transparent)]
    MalformedItem(#[from] MissingFieldError),

    #[error("the scene contains multiple items of the primary type '{0}'")]
    MultiplePrimaryItems(String),

    #[error("the scene contains no item of the primary type '{0}'")]
    NoPrimaryItem(String),

    #[error("the scene contains duplicate items named '{0}' of type '{1}'")]
    DuplicateItem(String, String),

    #[error("nothing selected to publish")]
    NothingSelected,

    #[error("couldn't find a primary task to publish")]
    NoPrimaryTask,

    #[error("found multiple primary tasks to publish")]
    MultiplePrimaryTasks,

    #[error("badly formed result returned from hook: no task matches '{0}'")]
    MalformedHookResult(TaskKey),

    #[error("pre-publish failed: {0}")]
    PrePublish(#[source] HookError),

    #[error("thumbnail hook failed: {0}")]
    Thumbnail(#[source] HookError),

    #[error("template '{0}' is not defined")]
    UnknownTemplate(String),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
