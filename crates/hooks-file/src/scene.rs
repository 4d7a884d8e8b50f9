//! The staged workspace the file hooks operate on.

use std::path::PathBuf;

use scenepub_hooks::HookError;
use scenepub_model::Item;

/// Scene item type of the work file (the primary item).
pub const WORK_FILE_TYPE: &str = "work_file";

/// Scene item type of a render frame sequence.
pub const RENDER_SEQUENCE_TYPE: &str = "render_sequence";

/// Item parameter carrying the work file's path.
pub const PATH_PARAM: &str = "path";

/// Item parameter carrying one representative frame of a sequence.
pub const FRAME_PARAM: &str = "frame";

/// What the "scene" looks like in file mode.
#[derive(Debug, Clone)]
pub struct FileScene {
    /// The current work file.
    pub work_file: PathBuf,
    /// One representative frame per render sequence.
    pub render_frames: Vec<PathBuf>,
}

/// Reads a path stashed in an item's passthrough parameters.
pub(crate) fn item_param_path(item: &Item, param: &str) -> Result<PathBuf, HookError> {
    item.extra
        .get(param)
        .and_then(serde_json::Value::as_str)
        .map(PathBuf::from)
        .ok_or_else(|| {
            HookError::msg(format!(
                "item '{}' is missing its '{param}' parameter",
                item.name
            ))
        })
}
