//! File-mode thumbnail.

use std::path::PathBuf;

use scenepub_hooks::{HookError, ThumbnailHook};

/// Returns a pre-staged thumbnail image, or `None` so the shell offers
/// its own capture.
pub struct FileThumbnailHook {
    path: Option<PathBuf>,
}

impl FileThumbnailHook {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ThumbnailHook for FileThumbnailHook {
    fn capture(&mut self) -> Result<Option<PathBuf>, HookError> {
        Ok(self.path.clone().filter(|p| p.is_file()))
    }
}
