//! Pluggable file copy.

use std::path::Path;

use tracing::debug;

use scenepub_model::TaskKey;

use crate::ensure_folder_exists;
use crate::error::FileOpsError;

/// Strategy for getting a file to its publish location.
///
/// The default copies within the filesystem; sites swap in strategies
/// that hand off to transfer daemons or archive systems. The task key is
/// passed for context so a strategy can branch on output without the
/// engine knowing.
pub trait CopyStrategy: Send + Sync {
    fn copy_file(&self, source: &Path, target: &Path, task: &TaskKey)
    -> Result<(), FileOpsError>;
}

/// Plain `std::fs` copy, creating the target folder first.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdCopy;

impl CopyStrategy for StdCopy {
    fn copy_file(
        &self,
        source: &Path,
        target: &Path,
        task: &TaskKey,
    ) -> Result<(), FileOpsError> {
        if let Some(parent) = target.parent() {
            ensure_folder_exists(parent)?;
        }
        debug!(
            task = %task,
            source = %source.display(),
            target = %target.display(),
            "copying file"
        );
        std::fs::copy(source, target).map_err(|e| FileOpsError::Copy {
            source_path: source.to_owned(),
            target_path: target.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// Copies `source` to `target` using the given strategy.
pub fn copy_file(
    strategy: &dyn CopyStrategy,
    source: &Path,
    target: &Path,
    task: &TaskKey,
) -> Result<(), FileOpsError> {
    strategy.copy_file(source, target, task)
}
