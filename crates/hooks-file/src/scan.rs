//! File-mode scene scan.

use tracing::debug;

use scenepub_hooks::{HookError, ScanHook};
use scenepub_model::Item;

use crate::scene::{FRAME_PARAM, FileScene, PATH_PARAM, RENDER_SEQUENCE_TYPE, WORK_FILE_TYPE};

/// Scans the staged workspace: the work file becomes the single primary
/// item, each render sequence a secondary item carrying its
/// representative frame in the passthrough parameters.
pub struct FileScanHook {
    scene: FileScene,
}

impl FileScanHook {
    pub fn new(scene: FileScene) -> Self {
        Self { scene }
    }
}

impl ScanHook for FileScanHook {
    fn scan(&mut self) -> Result<Vec<Item>, HookError> {
        let work_file = &self.scene.work_file;
        if !work_file.is_file() {
            return Err(HookError::msg(format!(
                "work file '{}' does not exist",
                work_file.display()
            )));
        }

        let mut items = Vec::new();

        let mut work_item = Item::new(
            work_file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            WORK_FILE_TYPE,
        );
        work_item.description = Some("Current work file".into());
        work_item.extra.insert(
            PATH_PARAM.into(),
            serde_json::Value::String(work_file.to_string_lossy().into_owned()),
        );
        items.push(work_item);

        for frame in &self.scene.render_frames {
            let mut item = Item::new(
                frame
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                RENDER_SEQUENCE_TYPE,
            );
            item.description = Some("Render sequence".into());
            item.extra.insert(
                FRAME_PARAM.into(),
                serde_json::Value::String(frame.to_string_lossy().into_owned()),
            );
            items.push(item);
        }

        debug!(count = items.len(), "file scan found items");
        Ok(items)
    }
}
