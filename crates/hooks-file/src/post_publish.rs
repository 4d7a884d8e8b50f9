//! File-mode post-publish: version up the work file.

use tracing::info;

use scenepub_file_ops::ensure_folder_exists;
use scenepub_hooks::{HookError, PostPublishHook, TaskView};
use scenepub_progress::ProgressSink;
use scenepub_templates::{FieldValue, Template, next_available_version};

use crate::scene::{PATH_PARAM, item_param_path};

/// Carries the work file forward to its next available version once
/// everything published, so the artist never keeps working in a
/// just-published file.
#[derive(Default)]
pub struct FilePostPublishHook;

impl FilePostPublishHook {
    pub fn new() -> Self {
        Self
    }
}

impl PostPublishHook for FilePostPublishHook {
    fn finalize(
        &mut self,
        work_template: &dyn Template,
        primary_task: &TaskView,
        _secondary_tasks: &[TaskView],
        progress: &mut dyn ProgressSink,
    ) -> Result<(), HookError> {
        progress.report(0.0, Some("Versioning up the work file"), None);

        let path = item_param_path(&primary_task.item, PATH_PARAM)?;
        let mut fields = work_template.fields_from_path(&path, &[])?;
        let next_version = next_available_version(work_template, &fields)?;
        fields.insert("version".into(), FieldValue::Int(next_version));
        let next_path = work_template.apply_fields(&fields)?;

        if let Some(parent) = next_path.parent() {
            ensure_folder_exists(parent)?;
        }
        std::fs::copy(&path, &next_path)?;
        info!(
            from = %path.display(),
            to = %next_path.display(),
            "work file versioned up"
        );

        progress.report(100.0, None, None);
        Ok(())
    }
}
