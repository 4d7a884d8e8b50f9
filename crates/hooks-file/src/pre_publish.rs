//! File-mode pre-publish validation.

use std::sync::Arc;

use scenepub_file_ops::{detect_frame_sequence, missing_frames};
use scenepub_hooks::{HookError, PrePublishHook, TaskResult, TaskView};
use scenepub_progress::ProgressSink;
use scenepub_templates::Template;

use crate::scene::{FRAME_PARAM, PATH_PARAM, item_param_path};

/// Validates the staged files before anything is written.
///
/// The primary work file must exist and match the work template —
/// anything else makes the whole publish pointless, so those raise. An
/// already-existing publish destination is only a warning here; the
/// publish hook refuses to overwrite it regardless.
pub struct FilePrePublishHook {
    render_work_template: Arc<dyn Template>,
}

impl FilePrePublishHook {
    pub fn new(render_work_template: Arc<dyn Template>) -> Self {
        Self {
            render_work_template,
        }
    }

    fn validate_render_sequence(&self, task: &TaskView) -> Vec<String> {
        let mut errors = Vec::new();

        let frame = match item_param_path(&task.item, FRAME_PARAM) {
            Ok(frame) => frame,
            Err(e) => return vec![e.to_string()],
        };
        if !frame.is_file() {
            return vec![format!(
                "The file '{}' no longer exists on disk",
                frame.display()
            )];
        }
        if !self.render_work_template.validate(&frame) {
            errors.push(format!(
                "'{}' does not match the render work template",
                frame.display()
            ));
        }
        match detect_frame_sequence(&frame) {
            Ok(frames) => {
                let missing = missing_frames(&frames);
                if !missing.is_empty() {
                    errors.push(format!(
                        "Your sequence has {} missing frames, it could not be published: {:?}",
                        missing.len(),
                        missing
                    ));
                }
            }
            Err(e) => errors.push(e.to_string()),
        }
        errors
    }
}

impl PrePublishHook for FilePrePublishHook {
    fn validate_primary(
        &mut self,
        task: &TaskView,
        work_template: &dyn Template,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<String>, HookError> {
        progress.report(0.0, Some("Validating the work file"), Some(&task.key()));

        let path = item_param_path(&task.item, PATH_PARAM)?;
        if !path.is_file() {
            return Err(HookError::msg(format!(
                "work file '{}' no longer exists on disk",
                path.display()
            )));
        }
        if !work_template.validate(&path) {
            return Err(HookError::msg(format!(
                "File '{}' is not a valid work path, unable to publish!",
                path.display()
            )));
        }

        let fields = work_template.fields_from_path(&path, &[])?;
        let publish_path = task.output.publish_template.apply_fields(&fields)?;

        let mut warnings = Vec::new();
        if publish_path.exists() {
            warnings.push(format!(
                "The published file named '{}' already exists!",
                publish_path.display()
            ));
        }

        progress.report(100.0, None, None);
        Ok(warnings)
    }

    fn validate_secondary(
        &mut self,
        tasks: &[TaskView],
        _work_template: &dyn Template,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<TaskResult>, HookError> {
        let mut results = Vec::new();
        for task in tasks {
            progress.report(0.0, Some("Validating"), Some(&task.key()));
            let errors = self.validate_render_sequence(task);
            if !errors.is_empty() {
                results.push(TaskResult::new(task.key(), errors));
            }
            progress.report(100.0, None, None);
        }
        Ok(results)
    }
}
