//! File-mode publish.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use scenepub_file_ops::{CopyStrategy, detect_frame_sequence, frame_number};
use scenepub_hooks::{HookError, PublishHook, PublishParams, TaskResult, TaskView};
use scenepub_progress::ProgressSink;
use scenepub_templates::{FieldValue, Template, publish_name};
use scenepub_tracking::{PublishRegistration, TrackingService, UploadWorker, VersionRequest};

use crate::scene::{FRAME_PARAM, PATH_PARAM, item_param_path};

/// Publishes staged files: copy to the templated destination, register
/// with the tracking service, and (for render sequences) create a review
/// version whose media uploads on a background worker.
pub struct FilePublishHook {
    tracking: Arc<dyn TrackingService>,
    copy: Arc<dyn CopyStrategy>,
    render_work_template: Arc<dyn Template>,
    create_review_versions: bool,
}

impl FilePublishHook {
    pub fn new(
        tracking: Arc<dyn TrackingService>,
        copy: Arc<dyn CopyStrategy>,
        render_work_template: Arc<dyn Template>,
    ) -> Self {
        Self {
            tracking,
            copy,
            render_work_template,
            create_review_versions: true,
        }
    }

    /// Disables review-version creation for render sequences.
    pub fn without_review_versions(mut self) -> Self {
        self.create_review_versions = false;
        self
    }

    fn publish_render_sequence(
        &self,
        task: &TaskView,
        primary_publish_path: &Path,
        params: &PublishParams<'_>,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<String>, HookError> {
        let key = task.key();
        let frame = item_param_path(&task.item, FRAME_PARAM)?;
        let frames = detect_frame_sequence(&frame)?;
        if frames.is_empty() {
            return Err(HookError::msg(format!(
                "no frames found for '{}'",
                frame.display()
            )));
        }

        let fields = self.render_work_template.fields_from_path(&frame, &[])?;
        let publish_template = task.output.publish_template.as_ref();

        // sequence-level path: abstract keys render as their placeholder
        let mut sequence_fields = fields.clone();
        for template_key in publish_template.keys().iter().filter(|k| k.is_abstract) {
            sequence_fields.remove(&template_key.name);
        }
        let sequence_publish_path = publish_template.apply_fields(&sequence_fields)?;

        let total = frames.len();
        for (index, source) in frames.iter().enumerate() {
            let frame_fields = self.render_work_template.fields_from_path(source, &[])?;
            let target = publish_template.apply_fields(&frame_fields)?;
            self.copy.copy_file(source, &target, &key)?;
            let percent = 10.0 + 60.0 * ((index + 1) as f64 / total as f64);
            progress.report(percent, Some("Copying frames"), None);
        }

        progress.report(75.0, Some("Registering the publish"), None);
        let name = publish_name(publish_template, &sequence_publish_path, Some(&sequence_fields))?;
        let version_number = fields
            .get("version")
            .and_then(FieldValue::as_int)
            .unwrap_or(0);
        let record = self.tracking.register_publish(&PublishRegistration {
            context: params.context.clone(),
            path: sequence_publish_path.clone(),
            name: name.clone(),
            version_number,
            comment: params.comment.to_owned(),
            thumbnail_path: params.thumbnail_path.map(Path::to_path_buf),
            task: params.production_task.cloned(),
            dependency_paths: vec![primary_publish_path.to_path_buf()],
            published_file_type: task.output.published_file_type.clone(),
        })?;
        info!(
            task = %key,
            path = %sequence_publish_path.display(),
            frames = total,
            "registered render sequence publish"
        );

        let mut errors = Vec::new();
        if self.create_review_versions {
            progress.report(85.0, Some("Creating a review version"), None);
            let version = self.tracking.create_version(&VersionRequest {
                name: name.clone(),
                description: params.comment.to_owned(),
                project: params.context.project.clone(),
                entity: params.context.entity.clone(),
                task: params.production_task.cloned(),
                user: params.context.user.clone(),
                path_to_frames: Some(sequence_publish_path.clone()),
                path_to_movie: None,
                first_frame: frames.first().and_then(|p| frame_number(p)),
                last_frame: frames.last().and_then(|p| frame_number(p)),
                publishes: vec![record.entity_ref()],
            })?;

            // media goes up on its own thread; the session just waits on
            // the error list
            progress.report(90.0, Some("Uploading review media"), None);
            let worker = UploadWorker::spawn(
                self.tracking.clone(),
                version.entity_ref(),
                None,
                params.thumbnail_path.map(Path::to_path_buf),
            );
            errors.extend(worker.join());
        }
        Ok(errors)
    }
}

impl PublishHook for FilePublishHook {
    fn publish_primary(
        &mut self,
        task: &TaskView,
        params: &PublishParams<'_>,
        progress: &mut dyn ProgressSink,
    ) -> Result<PathBuf, HookError> {
        let key = task.key();
        progress.report(0.0, Some("Publishing the work file"), Some(&key));

        let path = item_param_path(&task.item, PATH_PARAM)?;
        if !params.work_template.validate(&path) {
            return Err(HookError::msg(format!(
                "File '{}' is not a valid work path, unable to publish!",
                path.display()
            )));
        }
        let fields = params.work_template.fields_from_path(&path, &[])?;
        let publish_path = task.output.publish_template.apply_fields(&fields)?;
        if publish_path.exists() {
            return Err(HookError::msg(format!(
                "The published file named '{}' already exists!",
                publish_path.display()
            )));
        }

        progress.report(25.0, Some("Copying the file"), None);
        self.copy.copy_file(&path, &publish_path, &key)?;

        progress.report(75.0, Some("Registering the publish"), None);
        let name = publish_name(
            task.output.publish_template.as_ref(),
            &publish_path,
            Some(&fields),
        )?;
        let version_number = fields
            .get("version")
            .and_then(FieldValue::as_int)
            .unwrap_or(0);
        self.tracking.register_publish(&PublishRegistration {
            context: params.context.clone(),
            path: publish_path.clone(),
            name,
            version_number,
            comment: params.comment.to_owned(),
            thumbnail_path: params.thumbnail_path.map(Path::to_path_buf),
            task: params.production_task.cloned(),
            dependency_paths: Vec::new(),
            published_file_type: task.output.published_file_type.clone(),
        })?;
        info!(task = %key, path = %publish_path.display(), "registered primary publish");

        progress.report(100.0, None, None);
        Ok(publish_path)
    }

    fn publish_secondary(
        &mut self,
        tasks: &[TaskView],
        _primary_task: &TaskView,
        primary_publish_path: &Path,
        params: &PublishParams<'_>,
        progress: &mut dyn ProgressSink,
    ) -> Result<Vec<TaskResult>, HookError> {
        let mut results = Vec::new();
        for task in tasks {
            let key = task.key();
            progress.report(0.0, Some("Publishing"), Some(&key));
            let errors =
                match self.publish_render_sequence(task, primary_publish_path, params, progress)
                {
                    Ok(upload_errors) => upload_errors,
                    Err(e) => vec![e.to_string()],
                };
            if !errors.is_empty() {
                results.push(TaskResult::new(key, errors));
            }
            progress.report(100.0, None, None);
        }
        Ok(results)
    }
}
