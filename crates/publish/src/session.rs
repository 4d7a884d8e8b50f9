//! One publish session: pre-publish, publish, post-publish.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{error, info, warn};

use scenepub_hooks::{PublishParams, TaskResult, TaskView};
use scenepub_model::{ProductionTaskRef, PublishEvent, SessionPhase, Task, TaskKey};
use scenepub_progress::TaskProgressReporter;

use crate::error::PublishError;
use crate::handler::PublishHandler;

/// Message appended to the error list when post-publish is suppressed.
const POST_PUBLISH_SKIPPED: &str = "Post-publish was not run due to previous errors!";

/// Which of a task's error lists a batch result lands in.
enum ErrorList {
    PrePublish,
    Publish,
}

/// Pre-publish warnings, grouped per task in task-list order.
#[derive(Debug, Clone, Default)]
pub struct PrePublishReport {
    warnings: Vec<(TaskKey, Vec<String>)>,
}

impl PrePublishReport {
    pub fn warnings(&self) -> &[(TaskKey, Vec<String>)] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total number of warning messages across all tasks.
    pub fn warning_count(&self) -> usize {
        self.warnings.iter().map(|(_, w)| w.len()).sum()
    }
}

/// The final result of a publish session.
#[derive(Debug)]
pub struct PublishOutcome {
    /// Path of the published primary artifact, when the primary publish
    /// succeeded.
    pub primary_publish_path: Option<PathBuf>,

    /// Aggregated user-facing errors: hook failures, per-task secondary
    /// failures as `"<output display name>, <item name>: <error>"`, and
    /// an explicit notice when post-publish was skipped.
    pub errors: Vec<String>,

    /// Whether the post-publish phase ran. Secondary task failures do
    /// not stop it; a raised publish hook does.
    pub post_publish_ran: bool,

    /// Terminal phase: `Done` when post-publish ran, `Failed` otherwise.
    pub phase: SessionPhase,

    /// Final task records (primary first) with their error lists, for
    /// itemized display.
    pub tasks: Vec<Task>,
}

impl PublishOutcome {
    /// Full success: nothing at all went wrong.
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the primary artifact was published, regardless of
    /// secondary or post-publish failures.
    pub fn primary_succeeded(&self) -> bool {
        self.primary_publish_path.is_some()
    }
}

/// Drives the three-phase pipeline over the user's selected tasks.
///
/// The session is the single writer of task error lists; every mutation
/// is broadcast as a [`PublishEvent::TaskModified`] snapshot. Between
/// [`run_pre_publish`](Self::run_pre_publish) and
/// [`run_publish`](Self::run_publish) the caller decides whether
/// collected warnings are acceptable — that gap is the only cancellation
/// point.
pub struct PublishSession<'a> {
    handler: &'a mut PublishHandler,
    primary: Task,
    secondary: Vec<Task>,
    production_task: Option<ProductionTaskRef>,
    comment: String,
    thumbnail_source: Option<PathBuf>,
    progress: TaskProgressReporter,
    phase: SessionPhase,
}

impl<'a> PublishSession<'a> {
    pub(crate) fn new(
        handler: &'a mut PublishHandler,
        primary: Task,
        secondary: Vec<Task>,
        production_task: Option<ProductionTaskRef>,
        comment: String,
        thumbnail_source: Option<PathBuf>,
    ) -> Self {
        let tx = handler.events_tx.clone();
        let task_refs: Vec<&Task> =
            std::iter::once(&primary).chain(secondary.iter()).collect();
        let progress = TaskProgressReporter::new(
            &task_refs,
            Box::new(move |e| {
                let _ = tx.send(PublishEvent::Progress(e));
            }),
        );
        Self {
            handler,
            primary,
            secondary,
            production_task,
            comment,
            thumbnail_source,
            progress,
            phase: SessionPhase::TaskListBuilt,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn primary_task(&self) -> &Task {
        &self.primary
    }

    pub fn secondary_tasks(&self) -> &[Task] {
        &self.secondary
    }

    /// Runs the pre-publish hooks and collects warnings onto the tasks.
    ///
    /// The primary hook is called with the primary task alone; the
    /// secondary hook gets the whole batch in one call and its per-task
    /// results are pushed back onto the matching tasks. A hook raising,
    /// or a result naming no known task, aborts the session.
    pub fn run_pre_publish(&mut self) -> Result<PrePublishReport, PublishError> {
        self.set_phase(SessionPhase::PrePublishing);
        self.progress.reset(None);

        let work_template = self.handler.work_template.clone();
        let primary_view = self.handler.task_view(&self.primary)?;

        let warnings = match self.handler.hooks.pre_publish.validate_primary(
            &primary_view,
            work_template.as_ref(),
            &mut self.progress,
        ) {
            Ok(warnings) => warnings,
            Err(e) => {
                error!(error = %e, "primary pre-publish failed");
                self.set_phase(SessionPhase::Aborted);
                return Err(PublishError::PrePublish(e));
            }
        };
        self.primary.set_pre_publish_errors(warnings);
        self.handler.emit(task_modified(&self.primary));

        let secondary_views = self.secondary_views()?;
        let results = match self.handler.hooks.pre_publish.validate_secondary(
            &secondary_views,
            work_template.as_ref(),
            &mut self.progress,
        ) {
            Ok(results) => results,
            Err(e) => {
                error!(error = %e, "secondary pre-publish failed");
                self.set_phase(SessionPhase::Aborted);
                return Err(PublishError::PrePublish(e));
            }
        };
        if let Err(e) = self.redistribute(results, ErrorList::PrePublish) {
            self.set_phase(SessionPhase::Aborted);
            return Err(e);
        }

        self.set_phase(SessionPhase::Ready);

        let mut report = PrePublishReport::default();
        for task in std::iter::once(&self.primary).chain(&self.secondary) {
            if !task.pre_publish_errors().is_empty() {
                report
                    .warnings
                    .push((task.key(), task.pre_publish_errors().to_vec()));
            }
        }
        Ok(report)
    }

    /// Backs out after reviewing pre-publish warnings — the only
    /// cancellation point in a session.
    pub fn abort(mut self) {
        info!("publish session aborted before publish");
        self.set_phase(SessionPhase::Aborted);
    }

    /// Runs the publish and post-publish phases to completion.
    ///
    /// The primary publish runs first; its path feeds the secondary
    /// batch as a dependency. A raised hook error is caught and recorded
    /// — never propagated to the host — and suppresses post-publish.
    /// Per-task secondary failures are folded into the error list but do
    /// not stop post-publish.
    pub fn run_publish(mut self) -> PublishOutcome {
        self.set_phase(SessionPhase::Publishing);
        self.progress.reset(None);

        let mut errors: Vec<String> = Vec::new();

        // stage the thumbnail to a temp file for the duration of the
        // phase; the copy disappears when the session ends
        let staged_thumbnail = self.stage_thumbnail();
        let thumbnail_path = staged_thumbnail.as_ref().map(|f| f.path().to_owned());

        let work_template = self.handler.work_template.clone();
        let context = self.handler.context.clone();

        let primary_view = match self.handler.task_view(&self.primary) {
            Ok(view) => view,
            Err(e) => return self.fail_before_publish(e, errors),
        };
        let secondary_views = match self.secondary_views() {
            Ok(views) => views,
            Err(e) => return self.fail_before_publish(e, errors),
        };

        let params = PublishParams {
            work_template: work_template.as_ref(),
            context: &context,
            comment: &self.comment,
            thumbnail_path: thumbnail_path.as_deref(),
            production_task: self.production_task.as_ref(),
        };

        let mut primary_path: Option<PathBuf> = None;
        let mut run_post = false;

        match self.handler.hooks.publish.publish_primary(
            &primary_view,
            &params,
            &mut self.progress,
        ) {
            Ok(path) => {
                info!(path = %path.display(), "primary publish complete");
                primary_path = Some(path);
                run_post = true;
            }
            Err(e) => {
                error!(error = %e, "primary publish failed");
                errors.push(e.to_string());
            }
        }

        if let Some(path) = primary_path.clone() {
            match self.handler.hooks.publish.publish_secondary(
                &secondary_views,
                &primary_view,
                &path,
                &params,
                &mut self.progress,
            ) {
                Ok(results) => {
                    if let Err(e) = self.redistribute(results, ErrorList::Publish) {
                        error!(error = %e, "secondary publish returned a malformed result");
                        errors.push(e.to_string());
                        run_post = false;
                    }
                }
                Err(e) => {
                    // the whole batch runs inside one hook call, so a
                    // raise aborts every secondary task
                    error!(error = %e, "secondary publish failed");
                    errors.push(e.to_string());
                    run_post = false;
                }
            }
        }

        // fold per-task secondary failures into the session error list
        for task in &self.secondary {
            for message in task.publish_errors() {
                errors.push(format!(
                    "{}, {}: {}",
                    task.output().display_name,
                    task.item().name,
                    message
                ));
            }
        }

        if run_post {
            self.set_phase(SessionPhase::PostPublishing);
            self.progress.reset(Some(1));
            if let Err(e) = self.handler.hooks.post_publish.finalize(
                work_template.as_ref(),
                &primary_view,
                &secondary_views,
                &mut self.progress,
            ) {
                error!(error = %e, "post-publish failed");
                errors.push(format!("Post-publish: {e}"));
            }
        } else {
            errors.push(POST_PUBLISH_SKIPPED.to_owned());
        }

        self.set_phase(if run_post {
            SessionPhase::Done
        } else {
            SessionPhase::Failed
        });
        self.finish(primary_path, errors, run_post)
    }

    fn fail_before_publish(
        mut self,
        error: PublishError,
        mut errors: Vec<String>,
    ) -> PublishOutcome {
        error!(error = %error, "publish could not start");
        errors.push(error.to_string());
        errors.push(POST_PUBLISH_SKIPPED.to_owned());
        self.set_phase(SessionPhase::Failed);
        self.finish(None, errors, false)
    }

    fn finish(
        self,
        primary_publish_path: Option<PathBuf>,
        errors: Vec<String>,
        post_publish_ran: bool,
    ) -> PublishOutcome {
        PublishOutcome {
            primary_publish_path,
            errors,
            post_publish_ran,
            phase: self.phase,
            tasks: std::iter::once(self.primary)
                .chain(self.secondary)
                .collect(),
        }
    }

    fn secondary_views(&self) -> Result<Vec<TaskView>, PublishError> {
        self.secondary
            .iter()
            .map(|t| self.handler.task_view(t))
            .collect()
    }

    /// Pushes batched per-task hook results onto the matching tasks.
    ///
    /// Results with empty error lists are ignored; a non-empty result
    /// naming no task in the batch is a fatal internal error. Tasks with
    /// no matching result get their list cleared.
    fn redistribute(
        &mut self,
        results: Vec<TaskResult>,
        list: ErrorList,
    ) -> Result<(), PublishError> {
        let mut index: HashMap<TaskKey, Vec<String>> = HashMap::new();
        for result in results {
            if result.errors.is_empty() {
                continue;
            }
            if !self.secondary.iter().any(|t| t.key() == result.task) {
                return Err(PublishError::MalformedHookResult(result.task));
            }
            index.insert(result.task, result.errors);
        }

        let tx = self.handler.events_tx.clone();
        for task in &mut self.secondary {
            let errors = index.remove(&task.key()).unwrap_or_default();
            match list {
                ErrorList::PrePublish => task.set_pre_publish_errors(errors),
                ErrorList::Publish => task.set_publish_errors(errors),
            }
            let _ = tx.send(task_modified(task));
        }
        Ok(())
    }

    fn stage_thumbnail(&self) -> Option<tempfile::NamedTempFile> {
        let source = self.thumbnail_source.as_ref()?;
        let staged = tempfile::Builder::new()
            .prefix("publish_thumb_")
            .suffix(".png")
            .tempfile();
        match staged {
            Ok(file) => match std::fs::copy(source, file.path()) {
                Ok(_) => Some(file),
                Err(e) => {
                    warn!(error = %e, source = %source.display(), "failed to stage thumbnail");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "failed to create thumbnail temp file");
                None
            }
        }
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
        self.handler.emit(PublishEvent::PhaseChanged(phase));
    }
}

fn task_modified(task: &Task) -> PublishEvent {
    PublishEvent::TaskModified {
        key: task.key(),
        pre_publish_errors: task.pre_publish_errors().to_vec(),
        publish_errors: task.publish_errors().to_vec(),
    }
}
