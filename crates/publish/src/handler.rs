//! The publish handler: the engine's boundary with the GUI shell.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use tracing::{debug, info};

use scenepub_hooks::{HookSet, OutputView, TaskView};
use scenepub_model::{
    Context, Output, ProductionTaskRef, PublishEvent, SessionPhase, Task,
};
use scenepub_templates::{Template, TemplateResolver};
use scenepub_tracking::TrackingService;

use crate::error::PublishError;
use crate::outputs::validate_outputs;
use crate::session::PublishSession;
use crate::settings::PublishSettings;
use crate::tasks::build_task_list;

/// Owns the configured outputs and hook set for one app instance and
/// hands out publish sessions.
///
/// Everything the shell consumes comes through here: the scanned task
/// list, the production tasks a publish can attach to, the initial
/// thumbnail, and the event stream (progress, task modifications, phase
/// changes) via [`take_events`](Self::take_events).
pub struct PublishHandler {
    pub(crate) settings: PublishSettings,
    pub(crate) context: Context,
    pub(crate) primary_output: Output,
    pub(crate) secondary_outputs: Vec<Output>,
    pub(crate) hooks: HookSet,
    pub(crate) templates: Arc<dyn TemplateResolver>,
    pub(crate) tracking: Arc<dyn TrackingService>,
    pub(crate) work_template: Arc<dyn Template>,
    pub(crate) events_tx: Sender<PublishEvent>,
    events_rx: Option<Receiver<PublishEvent>>,
}

impl PublishHandler {
    /// Builds a handler, validating the configured outputs and resolving
    /// every referenced template up front.
    pub fn new(
        settings: PublishSettings,
        context: Context,
        hooks: HookSet,
        templates: Arc<dyn TemplateResolver>,
        tracking: Arc<dyn TrackingService>,
    ) -> Result<Self, PublishError> {
        let primary_output = settings.primary_output();
        let secondary_outputs = settings.secondary_outputs.clone();
        validate_outputs(&primary_output, &secondary_outputs)?;

        let work_template = resolve(templates.as_ref(), &settings.work_template)?;
        for output in std::iter::once(&primary_output).chain(&secondary_outputs) {
            resolve(templates.as_ref(), &output.publish_template)?;
        }

        let (events_tx, events_rx) = channel();
        Ok(Self {
            settings,
            context,
            primary_output,
            secondary_outputs,
            hooks,
            templates,
            tracking,
            work_template,
            events_tx,
            events_rx: Some(events_rx),
        })
    }

    /// Takes the event receiver. Can only be called once.
    pub fn take_events(&mut self) -> Option<Receiver<PublishEvent>> {
        self.events_rx.take()
    }

    /// App title for the shell's window and command registration.
    pub fn display_name(&self) -> &str {
        &self.settings.display_name
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn primary_output(&self) -> &Output {
        &self.primary_output
    }

    pub fn secondary_outputs(&self) -> &[Output] {
        &self.secondary_outputs
    }

    /// Adopts a new pipeline context and rebuilds the primary output
    /// from settings, replacing it in place.
    pub fn context_changed(&mut self, context: Context) -> Result<(), PublishError> {
        info!(project = %context.project.name, "publish context changed");
        self.context = context;
        self.rebuild_primary_output()
    }

    /// Re-derives the primary output from the stored settings.
    pub fn rebuild_primary_output(&mut self) -> Result<(), PublishError> {
        let primary_output = self.settings.primary_output();
        validate_outputs(&primary_output, &self.secondary_outputs)?;
        resolve(self.templates.as_ref(), &primary_output.publish_template)?;
        self.primary_output = primary_output;
        Ok(())
    }

    /// Scans the scene and builds the ordered task list.
    ///
    /// Scan failures — a hook raising, a malformed item, or anything but
    /// exactly one item of the primary type — abort before any task
    /// exists.
    pub fn publish_tasks(&mut self) -> Result<Vec<Task>, PublishError> {
        self.emit(PublishEvent::PhaseChanged(SessionPhase::Scanning));
        let items = match self.hooks.scan.scan() {
            Ok(items) => items,
            Err(e) => {
                self.emit(PublishEvent::PhaseChanged(SessionPhase::Aborted));
                return Err(PublishError::Scan(e));
            }
        };
        debug!(count = items.len(), "scan hook returned items");

        match build_task_list(&items, &self.primary_output, &self.secondary_outputs) {
            Ok(tasks) => {
                self.emit(PublishEvent::PhaseChanged(SessionPhase::TaskListBuilt));
                Ok(tasks)
            }
            Err(e) => {
                self.emit(PublishEvent::PhaseChanged(SessionPhase::Aborted));
                Err(e)
            }
        }
    }

    /// Production tasks a publish can be associated with in the current
    /// context.
    pub fn production_tasks(&self) -> Result<Vec<ProductionTaskRef>, PublishError> {
        Ok(self.tracking.production_tasks(&self.context)?)
    }

    /// A pre-made thumbnail from the host, or `None` when the shell
    /// should offer screen capture instead.
    pub fn initial_thumbnail(&mut self) -> Result<Option<PathBuf>, PublishError> {
        self.hooks
            .thumbnail
            .capture()
            .map_err(PublishError::Thumbnail)
    }

    /// Starts a publish session over the user's selected tasks.
    ///
    /// The selection must contain exactly one task for the primary
    /// output; everything else becomes the secondary batch, in selection
    /// order.
    pub fn begin(
        &mut self,
        selected_tasks: Vec<Task>,
        production_task: Option<ProductionTaskRef>,
        comment: String,
        thumbnail: Option<PathBuf>,
    ) -> Result<PublishSession<'_>, PublishError> {
        if selected_tasks.is_empty() {
            return Err(PublishError::NothingSelected);
        }

        let mut primary = None;
        let mut secondary = Vec::new();
        for task in selected_tasks {
            if task.output().is_primary() {
                if primary.is_some() {
                    return Err(PublishError::MultiplePrimaryTasks);
                }
                primary = Some(task);
            } else {
                secondary.push(task);
            }
        }
        let primary = primary.ok_or(PublishError::NoPrimaryTask)?;

        info!(
            primary = %primary.key(),
            secondary = secondary.len(),
            "starting publish session"
        );
        Ok(PublishSession::new(
            self,
            primary,
            secondary,
            production_task,
            comment,
            thumbnail,
        ))
    }

    /// Builds the hook-facing view of a task, resolving its publish
    /// template.
    pub(crate) fn task_view(&self, task: &Task) -> Result<TaskView, PublishError> {
        let output = task.output();
        let publish_template = resolve(self.templates.as_ref(), &output.publish_template)?;
        Ok(TaskView {
            item: task.item().clone(),
            output: OutputView {
                name: output.name.clone(),
                display_name: output.display_name.clone(),
                published_file_type: output.published_file_type.clone(),
                publish_template,
            },
        })
    }

    pub(crate) fn emit(&self, event: PublishEvent) {
        let _ = self.events_tx.send(event);
    }
}

fn resolve(
    templates: &dyn TemplateResolver,
    name: &str,
) -> Result<Arc<dyn Template>, PublishError> {
    templates
        .resolve(name)
        .ok_or_else(|| PublishError::UnknownTemplate(name.to_owned()))
}
