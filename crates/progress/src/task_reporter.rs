//! Task-keyed progress reporting.

use std::collections::HashMap;

use scenepub_model::{Task, TaskKey};

use crate::reporter::{EmitFn, ProgressReporter};

/// Progress callback handed to hooks.
///
/// `stage` names the task the report belongs to; omitting it continues
/// whichever task last reported.
pub trait ProgressSink {
    fn report(&mut self, percent: f64, message: Option<&str>, stage: Option<&TaskKey>);
}

/// A [`ProgressReporter`] whose stages are publish tasks.
///
/// The expected stage count is the number of tasks in the session, and
/// messages reported for a known task are prefixed with its output and
/// item names so the shell can show "Geometry Cache - charA: Copying
/// file" without tracking stage identity itself.
pub struct TaskProgressReporter {
    inner: ProgressReporter,
    task_labels: HashMap<TaskKey, String>,
}

impl TaskProgressReporter {
    pub fn new(tasks: &[&Task], emit: EmitFn) -> Self {
        let task_labels = tasks
            .iter()
            .map(|t| {
                (
                    t.key(),
                    format!("{} - {}", t.output().display_name, t.item().name),
                )
            })
            .collect();
        Self {
            inner: ProgressReporter::new(tasks.len(), emit),
            task_labels,
        }
    }

    pub fn reset(&mut self, new_stage_count: Option<usize>) {
        self.inner.reset(new_stage_count);
    }
}

impl ProgressSink for TaskProgressReporter {
    fn report(&mut self, percent: f64, message: Option<&str>, stage: Option<&TaskKey>) {
        let decorated = match (message, stage.and_then(|k| self.task_labels.get(k))) {
            (Some(msg), Some(label)) => Some(format!("{label}: {msg}")),
            (Some(msg), None) => Some(msg.to_owned()),
            (None, _) => None,
        };
        let stage_name = stage.map(TaskKey::to_string);
        self.inner
            .report(percent, decorated.as_deref(), stage_name.as_deref());
    }
}
