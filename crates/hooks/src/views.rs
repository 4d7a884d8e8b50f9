//! The task shapes hooks are given.
//!
//! Hooks never see the engine's own task records — they get a view
//! pairing the scanned item with the resolved output, template handle
//! included, and hand results back keyed by [`TaskKey`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use scenepub_model::{Item, TaskKey};
use scenepub_templates::Template;

/// The output half of a task, with its publish template resolved.
#[derive(Clone)]
pub struct OutputView {
    /// Output name; the primary output is always named `"primary"`.
    pub name: String,
    pub display_name: String,
    /// Type tag to record on the tracking database.
    pub published_file_type: String,
    pub publish_template: Arc<dyn Template>,
}

impl std::fmt::Debug for OutputView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputView")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("published_file_type", &self.published_file_type)
            .field("publish_template", &self.publish_template.definition())
            .finish()
    }
}

/// One publish task as seen by a hook.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub item: Item,
    pub output: OutputView,
}

impl TaskView {
    pub fn key(&self) -> TaskKey {
        TaskKey::new(&self.item.name, &self.output.name)
    }
}

/// Per-task outcome of a batched hook call.
///
/// Only tasks with something to report need an entry; the engine clears
/// the error lists of every task without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub task: TaskKey,
    pub errors: Vec<String>,
}

impl TaskResult {
    pub fn new(task: TaskKey, errors: Vec<String>) -> Self {
        Self { task, errors }
    }
}
