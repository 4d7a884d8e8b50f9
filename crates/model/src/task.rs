//! Publish tasks: one item paired with one output.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::output::Output;

/// Identifies one task by its `(item name, output name)` pair — the key
/// hooks use when returning per-task results for a batch call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskKey {
    pub item: String,
    pub output: String,
}

impl TaskKey {
    pub fn new(item: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            output: output.into(),
        }
    }
}

impl std::fmt::Display for TaskKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.output, self.item)
    }
}

/// One unit of publish work.
///
/// A task is a plain record: the orchestrator is its single writer, and
/// mutations to either error list are broadcast to observers as
/// [`PublishEvent::TaskModified`](crate::PublishEvent) by the session that
/// performed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    item: Item,
    output: Output,

    /// Warnings collected during the pre-publish phase.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pre_publish_errors: Vec<String>,

    /// Failures collected during the publish phase.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    publish_errors: Vec<String>,
}

impl Task {
    pub fn new(item: Item, output: Output) -> Self {
        Self {
            item,
            output,
            pre_publish_errors: Vec::new(),
            publish_errors: Vec::new(),
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn key(&self) -> TaskKey {
        TaskKey::new(&self.item.name, &self.output.name)
    }

    /// A task is selected by default when both its item and output are.
    pub fn is_selected(&self) -> bool {
        self.item.is_selected() && self.output.is_selected()
    }

    /// A task is pinned when either side of the pairing is required.
    pub fn is_required(&self) -> bool {
        self.item.required || self.output.required
    }

    pub fn pre_publish_errors(&self) -> &[String] {
        &self.pre_publish_errors
    }

    pub fn publish_errors(&self) -> &[String] {
        &self.publish_errors
    }

    pub fn set_pre_publish_errors(&mut self, errors: Vec<String>) {
        self.pre_publish_errors = errors;
    }

    pub fn set_publish_errors(&mut self, errors: Vec<String>) {
        self.publish_errors = errors;
    }
}
