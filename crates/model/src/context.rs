//! Pipeline context: where in the production a publish session runs.

use serde::{Deserialize, Serialize};

/// Reference to a record in the tracking database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Record type, e.g. `"Project"`, `"Shot"`, `"Version"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl EntityRef {
    pub fn new(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id,
            name: String::new(),
        }
    }

    pub fn named(kind: impl Into<String>, id: i64, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id,
            name: name.into(),
        }
    }
}

/// A unit of work in the tracking database that a publish can be
/// associated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionTaskRef {
    pub id: i64,
    /// Pipeline step the task belongs to, e.g. `"Animation"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub step: String,
    /// Task content/name, e.g. `"blocking"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
}

/// The pipeline context a session runs in.
///
/// `entity` is absent for project-only contexts; task queries then fall
/// back to the project itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub project: EntityRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityRef>,
}

impl Context {
    /// The entity task queries should filter on: the context entity when
    /// there is one, the project otherwise.
    pub fn task_entity(&self) -> &EntityRef {
        self.entity.as_ref().unwrap_or(&self.project)
    }
}
