//! Scene items returned by the scan hook.

use serde::{Deserialize, Serialize};

/// One publishable thing discovered in the open scene.
///
/// Items are produced once per scan and immutable afterwards. The
/// `scene_item_type` decides which configured [`Output`](crate::Output)s
/// the item is paired with; items whose type matches no output are
/// dropped during task-list construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the item in the UI.
    pub name: String,

    /// Scene item type, matched against `Output::scene_item_type`.
    #[serde(rename = "type")]
    pub scene_item_type: String,

    /// Optional description shown alongside the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Initial selected state in the UI. Items are selected by default.
    #[serde(default = "default_true")]
    pub selected: bool,

    /// If true the item cannot be deselected.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    /// Host-specific passthrough data. The engine never interprets this;
    /// it is handed to the pre-publish and publish hooks untouched.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

/// An item returned by the scan hook is missing a mandatory field.
#[derive(Debug, thiserror::Error)]
#[error("item does not contain required field '{0}'")]
pub struct MissingFieldError(pub &'static str);

impl Item {
    /// Creates an item with the two mandatory fields; everything else at
    /// its default.
    pub fn new(name: impl Into<String>, scene_item_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scene_item_type: scene_item_type.into(),
            description: None,
            selected: true,
            required: false,
            extra: serde_json::Map::new(),
        }
    }

    /// Effective selected state: required items are always selected.
    pub fn is_selected(&self) -> bool {
        self.required || self.selected
    }

    /// Checks that the mandatory fields are present (non-empty).
    pub fn validate(&self) -> Result<(), MissingFieldError> {
        if self.name.is_empty() {
            return Err(MissingFieldError("name"));
        }
        if self.scene_item_type.is_empty() {
            return Err(MissingFieldError("type"));
        }
        Ok(())
    }
}
