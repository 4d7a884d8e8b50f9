//! Configured publish outputs.

use serde::{Deserialize, Serialize};

/// Reserved name of the single primary output.
pub const PRIMARY_OUTPUT_NAME: &str = "primary";

/// One configured deliverable definition.
///
/// Outputs come from configuration at session start. Exactly one carries
/// the name [`PRIMARY_OUTPUT_NAME`]; its `scene_item_type` must differ
/// from every secondary output's type, and secondary names must be
/// pairwise unique. The orchestrator enforces these rules when it builds
/// its output list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Unique name among the configured outputs.
    pub name: String,

    /// Scene item type this output consumes.
    pub scene_item_type: String,

    /// Name shown in the UI.
    pub display_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_path: String,

    /// Type tag recorded on the tracking database for published files.
    pub published_file_type: String,

    /// Name of the path template publish destinations are built from.
    /// Resolved through the template service at publish time.
    pub publish_template: String,

    /// UI grouping only; never interpreted by the engine.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_group: String,

    /// Initial selected state of tasks created for this output.
    #[serde(default = "default_true")]
    pub selected: bool,

    /// If true, tasks for this output cannot be deselected.
    #[serde(default)]
    pub required: bool,
}

fn default_true() -> bool {
    true
}

impl Output {
    pub fn is_primary(&self) -> bool {
        self.name == PRIMARY_OUTPUT_NAME
    }

    /// Effective selected state: required outputs are always selected.
    pub fn is_selected(&self) -> bool {
        self.required || self.selected
    }
}
