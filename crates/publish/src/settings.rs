//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use scenepub_model::{Output, PRIMARY_OUTPUT_NAME};

use crate::error::PublishError;

/// Configuration for one publish app instance, loaded from JSON.
///
/// The primary output is described by the `primary_*` fields and always
/// gets the reserved name, selected and required; secondary outputs are
/// listed in the order their tasks should publish in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishSettings {
    /// App title, e.g. `"Publish Render"`.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Template matching the current work file.
    pub work_template: String,

    pub primary_scene_item_type: String,
    pub primary_display_name: String,
    #[serde(default)]
    pub primary_description: String,
    #[serde(default)]
    pub primary_icon: String,
    pub primary_published_file_type: String,
    pub primary_publish_template: String,

    #[serde(default)]
    pub secondary_outputs: Vec<Output>,
}

fn default_display_name() -> String {
    "Publish".into()
}

impl PublishSettings {
    pub fn from_json(text: &str) -> Result<Self, PublishError> {
        serde_json::from_str(text).map_err(|e| PublishError::Config(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, PublishError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Builds the primary output from the `primary_*` settings.
    pub fn primary_output(&self) -> Output {
        Output {
            name: PRIMARY_OUTPUT_NAME.into(),
            scene_item_type: self.primary_scene_item_type.clone(),
            display_name: self.primary_display_name.clone(),
            description: self.primary_description.clone(),
            icon_path: self.primary_icon.clone(),
            published_file_type: self.primary_published_file_type.clone(),
            publish_template: self.primary_publish_template.clone(),
            display_group: String::new(),
            selected: true,
            required: true,
        }
    }
}
