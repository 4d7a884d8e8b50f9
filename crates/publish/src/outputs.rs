//! Output configuration validation.

use std::collections::HashSet;

use scenepub_model::{Output, PRIMARY_OUTPUT_NAME};

use crate::error::PublishError;

/// Checks the configured output set.
///
/// Secondary names must be pairwise unique, none may use the reserved
/// primary name, and no secondary may consume the primary scene item
/// type — the task list could otherwise pair the primary item twice.
pub fn validate_outputs(primary: &Output, secondary: &[Output]) -> Result<(), PublishError> {
    let mut names: HashSet<&str> = HashSet::new();
    for output in secondary {
        if output.name == PRIMARY_OUTPUT_NAME {
            return Err(PublishError::Config(format!(
                "secondary output name cannot be '{PRIMARY_OUTPUT_NAME}'"
            )));
        }
        if !names.insert(&output.name) {
            return Err(PublishError::Config(format!(
                "multiple secondary outputs found with the name '{}'",
                output.name
            )));
        }
        if output.scene_item_type == primary.scene_item_type {
            return Err(PublishError::Config(format!(
                "secondary output '{}' is defined with the same scene_item_type ({}) as the \
                 primary output - this is not allowed",
                output.name, primary.scene_item_type
            )));
        }
    }
    Ok(())
}
