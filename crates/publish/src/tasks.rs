//! Task-list construction.

use std::collections::HashSet;

use tracing::debug;

use scenepub_model::{Item, Output, Task};

use crate::error::PublishError;

/// Builds the ordered task list for one session.
///
/// Items are first checked (mandatory fields, no duplicates, exactly one
/// item of the primary type) and filtered to those a configured output
/// consumes — unrecognized items are dropped with a diagnostic, not an
/// error. The cross join then runs output-major: outputs in
/// configuration order on the outside, items in scan order on the
/// inside. That ordering is a contract, not an accident — it lets
/// configuration control the publish order regardless of scan order, and
/// it puts the primary task first because the primary output is
/// processed first and owns its scene item type exclusively.
pub fn build_task_list(
    items: &[Item],
    primary_output: &Output,
    secondary_outputs: &[Output],
) -> Result<Vec<Task>, PublishError> {
    let primary_type = primary_output.scene_item_type.as_str();

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut primary_seen = false;
    for item in items {
        item.validate()?;
        if !seen.insert((item.name.as_str(), item.scene_item_type.as_str())) {
            return Err(PublishError::DuplicateItem(
                item.name.clone(),
                item.scene_item_type.clone(),
            ));
        }
        if item.scene_item_type == primary_type {
            if primary_seen {
                return Err(PublishError::MultiplePrimaryItems(primary_type.to_owned()));
            }
            primary_seen = true;
        }
    }
    if !primary_seen {
        return Err(PublishError::NoPrimaryItem(primary_type.to_owned()));
    }

    let known_types: HashSet<&str> = std::iter::once(primary_type)
        .chain(secondary_outputs.iter().map(|o| o.scene_item_type.as_str()))
        .collect();

    let valid_items: Vec<&Item> = items
        .iter()
        .filter(|item| {
            let known = known_types.contains(item.scene_item_type.as_str());
            if !known {
                debug!(
                    item = %item.name,
                    scene_item_type = %item.scene_item_type,
                    "skipping item with unrecognized scene item type"
                );
            }
            known
        })
        .collect();

    let mut tasks = Vec::new();
    for output in std::iter::once(primary_output).chain(secondary_outputs) {
        for item in &valid_items {
            if item.scene_item_type == output.scene_item_type {
                tasks.push(Task::new((*item).clone(), output.clone()));
            }
        }
    }
    Ok(tasks)
}
