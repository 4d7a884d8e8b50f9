//! Next-version lookup for work files.

use crate::fields::{FieldMap, FieldValue};
use crate::template::{Template, TemplateError};

/// Finds the next available version for the file described by `fields`.
///
/// Scans disk for every file matching the template with the version (and
/// any abstract/sequence keys, plus the stereo `eye` key) left free,
/// then returns one past the highest version seen — or past the current
/// field value when that is higher.
pub fn next_available_version(
    template: &dyn Template,
    fields: &FieldMap,
) -> Result<i64, TemplateError> {
    let mut skip_keys: Vec<&str> = template
        .keys()
        .iter()
        .filter(|k| k.is_abstract)
        .map(|k| k.name.as_str())
        .collect();
    skip_keys.push("version");
    skip_keys.push("eye");

    let existing = template.paths_on_disk(fields, &skip_keys)?;

    let mut highest = 0i64;
    for path in &existing {
        let Ok(path_fields) = template.fields_from_path(path, &[]) else {
            continue;
        };
        if let Some(FieldValue::Int(version)) = path_fields.get("version") {
            highest = highest.max(*version);
        }
    }

    let current = fields
        .get("version")
        .and_then(FieldValue::as_int)
        .unwrap_or(0);
    Ok(highest.max(current) + 1)
}
