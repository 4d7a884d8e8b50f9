//! Publish-name derivation.

use std::path::Path;

use crate::fields::{FieldMap, FieldValue};
use crate::template::{Template, TemplateError};

const DELIMS: &[char] = &['_', '-', '.', ' '];

/// Works out the name a publish should be recorded under — where possible
/// a versionless one, so successive versions of the same file share a
/// name in the tracking database.
///
/// If the fields carry a non-empty `name` value that wins outright.
/// Otherwise the file stem is used, with the version token stripped out
/// when the template embeds one: a dummy version whose rendering cannot
/// already occur in the stem is substituted through the template to
/// locate the version text exactly, which is then removed along with a
/// doubled delimiter. When the stem is nothing but the version, the
/// version digits are replaced with `#` padding instead.
pub fn publish_name(
    template: &dyn Template,
    path: &Path,
    fields: Option<&FieldMap>,
) -> Result<String, TemplateError> {
    let fields = match fields {
        Some(f) => f.clone(),
        None => template.fields_from_path(path, &[])?,
    };

    if let Some(FieldValue::Str(name)) = fields.get("name") {
        if !name.is_empty() {
            return Ok(name.clone());
        }
    }

    let mut name = file_stem(path);

    let template_stem = file_stem(Path::new(template.definition()));
    if !template_stem.contains("{version}") {
        return Ok(name);
    }

    let version_key = template
        .key("version")
        .ok_or_else(|| TemplateError::MissingKey("version".into()))?;

    // Find a dummy version whose rendering doesn't already appear in the
    // stem, then rebuild the path with it so the version text can be
    // located unambiguously.
    let mut dummy = 9876i64;
    let dummy_str = loop {
        let text = version_key.str_from_value(&FieldValue::Int(dummy))?;
        if !name.contains(&text) {
            break text;
        }
        dummy += 1;
    };

    let mut dummy_fields = fields;
    dummy_fields.insert("version".into(), FieldValue::Int(dummy));
    name = file_stem(&template.apply_fields(&dummy_fields)?);

    let v_pos = match name.find(&dummy_str) {
        Some(pos) => pos,
        None => return Ok(name),
    };
    let pre = name[..v_pos].trim_end_matches('v');
    let mut post = &name[v_pos + dummy_str.len()..];

    if !pre.is_empty()
        && !post.is_empty()
        && pre.ends_with(DELIMS)
        && post.starts_with(DELIMS)
    {
        // only want one delimiter between the two halves
        post = post.trim_start_matches(DELIMS);
    }

    let versionless = format!("{pre}{post}");
    let versionless = versionless.trim_matches(DELIMS);

    if versionless.is_empty() {
        // the stem is effectively just a version number
        let zero = version_key.str_from_value(&FieldValue::Int(0))?;
        Ok(name.replace(&dummy_str, &"#".repeat(zero.len())))
    } else {
        Ok(versionless.to_owned())
    }
}

fn file_stem(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem.to_owned(),
        None => file_name,
    }
}
