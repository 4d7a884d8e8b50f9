//! `{token}`-pattern template implementation.

use std::path::{Path, PathBuf};

use crate::fields::{FieldMap, FieldValue};
use crate::key::{KeyKind, TemplateKey};
use crate::template::{Template, TemplateError};

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Key(usize),
}

/// A template whose definition interleaves literal text with `{key}`
/// tokens, anchored at a filesystem root.
///
/// Definitions always use `/` separators; incoming paths are normalized
/// before matching so Windows paths compare equal.
#[derive(Debug)]
pub struct TokenTemplate {
    root: PathBuf,
    definition: String,
    segments: Vec<Segment>,
    keys: Vec<TemplateKey>,
}

impl TokenTemplate {
    /// Parses a definition against the key set. Every `{token}` must name
    /// a key; adjacent tokens with no separating literal are rejected as
    /// ambiguous.
    pub fn new(
        root: impl Into<PathBuf>,
        definition: impl Into<String>,
        keys: Vec<TemplateKey>,
    ) -> Result<Self, TemplateError> {
        let definition = definition.into();
        let parse_err = |reason: &str| TemplateError::Parse {
            definition: definition.clone(),
            reason: reason.to_owned(),
        };

        let mut segments = Vec::new();
        let mut rest = definition.as_str();
        let mut last_was_key = false;
        while !rest.is_empty() {
            match rest.find('{') {
                None => {
                    segments.push(Segment::Literal(rest.to_owned()));
                    rest = "";
                }
                Some(0) => {
                    let end = rest.find('}').ok_or_else(|| parse_err("unterminated token"))?;
                    let name = &rest[1..end];
                    if name.is_empty() {
                        return Err(parse_err("empty token"));
                    }
                    let index = keys
                        .iter()
                        .position(|k| k.name == name)
                        .ok_or_else(|| parse_err(&format!("unknown key '{name}'")))?;
                    if last_was_key {
                        return Err(parse_err("adjacent tokens without a separator"));
                    }
                    segments.push(Segment::Key(index));
                    last_was_key = true;
                    rest = &rest[end + 1..];
                    continue;
                }
                Some(pos) => {
                    segments.push(Segment::Literal(rest[..pos].to_owned()));
                    rest = &rest[pos..];
                }
            }
            last_was_key = false;
        }

        Ok(Self {
            root: root.into(),
            definition,
            segments,
            keys,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn mismatch(&self, path: &Path) -> TemplateError {
        TemplateError::Mismatch {
            path: path.to_owned(),
            definition: self.definition.clone(),
        }
    }

    /// The literal the next segment starts with, if any. Used to
    /// terminate free-form key matches.
    fn next_literal(&self, segment_index: usize) -> Option<&str> {
        match self.segments.get(segment_index + 1) {
            Some(Segment::Literal(lit)) => Some(lit.as_str()),
            _ => None,
        }
    }
}

impl Template for TokenTemplate {
    fn definition(&self) -> &str {
        &self.definition
    }

    fn keys(&self) -> &[TemplateKey] {
        &self.keys
    }

    fn fields_from_path(
        &self,
        path: &Path,
        skip_keys: &[&str],
    ) -> Result<FieldMap, TemplateError> {
        let rel = path
            .strip_prefix(&self.root)
            .map_err(|_| self.mismatch(path))?;
        let rel = rel.to_string_lossy().replace('\\', "/");

        let mut fields = FieldMap::new();
        let mut pos = 0usize;
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Literal(lit) => {
                    if !rel[pos..].starts_with(lit.as_str()) {
                        return Err(self.mismatch(path));
                    }
                    pos += lit.len();
                }
                Segment::Key(ki) => {
                    let key = &self.keys[*ki];
                    let rest = &rel[pos..];

                    // Abstract keys may appear as their placeholder.
                    let text = if let Some(ph) = key
                        .placeholder
                        .as_deref()
                        .filter(|ph| key.is_abstract && rest.starts_with(*ph))
                    {
                        ph
                    } else {
                        match &key.kind {
                            KeyKind::Int { .. } => {
                                let len =
                                    rest.bytes().take_while(u8::is_ascii_digit).count();
                                &rest[..len]
                            }
                            KeyKind::Str => match self.next_literal(i) {
                                Some(lit) => {
                                    let end = rest
                                        .find(lit)
                                        .ok_or_else(|| self.mismatch(path))?;
                                    &rest[..end]
                                }
                                None => rest,
                            },
                        }
                    };
                    if text.is_empty() || text.contains('/') {
                        return Err(self.mismatch(path));
                    }
                    pos += text.len();

                    if skip_keys.contains(&key.name.as_str()) {
                        continue;
                    }
                    let value = if key.placeholder.as_deref() == Some(text) {
                        FieldValue::Str(text.to_owned())
                    } else {
                        key.value_from_str(text).map_err(|_| self.mismatch(path))?
                    };
                    match fields.get(&key.name) {
                        Some(existing) if *existing != value => {
                            return Err(self.mismatch(path));
                        }
                        _ => {
                            fields.insert(key.name.clone(), value);
                        }
                    }
                }
            }
        }
        if pos != rel.len() {
            return Err(self.mismatch(path));
        }
        Ok(fields)
    }

    fn apply_fields(&self, fields: &FieldMap) -> Result<PathBuf, TemplateError> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => rendered.push_str(lit),
                Segment::Key(ki) => {
                    let key = &self.keys[*ki];
                    match fields.get(&key.name) {
                        Some(value) => rendered.push_str(&key.str_from_value(value)?),
                        None => match key.placeholder.as_deref().filter(|_| key.is_abstract) {
                            Some(ph) => rendered.push_str(ph),
                            None => return Err(TemplateError::MissingKey(key.name.clone())),
                        },
                    }
                }
            }
        }
        Ok(self.root.join(rendered))
    }

    fn paths_on_disk(
        &self,
        fields: &FieldMap,
        skip_keys: &[&str],
    ) -> Result<Vec<PathBuf>, TemplateError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut found = Vec::new();
        let mut pending = vec![self.root.clone()];
        while let Some(dir) = pending.pop() {
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                if entry.file_type()?.is_dir() {
                    pending.push(path);
                    continue;
                }
                let Ok(path_fields) = self.fields_from_path(&path, skip_keys) else {
                    continue;
                };
                let matches = fields.iter().all(|(name, value)| {
                    skip_keys.contains(&name.as_str())
                        || path_fields.get(name).is_none_or(|v| v == value)
                });
                if matches {
                    found.push(path);
                }
            }
        }
        found.sort();
        Ok(found)
    }
}
