//! Template keys: the typed tokens a template definition is built from.

use crate::fields::FieldValue;
use crate::template::TemplateError;

/// How a key's value is rendered and parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyKind {
    /// Free-form text, never spanning a directory separator.
    Str,
    /// Zero-padded integer, e.g. padding 3 renders `7` as `"007"`.
    Int { padding: usize },
}

/// One named token in a template definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateKey {
    pub name: String,
    pub kind: KeyKind,
    /// Abstract keys stand for a family of files rather than a single
    /// value — frame counters, stereo eyes. They are skipped when
    /// extracting fields for version queries and fall back to their
    /// placeholder when a path is built without a concrete value.
    pub is_abstract: bool,
    /// Literal stand-in rendered for an abstract key with no value,
    /// e.g. `"%04d"` for a frame counter.
    pub placeholder: Option<String>,
}

impl TemplateKey {
    pub fn str_key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: KeyKind::Str,
            is_abstract: false,
            placeholder: None,
        }
    }

    pub fn int_key(name: impl Into<String>, padding: usize) -> Self {
        Self {
            name: name.into(),
            kind: KeyKind::Int { padding },
            is_abstract: false,
            placeholder: None,
        }
    }

    /// An abstract frame counter rendered as `%0<padding>d` when no
    /// concrete frame number is supplied.
    pub fn frame_key(name: impl Into<String>, padding: usize) -> Self {
        Self {
            name: name.into(),
            kind: KeyKind::Int { padding },
            is_abstract: true,
            placeholder: Some(format!("%0{padding}d")),
        }
    }

    /// Renders a value the way this key formats it in paths.
    pub fn str_from_value(&self, value: &FieldValue) -> Result<String, TemplateError> {
        match (&self.kind, value) {
            (KeyKind::Str, FieldValue::Str(s)) => Ok(s.clone()),
            (KeyKind::Int { padding }, FieldValue::Int(v)) => {
                Ok(format!("{v:0width$}", width = *padding))
            }
            _ => Err(TemplateError::BadValue {
                key: self.name.clone(),
                value: value.to_string(),
            }),
        }
    }

    /// Parses a path fragment back into a value.
    pub fn value_from_str(&self, text: &str) -> Result<FieldValue, TemplateError> {
        let bad = || TemplateError::BadValue {
            key: self.name.clone(),
            value: text.to_owned(),
        };
        if text.is_empty() {
            return Err(bad());
        }
        match &self.kind {
            KeyKind::Str => {
                if text.contains('/') {
                    Err(bad())
                } else {
                    Ok(FieldValue::Str(text.to_owned()))
                }
            }
            KeyKind::Int { padding } => {
                if text.len() < *padding || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(bad());
                }
                text.parse::<i64>().map(FieldValue::Int).map_err(|_| bad())
            }
        }
    }
}
