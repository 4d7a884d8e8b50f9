//! Field values extracted from, or applied to, template paths.

use std::collections::BTreeMap;

/// A single field value. Integer fields carry their numeric value so
/// padding can be re-applied when building paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    Str(String),
    Int(i64),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            FieldValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Str(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(v) => write!(f, "{v}"),
        }
    }
}

/// Named fields for one path. Ordered so rendered diagnostics are stable.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Builds a [`FieldMap`] from `(name, value)` pairs.
pub fn field_map<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> FieldMap
where
    N: Into<String>,
    V: Into<FieldValue>,
{
    pairs
        .into_iter()
        .map(|(n, v)| (n.into(), v.into()))
        .collect()
}
