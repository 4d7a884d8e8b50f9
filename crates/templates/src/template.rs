//! The template service contract.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::fields::FieldMap;
use crate::key::TemplateKey;

/// Errors produced by template parsing, matching and path construction.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("malformed template definition '{definition}': {reason}")]
    Parse { definition: String, reason: String },

    #[error("path '{path}' does not match template '{definition}'")]
    Mismatch { path: PathBuf, definition: String },

    #[error("no value for key '{0}'")]
    MissingKey(String),

    #[error("'{value}' is not a valid value for key '{key}'")]
    BadValue { key: String, value: String },

    #[error("template '{0}' not found")]
    UnknownTemplate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A path template: a bidirectional mapping between field sets and
/// filesystem paths.
pub trait Template: Send + Sync {
    /// The raw definition, e.g. `"shots/{Shot}/publish/{name}_v{version}.{ext}"`.
    fn definition(&self) -> &str;

    /// The typed keys the definition is built from.
    fn keys(&self) -> &[TemplateKey];

    /// Extracts field values from a concrete path. Keys listed in
    /// `skip_keys` are consumed but not reported.
    fn fields_from_path(&self, path: &Path, skip_keys: &[&str])
    -> Result<FieldMap, TemplateError>;

    /// Builds a path from field values. Abstract keys without a value
    /// fall back to their placeholder.
    fn apply_fields(&self, fields: &FieldMap) -> Result<PathBuf, TemplateError>;

    /// Enumerates existing files matching this template, holding the
    /// given fields fixed and leaving `skip_keys` free.
    fn paths_on_disk(
        &self,
        fields: &FieldMap,
        skip_keys: &[&str],
    ) -> Result<Vec<PathBuf>, TemplateError>;

    /// Whether a path matches this template at all.
    fn validate(&self, path: &Path) -> bool {
        self.fields_from_path(path, &[]).is_ok()
    }

    /// Looks up a key by name.
    fn key(&self, name: &str) -> Option<&TemplateKey> {
        self.keys().iter().find(|k| k.name == name)
    }
}

/// Resolves template names from configuration to template instances.
pub trait TemplateResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Arc<dyn Template>>;
}

/// Name-keyed template collection; the usual resolver implementation.
#[derive(Default)]
pub struct TemplateSet {
    templates: HashMap<String, Arc<dyn Template>>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, template: Arc<dyn Template>) {
        self.templates.insert(name.into(), template);
    }
}

impl TemplateResolver for TemplateSet {
    fn resolve(&self, name: &str) -> Option<Arc<dyn Template>> {
        self.templates.get(name).cloned()
    }
}
