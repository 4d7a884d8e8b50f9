//! Record and request types exchanged with the tracking database.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scenepub_model::{Context, EntityRef, ProductionTaskRef};

/// Everything needed to register one published file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishRegistration {
    pub context: Context,
    pub path: PathBuf,
    /// Name the publish is recorded under (usually versionless).
    pub name: String,
    pub version_number: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<ProductionTaskRef>,
    /// Paths of publishes this one depends on (e.g. the primary publish
    /// for every secondary).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_paths: Vec<PathBuf>,
    pub published_file_type: String,
}

/// A registered publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishRecord {
    pub id: i64,
    pub name: String,
    pub version_number: i64,
    pub path: PathBuf,
    pub published_file_type: String,
    pub created_at: DateTime<Utc>,
}

impl PublishRecord {
    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::named("PublishedFile", self.id, &self.name)
    }
}

/// Filter set for publish lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishQuery {
    /// Match publishes registered at any of these paths.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_file_type: Option<String>,
}

impl PublishQuery {
    /// Query for publishes registered at the given paths.
    pub fn for_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
            ..Self::default()
        }
    }
}

/// Everything needed to create one review version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRequest {
    /// Version code, usually the publish name.
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub project: EntityRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<ProductionTaskRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_to_frames: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_to_movie: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_frame: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_frame: Option<i64>,
    /// Publishes this version presents for review.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publishes: Vec<EntityRef>,
}

/// A created review version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub id: i64,
    pub name: String,
}

impl VersionRecord {
    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::named("Version", self.id, &self.name)
    }
}
