//! The tracking service trait.

use std::path::Path;

use scenepub_model::{Context, EntityRef, ProductionTaskRef};

use crate::error::TrackingError;
use crate::records::{
    PublishQuery, PublishRecord, PublishRegistration, VersionRecord, VersionRequest,
};

/// Field review media is uploaded to on a version record.
pub const REVIEW_MEDIA_FIELD: &str = "uploaded_movie";

/// Abstract client for the production-tracking database.
///
/// The shell implements this on top of the real site API; the engine and
/// the hook implementations never see anything but the trait. `Send +
/// Sync` so an [`UploadWorker`](crate::UploadWorker) can push media from
/// its own thread.
pub trait TrackingService: Send + Sync {
    /// Creates a publish record for a file written to its publish
    /// location.
    fn register_publish(
        &self,
        registration: &PublishRegistration,
    ) -> Result<PublishRecord, TrackingError>;

    /// Finds existing publish records matching a query.
    fn find_publishes(&self, query: &PublishQuery) -> Result<Vec<PublishRecord>, TrackingError>;

    /// Creates a review version record.
    fn create_version(&self, request: &VersionRequest) -> Result<VersionRecord, TrackingError>;

    /// Uploads a file into a field on an existing record.
    fn upload(
        &self,
        entity: &EntityRef,
        path: &Path,
        field_name: &str,
    ) -> Result<(), TrackingError>;

    /// Uploads a thumbnail image for an existing record.
    fn upload_thumbnail(&self, entity: &EntityRef, path: &Path) -> Result<(), TrackingError>;

    /// Lists the units of work a publish can be associated with in the
    /// given context, ordered by step then content.
    fn production_tasks(&self, context: &Context)
    -> Result<Vec<ProductionTaskRef>, TrackingError>;
}
