//! Background review-media upload.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{debug, warn};

use scenepub_model::EntityRef;

use crate::service::{REVIEW_MEDIA_FIELD, TrackingService};

/// Uploads review media for a version on its own thread.
///
/// Uploads can take minutes on a slow link; running them inline would
/// make the host application look hung mid-publish. The caller spawns
/// the worker, keeps pumping its own work, and [`join`](Self::join)s for
/// the error list. Failures never panic the publish: they come back as
/// plain strings for the task's error list.
///
/// When the movie upload fails (or there is no movie), the thumbnail is
/// uploaded instead so the version at least has an image attached.
pub struct UploadWorker {
    handle: JoinHandle<Vec<String>>,
}

impl UploadWorker {
    pub fn spawn(
        service: Arc<dyn TrackingService>,
        version: EntityRef,
        movie_path: Option<PathBuf>,
        thumbnail_path: Option<PathBuf>,
    ) -> Self {
        let handle = std::thread::spawn(move || {
            let mut errors = Vec::new();
            let mut movie_uploaded = false;

            if let Some(movie) = &movie_path {
                debug!(version = version.id, path = %movie.display(), "uploading review media");
                match service.upload(&version, movie, REVIEW_MEDIA_FIELD) {
                    Ok(()) => movie_uploaded = true,
                    Err(e) => {
                        warn!(version = version.id, error = %e, "review media upload failed");
                        errors.push(format!("Movie upload to the tracking service failed: {e}"));
                    }
                }
            }

            if !movie_uploaded {
                if let Some(thumb) = &thumbnail_path {
                    if let Err(e) = service.upload_thumbnail(&version, thumb) {
                        warn!(version = version.id, error = %e, "thumbnail upload failed");
                        errors.push(format!(
                            "Thumbnail upload to the tracking service failed: {e}"
                        ));
                    }
                }
            }

            errors
        });
        Self { handle }
    }

    /// Blocks until the upload finishes, returning collected errors.
    pub fn join(self) -> Vec<String> {
        self.handle
            .join()
            .unwrap_or_else(|_| vec!["Upload worker panicked".into()])
    }
}
