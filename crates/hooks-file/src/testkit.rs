//! Shared fixtures for the file-mode hook tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use scenepub_hooks::{OutputView, TaskView};
use scenepub_model::{Context, EntityRef, Item, ProductionTaskRef};
use scenepub_templates::{Template, TemplateKey, TokenTemplate};
use scenepub_tracking::{
    PublishQuery, PublishRecord, PublishRegistration, TrackingError, TrackingService,
    VersionRecord, VersionRequest,
};

use crate::scene::{FRAME_PARAM, PATH_PARAM, RENDER_SEQUENCE_TYPE, WORK_FILE_TYPE};

/// A staged project directory with work file, render frames and the
/// templates describing them.
pub struct Workspace {
    dir: tempfile::TempDir,
    pub work_template: Arc<dyn Template>,
    pub publish_template: Arc<dyn Template>,
    pub render_work_template: Arc<dyn Template>,
    pub render_publish_template: Arc<dyn Template>,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().to_owned();

        let scene_keys = || {
            vec![
                TemplateKey::str_key("name"),
                TemplateKey::int_key("version", 3),
                TemplateKey::str_key("ext"),
            ]
        };
        let render_keys = || {
            vec![
                TemplateKey::str_key("name"),
                TemplateKey::int_key("version", 3),
                TemplateKey::frame_key("FRAME", 4),
            ]
        };

        let work_template: Arc<dyn Template> = Arc::new(
            TokenTemplate::new(&root, "work/{name}_v{version}.{ext}", scene_keys()).unwrap(),
        );
        let publish_template: Arc<dyn Template> = Arc::new(
            TokenTemplate::new(&root, "publish/{name}_v{version}.{ext}", scene_keys()).unwrap(),
        );
        let render_work_template: Arc<dyn Template> = Arc::new(
            TokenTemplate::new(
                &root,
                "renders/work/{name}_v{version}.{FRAME}.exr",
                render_keys(),
            )
            .unwrap(),
        );
        let render_publish_template: Arc<dyn Template> = Arc::new(
            TokenTemplate::new(
                &root,
                "renders/publish/{name}_v{version}.{FRAME}.exr",
                render_keys(),
            )
            .unwrap(),
        );

        std::fs::create_dir_all(root.join("work")).unwrap();
        std::fs::write(root.join("work/master_v001.ma"), b"scene data").unwrap();
        std::fs::create_dir_all(root.join("renders/work")).unwrap();
        for frame in 1..=3 {
            std::fs::write(
                root.join(format!("renders/work/beauty_v001.{frame:04}.exr")),
                b"exr data",
            )
            .unwrap();
        }

        Self {
            dir,
            work_template,
            publish_template,
            render_work_template,
            render_publish_template,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn work_file(&self) -> PathBuf {
        self.root().join("work/master_v001.ma")
    }

    pub fn frame_path(&self, frame: u32) -> PathBuf {
        self.root()
            .join(format!("renders/work/beauty_v001.{frame:04}.exr"))
    }

    pub fn primary_publish_path(&self) -> PathBuf {
        self.root().join("publish/master_v001.ma")
    }

    pub fn primary_task_view(&self) -> TaskView {
        self.primary_task_view_for(&self.work_file())
    }

    pub fn primary_task_view_for(&self, work_file: &Path) -> TaskView {
        let mut item = Item::new("master_v001.ma", WORK_FILE_TYPE);
        item.extra.insert(
            PATH_PARAM.into(),
            serde_json::Value::String(work_file.to_string_lossy().into_owned()),
        );
        TaskView {
            item,
            output: OutputView {
                name: "primary".into(),
                display_name: "Work File".into(),
                published_file_type: "Scene File".into(),
                publish_template: self.publish_template.clone(),
            },
        }
    }

    pub fn render_task_view(&self) -> TaskView {
        let mut item = Item::new("beauty_v001.0001.exr", RENDER_SEQUENCE_TYPE);
        item.extra.insert(
            FRAME_PARAM.into(),
            serde_json::Value::String(self.frame_path(1).to_string_lossy().into_owned()),
        );
        TaskView {
            item,
            output: OutputView {
                name: "render".into(),
                display_name: "Render Sequence".into(),
                published_file_type: "Rendered Image".into(),
                publish_template: self.render_publish_template.clone(),
            },
        }
    }

    pub fn context(&self) -> Context {
        Context {
            project: EntityRef::named("Project", 1, "demo"),
            entity: Some(EntityRef::named("Shot", 2, "sh010")),
            step: None,
            user: Some(EntityRef::named("HumanUser", 3, "artist")),
        }
    }
}

/// Records every tracking call for assertions.
#[derive(Default)]
pub struct MockTracking {
    next_id: AtomicI64,
    pub registrations: Mutex<Vec<PublishRegistration>>,
    pub versions: Mutex<Vec<VersionRequest>>,
    pub uploads: Mutex<Vec<(EntityRef, PathBuf, String)>>,
    pub thumbnails: Mutex<Vec<(EntityRef, PathBuf)>>,
}

impl TrackingService for MockTracking {
    fn register_publish(
        &self,
        registration: &PublishRegistration,
    ) -> Result<PublishRecord, TrackingError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.registrations.lock().unwrap().push(registration.clone());
        Ok(PublishRecord {
            id,
            name: registration.name.clone(),
            version_number: registration.version_number,
            path: registration.path.clone(),
            published_file_type: registration.published_file_type.clone(),
            created_at: chrono::Utc::now(),
        })
    }

    fn find_publishes(&self, query: &PublishQuery) -> Result<Vec<PublishRecord>, TrackingError> {
        let registrations = self.registrations.lock().unwrap();
        Ok(registrations
            .iter()
            .enumerate()
            .filter(|(_, r)| query.paths.is_empty() || query.paths.contains(&r.path))
            .map(|(i, r)| PublishRecord {
                id: i as i64 + 1,
                name: r.name.clone(),
                version_number: r.version_number,
                path: r.path.clone(),
                published_file_type: r.published_file_type.clone(),
                created_at: chrono::Utc::now(),
            })
            .collect())
    }

    fn create_version(&self, request: &VersionRequest) -> Result<VersionRecord, TrackingError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.versions.lock().unwrap().push(request.clone());
        Ok(VersionRecord {
            id,
            name: request.name.clone(),
        })
    }

    fn upload(
        &self,
        entity: &EntityRef,
        path: &Path,
        field_name: &str,
    ) -> Result<(), TrackingError> {
        self.uploads.lock().unwrap().push((
            entity.clone(),
            path.to_owned(),
            field_name.to_owned(),
        ));
        Ok(())
    }

    fn upload_thumbnail(&self, entity: &EntityRef, path: &Path) -> Result<(), TrackingError> {
        self.thumbnails
            .lock()
            .unwrap()
            .push((entity.clone(), path.to_owned()));
        Ok(())
    }

    fn production_tasks(
        &self,
        _context: &Context,
    ) -> Result<Vec<ProductionTaskRef>, TrackingError> {
        Ok(vec![ProductionTaskRef {
            id: 21,
            step: "Lighting".into(),
            content: "render".into(),
        }])
    }
}
