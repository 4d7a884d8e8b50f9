fn main() {
    println!("Run `cargo test -p publish-flow` to execute the end-to-end publish flow tests.");
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::path::{Path, PathBuf};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::mpsc::Receiver;

    use scenepub_hooks::{
        HookError, HookSet, PostPublishHook, PrePublishHook, PublishHook, PublishParams,
        ScanHook, TaskResult, TaskView, ThumbnailHook,
    };
    use scenepub_model::{
        Context, EntityRef, Item, Output, ProductionTaskRef, PublishEvent, SessionPhase,
        Task, TaskKey,
    };
    use scenepub_progress::ProgressSink;
    use scenepub_publish::{PublishError, PublishHandler, PublishSettings};
    use scenepub_templates::{
        FieldMap, Template, TemplateError, TemplateKey, TemplateResolver, TemplateSet,
    };
    use scenepub_tracking::{
        PublishQuery, PublishRecord, PublishRegistration, TrackingError, TrackingService,
        VersionRecord, VersionRequest,
    };

    // -----------------------------------------------------------------
    // Mock collaborators
    // -----------------------------------------------------------------

    /// Template that accepts every path and renders a fixed one.
    struct AnyTemplate(String);

    impl Template for AnyTemplate {
        fn definition(&self) -> &str {
            &self.0
        }

        fn keys(&self) -> &[TemplateKey] {
            &[]
        }

        fn fields_from_path(
            &self,
            _path: &Path,
            _skip_keys: &[&str],
        ) -> Result<FieldMap, TemplateError> {
            Ok(FieldMap::new())
        }

        fn apply_fields(&self, _fields: &FieldMap) -> Result<PathBuf, TemplateError> {
            Ok(PathBuf::from(format!("/publish/{}", self.0)))
        }

        fn paths_on_disk(
            &self,
            _fields: &FieldMap,
            _skip_keys: &[&str],
        ) -> Result<Vec<PathBuf>, TemplateError> {
            Ok(Vec::new())
        }
    }

    fn template_set() -> Arc<dyn TemplateResolver> {
        let mut set = TemplateSet::new();
        for name in ["work", "primary_publish", "geo_publish", "cam_publish"] {
            set.insert(name, Arc::new(AnyTemplate(name.into())));
        }
        Arc::new(set)
    }

    #[derive(Default)]
    struct NullTracking;

    impl TrackingService for NullTracking {
        fn register_publish(
            &self,
            registration: &PublishRegistration,
        ) -> Result<PublishRecord, TrackingError> {
            Ok(PublishRecord {
                id: 1,
                name: registration.name.clone(),
                version_number: registration.version_number,
                path: registration.path.clone(),
                published_file_type: registration.published_file_type.clone(),
                created_at: chrono::Utc::now(),
            })
        }

        fn find_publishes(
            &self,
            _query: &PublishQuery,
        ) -> Result<Vec<PublishRecord>, TrackingError> {
            Ok(Vec::new())
        }

        fn create_version(
            &self,
            request: &VersionRequest,
        ) -> Result<VersionRecord, TrackingError> {
            Ok(VersionRecord {
                id: 1,
                name: request.name.clone(),
            })
        }

        fn upload(
            &self,
            _entity: &EntityRef,
            _path: &Path,
            _field_name: &str,
        ) -> Result<(), TrackingError> {
            Ok(())
        }

        fn upload_thumbnail(
            &self,
            _entity: &EntityRef,
            _path: &Path,
        ) -> Result<(), TrackingError> {
            Ok(())
        }

        fn production_tasks(
            &self,
            _context: &Context,
        ) -> Result<Vec<ProductionTaskRef>, TrackingError> {
            Ok(vec![ProductionTaskRef {
                id: 77,
                step: "Animation".into(),
                content: "blocking".into(),
            }])
        }
    }

    struct ScriptedScan {
        items: Vec<Item>,
    }

    impl ScanHook for ScriptedScan {
        fn scan(&mut self) -> Result<Vec<Item>, HookError> {
            Ok(self.items.clone())
        }
    }

    struct ScriptedPrePublish {
        primary: Result<Vec<String>, String>,
        secondary: Result<Vec<TaskResult>, String>,
        batches: Rc<RefCell<Vec<Vec<TaskKey>>>>,
    }

    impl PrePublishHook for ScriptedPrePublish {
        fn validate_primary(
            &mut self,
            task: &TaskView,
            _work_template: &dyn Template,
            progress: &mut dyn ProgressSink,
        ) -> Result<Vec<String>, HookError> {
            progress.report(0.0, Some("Validating"), Some(&task.key()));
            let result = self
                .primary
                .clone()
                .map_err(HookError::Message);
            progress.report(100.0, None, None);
            result
        }

        fn validate_secondary(
            &mut self,
            tasks: &[TaskView],
            _work_template: &dyn Template,
            _progress: &mut dyn ProgressSink,
        ) -> Result<Vec<TaskResult>, HookError> {
            self.batches
                .borrow_mut()
                .push(tasks.iter().map(TaskView::key).collect());
            self.secondary.clone().map_err(HookError::Message)
        }
    }

    #[derive(Default)]
    struct PublishCalls {
        primary_called: bool,
        secondary_called: bool,
        secondary_primary_path: Option<PathBuf>,
        secondary_batch: Vec<TaskKey>,
    }

    struct ScriptedPublish {
        primary: Result<PathBuf, String>,
        secondary: Result<Vec<TaskResult>, String>,
        calls: Rc<RefCell<PublishCalls>>,
    }

    impl PublishHook for ScriptedPublish {
        fn publish_primary(
            &mut self,
            task: &TaskView,
            _params: &PublishParams<'_>,
            progress: &mut dyn ProgressSink,
        ) -> Result<PathBuf, HookError> {
            self.calls.borrow_mut().primary_called = true;
            progress.report(0.0, Some("Publishing"), Some(&task.key()));
            let result = self.primary.clone().map_err(HookError::Message);
            progress.report(100.0, None, None);
            result
        }

        fn publish_secondary(
            &mut self,
            tasks: &[TaskView],
            _primary_task: &TaskView,
            primary_publish_path: &Path,
            _params: &PublishParams<'_>,
            _progress: &mut dyn ProgressSink,
        ) -> Result<Vec<TaskResult>, HookError> {
            let mut calls = self.calls.borrow_mut();
            calls.secondary_called = true;
            calls.secondary_primary_path = Some(primary_publish_path.to_owned());
            calls.secondary_batch = tasks.iter().map(TaskView::key).collect();
            self.secondary.clone().map_err(HookError::Message)
        }
    }

    struct ScriptedPost {
        called: Rc<Cell<bool>>,
    }

    impl PostPublishHook for ScriptedPost {
        fn finalize(
            &mut self,
            _work_template: &dyn Template,
            _primary_task: &TaskView,
            _secondary_tasks: &[TaskView],
            progress: &mut dyn ProgressSink,
        ) -> Result<(), HookError> {
            self.called.set(true);
            progress.report(100.0, Some("Post-publish"), None);
            Ok(())
        }
    }

    struct NoThumbnail;

    impl ThumbnailHook for NoThumbnail {
        fn capture(&mut self) -> Result<Option<PathBuf>, HookError> {
            Ok(None)
        }
    }

    // -----------------------------------------------------------------
    // Scenario harness
    // -----------------------------------------------------------------

    fn secondary_output(name: &str, scene_item_type: &str, display: &str, template: &str) -> Output {
        Output {
            name: name.into(),
            scene_item_type: scene_item_type.into(),
            display_name: display.into(),
            description: String::new(),
            icon_path: String::new(),
            published_file_type: "File".into(),
            publish_template: template.into(),
            display_group: String::new(),
            selected: true,
            required: false,
        }
    }

    fn settings(secondary_outputs: Vec<Output>) -> PublishSettings {
        PublishSettings {
            display_name: "Publish".into(),
            work_template: "work".into(),
            primary_scene_item_type: "work_file".into(),
            primary_display_name: "Current Scene".into(),
            primary_description: String::new(),
            primary_icon: String::new(),
            primary_published_file_type: "Scene".into(),
            primary_publish_template: "primary_publish".into(),
            secondary_outputs,
        }
    }

    fn context() -> Context {
        Context {
            project: EntityRef::named("Project", 1, "demo"),
            entity: Some(EntityRef::named("Shot", 2, "sh010")),
            step: None,
            user: None,
        }
    }

    struct Scenario {
        handler: PublishHandler,
        events: Receiver<PublishEvent>,
        post_called: Rc<Cell<bool>>,
        publish_calls: Rc<RefCell<PublishCalls>>,
        pre_batches: Rc<RefCell<Vec<Vec<TaskKey>>>>,
    }

    struct ScenarioConfig {
        items: Vec<Item>,
        secondary_outputs: Vec<Output>,
        primary_warnings: Result<Vec<String>, String>,
        secondary_pre: Result<Vec<TaskResult>, String>,
        primary_publish: Result<PathBuf, String>,
        secondary_publish: Result<Vec<TaskResult>, String>,
    }

    impl Default for ScenarioConfig {
        fn default() -> Self {
            Self {
                items: vec![
                    Item::new("scene.ma", "work_file"),
                    Item::new("charA", "geometry"),
                ],
                secondary_outputs: vec![secondary_output(
                    "geometry",
                    "geometry",
                    "Geometry Cache",
                    "geo_publish",
                )],
                primary_warnings: Ok(Vec::new()),
                secondary_pre: Ok(Vec::new()),
                primary_publish: Ok(PathBuf::from("/publish/scene.ma")),
                secondary_publish: Ok(Vec::new()),
            }
        }
    }

    impl Scenario {
        fn build(config: ScenarioConfig) -> Self {
            let post_called = Rc::new(Cell::new(false));
            let publish_calls = Rc::new(RefCell::new(PublishCalls::default()));
            let pre_batches = Rc::new(RefCell::new(Vec::new()));

            let hooks = HookSet {
                scan: Box::new(ScriptedScan {
                    items: config.items,
                }),
                pre_publish: Box::new(ScriptedPrePublish {
                    primary: config.primary_warnings,
                    secondary: config.secondary_pre,
                    batches: pre_batches.clone(),
                }),
                publish: Box::new(ScriptedPublish {
                    primary: config.primary_publish,
                    secondary: config.secondary_publish,
                    calls: publish_calls.clone(),
                }),
                post_publish: Box::new(ScriptedPost {
                    called: post_called.clone(),
                }),
                thumbnail: Box::new(NoThumbnail),
            };

            let mut handler = PublishHandler::new(
                settings(config.secondary_outputs),
                context(),
                hooks,
                template_set(),
                Arc::new(NullTracking),
            )
            .unwrap();
            let events = handler.take_events().unwrap();

            Self {
                handler,
                events,
                post_called,
                publish_calls,
                pre_batches,
            }
        }

    }

    /// Drains everything currently queued on the event channel.
    fn drain(events: &Receiver<PublishEvent>) -> Vec<PublishEvent> {
        events.try_iter().collect()
    }

    // -----------------------------------------------------------------
    // Task-list boundary
    // -----------------------------------------------------------------

    #[test]
    fn publish_tasks_orders_primary_first() {
        let mut scenario = Scenario::build(ScenarioConfig {
            items: vec![
                Item::new("charA", "geometry"),
                Item::new("scene.ma", "work_file"),
            ],
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let keys: Vec<TaskKey> = tasks.iter().map(Task::key).collect();
        assert_eq!(
            keys,
            vec![
                TaskKey::new("scene.ma", "primary"),
                TaskKey::new("charA", "geometry"),
            ]
        );
    }

    #[test]
    fn scan_without_a_primary_item_aborts() {
        let mut scenario = Scenario::build(ScenarioConfig {
            items: vec![Item::new("charA", "geometry")],
            ..Default::default()
        });
        let err = scenario.handler.publish_tasks().unwrap_err();
        assert!(matches!(err, PublishError::NoPrimaryItem(_)));
        assert!(
            drain(&scenario.events)
                .iter()
                .any(|e| matches!(e, PublishEvent::PhaseChanged(SessionPhase::Aborted)))
        );
    }

    #[test]
    fn selection_must_contain_exactly_one_primary_task() {
        let mut scenario = Scenario::build(ScenarioConfig::default());
        let tasks = scenario.handler.publish_tasks().unwrap();

        let secondary_only: Vec<Task> = tasks
            .iter()
            .filter(|t| !t.output().is_primary())
            .cloned()
            .collect();
        let err = scenario
            .handler
            .begin(secondary_only, None, String::new(), None)
            .err()
            .unwrap();
        assert!(matches!(err, PublishError::NoPrimaryTask));

        let doubled: Vec<Task> = vec![tasks[0].clone(), tasks[0].clone()];
        let err = scenario
            .handler
            .begin(doubled, None, String::new(), None)
            .err()
            .unwrap();
        assert!(matches!(err, PublishError::MultiplePrimaryTasks));

        let err = scenario
            .handler
            .begin(Vec::new(), None, String::new(), None)
            .err()
            .unwrap();
        assert!(matches!(err, PublishError::NothingSelected));
    }

    // -----------------------------------------------------------------
    // Pre-publish
    // -----------------------------------------------------------------

    #[test]
    fn secondary_pre_publish_gets_the_whole_batch_once() {
        let mut scenario = Scenario::build(ScenarioConfig {
            items: vec![
                Item::new("scene.ma", "work_file"),
                Item::new("charA", "geometry"),
                Item::new("charB", "geometry"),
            ],
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        session.run_pre_publish().unwrap();

        let batches = scenario.pre_batches.borrow();
        assert_eq!(batches.len(), 1, "one call for the whole batch");
        assert_eq!(
            batches[0],
            vec![
                TaskKey::new("charA", "geometry"),
                TaskKey::new("charB", "geometry"),
            ]
        );
    }

    #[test]
    fn pre_publish_errors_are_redistributed_per_task() {
        let mut scenario = Scenario::build(ScenarioConfig {
            items: vec![
                Item::new("scene.ma", "work_file"),
                Item::new("itemA", "geometry"),
                Item::new("itemB", "camera"),
            ],
            secondary_outputs: vec![
                secondary_output("geometry", "geometry", "Geometry Cache", "geo_publish"),
                secondary_output("camera", "camera", "Camera", "cam_publish"),
            ],
            secondary_pre: Ok(vec![TaskResult::new(
                TaskKey::new("itemB", "camera"),
                vec!["bad".into()],
            )]),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        let report = session.run_pre_publish().unwrap();

        let secondary = session.secondary_tasks();
        assert_eq!(secondary[0].key(), TaskKey::new("itemA", "geometry"));
        assert!(secondary[0].pre_publish_errors().is_empty());
        assert_eq!(secondary[1].key(), TaskKey::new("itemB", "camera"));
        assert_eq!(secondary[1].pre_publish_errors(), ["bad"]);

        assert!(report.has_warnings());
        assert_eq!(report.warning_count(), 1);

        // the task modification was broadcast for the shell
        assert!(drain(&scenario.events).iter().any(|e| matches!(
            e,
            PublishEvent::TaskModified { key, pre_publish_errors, .. }
                if *key == TaskKey::new("itemB", "camera")
                    && pre_publish_errors == &vec!["bad".to_string()]
        )));
    }

    #[test]
    fn malformed_pre_publish_result_aborts_the_session() {
        let mut scenario = Scenario::build(ScenarioConfig {
            secondary_pre: Ok(vec![TaskResult::new(
                TaskKey::new("nobody", "nothing"),
                vec!["bad".into()],
            )]),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        let err = session.run_pre_publish().unwrap_err();
        assert!(matches!(err, PublishError::MalformedHookResult(_)));
        assert_eq!(session.phase(), SessionPhase::Aborted);
    }

    #[test]
    fn primary_pre_publish_raise_aborts_before_the_secondary_hook() {
        let mut scenario = Scenario::build(ScenarioConfig {
            primary_warnings: Err("scene has unsaved changes".into()),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        let err = session.run_pre_publish().unwrap_err();
        assert!(err.to_string().contains("scene has unsaved changes"));
        assert_eq!(session.phase(), SessionPhase::Aborted);
        assert!(scenario.pre_batches.borrow().is_empty());
    }

    #[test]
    fn user_can_abort_after_reviewing_warnings() {
        let mut scenario = Scenario::build(ScenarioConfig {
            primary_warnings: Ok(vec!["frame range looks odd".into()]),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        let report = session.run_pre_publish().unwrap();
        assert!(report.has_warnings());

        session.abort();
        assert!(
            drain(&scenario.events)
                .iter()
                .any(|e| matches!(e, PublishEvent::PhaseChanged(SessionPhase::Aborted)))
        );
        assert!(!scenario.publish_calls.borrow().primary_called);
    }

    // -----------------------------------------------------------------
    // Publish & post-publish
    // -----------------------------------------------------------------

    #[test]
    fn clean_publish_runs_all_three_phases() {
        let mut scenario = Scenario::build(ScenarioConfig::default());
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, "first pass".into(), None)
            .unwrap();
        session.run_pre_publish().unwrap();
        let outcome = session.run_publish();

        assert!(outcome.success(), "unexpected errors: {:?}", outcome.errors);
        assert_eq!(
            outcome.primary_publish_path.as_deref(),
            Some(Path::new("/publish/scene.ma"))
        );
        assert!(outcome.post_publish_ran);
        assert_eq!(outcome.phase, SessionPhase::Done);
        assert!(scenario.post_called.get());

        // the secondary batch saw the primary path as its dependency
        let calls = scenario.publish_calls.borrow();
        assert!(calls.secondary_called);
        assert_eq!(
            calls.secondary_primary_path.as_deref(),
            Some(Path::new("/publish/scene.ma"))
        );
        assert_eq!(
            calls.secondary_batch,
            vec![TaskKey::new("charA", "geometry")]
        );
    }

    #[test]
    fn secondary_task_failure_is_partial_success() {
        let mut scenario = Scenario::build(ScenarioConfig {
            secondary_publish: Ok(vec![TaskResult::new(
                TaskKey::new("charA", "geometry"),
                vec!["disk full".into()],
            )]),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        session.run_pre_publish().unwrap();
        let outcome = session.run_publish();

        assert!(!outcome.success());
        assert!(outcome.primary_succeeded());
        assert_eq!(outcome.errors, ["Geometry Cache, charA: disk full"]);

        // primary succeeded, so post-publish still ran
        assert!(outcome.post_publish_ran);
        assert_eq!(outcome.phase, SessionPhase::Done);
        assert!(scenario.post_called.get());

        // and the failing task carries its own error list
        let failed = outcome
            .tasks
            .iter()
            .find(|t| t.key() == TaskKey::new("charA", "geometry"))
            .unwrap();
        assert_eq!(failed.publish_errors(), ["disk full"]);
    }

    #[test]
    fn primary_publish_raise_fails_the_session() {
        let mut scenario = Scenario::build(ScenarioConfig {
            primary_publish: Err("Publish failed!".into()),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        session.run_pre_publish().unwrap();
        let outcome = session.run_publish();

        assert_eq!(outcome.phase, SessionPhase::Failed);
        assert!(outcome.primary_publish_path.is_none());
        assert_eq!(outcome.errors[0], "Publish failed!");
        assert!(
            outcome
                .errors
                .iter()
                .any(|e| e.contains("Post-publish was not run"))
        );

        // no secondary publish, no post-publish
        assert!(!scenario.publish_calls.borrow().secondary_called);
        assert!(!outcome.post_publish_ran);
        assert!(!scenario.post_called.get());
    }

    #[test]
    fn secondary_publish_raise_aborts_the_batch_and_skips_post() {
        let mut scenario = Scenario::build(ScenarioConfig {
            secondary_publish: Err("export process crashed".into()),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        session.run_pre_publish().unwrap();
        let outcome = session.run_publish();

        assert_eq!(outcome.phase, SessionPhase::Failed);
        // the primary artifact still published
        assert!(outcome.primary_succeeded());
        assert!(outcome.errors.iter().any(|e| e == "export process crashed"));
        assert!(!outcome.post_publish_ran);
        assert!(!scenario.post_called.get());
    }

    #[test]
    fn malformed_publish_result_skips_post_publish() {
        let mut scenario = Scenario::build(ScenarioConfig {
            secondary_publish: Ok(vec![TaskResult::new(
                TaskKey::new("nobody", "nothing"),
                vec!["bad".into()],
            )]),
            ..Default::default()
        });
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        session.run_pre_publish().unwrap();
        let outcome = session.run_publish();

        assert_eq!(outcome.phase, SessionPhase::Failed);
        assert!(!outcome.post_publish_ran);
        assert!(
            outcome
                .errors
                .iter()
                .any(|e| e.contains("badly formed result"))
        );
    }

    // -----------------------------------------------------------------
    // Events and progress
    // -----------------------------------------------------------------

    #[test]
    fn progress_stays_within_bounds_and_rises_within_each_phase() {
        let mut scenario = Scenario::build(ScenarioConfig::default());
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        session.run_pre_publish().unwrap();
        let outcome = session.run_publish();
        assert!(outcome.success());

        let mut saw_progress = false;
        let mut last_overall = 0.0f64;
        for event in drain(&scenario.events) {
            if let PublishEvent::Progress(p) = event {
                saw_progress = true;
                assert!((0.0..=100.0).contains(&p.overall_percent));
                assert!((0.0..=100.0).contains(&p.stage_percent));
                if p.overall_percent == 0.0 && p.message.is_none() {
                    // a reset starts a new epoch
                    last_overall = 0.0;
                    continue;
                }
                assert!(
                    p.overall_percent >= last_overall,
                    "overall regressed: {last_overall} -> {}",
                    p.overall_percent
                );
                last_overall = p.overall_percent;
            }
        }
        assert!(saw_progress);
    }

    #[test]
    fn phases_are_announced_in_order() {
        let mut scenario = Scenario::build(ScenarioConfig::default());
        let tasks = scenario.handler.publish_tasks().unwrap();
        let mut session = scenario
            .handler
            .begin(tasks, None, String::new(), None)
            .unwrap();
        session.run_pre_publish().unwrap();
        let _outcome = session.run_publish();

        let phases: Vec<SessionPhase> = drain(&scenario.events)
            .into_iter()
            .filter_map(|e| match e {
                PublishEvent::PhaseChanged(phase) => Some(phase),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                SessionPhase::Scanning,
                SessionPhase::TaskListBuilt,
                SessionPhase::PrePublishing,
                SessionPhase::Ready,
                SessionPhase::Publishing,
                SessionPhase::PostPublishing,
                SessionPhase::Done,
            ]
        );
    }

    // -----------------------------------------------------------------
    // Handler boundary odds and ends
    // -----------------------------------------------------------------

    #[test]
    fn production_tasks_come_from_the_tracking_service() {
        let scenario = Scenario::build(ScenarioConfig::default());
        let tasks = scenario.handler.production_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].step, "Animation");
    }

    #[test]
    fn conflicting_output_configuration_is_rejected() {
        let bad_settings = settings(vec![secondary_output(
            "backup",
            "work_file",
            "Backup",
            "geo_publish",
        )]);
        let hooks = HookSet {
            scan: Box::new(ScriptedScan { items: Vec::new() }),
            pre_publish: Box::new(ScriptedPrePublish {
                primary: Ok(Vec::new()),
                secondary: Ok(Vec::new()),
                batches: Rc::default(),
            }),
            publish: Box::new(ScriptedPublish {
                primary: Ok(PathBuf::new()),
                secondary: Ok(Vec::new()),
                calls: Rc::default(),
            }),
            post_publish: Box::new(ScriptedPost {
                called: Rc::default(),
            }),
            thumbnail: Box::new(NoThumbnail),
        };
        let err = PublishHandler::new(
            bad_settings,
            context(),
            hooks,
            template_set(),
            Arc::new(NullTracking),
        )
        .err()
        .unwrap();
        assert!(matches!(err, PublishError::Config(_)));
    }
}
