//! Publish orchestration.
//!
//! This crate implements the **engine** of the publish app. It is a
//! library crate with no UI or host dependencies — the shell provides a
//! [`HookSet`](scenepub_hooks::HookSet) for the running host application
//! and consumes the engine's task list and event stream.
//!
//! # Pipeline
//!
//! 1. **Scan** — the scan hook finds publishable items in the scene
//! 2. **Build** — items are cross-joined with configured outputs into an
//!    ordered task list (primary task first, then output-major order)
//! 3. **Pre-publish** — validation hooks collect warnings per task; the
//!    user reviews them and may back out
//! 4. **Publish** — the primary task publishes first, its path feeding
//!    every secondary publish as a dependency
//! 5. **Post-publish** — version-up side effects, only when the publish
//!    phase fully succeeded

pub mod error;
pub mod handler;
pub mod outputs;
pub mod session;
pub mod settings;
pub mod tasks;

// Re-export primary types for convenience.
pub use error::PublishError;
pub use handler::PublishHandler;
pub use session::{PrePublishReport, PublishOutcome, PublishSession};
pub use settings::PublishSettings;
pub use tasks::build_task_list;
