//! Shared value objects for the publish flow.
//!
//! Everything that crosses a crate boundary lives here: scanned scene
//! [`Item`]s, configured [`Output`]s, the [`Task`] pairing of the two,
//! the pipeline [`Context`] a session runs in, and the [`PublishEvent`]s
//! the shell consumes. All types are plain data — behavior belongs to the
//! orchestrator and the hook implementations.

pub mod context;
pub mod events;
pub mod item;
pub mod output;
pub mod task;

// Re-export primary types for convenience.
pub use context::{Context, EntityRef, ProductionTaskRef};
pub use events::{ProgressEvent, PublishEvent, SessionPhase};
pub use item::{Item, MissingFieldError};
pub use output::{Output, PRIMARY_OUTPUT_NAME};
pub use task::{Task, TaskKey};
