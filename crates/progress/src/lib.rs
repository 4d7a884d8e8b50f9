//! Progress aggregation for the publish pipeline.
//!
//! Hooks report stage-local percentages; the reporter folds them into a
//! single monotonic overall percentage for the shell's progress bar.
//! [`ProgressReporter`] is the stage machinery; [`TaskProgressReporter`]
//! keys stages by publish task and decorates messages with the task's
//! display name. Hooks only ever see the [`ProgressSink`] trait.

pub mod reporter;
pub mod task_reporter;

pub use reporter::{EmitFn, ProgressReporter};
pub use task_reporter::{ProgressSink, TaskProgressReporter};
