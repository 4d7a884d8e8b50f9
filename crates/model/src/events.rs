//! Events delivered to the shell while a publish session runs.

use serde::{Deserialize, Serialize};

use crate::task::TaskKey;

/// Where a publish session currently is.
///
/// `Aborted` covers both fatal scan/pre-publish errors and the user
/// backing out after reviewing pre-publish warnings; `Failed` means the
/// publish phase raised and post-publish was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Scanning,
    TaskListBuilt,
    PrePublishing,
    Ready,
    Aborted,
    Publishing,
    PostPublishing,
    Done,
    Failed,
}

/// One progress report, already aggregated across stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// 1-based index of the reporting stage among those seen so far.
    pub stage_num: usize,
    /// Percent within the current stage, clamped and monotonic.
    pub stage_percent: f64,
    /// Overall percent across all stages, clamped and monotonic.
    pub overall_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Event stream consumed by the GUI shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PublishEvent {
    /// Aggregated progress for the running phase.
    Progress(ProgressEvent),

    /// A task's error lists changed; carries a snapshot so observers
    /// never need to reach back into the session.
    TaskModified {
        key: TaskKey,
        pre_publish_errors: Vec<String>,
        publish_errors: Vec<String>,
    },

    /// The session moved to a new phase.
    PhaseChanged(SessionPhase),
}
