//! Stage-based progress aggregation.

use scenepub_model::ProgressEvent;

/// Callback progress events are delivered through.
pub type EmitFn = Box<dyn FnMut(ProgressEvent)>;

/// Converts a variable number of named stages, each reporting 0–100%,
/// into one overall percentage.
///
/// Stages are discovered as they first report; the overall value assumes
/// at least `stage_count` stages will run, so early stages don't sprint
/// the bar to 100%. Within one `reset()` epoch both the stage-local and
/// the overall percentage are clamped to `[0, 100]` and never regress —
/// late or out-of-order reports are lifted to the previous value.
pub struct ProgressReporter {
    stage_count: usize,
    stages: Vec<String>,
    current_stage: Option<String>,
    previous_stage_percent: f64,
    previous_percent: f64,
    emit: EmitFn,
}

impl ProgressReporter {
    pub fn new(stage_count: usize, emit: EmitFn) -> Self {
        Self {
            stage_count,
            stages: Vec::new(),
            current_stage: None,
            previous_stage_percent: 0.0,
            previous_percent: 0.0,
            emit,
        }
    }

    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    pub fn set_stage_count(&mut self, count: usize) {
        self.stage_count = count.max(1);
    }

    /// Clears stage history, optionally reconfiguring the expected stage
    /// count, and emits a 0% event.
    pub fn reset(&mut self, new_stage_count: Option<usize>) {
        self.stages.clear();
        if let Some(count) = new_stage_count {
            self.stage_count = count.max(1);
        }
        self.current_stage = None;
        self.previous_stage_percent = 0.0;
        self.previous_percent = 0.0;
        (self.emit)(ProgressEvent {
            stage_num: 1,
            stage_percent: 0.0,
            overall_percent: 0.0,
            message: None,
        });
    }

    /// Reports progress for a stage.
    ///
    /// With no stage given the report applies to whichever stage last
    /// reported, so single-stage hooks never need to track identity. A
    /// stage seen for the first time is appended to the observed list
    /// and its local percentage restarts from zero.
    pub fn report(&mut self, percent: f64, message: Option<&str>, stage: Option<&str>) {
        let stage = match stage {
            None => self.current_stage.take(),
            Some(name) => {
                if !self.stages.iter().any(|s| s == name) {
                    // a new stage: restart the stage-local percentage
                    self.stages.push(name.to_owned());
                    self.previous_stage_percent = 0.0;
                }
                Some(name.to_owned())
            }
        };

        // clamp the stage percentage and stop it going backwards
        let stage_percent = percent.clamp(0.0, 100.0).max(self.previous_stage_percent);

        let stage_num = self.stages.len().max(1);
        let max_stage_count = self.stage_count.max(stage_num);

        // overall percentage depends on how many stages completed so far
        let overall = (100.0 * (stage_num as f64 - 1.0) + stage_percent) / max_stage_count as f64;
        let overall_percent = overall.clamp(0.0, 100.0).max(self.previous_percent);

        (self.emit)(ProgressEvent {
            stage_num,
            stage_percent,
            overall_percent,
            message: message.map(str::to_owned),
        });

        self.current_stage = stage;
        self.previous_stage_percent = stage_percent;
        self.previous_percent = overall_percent;
    }
}
