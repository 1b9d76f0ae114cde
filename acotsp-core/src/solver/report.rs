use crate::models::Tour;
use std::time::Duration;

/// Describes the outcome of a single trial.
#[derive(Clone, Debug)]
pub struct TrialReport {
    /// Trial number, starting from zero.
    pub trial: usize,
    /// The best tour found in the trial.
    pub best: Tour,
    /// Iteration at which the best tour was found, starting from zero.
    pub found_at: usize,
    /// Time spent on the trial.
    pub elapsed: Duration,
}

/// Receives solver progress. Called from the controller thread only.
pub trait ReportSink {
    /// Called before the first iteration of a trial.
    fn on_trial_start(&mut self, _trial: usize) {}

    /// Called when a trial is finished.
    fn on_trial_end(&mut self, report: &TrialReport);

    /// Called once with the best tour over all trials.
    fn on_program_end(&mut self, _best: &Tour) {}
}

/// A sink which ignores everything.
pub(crate) struct SilentSink;

impl ReportSink for SilentSink {
    fn on_trial_end(&mut self, _: &TrialReport) {}
}
