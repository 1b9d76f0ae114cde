#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/report_test.rs"]
mod report_test;

use acotsp_core::models::Tour;
use acotsp_core::solver::{ReportSink, TrialReport};
use acotsp_core::utils::InfoLogger;

/// A report sink which writes a short summary of every trial and of the whole run.
pub struct ConsoleSink {
    logger: InfoLogger,
    trials: usize,
}

impl ConsoleSink {
    /// Creates a new instance of `ConsoleSink`.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger, trials: 0 }
    }
}

impl ReportSink for ConsoleSink {
    fn on_trial_end(&mut self, report: &TrialReport) {
        self.trials += 1;
        (self.logger)(
            format!(
                "trial {}: best length {:.3} found at iteration {} in {}ms",
                report.trial + 1,
                report.best.length(),
                report.found_at,
                report.elapsed.as_millis()
            )
            .as_str(),
        );
    }

    fn on_program_end(&mut self, best: &Tour) {
        (self.logger)(format!("best length over {} trial(s): {:.3}", self.trials, best.length()).as_str());
    }
}
