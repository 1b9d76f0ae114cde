//! A module which provides the logic to collect metrics about colony runs and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::Tour;
use crate::solver::{AcoConfig, TrialReport};
use crate::utils::{InfoLogger, Timer};

/// Encapsulates different measurements regarding algorithm evaluation.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Algorithm duration in seconds.
    pub duration: f64,
    /// Total amount of iterations over all trials.
    pub iterations: usize,
    /// Speed: iterations per second.
    pub speed: f64,
    /// Amount of local search moves over all iterations.
    pub ls_moves: usize,
    /// Best tour length per trial.
    pub trials: Vec<f64>,
}

/// Specifies a telemetry mode.
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often (in iterations) the iteration best is logged.
        log_best: Option<usize>,
    },
    /// Only metrics collection.
    OnlyMetrics,
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often (in iterations) the iteration best is logged.
        log_best: Option<usize>,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: Metrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { metrics: Metrics::default(), time: Timer::start(), mode }
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self, config: &AcoConfig, size: usize, seed: u64) {
        self.time = Timer::start();
        self.log(
            format!(
                "configured for {size} cities: ants: {}, trials: {}, iterations: {}, threads: {}, rho: {}, alpha: {}, \
                 beta: {}, deposit: {}, local search: {}, seed: {seed}",
                config.ants,
                config.max_trials,
                config.max_iterations,
                config.threads,
                config.rho,
                config.alpha,
                config.beta,
                config.deposit,
                config.ls_percentage,
            )
            .as_str(),
        );
    }

    /// Reports trial start.
    pub fn on_trial_start(&mut self, trial: usize) {
        self.log(format!("[{}s] trial {} started", self.time.elapsed_secs(), trial + 1).as_str());
    }

    /// Reports iteration statistics.
    pub fn on_iteration(&mut self, iteration: usize, iteration_best: &Tour, ls_moves: usize, improved: bool) {
        self.metrics.iterations += 1;
        self.metrics.ls_moves += ls_moves;

        let log_best = match &self.mode {
            TelemetryMode::OnlyLogging { log_best, .. } | TelemetryMode::All { log_best, .. } => *log_best,
            _ => None,
        };

        if log_best.is_some_and(|log_best| log_best > 0 && iteration % log_best == 0) {
            self.log(
                format!(
                    "[{}s] iteration {}: best length {:.3}{}, ls moves: {ls_moves}",
                    self.time.elapsed_secs(),
                    iteration,
                    iteration_best.length(),
                    if improved { " (improved)" } else { "" },
                )
                .as_str(),
            );
        }
    }

    /// Reports trial result.
    pub fn on_trial_end(&mut self, report: &TrialReport) {
        self.metrics.trials.push(report.best.length());
        self.log(
            format!(
                "[{}s] trial {} finished in {}ms: best length {:.3} found at iteration {}",
                self.time.elapsed_secs(),
                report.trial + 1,
                report.elapsed.as_millis(),
                report.best.length(),
                report.found_at
            )
            .as_str(),
        );
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, best: &Tour) {
        let elapsed = self.time.elapsed_secs_as_f64();
        let speed = if elapsed > 0. { self.metrics.iterations as f64 / elapsed } else { 0. };

        self.log(
            format!(
                "[{}s] total iterations: {}, speed: {:.2} iter/sec, best length: {:.3}",
                self.time.elapsed_secs(),
                self.metrics.iterations,
                speed,
                best.length()
            )
            .as_str(),
        );

        self.metrics.duration = elapsed;
        self.metrics.speed = speed;
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<Metrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } | TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}
