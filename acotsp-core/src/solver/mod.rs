//! The solver module runs the colony: trials of iterations, each iteration consists of parallel
//! tour construction, optional local search and a sequential pheromone update.
//!
//! # Usage
//!
//! ```
//! # use acotsp_core::prelude::*;
//! # use std::sync::Arc;
//! let coordinates = vec![(0., 0.), (0., 1.), (1., 1.), (1., 0.), (0., 0.5)];
//! let problem = Problem::new(coordinates.into_iter().map(Coordinate::from).collect(), DistanceKind::Euclidean, 4)?;
//! let config = AcoConfig::default().with_ants(2).with_limits(1, 10).with_threads(2).with_seed(42);
//!
//! let result = Solver::new(Arc::new(problem), config, Arc::new(Environment::new_with_seed(42))).solve()?;
//!
//! assert_eq!(result.best.size(), 5);
//! assert!(result.best.length() >= 4.);
//! # Ok::<(), AcoError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod config;
pub use self::config::*;

mod report;
pub use self::report::{ReportSink, TrialReport};

mod telemetry;
pub use self::telemetry::{Metrics, Telemetry, TelemetryMode};

mod update;
pub use self::update::{PheromoneUpdate, UpdateSummary};

use self::report::SilentSink;
use crate::construction::{TourConstruction, WorkerArena};
use crate::models::{PheromoneField, Problem, Tour};
use crate::refinement::LocalSearch;
use crate::utils::{AcoError, AcoResult, Environment, RandomStreamPool, ThreadPool, Timer};
use std::sync::Arc;

/// Contains results of the whole run.
pub struct SolverResult {
    /// Reports of all trials in execution order.
    pub trials: Vec<TrialReport>,
    /// The best tour over all trials.
    pub best: Tour,
    /// The seed used by random streams.
    pub seed: u64,
    /// Collected metrics, if telemetry mode allows it.
    pub metrics: Option<Metrics>,
}

/// Runs trials of the ant colony on a problem.
pub struct Solver {
    problem: Arc<Problem>,
    config: AcoConfig,
    environment: Arc<Environment>,
    telemetry_mode: Option<TelemetryMode>,
    sink: Box<dyn ReportSink>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(problem: Arc<Problem>, config: AcoConfig, environment: Arc<Environment>) -> Self {
        Self { problem, config, environment, telemetry_mode: None, sink: Box::new(SilentSink) }
    }

    /// Sets a sink which receives trial reports.
    pub fn with_sink(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Sets telemetry mode. By default, everything is logged using environment's logger.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = Some(mode);
        self
    }

    /// Runs all trials and returns the best tour found.
    pub fn solve(self) -> AcoResult<SolverResult> {
        let Self { problem, config, environment, telemetry_mode, mut sink } = self;
        let size = problem.size();

        config.validate(size)?;

        if let Some(k_backup) = config.k_backup.filter(|&k_backup| k_backup != problem.candidates_size()) {
            return Err(AcoError::Configuration(format!(
                "k backup {k_backup} does not match candidate list size {} of the problem",
                problem.candidates_size()
            )));
        }

        let seed = config.seed.unwrap_or_else(|| environment.resolve_seed());
        let mode = telemetry_mode
            .unwrap_or_else(|| TelemetryMode::All { logger: environment.logger.clone(), log_best: config.log_best });
        let mut telemetry = Telemetry::new(mode);

        let pool = ThreadPool::new(config.threads)?;
        let mut streams = RandomStreamPool::new(seed, config.threads);
        let mut arena = WorkerArena::new(config.threads, size, problem.candidates_size(), config.k_pad)?;

        let tau0 = PheromoneField::initial_trail(problem.as_ref());
        let mut field = PheromoneField::new(problem.as_ref(), tau0 * config.trail_min_ratio)?;

        let construction = TourConstruction::new(config.ants);
        let local_search = LocalSearch::new(config.ls_percentage, config.ls_max_moves);
        let update = PheromoneUpdate::new(config.rho, config.alpha, config.beta, config.deposit);

        telemetry.start(&config, size, seed);

        let mut global_best: Option<Tour> = None;
        let mut trials = Vec::with_capacity(config.max_trials);

        for trial in 0..config.max_trials {
            let timer = Timer::start();
            sink.on_trial_start(trial);
            telemetry.on_trial_start(trial);

            pool.execute(|| {
                field.initialize(tau0);
                field.rebuild_choice_info(config.alpha, config.beta);
            });

            let mut trial_best = None;
            let mut found_at = 0;

            for iteration in 0..config.max_iterations {
                let mut tours = construction.run(&pool, problem.as_ref(), &field, &mut streams, &mut arena)?;
                let ls_moves = local_search.run(&pool, problem.as_ref(), &mut tours, &mut streams, &mut arena)?;

                let summary = pool.execute(|| update.apply(&mut field, &tours, &mut trial_best))?;
                if summary.improved {
                    found_at = iteration;
                }

                telemetry.on_iteration(iteration, &tours[summary.iteration_best], ls_moves, summary.improved);
            }

            let best = trial_best
                .ok_or_else(|| AcoError::InvariantViolation(format!("trial {trial} finished without tours")))?;
            best.validate(size)?;

            if global_best.as_ref().is_none_or(|global| best.length() < global.length()) {
                global_best = Some(best.clone());
            }

            let report = TrialReport { trial, best, found_at, elapsed: timer.elapsed() };
            sink.on_trial_end(&report);
            telemetry.on_trial_end(&report);
            trials.push(report);
        }

        let best = global_best.ok_or_else(|| AcoError::InvariantViolation("no trials were run".to_string()))?;
        sink.on_program_end(&best);
        telemetry.on_result(&best);

        Ok(SolverResult { trials, best, seed, metrics: telemetry.take_metrics() })
    }
}
