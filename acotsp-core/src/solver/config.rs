#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::utils::{AcoError, AcoResult, get_cpus};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Default amount of nearest neighbours kept in a candidate list.
pub const DEFAULT_K_BACKUP: usize = 20;

/// Specifies which tours reinforce the pheromone trail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepositPolicy {
    /// Every tour of the iteration deposits.
    #[default]
    AllAnts,
    /// Only the shortest tour of the iteration deposits.
    IterationBest,
    /// Only the best tour found in the current trial deposits.
    TrialBest,
}

impl FromStr for DepositPolicy {
    type Err = AcoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" | "all-ants" | "allAnts" => Ok(DepositPolicy::AllAnts),
            "iteration-best" | "iterationBest" => Ok(DepositPolicy::IterationBest),
            "trial-best" | "trialBest" => Ok(DepositPolicy::TrialBest),
            _ => Err(AcoError::Configuration(format!("unknown deposit policy: '{value}'"))),
        }
    }
}

impl Display for DepositPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DepositPolicy::AllAnts => "all",
            DepositPolicy::IterationBest => "iteration-best",
            DepositPolicy::TrialBest => "trial-best",
        };

        write!(f, "{name}")
    }
}

/// Colony parameters. All fields are fixed for the whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct AcoConfig {
    /// Amount of ants per iteration.
    pub ants: usize,
    /// Evaporation rate in `[0, 1]`.
    pub rho: f64,
    /// Pheromone influence.
    pub alpha: f64,
    /// Heuristic influence.
    pub beta: f64,
    /// Amount of independent trials.
    pub max_trials: usize,
    /// Amount of iterations per trial.
    pub max_iterations: usize,
    /// Amount of worker threads.
    pub threads: usize,
    /// Share of the shortest tours refined by local search, zero disables it.
    pub ls_percentage: f64,
    /// Candidate list size, `min(20, n - 1)` when not set.
    pub k_backup: Option<usize>,
    /// Amount of cache lines inserted after each worker's arena slot.
    pub k_pad: usize,
    /// Random seed, drawn from os entropy when not set.
    pub seed: Option<u64>,
    /// Deposit policy.
    pub deposit: DepositPolicy,
    /// Ratio between minimum and initial trail.
    pub trail_min_ratio: f64,
    /// Max amount of local search moves per tour.
    pub ls_max_moves: Option<usize>,
    /// Specifies how often (in iterations) the iteration best is logged.
    pub log_best: Option<usize>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 25,
            rho: 0.5,
            alpha: 1.,
            beta: 2.,
            max_trials: 1,
            max_iterations: 100,
            threads: get_cpus(),
            ls_percentage: 0.,
            k_backup: None,
            k_pad: 1,
            seed: None,
            deposit: DepositPolicy::default(),
            trail_min_ratio: 1e-3,
            ls_max_moves: None,
            log_best: None,
        }
    }
}

impl AcoConfig {
    /// Sets amount of ants.
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    /// Sets evaporation rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets pheromone and heuristic influence.
    pub fn with_influence(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets amount of trials and iterations per trial.
    pub fn with_limits(mut self, max_trials: usize, max_iterations: usize) -> Self {
        self.max_trials = max_trials;
        self.max_iterations = max_iterations;
        self
    }

    /// Sets amount of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Sets local search share and optional move budget.
    pub fn with_local_search(mut self, ls_percentage: f64, ls_max_moves: Option<usize>) -> Self {
        self.ls_percentage = ls_percentage;
        self.ls_max_moves = ls_max_moves;
        self
    }

    /// Sets candidate list size.
    pub fn with_k_backup(mut self, k_backup: usize) -> Self {
        self.k_backup = Some(k_backup);
        self
    }

    /// Sets padding after arena slots.
    pub fn with_k_pad(mut self, k_pad: usize) -> Self {
        self.k_pad = k_pad;
        self
    }

    /// Sets random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets deposit policy.
    pub fn with_deposit(mut self, deposit: DepositPolicy) -> Self {
        self.deposit = deposit;
        self
    }

    /// Sets ratio between minimum and initial trail.
    pub fn with_trail_min_ratio(mut self, trail_min_ratio: f64) -> Self {
        self.trail_min_ratio = trail_min_ratio;
        self
    }

    /// Sets how often the iteration best is logged.
    pub fn with_log_best(mut self, log_best: usize) -> Self {
        self.log_best = Some(log_best);
        self
    }

    /// Returns candidate list size for a problem with `size` cities.
    pub fn candidates_size(&self, size: usize) -> usize {
        self.k_backup.unwrap_or(DEFAULT_K_BACKUP.min(size.saturating_sub(1)))
    }

    /// Checks parameters against a problem with `size` cities.
    pub fn validate(&self, size: usize) -> AcoResult<()> {
        let mut errors = Vec::new();
        let mut check = |is_valid: bool, message: String| {
            if !is_valid {
                errors.push(message);
            }
        };

        check(self.ants >= 1, format!("ants must be at least 1, got {}", self.ants));
        check(self.threads >= 1, format!("threads must be at least 1, got {}", self.threads));
        check(self.max_trials >= 1, format!("max trials must be at least 1, got {}", self.max_trials));
        check(self.max_iterations >= 1, format!("max iterations must be at least 1, got {}", self.max_iterations));
        check((0. ..=1.).contains(&self.rho), format!("rho must be in [0, 1], got {}", self.rho));
        check(self.alpha.is_finite() && self.alpha >= 0., format!("alpha must be non-negative, got {}", self.alpha));
        check(self.beta.is_finite() && self.beta >= 0., format!("beta must be non-negative, got {}", self.beta));
        check(
            (0. ..=1.).contains(&self.ls_percentage),
            format!("local search percentage must be in [0, 1], got {}", self.ls_percentage),
        );

        let k_backup = self.candidates_size(size);
        check(k_backup >= 1 && k_backup < size, format!("k backup must be in [1, {size}), got {k_backup}"));
        check(
            self.trail_min_ratio > 0. && self.trail_min_ratio <= 1.,
            format!("trail min ratio must be in (0, 1], got {}", self.trail_min_ratio),
        );
        check(self.log_best != Some(0), "log best interval must be positive".to_string());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AcoError::Configuration(errors.join(", ")))
        }
    }
}
