//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use acotsp_core::solver::{AcoConfig, DepositPolicy};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// A colony configuration where every parameter is optional. Keys are expected in camelCase.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Amount of ants per iteration.
    pub ants: Option<usize>,
    /// Evaporation rate.
    pub rho: Option<f64>,
    /// Pheromone influence.
    pub alpha: Option<f64>,
    /// Heuristic influence.
    pub beta: Option<f64>,
    /// Amount of independent trials.
    pub max_trials: Option<usize>,
    /// Amount of iterations per trial.
    pub max_iterations: Option<usize>,
    /// Amount of worker threads.
    pub threads: Option<usize>,
    /// Share of the shortest tours refined by local search.
    pub ls_percentage: Option<f64>,
    /// Max amount of local search moves per tour.
    pub ls_max_moves: Option<usize>,
    /// Candidate list size.
    pub k_backup: Option<usize>,
    /// Amount of cache lines inserted after each worker's arena slot.
    pub k_pad: Option<usize>,
    /// Random seed.
    pub seed: Option<u64>,
    /// Deposit policy name: `all`, `iteration-best` or `trial-best`.
    pub deposit: Option<String>,
    /// Ratio between minimum and initial trail.
    pub trail_min_ratio: Option<f64>,
    /// How often (in iterations) the iteration best is logged.
    pub log_best: Option<usize>,
}

impl Config {
    /// Merges two configs: values set in `other` take precedence.
    pub fn merge(self, other: Config) -> Config {
        Config {
            ants: other.ants.or(self.ants),
            rho: other.rho.or(self.rho),
            alpha: other.alpha.or(self.alpha),
            beta: other.beta.or(self.beta),
            max_trials: other.max_trials.or(self.max_trials),
            max_iterations: other.max_iterations.or(self.max_iterations),
            threads: other.threads.or(self.threads),
            ls_percentage: other.ls_percentage.or(self.ls_percentage),
            ls_max_moves: other.ls_max_moves.or(self.ls_max_moves),
            k_backup: other.k_backup.or(self.k_backup),
            k_pad: other.k_pad.or(self.k_pad),
            seed: other.seed.or(self.seed),
            deposit: other.deposit.or(self.deposit),
            trail_min_ratio: other.trail_min_ratio.or(self.trail_min_ratio),
            log_best: other.log_best.or(self.log_best),
        }
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates colony parameters from config, unset values are taken from defaults.
/// Ranges are not checked here: the solver validates them against the problem size.
pub fn create_aco_config(config: &Config) -> Result<AcoConfig, String> {
    let defaults = AcoConfig::default();

    let deposit = match config.deposit.as_deref() {
        Some(deposit) => DepositPolicy::from_str(deposit).map_err(|err| err.to_string())?,
        None => defaults.deposit,
    };

    Ok(AcoConfig {
        ants: config.ants.unwrap_or(defaults.ants),
        rho: config.rho.unwrap_or(defaults.rho),
        alpha: config.alpha.unwrap_or(defaults.alpha),
        beta: config.beta.unwrap_or(defaults.beta),
        max_trials: config.max_trials.unwrap_or(defaults.max_trials),
        max_iterations: config.max_iterations.unwrap_or(defaults.max_iterations),
        threads: config.threads.unwrap_or(defaults.threads),
        ls_percentage: config.ls_percentage.unwrap_or(defaults.ls_percentage),
        k_backup: config.k_backup.or(defaults.k_backup),
        k_pad: config.k_pad.unwrap_or(defaults.k_pad),
        seed: config.seed.or(defaults.seed),
        deposit,
        trail_min_ratio: config.trail_min_ratio.unwrap_or(defaults.trail_min_ratio),
        ls_max_moves: config.ls_max_moves.or(defaults.ls_max_moves),
        log_best: config.log_best.or(defaults.log_best),
    })
}
