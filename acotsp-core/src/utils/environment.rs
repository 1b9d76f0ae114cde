#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A seed of all random streams. When not set, it is drawn once from the os entropy.
    pub seed: Option<u64>,

    /// Max amount of worker threads.
    pub parallelism: usize,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` using optional seed and parallelism.
    pub fn new(seed: Option<u64>, parallelism: usize, logger: InfoLogger) -> Self {
        Self { seed, parallelism, logger }
    }

    /// Creates a silent environment with the given seed, useful for reproducible runs.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), parallelism: get_cpus(), logger: Arc::new(|_| {}) }
    }

    /// Returns the configured seed or picks a new one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(None, get_cpus(), Arc::new(|msg| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Returns amount of CPUs.
#[cfg(target_arch = "wasm32")]
pub fn get_cpus() -> usize {
    1
}
