//! This module contains building blocks for tour construction.
//!
//! # Ant decision procedure
//!
//! Every ant starts at its own city and repeatedly picks the next one from the candidate list of
//! the current city with a probability proportional to the choice information `tau^alpha * eta^beta`.
//! When no unvisited candidate is left, the best unvisited city over the whole problem is taken.
//!
//! Ants are split into contiguous chunks, one per worker. A worker owns its random stream and its
//! arena slot, and reads the problem and pheromone field without any locks.

#[cfg(test)]
#[path = "../../tests/unit/construction/construction_test.rs"]
mod construction_test;

mod ant;
pub use self::ant::AntConstructor;

mod arena;
pub use self::arena::{AntState, WorkerArena};

use crate::models::{PheromoneField, Problem, Tour};
use crate::utils::{AcoError, AcoResult, RandomStreamPool, ThreadPool, chunk_ranges, parallel_into_collect};

/// Runs all ants of one iteration in parallel.
pub struct TourConstruction {
    ants: usize,
}

impl TourConstruction {
    /// Creates a new instance of `TourConstruction` for the given amount of ants.
    pub fn new(ants: usize) -> Self {
        Self { ants }
    }

    /// Builds tours of all ants. Tours are returned in ant order, the first failure aborts.
    pub fn run(
        &self,
        pool: &ThreadPool,
        problem: &Problem,
        field: &PheromoneField,
        streams: &mut RandomStreamPool,
        arena: &mut WorkerArena,
    ) -> AcoResult<Vec<Tour>> {
        let workers = arena.workers();
        if streams.len() != workers {
            return Err(AcoError::InvariantViolation(format!(
                "have {} random streams for {workers} workers",
                streams.len()
            )));
        }

        let constructor = AntConstructor::new(problem, field);
        let work = chunk_ranges(self.ants, workers)
            .into_iter()
            .zip(streams.streams_mut().iter_mut())
            .zip(arena.states())
            .filter(|((ants, _), _)| !ants.is_empty())
            .collect::<Vec<_>>();

        let results = pool.execute(|| {
            parallel_into_collect(work, |((ants, stream), mut state)| {
                ants.map(|ant| constructor.construct(ant, &mut state, stream)).collect::<AcoResult<Vec<_>>>()
            })
        });

        results.into_iter().try_fold(Vec::with_capacity(self.ants), |mut tours, chunk| -> AcoResult<Vec<Tour>> {
            tours.extend(chunk?);
            Ok(tours)
        })
    }

    /// Returns amount of ants.
    pub fn ants(&self) -> usize {
        self.ants
    }
}
