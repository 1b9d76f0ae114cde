//! This module contains tour refinement logic applied after construction.

#[cfg(test)]
#[path = "../../tests/unit/refinement/refinement_test.rs"]
mod refinement_test;

mod local_search;
pub use self::local_search::TwoOpt;

use crate::construction::WorkerArena;
use crate::models::{Problem, Tour};
use crate::utils::{
    AcoError, AcoResult, RandomStreamPool, ThreadPool, chunk_ranges, compare_floats, parallel_into_collect,
};

/// Applies local search to the shortest tours of an iteration.
pub struct LocalSearch {
    percentage: f64,
    max_moves: Option<usize>,
}

impl LocalSearch {
    /// Creates a new instance of `LocalSearch`. `percentage` of the shortest tours are refined.
    pub fn new(percentage: f64, max_moves: Option<usize>) -> Self {
        Self { percentage, max_moves }
    }

    /// Returns true if the stage does something.
    pub fn is_enabled(&self) -> bool {
        self.percentage > 0.
    }

    /// Returns indices of tours to be refined: `ceil(percentage * m)` shortest ones, ties are
    /// resolved in favor of the smaller index. Indices are returned in ascending order.
    pub fn select(&self, tours: &[Tour]) -> Vec<usize> {
        let amount = ((self.percentage.clamp(0., 1.) * tours.len() as f64).ceil() as usize).min(tours.len());

        let mut indices = (0..tours.len()).collect::<Vec<_>>();
        indices.sort_by(|&a, &b| compare_floats(tours[a].length(), tours[b].length()).then(a.cmp(&b)));
        indices.truncate(amount);
        indices.sort_unstable();

        indices
    }

    /// Refines selected tours in parallel. Returns total amount of applied moves.
    pub fn run(
        &self,
        pool: &ThreadPool,
        problem: &Problem,
        tours: &mut [Tour],
        streams: &mut RandomStreamPool,
        arena: &mut WorkerArena,
    ) -> AcoResult<usize> {
        if !self.is_enabled() || tours.is_empty() {
            return Ok(0);
        }

        let workers = arena.workers();
        if streams.len() != workers {
            return Err(AcoError::InvariantViolation(format!(
                "have {} random streams for {workers} workers",
                streams.len()
            )));
        }

        let selected = self.select(tours);
        let mut targets = tours
            .iter_mut()
            .enumerate()
            .filter(|(idx, _)| selected.binary_search(idx).is_ok())
            .map(|(_, tour)| tour)
            .collect::<Vec<_>>();

        let chunks = chunk_ranges(targets.len(), workers);
        let mut rest = targets.as_mut_slice();
        let mut slices = Vec::with_capacity(workers);
        for range in chunks {
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            slices.push(head);
            rest = tail;
        }

        let search = TwoOpt::new(problem, self.max_moves);
        let work = slices
            .into_iter()
            .zip(streams.streams_mut().iter_mut())
            .zip(arena.states())
            .filter(|((tours, _), _)| !tours.is_empty())
            .collect::<Vec<_>>();

        let results = pool.execute(|| {
            parallel_into_collect(work, |((tours, stream), mut state)| {
                tours.iter_mut().try_fold(0, |moves, tour| -> AcoResult<usize> {
                    Ok(moves + search.improve(tour, &mut state, stream)?)
                })
            })
        });

        results.into_iter().try_fold(0, |total, moves| -> AcoResult<usize> { Ok(total + moves?) })
    }
}
