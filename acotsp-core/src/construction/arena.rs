#[cfg(test)]
#[path = "../../tests/unit/construction/arena_test.rs"]
mod arena_test;

use crate::algorithms::structures::{BitSlice, PaddedArena, blocks_for};
use crate::utils::AcoResult;

/// Keeps per worker scratch memory: one padded slot per worker in every buffer.
///
/// The arena is allocated once per solver run and reused by every ant, iteration and trial.
pub struct WorkerArena {
    size: usize,
    tours: PaddedArena<usize>,
    positions: PaddedArena<usize>,
    order: PaddedArena<usize>,
    weights: PaddedArena<f64>,
    visited: PaddedArena<u64>,
}

impl WorkerArena {
    /// Creates a new arena for `workers` workers, `size` cities and candidate lists of `candidates`
    /// cities. Each slot is followed by `pad_blocks` cache lines of padding.
    pub fn new(workers: usize, size: usize, candidates: usize, pad_blocks: usize) -> AcoResult<Self> {
        Ok(Self {
            size,
            tours: PaddedArena::new(workers, size, pad_blocks, 0)?,
            positions: PaddedArena::new(workers, size, pad_blocks, 0)?,
            order: PaddedArena::new(workers, size, pad_blocks, 0)?,
            weights: PaddedArena::new(workers, candidates, pad_blocks, 0.)?,
            visited: PaddedArena::new(workers, blocks_for(size), pad_blocks, 0)?,
        })
    }

    /// Returns one state per worker, ordered by worker index.
    pub fn states(&mut self) -> Vec<AntState<'_>> {
        let size = self.size;

        self.tours
            .slots_mut()
            .zip(self.positions.slots_mut())
            .zip(self.order.slots_mut())
            .zip(self.weights.slots_mut())
            .zip(self.visited.slots_mut())
            .map(|((((tour, positions), order), weights), visited)| AntState {
                tour,
                positions,
                order,
                weights,
                visited: BitSlice::new(visited, size),
                placed: 0,
                length: 0.,
            })
            .collect()
    }

    /// Returns amount of workers.
    pub fn workers(&self) -> usize {
        self.tours.slots()
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// A transient per worker view used to build one tour at a time.
///
/// Besides construction data, it carries the local search scratch: city positions, scan order
/// and don't-look bits (which reuse the visited set).
pub struct AntState<'a> {
    tour: &'a mut [usize],
    positions: &'a mut [usize],
    order: &'a mut [usize],
    weights: &'a mut [f64],
    visited: BitSlice<'a>,
    placed: usize,
    length: f64,
}

impl<'a> AntState<'a> {
    /// Starts a new tour from the given city.
    pub fn reset(&mut self, start: usize) {
        self.visited.clear();
        self.visited.set(start, true);
        self.tour[0] = start;
        self.placed = 1;
        self.length = 0.;
    }

    /// Appends a city to the partial tour.
    #[inline]
    pub fn visit(&mut self, city: usize, distance: f64) {
        self.visited.set(city, true);
        self.tour[self.placed] = city;
        self.placed += 1;
        self.length += distance;
    }

    /// Returns the last placed city.
    #[inline]
    pub fn current(&self) -> usize {
        self.tour[self.placed - 1]
    }

    /// Returns the first placed city.
    pub fn start(&self) -> usize {
        self.tour[0]
    }

    /// Checks whether the city is already in the partial tour.
    #[inline]
    pub fn is_visited(&self, city: usize) -> bool {
        self.visited.get(city)
    }

    /// Returns amount of placed cities.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Returns length of the open partial tour.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns placed cities.
    pub fn tour(&self) -> &[usize] {
        &self.tour[..self.placed]
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.tour.len()
    }

    /// Fills roulette weights for the given candidates: choice value for unvisited ones, zero for
    /// visited. Returns the weights and their sum.
    pub(crate) fn candidate_weights(&mut self, candidates: &[usize], choice: &[f64]) -> (&[f64], f64) {
        let visited = &self.visited;
        let weights = &mut self.weights[..candidates.len()];

        let total = weights.iter_mut().zip(candidates.iter()).fold(0., |total, (weight, &city)| {
            *weight = if visited.get(city) { 0. } else { choice[city] };
            total + *weight
        });

        (&*weights, total)
    }

    /// Returns local search scratch: tour copy, city positions, scan order and don't-look bits.
    pub(crate) fn search_scratch(&mut self) -> (&mut [usize], &mut [usize], &mut [usize], &mut BitSlice<'a>) {
        (&mut *self.tour, &mut *self.positions, &mut *self.order, &mut self.visited)
    }
}
