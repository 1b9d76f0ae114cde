#[cfg(test)]
#[path = "../../tests/unit/models/pheromone_test.rs"]
mod pheromone_test;

use crate::models::{Problem, SquareMatrix, Tour};
use crate::utils::{AcoError, AcoResult, parallel_chunks_mut};

/// Keeps pheromone trail, static heuristic desirability and the derived choice information.
///
/// The field is written only between iterations (evaporation, deposit, rebuild) and is read-only
/// while ants construct tours, so concurrent readers need no synchronization. Trail stays
/// symmetric and never drops below `tau_min`.
pub struct PheromoneField {
    trail: SquareMatrix,
    heuristic: SquareMatrix,
    choice_info: SquareMatrix,
    tau_min: f64,
}

impl PheromoneField {
    /// Creates a new field for the problem, all trail values are set to `tau_min`.
    pub fn new(problem: &Problem, tau_min: f64) -> AcoResult<Self> {
        if !(tau_min.is_finite() && tau_min > 0.) {
            return Err(AcoError::Configuration(format!("minimum trail must be positive, got {tau_min}")));
        }

        let size = problem.size();
        let mut heuristic = SquareMatrix::new(size, 0.)?;
        let stride = heuristic.stride();

        parallel_chunks_mut(heuristic.as_mut_padded(), stride, |from, row| {
            row.iter_mut().take(size).enumerate().for_each(|(to, cell)| {
                *cell = if from == to { 0. } else { 1. / problem.distance(from, to) };
            });
        });

        Ok(Self { trail: SquareMatrix::new(size, tau_min)?, heuristic, choice_info: SquareMatrix::new(size, 0.)?, tau_min })
    }

    /// Returns initial trail value `1 / (n * L_nn)`.
    pub fn initial_trail(problem: &Problem) -> f64 {
        let nn_length = problem.nn_tour_length();
        let nn_length = if nn_length.is_finite() && nn_length > 0. { nn_length } else { 1. };

        1. / (problem.size() as f64 * nn_length)
    }

    /// Sets all trail values to `tau0` (but not below the minimum).
    pub fn initialize(&mut self, tau0: f64) {
        self.trail.fill(tau0.max(self.tau_min));
    }

    /// Evaporates trail: every off-diagonal value is multiplied by `1 - rho` and clamped to the minimum.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1. - rho;
        let tau_min = self.tau_min;
        let size = self.trail.size();
        let stride = self.trail.stride();

        parallel_chunks_mut(self.trail.as_mut_padded(), stride, |from, row| {
            row.iter_mut().take(size).enumerate().filter(|(to, _)| *to != from).for_each(|(_, cell)| {
                *cell = (*cell * keep).max(tau_min);
            });
        });
    }

    /// Adds `amount` of pheromone to every edge of the tour, both directions together.
    pub fn deposit(&mut self, tour: &Tour, amount: f64) {
        for (from, to) in tour.edges() {
            let value = (self.trail.get(from, to) + amount).max(self.tau_min);
            self.trail.set(from, to, value);
            self.trail.set(to, from, value);
        }
    }

    /// Recomputes choice information `tau^alpha * eta^beta` for every pair of distinct cities.
    pub fn rebuild_choice_info(&mut self, alpha: f64, beta: f64) {
        let Self { trail, heuristic, choice_info, .. } = self;
        let size = choice_info.size();
        let stride = choice_info.stride();

        parallel_chunks_mut(choice_info.as_mut_padded(), stride, |from, row| {
            let trail = trail.row(from);
            let heuristic = heuristic.row(from);

            row.iter_mut().take(size).zip(trail.iter().zip(heuristic.iter())).for_each(|(cell, (&tau, &eta))| {
                *cell = power(tau, alpha) * power(eta, beta);
            });

            row[from] = 0.;
        });
    }

    /// Returns trail value.
    #[inline]
    pub fn trail(&self, from: usize, to: usize) -> f64 {
        self.trail.get(from, to)
    }

    /// Returns heuristic desirability, zero for the same city.
    pub fn heuristic(&self, from: usize, to: usize) -> f64 {
        self.heuristic.get(from, to)
    }

    /// Returns choice information.
    #[inline]
    pub fn choice(&self, from: usize, to: usize) -> f64 {
        self.choice_info.get(from, to)
    }

    /// Returns choice information of all cities reachable from the given one.
    #[inline]
    pub fn choice_row(&self, from: usize) -> &[f64] {
        self.choice_info.row(from)
    }

    /// Returns the lower trail bound.
    pub fn tau_min(&self) -> f64 {
        self.tau_min
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.trail.size()
    }

    /// Returns true if trail is symmetric.
    pub fn is_symmetric(&self) -> bool {
        self.trail.is_symmetric()
    }

    /// Returns the smallest off-diagonal trail value.
    pub fn min_trail(&self) -> f64 {
        self.off_diagonal().fold(f64::INFINITY, f64::min)
    }

    /// Returns sum of all off-diagonal trail values.
    pub fn total_trail(&self) -> f64 {
        self.off_diagonal().sum()
    }

    fn off_diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        let size = self.size();
        (0..size).flat_map(move |from| (0..size).filter(move |&to| to != from).map(move |to| self.trail(from, to)))
    }
}

#[inline]
fn power(value: f64, exponent: f64) -> f64 {
    if exponent == 0. {
        1.
    } else if exponent == 1. {
        value
    } else if exponent == 2. {
        value * value
    } else {
        value.powf(exponent)
    }
}
