#[cfg(test)]
#[path = "../../tests/unit/construction/ant_test.rs"]
mod ant_test;

use crate::construction::AntState;
use crate::models::{PheromoneField, Problem, Tour};
use crate::utils::{AcoError, AcoResult, RandomStream};

/// Builds a single tour by probabilistic decisions over the candidate list of the current city.
pub struct AntConstructor<'a> {
    problem: &'a Problem,
    field: &'a PheromoneField,
}

impl<'a> AntConstructor<'a> {
    /// Creates a new instance of `AntConstructor`.
    pub fn new(problem: &'a Problem, field: &'a PheromoneField) -> Self {
        Self { problem, field }
    }

    /// Builds a tour for the given ant. The ant starts at `ant mod n`.
    pub fn construct(&self, ant: usize, state: &mut AntState, stream: &mut RandomStream) -> AcoResult<Tour> {
        let size = self.problem.size();
        if state.size() != size || self.field.size() != size {
            return Err(AcoError::InvariantViolation(format!(
                "ant state of size {} or pheromone field of size {} does not match problem of size {size}",
                state.size(),
                self.field.size()
            )));
        }

        state.reset(ant % size);

        while state.placed() < size {
            let current = state.current();
            let next = self.select_candidate(state, stream).or_else(|| self.select_fallback(state)).ok_or_else(|| {
                AcoError::InvariantViolation(format!(
                    "ant {ant} has no unvisited city at step {} of {size}",
                    state.placed()
                ))
            })?;

            state.visit(next, self.problem.distance(current, next));
        }

        let length = state.length() + self.problem.distance(state.current(), state.start());
        let tour = Tour::new_with_length(state.tour().to_vec(), length);
        tour.validate(size)?;

        Ok(tour)
    }

    /// Roulette wheel selection over unvisited candidates. Returns `None` when there is nothing
    /// with a positive weight left in the candidate list.
    fn select_candidate(&self, state: &mut AntState, stream: &mut RandomStream) -> Option<usize> {
        let current = state.current();
        let candidates = self.problem.candidates(current);
        let (weights, total) = state.candidate_weights(candidates, self.field.choice_row(current));

        if !(total.is_finite() && total > 0.) {
            return None;
        }

        let target = stream.next_real() * total;
        let mut cumulative = 0.;
        let mut last_positive = None;

        for (&city, &weight) in candidates.iter().zip(weights.iter()) {
            if weight <= 0. {
                continue;
            }

            cumulative += weight;
            last_positive = Some(city);

            if cumulative > target {
                return last_positive;
            }
        }

        // NOTE rounding can leave target slightly above accumulated sum
        last_positive
    }

    /// Picks the unvisited city with the largest choice value, ties go to the smallest id.
    fn select_fallback(&self, state: &AntState) -> Option<usize> {
        let choice = self.field.choice_row(state.current());

        let mut best: Option<(usize, f64)> = None;

        for (city, &value) in choice.iter().enumerate() {
            if !state.is_visited(city) && best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((city, value));
            }
        }

        best.map(|(city, _)| city)
    }
}
