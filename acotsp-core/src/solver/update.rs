#[cfg(test)]
#[path = "../../tests/unit/solver/update_test.rs"]
mod update_test;

use crate::models::{PheromoneField, Tour};
use crate::solver::DepositPolicy;
use crate::utils::{AcoError, AcoResult, compare_floats};

/// Summarizes a single pheromone update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateSummary {
    /// Index of the shortest tour of the iteration.
    pub iteration_best: usize,
    /// True if the trial best tour was replaced.
    pub improved: bool,
    /// Amount of tours which deposited pheromone.
    pub deposited: usize,
}

/// Evaporates and reinforces the pheromone trail after all ants of an iteration are done.
pub struct PheromoneUpdate {
    rho: f64,
    alpha: f64,
    beta: f64,
    deposit: DepositPolicy,
}

impl PheromoneUpdate {
    /// Creates a new instance of `PheromoneUpdate`.
    pub fn new(rho: f64, alpha: f64, beta: f64, deposit: DepositPolicy) -> Self {
        Self { rho, alpha, beta, deposit }
    }

    /// Applies the update: trial best tracking, evaporation, deposit and choice info rebuild.
    pub fn apply(
        &self,
        field: &mut PheromoneField,
        tours: &[Tour],
        trial_best: &mut Option<Tour>,
    ) -> AcoResult<UpdateSummary> {
        let iteration_best = tours
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| compare_floats(a.length(), b.length()))
            .map(|(idx, _)| idx)
            .ok_or_else(|| AcoError::InvariantViolation("no tours to update pheromone with".to_string()))?;

        let improved = match trial_best.as_ref() {
            Some(best) => tours[iteration_best].length() < best.length(),
            None => true,
        };

        if improved {
            *trial_best = Some(tours[iteration_best].clone());
        }

        field.evaporate(self.rho);

        let deposited = match self.deposit {
            DepositPolicy::AllAnts => {
                tours.iter().for_each(|tour| field.deposit(tour, 1. / tour.length()));
                tours.len()
            }
            DepositPolicy::IterationBest => {
                let tour = &tours[iteration_best];
                field.deposit(tour, 1. / tour.length());
                1
            }
            DepositPolicy::TrialBest => {
                let tour = trial_best.as_ref().unwrap_or(&tours[iteration_best]);
                field.deposit(tour, 1. / tour.length());
                1
            }
        };

        field.rebuild_choice_info(self.alpha, self.beta);

        Ok(UpdateSummary { iteration_best, improved, deposited })
    }

    /// Returns deposit policy.
    pub fn deposit(&self) -> DepositPolicy {
        self.deposit
    }
}
