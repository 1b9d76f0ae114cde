#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::Problem;
use crate::utils::{AcoError, AcoResult};

/// A closed tour which visits every city exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    cities: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Creates a tour from cities order, length is calculated using the problem.
    pub fn new(problem: &Problem, cities: Vec<usize>) -> Self {
        let length = problem.tour_length(cities.as_slice());
        Self { cities, length }
    }

    /// Creates a tour with already known length.
    pub fn new_with_length(cities: Vec<usize>, length: f64) -> Self {
        Self { cities, length }
    }

    /// Returns cities in visiting order.
    pub fn cities(&self) -> &[usize] {
        self.cities.as_slice()
    }

    /// Returns cities for modification. Length has to be updated by caller.
    pub(crate) fn cities_mut(&mut self) -> &mut [usize] {
        self.cities.as_mut_slice()
    }

    /// Returns tour length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Sets tour length.
    pub(crate) fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    /// Returns all edges including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cities.windows(2).map(|pair| (pair[0], pair[1])).chain(match (self.cities.last(), self.cities.first()) {
            (Some(&last), Some(&first)) if self.cities.len() > 1 => Some((last, first)),
            _ => None,
        })
    }

    /// Checks that the tour is a permutation of `[0, size)`.
    pub fn validate(&self, size: usize) -> AcoResult<()> {
        if self.cities.len() != size {
            return Err(AcoError::InvariantViolation(format!(
                "tour has {} cities, expected {size}",
                self.cities.len()
            )));
        }

        let mut seen = vec![false; size];
        for &city in self.cities.iter() {
            match seen.get_mut(city) {
                Some(seen) if !*seen => *seen = true,
                Some(_) => return Err(AcoError::InvariantViolation(format!("city {city} is visited twice"))),
                None => return Err(AcoError::InvariantViolation(format!("unknown city {city} in tour"))),
            }
        }

        Ok(())
    }
}
