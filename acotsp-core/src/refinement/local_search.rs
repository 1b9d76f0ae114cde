#[cfg(test)]
#[path = "../../tests/unit/refinement/local_search_test.rs"]
mod local_search_test;

use crate::algorithms::structures::BitSlice;
use crate::construction::AntState;
use crate::models::{Problem, Tour};
use crate::utils::{AcoError, AcoResult, RandomStream};

/// Minimum gain of an applied move.
const MIN_GAIN: f64 = 1e-9;

/// A first improvement 2-opt restricted to candidate lists with don't-look bits.
pub struct TwoOpt<'a> {
    problem: &'a Problem,
    max_moves: Option<usize>,
}

impl<'a> TwoOpt<'a> {
    /// Creates a new instance of `TwoOpt`. When `max_moves` is set, search stops after that many moves.
    pub fn new(problem: &'a Problem, max_moves: Option<usize>) -> Self {
        Self { problem, max_moves }
    }

    /// Improves the tour in place using worker scratch memory. Returns amount of applied moves.
    ///
    /// The tour is replaced only when its recomputed length is not worse than the original one.
    pub fn improve(&self, tour: &mut Tour, state: &mut AntState, stream: &mut RandomStream) -> AcoResult<usize> {
        let size = self.problem.size();
        if tour.size() != size || state.size() != size {
            return Err(AcoError::InvariantViolation(format!(
                "tour of size {} or state of size {} does not match problem of size {size}",
                tour.size(),
                state.size()
            )));
        }

        tour.validate(size)?;

        if size < 4 {
            return Ok(0);
        }

        let (cities, positions, order, dont_look) = state.search_scratch();
        cities.copy_from_slice(tour.cities());
        cities.iter().enumerate().for_each(|(position, &city)| positions[city] = position);
        order.iter_mut().enumerate().for_each(|(idx, city)| *city = idx);
        stream.shuffle(order);
        dont_look.clear();

        let moves = self.search(cities, positions, order, dont_look);
        if moves == 0 {
            return Ok(0);
        }

        let length = self.problem.tour_length(cities);
        if length > tour.length() {
            return Ok(0);
        }

        tour.cities_mut().copy_from_slice(cities);
        tour.set_length(length);
        tour.validate(size)?;

        Ok(moves)
    }

    fn search(&self, tour: &mut [usize], positions: &mut [usize], order: &[usize], dont_look: &mut BitSlice) -> usize {
        let max_moves = self.max_moves.unwrap_or(usize::MAX);
        let mut moves = 0;
        let mut improved = true;

        while improved && moves < max_moves {
            improved = false;

            for &city in order.iter() {
                if moves >= max_moves {
                    break;
                }

                if dont_look.get(city) {
                    continue;
                }

                match self.find_move(city, tour, positions) {
                    Some((h1, h2, h3, h4)) => {
                        apply_move(tour, positions, h2, h3, h4, h1);
                        [h1, h2, h3, h4].into_iter().for_each(|city| dont_look.set(city, false));
                        moves += 1;
                        improved = true;
                    }
                    None => dont_look.set(city, true),
                }
            }
        }

        debug_assert!(positions.iter().enumerate().all(|(city, &position)| tour[position] == city));

        moves
    }

    /// Looks for an improving exchange of edges `(h1, h2)` and `(h3, h4)` for `(h1, h3)` and
    /// `(h2, h4)`, where `h2` follows `h1` and `h4` follows `h3` in the tour.
    fn find_move(&self, city: usize, tour: &[usize], positions: &[usize]) -> Option<(usize, usize, usize, usize)> {
        let size = tour.len();
        let succ = |c: usize| tour[(positions[c] + 1) % size];
        let pred = |c: usize| tour[(positions[c] + size - 1) % size];
        let distance = |a: usize, b: usize| self.problem.distance(a, b);
        let candidates = self.problem.candidates(city);

        let next = succ(city);
        let radius = distance(city, next);
        for &other in candidates {
            let added = distance(city, other);
            if added >= radius {
                break;
            }

            let other_next = succ(other);
            if other_next == city || other == next {
                continue;
            }

            let gain = (radius - added) + (distance(other, other_next) - distance(next, other_next));
            if gain > MIN_GAIN {
                return Some((city, next, other, other_next));
            }
        }

        let prev = pred(city);
        let radius = distance(prev, city);
        for &other in candidates {
            let added = distance(city, other);
            if added >= radius {
                break;
            }

            let other_prev = pred(other);
            if other_prev == city || other == prev {
                continue;
            }

            let gain = (radius - added) + (distance(other_prev, other) - distance(prev, other_prev));
            if gain > MIN_GAIN {
                return Some((prev, city, other_prev, other));
            }
        }

        None
    }
}

/// Reverses the part of the tour between `from` and `to` (inclusive, going forward) or its
/// complement between `after` and `before`, whichever is shorter. Both give the same cycle.
fn apply_move(tour: &mut [usize], positions: &mut [usize], from: usize, to: usize, after: usize, before: usize) {
    let size = tour.len();
    let inner = (positions[to] + size - positions[from]) % size + 1;

    let (start, end, len) = if 2 * inner <= size {
        (positions[from], positions[to], inner)
    } else {
        (positions[after], positions[before], size - inner)
    };

    for step in 0..len / 2 {
        let left = (start + step) % size;
        let right = (end + size - step) % size;

        tour.swap(left, right);
        positions[tour[left]] = left;
        positions[tour[right]] = right;
    }
}
