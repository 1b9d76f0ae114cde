#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::SquareMatrix;
use crate::utils::{AcoError, AcoResult, compare_floats, parallel_chunks_mut};
use std::cmp::Ordering;

/// A city location on a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Specifies how a distance between two coordinates is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceKind {
    /// Exact euclidean distance.
    #[default]
    Euclidean,
    /// Euclidean distance rounded to the nearest integer (TSPLIB `EUC_2D`).
    RoundedEuclidean,
    /// Euclidean distance rounded up (TSPLIB `CEIL_2D`).
    CeilEuclidean,
    /// Pseudo euclidean distance (TSPLIB `ATT`).
    Pseudo,
}

impl DistanceKind {
    /// Returns distance between two coordinates.
    pub fn measure(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        let dx = from.x - to.x;
        let dy = from.y - to.y;

        match self {
            DistanceKind::Euclidean => (dx * dx + dy * dy).sqrt(),
            DistanceKind::RoundedEuclidean => ((dx * dx + dy * dy).sqrt() + 0.5).floor(),
            DistanceKind::CeilEuclidean => (dx * dx + dy * dy).sqrt().ceil(),
            DistanceKind::Pseudo => {
                let real = ((dx * dx + dy * dy) / 10.).sqrt();
                let rounded = (real + 0.5).floor();
                if rounded < real { rounded + 1. } else { rounded }
            }
        }
    }
}

/// An immutable TSP instance: coordinates, dense distance matrix and candidate lists.
///
/// Everything here is computed once and then shared read-only by all workers.
pub struct Problem {
    coordinates: Vec<Coordinate>,
    kind: DistanceKind,
    distances: SquareMatrix,
    candidates: Vec<usize>,
    candidates_size: usize,
    nn_tour_length: f64,
}

impl Problem {
    /// Creates a new problem. Candidate lists keep `min(k_backup, n - 1)` nearest cities.
    pub fn new(coordinates: Vec<Coordinate>, kind: DistanceKind, k_backup: usize) -> AcoResult<Self> {
        let size = coordinates.len();
        if size < 2 {
            return Err(AcoError::DegenerateInstance(format!("expected at least two cities, got {size}")));
        }

        let distances = create_distances(&coordinates, kind)?;
        let candidates_size = k_backup.min(size - 1);
        let candidates = create_candidates(&distances, candidates_size);
        let nn_tour_length = estimate_nn_tour_length(&distances, &candidates, candidates_size);

        Ok(Self { coordinates, kind, distances, candidates, candidates_size, nn_tour_length })
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns distance between two cities.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Returns nearest cities of the given one ordered by distance.
    #[inline]
    pub fn candidates(&self, city: usize) -> &[usize] {
        let start = city * self.candidates_size;
        &self.candidates[start..start + self.candidates_size]
    }

    /// Returns size of every candidate list.
    pub fn candidates_size(&self) -> usize {
        self.candidates_size
    }

    /// Returns city coordinate.
    pub fn coordinate(&self, city: usize) -> &Coordinate {
        &self.coordinates[city]
    }

    /// Returns all coordinates.
    pub fn coordinates(&self) -> &[Coordinate] {
        self.coordinates.as_slice()
    }

    /// Returns distance kind.
    pub fn kind(&self) -> DistanceKind {
        self.kind
    }

    /// Returns length of a greedy nearest neighbour tour started from the first city.
    pub fn nn_tour_length(&self) -> f64 {
        self.nn_tour_length
    }

    /// Returns length of a closed tour visiting cities in the given order.
    pub fn tour_length(&self, cities: &[usize]) -> f64 {
        tour_length(&self.distances, cities)
    }

    /// Returns distance matrix.
    pub fn distances(&self) -> &SquareMatrix {
        &self.distances
    }
}

fn tour_length(distances: &SquareMatrix, cities: &[usize]) -> f64 {
    match (cities.first(), cities.last()) {
        (Some(&first), Some(&last)) if cities.len() > 1 => {
            cities.windows(2).map(|pair| distances.get(pair[0], pair[1])).sum::<f64>() + distances.get(last, first)
        }
        _ => 0.,
    }
}

fn create_distances(coordinates: &[Coordinate], kind: DistanceKind) -> AcoResult<SquareMatrix> {
    let size = coordinates.len();
    let mut distances = SquareMatrix::new(size, 0.)?;
    let stride = distances.stride();

    parallel_chunks_mut(distances.as_mut_padded(), stride, |from, row| {
        row.iter_mut().take(size).enumerate().for_each(|(to, cell)| {
            *cell = if from == to { 0. } else { kind.measure(&coordinates[from], &coordinates[to]) };
        });
    });

    let degenerate = (0..size)
        .flat_map(|from| ((from + 1)..size).map(move |to| (from, to)))
        .find(|&(from, to)| {
            let distance = distances.get(from, to);
            !(distance.is_finite() && distance > 0.)
        });

    match degenerate {
        Some((from, to)) => Err(AcoError::DegenerateInstance(format!(
            "cities {from} and {to} are coincident or have undefined distance: {}",
            distances.get(from, to)
        ))),
        None => Ok(distances),
    }
}

fn create_candidates(distances: &SquareMatrix, candidates_size: usize) -> Vec<usize> {
    let size = distances.size();
    if candidates_size == 0 {
        return vec![];
    }

    let mut candidates = vec![0; size * candidates_size];

    parallel_chunks_mut(candidates.as_mut_slice(), candidates_size, |city, chunk| {
        let row = distances.row(city);
        let by_distance = |a: &usize, b: &usize| -> Ordering { compare_floats(row[*a], row[*b]).then(a.cmp(b)) };

        let mut others = (0..size).filter(|&other| other != city).collect::<Vec<_>>();
        if candidates_size < others.len() {
            others.select_nth_unstable_by(candidates_size, by_distance);
            others.truncate(candidates_size);
        }
        others.sort_unstable_by(by_distance);

        chunk.copy_from_slice(others.as_slice());
    });

    candidates
}

fn estimate_nn_tour_length(distances: &SquareMatrix, candidates: &[usize], candidates_size: usize) -> f64 {
    let size = distances.size();
    let mut visited = vec![false; size];
    let mut tour = Vec::with_capacity(size);

    let mut current = 0;
    visited[current] = true;
    tour.push(current);

    while tour.len() < size {
        let nearest = candidates[current * candidates_size..(current + 1) * candidates_size]
            .iter()
            .copied()
            .find(|&city| !visited[city])
            .or_else(|| {
                let row = distances.row(current);
                (0..size).filter(|&city| !visited[city]).min_by(|&a, &b| compare_floats(row[a], row[b]))
            });

        match nearest {
            Some(next) => {
                visited[next] = true;
                tour.push(next);
                current = next;
            }
            None => break,
        }
    }

    tour_length(distances, tour.as_slice())
}
