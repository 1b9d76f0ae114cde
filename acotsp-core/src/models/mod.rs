//! The models module contains the problem definition and the data the colony learns and produces.

mod matrix;
pub use self::matrix::SquareMatrix;

mod pheromone;
pub use self::pheromone::PheromoneField;

mod problem;
pub use self::problem::{Coordinate, DistanceKind, Problem};

mod tour;
pub use self::tour::Tour;
