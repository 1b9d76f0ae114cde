//! Core crate contains the building blocks of a parallel ***Ant Colony Optimization*** solver for the
//! symmetric ***Traveling Salesman Problem***.
//!
//! Ants construct tours guided by a shared pheromone trail and static inverse distance heuristic,
//! a share of the shortest tours is refined by a candidate list restricted 2-opt, and the trail is
//! evaporated and reinforced along the selected tours. Ants run on a fixed pool of workers, each
//! with its own random stream and its own cache line padded scratch memory.
//!

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod refinement;
pub mod solver;
pub mod utils;
