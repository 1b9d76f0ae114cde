//! Scientific crate contains logic to read benchmark instances of the Traveling Salesman Problem
//! and to write tours found by the ant colony solver.
//!
//!
//! # Supported formats
//!
//! - **tsplib** subset of TSPLIB95 format: `TSP` instances with `EUC_2D`, `CEIL_2D`, `ATT` or `EXACT_2D`
//!   node coordinates, and `TOUR` files as output.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

pub use acotsp_core as core;

pub mod common;
pub mod tsplib;
