//! A library part of the command line interface: configuration file support and console reporting
//! for the ant colony TSP solver.
//!
//! # Configuration file
//!
//! Colony parameters can be passed as a json file, every key is optional and falls back to the default value:
//!
//! ```json
//! {
//!   "ants": 50,
//!   "rho": 0.2,
//!   "maxIterations": 500,
//!   "lsPercentage": 0.1,
//!   "deposit": "iteration-best"
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/features/solve_test.rs"]
mod solve_test;

pub use acotsp_core as core;
pub use acotsp_scientific as scientific;

pub mod extensions;
