//! A collection of reusable algorithms and structures without dependencies on solver logic.

pub mod structures;
