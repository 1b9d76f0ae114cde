//! Contains extensions used by the command line interface.

pub mod solve;
