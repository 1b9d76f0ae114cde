//! This module reimports commonly used types.

pub use crate::models::{Coordinate, DistanceKind, PheromoneField, Problem, Tour};
pub use crate::solver::{
    AcoConfig, DEFAULT_K_BACKUP, DepositPolicy, Metrics, ReportSink, Solver, SolverResult, TelemetryMode, TrialReport,
};
pub use crate::utils::{AcoError, AcoResult, Environment, GenericError, GenericResult, InfoLogger};
