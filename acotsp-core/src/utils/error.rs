#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.clone()).collect::<Vec<_>>().join(separator)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<AcoError> for GenericError {
    fn from(value: AcoError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Specifies a failure of the colony run. Every kind is fatal for the run: the solver never
/// retries and never returns partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcoError {
    /// Invalid parameter or parameter combination, detected before the first trial.
    Configuration(String),
    /// The instance cannot be solved: too few cities, coincident cities, etc.
    DegenerateInstance(String),
    /// Cannot allocate memory or build a thread pool.
    ResourceExhaustion(String),
    /// An internal inconsistency, e.g. a tour which is not a permutation of cities.
    InvariantViolation(String),
}

/// A type alias for result type with `AcoError`.
pub type AcoResult<T> = Result<T, AcoError>;

impl AcoError {
    /// Returns a short name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AcoError::Configuration(_) => "configuration error",
            AcoError::DegenerateInstance(_) => "degenerate instance",
            AcoError::ResourceExhaustion(_) => "resource exhaustion",
            AcoError::InvariantViolation(_) => "invariant violation",
        }
    }

    /// Returns error's message.
    pub fn message(&self) -> &str {
        match self {
            AcoError::Configuration(msg)
            | AcoError::DegenerateInstance(msg)
            | AcoError::ResourceExhaustion(msg)
            | AcoError::InvariantViolation(msg) => msg.as_str(),
        }
    }
}

impl Display for AcoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for AcoError {}
