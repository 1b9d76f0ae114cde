//! Contains functionality needed to configure and report solver runs.

pub mod config;

mod report;
pub use self::report::ConsoleSink;
