//! Contains functionality to read TSPLIB95 instances and write tours.

mod reader;
pub use self::reader::{TsplibInstance, TsplibProblem};

mod writer;
pub use self::writer::TsplibTour;
