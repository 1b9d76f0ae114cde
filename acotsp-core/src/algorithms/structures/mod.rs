//! Low level data structures tuned for concurrent access patterns.

mod aligned;
pub use self::aligned::*;

mod bitslice;
pub use self::bitslice::*;
