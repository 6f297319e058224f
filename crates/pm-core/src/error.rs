//! Core error type.
//!
//! "No path" and "search budget exhausted" are not errors: both are reported
//! as an empty [`Path`](crate::Path).  Only precondition violations end up here.

use thiserror::Error;

use crate::PositionId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// Edge weights must be non-negative numbers.  NaN is rejected as well.
    #[error("edge distance must be non-negative, got {distance}")]
    NegativeDistance { distance: f64 },

    #[error("position {0} not found in store")]
    UnknownPosition(PositionId),

    /// The store already holds every handle a `u32` can express.
    #[error("position index {0} does not fit in a handle")]
    IndexOverflow(usize),
}

/// Shorthand result type for all `pm-*` crates.
pub type PathResult<T> = Result<T, PathError>;
