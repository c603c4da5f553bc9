// src/error.rs

//! Error type for the comparison protocol.
//!
//! Index-qualified operations are the only ones that can fail. A dimension
//! mismatch between two operands is not an error: such tuples are simply
//! unequal, so it never shows up here.

use std::fmt;

/// Errors raised by tuple accessors and index-qualified comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleError {
    /// A component index outside `[0, size)` was requested.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Dimensionality of the tuple that was indexed.
        size: usize,
    },
}

impl fmt::Display for TupleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleError::IndexOutOfRange { index, size } => write!(
                f,
                "component index {} out of range for tuple of size {}",
                index, size
            ),
        }
    }
}

impl std::error::Error for TupleError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TupleError>;
