//! Sparse set construction errors.
//!
//! Set operations themselves never fail: an out-of-universe value is a
//! caller contract violation and panics.

use std::error::Error;
use std::fmt;

/// Errors from checked sparse set construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SparseSetError {
    /// The universe is too large to allocate backing arrays for.
    UniverseTooLarge {
        /// Requested universe size.
        universe: usize,
        /// Largest supported universe size.
        max: usize,
    },
}

impl fmt::Display for SparseSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UniverseTooLarge { universe, max } => {
                write!(f, "universe {universe} exceeds maximum {max}")
            }
        }
    }
}

impl Error for SparseSetError {}
