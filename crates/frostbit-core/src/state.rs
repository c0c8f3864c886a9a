//! Per-cell classification state.
//!
//! Each cell carries one shadow byte. Two bits are meaningful:
//!
//! - `WRITTEN`: the last operation affecting the cell's value was a store.
//! - `HOLDS_VALUE`: the value storage contains a complete `T` (from a store
//!   or from a commit). Never cleared, so a reset cell freezes to whatever
//!   its bytes held before the reset.
//!
//! A zero byte is a fresh, never-observed cell, so shadow storage can be
//! allocated zeroed without walking it.

use std::fmt;

pub(crate) const WRITTEN: u8 = 0b01;
pub(crate) const HOLDS_VALUE: u8 = 0b10;

/// Whether a cell has received a value-producing write since its last reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The cell was stored to and not reset since.
    Written,
    /// The cell was never stored to, or was reset after its last store.
    NotWritten,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => write!(f, "written"),
            Self::NotWritten => write!(f, "not-written"),
        }
    }
}

/// Finer-grained view of a cell's state, distinguishing committed from
/// uncommitted not-written cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not-written, and no value has been committed yet.
    Unwritten,
    /// Not-written, but a value is committed: reads return it until the
    /// next write.
    Frozen,
    /// Written.
    Written,
}

impl Phase {
    pub(crate) fn from_bits(bits: u8) -> Self {
        if bits & WRITTEN != 0 {
            Self::Written
        } else if bits & HOLDS_VALUE != 0 {
            Self::Frozen
        } else {
            Self::Unwritten
        }
    }

    /// Collapse to the two-valued classification.
    pub fn classification(self) -> Classification {
        match self {
            Self::Written => Classification::Written,
            Self::Unwritten | Self::Frozen => Classification::NotWritten,
        }
    }
}
