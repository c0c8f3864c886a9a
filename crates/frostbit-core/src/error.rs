//! Errors from checked construction of controlled-read storage.
//!
//! Reads and writes never fail. Only laying a [`FrozenArray`](crate::FrozenArray)
//! over caller-provided bytes has preconditions that can be checked and
//! reported instead of panicking.

use std::error::Error;
use std::fmt;

/// Raw storage cannot hold the requested array of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The storage start address is not aligned for the element type.
    Misaligned {
        /// Address of the first byte of the storage.
        address: usize,
        /// Required alignment in bytes.
        align: usize,
    },
    /// The storage is shorter than `count * size_of::<T>()` bytes.
    TooSmall {
        /// Bytes needed for the requested array.
        required: usize,
        /// Bytes provided.
        available: usize,
    },
    /// `count * size_of::<T>()` overflows `usize`.
    SizeOverflow {
        /// Requested element count.
        count: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misaligned { address, align } => {
                write!(
                    f,
                    "storage at 0x{address:x} is not aligned to {align} bytes"
                )
            }
            Self::TooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "storage too small: requires {required} bytes, {available} available"
                )
            }
            Self::SizeOverflow {
                count,
                element_size,
            } => {
                write!(
                    f,
                    "array size overflows: {count} elements of {element_size} bytes"
                )
            }
        }
    }
}

impl Error for StorageError {}
