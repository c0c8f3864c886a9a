//! frostbit: freeze-style controlled reads of unwritten storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the frostbit sub-crates. For most users, adding `frostbit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use frostbit::prelude::*;
//!
//! // A cell can be read before it is written; the value is arbitrary but
//! // stays the same until the next write.
//! let cell = FreezeCell::<u64>::uninit();
//! let garbage = read_maybe_uninitialized(&cell);
//! assert_eq!(read_maybe_uninitialized(&cell), garbage);
//! cell.write(5);
//! assert_eq!(read_maybe_uninitialized(&cell), 5);
//!
//! // The sparse set relies on that to skip initialising its arrays.
//! let mut set = SparseSet::new(1 << 20);
//! set.insert(123_456);
//! assert!(set.contains(123_456));
//! assert!(!set.contains(7));
//! set.clear();
//! assert!(set.is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`cells`] | `frostbit-core` | `Flat`, `FreezeCell`, `FrozenArray`, policies, controlled-read traits |
//! | [`sparse`] | `frostbit-sparse` | `SparseSet` and its config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Controlled-read cells and arrays (`frostbit-core`).
pub use frostbit_core as cells;

/// Sparse set over uninitialised storage (`frostbit-sparse`).
pub use frostbit_sparse as sparse;

/// Common imports.
pub mod prelude {
    pub use frostbit_core::{
        read_maybe_uninitialized, start_lifetime_as_array_uninitialized, Classification,
        ControlledRead, ControlledWrite, Flat, FreezeCell, FreezePolicy, FrozenArray, Phase,
    };
    pub use frostbit_sparse::{SparseSet, SparseSetConfig};
}
