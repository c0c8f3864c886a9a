//! Controlled reads of storage that may not have been written yet.
//!
//! Every storage cell in this crate is classified as *written* or
//! *not-written*. Reading a not-written cell is defined: the first read
//! commits one arbitrary value for that cell (the "freeze"), and every
//! subsequent read returns the same value until the next write.
//!
//! # Architecture
//!
//! ```text
//! FrozenArray<'a, T>
//! ├── values: Box<[Cell<MaybeUninit<T>>]> (owned, never initialised)
//! │           or &'a [Cell<MaybeUninit<T>>] (caller's raw storage)
//! ├── shadow: Box<[Cell<u8>]> (one classification byte per cell, zero-allocated)
//! ├── policy: FreezePolicy (which value a commit produces)
//! └── stats:  per-array read/write/commit counters
//!
//! FreezeCell<T>: the same value + shadow pair for a single cell.
//! ```
//!
//! # Threading
//!
//! Cells are single-threaded state: every cell-bearing type holds a
//! `core::cell::Cell` and is therefore `!Sync`. Moving a whole cell or
//! array to another thread is fine (`Send` when `T: Send`); sharing one is
//! not expressible in safe code.
//!
//! # Unsafe code
//!
//! `unsafe` is denied crate-wide except in `raw` (memory reinterpretation
//! and the commit routine) and `flat` (the [`Flat`] marker trait).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod cell;
pub mod error;
pub mod flat;
pub mod policy;
mod raw;
pub mod state;
pub mod stats;
pub mod traits;

// Public re-exports for the primary API surface.
pub use array::{start_lifetime_as_array_uninitialized, CellRef, FrozenArray};
pub use cell::FreezeCell;
pub use error::StorageError;
pub use flat::Flat;
pub use policy::FreezePolicy;
pub use state::{Classification, Phase};
pub use stats::AccessStats;
pub use traits::{read_maybe_uninitialized, ControlledRead, ControlledWrite};
