//! Fixed-universe sparse set with O(1) operations over uninitialised storage.
//!
//! # Architecture
//!
//! ```text
//! SparseSet
//! ├── elements: FrozenArray<usize> (dense members, valid in 0..size)
//! ├── index_of: FrozenArray<usize> (value → slot, written only once inserted)
//! └── size
//! ```
//!
//! A value `x` is a member iff `index_of[x] < size && elements[index_of[x]] == x`.
//! For a value that was never inserted, `index_of[x]` is whatever the
//! controlled read commits; either the bounds check or the equality check
//! rejects it. Neither array is initialised at construction, and `clear`
//! only resets `size`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod set;

pub use config::SparseSetConfig;
pub use error::SparseSetError;
pub use set::{Iter, SparseSet};
