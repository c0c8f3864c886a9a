//! Traits for controlled-read cells.
//!
//! [`ControlledRead`] and [`ControlledWrite`] are implemented by every
//! handle to a single cell: [`FreezeCell`](crate::FreezeCell) and
//! [`CellRef`](crate::CellRef). Code that only needs "read this cell,
//! whatever its state" can be generic over them.

use crate::flat::Flat;
use crate::state::Classification;

/// Read access to a cell that may not have been written.
pub trait ControlledRead {
    /// The cell's value type.
    type Value: Flat;

    /// Read the cell.
    ///
    /// Returns the stored value if the cell is written. Otherwise returns the
    /// committed value, committing one first if this is the cell's first
    /// observation since it was created. Two reads with no write between them
    /// always return the same value. Never fails.
    fn read_maybe_uninitialized(&self) -> Self::Value;

    /// Current classification of the cell.
    fn classification(&self) -> Classification;

    /// Read the cell only if it is written.
    fn get(&self) -> Option<Self::Value>;
}

/// Write access to a controlled-read cell.
pub trait ControlledWrite: ControlledRead {
    /// Store a value, classifying the cell as written.
    fn write(&self, value: Self::Value);

    /// Classify the cell as not-written without touching its bytes.
    ///
    /// If the cell held a value, later reads return that value (now as a
    /// committed, not-written value) until the next write.
    fn reset(&self);
}

/// Read a cell that may not have been written.
///
/// See [`ControlledRead::read_maybe_uninitialized`].
pub fn read_maybe_uninitialized<C: ControlledRead + ?Sized>(cell: &C) -> C::Value {
    cell.read_maybe_uninitialized()
}
