//! A single controlled-read cell.

use std::cell::Cell;
use std::fmt;
use std::mem::MaybeUninit;

use crate::flat::Flat;
use crate::policy::FreezePolicy;
use crate::raw::{self, ValueCell};
use crate::state::{Classification, Phase};
use crate::traits::{ControlledRead, ControlledWrite};

/// A standalone storage cell that may be read before it is written.
///
/// The cell starts not-written. Its first read commits a value chosen by
/// its [`FreezePolicy`]; later reads return the same value until a
/// [`write`](FreezeCell::write).
///
/// ```
/// use frostbit_core::{FreezeCell, Classification};
///
/// let cell = FreezeCell::<u32>::uninit();
/// let a = cell.read();
/// assert_eq!(a, cell.read());
/// assert_eq!(cell.classification(), Classification::NotWritten);
///
/// cell.write(7);
/// assert_eq!(cell.read(), 7);
/// assert_eq!(cell.get(), Some(7));
/// ```
pub struct FreezeCell<T: Flat> {
    value: ValueCell<T>,
    shadow: Cell<u8>,
    policy: FreezePolicy,
}

impl<T: Flat> FreezeCell<T> {
    /// Create a not-written cell using the default policy.
    pub fn uninit() -> Self {
        Self::with_policy(FreezePolicy::default())
    }

    /// Create a not-written cell that commits values chosen by `policy`.
    pub fn with_policy(policy: FreezePolicy) -> Self {
        Self {
            value: Cell::new(MaybeUninit::uninit()),
            shadow: Cell::new(0),
            policy,
        }
    }

    /// Create a written cell holding `value`.
    pub fn new(value: T) -> Self {
        let cell = Self::uninit();
        cell.write(value);
        cell
    }

    /// Controlled read. See [`ControlledRead::read_maybe_uninitialized`].
    pub fn read(&self) -> T {
        let loaded = raw::load(&self.value, &self.shadow, self.policy, 0);
        if loaded.committed {
            log::trace!("freeze cell committed a value ({})", self.policy);
        }
        loaded.value
    }

    /// The value, if the cell is written.
    pub fn get(&self) -> Option<T> {
        match self.phase() {
            Phase::Written => Some(self.read()),
            Phase::Unwritten | Phase::Frozen => None,
        }
    }

    /// Store `value`.
    pub fn write(&self, value: T) {
        raw::store(&self.value, &self.shadow, value);
    }

    /// Return the cell to not-written, keeping its bytes.
    pub fn reset(&self) {
        raw::unmark(&self.shadow);
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::from_bits(self.shadow.get())
    }

    /// Current classification.
    pub fn classification(&self) -> Classification {
        self.phase().classification()
    }

    /// The policy this cell commits with.
    pub fn policy(&self) -> FreezePolicy {
        self.policy
    }
}

impl<T: Flat> Default for FreezeCell<T> {
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T: Flat + fmt::Debug> fmt::Debug for FreezeCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug output must not commit a value, so only written cells show one.
        let mut s = f.debug_struct("FreezeCell");
        s.field("phase", &self.phase());
        if let Some(v) = self.get() {
            s.field("value", &v);
        }
        s.finish()
    }
}

impl<T: Flat> ControlledRead for FreezeCell<T> {
    type Value = T;

    fn read_maybe_uninitialized(&self) -> T {
        self.read()
    }

    fn classification(&self) -> Classification {
        FreezeCell::classification(self)
    }

    fn get(&self) -> Option<T> {
        FreezeCell::get(self)
    }
}

impl<T: Flat> ControlledWrite for FreezeCell<T> {
    fn write(&self, value: T) {
        FreezeCell::write(self, value);
    }

    fn reset(&self) {
        FreezeCell::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::read_maybe_uninitialized;

    #[test]
    fn fresh_cell_is_unwritten() {
        let cell = FreezeCell::<u64>::uninit();
        assert_eq!(cell.phase(), Phase::Unwritten);
        assert_eq!(cell.classification(), Classification::NotWritten);
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn first_read_commits_and_repeats() {
        let cell = FreezeCell::<u64>::uninit();
        let a = read_maybe_uninitialized(&cell);
        assert_eq!(cell.phase(), Phase::Frozen);
        let b = read_maybe_uninitialized(&cell);
        let c = cell.read();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(cell.classification(), Classification::NotWritten);
    }

    #[test]
    fn committed_value_follows_policy() {
        let cell = FreezeCell::<u32>::with_policy(FreezePolicy::Filled(0xAB));
        assert_eq!(cell.read(), 0xABAB_ABAB);
        let zero = FreezeCell::<i16>::with_policy(FreezePolicy::Zeroed);
        assert_eq!(zero.read(), 0);
    }

    #[test]
    fn write_overrides_commit() {
        let cell = FreezeCell::<u32>::with_policy(FreezePolicy::Filled(0xFF));
        assert_eq!(cell.read(), u32::MAX);
        cell.write(12);
        assert_eq!(cell.read(), 12);
        assert_eq!(cell.get(), Some(12));
        assert_eq!(cell.classification(), Classification::Written);
    }

    #[test]
    fn reset_freezes_old_bytes() {
        let cell = FreezeCell::new(99u8);
        cell.reset();
        assert_eq!(cell.phase(), Phase::Frozen);
        assert_eq!(cell.get(), None);
        assert_eq!(cell.read(), 99);
        cell.write(1);
        assert_eq!(cell.read(), 1);
    }

    #[test]
    fn debug_does_not_commit() {
        let cell = FreezeCell::<u16>::uninit();
        let out = format!("{cell:?}");
        assert!(out.contains("Unwritten"));
        assert_eq!(cell.phase(), Phase::Unwritten);

        cell.write(5);
        assert!(format!("{cell:?}").contains("value: 5"));
    }

    #[test]
    fn trait_objects_and_arrays() {
        let cell = FreezeCell::<[u8; 4]>::with_policy(FreezePolicy::Filled(3));
        let dyn_cell: &dyn ControlledWrite<Value = [u8; 4]> = &cell;
        assert_eq!(read_maybe_uninitialized(dyn_cell), [3; 4]);
        dyn_cell.write([1, 2, 3, 4]);
        assert_eq!(cell.get(), Some([1, 2, 3, 4]));
    }
}
