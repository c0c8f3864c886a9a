//! Arrays of controlled-read cells.
//!
//! A [`FrozenArray`] pairs value storage that is never initialised with a
//! zero-allocated shadow byte per cell. Construction costs one allocation
//! for the values (owned arrays only) and one zeroed allocation for the
//! shadow; no element is visited.

use std::cell::Cell;
use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ops::Deref;

use crate::error::StorageError;
use crate::flat::Flat;
use crate::policy::FreezePolicy;
use crate::raw::{self, ValueCell};
use crate::state::{Classification, Phase, WRITTEN};
use crate::stats::{AccessStats, StatsCell};
use crate::traits::{ControlledRead, ControlledWrite};

/// Where an array's value bytes live.
enum Storage<'a, T> {
    /// Allocated and owned by the array.
    Owned(Box<[ValueCell<T>]>),
    /// Caller storage, exclusively borrowed for the array's lifetime.
    Borrowed(&'a mut [ValueCell<T>]),
}

impl<T> Deref for Storage<'_, T> {
    type Target = [ValueCell<T>];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(b) => &b[..],
            Self::Borrowed(s) => &s[..],
        }
    }
}

/// A fixed-length array of cells that may be read before they are written.
///
/// Each element behaves like a [`FreezeCell`](crate::FreezeCell): reading a
/// not-written element commits a value (chosen by the array's
/// [`FreezePolicy`] and the element index) and later reads return it until
/// the element is written.
///
/// # Panics
///
/// Element accessors panic on an out-of-bounds index, like slice indexing.
pub struct FrozenArray<'a, T: Flat> {
    values: Storage<'a, T>,
    shadow: Box<[Cell<u8>]>,
    policy: FreezePolicy,
    stats: StatsCell,
}

impl<T: Flat> FrozenArray<'static, T> {
    /// Allocate an owned array of `len` not-written cells.
    pub fn new_uninit(len: usize, policy: FreezePolicy) -> Self {
        log::debug!(
            "frozen array: {len} owned cells of {} bytes, policy {policy}",
            mem::size_of::<T>()
        );
        Self {
            values: Storage::Owned(raw::uninit_cells(len)),
            shadow: raw::zeroed_shadow(len),
            policy,
            stats: StatsCell::default(),
        }
    }
}

impl<'a, T: Flat> FrozenArray<'a, T> {
    /// Lay `count` not-written cells over caller-provided bytes.
    ///
    /// Whatever the bytes contained is ignored: every cell starts
    /// not-written, and commits from `policy`. The storage stays borrowed
    /// until the array is dropped.
    pub fn from_raw_storage(
        storage: &'a mut [MaybeUninit<u8>],
        count: usize,
        policy: FreezePolicy,
    ) -> Result<Self, StorageError> {
        let cells = raw::cells_over_storage::<T>(storage, count)?;
        log::debug!(
            "frozen array: {count} borrowed cells of {} bytes, policy {policy}",
            mem::size_of::<T>()
        );
        Ok(Self {
            values: Storage::Borrowed(cells),
            shadow: raw::zeroed_shadow(count),
            policy,
            stats: StatsCell::default(),
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.shadow.len()
    }

    /// Whether the array has no cells.
    pub fn is_empty(&self) -> bool {
        self.shadow.is_empty()
    }

    /// Controlled read of element `index`.
    pub fn read(&self, index: usize) -> T {
        let loaded = raw::load(
            &self.values[index],
            &self.shadow[index],
            self.policy,
            index,
        );
        self.stats.record_read(loaded.committed);
        if loaded.committed {
            log::trace!("frozen array committed a value for cell {index}");
        }
        loaded.value
    }

    /// Element `index`, if written.
    pub fn get(&self, index: usize) -> Option<T> {
        match self.phase(index) {
            Phase::Written => Some(self.read(index)),
            Phase::Unwritten | Phase::Frozen => None,
        }
    }

    /// Store `value` into element `index`.
    pub fn write(&self, index: usize, value: T) {
        raw::store(&self.values[index], &self.shadow[index], value);
        self.stats.record_write();
    }

    /// Phase of element `index`.
    pub fn phase(&self, index: usize) -> Phase {
        Phase::from_bits(self.shadow[index].get())
    }

    /// Classification of element `index`.
    pub fn classification(&self, index: usize) -> Classification {
        self.phase(index).classification()
    }

    /// Handle to element `index`, usable wherever a single cell is expected.
    pub fn cell(&self, index: usize) -> CellRef<'_, 'a, T> {
        assert!(
            index < self.len(),
            "cell index {index} out of bounds for frozen array of length {}",
            self.len()
        );
        CellRef { array: self, index }
    }

    /// Return every cell to not-written without touching value bytes.
    ///
    /// Cells that held a value keep it as their committed value. Linear in
    /// the array length (shadow bytes only).
    pub fn reset(&self) {
        log::trace!("frozen array reset: {} cells", self.len());
        for shadow in self.shadow.iter() {
            raw::unmark(shadow);
        }
    }

    /// Number of written cells. Linear in the array length.
    pub fn written_count(&self) -> usize {
        self.shadow
            .iter()
            .filter(|s| s.get() & WRITTEN != 0)
            .count()
    }

    /// The policy cells commit with.
    pub fn policy(&self) -> FreezePolicy {
        self.policy
    }

    /// Whether the array owns its storage (as opposed to borrowing it).
    pub fn is_owned(&self) -> bool {
        matches!(self.values, Storage::Owned(_))
    }

    /// Access counters accumulated since construction.
    pub fn stats(&self) -> AccessStats {
        self.stats.snapshot()
    }
}

impl<T: Flat> fmt::Debug for FrozenArray<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrozenArray")
            .field("len", &self.len())
            .field("written", &self.written_count())
            .field("policy", &self.policy)
            .field("owned", &self.is_owned())
            .finish()
    }
}

/// View raw bytes as an array of `count` not-written `T` cells.
///
/// Uses the default [`FreezePolicy`]. The bytes are never read as `T`:
/// every cell commits a policy value on first read, exactly like a freshly
/// allocated array.
///
/// # Panics
///
/// Panics if `storage` is shorter than `count * size_of::<T>()` bytes or is
/// not aligned for `T`. Use [`FrozenArray::from_raw_storage`] to get a
/// [`StorageError`] instead.
///
/// ```
/// use std::mem::MaybeUninit;
/// use frostbit_core::start_lifetime_as_array_uninitialized;
///
/// let mut bytes = [MaybeUninit::<u8>::uninit(); 16];
/// let cells = start_lifetime_as_array_uninitialized::<u8>(&mut bytes, 16);
/// let v = cells.read(3);
/// assert_eq!(cells.read(3), v);
/// cells.write(3, 42);
/// assert_eq!(cells.read(3), 42);
/// ```
pub fn start_lifetime_as_array_uninitialized<T: Flat>(
    storage: &mut [MaybeUninit<u8>],
    count: usize,
) -> FrozenArray<'_, T> {
    match FrozenArray::from_raw_storage(storage, count, FreezePolicy::default()) {
        Ok(array) => array,
        Err(e) => panic!("start_lifetime_as_array_uninitialized: {e}"),
    }
}

/// A handle to one element of a [`FrozenArray`].
///
/// Reads and writes through the handle are counted in the array's stats.
pub struct CellRef<'r, 'a, T: Flat> {
    array: &'r FrozenArray<'a, T>,
    index: usize,
}

impl<T: Flat> CellRef<'_, '_, T> {
    /// Index of this element in its array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Phase of the element.
    pub fn phase(&self) -> Phase {
        self.array.phase(self.index)
    }
}

impl<T: Flat> Clone for CellRef<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Flat> Copy for CellRef<'_, '_, T> {}

impl<T: Flat> fmt::Debug for CellRef<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellRef")
            .field("index", &self.index)
            .field("phase", &self.phase())
            .finish()
    }
}

impl<T: Flat> ControlledRead for CellRef<'_, '_, T> {
    type Value = T;

    fn read_maybe_uninitialized(&self) -> T {
        self.array.read(self.index)
    }

    fn classification(&self) -> Classification {
        self.array.classification(self.index)
    }

    fn get(&self) -> Option<T> {
        self.array.get(self.index)
    }
}

impl<T: Flat> ControlledWrite for CellRef<'_, '_, T> {
    fn write(&self, value: T) {
        self.array.write(self.index, value);
    }

    /// Resets this element only.
    fn reset(&self) {
        raw::unmark(&self.array.shadow[self.index]);
    }
}
