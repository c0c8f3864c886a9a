//! Low-level primitives for controlled-read memory.
//!
//! The only module (besides `flat`) allowed to contain `unsafe`. Each
//! unsafe block carries a `// SAFETY:` comment; everything built on top
//! of these functions is safe code.

#![allow(unsafe_code)]

use std::cell::Cell;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;
use std::slice;

use crate::error::StorageError;
use crate::flat::Flat;
use crate::policy::FreezePolicy;
use crate::state::{HOLDS_VALUE, WRITTEN};

/// Value storage for one cell. Has the size and alignment of `T`.
pub(crate) type ValueCell<T> = Cell<MaybeUninit<T>>;

/// Outcome of [`load`]: the value, and whether this read committed it.
pub(crate) struct Loaded<T> {
    pub(crate) value: T,
    pub(crate) committed: bool,
}

/// Read a cell, committing a value from `policy` if it holds none yet.
pub(crate) fn load<T: Flat>(
    value: &ValueCell<T>,
    shadow: &Cell<u8>,
    policy: FreezePolicy,
    slot: usize,
) -> Loaded<T> {
    let bits = shadow.get();
    if bits & HOLDS_VALUE != 0 {
        // SAFETY: HOLDS_VALUE is set only after a complete `T` has been
        // stored into `value` (by `store` or by the commit below), and no
        // operation clears it or de-initialises the bytes afterwards.
        let v = unsafe { value.get().assume_init() };
        return Loaded {
            value: v,
            committed: false,
        };
    }
    let v = materialize::<T>(policy, slot);
    value.set(MaybeUninit::new(v));
    shadow.set(bits | HOLDS_VALUE);
    Loaded {
        value: v,
        committed: true,
    }
}

/// Store `v`, classifying the cell as written.
pub(crate) fn store<T: Flat>(value: &ValueCell<T>, shadow: &Cell<u8>, v: T) {
    value.set(MaybeUninit::new(v));
    shadow.set(shadow.get() | HOLDS_VALUE | WRITTEN);
}

/// Return a cell to not-written without touching its value bytes.
pub(crate) fn unmark(shadow: &Cell<u8>) {
    shadow.set(shadow.get() & !WRITTEN);
}

/// Build the value `policy` commits for cell `slot`.
pub(crate) fn materialize<T: Flat>(policy: FreezePolicy, slot: usize) -> T {
    let mut out = MaybeUninit::<T>::zeroed();
    // SAFETY: `out` is zeroed, so all `size_of::<T>()` bytes are initialised
    // `u8`s. The slice covers exactly that object and does not outlive it.
    let bytes =
        unsafe { slice::from_raw_parts_mut(out.as_mut_ptr().cast::<u8>(), mem::size_of::<T>()) };
    policy.fill(slot, bytes);
    // SAFETY: every byte is initialised and `T: Flat` accepts any bit pattern.
    unsafe { out.assume_init() }
}

/// Wrap each element of a boxed slice in a `Cell` without copying.
pub(crate) fn into_cells<U>(boxed: Box<[U]>) -> Box<[Cell<U>]> {
    let raw = Box::into_raw(boxed) as *mut [Cell<U>];
    // SAFETY: `Cell<U>` is `repr(transparent)` over `U`, so both slice types
    // share layout and length metadata. Ownership moves from the old box to
    // the new one; the old box is not used again.
    unsafe { Box::from_raw(raw) }
}

/// Allocate `len` value cells without initialising them.
pub(crate) fn uninit_cells<T: Flat>(len: usize) -> Box<[ValueCell<T>]> {
    into_cells(Box::<[T]>::new_uninit_slice(len))
}

/// Allocate `len` zeroed shadow bytes.
pub(crate) fn zeroed_shadow(len: usize) -> Box<[Cell<u8>]> {
    into_cells(vec![0u8; len].into_boxed_slice())
}

/// View caller-owned bytes as `count` value cells of type `T`.
pub(crate) fn cells_over_storage<T: Flat>(
    storage: &mut [MaybeUninit<u8>],
    count: usize,
) -> Result<&mut [ValueCell<T>], StorageError> {
    let element_size = mem::size_of::<T>();
    let required = count
        .checked_mul(element_size)
        .ok_or(StorageError::SizeOverflow {
            count,
            element_size,
        })?;
    if storage.len() < required {
        return Err(StorageError::TooSmall {
            required,
            available: storage.len(),
        });
    }
    if required == 0 {
        // Zero-sized elements (or an empty array) occupy no storage bytes.
        let dangling = NonNull::<ValueCell<T>>::dangling();
        // SAFETY: a dangling, well-aligned, non-null pointer is valid for
        // `count` zero-byte accesses, and zero-byte slices never alias.
        return Ok(unsafe { slice::from_raw_parts_mut(dangling.as_ptr(), count) });
    }
    let align = mem::align_of::<T>();
    let ptr = storage.as_mut_ptr();
    let address = ptr as usize;
    if address % align != 0 {
        return Err(StorageError::Misaligned { address, align });
    }
    // SAFETY: the range `[ptr, ptr + required)` lies inside `storage`, is
    // aligned for `T`, and is exclusively borrowed for the returned lifetime.
    // `Cell<MaybeUninit<T>>` has the layout of `T` and no validity invariant,
    // so any existing bytes are acceptable.
    Ok(unsafe { slice::from_raw_parts_mut(ptr.cast::<ValueCell<T>>(), count) })
}
