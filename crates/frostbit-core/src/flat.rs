//! The [`Flat`] marker trait for values that may live in controlled-read storage.

#![allow(unsafe_code)]

/// A plain value type whose objects can exist without an initialiser.
///
/// Only `Flat` types may be stored in a [`FreezeCell`](crate::FreezeCell)
/// or [`FrozenArray`](crate::FrozenArray), because a commit manufactures
/// a value from raw bytes.
///
/// # Safety
///
/// Implementors guarantee that every bit pattern of `size_of::<Self>()`
/// bytes is a valid `Self`: no padding, no niches, no references, and no
/// ownership of other resources.
pub unsafe trait Flat: Copy + 'static {}

macro_rules! impl_flat {
    ($($t:ty),* $(,)?) => {
        $(
            // SAFETY: primitive integers and IEEE floats accept every bit pattern.
            unsafe impl Flat for $t {}
        )*
    };
}

impl_flat!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// SAFETY: an array of `Flat` elements has no padding between elements and
// inherits the every-bit-pattern-valid property element-wise.
unsafe impl<T: Flat, const N: usize> Flat for [T; N] {}
