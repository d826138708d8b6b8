//! Compact index types used as node links.

use core::hash::Hash;
use std::fmt::Debug;

use super::sealed::Sealed;

/// An integer type used as a **doubly-linked-list node index**.
///
/// Nodes never point at each other. Every `prev`/`next` link is an index into
/// the node arena, which keeps the deque free of raw pointers and lets the
/// heapless backend fit its links in a byte per direction.
///
/// This trait is sealed. The deque reads slot values without checking that
/// they are initialised, so `as_usize` and `from_usize` must round-trip and
/// `NONE` must bound the addressable slots. Only the unsigned integers
/// `u8`, `u16`, `u32` and `usize` implement it.
///
/// ```compile_fail
/// use linked_deque::IndexType;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// struct Slot(u32);
///
/// impl IndexType for Slot {
///     const NONE: Self = Slot(u32::MAX);
///     const ZERO: Self = Slot(0);
///     fn as_usize(self) -> usize {
///         0
///     }
///     fn from_usize(i: usize) -> Self {
///         Slot(i as u32)
///     }
///     fn is_zero(self) -> bool {
///         self.0 == 0
///     }
/// }
/// ```
pub trait IndexType: Sealed + Copy + Eq + Hash + Debug + 'static {
    /// Null link. It is the all-ones value of the type, so an arena indexed
    /// by `Self` can address `NONE.as_usize()` slots (`0..NONE`).
    const NONE: Self;

    /// The first slot. The deque reserves it for its sentinel.
    const ZERO: Self;

    /// Converts this index to a `usize` for slot access.
    fn as_usize(self) -> usize;

    /// Converts a `usize` slot index to this compact type.
    ///
    /// Callers must check the value against [`IndexType::NONE`] first; the
    /// conversion truncates.
    fn from_usize(i: usize) -> Self;

    /// Returns true for the sentinel slot.
    fn is_zero(self) -> bool;

    /// Number of slots an arena indexed by `Self` can address.
    #[inline(always)]
    fn max_slots() -> usize {
        Self::NONE.as_usize()
    }
}

macro_rules! impl_index_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}

            impl IndexType for $ty {
                const NONE: Self = <$ty>::MAX;
                const ZERO: Self = 0;
                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
                #[inline(always)]
                fn from_usize(i: usize) -> Self {
                    i as $ty
                }
                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
