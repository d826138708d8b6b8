//! Arena nodes and the storage backends that hold them.
//!
//! # Layout
//! - Slot `0` is the sentinel: it never holds a value and represents the
//!   past-the-end position.
//! - Every other slot is either **live** (linked into the chain, value
//!   initialised) or **free** (threaded onto the free list through `next`,
//!   value uninitialised).

use core::mem::MaybeUninit;

use crate::IndexType;
use crate::utils::sealed::Sealed;

/// Index of the sentinel slot.
#[inline(always)]
pub(crate) fn sentinel<I: IndexType>() -> I {
    I::ZERO
}

/// One slot of the node arena: a value and its two neighbor links.
pub struct Node<T, I> {
    value: MaybeUninit<T>,
    pub(crate) prev: I,
    pub(crate) next: I,
}

impl<T, I: IndexType> Node<T, I> {
    pub(crate) fn sentinel() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            prev: I::NONE,
            next: I::NONE,
        }
    }

    #[inline(always)]
    pub(crate) fn new(value: T, prev: I, next: I) -> Self {
        Self {
            value: MaybeUninit::new(value),
            prev,
            next,
        }
    }

    /// # Safety
    /// The node must be live.
    #[inline(always)]
    pub(crate) unsafe fn value_ref(&self) -> &T {
        unsafe { self.value.assume_init_ref() }
    }

    /// # Safety
    /// The node must be live.
    #[inline(always)]
    pub(crate) unsafe fn value_mut(&mut self) -> &mut T {
        unsafe { self.value.assume_init_mut() }
    }

    /// Moves the value out. The slot is uninitialised afterwards.
    ///
    /// # Safety
    /// The node must be live.
    #[inline(always)]
    pub(crate) unsafe fn take_value(&mut self) -> T {
        unsafe { self.value.assume_init_read() }
    }

    /// # Safety
    /// The node must be live.
    #[inline(always)]
    pub(crate) unsafe fn drop_value(&mut self) {
        unsafe { self.value.assume_init_drop() }
    }

    /// # Safety
    /// The node must have been built with [`Node::new`].
    #[inline(always)]
    pub(crate) unsafe fn into_value(self) -> T {
        unsafe { self.value.assume_init() }
    }
}

/// Backing storage for the node arena.
///
/// Implementations only hand out slots; they never drop node values.
/// Dropping values is the deque's job because only it knows which slots are
/// live.
///
/// Sealed: `slots` and `slots_mut` must always expose the same arena, with
/// the sentinel at slot `0`. `Vec` and, with the `heapless` feature,
/// `heapless::Vec` are the only backends.
///
/// ```compile_fail
/// use linked_deque::{Node, NodeStorage};
///
/// struct Scratch(Vec<Node<String, u32>>);
///
/// impl NodeStorage<String, u32> for Scratch {
///     fn with_sentinel() -> Self {
///         Scratch(Vec::new())
///     }
///     fn slots(&self) -> &[Node<String, u32>] {
///         &self.0
///     }
///     fn slots_mut(&mut self) -> &mut [Node<String, u32>] {
///         &mut self.0
///     }
///     fn try_push(&mut self, node: Node<String, u32>) -> Result<(), Node<String, u32>> {
///         Err(node)
///     }
///     fn slot_capacity(&self) -> usize {
///         0
///     }
/// }
/// ```
pub trait NodeStorage<T, I: IndexType>: Sealed {
    /// Creates storage whose only slot is the sentinel.
    fn with_sentinel() -> Self;

    fn slots(&self) -> &[Node<T, I>];

    fn slots_mut(&mut self) -> &mut [Node<T, I>];

    /// Appends a slot, handing the node back if the storage is full.
    fn try_push(&mut self, node: Node<T, I>) -> Result<(), Node<T, I>>;

    /// Number of slots (sentinel included) available without reallocating.
    fn slot_capacity(&self) -> usize;
}

impl<T, I> Sealed for Vec<Node<T, I>> {}

impl<T, I: IndexType> NodeStorage<T, I> for Vec<Node<T, I>> {
    fn with_sentinel() -> Self {
        vec![Node::sentinel()]
    }

    #[inline(always)]
    fn slots(&self) -> &[Node<T, I>] {
        self.as_slice()
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [Node<T, I>] {
        self.as_mut_slice()
    }

    #[inline(always)]
    fn try_push(&mut self, node: Node<T, I>) -> Result<(), Node<T, I>> {
        // Allocation failure aborts inside `Vec`.
        self.push(node);
        Ok(())
    }

    fn slot_capacity(&self) -> usize {
        self.capacity()
    }
}

#[cfg(feature = "heapless")]
impl<T, I, const N: usize> Sealed for heapless::Vec<Node<T, I>, N> {}

#[cfg(feature = "heapless")]
impl<T, I: IndexType, const N: usize> NodeStorage<T, I> for heapless::Vec<Node<T, I>, N> {
    fn with_sentinel() -> Self {
        const {
            assert!(N > 0, "HeaplessLinkedDeque N must leave room for the sentinel");
        }
        let mut slots = heapless::Vec::new();
        // Cannot fail: N > 0.
        let _ = slots.push(Node::sentinel());
        slots
    }

    #[inline(always)]
    fn slots(&self) -> &[Node<T, I>] {
        self.as_slice()
    }

    #[inline(always)]
    fn slots_mut(&mut self) -> &mut [Node<T, I>] {
        self.as_mut_slice()
    }

    #[inline(always)]
    fn try_push(&mut self, node: Node<T, I>) -> Result<(), Node<T, I>> {
        self.push(node)
    }

    fn slot_capacity(&self) -> usize {
        N
    }
}
