//! Double-ended queue on an index-linked node arena.
//!
//! # Implementation details
//! - **Sentinel**: slot `0` of the arena is allocated at construction and
//!   represents the past-the-end position. When the deque is non-empty it is
//!   linked after the tail (`tail.next == 0`, `sentinel.prev == tail`).
//! - **Links**: `prev`/`next` are [`IndexType`] indices, `I::NONE` is the
//!   null link. `head.prev` is always `NONE`.
//! - **Free list**: popped slots are threaded through `next` starting at
//!   `free_head` and reused by later pushes, so a push/pop workload that
//!   stays under its high-water mark never touches the allocator.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use std::collections::VecDeque;

use crate::IndexType;
use crate::cursor::{Cursor, CursorMut};
use crate::err::CapacityError;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::node::{Node, NodeStorage, sentinel};

/// End-to-end queue operations shared by [`LinkedDeque`] (any index type or
/// arena) and `std::collections::VecDeque`.
///
/// Only the two ends are exposed, so callers can swap the linked deque for a
/// ring buffer, or hold either behind `&mut dyn AnyDeque<T>`. Cursor walks
/// stay on the concrete type.
///
/// ```rust
/// use std::collections::VecDeque;
/// use linked_deque::{AnyDeque, LinkedDeque};
///
/// fn rotate(d: &mut dyn AnyDeque<u8>) {
///     if let Some(x) = d.pop_front() {
///         d.push_back(x);
///     }
/// }
///
/// let mut linked: LinkedDeque<u8> = [1, 2, 3].into();
/// let mut ring: VecDeque<u8> = [1, 2, 3].into();
/// rotate(&mut linked);
/// rotate(&mut ring);
/// assert_eq!(AnyDeque::front(&linked), Some(&2));
/// assert_eq!(AnyDeque::back(&ring), Some(&1));
/// ```
pub trait AnyDeque<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push_back(&mut self, item: T);
    fn push_front(&mut self, item: T);
    fn pop_back(&mut self) -> Option<T>;
    fn pop_front(&mut self) -> Option<T>;
    fn clear(&mut self);
    fn front(&self) -> Option<&T>;
    fn back(&self) -> Option<&T>;
    fn front_mut(&mut self) -> Option<&mut T>;
    fn back_mut(&mut self) -> Option<&mut T>;
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

/// A double-ended queue backed by a doubly-linked chain of arena nodes.
///
/// # Overview
/// Push and pop are $O(1)$ at both ends with no traversal. The deque owns
/// every node plus one permanent sentinel slot; [`begin`](Self::begin) and
/// [`end`](Self::end) return cursors at the first element and at the sentinel.
///
/// `S` selects the arena: a growable `Vec` (default) or, with the `heapless`
/// feature, a fixed `heapless::Vec` (see [`HeaplessLinkedDeque`]).
///
/// # Invariants
/// * `len == 0` implies `head == tail == 0` and `sentinel.prev == NONE`.
/// * `len > 0` implies `tail.next == 0`, `sentinel.prev == tail` and
///   `head.prev == NONE`.
/// * Walking `next` from `head` visits exactly `len` live nodes before
///   reaching the sentinel.
/// * Every other non-sentinel slot is on the free list and holds no value.
pub struct LinkedDeque<T, I: IndexType = u32, S: NodeStorage<T, I> = Vec<Node<T, I>>> {
    nodes: S,
    head: I,
    tail: I,
    free_head: I,
    len: usize,
    _marker: PhantomData<T>,
}

/// A [`LinkedDeque`] whose arena lives inline in a `heapless::Vec`.
///
/// `N` counts slots including the sentinel, so the deque holds at most
/// `N - 1` elements. Pushing past that fails (see
/// [`LinkedDeque::try_push_back`]).
#[cfg(feature = "heapless")]
pub type HeaplessLinkedDeque<T, const N: usize, I = u8> =
    LinkedDeque<T, I, heapless::Vec<Node<T, I>, N>>;

impl<T, I: IndexType, S: NodeStorage<T, I>> LinkedDeque<T, I, S> {
    /// Creates an empty deque. Only the sentinel slot is allocated.
    pub fn new() -> Self {
        Self::from_storage(S::with_sentinel())
    }

    fn from_storage(nodes: S) -> Self {
        debug_assert_eq!(nodes.slots().len(), 1);
        Self {
            nodes,
            head: sentinel(),
            tail: sentinel(),
            free_head: I::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the deque can hold without growing its arena.
    ///
    /// For the heapless arena this is the hard limit `N - 1`.
    pub fn capacity(&self) -> usize {
        self.nodes
            .slot_capacity()
            .min(I::max_slots())
            .saturating_sub(1)
    }

    #[inline(always)]
    fn node(&self, idx: I) -> &Node<T, I> {
        &self.nodes.slots()[idx.as_usize()]
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: I) -> &mut Node<T, I> {
        &mut self.nodes.slots_mut()[idx.as_usize()]
    }

    // --- Access ---

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(unsafe { self.node(self.head).value_ref() })
        }
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(unsafe { self.node(self.tail).value_ref() })
        }
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            let head = self.head;
            Some(unsafe { self.node_mut(head).value_mut() })
        }
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            let tail = self.tail;
            Some(unsafe { self.node_mut(tail).value_mut() })
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    // --- Cursors & iteration ---

    /// A cursor at the first element (equal to [`end`](Self::end) when empty).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, I> {
        Cursor::new(self.nodes.slots(), self.head)
    }

    /// A cursor at the past-the-end sentinel.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, I> {
        Cursor::new(self.nodes.slots(), sentinel())
    }

    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, I> {
        let head = self.head;
        CursorMut::new(self.nodes.slots_mut(), head)
    }

    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T, I> {
        CursorMut::new(self.nodes.slots_mut(), sentinel())
    }

    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter::new(self.nodes.slots(), self.head, self.tail, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T, I> {
        let (head, tail, len) = (self.head, self.tail, self.len);
        IterMut::new(self.nodes.slots_mut(), head, tail, len)
    }

    // --- Node management ---

    /// Places `node` in a free slot, recycling from the free list first.
    fn allocate(&mut self, node: Node<T, I>) -> Result<I, CapacityError<T>> {
        if self.free_head != I::NONE {
            let idx = self.free_head;
            self.free_head = self.node(idx).next;
            *self.node_mut(idx) = node;
            return Ok(idx);
        }

        let idx = self.nodes.slots().len();
        if idx >= I::max_slots() {
            return Err(self.reject(node));
        }
        if let Err(node) = self.nodes.try_push(node) {
            return Err(self.reject(node));
        }
        trace_event!(
            slots = idx + 1,
            slot_capacity = self.nodes.slot_capacity(),
            "linked deque arena grew"
        );
        Ok(I::from_usize(idx))
    }

    #[cold]
    fn reject(&self, node: Node<T, I>) -> CapacityError<T> {
        debug_event!(
            len = self.len,
            capacity = self.capacity(),
            "linked deque rejected push: arena full"
        );
        CapacityError::new(unsafe { node.into_value() }, self.capacity())
    }

    /// Moves the value out of a live slot and puts the slot on the free list.
    fn release(&mut self, idx: I) -> T {
        let free_head = self.free_head;
        let node = self.node_mut(idx);
        let value = unsafe { node.take_value() };
        node.prev = I::NONE;
        node.next = free_head;
        self.free_head = idx;
        value
    }

    /// Re-establishes `tail.next == sentinel` and `sentinel.prev == tail`.
    #[inline(always)]
    fn link_sentinel(&mut self) {
        let tail = self.tail;
        self.node_mut(tail).next = sentinel();
        self.node_mut(sentinel()).prev = tail;
    }

    /// Empty -> NonEmpty: the first node becomes both head and tail.
    fn push_first(&mut self, value: T) -> Result<(), CapacityError<T>> {
        let idx = self.allocate(Node::new(value, I::NONE, sentinel()))?;
        self.head = idx;
        self.tail = idx;
        self.link_sentinel();
        self.len = 1;
        Ok(())
    }

    /// NonEmpty -> Empty: frees the sole node and parks head and tail on the
    /// sentinel.
    fn pop_last(&mut self) -> T {
        let idx = self.head;
        self.head = sentinel();
        self.tail = sentinel();
        self.node_mut(sentinel()).prev = I::NONE;
        self.len = 0;
        self.release(idx)
    }

    // --- Mutation ---

    /// Prepends `value`, handing it back if the arena is full.
    pub fn try_push_front(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.len == 0 {
            return self.push_first(value);
        }
        let old_head = self.head;
        let idx = self.allocate(Node::new(value, I::NONE, old_head))?;
        self.node_mut(old_head).prev = idx;
        self.head = idx;
        self.len += 1;
        Ok(())
    }

    /// Appends `value`, handing it back if the arena is full.
    pub fn try_push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.len == 0 {
            return self.push_first(value);
        }
        let old_tail = self.tail;
        let idx = self.allocate(Node::new(value, old_tail, sentinel()))?;
        self.node_mut(old_tail).next = idx;
        self.tail = idx;
        self.link_sentinel();
        self.len += 1;
        Ok(())
    }

    /// Prepends `value`.
    ///
    /// # Panics
    /// Panics if the arena is full; see [`try_push_front`](Self::try_push_front).
    #[inline]
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.try_push_front(value) {
            panic!("{err}");
        }
    }

    /// Appends `value`.
    ///
    /// # Panics
    /// Panics if the arena is full; see [`try_push_back`](Self::try_push_back).
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            panic!("{err}");
        }
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            1 => Some(self.pop_last()),
            _ => {
                let old_head = self.head;
                let new_head = self.node(old_head).next;
                self.head = new_head;
                self.node_mut(new_head).prev = I::NONE;
                self.len -= 1;
                Some(self.release(old_head))
            }
        }
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            1 => Some(self.pop_last()),
            _ => {
                let old_tail = self.tail;
                self.tail = self.node(old_tail).prev;
                self.link_sentinel();
                self.len -= 1;
                Some(self.release(old_tail))
            }
        }
    }

    /// Drops every element. Their slots stay in the arena for reuse.
    pub fn clear(&mut self) {
        trace_event!(len = self.len, "clearing linked deque");
        while self.pop_front().is_some() {}
    }
}

impl<T, I: IndexType> LinkedDeque<T, I, Vec<Node<T, I>>> {
    /// Creates an empty deque whose arena can take `capacity` elements
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::sentinel());
        Self::from_storage(nodes)
    }

    /// Reserves arena room for at least `additional` more slots.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> Drop for LinkedDeque<T, I, S> {
    fn drop(&mut self) {
        let mut curr = self.head;
        while !curr.is_zero() {
            let node = self.node_mut(curr);
            let next = node.next;
            unsafe { node.drop_value() };
            curr = next;
        }
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> AnyDeque<T> for LinkedDeque<T, I, S> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> Default for LinkedDeque<T, I, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, I: IndexType, S: NodeStorage<T, I>> Clone for LinkedDeque<T, I, S> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug, I: IndexType, S: NodeStorage<T, I>> fmt::Debug for LinkedDeque<T, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, I, S, I2, S2> PartialEq<LinkedDeque<T, I2, S2>> for LinkedDeque<T, I, S>
where
    T: PartialEq,
    I: IndexType,
    S: NodeStorage<T, I>,
    I2: IndexType,
    S2: NodeStorage<T, I2>,
{
    fn eq(&self, other: &LinkedDeque<T, I2, S2>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, I: IndexType, S: NodeStorage<T, I>> Eq for LinkedDeque<T, I, S> {}

impl<T: PartialOrd, I: IndexType, S: NodeStorage<T, I>> PartialOrd for LinkedDeque<T, I, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, I: IndexType, S: NodeStorage<T, I>> Ord for LinkedDeque<T, I, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, I: IndexType, S: NodeStorage<T, I>> Hash for LinkedDeque<T, I, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> Extend<T> for LinkedDeque<T, I, S> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, I: IndexType, S: NodeStorage<T, I>> Extend<&'a T>
    for LinkedDeque<T, I, S>
{
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> FromIterator<T> for LinkedDeque<T, I, S> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> From<Vec<T>> for LinkedDeque<T, I, S> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>, const M: usize> From<[T; M]>
    for LinkedDeque<T, I, S>
{
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> IntoIterator for LinkedDeque<T, I, S> {
    type Item = T;
    type IntoIter = IntoIter<T, I, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, I: IndexType, S: NodeStorage<T, I>> IntoIterator for &'a LinkedDeque<T, I, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, I: IndexType, S: NodeStorage<T, I>> IntoIterator for &'a mut LinkedDeque<T, I, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
