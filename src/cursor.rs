//! Bidirectional cursors over the node chain.
//!
//! A cursor references one node: a live element or the sentinel (`end()`).
//! Cursors borrow the deque they came from, so the node they reference
//! cannot be popped while they exist.

use core::fmt;
use core::ptr;

use crate::IndexType;
use crate::err::CursorError;
use crate::node::Node;

#[inline(always)]
fn step_next<T, I: IndexType>(nodes: &[Node<T, I>], index: I) -> Result<I, CursorError> {
    if index.is_zero() {
        return Err(CursorError::PastEnd);
    }
    Ok(nodes[index.as_usize()].next)
}

#[inline(always)]
fn step_prev<T, I: IndexType>(nodes: &[Node<T, I>], index: I) -> Result<I, CursorError> {
    // The head has no predecessor, and neither does the sentinel of an
    // empty deque.
    match nodes[index.as_usize()].prev {
        prev if prev == I::NONE => Err(CursorError::BeforeBegin),
        prev => Ok(prev),
    }
}

/// A shared cursor, the read-only position handle returned by
/// [`LinkedDeque::begin`](crate::LinkedDeque::begin) and
/// [`LinkedDeque::end`](crate::LinkedDeque::end).
///
/// Cursors are `Copy`: a post-increment is a copy followed by
/// [`Cursor::move_next`].
///
/// Two cursors are equal iff they reference the same node of the same deque.
/// A default-constructed cursor references nothing; it equals only other
/// default cursors.
pub struct Cursor<'a, T, I: IndexType = u32> {
    nodes: Option<&'a [Node<T, I>]>,
    index: I,
}

impl<'a, T, I: IndexType> Cursor<'a, T, I> {
    #[inline(always)]
    pub(crate) fn new(nodes: &'a [Node<T, I>], index: I) -> Self {
        Self {
            nodes: Some(nodes),
            index,
        }
    }

    /// Returns `true` for a default-constructed cursor.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.nodes.is_none()
    }

    /// Returns `true` if the cursor sits on the past-the-end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.nodes.is_some() && self.index.is_zero()
    }

    /// The element under the cursor, or `None` at the end position or when
    /// detached.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        let nodes = self.nodes?;
        if self.index.is_zero() {
            return None;
        }
        // Only live nodes are reachable through the chain.
        Some(unsafe { nodes[self.index.as_usize()].value_ref() })
    }

    /// Advances to the next node. Advancing from the last element reaches
    /// the end position; advancing from the end position fails and leaves
    /// the cursor where it is.
    #[inline]
    pub fn move_next(&mut self) -> Result<(), CursorError> {
        let nodes = self.nodes.ok_or(CursorError::Detached)?;
        self.index = step_next(nodes, self.index)?;
        Ok(())
    }

    /// Retreats to the previous node. Retreating from the end position of a
    /// non-empty deque reaches the last element.
    #[inline]
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        let nodes = self.nodes.ok_or(CursorError::Detached)?;
        self.index = step_prev(nodes, self.index)?;
        Ok(())
    }
}

impl<T, I: IndexType> Clone for Cursor<'_, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I: IndexType> Copy for Cursor<'_, T, I> {}

impl<T, I: IndexType> Default for Cursor<'_, T, I> {
    fn default() -> Self {
        Self {
            nodes: None,
            index: I::NONE,
        }
    }
}

impl<T, I: IndexType> PartialEq for Cursor<'_, T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && match (self.nodes, other.nodes) {
                (None, None) => true,
                (Some(a), Some(b)) => ptr::eq(a.as_ptr(), b.as_ptr()),
                _ => false,
            }
    }
}

impl<T, I: IndexType> Eq for Cursor<'_, T, I> {}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for Cursor<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("current", &self.current())
            .finish()
    }
}

/// An exclusive cursor that can modify the element under it.
///
/// Returned by [`LinkedDeque::begin_mut`](crate::LinkedDeque::begin_mut) and
/// [`LinkedDeque::end_mut`](crate::LinkedDeque::end_mut).
pub struct CursorMut<'a, T, I: IndexType = u32> {
    nodes: &'a mut [Node<T, I>],
    index: I,
}

impl<'a, T, I: IndexType> CursorMut<'a, T, I> {
    #[inline(always)]
    pub(crate) fn new(nodes: &'a mut [Node<T, I>], index: I) -> Self {
        Self { nodes, index }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.index.is_zero()
    }

    #[inline]
    pub fn current(&self) -> Option<&T> {
        if self.index.is_zero() {
            return None;
        }
        Some(unsafe { self.nodes[self.index.as_usize()].value_ref() })
    }

    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.index.is_zero() {
            return None;
        }
        Some(unsafe { self.nodes[self.index.as_usize()].value_mut() })
    }

    /// Consumes the cursor, keeping the borrow of the element under it.
    pub fn into_current(self) -> Option<&'a mut T> {
        let Self { nodes, index } = self;
        if index.is_zero() {
            return None;
        }
        Some(unsafe { nodes[index.as_usize()].value_mut() })
    }

    #[inline]
    pub fn move_next(&mut self) -> Result<(), CursorError> {
        self.index = step_next(&*self.nodes, self.index)?;
        Ok(())
    }

    #[inline]
    pub fn move_prev(&mut self) -> Result<(), CursorError> {
        self.index = step_prev(&*self.nodes, self.index)?;
        Ok(())
    }

    /// A read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T, I> {
        Cursor::new(&*self.nodes, self.index)
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for CursorMut<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CursorError, LinkedDeque};

    use super::Cursor;

    fn collect_forward(deque: &LinkedDeque<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = deque.begin();
        while cursor != deque.end() {
            out.push(*cursor.current().unwrap());
            cursor.move_next().unwrap();
        }
        out
    }

    fn collect_backward(deque: &LinkedDeque<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = deque.end();
        while cursor != deque.begin() {
            cursor.move_prev().unwrap();
            out.push(*cursor.current().unwrap());
        }
        out
    }

    #[test]
    fn test_cursor_empty_begin_is_end() {
        let deque: LinkedDeque<i32> = LinkedDeque::new();
        assert_eq!(deque.begin(), deque.end());
        assert!(deque.begin().is_end());
        assert_eq!(deque.begin().current(), None);
    }

    #[test]
    fn test_cursor_forward_and_backward_traversal() {
        let mut deque: LinkedDeque<i32> = LinkedDeque::new();
        for v in 1..=5 {
            deque.push_back(v);
        }
        assert_eq!(collect_forward(&deque), vec![1, 2, 3, 4, 5]);
        assert_eq!(collect_backward(&deque), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_cursor_traversal_is_restartable() {
        let deque: LinkedDeque<i32> = [7, 8, 9].into_iter().collect();
        let first = collect_forward(&deque);
        let second = collect_forward(&deque);
        assert_eq!(first, second);

        // Independent cursors over the same chain.
        let mut a = deque.begin();
        let b = deque.begin();
        a.move_next().unwrap();
        assert_ne!(a, b);
        assert_eq!(b.current(), Some(&7));
        assert_eq!(a.current(), Some(&8));
    }

    #[test]
    fn test_cursor_post_increment_by_copy() {
        let deque: LinkedDeque<i32> = [1, 2].into_iter().collect();
        let mut cursor = deque.begin();
        let old = cursor;
        cursor.move_next().unwrap();
        assert_eq!(old.current(), Some(&1));
        assert_eq!(cursor.current(), Some(&2));
    }

    #[test]
    fn test_cursor_move_past_end_fails_in_place() {
        let deque: LinkedDeque<i32> = [1].into_iter().collect();
        let mut cursor = deque.begin();
        cursor.move_next().unwrap();
        assert!(cursor.is_end());
        assert_eq!(cursor.move_next(), Err(CursorError::PastEnd));
        assert_eq!(cursor, deque.end());
    }

    #[test]
    fn test_cursor_move_before_begin_fails_in_place() {
        let deque: LinkedDeque<i32> = [1, 2].into_iter().collect();
        let mut cursor = deque.begin();
        assert_eq!(cursor.move_prev(), Err(CursorError::BeforeBegin));
        assert_eq!(cursor, deque.begin());

        let empty: LinkedDeque<i32> = LinkedDeque::new();
        let mut end = empty.end();
        assert_eq!(end.move_prev(), Err(CursorError::BeforeBegin));
    }

    #[test]
    fn test_cursor_end_steps_back_to_tail() {
        let mut deque: LinkedDeque<i32> = [1, 2, 3].into_iter().collect();
        deque.pop_back();
        let mut cursor = deque.end();
        cursor.move_prev().unwrap();
        assert_eq!(cursor.current(), Some(&2));
        cursor.move_next().unwrap();
        assert_eq!(cursor, deque.end());
    }

    #[test]
    fn test_cursor_default_identity() {
        let deque: LinkedDeque<i32> = [1].into_iter().collect();
        let a: Cursor<'_, i32> = Cursor::default();
        let b: Cursor<'_, i32> = Cursor::default();
        assert_eq!(a, b);
        assert!(a.is_detached());
        assert!(!a.is_end());
        assert_ne!(a, deque.begin());
        assert_ne!(a, deque.end());
        assert_eq!(a.current(), None);

        let mut c = a;
        assert_eq!(c.move_next(), Err(CursorError::Detached));
        assert_eq!(c.move_prev(), Err(CursorError::Detached));
    }

    #[test]
    fn test_cursor_identity_across_deques() {
        let a: LinkedDeque<i32> = LinkedDeque::new();
        let b: LinkedDeque<i32> = LinkedDeque::new();
        // Same slot index, different deques.
        assert_ne!(a.end(), b.end());
        assert_eq!(a.end(), a.end());
    }

    #[test]
    fn test_cursor_identity_not_value() {
        let deque: LinkedDeque<i32> = [4, 4].into_iter().collect();
        let first = deque.begin();
        let mut second = deque.begin();
        second.move_next().unwrap();
        assert_eq!(first.current(), second.current());
        assert_ne!(first, second);
    }

    #[test]
    fn test_cursor_mut_modifies_in_place() {
        let mut deque: LinkedDeque<i32> = [1, 2, 3].into_iter().collect();
        {
            let mut cursor = deque.begin_mut();
            while !cursor.is_end() {
                if let Some(v) = cursor.current_mut() {
                    *v *= 10;
                }
                cursor.move_next().unwrap();
            }
            assert_eq!(cursor.move_next(), Err(CursorError::PastEnd));
            cursor.move_prev().unwrap();
            assert_eq!(cursor.current(), Some(&30));
            assert_eq!(cursor.as_cursor().current(), Some(&30));
        }
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn test_cursor_mut_from_end() {
        let mut deque: LinkedDeque<i32> = [1, 2].into_iter().collect();
        let mut cursor = deque.end_mut();
        assert!(cursor.is_end());
        assert_eq!(cursor.current_mut(), None);
        cursor.move_prev().unwrap();
        if let Some(v) = cursor.into_current() {
            *v = 99;
        }
        assert_eq!(deque.back(), Some(&99));

        let mut cursor = deque.begin_mut();
        assert_eq!(cursor.move_prev(), Err(CursorError::BeforeBegin));
    }

    #[test]
    fn test_cursor_debug() {
        let deque: LinkedDeque<i32> = [5].into_iter().collect();
        let debug = format!("{:?}", deque.begin());
        assert!(debug.contains("Some(5)"));
        let debug = format!("{:?}", deque.end());
        assert!(debug.contains("None"));
    }
}
