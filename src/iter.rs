//! `Iterator` adapters over the range `[begin, end)`.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::IndexType;
use crate::LinkedDeque;
use crate::node::{Node, NodeStorage};

/// Immutable iterator over a [`LinkedDeque`], front to back.
///
/// `remaining` bounds both ends, so the front and back walks never cross.
pub struct Iter<'a, T, I: IndexType = u32> {
    nodes: &'a [Node<T, I>],
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: IndexType> Iter<'a, T, I> {
    pub(crate) fn new(nodes: &'a [Node<T, I>], front: I, back: I, remaining: usize) -> Self {
        Self {
            nodes,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T, I: IndexType> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front.as_usize()];
        self.front = node.next;
        self.remaining -= 1;
        Some(unsafe { node.value_ref() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for Iter<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back.as_usize()];
        self.back = node.prev;
        self.remaining -= 1;
        Some(unsafe { node.value_ref() })
    }
}

impl<T, I: IndexType> ExactSizeIterator for Iter<'_, T, I> {}

impl<T, I: IndexType> FusedIterator for Iter<'_, T, I> {}

impl<T, I: IndexType> Clone for Iter<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug, I: IndexType> fmt::Debug for Iter<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutable iterator over a [`LinkedDeque`], front to back.
pub struct IterMut<'a, T, I: IndexType = u32> {
    nodes: *mut Node<T, I>,
    front: I,
    back: I,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T, I>>,
}

impl<'a, T, I: IndexType> IterMut<'a, T, I> {
    pub(crate) fn new(nodes: &'a mut [Node<T, I>], front: I, back: I, remaining: usize) -> Self {
        Self {
            nodes: nodes.as_mut_ptr(),
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T, I: IndexType> Iterator for IterMut<'a, T, I> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // Each live node is visited once, so the yielded references are
        // disjoint.
        let node = unsafe { &mut *self.nodes.add(self.front.as_usize()) };
        self.front = node.next;
        self.remaining -= 1;
        Some(unsafe { node.value_mut() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: IndexType> DoubleEndedIterator for IterMut<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = unsafe { &mut *self.nodes.add(self.back.as_usize()) };
        self.back = node.prev;
        self.remaining -= 1;
        Some(unsafe { node.value_mut() })
    }
}

impl<T, I: IndexType> ExactSizeIterator for IterMut<'_, T, I> {}

impl<T, I: IndexType> FusedIterator for IterMut<'_, T, I> {}

unsafe impl<T: Send, I: IndexType + Send> Send for IterMut<'_, T, I> {}

unsafe impl<T: Sync, I: IndexType + Sync> Sync for IterMut<'_, T, I> {}

/// Owning iterator; pops from the deque as it goes.
///
/// Elements not yielded are dropped with the deque.
pub struct IntoIter<T, I: IndexType, S: NodeStorage<T, I>> {
    deque: LinkedDeque<T, I, S>,
}

impl<T, I: IndexType, S: NodeStorage<T, I>> IntoIter<T, I, S> {
    pub(crate) fn new(deque: LinkedDeque<T, I, S>) -> Self {
        Self { deque }
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> Iterator for IntoIter<T, I, S> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> DoubleEndedIterator for IntoIter<T, I, S> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T, I: IndexType, S: NodeStorage<T, I>> ExactSizeIterator for IntoIter<T, I, S> {}

impl<T, I: IndexType, S: NodeStorage<T, I>> FusedIterator for IntoIter<T, I, S> {}

impl<T: fmt::Debug, I: IndexType, S: NodeStorage<T, I>> fmt::Debug for IntoIter<T, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::LinkedDeque;

    #[test]
    fn test_iter_double_ended() {
        let d: LinkedDeque<i32> = (1..=5).collect();
        let mut iter = d.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_rev_matches_reverse_order() {
        let mut d: LinkedDeque<i32> = LinkedDeque::new();
        d.push_back(2);
        d.push_front(1);
        d.push_back(3);
        let rev: Vec<_> = d.iter().rev().copied().collect();
        assert_eq!(rev, vec![3, 2, 1]);
    }

    #[test]
    fn test_iter_empty() {
        let d: LinkedDeque<i32> = LinkedDeque::new();
        assert_eq!(d.iter().next(), None);
        assert_eq!(d.iter().size_hint(), (0, Some(0)));
        assert_eq!(format!("{:?}", d.iter()), "[]");
    }

    #[test]
    fn test_iter_mut_both_ends() {
        let mut d: LinkedDeque<i32> = (1..=4).collect();
        {
            let mut iter = d.iter_mut();
            *iter.next().unwrap() += 10;
            *iter.next_back().unwrap() += 40;
            for v in iter {
                *v = 0;
            }
        }
        assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![11, 0, 0, 44]);
    }

    #[test]
    fn test_iter_by_ref_loops() {
        let mut d: LinkedDeque<i32> = (1..=3).collect();
        for v in &mut d {
            *v *= 2;
        }
        let mut seen = Vec::new();
        for v in &d {
            seen.push(*v);
        }
        assert_eq!(seen, vec![2, 4, 6]);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let d: LinkedDeque<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut iter = d.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iter_drops_rest() {
        let counter = Rc::new(RefCell::new(0));
        struct Dropper(Rc<RefCell<i32>>);
        impl Drop for Dropper {
            fn drop(&mut self) {
                *self.0.borrow_mut() += 1;
            }
        }

        {
            let mut d: LinkedDeque<Dropper> = LinkedDeque::new();
            for _ in 0..4 {
                d.push_back(Dropper(counter.clone()));
            }
            let mut iter = d.into_iter();
            let first = iter.next();
            assert!(first.is_some());
            drop(first);
            assert_eq!(*counter.borrow(), 1);
        }
        assert_eq!(*counter.borrow(), 4);
    }
}
