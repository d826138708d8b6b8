//! # Linked Deque
//!
//! A double-ended queue built on a doubly-linked chain of nodes, with $O(1)$
//! push and pop at both ends and bidirectional cursors.
//!
//! Nodes live in an arena and link to each other by compact index
//! ([`IndexType`]) instead of by pointer. Slot `0` of every arena is a
//! permanent **sentinel** node that stands for the past-the-end position, so
//! [`LinkedDeque::end`] is a real node rather than a null reference.
//!
//! ## Key Features
//!
//! * **Stable sentinel:** `begin()`/`end()` cursors with identity equality;
//!   stepping back from `end()` lands on the last element.
//! * **Free-list reuse:** popped slots are recycled by later pushes.
//! * **Two arenas:** a growable heap arena ([`LinkedDeque`]) and a
//!   fixed-capacity inline arena ([`HeaplessLinkedDeque`], `heapless` feature).
//! * **Checked preconditions:** popping or peeking an empty deque returns
//!   `None`; moving a cursor out of range returns a [`CursorError`].
//!
//! ## Capacity Constraints (`N`)
//!
//! * **For `HeaplessLinkedDeque<T, N, I>`:** `N` counts the sentinel, so the
//!   deque holds `N - 1` elements. `N` must be at least 1 (checked at
//!   compile time) and the index type `I` must address `N` slots.
//!
//! ## Examples
//!
//! ```rust
//! use linked_deque::LinkedDeque;
//!
//! let mut deque: LinkedDeque<i32> = LinkedDeque::new();
//! deque.push_back(10);
//! deque.push_back(20);
//! deque.push_front(5);
//!
//! let mut cursor = deque.begin();
//! let mut seen = Vec::new();
//! while cursor != deque.end() {
//!     seen.push(*cursor.current().unwrap());
//!     cursor.move_next().unwrap();
//! }
//! assert_eq!(seen, [5, 10, 20]);
//!
//! assert_eq!(deque.pop_front(), Some(5));
//! assert_eq!(deque.front(), Some(&10));
//! ```
//!
//! ```rust
//! # #[cfg(feature = "heapless")]
//! # {
//! use linked_deque::HeaplessLinkedDeque;
//!
//! // Four slots: the sentinel plus three elements, no heap allocation.
//! let mut deque: HeaplessLinkedDeque<u32, 4> = HeaplessLinkedDeque::new();
//! for i in 0..3 {
//!     deque.push_back(i);
//! }
//! assert!(deque.try_push_back(3).is_err());
//! # }
//! ```

// --- Diagnostics ---

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)+) => {
        ::tracing::trace!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)+) => {
        ::tracing::debug!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)+) => {};
}

// --- Module Declarations ---

pub mod cursor;
pub mod deque;
pub mod err;
pub mod iter;
pub mod node;
pub mod utils;

// --- Re-exports ---

pub use cursor::{Cursor, CursorMut};
#[cfg(feature = "heapless")]
pub use deque::HeaplessLinkedDeque;
pub use deque::{AnyDeque, LinkedDeque};
pub use err::{CapacityError, CursorError};
pub use iter::{IntoIter, Iter, IterMut};
pub use node::{Node, NodeStorage};
pub use utils::index_type::IndexType;
