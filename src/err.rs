//! Error types reported by the deque and its cursors.

use std::fmt;

/// A cursor move that would leave the range `[begin, end]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The cursor was default-constructed and references no node.
    Detached,
    /// The cursor is already at the past-the-end position.
    PastEnd,
    /// The cursor is at the first element (or at `end()` of an empty deque).
    BeforeBegin,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::Detached => write!(f, "Cursor does not reference a node"),
            CursorError::PastEnd => write!(f, "Cursor cannot advance past the end position"),
            CursorError::BeforeBegin => {
                write!(f, "Cursor cannot retreat before the first element")
            }
        }
    }
}

impl std::error::Error for CursorError {}

/// A push rejected because the node arena has no slot left.
///
/// The rejected value is handed back to the caller.
pub struct CapacityError<T> {
    value: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    pub fn new(value: T, capacity: usize) -> Self {
        Self { value, capacity }
    }

    /// Number of elements the deque can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Linked deque is full (capacity = {} elements)",
            self.capacity
        )
    }
}

impl<T> std::error::Error for CapacityError<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_error_display() {
        assert_eq!(
            CursorError::PastEnd.to_string(),
            "Cursor cannot advance past the end position"
        );
        assert!(CursorError::BeforeBegin.to_string().contains("first element"));
        assert!(CursorError::Detached.to_string().contains("node"));
    }

    #[test]
    fn test_capacity_error_returns_value() {
        let err = CapacityError::new(String::from("rejected"), 3);
        assert_eq!(err.capacity(), 3);
        assert_eq!(err.value(), "rejected");
        assert_eq!(
            err.to_string(),
            "Linked deque is full (capacity = 3 elements)"
        );
        let debug = format!("{:?}", err);
        assert!(debug.contains("capacity: 3"));
        assert_eq!(err.into_value(), "rejected");
    }

    #[test]
    fn test_errors_are_std_errors() {
        let boxed: Box<dyn std::error::Error> = Box::new(CapacityError::new(1u8, 0));
        assert!(boxed.to_string().contains("full"));
        let boxed: Box<dyn std::error::Error> = Box::new(CursorError::Detached);
        assert!(boxed.source().is_none());
    }
}
