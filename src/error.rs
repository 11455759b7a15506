//! Error types for heap operations

use std::fmt;

/// Error type for heap operations
///
/// The only fallible operations are peeking at or extracting an extreme of
/// an empty heap. The silent removals ([`MinMaxHeap::remove_min`] and
/// [`MinMaxHeap::remove_max`]) report an empty heap through their `bool`
/// return value instead, so that callers draining a heap in a loop can probe
/// emptiness without error-handling overhead.
///
/// [`MinMaxHeap::remove_min`]: crate::MinMaxHeap::remove_min
/// [`MinMaxHeap::remove_max`]: crate::MinMaxHeap::remove_max
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The operation requires at least one element, but the heap is empty
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "the heap contains no elements"),
        }
    }
}

impl std::error::Error for HeapError {}
