//! Double-Ended Priority Queue for Rust
//!
//! This crate provides [`MinMaxHeap`], a min-max heap: an array-backed
//! complete binary tree with alternating min and max levels that gives O(1)
//! access to both the smallest and the greatest element and removes either
//! one in O(log n).
//!
//! # Features
//!
//! - **Both extremes**: peek or pop the minimum and the maximum of the same
//!   heap, with no second structure and no full scan
//! - **Custom orderings**: order by `T`'s natural order, or inject any
//!   comparator (a [`compare::Compare`] implementation, including plain
//!   closures) at construction
//! - **Implicit tree**: a single `Vec<T>` with index arithmetic, no
//!   per-node allocation
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::from(vec![5, 10, -2, 0, 3]);
//! assert_eq!(heap.peek_min(), Ok(&-2));
//! assert_eq!(heap.peek_max(), Ok(&10));
//!
//! heap.push(-7);
//! assert_eq!(heap.pop_min(), Ok(-7));
//! assert_eq!(heap.pop_max(), Ok(10));
//! assert_eq!(heap.len(), 4);
//! ```
//!
//! Peeking at or popping from an empty heap fails with
//! [`HeapError::Empty`]; the silent removals `remove_min`/`remove_max`
//! instead return `false` on an empty heap, which keeps drain loops free of
//! error handling:
//!
//! ```rust
//! use minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::from(vec![3, 1, 2]);
//! while heap.remove_min() {}
//! assert!(heap.is_empty());
//! ```

pub mod error;
pub mod min_max;

pub use error::HeapError;
pub use min_max::MinMaxHeap;
