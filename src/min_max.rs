//! Min-Max Heap implementation
//!
//! A min-max heap is a complete binary tree whose levels alternate between
//! *min levels* (even depth) and *max levels* (odd depth). Every node on a
//! min level is less than or equal to all of its descendants, and every node
//! on a max level is greater than or equal to all of its descendants. As a
//! consequence the minimum element always sits at the root, and the maximum
//! is the root itself (fewer than three elements) or the larger of the
//! root's children.
//!
//! The tree is stored implicitly in a `Vec<T>`: the node at index `i` has
//! children at `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`, so no
//! per-node allocation or pointer chasing is needed.
//!
//! # Time Complexity
//!
//! | Operation                   | Complexity |
//! |-----------------------------|------------|
//! | `push`                      | O(log n)   |
//! | `peek_min` / `peek_max`     | O(1)       |
//! | `pop_min` / `pop_max`       | O(log n)   |
//! | `remove_min` / `remove_max` | O(log n)   |
//! | `len`                       | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(9);
//! heap.push(3);
//!
//! assert_eq!(heap.peek_min(), Ok(&1));
//! assert_eq!(heap.peek_max(), Ok(&9));
//!
//! assert_eq!(heap.pop_max(), Ok(9));
//! assert_eq!(heap.pop_min(), Ok(1));
//! assert_eq!(heap.len(), 2);
//! ```

use std::fmt::{self, Debug};
use std::iter::FromIterator;

use compare::{natural, Compare, Natural};

use crate::error::HeapError;

/// True if `index` lies on a min level (even depth from the root).
fn is_min_level(index: usize) -> bool {
    (index + 1).ilog2() % 2 == 0
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Only meaningful for `index >= 3`.
fn grandparent(index: usize) -> usize {
    parent(parent(index))
}

/// A double-ended priority queue implemented with a min-max heap
///
/// Both the smallest and the greatest element can be inspected in O(1) and
/// removed in O(log n). The ordering is either the natural order of `T`
/// (the `Natural<T>` default) or an explicit comparator supplied at
/// construction; the comparator is fixed for the lifetime of the heap and
/// used for every comparison.
///
/// It is a logic error to supply a comparator that is not a total order, or
/// to mutate an element (through `Cell`, `RefCell`, global state, or unsafe
/// code) so that its ordering relative to other elements changes while it is
/// in the heap. The heap never becomes memory-unsafe in these cases, but the
/// values it returns are unspecified. Likewise, if the comparator panics
/// mid-operation the heap may be left with its ordering invariant violated;
/// it is not repaired.
///
/// This structure is not internally synchronized; concurrent mutation from
/// multiple threads requires external locking.
pub struct MinMaxHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates an empty heap ordered by the natural order of `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> MinMaxHeap<T> {
        Self::with_comparator(natural())
    }

    /// Creates an empty heap with space for at least `capacity` elements,
    /// ordered by the natural order of `T`.
    pub fn with_capacity(capacity: usize) -> MinMaxHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Creates an empty heap ordered by the given comparator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minmax_heap::MinMaxHeap;
    ///
    /// // Order strings by length rather than lexicographically.
    /// let mut heap = MinMaxHeap::with_comparator(|a: &&str, b: &&str| {
    ///     a.len().cmp(&b.len())
    /// });
    /// heap.push("aaaa");
    /// heap.push("c");
    /// heap.push("dd");
    ///
    /// assert_eq!(heap.peek_min(), Ok(&"c"));
    /// assert_eq!(heap.peek_max(), Ok(&"aaaa"));
    /// ```
    pub fn with_comparator(cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: Vec::new(), cmp }
    }

    /// Creates an empty heap with space for at least `capacity` elements,
    /// ordered by the given comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Creates a heap containing all the elements of `vec`, ordered by the
    /// given comparator.
    ///
    /// Elements are inserted one at a time in iteration order, each insert
    /// restoring the heap invariant, so the heap is valid after every step.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> MinMaxHeap<T, C> {
        let mut heap = Self::with_capacity_and_comparator(vec.len(), cmp);
        for item in vec {
            heap.push(item);
        }
        heap
    }

    /// Returns a reference to the comparator the heap orders by.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes all elements from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns its elements as a vector in arbitrary
    /// order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Pushes an element onto the heap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut heap = MinMaxHeap::new();
    /// heap.push(3);
    /// heap.push(7);
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        debug_assert!(self.is_valid());
    }

    /// Returns a reference to the smallest element in the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Returns a reference to the greatest element in the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek_max(&self) -> Result<&T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(&self.data[self.max_index()])
    }

    /// Removes the smallest element from the heap without returning it.
    ///
    /// Returns `false` if the heap was empty (the heap is left unchanged),
    /// `true` if an element was removed. Use [`pop_min`](Self::pop_min) to
    /// remove and return the element in one operation.
    pub fn remove_min(&mut self) -> bool {
        if self.data.is_empty() {
            return false;
        }
        self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down_min(0);
        }
        debug_assert!(self.is_valid());
        true
    }

    /// Removes the greatest element from the heap without returning it.
    ///
    /// Returns `false` if the heap was empty (the heap is left unchanged),
    /// `true` if an element was removed. Use [`pop_max`](Self::pop_max) to
    /// remove and return the element in one operation.
    pub fn remove_max(&mut self) -> bool {
        if self.data.is_empty() {
            return false;
        }
        let index = self.max_index();
        self.data.swap_remove(index);
        if index < self.data.len() {
            self.sift_down_max(index);
        }
        debug_assert!(self.is_valid());
        true
    }

    /// Removes the smallest element from the heap and returns it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty; the heap is not
    /// modified in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minmax_heap::{HeapError, MinMaxHeap};
    ///
    /// let mut heap = MinMaxHeap::from(vec![4, 1, 8]);
    /// assert_eq!(heap.pop_min(), Ok(1));
    /// assert_eq!(heap.pop_min(), Ok(4));
    /// assert_eq!(heap.pop_min(), Ok(8));
    /// assert_eq!(heap.pop_min(), Err(HeapError::Empty));
    /// ```
    pub fn pop_min(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down_min(0);
        }
        debug_assert!(self.is_valid());
        Ok(min)
    }

    /// Removes the greatest element from the heap and returns it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty; the heap is not
    /// modified in that case.
    pub fn pop_max(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let index = self.max_index();
        let max = self.data.swap_remove(index);
        if index < self.data.len() {
            self.sift_down_max(index);
        }
        debug_assert!(self.is_valid());
        Ok(max)
    }

    /// Index of the greatest element. The minimum is always at the root; the
    /// maximum is the root itself (fewer than three elements) or whichever
    /// of the root's children is larger.
    fn max_index(&self) -> usize {
        debug_assert!(!self.data.is_empty());
        match self.data.len() {
            1 => 0,
            2 => 1,
            _ => {
                if self.cmp.compares_ge(&self.data[1], &self.data[2]) {
                    1
                } else {
                    2
                }
            }
        }
    }

    /// Restores the invariant after appending a new last leaf at `index`.
    ///
    /// A newly appended node may first need one swap across parities with
    /// its immediate parent; after that, only grandparents (same parity as
    /// the node) can still be violated, so the walk continues two levels at
    /// a time.
    fn sift_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let parent = parent(index);
        if is_min_level(index) {
            if self.cmp.compares_gt(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                self.sift_up_max(parent);
            } else {
                self.sift_up_min(index);
            }
        } else if self.cmp.compares_lt(&self.data[index], &self.data[parent]) {
            self.data.swap(index, parent);
            self.sift_up_min(parent);
        } else {
            self.sift_up_max(index);
        }
    }

    /// Walks a min-level node up the min levels while it is smaller than
    /// its grandparent.
    fn sift_up_min(&mut self, mut index: usize) {
        // Indices 0..=2 have no grandparent.
        while index > 2 {
            let gp = grandparent(index);
            if self.cmp.compares_lt(&self.data[index], &self.data[gp]) {
                self.data.swap(index, gp);
                index = gp;
            } else {
                break;
            }
        }
    }

    /// Walks a max-level node up the max levels while it is greater than
    /// its grandparent.
    fn sift_up_max(&mut self, mut index: usize) {
        while index > 2 {
            let gp = grandparent(index);
            if self.cmp.compares_gt(&self.data[index], &self.data[gp]) {
                self.data.swap(index, gp);
                index = gp;
            } else {
                break;
            }
        }
    }

    /// Pushes the node at `index` down the min levels until it is no
    /// greater than any of its descendants. `index` must lie on a min level.
    fn sift_down_min(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                return;
            }

            // Smallest among the node, its children, and its grandchildren.
            let mut smallest = index;
            for child in [left, right] {
                if child < len && self.cmp.compares_lt(&self.data[child], &self.data[smallest]) {
                    smallest = child;
                }
            }
            let first_grandchild = 2 * left + 1;
            for gc in first_grandchild..first_grandchild + 4 {
                if gc < len && self.cmp.compares_lt(&self.data[gc], &self.data[smallest]) {
                    smallest = gc;
                }
            }

            if smallest == index {
                return;
            }
            self.data.swap(index, smallest);
            if smallest < first_grandchild {
                // Swapped with a child on a max level; that child was the
                // smallest descendant, so nothing below it can be violated.
                return;
            }
            // Swapped with a grandchild: the displaced value may now exceed
            // the grandchild's max-level parent.
            let parent = parent(smallest);
            if self.cmp.compares_gt(&self.data[smallest], &self.data[parent]) {
                self.data.swap(smallest, parent);
            }
            index = smallest;
        }
    }

    /// Pushes the node at `index` down the max levels until it is no
    /// smaller than any of its descendants. `index` must lie on a max level.
    fn sift_down_max(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                return;
            }

            let mut largest = index;
            for child in [left, right] {
                if child < len && self.cmp.compares_gt(&self.data[child], &self.data[largest]) {
                    largest = child;
                }
            }
            let first_grandchild = 2 * left + 1;
            for gc in first_grandchild..first_grandchild + 4 {
                if gc < len && self.cmp.compares_gt(&self.data[gc], &self.data[largest]) {
                    largest = gc;
                }
            }

            if largest == index {
                return;
            }
            self.data.swap(index, largest);
            if largest < first_grandchild {
                return;
            }
            let parent = parent(largest);
            if self.cmp.compares_lt(&self.data[largest], &self.data[parent]) {
                self.data.swap(largest, parent);
            }
            index = largest;
        }
    }

    /// Checks the min-max ordering invariant.
    ///
    /// Verifying each node against its parent and grandparent is sufficient:
    /// the relation to any deeper ancestor follows transitively along the
    /// alternating levels.
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let p = parent(i);
            let parent_ok = if is_min_level(p) {
                self.cmp.compares_ge(&self.data[i], &self.data[p])
            } else {
                self.cmp.compares_le(&self.data[i], &self.data[p])
            };
            let grandparent_ok = i < 3 || {
                let gp = grandparent(i);
                if is_min_level(gp) {
                    self.cmp.compares_ge(&self.data[i], &self.data[gp])
                } else {
                    self.cmp.compares_le(&self.data[i], &self.data[gp])
                }
            };
            parent_ok && grandparent_ok
        })
    }
}

impl<T, C: Compare<T> + Clone> Clone for MinMaxHeap<T, C>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        MinMaxHeap {
            data: self.data.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C: Compare<T> + Default> Default for MinMaxHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Creates a heap containing all the elements of `vec`, ordered by the
    /// natural order of `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.peek_min(), Ok(&1));
    /// assert_eq!(heap.peek_max(), Ok(&6));
    /// ```
    fn from(vec: Vec<T>) -> MinMaxHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for MinMaxHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinMaxHeap<T, C> {
        Self::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Debug, C: Compare<T>> Debug for MinMaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
