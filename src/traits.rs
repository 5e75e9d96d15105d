//! Common traits for heap data structures
//!
//! [`Heap`] is the single-ended view every variant in this crate shares:
//! `push` inserts, `peek` and `pop` address the heap's primary extremum
//! (the minimum for [`MinHeap`](crate::MinHeap) and
//! [`MinMaxHeap`](crate::MinMaxHeap), the maximum for
//! [`MaxHeap`](crate::MaxHeap)).

use std::fmt;

use crate::element::{Element, Key};

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An adopted array does not satisfy the heap's ordering invariant
    OrderViolation {
        /// First array position whose key is out of order
        index: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::OrderViolation { index } => {
                write!(f, "element at index {} violates heap order", index)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for the array-backed heaps
///
/// Empty heaps are signalled with `None` rather than a panic.
///
/// # Example
///
/// ```rust
/// use rust_minmax_heaps::{Heap, MaxHeap};
///
/// let mut heap = MaxHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(7, "seven");
///
/// assert_eq!(heap.peek().map(|e| e.key), Some(7));
/// assert_eq!(heap.pop().map(|e| e.data), Some("seven"));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<K: Key, V> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts `data` under `key`
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, key: K, data: V);

    /// Returns the primary extremum without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&Element<K, V>>;

    /// Removes and returns the primary extremum
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<Element<K, V>>;

    /// Moves every element of `other` into this heap
    ///
    /// # Time Complexity
    /// O(m log(n + m)) for `m = other.len()`
    fn merge(&mut self, other: Self);
}
