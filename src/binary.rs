//! Binary min-heap and max-heap
//!
//! Both heaps are the same array-backed structure, [`OrderedHeap`],
//! parameterised by an [`Order`]; [`MinHeap`] and [`MaxHeap`] fix the
//! direction. The array is read as a complete binary tree: for index `i`
//! the parent is `(i - 1) / 2` and the children are `2i + 1` and `2i + 2`.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity |
//! |----------------------|------------|
//! | `insert`             | O(log n)   |
//! | `remove_min/max`     | O(log n)   |
//! | `peek_min/max`       | O(1)       |
//! | `clone`              | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::{Element, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! heap.insert(Element::new(30.0, "oak"));
//! heap.insert(Element::new(1.0, "maple"));
//! heap.insert(Element::new(6.0, "cedar"));
//!
//! assert_eq!(heap.peek_min().map(|e| e.data), Some("maple"));
//! assert_eq!(heap.remove_min().map(|e| e.key), Some(1.0));
//! assert_eq!(heap.remove_min().map(|e| e.key), Some(6.0));
//! ```

use std::marker::PhantomData;

use crate::element::{Element, Key};
use crate::order::{MaxOrder, MinOrder, Order};
use crate::traits::{Heap, HeapError};

#[inline]
pub(crate) fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub(crate) fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub(crate) fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// A binary heap whose root is the element ranked first by `O`
#[derive(Debug, Clone)]
pub struct OrderedHeap<K, V, O> {
    data: Vec<Element<K, V>>,
    _order: PhantomData<O>,
}

/// A binary heap with the smallest key at the root
pub type MinHeap<K, V> = OrderedHeap<K, V, MinOrder>;

/// A binary heap with the largest key at the root
pub type MaxHeap<K, V> = OrderedHeap<K, V, MaxOrder>;

impl<K: Key, V, O: Order> OrderedHeap<K, V, O> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The backing array in level order
    pub fn as_slice(&self) -> &[Element<K, V>] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<Element<K, V>> {
        self.data
    }

    /// Iterates the elements in array order, which is not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element<K, V>> {
        self.data.iter()
    }

    /// Appends `element` and sifts it up to its place.
    pub fn insert(&mut self, element: Element<K, V>) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    fn top(&self) -> Option<&Element<K, V>> {
        self.data.first()
    }

    fn take_top(&mut self) -> Option<Element<K, V>> {
        if self.data.is_empty() {
            return None;
        }
        // The last leaf replaces the root before sifting down
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            if O::precedes(&self.data[index].key, &self.data[p].key) {
                self.data.swap(index, p);
                index = p;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut best = index;

            if left < len && O::precedes(&self.data[left].key, &self.data[best].key) {
                best = left;
            }
            if right < len && O::precedes(&self.data[right].key, &self.data[best].key) {
                best = right;
            }

            if best == index {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }

    /// Returns the first index whose key ranks ahead of its parent's.
    fn first_violation(data: &[Element<K, V>]) -> Option<usize> {
        (1..data.len()).find(|&i| O::precedes(&data[i].key, &data[parent(i)].key))
    }
}

impl<K: Key, V> OrderedHeap<K, V, MinOrder> {
    /// Returns the element with the smallest key without removing it
    pub fn peek_min(&self) -> Option<&Element<K, V>> {
        self.top()
    }

    /// Removes and returns the element with the smallest key
    pub fn remove_min(&mut self) -> Option<Element<K, V>> {
        self.take_top()
    }
}

impl<K: Key, V> OrderedHeap<K, V, MaxOrder> {
    /// Returns the element with the largest key without removing it
    pub fn peek_max(&self) -> Option<&Element<K, V>> {
        self.top()
    }

    /// Removes and returns the element with the largest key
    pub fn remove_max(&mut self) -> Option<Element<K, V>> {
        self.take_top()
    }
}

impl<K: Key, V, O: Order> Heap<K, V> for OrderedHeap<K, V, O> {
    fn new() -> Self {
        OrderedHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, key: K, data: V) {
        self.insert(Element::new(key, data));
    }

    fn peek(&self) -> Option<&Element<K, V>> {
        self.top()
    }

    fn pop(&mut self) -> Option<Element<K, V>> {
        self.take_top()
    }

    fn merge(&mut self, other: Self) {
        self.extend(other.data);
    }
}

impl<K: Key, V, O: Order> Default for OrderedHeap<K, V, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, V, O: Order> TryFrom<Vec<Element<K, V>>> for OrderedHeap<K, V, O> {
    type Error = HeapError;

    /// Adopts `data` as the backing array if it is already heap-ordered.
    fn try_from(data: Vec<Element<K, V>>) -> Result<Self, Self::Error> {
        match Self::first_violation(&data) {
            Some(index) => Err(HeapError::OrderViolation { index }),
            None => Ok(Self {
                data,
                _order: PhantomData,
            }),
        }
    }
}

impl<K: Key, V, O: Order> Extend<Element<K, V>> for OrderedHeap<K, V, O> {
    fn extend<I: IntoIterator<Item = Element<K, V>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
    }
}

impl<K: Key, V, O: Order> FromIterator<Element<K, V>> for OrderedHeap<K, V, O> {
    fn from_iter<I: IntoIterator<Item = Element<K, V>>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
