//! Min-max heap
//!
//! A double-ended priority queue in a single array. Tree levels alternate
//! roles by depth: the root's level (depth 0) is a *min level*, depth 1 is a
//! *max level*, and so on. An element on a min level is no larger than any of
//! its descendants; an element on a max level is no smaller than any of them.
//! The minimum is therefore the root and the maximum is one of the root's two
//! children.
//!
//! Insertion compares against the parent once, then only against
//! grandparents, since levels two apart share a role. Removal sifts down over
//! children and grandchildren.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity |
//! |----------------------|------------|
//! | `insert`             | O(log n)   |
//! | `remove_min/max`     | O(log n)   |
//! | `peek_min/max`       | O(1)       |
//! | `iter_sorted`        | O(n log f) for the full traversal, f = peak frontier size |
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::{Element, MinMaxHeap};
//!
//! let mut heap = MinMaxHeap::new();
//! for (key, tree) in [(0.2, "cypress"), (3.0, "oak"), (0.0, "spruce"), (1.0, "walnut")] {
//!     heap.insert(Element::new(key, tree));
//! }
//!
//! assert_eq!(heap.peek_min().map(|e| e.data), Some("spruce"));
//! assert_eq!(heap.peek_max().map(|e| e.data), Some("oak"));
//!
//! let keys: Vec<f64> = heap.iter_sorted(true).map(|e| e.key).collect();
//! assert_eq!(keys, vec![0.0, 0.2, 1.0, 3.0]);
//!
//! assert_eq!(heap.remove_max().map(|e| e.key), Some(3.0));
//! assert_eq!(heap.remove_min().map(|e| e.key), Some(0.0));
//! ```

use crate::binary::{left_child, parent, right_child};
use crate::element::{Element, Key};
use crate::iter::SortedIter;
use crate::order::{MaxOrder, MinOrder, Order};
use crate::traits::{Heap, HeapError};

/// Returns true if `index` lies on a min level of a min-max heap.
///
/// Depth is the bit length of `index + 1` minus one; even depths are min
/// levels.
///
/// ```rust
/// use rust_minmax_heaps::is_min_level;
///
/// assert!(is_min_level(0));
/// assert!(!is_min_level(1) && !is_min_level(2));
/// assert!((3..=6).all(is_min_level));
/// assert!(!(7..=14).any(is_min_level));
/// ```
#[inline]
pub fn is_min_level(index: usize) -> bool {
    (index + 1).ilog2() % 2 == 0
}

/// A double-ended heap with O(1) access to both the minimum and the maximum
#[derive(Debug, Clone)]
pub struct MinMaxHeap<K, V> {
    data: Vec<Element<K, V>>,
}

impl<K: Key, V> MinMaxHeap<K, V> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
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

    /// Appends `element` and moves it up to a position that restores the
    /// min-max order.
    pub fn insert(&mut self, element: Element<K, V>) {
        self.data.push(element);
        self.push_up(self.data.len() - 1);
    }

    /// Returns the element with the smallest key without removing it
    pub fn peek_min(&self) -> Option<&Element<K, V>> {
        self.data.first()
    }

    /// Returns the element with the largest key without removing it
    pub fn peek_max(&self) -> Option<&Element<K, V>> {
        self.max_index().map(|i| &self.data[i])
    }

    /// Removes and returns the element with the smallest key
    pub fn remove_min(&mut self) -> Option<Element<K, V>> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.swap_remove(0);
        self.push_down::<MinOrder>(0);
        Some(min)
    }

    /// Removes and returns the element with the largest key
    pub fn remove_max(&mut self) -> Option<Element<K, V>> {
        let index = self.max_index()?;
        // swap_remove leaves the last leaf in the vacated slot
        let max = self.data.swap_remove(index);
        if index < self.data.len() {
            self.push_down::<MaxOrder>(index);
        }
        Some(max)
    }

    /// Traverses the heap in sorted order without modifying it.
    ///
    /// With `ascending` the smallest key comes first, otherwise the largest.
    /// The order among equal keys is unspecified.
    pub fn iter_sorted(&self, ascending: bool) -> SortedIter<'_, K, V> {
        SortedIter::new(&self.data, ascending)
    }

    pub fn iter_ascending(&self) -> SortedIter<'_, K, V> {
        self.iter_sorted(true)
    }

    pub fn iter_descending(&self) -> SortedIter<'_, K, V> {
        self.iter_sorted(false)
    }

    /// Position of the maximum: the root while it has no children, otherwise
    /// the larger of the two max-level slots 1 and 2 (1 on ties).
    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.data[1].key < self.data[2].key => Some(2),
            _ => Some(1),
        }
    }

    fn key(&self, index: usize) -> &K {
        &self.data[index].key
    }

    fn push_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let p = parent(index);
        if is_min_level(index) {
            if self.key(index) > self.key(p) {
                self.data.swap(index, p);
                self.push_granny::<MaxOrder>(p);
            } else {
                self.push_granny::<MinOrder>(index);
            }
        } else if self.key(index) < self.key(p) {
            self.data.swap(index, p);
            self.push_granny::<MinOrder>(p);
        } else {
            self.push_granny::<MaxOrder>(index);
        }
    }

    /// Swaps `index` with its grandparent while it ranks ahead under `O`.
    fn push_granny<O: Order>(&mut self, mut index: usize) {
        // every index above 2 has a grandparent
        while index > 2 {
            let gp = parent(parent(index));
            if !O::precedes(self.key(index), self.key(gp)) {
                break;
            }
            self.data.swap(index, gp);
            index = gp;
        }
    }

    /// Restores order below `index` after its element was replaced.
    ///
    /// `O` is the role of the level `index` sits on.
    fn push_down<O: Order>(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let l = left_child(index);
            if l >= len {
                break;
            }
            let r = right_child(index);
            let mut best = l;
            // ascending index order: the lowest index wins ties
            for v in [r, left_child(l), right_child(l), left_child(r), right_child(r)] {
                if v >= len {
                    break;
                }
                if O::precedes(self.key(v), self.key(best)) {
                    best = v;
                }
            }
            if !O::precedes(self.key(best), self.key(index)) {
                break;
            }
            self.data.swap(index, best);
            if best <= r {
                break;
            }
            let p = parent(best);
            if O::precedes(self.key(p), self.key(best)) {
                self.data.swap(best, p);
            }
            index = best;
        }
    }

    /// Returns the first index that breaks the min-max order.
    ///
    /// Checking each node against its parent and grandparent is enough: the
    /// full descendant property follows by transitivity.
    fn first_violation(data: &[Element<K, V>]) -> Option<usize> {
        (1..data.len()).find(|&i| {
            let p = parent(i);
            let gp = (i > 2).then(|| parent(p));
            if is_min_level(i) {
                data[i].key > data[p].key || gp.is_some_and(|g| data[i].key < data[g].key)
            } else {
                data[i].key < data[p].key || gp.is_some_and(|g| data[i].key > data[g].key)
            }
        })
    }
}

impl<K: Key, V> Heap<K, V> for MinMaxHeap<K, V> {
    fn new() -> Self {
        MinMaxHeap::new()
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
        self.peek_min()
    }

    fn pop(&mut self) -> Option<Element<K, V>> {
        self.remove_min()
    }

    fn merge(&mut self, other: Self) {
        self.extend(other.data);
    }
}

impl<K: Key, V> Default for MinMaxHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, V> TryFrom<Vec<Element<K, V>>> for MinMaxHeap<K, V> {
    type Error = HeapError;

    /// Adopts `data` as the backing array if it is already in min-max order.
    fn try_from(data: Vec<Element<K, V>>) -> Result<Self, Self::Error> {
        match Self::first_violation(&data) {
            Some(index) => Err(HeapError::OrderViolation { index }),
            None => Ok(Self { data }),
        }
    }
}

impl<K: Key, V> Extend<Element<K, V>> for MinMaxHeap<K, V> {
    fn extend<I: IntoIterator<Item = Element<K, V>>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
    }
}

impl<K: Key, V> FromIterator<Element<K, V>> for MinMaxHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = Element<K, V>>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
