//! Sorted traversal of a min-max heap
//!
//! [`SortedIter`] yields every element of a [`MinMaxHeap`](crate::MinMaxHeap)
//! in ascending or descending key order without sorting, copying or mutating
//! the heap. It keeps a *frontier*: a [`MaxHeap`] of heap indices ranked by
//! key in the traversal direction. Each step pops the best candidate and adds
//! the few indices that can follow it:
//!
//! - A node on a level whose role matches the direction (min levels when
//!   ascending, max levels when descending) contributes its grandchildren, or
//!   a child directly when that child is a leaf. A leaf of such a level
//!   re-admits its parent once, when it is the left child.
//! - A node on the opposite role re-admits its grandparent once, when it is
//!   the grandparent's left-left grandchild.
//!
//! Every index enters the frontier exactly once. The frontier peaks near the
//! middle of the traversal, at no more than about half the heap.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::binary::{left_child, parent, right_child, MaxHeap};
use crate::element::{Element, Key};
use crate::minmax::is_min_level;

/// A key whose ordering is flipped for ascending traversals
///
/// The frontier is always a max-heap, so ascending traversals rank smaller
/// keys higher. This avoids negating keys, which unsigned types cannot do.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ranked<K> {
    key: K,
    ascending: bool,
}

impl<K: PartialOrd> PartialOrd for Ranked<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.ascending {
            other.key.partial_cmp(&self.key)
        } else {
            self.key.partial_cmp(&other.key)
        }
    }
}

/// Lazy sorted traversal created by
/// [`MinMaxHeap::iter_sorted`](crate::MinMaxHeap::iter_sorted)
///
/// The iterator borrows the heap, so the heap cannot change underneath the
/// indices held in the frontier.
///
/// # Example
///
/// ```rust
/// use rust_minmax_heaps::{Element, MinMaxHeap};
///
/// let heap: MinMaxHeap<u32, char> =
///     [(4, 'd'), (1, 'a'), (3, 'c'), (2, 'b')].into_iter().map(Element::from).collect();
///
/// let mut iter = heap.iter_descending();
/// assert_eq!(iter.advance(), (Some(&Element::new(4, 'd')), 3));
/// assert_eq!(iter.advance(), (Some(&Element::new(3, 'c')), 2));
/// assert_eq!(iter.advance(), (Some(&Element::new(2, 'b')), 1));
/// assert_eq!(iter.advance(), (Some(&Element::new(1, 'a')), 0));
/// assert_eq!(iter.advance(), (None, -1));
/// assert_eq!(iter.advance(), (None, -2));
/// ```
#[derive(Debug, Clone)]
pub struct SortedIter<'a, K, V> {
    heap: &'a [Element<K, V>],
    frontier: MaxHeap<Ranked<K>, usize>,
    ascending: bool,
    remaining: isize,
}

impl<'a, K: Key, V> SortedIter<'a, K, V> {
    pub(crate) fn new(heap: &'a [Element<K, V>], ascending: bool) -> Self {
        let mut iter = Self {
            heap,
            frontier: MaxHeap::new(),
            ascending,
            remaining: heap.len() as isize,
        };
        // The minimum is the root; the maximum is on the max level below it
        if ascending || heap.len() == 1 {
            iter.admit(0);
        } else {
            iter.admit(1);
            iter.admit(2);
        }
        iter
    }

    /// Returns the next element along with the number of elements still to
    /// come after it.
    ///
    /// Once the heap is exhausted this keeps returning `None` with an
    /// ever more negative count. The traversal cannot be restarted; ask the
    /// heap for a new iterator instead.
    pub fn advance(&mut self) -> (Option<&'a Element<K, V>>, isize) {
        self.remaining = self.remaining.saturating_sub(1);
        let Some(top) = self.frontier.remove_max().map(|e| e.data) else {
            return (None, self.remaining);
        };
        self.expand(top);
        let heap = self.heap;
        (Some(&heap[top]), self.remaining)
    }

    /// Elements left to yield; negative once the traversal ran past the end
    pub fn remaining(&self) -> isize {
        self.remaining
    }

    /// Number of candidate indices currently held
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    fn admit(&mut self, index: usize) {
        if let Some(e) = self.heap.get(index) {
            let ranked = Ranked {
                key: e.key,
                ascending: self.ascending,
            };
            self.frontier.insert(Element::new(ranked, index));
        }
    }

    fn expand(&mut self, top: usize) {
        let len = self.heap.len();
        if is_min_level(top) != self.ascending {
            // climbing back out of a subtree
            if top > 2 {
                let gp = parent(parent(top));
                if left_child(left_child(gp)) == top {
                    self.admit(gp);
                }
            }
            return;
        }

        let l = left_child(top);
        if l >= len {
            if top > 0 && left_child(parent(top)) == top {
                self.admit(parent(top));
            }
            return;
        }

        for child in [right_child(top), l] {
            if left_child(child) < len {
                self.admit(left_child(child));
                self.admit(right_child(child));
            } else {
                self.admit(child);
            }
        }
    }
}

impl<'a, K: Key, V> Iterator for SortedIter<'a, K, V> {
    type Item = &'a Element<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }
        self.advance().0
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.max(0) as usize;
        (n, Some(n))
    }
}

impl<K: Key, V> ExactSizeIterator for SortedIter<'_, K, V> {}

impl<K: Key, V> FusedIterator for SortedIter<'_, K, V> {}
