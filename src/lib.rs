//! Array-backed heaps for Rust
//!
//! This crate provides three binary-tree priority queues stored in a single
//! `Vec`, each keyed by an [`Element`]'s `key` and carrying an arbitrary
//! payload:
//!
//! - **[`MinHeap`]**: smallest key at the root; O(log n) insert and remove-min
//! - **[`MaxHeap`]**: largest key at the root; O(log n) insert and remove-max
//! - **[`MinMaxHeap`]**: double-ended heap with O(1) access to both extremes
//!   and O(log n) removal of either
//!
//! A [`MinMaxHeap`] can also be traversed in sorted order, ascending or
//! descending, by [`SortedIter`], which never sorts, copies or mutates the
//! heap.
//!
//! Empty heaps answer `peek_*` and `remove_*` with `None`.
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heaps::{Element, MinMaxHeap};
//!
//! let mut heap = MinMaxHeap::new();
//! for (key, tree) in [
//!     (0.0, "spruce"), (0.2, "cypress"), (0.6, "cedar"), (3.0, "oak"),
//!     (0.14, "maple"), (0.14, "palm"), (0.6, "mango"), (1.0, "walnut"),
//! ] {
//!     heap.insert(Element::new(key, tree));
//! }
//!
//! assert_eq!(heap.peek_min().map(|e| e.key), Some(0.0));
//! assert_eq!(heap.peek_max().map(|e| e.key), Some(3.0));
//!
//! let keys: Vec<f32> = heap.iter_ascending().map(|e| e.key).collect();
//! assert_eq!(keys, vec![0.0, 0.14, 0.14, 0.2, 0.6, 0.6, 1.0, 3.0]);
//! ```

pub mod binary;
pub mod element;
pub mod iter;
pub mod minmax;
pub mod order;
pub mod slice;
pub mod traits;

pub use binary::{MaxHeap, MinHeap, OrderedHeap};
pub use element::{Element, Key};
pub use iter::SortedIter;
pub use minmax::{is_min_level, MinMaxHeap};
pub use order::{MaxOrder, MinOrder, Order};
pub use traits::{Heap, HeapError};
