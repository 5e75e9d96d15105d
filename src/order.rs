//! Comparison strategies
//!
//! Heaps are parameterised by a zero-sized [`Order`] type instead of a
//! comparison closure, so every sift loop is monomorphized for its direction.

use std::fmt::Debug;

/// A direction in which keys are ranked
pub trait Order: Debug + Clone + Copy + Default {
    /// Returns true if `a` must sit above `b` in a heap of this order.
    fn precedes<K: PartialOrd>(a: &K, b: &K) -> bool;
}

/// Smaller keys first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

/// Larger keys first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl Order for MinOrder {
    #[inline]
    fn precedes<K: PartialOrd>(a: &K, b: &K) -> bool {
        a < b
    }
}

impl Order for MaxOrder {
    #[inline]
    fn precedes<K: PartialOrd>(a: &K, b: &K) -> bool {
        a > b
    }
}
