//! Keyed heap elements
//!
//! Every heap in this crate stores [`Element`]s: a key that decides the
//! element's position and an opaque payload that travels with it.

/// Bound on heap keys.
///
/// Any `PartialOrd + Copy` type qualifies; in practice keys are numeric
/// primitives (`i32`, `u64`, `f32`, `f64`, ...). Keys must be mutually
/// comparable: a float heap holding `NaN` still keeps its shape but the
/// position of the `NaN` elements is unspecified.
pub trait Key: PartialOrd + Copy {}

impl<T: PartialOrd + Copy> Key for T {}

/// A (key, payload) pair stored in a heap
///
/// Elements are moved as a whole by heap operations; neither field is ever
/// rewritten in place.
///
/// # Example
///
/// ```rust
/// use rust_minmax_heaps::Element;
///
/// let e = Element::new(0.5_f32, "oak");
/// assert_eq!(e.key, 0.5);
/// assert_eq!(e.data, "oak");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Element<K, V> {
    /// Ordering key
    pub key: K,
    /// Payload carried alongside the key
    pub data: V,
}

impl<K, V> Element<K, V> {
    pub fn new(key: K, data: V) -> Self {
        Self { key, data }
    }

    /// Splits the element into its key and payload.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.data)
    }
}

impl<K, V> From<(K, V)> for Element<K, V> {
    fn from((key, data): (K, V)) -> Self {
        Self { key, data }
    }
}
