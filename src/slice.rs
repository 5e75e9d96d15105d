//! Slice helpers
//!
//! Small utilities for working with the element arrays returned by
//! [`as_slice`](crate::MinMaxHeap::as_slice) and
//! [`into_vec`](crate::MinMaxHeap::into_vec).

/// Overwrites every slot of `slice` with a clone of `value`.
pub fn fill<T: Clone>(slice: &mut [T], value: T) {
    slice.fill(value);
}

/// Returns true if `a` and `b` have the same length and equal elements
/// position by position.
pub fn equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Reverses `slice` in place.
pub fn reverse<T>(slice: &mut [T]) {
    slice.reverse();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn trees() -> Vec<Element<f32, &'static str>> {
        vec![
            Element::new(0.0, "spruce"),
            Element::new(2.0, "cypress"),
            Element::new(6.0, "cedar"),
            Element::new(30.0, "oak"),
            Element::new(1.0, "maple"),
            Element::new(10.0, "walnut"),
        ]
    }

    #[test]
    fn test_reverse_twice_restores() {
        let mut set = trees();
        let mut reversed = trees();
        reversed.swap(0, 5);
        reversed.swap(1, 4);
        reversed.swap(2, 3);

        reverse(&mut set);
        assert!(equals(&set, &reversed));
        reverse(&mut set);
        assert!(!equals(&set, &reversed));
        assert!(equals(&set, &trees()));
    }

    #[test]
    fn test_equals_requires_same_length() {
        let set = trees();
        assert!(!equals(&set, &set[..5]));
        assert!(equals::<i32>(&[], &[]));
    }

    #[test]
    fn test_fill() {
        let mut set = trees();
        let blank = Element::new(0.0, "empty");
        fill(&mut set, blank);
        assert!(set.iter().all(|e| *e == blank));
    }
}
