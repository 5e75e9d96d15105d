//! Stress tests that push the heaps through large workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_minmax_heaps::{Element, Heap, MaxHeap, MinHeap, MinMaxHeap};

/// Deterministic pseudo-random keys with many repeats
fn key(i: i64) -> i64 {
    (i * 7_919 + 13) % 1_009 - 504
}

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i64, i64>>() {
    let mut heap = H::new();
    for i in 0..10_000 {
        heap.push(i, i);
    }
    assert_eq!(heap.len(), 10_000);

    let mut last = None;
    let mut count = 0;
    while let Some(e) = heap.pop() {
        assert_eq!(e.key, e.data);
        if let Some(prev) = last {
            assert_ne!(prev, e.key);
        }
        last = Some(e.key);
        count += 1;
    }
    assert_eq!(count, 10_000);
}

/// Test alternating bursts of pushes and pops
fn test_bursts<H: Heap<i64, i64>>() {
    let mut heap = H::new();
    let mut len = 0usize;
    for round in 0..50 {
        for i in 0..200 {
            heap.push(key(round * 200 + i), i);
            len += 1;
        }
        for _ in 0..150 {
            assert!(heap.pop().is_some());
            len -= 1;
        }
        assert_eq!(heap.len(), len);
    }
}

#[test]
fn test_min_heap_massive() {
    test_massive_operations::<MinHeap<i64, i64>>();
}

#[test]
fn test_max_heap_massive() {
    test_massive_operations::<MaxHeap<i64, i64>>();
}

#[test]
fn test_minmax_heap_massive() {
    test_massive_operations::<MinMaxHeap<i64, i64>>();
}

#[test]
fn test_min_heap_bursts() {
    test_bursts::<MinHeap<i64, i64>>();
}

#[test]
fn test_max_heap_bursts() {
    test_bursts::<MaxHeap<i64, i64>>();
}

#[test]
fn test_minmax_heap_bursts() {
    test_bursts::<MinMaxHeap<i64, i64>>();
}

/// Drain a large min-max heap from both ends at once
#[test]
fn test_minmax_squeeze() {
    let mut heap: MinMaxHeap<i64, i64> = (0..20_000).map(|i| Element::new(key(i), i)).collect();
    let mut low = i64::MIN;
    let mut high = i64::MAX;
    while heap.len() > 1 {
        let min = heap.remove_min().map(|e| e.key).unwrap_or_default();
        let max = heap.remove_max().map(|e| e.key).unwrap_or_default();
        assert!(low <= min && min <= max && max <= high);
        low = min;
        high = max;
    }
}

/// Sorted traversal of a large heap agrees with draining a clone
#[test]
fn test_minmax_traversal_matches_drain() {
    let heap: MinMaxHeap<i64, i64> = (0..20_000).map(|i| Element::new(key(i), i)).collect();

    let mut drained = heap.clone();
    let traversed: Vec<i64> = heap.iter_ascending().map(|e| e.key).collect();
    for k in traversed {
        assert_eq!(drained.remove_min().map(|e| e.key), Some(k));
    }
    assert!(drained.is_empty());

    let mut drained = heap.clone();
    for e in heap.iter_descending() {
        assert_eq!(drained.remove_max().map(|d| d.key), Some(e.key));
    }
    assert!(drained.is_empty());
    assert_eq!(heap.len(), 20_000);
}

/// Many iterators over the same heap can be interleaved
#[test]
fn test_interleaved_traversals() {
    let heap: MinMaxHeap<i64, i64> = (0..5_000).map(|i| Element::new(key(i), i)).collect();
    let mut up = heap.iter_ascending();
    let mut down = heap.iter_descending();
    let mut lows = Vec::new();
    let mut highs = Vec::new();
    for _ in 0..2_500 {
        lows.extend(up.next().map(|e| e.key));
        highs.extend(down.next().map(|e| e.key));
    }
    assert!(lows.windows(2).all(|w| w[0] <= w[1]));
    assert!(highs.windows(2).all(|w| w[0] >= w[1]));
    assert!(lows.last() <= highs.last());
    assert_eq!(up.len(), 2_500);
    assert_eq!(down.len(), 2_500);
}
