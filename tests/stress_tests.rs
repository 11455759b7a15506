//! Stress tests that push the heap through large and adversarial workloads
//!
//! These tests perform large numbers of operations in various patterns
//! (monotone runs, alternating double-ended drains, random fuzz) to catch
//! edge cases that small hand-written cases miss.

use minmax_heap::MinMaxHeap;
use rand::{seq::SliceRandom, Rng};

#[test]
fn massive_ascending_run() {
    let mut heap = MinMaxHeap::new();

    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);
    assert_eq!(heap.peek_min(), Ok(&0));
    assert_eq!(heap.peek_max(), Ok(&9_999));

    for i in 0..10_000 {
        assert_eq!(heap.pop_min(), Ok(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn massive_descending_run() {
    let mut heap = MinMaxHeap::new();

    for i in (0..10_000).rev() {
        heap.push(i);
    }

    for i in (0..10_000).rev() {
        assert_eq!(heap.pop_max(), Ok(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn alternating_double_ended_drain() {
    for &n in &[1usize, 2, 3, 7, 64, 1_000, 4_097] {
        let mut heap = MinMaxHeap::from((0..n as i32).collect::<Vec<_>>());

        let mut low = 0;
        let mut high = n as i32 - 1;
        while low <= high {
            assert_eq!(heap.pop_min(), Ok(low));
            low += 1;
            if low <= high {
                assert_eq!(heap.pop_max(), Ok(high));
                high -= 1;
            }
        }
        assert!(heap.is_empty());
    }
}

#[test]
fn interleaved_push_and_pop() {
    let mut heap = MinMaxHeap::new();

    // Grow in batches, shedding both extremes between batches; every
    // element pushed is eventually popped exactly once.
    let mut pushed = 0usize;
    let mut popped = 0usize;
    for batch in 0..50 {
        for i in 0..40 {
            heap.push(batch * 1_000 + i);
            pushed += 1;
        }
        for _ in 0..10 {
            assert!(heap.pop_min().is_ok());
            assert!(heap.pop_max().is_ok());
            popped += 2;
        }
        assert_eq!(heap.len(), pushed - popped);
    }

    let mut last = *heap.peek_min().unwrap();
    while let Ok(v) = heap.pop_min() {
        assert!(v >= last);
        last = v;
        popped += 1;
    }
    assert_eq!(pushed, popped);
}

#[test]
fn fuzz_random_pushes_drain_sorted() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let mut heap = MinMaxHeap::new();
        for _ in 0..1_000 {
            heap.push(rng.gen_range(-500i32..500));
        }

        let mut previous = None;
        while let Ok(v) = heap.pop_min() {
            if let Some(p) = previous {
                assert!(p <= v);
            }
            previous = Some(v);
        }
    }
}

#[test]
fn fuzz_shuffled_range_from_both_ends() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let mut values: Vec<i32> = (0..1_000).collect();
        values.shuffle(&mut rng);

        let mut heap = MinMaxHeap::from(values);
        for i in 0..500 {
            assert_eq!(heap.pop_min(), Ok(i));
            assert_eq!(heap.pop_max(), Ok(999 - i));
        }
        assert!(heap.is_empty());
    }
}

#[test]
fn fuzz_silent_remove_loops() {
    let mut rng = rand::thread_rng();

    let mut heap = MinMaxHeap::new();
    for _ in 0..2_000 {
        heap.push(rng.gen_range(0u32..10_000));
    }

    // Drain using the boolean probes only, the way loop-driven callers do.
    let mut removed = 0usize;
    while heap.remove_max() {
        removed += 1;
    }
    assert_eq!(removed, 2_000);
    assert!(!heap.remove_min());
    assert!(!heap.remove_max());
}

#[test]
fn many_duplicates() {
    let mut heap = MinMaxHeap::new();

    for _ in 0..1_000 {
        heap.push(7);
    }
    heap.push(3);
    heap.push(11);

    assert_eq!(heap.pop_min(), Ok(3));
    assert_eq!(heap.pop_max(), Ok(11));
    for _ in 0..1_000 {
        assert_eq!(heap.pop_min(), Ok(7));
    }
    assert!(heap.is_empty());
}
