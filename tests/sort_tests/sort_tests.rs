//! Tests for the sorting engine
//!
//! These tests verify:
//! - Each method sorts by id and by average
//! - Stability on equal averages
//! - Idempotence
//! - Early exit on sorted input

use gradebook::{SortKey, SortMethod, StudentStore};

const METHODS: [SortMethod; 3] = [SortMethod::Bubble, SortMethod::Insertion, SortMethod::Merge];

// =============================================================================
// Helper Functions
// =============================================================================

/// Each entry is (id, average); the average is set via one grade
fn store_from(entries: &[(i32, f32)]) -> StudentStore {
    let mut store = StudentStore::new();
    for &(id, avg) in entries {
        store.add(id, "s").unwrap();
        store.add_grade(id, avg).unwrap();
    }
    store
}

fn ids(store: &StudentStore) -> Vec<i32> {
    store.iter().map(|s| s.id()).collect()
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_sort_by_id_all_methods() {
    for method in METHODS {
        let mut store = store_from(&[(9, 1.0), (4, 2.0), (7, 3.0), (1, 4.0), (-3, 5.0)]);
        store.sort(method, SortKey::Id);
        assert_eq!(ids(&store), vec![-3, 1, 4, 7, 9], "method {}", method);
    }
}

#[test]
fn test_sort_by_average_all_methods() {
    for method in METHODS {
        let mut store = store_from(&[(1, 88.0), (2, 45.5), (3, 99.0), (4, 70.0)]);
        store.sort(method, SortKey::Average);
        assert_eq!(ids(&store), vec![2, 4, 1, 3], "method {}", method);
    }
}

#[test]
fn test_sort_reverse_input() {
    for method in METHODS {
        let entries: Vec<(i32, f32)> = (0..50).rev().map(|i| (i, i as f32)).collect();
        let mut store = store_from(&entries);
        store.sort(method, SortKey::Id);
        assert_eq!(ids(&store), (0..50).collect::<Vec<_>>(), "method {}", method);
    }
}

#[test]
fn test_sort_keeps_grades_with_record() {
    for method in METHODS {
        let mut store = store_from(&[(2, 20.0), (1, 10.0)]);
        store.add_grade(2, 40.0).unwrap();
        store.sort(method, SortKey::Id);
        assert_eq!(store.get(1).unwrap().grades(), &[20.0, 40.0]);
        assert_eq!(store.get(1).unwrap().average(), 30.0);
    }
}

// =============================================================================
// Stability Tests
// =============================================================================

#[test]
fn test_equal_averages_keep_relative_order() {
    for method in METHODS {
        let mut store = store_from(&[(10, 75.0), (3, 60.0), (8, 75.0), (1, 60.0), (5, 75.0)]);
        store.sort(method, SortKey::Average);
        assert_eq!(ids(&store), vec![3, 1, 10, 8, 5], "method {}", method);
    }
}

#[test]
fn test_ungraded_students_keep_order() {
    for method in METHODS {
        let mut store = StudentStore::new();
        for id in [4, 2, 9] {
            store.add(id, "none").unwrap();
        }
        store.sort(method, SortKey::Average);
        assert_eq!(ids(&store), vec![4, 2, 9], "method {}", method);
    }
}

// =============================================================================
// Idempotence Tests
// =============================================================================

#[test]
fn test_sort_twice_same_order() {
    for method in METHODS {
        for key in [SortKey::Id, SortKey::Average] {
            let mut store = store_from(&[(3, 50.0), (1, 70.0), (2, 50.0), (5, 10.0)]);
            store.sort(method, key);
            let once = ids(&store);
            store.sort(method, key);
            assert_eq!(ids(&store), once, "method {} key {}", method, key);
        }
    }
}

// =============================================================================
// Work Counter Tests
// =============================================================================

#[test]
fn test_bubble_sorted_input_exits_after_one_pass() {
    let mut store = store_from(&[(1, 0.0), (3, 0.0), (5, 0.0)]);
    let stats = store.sort(SortMethod::Bubble, SortKey::Id);
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.comparisons, 2);
    assert_eq!(stats.moves, 0);
}

#[test]
fn test_insertion_sorted_input_is_linear() {
    let entries: Vec<(i32, f32)> = (0..20).map(|i| (i, 0.0)).collect();
    let mut store = store_from(&entries);
    let stats = store.sort(SortMethod::Insertion, SortKey::Id);
    assert_eq!(stats.comparisons, 19);
    assert_eq!(stats.moves, 0);
}

#[test]
fn test_merge_moves_every_element_per_level() {
    let entries: Vec<(i32, f32)> = (0..8).map(|i| (i, 0.0)).collect();
    let mut store = store_from(&entries);
    let stats = store.sort(SortMethod::Merge, SortKey::Id);
    // 7 merges over 3 levels of 8 elements
    assert_eq!(stats.passes, 7);
    assert_eq!(stats.moves, 24);
}

#[test]
fn test_sort_empty_and_single_are_noops() {
    for method in METHODS {
        let mut empty = StudentStore::new();
        assert_eq!(empty.sort(method, SortKey::Id).comparisons, 0);

        let mut single = store_from(&[(1, 1.0)]);
        let stats = single.sort(method, SortKey::Average);
        assert_eq!(stats.comparisons, 0);
        assert_eq!(ids(&single), vec![1]);
    }
}
