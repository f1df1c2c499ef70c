//! KeyRange trait compliance test helpers.
//!
//! These functions verify that a range implementation satisfies the
//! invariants required by the trait contract. Reused across the regular,
//! list, and composite test modules.

use crate::key_range::KeyRange;
use indexmap::IndexSet;

/// Assert that iteration starts at `first` and ends at `last`.
pub fn assert_iteration_bounds<R: KeyRange>(range: &R) {
    let keys: Vec<R::Key> = range.iter().collect();
    assert_eq!(keys.first(), Some(&range.first()), "iteration does not start at first()");
    assert_eq!(keys.last(), Some(&range.last()), "iteration does not end at last()");
}

/// Assert that iteration visits exactly `len` unique keys.
pub fn assert_iteration_complete<R: KeyRange>(range: &R) {
    let keys: Vec<R::Key> = range.iter().collect();
    assert_eq!(
        keys.len(),
        range.len(),
        "iteration length ({}) != len ({})",
        keys.len(),
        range.len()
    );
    let unique: IndexSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), range.len(), "iteration has duplicates");
}

/// Assert that every visited key is contained.
pub fn assert_visited_keys_contained<R: KeyRange>(range: &R) {
    for key in range.iter() {
        assert!(range.contains(&key), "{key} visited but not contained in {range}");
    }
}

/// Assert that `rank` and `key_at` agree with iteration order.
pub fn assert_rank_matches_iteration<R: KeyRange>(range: &R) {
    for (i, key) in range.iter().enumerate() {
        assert_eq!(range.rank(&key), Some(i), "rank({key}) != {i}");
        assert_eq!(range.key_at(i).as_ref(), Some(&key), "key_at({i}) != {key}");
    }
    assert_eq!(range.key_at(range.len()), None, "key_at(len) should be None");
}

/// Assert that stepping past the last key fails without moving it.
pub fn assert_exhaustion_leaves_key<R: KeyRange>(range: &R) {
    let mut key = range.last();
    assert!(!range.has_next(&key), "last() reports a successor");
    assert!(!range.next_key(&mut key), "next_key(last()) succeeded");
    assert_eq!(key, range.last(), "next_key(last()) modified the key");
    range.reset(&mut key);
    assert_eq!(key, range.first(), "reset() did not return to first()");
}

/// Assert that the whole range is a valid sub-range of itself.
pub fn assert_self_sub_range<R: KeyRange>(range: &R) {
    let sub = range
        .sub_range(&range.first(), &range.last())
        .expect("sub_range(first, last) should succeed");
    let a: Vec<R::Key> = range.iter().collect();
    let b: Vec<R::Key> = sub.iter().collect();
    assert_eq!(a, b, "sub_range(first, last) iterates differently");
}

/// Run all compliance checks on a range.
pub fn run_full_compliance<R: KeyRange>(range: &R) {
    assert_iteration_bounds(range);
    assert_iteration_complete(range);
    assert_visited_keys_contained(range);
    assert_rank_matches_iteration(range);
    assert_exhaustion_leaves_key(range);
    assert_self_sub_range(range);
}
