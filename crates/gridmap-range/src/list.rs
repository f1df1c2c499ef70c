//! Explicitly enumerated key sequences.

use crate::key_range::KeyRange;
use gridmap_core::{Key, RangeError, ShapeError};
use indexmap::IndexSet;
use std::fmt;

/// A range whose keys and their order are given explicitly.
///
/// The keys need not be contiguous or sorted: iteration follows the order
/// in which they were supplied. A `ListRange` can also snapshot a slice
/// of any other range family via [`snapshot`](Self::snapshot), turning
/// it into an enumerated sequence.
///
/// Keys are stored in an [`IndexSet`], so [`rank`](KeyRange::rank),
/// [`contains`](KeyRange::contains), and
/// [`next_key`](KeyRange::next_key) are O(1).
///
/// # Examples
///
/// ```
/// use gridmap_core::ListKey;
/// use gridmap_range::{KeyRange, ListRange};
///
/// let names = ListRange::new(['b', 'a', 'c'].map(ListKey)).unwrap();
/// assert_eq!(names.first(), ListKey('b'));
/// assert_eq!(names.rank(&ListKey('c')), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct ListRange<K: Key> {
    keys: IndexSet<K>,
}

impl<K: Key> ListRange<K> {
    /// Create a range visiting `keys` in the given order.
    ///
    /// Returns `Err(ShapeError::EmptyList)` for an empty sequence, or
    /// `Err(ShapeError::DuplicateKey)` if a key repeats.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Result<Self, ShapeError> {
        let mut set = IndexSet::new();
        for key in keys {
            if set.contains(&key) {
                return Err(ShapeError::DuplicateKey {
                    key: key.to_string(),
                });
            }
            set.insert(key);
        }
        if set.is_empty() {
            return Err(ShapeError::EmptyList);
        }
        Ok(Self { keys: set })
    }

    /// Record every key `source` visits from `start` to `end`, inclusive.
    ///
    /// Returns `Err(RangeError::OutOfParent)` if a bound is not in
    /// `source`, or `Err(RangeError::Unreachable)` if stepping from
    /// `start` runs out before reaching `end`.
    pub fn snapshot<R>(source: &R, start: &K, end: &K) -> Result<Self, RangeError>
    where
        R: KeyRange<Key = K>,
    {
        for bound in [start, end] {
            if !source.contains(bound) {
                return Err(RangeError::OutOfParent {
                    key: bound.to_string(),
                    bounds: source.to_string(),
                });
            }
        }
        let unreachable = || RangeError::Unreachable {
            start: start.to_string(),
            end: end.to_string(),
        };
        let mut keys = IndexSet::new();
        let mut key = start.clone();
        loop {
            // A revisit means the source cycles without passing `end`.
            if !keys.insert(key.clone()) {
                return Err(unreachable());
            }
            if &key == end {
                break;
            }
            if !source.next_key(&mut key) {
                return Err(unreachable());
            }
        }
        Ok(Self { keys })
    }

    /// Append `key` to the end of the sequence.
    ///
    /// Returns `Err(ShapeError::DuplicateKey)` if it is already present.
    pub fn push(&mut self, key: K) -> Result<(), ShapeError> {
        if self.keys.contains(&key) {
            return Err(ShapeError::DuplicateKey {
                key: key.to_string(),
            });
        }
        self.keys.insert(key);
        Ok(())
    }

    /// The keys in iteration order.
    pub fn to_vec(&self) -> Vec<K> {
        self.keys.iter().cloned().collect()
    }
}

impl<K: Key> PartialEq for ListRange<K> {
    fn eq(&self, other: &Self) -> bool {
        // Order matters; `IndexSet` equality alone would ignore it.
        self.keys.iter().eq(other.keys.iter())
    }
}

impl<K: Key> Eq for ListRange<K> {}

impl<K: Key> fmt::Display for ListRange<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}; {} keys]",
            self.first(),
            self.last(),
            self.keys.len()
        )
    }
}

impl<K: Key> KeyRange for ListRange<K> {
    type Key = K;

    fn first(&self) -> K {
        self.keys[0].clone()
    }

    fn last(&self) -> K {
        self.keys[self.keys.len() - 1].clone()
    }

    fn next_key(&self, key: &mut K) -> bool {
        let Some(index) = self.keys.get_index_of(key) else {
            return false;
        };
        match self.keys.get_index(index + 1) {
            Some(next) => {
                *key = next.clone();
                true
            }
            None => false,
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn rank(&self, key: &K) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    fn key_at(&self, rank: usize) -> Option<K> {
        self.keys.get_index(rank).cloned()
    }

    fn sub_range(&self, start: &K, end: &K) -> Result<Self, RangeError> {
        Self::snapshot(self, start, end)
    }
}
