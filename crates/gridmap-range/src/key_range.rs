//! The `KeyRange` trait and its key iterator.

use gridmap_core::{Key, RangeError};
use std::fmt;

/// An iterable coordinate space.
///
/// A range knows its first and last key, how to step from one key to the
/// next in its own iteration order, and how to map keys to their rank
/// (position in that order) and back. Ranges are plain values; cloning
/// gives an independent copy.
///
/// # Stepping contract
///
/// [`next_key`](Self::next_key) either advances the key and returns
/// `true`, or returns `false` and leaves the key untouched. Restarting is
/// always explicit through [`reset`](Self::reset).
///
/// Ranges are never empty: every constructor rejects empty shapes.
pub trait KeyRange: Clone + fmt::Debug + fmt::Display {
    /// The key family this range addresses.
    type Key: Key;

    /// First key in iteration order.
    fn first(&self) -> Self::Key;

    /// Last key in iteration order.
    fn last(&self) -> Self::Key;

    /// Advance `key` to its successor.
    ///
    /// Returns `false` without modifying `key` when `key` is the last key
    /// or is not part of the range.
    fn next_key(&self, key: &mut Self::Key) -> bool;

    /// Whether `key` has a successor, without moving it.
    fn has_next(&self, key: &Self::Key) -> bool {
        let mut probe = key.clone();
        self.next_key(&mut probe)
    }

    /// Move `key` back to [`first`](Self::first).
    fn reset(&self, key: &mut Self::Key) {
        *key = self.first();
    }

    /// Whether `key` lies inside the range, regardless of direction.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Number of keys in the range.
    fn len(&self) -> usize;

    /// Whether the range has no keys (never true: ranges are non-empty).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of `key` in iteration order.
    ///
    /// Satisfies `key_at(rank(k)?) == Some(k)` for every contained key.
    fn rank(&self, key: &Self::Key) -> Option<usize>;

    /// The key at `rank` in iteration order.
    fn key_at(&self, rank: usize) -> Option<Self::Key>;

    /// A range from `start` to `end` inside this one.
    ///
    /// Returns `Err(RangeError)` if either bound is outside `self`.
    fn sub_range(&self, start: &Self::Key, end: &Self::Key) -> Result<Self, RangeError>;

    /// Iterate over all keys in order.
    fn iter(&self) -> Keys<'_, Self> {
        Keys::new(self)
    }
}

/// Iterator over the keys of a [`KeyRange`], created by
/// [`KeyRange::iter`].
pub struct Keys<'a, R: KeyRange> {
    range: &'a R,
    next: Option<R::Key>,
}

impl<'a, R: KeyRange> Keys<'a, R> {
    /// Start at the range's first key.
    pub fn new(range: &'a R) -> Self {
        Self {
            range,
            next: Some(range.first()),
        }
    }

    /// Start at `key`, which must be contained in `range`; yields nothing
    /// otherwise.
    pub fn starting_at(range: &'a R, key: R::Key) -> Self {
        let next = range.contains(&key).then_some(key);
        Self { range, next }
    }
}

impl<R: KeyRange> Clone for Keys<'_, R> {
    fn clone(&self) -> Self {
        Self {
            range: self.range,
            next: self.next.clone(),
        }
    }
}

impl<R: KeyRange> fmt::Debug for Keys<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("range", self.range)
            .field("next", &self.next)
            .finish()
    }
}

impl<R: KeyRange> Iterator for Keys<'_, R> {
    type Item = R::Key;

    fn next(&mut self) -> Option<R::Key> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if self.range.next_key(&mut successor) {
            self.next = Some(successor);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.next {
            Some(key) => match self.range.rank(key) {
                Some(rank) => {
                    let remaining = self.range.len() - rank;
                    (remaining, Some(remaining))
                }
                None => (0, None),
            },
            None => (0, Some(0)),
        }
    }
}
