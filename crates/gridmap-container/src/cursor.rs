//! Cursors: positioned iteration over a map restricted to a range.

use crate::map::GridMap;
use gridmap_core::{Bindable, IteratorMisuse, MapError, RangeError, Writable};
use gridmap_range::KeyRange;
use std::fmt;
use std::iter::FusedIterator;

/// Position of a [`Cursor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CursorState<K> {
    /// Positioned at a valid key.
    Active(K),
    /// Terminal: the range is exhausted. A cursor never leaves this state.
    End,
}

/// A cursor over a [`GridMap`], restricted to one of its ranges.
///
/// A cursor owns its own copy of the range it walks, so any number of
/// cursors can traverse overlapping regions of the same map without
/// interfering. It starts at the range's first key (unless built in the
/// end state), moves with [`advance`](Self::advance), and becomes
/// [`CursorState::End`] for good once the range is exhausted.
///
/// # Equality
///
/// Two end cursors are always equal. Two active cursors are equal when
/// they borrow the same map and sit at the same key. An active cursor
/// never equals an end cursor.
///
/// # Bulk operations
///
/// [`write`](Self::write), [`bind_all`](Self::bind_all), and
/// [`bind_pairs`](Self::bind_pairs) repeatedly dereference and advance.
/// Calling any of them, or [`get`](Self::get), on an end cursor is an
/// [`IteratorMisuse`] error.
///
/// A cursor is also a standard [`Iterator`] over element references, so
/// it can feed [`bind_pairs`](Self::bind_pairs) of a map of any shape.
pub struct Cursor<'a, R: KeyRange, T> {
    map: &'a GridMap<R, T>,
    range: R,
    state: CursorState<R::Key>,
}

impl<'a, R: KeyRange, T> Cursor<'a, R, T> {
    /// Cursor over the map's full range, at its first key.
    pub fn new(map: &'a GridMap<R, T>) -> Self {
        let range = map.range().clone();
        let first = range.first();
        Self::from_parts(map, range, first)
    }

    /// Cursor in the end state.
    pub fn end(map: &'a GridMap<R, T>) -> Self {
        Self {
            map,
            range: map.range().clone(),
            state: CursorState::End,
        }
    }

    /// Cursor over `range`, at its first key.
    ///
    /// Returns `Err(RangeError::OutOfParent)` naming the first key of
    /// `range` that the map does not contain.
    pub fn over(map: &'a GridMap<R, T>, range: R) -> Result<Self, RangeError> {
        if let Some(stray) = range.iter().find(|k| !map.contains_key(k)) {
            return Err(RangeError::OutOfParent {
                key: stray.to_string(),
                bounds: map.range().to_string(),
            });
        }
        let first = range.first();
        Ok(Self::from_parts(map, range, first))
    }

    /// Cursor over `range`, positioned at `key`.
    pub fn starting_at(map: &'a GridMap<R, T>, range: R, key: R::Key) -> Result<Self, RangeError> {
        if !range.contains(&key) {
            return Err(RangeError::OutOfParent {
                key: key.to_string(),
                bounds: range.to_string(),
            });
        }
        let mut cursor = Self::over(map, range)?;
        cursor.state = CursorState::Active(key);
        Ok(cursor)
    }

    /// Assemble a cursor from parts the caller has already validated.
    pub(crate) fn from_parts(map: &'a GridMap<R, T>, range: R, key: R::Key) -> Self {
        Self {
            map,
            range,
            state: CursorState::Active(key),
        }
    }

    /// The map being traversed.
    pub fn map(&self) -> &'a GridMap<R, T> {
        self.map
    }

    /// The range this cursor walks.
    pub fn range(&self) -> &R {
        &self.range
    }

    /// Current position.
    pub fn state(&self) -> &CursorState<R::Key> {
        &self.state
    }

    /// Current key, or `None` at the end.
    pub fn key(&self) -> Option<&R::Key> {
        match &self.state {
            CursorState::Active(key) => Some(key),
            CursorState::End => None,
        }
    }

    /// Whether the cursor is in its terminal state.
    pub fn is_end(&self) -> bool {
        self.state == CursorState::End
    }

    /// Step to the next key of the range.
    ///
    /// Returns `true` while the cursor is still active. Advancing an end
    /// cursor does nothing.
    pub fn advance(&mut self) -> bool {
        let CursorState::Active(key) = &mut self.state else {
            return false;
        };
        if self.range.next_key(key) {
            true
        } else {
            self.state = CursorState::End;
            false
        }
    }

    /// The element at the current key.
    ///
    /// Returns `Err(MapError::Misuse)` at the end.
    pub fn get(&self) -> Result<&'a T, MapError> {
        let key = self.key().ok_or(IteratorMisuse::AtEnd)?;
        Ok(self.map.get(key)?)
    }

    /// Write `value` to every element from the current key to the end of
    /// the map's full range.
    ///
    /// The broadcast follows the map's own iteration order, not this
    /// cursor's range: on a slice it keeps going past the slice until the
    /// map is exhausted. The cursor ends afterwards. Returns the number
    /// of elements written.
    pub fn write<V: ?Sized>(&mut self, value: &V) -> Result<usize, MapError>
    where
        T: Writable<V>,
    {
        let mut key = self.key().ok_or(IteratorMisuse::AtEnd)?.clone();
        let full = self.map.range();
        let mut written = 0;
        loop {
            self.map.get(&key)?.write(value);
            written += 1;
            if !full.next_key(&mut key) {
                break;
            }
        }
        self.state = CursorState::End;
        log::trace!("wrote {written} elements through end of {full}");
        Ok(written)
    }

    /// Bind every remaining element of this cursor's range to `target`.
    ///
    /// The cursor ends afterwards. Returns the number of elements bound.
    pub fn bind_all<U: ?Sized>(&mut self, target: &U) -> Result<usize, MapError>
    where
        T: Bindable<U>,
    {
        let mut bound = 0;
        self.get()?;
        while let CursorState::Active(key) = &self.state {
            self.map.get(key)?.bind(target);
            bound += 1;
            self.advance();
        }
        log::trace!("bound {bound} elements of {} to one target", self.range);
        Ok(bound)
    }

    /// Bind this cursor's elements pairwise, in lock-step, to the items
    /// of `source`.
    ///
    /// Stops as soon as either side runs out, so regions of different
    /// sizes and shapes can be connected partially. If `source` runs out
    /// first, the cursor stays on the first unbound key. Returns the
    /// number of pairs bound.
    pub fn bind_pairs<'b, U, I>(&mut self, source: I) -> Result<usize, MapError>
    where
        U: ?Sized + 'b,
        I: IntoIterator<Item = &'b U>,
        T: Bindable<U>,
    {
        self.get()?;
        let mut source = source.into_iter();
        let mut pairs = 0;
        while let CursorState::Active(key) = &self.state {
            let Some(target) = source.next() else {
                break;
            };
            self.map.get(key)?.bind(target);
            pairs += 1;
            self.advance();
        }
        log::trace!("bound {pairs} element pairs over {}", self.range);
        Ok(pairs)
    }

    /// Bind this cursor's elements pairwise to the whole of `source`, in
    /// its iteration order.
    pub fn bind_map<R2: KeyRange, U>(&mut self, source: &GridMap<R2, U>) -> Result<usize, MapError>
    where
        T: Bindable<U>,
    {
        self.bind_pairs(source.begin())
    }

    /// Turn the cursor into an iterator of `(key, element)` pairs.
    pub fn entries(self) -> Entries<'a, R, T> {
        Entries { cursor: self }
    }
}

impl<R: KeyRange, T> Clone for Cursor<'_, R, T> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            range: self.range.clone(),
            state: self.state.clone(),
        }
    }
}

impl<R: KeyRange, T> fmt::Debug for Cursor<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("range", &self.range)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: KeyRange, T> PartialEq for Cursor<'_, R, T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (CursorState::End, CursorState::End) => true,
            (CursorState::Active(a), CursorState::Active(b)) => {
                std::ptr::eq(self.map, other.map) && a == b
            }
            _ => false,
        }
    }
}

impl<'a, R: KeyRange, T> Iterator for Cursor<'a, R, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let element = self.get().ok()?;
        self.advance();
        Some(element)
    }
}

impl<R: KeyRange, T> FusedIterator for Cursor<'_, R, T> {}

/// Iterator of `(key, element)` pairs, created by [`Cursor::entries`].
pub struct Entries<'a, R: KeyRange, T> {
    cursor: Cursor<'a, R, T>,
}

impl<'a, R: KeyRange, T> Iterator for Entries<'a, R, T> {
    type Item = (R::Key, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor.key()?.clone();
        let element = self.cursor.get().ok()?;
        self.cursor.advance();
        Some((key, element))
    }
}
