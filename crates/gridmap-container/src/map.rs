//! The dense element container.

use crate::config::Config;
use crate::cursor::Cursor;
use gridmap_core::{Bindable, BoundsError, RangeError, ShapeError, Writable};
use gridmap_range::{KeyRange, Keys};
use std::fmt;

/// Dense storage of one element per key of a range.
///
/// Elements are stored in rank order, which is the iteration order of
/// the map's range, so the element built for `range.key_at(i)` lives at
/// offset `i`. The shape is fixed at construction: elements are built
/// and configured exactly once and never added or removed afterwards.
///
/// Cursors ([`Cursor`]) borrow the map and iterate any sub-range of it.
///
/// # Examples
///
/// ```
/// use gridmap_container::SquareMap;
/// use gridmap_core::Key2;
///
/// let map = SquareMap::square(3, 2, |k: &Key2| k.y * 10 + k.x).unwrap();
/// assert_eq!(map.len(), 6);
/// assert_eq!(map.get(&Key2::new(2, 1)), Ok(&21));
/// assert_eq!(map.key_of(map.get(&Key2::new(1, 0)).unwrap()), Some(Key2::new(1, 0)));
/// ```
pub struct GridMap<R: KeyRange, T> {
    range: R,
    elements: Vec<T>,
}

impl<R: KeyRange, T> GridMap<R, T> {
    /// Build one element per key of `range`, in iteration order.
    pub fn new(range: R, mut factory: impl FnMut(&R::Key) -> T) -> Self {
        let elements: Vec<T> = range.iter().map(|key| factory(&key)).collect();
        log::debug!("built map over {range} with {} elements", elements.len());
        Self { range, elements }
    }

    /// Build one configured element per key of `range`.
    ///
    /// The configuration is validated before the factory runs, so on
    /// `Err(ShapeError)` no element has been created.
    pub fn configured<C>(
        range: R,
        config: Config<R::Key, C>,
        mut factory: impl FnMut(&R::Key, &C) -> T,
    ) -> Result<Self, ShapeError> {
        config.validate(&range)?;
        let elements = range
            .iter()
            .enumerate()
            .map(|(rank, key)| {
                config
                    .lookup(&key, rank)
                    .map(|c| factory(&key, c))
                    .ok_or_else(|| ShapeError::MissingConfig {
                        key: key.to_string(),
                    })
            })
            .collect::<Result<Vec<T>, ShapeError>>()?;
        log::debug!(
            "built configured map over {range} with {} elements",
            elements.len()
        );
        Ok(Self { range, elements })
    }

    /// The full range of the map.
    pub fn range(&self) -> &R {
        &self.range
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the map has no elements (never true: ranges are non-empty).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `key` addresses an element of this map.
    pub fn contains_key(&self, key: &R::Key) -> bool {
        self.range.contains(key)
    }

    /// The element at `key`.
    ///
    /// Returns `Err(BoundsError::OutOfShape)` if `key` is outside the map.
    pub fn get(&self, key: &R::Key) -> Result<&T, BoundsError> {
        match self.range.rank(key) {
            Some(rank) => self.elements.get(rank).ok_or_else(|| self.out_of_shape(key)),
            None => Err(self.out_of_shape(key)),
        }
    }

    /// Mutable access to the element at `key`.
    pub fn get_mut(&mut self, key: &R::Key) -> Result<&mut T, BoundsError> {
        let Some(rank) = self.range.rank(key) else {
            return Err(self.out_of_shape(key));
        };
        if rank >= self.elements.len() {
            return Err(self.out_of_shape(key));
        }
        Ok(&mut self.elements[rank])
    }

    /// All elements in storage order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Keys in storage order.
    pub fn keys(&self) -> Keys<'_, R> {
        self.range.iter()
    }

    /// Key of `element`, found by identity.
    ///
    /// Returns `None` if `element` is not stored in this map. Identity is
    /// address based, so the answer is meaningless for zero-sized `T`.
    pub fn key_of(&self, element: &T) -> Option<R::Key> {
        let offset = self
            .elements
            .iter()
            .position(|e| std::ptr::eq(e, element))?;
        self.range.key_at(offset)
    }

    /// Cursor at the first key of the map.
    pub fn begin(&self) -> Cursor<'_, R, T> {
        Cursor::new(self)
    }

    /// Cursor in the end state.
    pub fn end(&self) -> Cursor<'_, R, T> {
        Cursor::end(self)
    }

    /// Cursor over the whole map, positioned at `key`.
    ///
    /// Returns `Err(BoundsError::OutOfShape)` if `key` is outside the map.
    pub fn cursor_at(&self, key: R::Key) -> Result<Cursor<'_, R, T>, BoundsError> {
        if !self.range.contains(&key) {
            return Err(self.out_of_shape(&key));
        }
        Ok(Cursor::from_parts(self, self.range.clone(), key))
    }

    /// Cursor over the sub-range from `start` to `end`.
    ///
    /// The sub-range takes its own direction from the bounds, so slicing
    /// with reversed bounds iterates backwards.
    ///
    /// Returns `Err(RangeError)` if either bound is outside the map.
    pub fn slice(&self, start: &R::Key, end: &R::Key) -> Result<Cursor<'_, R, T>, RangeError> {
        let range = self.range.sub_range(start, end)?;
        let first = range.first();
        Ok(Cursor::from_parts(self, range, first))
    }

    /// Cursor over a caller-built `range`.
    ///
    /// Returns `Err(RangeError::OutOfParent)` if any key of `range` is
    /// outside the map.
    pub fn cursor(&self, range: R) -> Result<Cursor<'_, R, T>, RangeError> {
        Cursor::over(self, range)
    }

    /// Write `value` to every element.
    pub fn write_all<V: ?Sized>(&self, value: &V) -> usize
    where
        T: Writable<V>,
    {
        for element in &self.elements {
            element.write(value);
        }
        log::trace!("wrote {} elements over {}", self.elements.len(), self.range);
        self.elements.len()
    }

    /// Bind every element to the same `target`.
    pub fn bind_all<U: ?Sized>(&self, target: &U) -> usize
    where
        T: Bindable<U>,
    {
        for element in &self.elements {
            element.bind(target);
        }
        log::trace!("bound {} elements over {}", self.elements.len(), self.range);
        self.elements.len()
    }

    /// Bind elements pairwise to the elements of `other`, both in
    /// iteration order, stopping at the shorter map.
    pub fn bind_map<R2: KeyRange, U>(&self, other: &GridMap<R2, U>) -> usize
    where
        T: Bindable<U>,
    {
        let mut pairs = 0;
        for (element, target) in self.elements.iter().zip(other.elements()) {
            element.bind(target);
            pairs += 1;
        }
        log::trace!("bound {pairs} element pairs over {} and {}", self.range, other.range());
        pairs
    }

    fn out_of_shape(&self, key: &R::Key) -> BoundsError {
        BoundsError::OutOfShape {
            key: key.to_string(),
            bounds: self.range.to_string(),
        }
    }
}

impl<R: KeyRange, T: fmt::Debug> fmt::Debug for GridMap<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridMap")
            .field("range", &self.range)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<'a, R: KeyRange, T> IntoIterator for &'a GridMap<R, T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, R, T>;

    fn into_iter(self) -> Cursor<'a, R, T> {
        self.begin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmap_core::{Key1, Key2, Key3, ListKey};
    use gridmap_range::{CompositeRange, ListRange, RegularRange};
    use gridmap_test_utils::{Port, Signal};
    use indexmap::IndexMap;
    use std::cell::Cell;

    fn square(size_y: u32, size_x: u32) -> GridMap<CompositeRange<Key2>, Key2> {
        let range = CompositeRange::with_sizes(&[size_y, size_x], Key2::default()).unwrap();
        GridMap::new(range, |k| *k)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn factory_runs_once_per_key_in_order() {
        let calls = Cell::new(0);
        let map = GridMap::new(RegularRange::new(3, 0), |k| {
            calls.set(calls.get() + 1);
            k.x
        });
        assert_eq!(calls.get(), 4);
        assert_eq!(map.elements(), &[3, 2, 1, 0]);
    }

    #[test]
    fn configured_shared() {
        let map = GridMap::configured(RegularRange::new(0, 2), Config::Shared(7), |k, c| k.x + c)
            .unwrap();
        assert_eq!(map.elements(), &[7, 8, 9]);
    }

    #[test]
    fn configured_per_key() {
        let range = ListRange::new(['a', 'b'].map(ListKey)).unwrap();
        let mut cfg = IndexMap::new();
        cfg.insert(ListKey('b'), 2);
        cfg.insert(ListKey('a'), 1);
        let map = GridMap::configured(range, Config::PerKey(cfg), |_, c| *c).unwrap();
        assert_eq!(map.get(&ListKey('a')), Ok(&1));
        assert_eq!(map.get(&ListKey('b')), Ok(&2));
    }

    #[test]
    fn configured_sequence_in_storage_order() {
        let range = CompositeRange::new(Key2::new(1, 1), Key2::new(0, 0)).unwrap();
        let map = GridMap::configured(range, Config::Sequence(vec![10, 20, 30, 40]), |_, c| *c)
            .unwrap();
        assert_eq!(map.get(&Key2::new(1, 1)), Ok(&10));
        assert_eq!(map.get(&Key2::new(0, 0)), Ok(&40));
    }

    #[test]
    fn configuration_failure_builds_nothing() {
        let built = Cell::new(0);
        let range = RegularRange::new(0, 3);
        let result = GridMap::configured(range, Config::Sequence(vec![1, 2, 3]), |_, c: &i32| {
            built.set(built.get() + 1);
            *c
        });
        assert!(matches!(
            result,
            Err(ShapeError::ConfigLengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn missing_per_key_entry_builds_nothing() {
        let built = Cell::new(0);
        let mut cfg = IndexMap::new();
        cfg.insert(Key1::new(0), ());
        let result = GridMap::configured(RegularRange::new(0, 1), Config::PerKey(cfg), |_, _| {
            built.set(built.get() + 1);
        });
        assert!(matches!(result, Err(ShapeError::MissingConfig { key }) if key == "1"));
        assert_eq!(built.get(), 0);
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn get_round_trips_every_key() {
        let map = square(3, 4);
        for key in map.keys() {
            assert_eq!(map.get(&key), Ok(&key));
        }
    }

    #[test]
    fn get_outside_is_bounds_error() {
        let map = square(2, 2);
        assert_eq!(
            map.get(&Key2::new(2, 0)),
            Err(BoundsError::OutOfShape {
                key: "2,0".into(),
                bounds: "[0,0..=1,1]".into(),
            })
        );
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = GridMap::new(RegularRange::new(0, 2), |_| 0);
        *map.get_mut(&Key1::new(1)).unwrap() = 5;
        assert_eq!(map.elements(), &[0, 5, 0]);
        assert!(map.get_mut(&Key1::new(3)).is_err());
    }

    #[test]
    fn key_of_finds_stored_elements_only() {
        let map = GridMap::new(CompositeRange::<Key3>::with_sizes(&[2, 2, 2], Key3::default()).unwrap(), |k| *k);
        for key in map.keys() {
            assert_eq!(map.key_of(map.get(&key).unwrap()), Some(key));
        }
        let stranger = Key3::new(0, 0, 0);
        assert_eq!(map.key_of(&stranger), None);
    }

    #[test]
    fn storage_order_is_row_major() {
        let map = square(3, 2);
        let offsets: Vec<usize> = map
            .keys()
            .map(|k| (k.y * 2 + k.x) as usize)
            .collect();
        assert_eq!(offsets, (0..6).collect::<Vec<_>>());
    }

    // ── Bulk forwarding ─────────────────────────────────────────

    #[test]
    fn write_all_reaches_every_element() {
        let map = GridMap::new(RegularRange::new(0, 4), |k| Signal::new(format!("s{k}"), false));
        assert_eq!(map.write_all(&true), 5);
        assert!(map.elements().iter().all(|s| s.read()));
    }

    #[test]
    fn bind_all_to_one_target() {
        let ports = GridMap::new(RegularRange::new(0, 2), |k| Port::<bool>::new(format!("p{k}")));
        let signal = Signal::new("shared", false);
        assert_eq!(ports.bind_all(&signal), 3);
        assert!(ports.elements().iter().all(|p| p.bound_to() == Some("shared".to_string())));
    }

    #[test]
    fn bind_map_stops_at_shorter() {
        let ports = GridMap::new(RegularRange::new(0, 4), |k| Port::<bool>::new(format!("p{k}")));
        let signals = GridMap::new(RegularRange::new(0, 2), |k| Signal::new(format!("s{k}"), false));
        assert_eq!(ports.bind_map(&signals), 3);
        assert_eq!(ports.elements()[2].bound_to(), Some("s2".to_string()));
        assert_eq!(ports.elements()[3].bound_to(), None);
    }

    #[test]
    fn into_iterator_visits_in_order() {
        let map = square(2, 2);
        let seen: Vec<Key2> = (&map).into_iter().copied().collect();
        assert_eq!(
            seen,
            vec![
                Key2::new(0, 0),
                Key2::new(0, 1),
                Key2::new(1, 0),
                Key2::new(1, 1)
            ]
        );
    }
}
