//! Named shapes: linear, square, cube, hyper, and list containers.

use crate::config::Config;
use crate::map::GridMap;
use gridmap_core::{Axis, GridKey, Key1, Key2, Key3, Key4, ListKey, ShapeError};
use gridmap_range::{CompositeRange, KeyRange, ListRange};
use std::fmt;
use std::hash::Hash;

/// One-dimensional container keyed by [`Key1`].
pub type LinearMap<T> = GridMap<CompositeRange<Key1>, T>;
/// Two-dimensional container keyed by [`Key2`].
pub type SquareMap<T> = GridMap<CompositeRange<Key2>, T>;
/// Three-dimensional container keyed by [`Key3`].
pub type CubeMap<T> = GridMap<CompositeRange<Key3>, T>;
/// Four-dimensional container keyed by [`Key4`].
pub type HyperMap<T> = GridMap<CompositeRange<Key4>, T>;
/// Container over an explicit list of tokens.
pub type ListMap<V, T> = GridMap<ListRange<ListKey<V>>, T>;

impl<K: GridKey, T> GridMap<CompositeRange<K>, T> {
    /// Ascending box with per-axis `sizes` (most significant first),
    /// starting at the origin.
    pub fn sized(sizes: &[u32], factory: impl FnMut(&K) -> T) -> Result<Self, ShapeError> {
        Self::from_bounds(sizes, K::default(), factory)
    }

    /// Configured variant of [`sized`](Self::sized).
    pub fn sized_configured<C>(
        sizes: &[u32],
        config: Config<K, C>,
        factory: impl FnMut(&K, &C) -> T,
    ) -> Result<Self, ShapeError> {
        Self::from_bounds_configured(sizes, K::default(), config, factory)
    }

    /// Ascending box with per-axis `sizes` whose first key is `start`.
    pub fn from_bounds(
        sizes: &[u32],
        start: K,
        factory: impl FnMut(&K) -> T,
    ) -> Result<Self, ShapeError> {
        let range = CompositeRange::with_sizes(sizes, start)?;
        Ok(Self::new(range, factory))
    }

    /// Configured variant of [`from_bounds`](Self::from_bounds).
    pub fn from_bounds_configured<C>(
        sizes: &[u32],
        start: K,
        config: Config<K, C>,
        factory: impl FnMut(&K, &C) -> T,
    ) -> Result<Self, ShapeError> {
        let range = CompositeRange::with_sizes(sizes, start)?;
        Self::configured(range, config, factory)
    }

    /// Box spanned by the corners `start` and `end`, both inclusive; an
    /// axis counts down where `end` is below `start`.
    ///
    /// Returns `Err(ShapeError::TooManyElements)` if the box holds more
    /// keys than `usize` can count. Nothing is built in that case.
    pub fn between(start: K, end: K, factory: impl FnMut(&K) -> T) -> Result<Self, ShapeError> {
        let range = CompositeRange::new(start, end)?;
        Ok(Self::new(range, factory))
    }

    /// Number of positions along `axis`; 1 above the key dimensionality.
    pub fn size(&self, axis: Axis) -> usize {
        self.range().size(axis)
    }

    /// Number of positions along X.
    pub fn size_x(&self) -> usize {
        self.size(Axis::X)
    }

    /// Number of positions along Y.
    pub fn size_y(&self) -> usize {
        self.size(Axis::Y)
    }

    /// Number of positions along Z.
    pub fn size_z(&self) -> usize {
        self.size(Axis::Z)
    }

    /// Number of positions along W.
    pub fn size_w(&self) -> usize {
        self.size(Axis::W)
    }
}

impl<T> LinearMap<T> {
    /// `size_x` elements keyed `0..size_x`.
    pub fn linear(size_x: u32, factory: impl FnMut(&Key1) -> T) -> Result<Self, ShapeError> {
        Self::sized(&[size_x], factory)
    }
}

impl<T> SquareMap<T> {
    /// `size_y` rows of `size_x` elements.
    pub fn square(
        size_y: u32,
        size_x: u32,
        factory: impl FnMut(&Key2) -> T,
    ) -> Result<Self, ShapeError> {
        Self::sized(&[size_y, size_x], factory)
    }
}

impl<T> CubeMap<T> {
    /// `size_z` planes of `size_y` rows of `size_x` elements.
    pub fn cube(
        size_z: u32,
        size_y: u32,
        size_x: u32,
        factory: impl FnMut(&Key3) -> T,
    ) -> Result<Self, ShapeError> {
        Self::sized(&[size_z, size_y, size_x], factory)
    }
}

impl<T> HyperMap<T> {
    /// Four-axis box of `size_w * size_z * size_y * size_x` elements.
    pub fn hyper(
        size_w: u32,
        size_z: u32,
        size_y: u32,
        size_x: u32,
        factory: impl FnMut(&Key4) -> T,
    ) -> Result<Self, ShapeError> {
        Self::sized(&[size_w, size_z, size_y, size_x], factory)
    }
}

impl<V, T> ListMap<V, T>
where
    V: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display,
{
    /// One element per token, in the given order.
    ///
    /// Returns `Err(ShapeError)` if `tokens` is empty or repeats a token.
    pub fn list(
        tokens: impl IntoIterator<Item = V>,
        factory: impl FnMut(&ListKey<V>) -> T,
    ) -> Result<Self, ShapeError> {
        let range = ListRange::new(tokens.into_iter().map(ListKey))?;
        Ok(Self::new(range, factory))
    }

    /// Tokens in storage order.
    pub fn tokens(&self) -> impl Iterator<Item = V> + '_ {
        self.range().iter().map(ListKey::into_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmap_core::{BoundsError, MapError};
    use indexmap::IndexMap;
    use proptest::prelude::*;

    #[test]
    fn linear_keys_and_sizes() {
        let map = LinearMap::linear(5, |k| k.x * 2).unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.size_x(), 5);
        assert_eq!(map.size_y(), 1);
        assert_eq!(map.get(&Key1::new(4)), Ok(&8));
    }

    #[test]
    fn square_sizes_follow_argument_order() {
        let map = SquareMap::square(3, 7, |_| ()).unwrap();
        assert_eq!(map.size_y(), 3);
        assert_eq!(map.size_x(), 7);
        assert_eq!(map.size_z(), 1);
        assert_eq!(map.len(), 21);
    }

    #[test]
    fn cube_and_hyper_element_counts() {
        let cube = CubeMap::cube(2, 3, 4, |k| *k).unwrap();
        assert_eq!(cube.len(), 24);
        assert_eq!(cube.size(Axis::Z), 2);
        let hyper = HyperMap::hyper(2, 2, 2, 2, |k| *k).unwrap();
        assert_eq!(hyper.len(), 16);
        assert_eq!(hyper.size_w(), 2);
        assert_eq!(hyper.keys().last(), Some(Key4::new(1, 1, 1, 1)));
    }

    #[test]
    fn zero_size_is_rejected_before_building() {
        let err = SquareMap::square(3, 0, |_| 0u8).unwrap_err();
        assert_eq!(err, ShapeError::EmptyAxis { axis: Axis::X });
        let err = CubeMap::cube(0, 1, 1, |_| 0u8).unwrap_err();
        assert_eq!(err, ShapeError::EmptyAxis { axis: Axis::Z });
    }

    #[test]
    fn sized_checks_dimension() {
        let err = CubeMap::<u8>::sized(&[2, 2], |_| 0).unwrap_err();
        assert_eq!(
            err,
            ShapeError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn from_bounds_offsets_keys() {
        let map = SquareMap::from_bounds(&[2, 2], Key2::new(-1, 10), |k| *k).unwrap();
        let keys: Vec<Key2> = map.keys().collect();
        assert_eq!(
            keys,
            vec![
                Key2::new(-1, 10),
                Key2::new(-1, 11),
                Key2::new(0, 10),
                Key2::new(0, 11)
            ]
        );
        assert_eq!(
            map.get(&Key2::new(0, 0)),
            Err(BoundsError::OutOfShape {
                key: "0,0".into(),
                bounds: "[-1,10..=0,11]".into(),
            })
        );
    }

    #[test]
    fn between_follows_corner_directions() {
        let map = SquareMap::between(Key2::new(1, 0), Key2::new(0, 1), |k| *k).unwrap();
        assert_eq!(
            map.elements(),
            &[
                Key2::new(1, 0),
                Key2::new(1, 1),
                Key2::new(0, 0),
                Key2::new(0, 1)
            ]
        );
    }

    #[test]
    fn between_rejects_uncountable_box_before_building() {
        let mut built = 0;
        let err = CubeMap::between(
            Key3::new(i32::MIN, i32::MIN, i32::MIN),
            Key3::new(i32::MAX, i32::MAX, i32::MAX),
            |_| built += 1,
        )
        .unwrap_err();
        assert_eq!(err, ShapeError::TooManyElements);
        assert_eq!(built, 0);
    }

    #[test]
    fn sized_configured_per_key() {
        let cfg: IndexMap<Key2, &str> = [
            (Key2::new(0, 0), "nw"),
            (Key2::new(0, 1), "ne"),
            (Key2::new(1, 0), "sw"),
            (Key2::new(1, 1), "se"),
        ]
        .into_iter()
        .collect();
        let map = SquareMap::sized_configured(&[2, 2], cfg.into(), |_, c| c.to_string()).unwrap();
        assert_eq!(map.get(&Key2::new(1, 0)).map(String::as_str), Ok("sw"));
    }

    #[test]
    fn from_bounds_configured_sequence() {
        let map = LinearMap::from_bounds_configured(
            &[3],
            Key1::new(5),
            Config::Sequence(vec!['a', 'b', 'c']),
            |k, c| format!("{k}{c}"),
        )
        .unwrap();
        assert_eq!(map.elements(), &["5a", "6b", "7c"]);
    }

    #[test]
    fn list_preserves_token_order() {
        let map = ListMap::list(["clk", "rst", "en"], |k| k.token().len()).unwrap();
        assert_eq!(map.tokens().collect::<Vec<_>>(), vec!["clk", "rst", "en"]);
        assert_eq!(map.get(&ListKey("en")), Ok(&2));
        assert!(map.get(&ListKey("data")).is_err());
    }

    #[test]
    fn list_rejects_empty_and_duplicates() {
        assert_eq!(
            ListMap::<u8, ()>::list([], |_| ()).unwrap_err(),
            ShapeError::EmptyList
        );
        assert_eq!(
            ListMap::list([1, 2, 1], |_| ()).unwrap_err(),
            ShapeError::DuplicateKey { key: "1".into() }
        );
    }

    #[test]
    fn shape_errors_lift_into_map_error() {
        fn build() -> Result<LinearMap<u8>, MapError> {
            Ok(LinearMap::linear(0, |_| 0)?)
        }
        assert!(matches!(build(), Err(MapError::Shape(ShapeError::EmptyAxis { .. }))));
    }

    proptest! {
        #[test]
        fn element_count_is_product_of_sizes(
            z in 1u32..5,
            y in 1u32..5,
            x in 1u32..5,
        ) {
            let map = CubeMap::cube(z, y, x, |k| *k).unwrap();
            prop_assert_eq!(map.len(), (z * y * x) as usize);
            prop_assert_eq!(map.begin().count(), map.len());
            for key in map.keys() {
                prop_assert_eq!(map.key_of(map.get(&key).unwrap()), Some(key));
            }
        }
    }
}
