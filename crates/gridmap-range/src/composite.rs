//! Multi-axis ranges composed from one [`RegularRange`] per axis.

use crate::key_range::KeyRange;
use crate::regular::RegularRange;
use gridmap_core::{Axis, GridKey, RangeError, ShapeError};
use smallvec::SmallVec;
use std::fmt;
use std::marker::PhantomData;

/// An axis-aligned box of keys, one [`RegularRange`] per axis.
///
/// # Iteration order
///
/// Keys are visited odometer style: X is the fastest "digit", then Y, Z,
/// and W. Each axis counts in its own direction, so a composite range
/// can run backwards on some axes only. When an axis passes its end it
/// is reset to its first value and the next slower axis advances; when
/// the slowest axis passes its end the range is exhausted.
///
/// # Rank
///
/// The rank of a key is the mixed-radix number formed by the positions
/// of its axis values, X least significant:
/// `(((w * size_z + z) * size_y + y) * size_x + x)`. Because positions are
/// counted in each axis's direction, rank order equals iteration order.
///
/// # Examples
///
/// ```
/// use gridmap_core::Key2;
/// use gridmap_range::{CompositeRange, KeyRange};
///
/// // Y size 3, X size 2.
/// let range = CompositeRange::<Key2>::with_sizes(&[3, 2], Key2::default()).unwrap();
/// let keys: Vec<Key2> = range.iter().collect();
/// assert_eq!(keys[..3], [Key2::new(0, 0), Key2::new(0, 1), Key2::new(1, 0)]);
/// assert_eq!(range.len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompositeRange<K> {
    axes: SmallVec<[RegularRange; 4]>,
    _key: PhantomData<K>,
}

impl<K: GridKey> CompositeRange<K> {
    /// Create the box spanned by `start` and `end`, both inclusive.
    ///
    /// Each axis counts down where `end` is below `start` on that axis.
    ///
    /// Returns `Err(ShapeError::TooManyElements)` if the box holds more
    /// keys than `usize` can count.
    pub fn new(start: K, end: K) -> Result<Self, ShapeError> {
        let axes = (0..K::DIM)
            .map(|i| RegularRange::new(start.axis(i), end.axis(i)))
            .collect();
        Self::checked(axes)
    }

    /// Create an ascending box with the given per-axis element counts.
    ///
    /// `sizes` is listed most significant axis first, like the arguments
    /// of the key constructors: `[size_y, size_x]` for [`Key2`](gridmap_core::Key2).
    ///
    /// Returns `Err(ShapeError)` if the number of sizes does not match
    /// the key dimensionality, any size is zero, an axis overflows `i32`,
    /// or the element count overflows `usize`.
    pub fn with_sizes(sizes: &[u32], start: K) -> Result<Self, ShapeError> {
        if sizes.len() != K::DIM {
            return Err(ShapeError::DimensionMismatch {
                expected: K::DIM,
                actual: sizes.len(),
            });
        }
        let mut axes = SmallVec::with_capacity(K::DIM);
        for (i, (axis, &size)) in Axis::ALL.iter().zip(sizes.iter().rev()).enumerate() {
            axes.push(RegularRange::with_count_on(*axis, size, start.axis(i))?);
        }
        Self::checked(axes)
    }

    /// Compose already-built axis ranges, X first.
    ///
    /// Returns `Err(ShapeError::DimensionMismatch)` unless exactly
    /// `K::DIM` axes are given, or `Err(ShapeError::TooManyElements)` if
    /// the element count overflows `usize`.
    pub fn from_axes(axes: impl IntoIterator<Item = RegularRange>) -> Result<Self, ShapeError> {
        let axes: SmallVec<[RegularRange; 4]> = axes.into_iter().collect();
        if axes.len() != K::DIM {
            return Err(ShapeError::DimensionMismatch {
                expected: K::DIM,
                actual: axes.len(),
            });
        }
        Self::checked(axes)
    }

    /// Per-axis ranges, X first.
    pub fn axes(&self) -> &[RegularRange] {
        &self.axes
    }

    /// The range of one axis, or `None` above the key dimensionality.
    pub fn axis(&self, axis: Axis) -> Option<&RegularRange> {
        self.axes.get(axis.index())
    }

    /// Number of values along `axis`; axes above the key dimensionality
    /// count as a single position.
    pub fn size(&self, axis: Axis) -> usize {
        self.axis(axis).map_or(1, RegularRange::count)
    }

    /// Sub-box between `a` and `b` that keeps each axis's direction.
    ///
    /// Unlike [`sub_range`](KeyRange::sub_range), the corners may be given
    /// in any order per axis; the result always iterates the way `self`
    /// does.
    pub fn clip(&self, a: &K, b: &K) -> Result<Self, RangeError> {
        let mut axes = SmallVec::with_capacity(self.axes.len());
        for (i, axis) in self.axes.iter().enumerate() {
            let clipped = axis
                .clip(a.axis(i), b.axis(i))
                .map_err(|_| self.out_of_parent(a, b))?;
            axes.push(clipped);
        }
        Ok(Self {
            axes,
            _key: PhantomData,
        })
    }

    /// The same keys visited in exactly the opposite order.
    pub fn reversed(&self) -> Self {
        Self {
            axes: self.axes.iter().map(RegularRange::reversed).collect(),
            _key: PhantomData,
        }
    }

    /// Wrap `axes`, rejecting boxes whose key count overflows `usize`.
    ///
    /// Every sub-box of an accepted box is no larger, so `len` and `rank`
    /// on any range reachable from here cannot overflow.
    fn checked(axes: SmallVec<[RegularRange; 4]>) -> Result<Self, ShapeError> {
        axes.iter()
            .try_fold(1usize, |acc, axis| acc.checked_mul(axis.count()))
            .ok_or(ShapeError::TooManyElements)?;
        Ok(Self {
            axes,
            _key: PhantomData,
        })
    }

    /// Error naming whichever of the two bounds is outside `self`.
    fn out_of_parent(&self, a: &K, b: &K) -> RangeError {
        let offender = if self.contains(a) { b } else { a };
        RangeError::OutOfParent {
            key: offender.to_string(),
            bounds: self.to_string(),
        }
    }
}

impl<K: GridKey> fmt::Display for CompositeRange<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.first(), self.last())
    }
}

impl<K: GridKey> KeyRange for CompositeRange<K> {
    type Key = K;

    fn first(&self) -> K {
        K::from_fn(|i| self.axes.get(i).map_or(0, RegularRange::start))
    }

    fn last(&self) -> K {
        K::from_fn(|i| self.axes.get(i).map_or(0, RegularRange::end))
    }

    fn next_key(&self, key: &mut K) -> bool {
        if !self.contains(key) {
            return false;
        }
        let mut next = *key;
        for (i, axis) in self.axes.iter().enumerate() {
            let mut value = next.axis(i);
            if axis.step(&mut value) {
                *key = next.with_axis(i, value);
                return true;
            }
            // Carry: this digit rolls over, the next slower one advances.
            next = next.with_axis(i, axis.start());
        }
        false
    }

    fn contains(&self, key: &K) -> bool {
        self.axes
            .iter()
            .enumerate()
            .all(|(i, axis)| axis.contains_value(key.axis(i)))
    }

    fn len(&self) -> usize {
        self.axes.iter().map(RegularRange::count).product()
    }

    fn rank(&self, key: &K) -> Option<usize> {
        let mut rank = 0usize;
        for (i, axis) in self.axes.iter().enumerate().rev() {
            rank = rank
                .checked_mul(axis.count())?
                .checked_add(axis.position(key.axis(i))?)?;
        }
        Some(rank)
    }

    fn key_at(&self, rank: usize) -> Option<K> {
        if rank >= self.len() {
            return None;
        }
        let mut rest = rank;
        let mut key = K::default();
        for (i, axis) in self.axes.iter().enumerate() {
            let n = axis.count();
            key = key.with_axis(i, axis.value_at(rest % n)?);
            rest /= n;
        }
        Some(key)
    }

    fn sub_range(&self, start: &K, end: &K) -> Result<Self, RangeError> {
        let mut axes = SmallVec::with_capacity(self.axes.len());
        for (i, axis) in self.axes.iter().enumerate() {
            let sub = axis
                .sub_range_values(start.axis(i), end.axis(i))
                .map_err(|_| self.out_of_parent(start, end))?;
            axes.push(sub);
        }
        Ok(Self {
            axes,
            _key: PhantomData,
        })
    }
}
