//! Single-axis contiguous integer ranges.

use crate::key_range::KeyRange;
use gridmap_core::{Axis, Key1, RangeError, ShapeError};
use std::fmt;

/// Counting direction of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Values increase from start to end.
    Up,
    /// Values decrease from start to end.
    Down,
}

impl Direction {
    /// Direction implied by a pair of bounds: `Up` unless `end < start`.
    pub fn between(start: i32, end: i32) -> Self {
        if end >= start {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// An inclusive interval `[start, end]` on one axis.
///
/// `start` may be greater than `end`, in which case the range counts
/// down. The direction is fixed at construction; a range with
/// `start == end` has exactly one value.
///
/// As a [`KeyRange`] it addresses [`Key1`] keys, so it can back a linear
/// container directly.
///
/// # Examples
///
/// ```
/// use gridmap_range::{Direction, KeyRange, RegularRange};
/// use gridmap_core::Key1;
///
/// let down = RegularRange::new(3, 1);
/// assert_eq!(down.direction(), Direction::Down);
/// let keys: Vec<Key1> = down.iter().collect();
/// assert_eq!(keys, vec![Key1::new(3), Key1::new(2), Key1::new(1)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegularRange {
    start: i32,
    end: i32,
    direction: Direction,
}

impl RegularRange {
    /// Create a range from `start` to `end`, both inclusive.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start,
            end,
            direction: Direction::between(start, end),
        }
    }

    /// Create an ascending range of `count` values beginning at `start`.
    ///
    /// Returns `Err(ShapeError::EmptyAxis)` if `count == 0`, or
    /// `Err(ShapeError::AxisTooLarge)` if the last value overflows `i32`.
    pub fn with_count(count: u32, start: i32) -> Result<Self, ShapeError> {
        Self::with_count_on(Axis::X, count, start)
    }

    /// Like [`with_count`](Self::with_count), naming `axis` in errors.
    pub fn with_count_on(axis: Axis, count: u32, start: i32) -> Result<Self, ShapeError> {
        if count == 0 {
            return Err(ShapeError::EmptyAxis { axis });
        }
        let end = i64::from(start) + i64::from(count) - 1;
        let end = i32::try_from(end).map_err(|_| ShapeError::AxisTooLarge {
            axis,
            size: count,
            start,
        })?;
        Ok(Self::new(start, end))
    }

    /// First value.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last value.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Counting direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of values, at least 1.
    pub fn count(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start)).unsigned_abs() as usize + 1
    }

    /// Whether `value` lies between the bounds, regardless of direction.
    pub fn contains_value(&self, value: i32) -> bool {
        let (lo, hi) = self.bounds();
        lo <= value && value <= hi
    }

    /// Step `value` one unit in the range's direction.
    ///
    /// Returns `false` and leaves `value` alone at the last value or when
    /// `value` is outside the range.
    pub fn step(&self, value: &mut i32) -> bool {
        if *value == self.end || !self.contains_value(*value) {
            return false;
        }
        match self.direction {
            Direction::Up => *value += 1,
            Direction::Down => *value -= 1,
        }
        true
    }

    /// Step `value`, restarting from `start` once it passes the end.
    ///
    /// Returns `false` exactly when it wrapped. Convenient for
    /// restartable single-axis loops.
    pub fn next_wrapping(&self, value: &mut i32) -> bool {
        if self.step(value) {
            true
        } else {
            *value = self.start;
            false
        }
    }

    /// Distance of `value` from `start`, counted in the range's direction.
    pub fn position(&self, value: i32) -> Option<usize> {
        self.contains_value(value)
            .then(|| (i64::from(value) - i64::from(self.start)).unsigned_abs() as usize)
    }

    /// The value `position` steps after `start`.
    pub fn value_at(&self, position: usize) -> Option<i32> {
        if position >= self.count() {
            return None;
        }
        let offset = position as i64;
        let value = match self.direction {
            Direction::Up => i64::from(self.start) + offset,
            Direction::Down => i64::from(self.start) - offset,
        };
        i32::try_from(value).ok()
    }

    /// Sub-range from `start` to `end` with its own direction.
    ///
    /// Both bounds must lie inside `self`; the result may count opposite
    /// to its parent.
    pub fn sub_range_values(&self, start: i32, end: i32) -> Result<Self, RangeError> {
        self.check_value(start)?;
        self.check_value(end)?;
        Ok(Self::new(start, end))
    }

    /// Sub-range between `a` and `b` that keeps this range's direction.
    ///
    /// The bounds may be given in either order.
    pub fn clip(&self, a: i32, b: i32) -> Result<Self, RangeError> {
        self.check_value(a)?;
        self.check_value(b)?;
        if Direction::between(a, b) == self.direction || a == b {
            Ok(Self::new(a, b))
        } else {
            Ok(Self::new(b, a))
        }
    }

    /// The same values, visited in the opposite order.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    fn bounds(&self) -> (i32, i32) {
        match self.direction {
            Direction::Up => (self.start, self.end),
            Direction::Down => (self.end, self.start),
        }
    }

    fn check_value(&self, value: i32) -> Result<(), RangeError> {
        if self.contains_value(value) {
            Ok(())
        } else {
            Err(RangeError::OutOfParent {
                key: value.to_string(),
                bounds: self.to_string(),
            })
        }
    }
}

impl fmt::Display for RegularRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.start, self.end)
    }
}

impl KeyRange for RegularRange {
    type Key = Key1;

    fn first(&self) -> Key1 {
        Key1::new(self.start)
    }

    fn last(&self) -> Key1 {
        Key1::new(self.end)
    }

    fn next_key(&self, key: &mut Key1) -> bool {
        self.step(&mut key.x)
    }

    fn contains(&self, key: &Key1) -> bool {
        self.contains_value(key.x)
    }

    fn len(&self) -> usize {
        self.count()
    }

    fn rank(&self, key: &Key1) -> Option<usize> {
        self.position(key.x)
    }

    fn key_at(&self, rank: usize) -> Option<Key1> {
        self.value_at(rank).map(Key1::new)
    }

    fn sub_range(&self, start: &Key1, end: &Key1) -> Result<Self, RangeError> {
        self.sub_range_values(start.x, end.x)
    }
}
