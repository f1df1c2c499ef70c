//! Error types for container construction, range slicing, lookup, and
//! cursor use.
//!
//! All of these are caller contract violations: synchronous, local, and
//! never retryable. Keys are carried as rendered strings so the error
//! types stay independent of the key family.

use crate::key::Axis;

/// A construction request describes an impossible shape or mismatched
/// configuration. Nothing is built when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// An axis was requested with zero elements.
    #[error("axis {axis} must have at least one element")]
    EmptyAxis {
        /// The offending axis.
        axis: Axis,
    },
    /// An axis does not fit the `i32` coordinate space from its start.
    #[error("axis {axis} of size {size} starting at {start} overflows i32 coordinates")]
    AxisTooLarge {
        /// The offending axis.
        axis: Axis,
        /// Requested element count.
        size: u32,
        /// Requested first coordinate.
        start: i32,
    },
    /// The number of per-axis sizes does not match the key dimensionality.
    #[error("expected {expected} axis sizes, got {actual}")]
    DimensionMismatch {
        /// Dimensionality of the key family.
        expected: usize,
        /// Number of sizes supplied.
        actual: usize,
    },
    /// The product of the axis sizes overflows `usize`.
    #[error("total element count overflows usize")]
    TooManyElements,
    /// A list axis was requested with no keys.
    #[error("list range must contain at least one key")]
    EmptyList,
    /// A list axis contains the same key twice.
    #[error("list range contains duplicate key {key}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },
    /// A per-key configuration mapping has no entry for a key of the shape.
    #[error("no configuration supplied for key {key}")]
    MissingConfig {
        /// The key without configuration.
        key: String,
    },
    /// A flat configuration sequence does not have one entry per element.
    #[error("configuration sequence has {actual} entries, shape has {expected} elements")]
    ConfigLengthMismatch {
        /// Element count of the shape.
        expected: usize,
        /// Length of the supplied sequence.
        actual: usize,
    },
}

/// A requested sub-range does not lie within its parent range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A bound of the sub-range is outside the parent.
    #[error("key {key} is outside the parent range {bounds}")]
    OutOfParent {
        /// The offending bound.
        key: String,
        /// Human-readable description of the parent range.
        bounds: String,
    },
    /// Walking the parent from `start` never reaches `end`.
    #[error("key {end} is not reachable from {start} in the parent range")]
    Unreachable {
        /// Where the walk began.
        start: String,
        /// The bound that was never visited.
        end: String,
    },
}

/// Coordinate lookup outside the container's shape.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// The key is not part of the container.
    #[error("key {key} is outside the container shape {bounds}")]
    OutOfShape {
        /// The offending key.
        key: String,
        /// Human-readable description of the container's range.
        bounds: String,
    },
}

/// Dereference or bulk operation on a cursor that already reached its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IteratorMisuse {
    /// The cursor is in its terminal state.
    #[error("cursor is at end")]
    AtEnd,
}

/// Any error raised by the container layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// See [`ShapeError`].
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),
    /// See [`BoundsError`].
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// See [`IteratorMisuse`].
    #[error(transparent)]
    Misuse(#[from] IteratorMisuse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = ShapeError::EmptyAxis { axis: Axis::Y };
        assert_eq!(e.to_string(), "axis Y must have at least one element");

        let e = ShapeError::ConfigLengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            e.to_string(),
            "configuration sequence has 3 entries, shape has 4 elements"
        );

        let e = RangeError::OutOfParent {
            key: "5".into(),
            bounds: "[0..=3]".into(),
        };
        assert_eq!(e.to_string(), "key 5 is outside the parent range [0..=3]");
    }

    #[test]
    fn map_error_is_transparent() {
        let e: MapError = IteratorMisuse::AtEnd.into();
        assert_eq!(e.to_string(), "cursor is at end");
        assert!(matches!(e, MapError::Misuse(IteratorMisuse::AtEnd)));
    }
}
