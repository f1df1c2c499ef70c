//! Gridmap: dense multidimensional containers for hardware-like elements.
//!
//! Keys and ranges describe a coordinate box or a named list; a
//! [`GridMap`](container::GridMap) builds one element per coordinate;
//! cursors slice it and drive writes and binds across regions. The
//! sub-crates are re-exported below as modules, and [`prelude`] gathers
//! the names a typical caller touches.
//!
//! # Quick start
//!
//! ```rust
//! use gridmap::prelude::*;
//! use std::cell::Cell;
//!
//! // A minimal element: a wire that remembers the last value driven on it.
//! struct Wire(Cell<u8>);
//! impl Writable<u8> for Wire {
//!     fn write(&self, value: &u8) {
//!         self.0.set(*value);
//!     }
//! }
//!
//! // A 4x4 bus of wires, all driven low.
//! let bus = SquareMap::square(4, 4, |_| Wire(Cell::new(0))).unwrap();
//!
//! // Drive every wire from row 2 onwards high.
//! let mut tail = bus.cursor_at(Key2::new(2, 0)).unwrap();
//! assert_eq!(tail.write(&1), Ok(8));
//! assert!(tail.is_end());
//!
//! let high = bus.begin().filter(|w| w.0.get() == 1).count();
//! assert_eq!(high, 8);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridmap-core` | Keys, axes, errors, element traits |
//! | [`range`] | `gridmap-range` | Regular, list, and composite key ranges |
//! | [`container`] | `gridmap-container` | Containers, configuration, cursors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Keys, axes, errors, and element traits (`gridmap-core`).
pub use gridmap_core as types;

/// Key ranges (`gridmap-range`).
///
/// The [`range::KeyRange`] trait and its families: [`range::RegularRange`],
/// [`range::CompositeRange`], and [`range::ListRange`].
pub use gridmap_range as range;

/// Containers and cursors (`gridmap-container`).
///
/// [`container::GridMap`] owns the elements; [`container::Cursor`] walks a
/// range of them and drives bulk writes and binds.
pub use gridmap_container as container;

/// Common imports for typical gridmap usage.
///
/// ```rust
/// use gridmap::prelude::*;
/// ```
pub mod prelude {
    // Keys
    pub use gridmap_core::{Axis, GridKey, Key, Key1, Key2, Key3, Key4, ListKey};

    // Element traits
    pub use gridmap_core::{Bindable, Writable};

    // Errors
    pub use gridmap_core::{BoundsError, IteratorMisuse, MapError, RangeError, ShapeError};

    // Ranges
    pub use gridmap_range::{CompositeRange, Direction, KeyRange, ListRange, RegularRange};

    // Containers
    pub use gridmap_container::{
        Config, CubeMap, Cursor, CursorState, GridMap, HyperMap, LinearMap, ListMap, SquareMap,
    };
}
