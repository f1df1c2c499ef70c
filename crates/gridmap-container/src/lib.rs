//! Dense multidimensional containers of hardware-like elements.
//!
//! A [`GridMap`] owns one element per key of a range and stores them in
//! the range's iteration order. [`Cursor`]s borrow a map and walk any
//! sub-range of it, which is how regions of different containers are
//! written and wired together:
//!
//! ```
//! use gridmap_container::{LinearMap, SquareMap};
//! use gridmap_core::{Bindable, Key2};
//! use std::cell::Cell;
//!
//! struct Pin(Cell<Option<i32>>);
//! impl Bindable<i32> for Pin {
//!     fn bind(&self, target: &i32) {
//!         self.0.set(Some(*target));
//!     }
//! }
//!
//! let sources = LinearMap::linear(3, |k| k.x * 100).unwrap();
//! let pins = SquareMap::square(2, 2, |_| Pin(Cell::new(None))).unwrap();
//!
//! // Wire the bottom row, right to left, to the sources.
//! let mut row = pins.slice(&Key2::new(1, 1), &Key2::new(1, 0)).unwrap();
//! assert_eq!(row.bind_map(&sources), Ok(2));
//! assert_eq!(pins.get(&Key2::new(1, 1)).unwrap().0.get(), Some(0));
//! assert_eq!(pins.get(&Key2::new(1, 0)).unwrap().0.get(), Some(100));
//! assert_eq!(pins.get(&Key2::new(0, 0)).unwrap().0.get(), None);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cursor;
pub mod map;
pub mod shapes;

pub use config::Config;
pub use cursor::{Cursor, CursorState, Entries};
pub use map::GridMap;
pub use shapes::{CubeMap, HyperMap, LinearMap, ListMap, SquareMap};
