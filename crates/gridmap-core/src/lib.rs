//! Core types and traits for gridmap containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate keys ([`Key1`] to [`Key4`], [`ListKey`]), the error
//! taxonomy shared by the range and container layers, and the element
//! capabilities ([`Writable`], [`Bindable`]) bulk operations call into.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod key;

pub use element::{Bindable, Writable};
pub use error::{BoundsError, IteratorMisuse, MapError, RangeError, ShapeError};
pub use key::{Axis, GridKey, Key, Key1, Key2, Key3, Key4, ListKey};
