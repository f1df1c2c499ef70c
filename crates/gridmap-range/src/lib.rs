//! Key ranges for gridmap containers.
//!
//! This crate defines the [`KeyRange`] trait, the iterable coordinate
//! space that containers and cursors are built on, along with its three
//! families:
//!
//! - [`RegularRange`]: one contiguous integer axis, counting up or down
//! - [`CompositeRange`]: 1 to 4 regular axes stepped odometer style
//! - [`ListRange`]: an explicit, caller-ordered key sequence
//!
//! Every range maps keys to a dense rank (position in iteration order),
//! which containers use as the storage offset.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod composite;
pub mod key_range;
pub mod list;
pub mod regular;

#[cfg(test)]
pub(crate) mod compliance;

pub use composite::CompositeRange;
pub use key_range::{KeyRange, Keys};
pub use list::ListRange;
pub use regular::{Direction, RegularRange};
