//! Configuration fan-out for container construction.

use gridmap_core::{Key, ShapeError};
use gridmap_range::KeyRange;
use indexmap::IndexMap;

/// Where each element's configuration comes from.
///
/// The configuration type `C` is opaque to the container; it is handed
/// to the element factory alongside the element's key.
#[derive(Clone, Debug, PartialEq)]
pub enum Config<K: Key, C> {
    /// One value shared by every element.
    Shared(C),
    /// A distinct value per key. Every key of the shape must be present;
    /// entries for keys outside the shape are ignored.
    PerKey(IndexMap<K, C>),
    /// Values consumed in storage (iteration) order. The length must equal
    /// the element count.
    Sequence(Vec<C>),
}

impl<K: Key, C> Config<K, C> {
    /// Check that this configuration covers every element of `range`.
    ///
    /// Returns `Err(ShapeError::MissingConfig)` for the first key a
    /// per-key mapping lacks, or `Err(ShapeError::ConfigLengthMismatch)`
    /// for a sequence of the wrong length.
    pub fn validate<R>(&self, range: &R) -> Result<(), ShapeError>
    where
        R: KeyRange<Key = K>,
    {
        match self {
            Self::Shared(_) => Ok(()),
            Self::PerKey(map) => {
                if let Some(missing) = range.iter().find(|k| !map.contains_key(k)) {
                    return Err(ShapeError::MissingConfig {
                        key: missing.to_string(),
                    });
                }
                let unused = map.keys().filter(|k| !range.contains(k)).count();
                if unused > 0 {
                    log::debug!("ignoring {unused} configuration entries outside {range}");
                }
                Ok(())
            }
            Self::Sequence(values) => {
                if values.len() == range.len() {
                    Ok(())
                } else {
                    Err(ShapeError::ConfigLengthMismatch {
                        expected: range.len(),
                        actual: values.len(),
                    })
                }
            }
        }
    }

    /// Configuration for the element at `key`, which sits at `rank` in
    /// storage order.
    pub fn lookup(&self, key: &K, rank: usize) -> Option<&C> {
        match self {
            Self::Shared(value) => Some(value),
            Self::PerKey(map) => map.get(key),
            Self::Sequence(values) => values.get(rank),
        }
    }
}

impl<K: Key, C> From<IndexMap<K, C>> for Config<K, C> {
    fn from(map: IndexMap<K, C>) -> Self {
        Self::PerKey(map)
    }
}

impl<K: Key, C> From<Vec<C>> for Config<K, C> {
    fn from(values: Vec<C>) -> Self {
        Self::Sequence(values)
    }
}
