//! Coordinate keys for regular grids and list-addressed axes.
//!
//! Every key family is its own type, so comparing a [`Key2`] against a
//! [`Key3`] is a compile error rather than a runtime failure.

use std::fmt;
use std::hash::Hash;

/// Common bound for everything usable as a container address.
///
/// Keys are plain values: cheap to clone, never shared-mutated. `Ord`
/// is the order used when keys are stored in ordered collections; it is
/// not necessarily the iteration order of a range.
pub trait Key: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

/// Names one axis of a regular grid.
///
/// `X` is the least significant (fastest varying) axis, `W` the most
/// significant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Axis index 0.
    X,
    /// Axis index 1.
    Y,
    /// Axis index 2.
    Z,
    /// Axis index 3.
    W,
}

impl Axis {
    /// All axes in precedence order, fastest first.
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Z, Axis::W];

    /// Position of this axis in precedence order (`X` = 0).
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
            Self::W => 3,
        }
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::W => "W",
        };
        f.write_str(name)
    }
}

/// A key made of one to four `i32` axis values.
///
/// Axis indices follow [`Axis::index`]: 0 is X. Indices at or above
/// [`DIM`](Self::DIM) read as `0` and writes to them are ignored, which
/// lets dimension-generic code treat missing higher axes as a single
/// fixed position.
pub trait GridKey: Key + Copy + Default {
    /// Number of axes.
    const DIM: usize;

    /// Value of the axis at `index`.
    fn axis(&self, index: usize) -> i32;

    /// Copy of `self` with the axis at `index` replaced.
    fn with_axis(self, index: usize, value: i32) -> Self;

    /// Build a key by asking `f` for each axis value, X first.
    fn from_fn(mut f: impl FnMut(usize) -> i32) -> Self {
        let mut key = Self::default();
        for i in 0..Self::DIM {
            key = key.with_axis(i, f(i));
        }
        key
    }
}

/// Key of a one-dimensional (linear) grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key1 {
    /// X coordinate.
    pub x: i32,
}

impl Key1 {
    /// Create a key from its X coordinate.
    pub const fn new(x: i32) -> Self {
        Self { x }
    }
}

impl From<i32> for Key1 {
    fn from(x: i32) -> Self {
        Self { x }
    }
}

impl fmt::Display for Key1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.x)
    }
}

impl Key for Key1 {}

impl GridKey for Key1 {
    const DIM: usize = 1;

    fn axis(&self, index: usize) -> i32 {
        match index {
            0 => self.x,
            _ => 0,
        }
    }

    fn with_axis(mut self, index: usize, value: i32) -> Self {
        if index == 0 {
            self.x = value;
        }
        self
    }
}

/// Key of a two-dimensional (square) grid.
///
/// Field order is most significant first, so the derived `Ord` compares
/// Y before X.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key2 {
    /// Y coordinate.
    pub y: i32,
    /// X coordinate.
    pub x: i32,
}

impl Key2 {
    /// Create a key; arguments are most significant first.
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }
}

impl fmt::Display for Key2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.y, self.x)
    }
}

impl Key for Key2 {}

impl GridKey for Key2 {
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> i32 {
        match index {
            0 => self.x,
            1 => self.y,
            _ => 0,
        }
    }

    fn with_axis(mut self, index: usize, value: i32) -> Self {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => {}
        }
        self
    }
}

/// Key of a three-dimensional (cube) grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key3 {
    /// Z coordinate.
    pub z: i32,
    /// Y coordinate.
    pub y: i32,
    /// X coordinate.
    pub x: i32,
}

impl Key3 {
    /// Create a key; arguments are most significant first.
    pub const fn new(z: i32, y: i32, x: i32) -> Self {
        Self { z, y, x }
    }
}

impl fmt::Display for Key3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.z, self.y, self.x)
    }
}

impl Key for Key3 {}

impl GridKey for Key3 {
    const DIM: usize = 3;

    fn axis(&self, index: usize) -> i32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => 0,
        }
    }

    fn with_axis(mut self, index: usize, value: i32) -> Self {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => {}
        }
        self
    }
}

/// Key of a four-dimensional grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key4 {
    /// W coordinate.
    pub w: i32,
    /// Z coordinate.
    pub z: i32,
    /// Y coordinate.
    pub y: i32,
    /// X coordinate.
    pub x: i32,
}

impl Key4 {
    /// Create a key; arguments are most significant first.
    pub const fn new(w: i32, z: i32, y: i32, x: i32) -> Self {
        Self { w, z, y, x }
    }
}

impl fmt::Display for Key4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.w, self.z, self.y, self.x)
    }
}

impl Key for Key4 {}

impl GridKey for Key4 {
    const DIM: usize = 4;

    fn axis(&self, index: usize) -> i32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => 0,
        }
    }

    fn with_axis(mut self, index: usize, value: i32) -> Self {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => {}
        }
        self
    }
}

/// Key of a list-addressed axis: an opaque caller token.
///
/// The order in which list keys are visited is the order of the list
/// they belong to, not `Ord` on the token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListKey<V>(pub V);

impl<V> ListKey<V> {
    /// The wrapped token.
    pub fn token(&self) -> &V {
        &self.0
    }

    /// Unwrap into the token.
    pub fn into_token(self) -> V {
        self.0
    }
}

impl<V> From<V> for ListKey<V> {
    fn from(v: V) -> Self {
        Self(v)
    }
}

impl<V: fmt::Display> fmt::Display for ListKey<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<V> Key for ListKey<V> where V: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display {}
