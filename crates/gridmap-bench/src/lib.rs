//! Benchmark profiles for the gridmap containers.
//!
//! - [`signal_cube`]: a cube of writable signals
//! - [`port_row`]: a row of ports to bind against
//! - [`scattered_keys`]: deterministic lookup keys inside a cube

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridmap_container::{CubeMap, LinearMap};
use gridmap_core::{Key3, ShapeError};
use gridmap_test_utils::{Port, Signal};

/// Build a `side`³ cube of `u32` signals, each named after its key.
pub fn signal_cube(side: u32) -> Result<CubeMap<Signal<u32>>, ShapeError> {
    CubeMap::cube(side, side, side, |k| Signal::new(format!("sig[{k}]"), 0))
}

/// Build a row of `len` unbound ports.
pub fn port_row(len: u32) -> Result<LinearMap<Port<u32>>, ShapeError> {
    LinearMap::linear(len, |k| Port::new(format!("port[{k}]")))
}

/// `count` pseudo-random keys inside a `side`³ cube, the same on every run.
pub fn scattered_keys(side: u32, count: usize) -> Vec<Key3> {
    let side = u64::from(side.max(1));
    (0..count as u64)
        .map(|i| {
            let z = i.wrapping_mul(6364136223846793007) % side;
            let y = i.wrapping_mul(1442695040888963407) % side;
            let x = i.wrapping_mul(2862933555777941757) % side;
            Key3::new(z as i32, y as i32, x as i32)
        })
        .collect()
}
