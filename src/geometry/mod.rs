//! Point types and the four predicate families.

mod incircle;
mod insphere;
pub(crate) mod orient2d;
mod orient3d;

pub use incircle::{incircle, incircle2p, incircle2p_fast, incircle_exact, incircle_fast, incircle_slow};
pub use insphere::{insphere, insphere_exact, insphere_fast, insphere_slow};
pub use orient2d::{orient2d, orient2d_exact, orient2d_fast, orient2d_slow};
pub use orient3d::{orient3d, orient3d_exact, orient3d_fast, orient3d_slow};

use crate::Float;

/// 2D coordinate represented with ordinary floating-point inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub x: Float,
    pub y: Float,
}

impl Coord {
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

impl From<(Float, Float)> for Coord {
    fn from(value: (Float, Float)) -> Self {
        Coord::new(value.0, value.1)
    }
}

/// 3D coordinate represented with ordinary floating-point inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord3 {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Coord3 {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }
}

impl From<(Float, Float, Float)> for Coord3 {
    fn from(value: (Float, Float, Float)) -> Self {
        Coord3::new(value.0, value.1, value.2)
    }
}
