//! World-space positions with planar distance

use std::fmt;
use std::ops::{Add, Sub};

/// A point in grid world space
///
/// `z` is carried so presentations living in a layered scene keep their depth,
/// but lattice addressing and snap distance only ever look at `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
    /// Depth, ignored by planar queries
    pub z: f32,
}

impl Position {
    /// The world origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Planar position with zero depth
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Position with an explicit depth
    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the xy-plane
    pub fn planar_distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::with_depth(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::with_depth(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
