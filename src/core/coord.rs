//! Pixel coordinates and continuous path points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Integer pixel coordinate.
///
/// A pixel coordinate denotes the pixel's center. Ordering is by `x`, then
/// by `y`, which makes it usable as a deterministic graph vertex key.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord2D {
    /// Column index
    pub x: i32,
    /// Row index (grows downwards, as in image space)
    pub y: i32,
}

impl Coord2D {
    /// Create a new pixel coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &Coord2D) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Integer midpoint, computed per axis as `min + |diff| / 2`
    #[inline]
    pub fn midpoint(&self, other: &Coord2D) -> Coord2D {
        Coord2D::new(
            self.x.min(other.x) + (self.x - other.x).abs() / 2,
            self.y.min(other.y) + (self.y - other.y).abs() / 2,
        )
    }

    /// Continuous point at this pixel's center
    #[inline]
    pub fn to_point(self) -> PathPoint {
        PathPoint::new(f64::from(self.x), f64::from(self.y))
    }
}

impl fmt::Display for Coord2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Coord2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coord2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Coord2D::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for Coord2D {
    fn from((x, y): (i32, i32)) -> Self {
        Coord2D::new(x, y)
    }
}

/// Continuous point in pixel space (f64)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &PathPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Dot product (as vectors)
    #[inline]
    pub fn dot(&self, other: &PathPoint) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of 3D cross product)
    #[inline]
    pub fn cross(&self, other: &PathPoint) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Midpoint between two points
    #[inline]
    pub fn midpoint(&self, other: &PathPoint) -> PathPoint {
        PathPoint::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl From<Coord2D> for PathPoint {
    fn from(coord: Coord2D) -> Self {
        coord.to_point()
    }
}

impl Add for PathPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        PathPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for PathPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        PathPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for PathPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        PathPoint::new(self.x * scalar, self.y * scalar)
    }
}
