//! Positions in the plane.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

use super::Vec2;

/// A position `(x, y)`. Structurally a `Vec2`, but combined with vector-only
/// operations only through a difference of points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance2(other).sqrt()
    }

    #[inline]
    pub fn distance2(self, other: Point) -> f64 {
        Vec2::from_point_to_point(self, other).length2()
    }

    #[inline]
    pub fn equals(self, other: Point, e: f64) -> bool {
        (self.x - other.x).abs() <= e && (self.y - other.y).abs() <= e
    }

    /// Displacement from the origin to this point.
    #[inline]
    pub fn to_vec(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Vec2;
    /// `p2 - p1` is the vector from `p1` to `p2`.
    #[inline]
    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::from_point_to_point(rhs, self)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;
    #[inline]
    fn add(self, v: Vec2) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vec2> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, v: Vec2) -> Point {
        Point::new(self.x - v.x, self.y - v.y)
    }
}

impl AddAssign<Vec2> for Point {
    #[inline]
    fn add_assign(&mut self, v: Vec2) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}
