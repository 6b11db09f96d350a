//! Free 2D vectors: displacement algebra with no position semantics.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Point, Rect};

/// Two-dimensional displacement `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `p1` (initial point) to `p2` (terminal point).
    #[inline]
    pub fn from_point_to_point(p1: Point, p2: Point) -> Self {
        Self::new(p2.x - p1.x, p2.y - p1.y)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length2().sqrt()
    }

    /// Squared length; prefer this wherever only a comparison is needed.
    #[inline]
    pub fn length2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` is CCW of `self`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// Unit vector in the same direction. Zero input yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Quarter turn clockwise: `(y, -x)`.
    #[inline]
    pub fn rotate90(self) -> Self {
        Self::new(self.y, -self.x)
    }

    #[inline]
    pub fn rotate180(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Quarter turn counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn rotate270(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Clamps a translation so that it does not carry `p` outside of `b`.
    ///
    /// Each axis is bounded independently; see [`Vec2::bound_x`].
    pub fn bound(self, p: Point, b: &Rect) -> Self {
        Self::new(Self::bound_x(self.x, p.x, b), Self::bound_y(self.y, p.y, b))
    }

    /// Bounds `dx` so that `x + dx` stays within `[b.left, b.right]`.
    pub fn bound_x(dx: f64, x: f64, b: &Rect) -> f64 {
        let side = if dx < 0.0 { b.left } else { b.right };
        if b.contains_x(x + dx) {
            dx
        } else {
            side - x
        }
    }

    /// Bounds `dy` so that `y + dy` stays within `[b.bottom, b.top]`.
    pub fn bound_y(dy: f64, y: f64, b: &Rect) -> f64 {
        let side = if dy < 0.0 { b.bottom } else { b.top };
        if b.contains_y(y + dy) {
            dy
        } else {
            side - y
        }
    }

    /// Miter vector joining `line1` into `line2`.
    ///
    /// Both lines are nonzero edge vectors listed counter-clockwise; the miter
    /// bisects their right-hand (outward) normals. Its length is the distance
    /// along the bisector at which both offset edges meet for the given
    /// `line_width`, capped at `miter_limit`.
    ///
    /// Antiparallel lines have no bisector and produce NaN components.
    pub fn miter(line1: Vec2, line2: Vec2, line_width: f64, miter_limit: f64) -> Self {
        let n1 = line1.rotate90().normalize();
        let n2 = line2.rotate90().normalize();
        let direction = (n1 + n2).normalize();
        let length = miter_limit.min(line_width / direction.dot(n2));
        direction * length
    }

    /// Component-wise comparison within tolerance `e`.
    #[inline]
    pub fn equals(self, other: Vec2, e: f64) -> bool {
        (self.x - other.x).abs() <= e && (self.y - other.y).abs() <= e
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, factor: f64) -> Vec2 {
        Vec2::new(self.x / factor, self.y / factor)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        self.rotate180()
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl From<Vector2<f64>> for Vec2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2<f64> {
    #[inline]
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}
