//! Bounded line segments.

use serde::{Deserialize, Serialize};

use super::{Point, Vec2};

/// Segment from `p1` to `p2`. May be zero-length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Vector from `p1` to `p2`.
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    #[inline]
    pub fn length2(&self) -> f64 {
        self.vector().length2()
    }

    /// Checks if `p` lies within `epsilon` of the segment.
    ///
    /// Parameterizes the segment as `p1 + b·t` and projects `p` onto it. A
    /// projection outside `t ∈ [0, 1]` is rejected outright, so points beyond
    /// either endpoint are never contained.
    ///
    /// A zero-length segment has no projection; it degenerates to a point and
    /// only contains points within `epsilon` of it.
    pub fn contains_point(&self, p: Point, epsilon: f64) -> bool {
        let a = self.p1;
        let b = self.vector();
        let v = p - a;
        let len2 = b.length2();
        if len2 == 0.0 {
            return v.length2() <= epsilon * epsilon;
        }
        let t = b.dot(v) / len2;
        if !(0.0..=1.0).contains(&t) {
            return false;
        }
        let closest = a + b * t;
        closest.distance2(p) <= epsilon * epsilon
    }

    #[inline]
    pub fn equals(&self, other: &LineSegment, e: f64) -> bool {
        self.p1.equals(other.p1, e) && self.p2.equals(other.p2, e)
    }
}
