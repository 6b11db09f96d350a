//! Axis-aligned ellipses and the bounds of transformed unit circles.

use serde::{Deserialize, Serialize};

use super::{Mat2d, Point, Rect, Vec2};

/// Ellipse with semi-axes `rx`, `ry` centered at `c`, axis-aligned in its own
/// frame. Rotation is expressed by composing with a `Mat2d`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub rx: f64,
    pub ry: f64,
    pub c: Point,
}

impl Ellipse {
    #[inline]
    pub const fn new(rx: f64, ry: f64, c: Point) -> Self {
        Self { rx, ry, c }
    }

    #[inline]
    pub const fn circle(r: f64, c: Point) -> Self {
        Self::new(r, r, c)
    }

    /// Ellipse inscribed in `r`.
    pub fn from_rect(r: &Rect) -> Self {
        Self::new(0.5 * r.width(), 0.5 * r.height(), r.center())
    }

    /// Standard ellipse equation on the offset normalized per axis.
    pub fn contains_point(&self, p: Point) -> bool {
        let d = self.c - p;
        let sx = d.x / self.rx;
        let sy = d.y / self.ry;
        sx * sx + sy * sy <= 1.0
    }

    /// Axis-aligned bounds of this (untransformed) ellipse.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.c.x - self.rx,
            self.c.y + self.ry,
            self.c.x + self.rx,
            self.c.y - self.ry,
        )
    }

    /// Bounds of this ellipse after mapping it through `m`.
    pub fn transformed_bounds(&self, m: &Mat2d) -> Rect {
        let local = Mat2d::translate(self.c.to_vec())
            .concat(&Mat2d::scale(Vec2::new(self.rx, self.ry)));
        Self::measure_boundaries(&m.concat(&local))
    }

    /// Bounds of the unit circle mapped through `matrix`.
    ///
    /// Closed-form SVD of the linear part `[[a, b], [c, d]]`: the image is an
    /// ellipse with squared semi-axes `sx², sy² = (s1 ± s2) / 2` whose major
    /// axis sits at `phi`. Its axis-aligned half extents are
    /// `x = sqrt(sx² cos²φ + sy² sin²φ)` and `y = sqrt(sx² sin²φ + sy² cos²φ)`,
    /// placed around the translation column.
    ///
    /// Singular matrices collapse to a segment (or point) without NaN: the
    /// minor axis is clamped at zero against rounding.
    pub fn measure_boundaries(matrix: &Mat2d) -> Rect {
        let Mat2d {
            c1r1: a,
            c2r1: b,
            c3r1: tx,
            c1r2: c,
            c2r2: d,
            c3r2: ty,
        } = *matrix;

        let a2 = a * a;
        let b2 = b * b;
        let c2 = c * c;
        let d2 = d * d;
        let m = a * c + b * d;
        let n = a2 + b2 - c2 - d2;

        let phi = 0.5 * (2.0 * m).atan2(n);
        let (sin, cos) = phi.sin_cos();
        let cos2 = cos * cos;
        let sin2 = sin * sin;

        let s1 = a2 + b2 + c2 + d2;
        let s2 = (n * n + 4.0 * m * m).sqrt();
        let sx2 = 0.5 * (s1 + s2);
        let sy2 = (0.5 * (s1 - s2)).max(0.0);

        let x = (sx2 * cos2 + sy2 * sin2).sqrt();
        let y = (sx2 * sin2 + sy2 * cos2).sqrt();
        Rect::new(tx - x, ty + y, tx + x, ty - y)
    }

    pub fn equals(&self, other: &Ellipse, e: f64) -> bool {
        (self.rx - other.rx).abs() <= e
            && (self.ry - other.ry).abs() <= e
            && self.c.equals(other.c, e)
    }
}
