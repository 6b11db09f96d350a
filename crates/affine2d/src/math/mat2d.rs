//! 2×3 affine transforms.
//!
//! `[x', y'] = [[c1r1, c2r1, c3r1], [c1r2, c2r2, c3r2]] · [x, y, 1]`: columns
//! one and two are the linear part, column three the translation.
//!
//! Composition order: `left.concat(&right)` is the product `left · right`, so
//! `right` is applied first.

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use super::{Point, Rect, Vec2};
use crate::cfg::GeomCfg;

/// 2D affine map stored column-major.
///
/// Serializes as `[c1r1, c1r2, c2r1, c2r2, c3r1, c3r2]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 6]", into = "[f64; 6]")]
pub struct Mat2d {
    pub c1r1: f64,
    pub c1r2: f64,
    pub c2r1: f64,
    pub c2r2: f64,
    pub c3r1: f64,
    pub c3r2: f64,
}

/// How `Mat2d::rect_to_rect` fits a source rect into a destination rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleToFit {
    /// Uniform scale to fit, then center inside the destination.
    Center,
    /// Uniform scale to fit, then anchor at the bottom-right corner.
    End,
    /// Independent x/y scale so the source exactly covers the destination.
    #[default]
    Fill,
    /// Uniform scale to fit, then anchor at the top-left corner.
    Start,
}

impl ScaleToFit {
    /// The point of `r` that is matched between source and destination.
    fn anchor(self, r: &Rect) -> Point {
        match self {
            ScaleToFit::Center => r.center(),
            ScaleToFit::End => r.bottom_right(),
            ScaleToFit::Fill | ScaleToFit::Start => r.top_left(),
        }
    }
}

impl Default for Mat2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat2d {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            c1r1: 1.0,
            c1r2: 0.0,
            c2r1: 0.0,
            c2r2: 1.0,
            c3r1: 0.0,
            c3r2: 0.0,
        }
    }

    #[inline]
    pub const fn translate(v: Vec2) -> Self {
        Self {
            c3r1: v.x,
            c3r2: v.y,
            ..Self::identity()
        }
    }

    #[inline]
    pub const fn scale(v: Vec2) -> Self {
        Self {
            c1r1: v.x,
            c2r2: v.y,
            ..Self::identity()
        }
    }

    /// Uniform scale by `factor`.
    #[inline]
    pub const fn stretch(factor: f64) -> Self {
        Self::scale(Vec2::new(factor, factor))
    }

    /// Counter-clockwise rotation by `radians`.
    #[inline]
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::sin_cos(sin, cos)
    }

    /// Rotation given its sine and cosine directly.
    #[inline]
    pub const fn sin_cos(sin: f64, cos: f64) -> Self {
        Self {
            c1r1: cos,
            c1r2: sin,
            c2r1: -sin,
            c2r2: cos,
            c3r1: 0.0,
            c3r2: 0.0,
        }
    }

    /// Scale that carries `start` onto `end`, with its fixed point at `pivot`.
    pub fn scale_to_point(start: Point, end: Point, pivot: Point) -> Self {
        let v1 = start - pivot;
        let v2 = end - pivot;
        Self::scale(Vec2::new(v2.x / v1.x, v2.y / v1.y)).pivot(pivot)
    }

    /// Uniform scale plus rotation (no shear) that carries `start` onto `end`,
    /// with its fixed point at `pivot`.
    pub fn stretch_rotate_to_point(start: Point, end: Point, pivot: Point) -> Self {
        let v1 = start - pivot;
        let v2 = end - pivot;
        let l1 = v1.length();
        let l2 = v2.length();
        let n1 = v1 / l1;
        let n2 = v2 / l2;
        let r = Self::sin_cos(n1.cross(n2), n1.dot(n2));
        // rotate first, then stretch
        Self::stretch(l2 / l1).concat(&r).pivot(pivot)
    }

    /// Maps `src` onto `dst` under the given fit policy.
    ///
    /// Uniform modes scale by the smaller axis ratio so the result never
    /// overflows `dst`.
    pub fn rect_to_rect(src: &Rect, dst: &Rect, stf: ScaleToFit) -> Self {
        let src_point = stf.anchor(src);
        let dst_point = stf.anchor(dst);
        let sx = dst.width() / src.width();
        let sy = dst.height() / src.height();
        let scale = match stf {
            ScaleToFit::Fill => Self::scale(Vec2::new(sx, sy)),
            _ => Self::stretch(sx.min(sy)),
        };
        let mut out = Self::translate(-src_point.to_vec());
        out.pre_concat(&scale);
        out.pre_concat(&Self::translate(dst_point.to_vec()));
        out
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.c1r1 * self.c2r2 - self.c2r1 * self.c1r2
    }

    /// Inverse without a singularity check.
    ///
    /// A singular matrix (`determinant() == 0`) produces non-finite entries;
    /// use [`Mat2d::try_invert`] when that must be detected.
    pub fn invert(&self) -> Self {
        let det = self.determinant();
        let Self {
            c1r1,
            c1r2,
            c2r1,
            c2r2,
            c3r1,
            c3r2,
        } = *self;
        Self {
            c1r1: c2r2 / det,
            c1r2: -c1r2 / det,
            c2r1: -c2r1 / det,
            c2r2: c1r1 / det,
            c3r1: (c2r1 * c3r2 - c3r1 * c2r2) / det,
            c3r2: (c1r2 * c3r1 - c1r1 * c3r2) / det,
        }
    }

    /// Inverse, or `None` when `|det| <= GeomCfg::default().eps_det`.
    #[inline]
    pub fn try_invert(&self) -> Option<Self> {
        self.try_invert_eps(GeomCfg::default().eps_det)
    }

    pub fn try_invert_eps(&self, eps_det: f64) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() <= eps_det {
            return None;
        }
        Some(self.invert())
    }

    /// Matrix product `self · right` (`right` applies first).
    pub fn concat(&self, right: &Mat2d) -> Self {
        let l = self;
        Self {
            c1r1: l.c1r1 * right.c1r1 + l.c2r1 * right.c1r2,
            c2r1: l.c1r1 * right.c2r1 + l.c2r1 * right.c2r2,
            c3r1: l.c1r1 * right.c3r1 + l.c2r1 * right.c3r2 + l.c3r1,
            c1r2: l.c1r2 * right.c1r1 + l.c2r2 * right.c1r2,
            c2r2: l.c1r2 * right.c2r1 + l.c2r2 * right.c2r2,
            c3r2: l.c1r2 * right.c3r1 + l.c2r2 * right.c3r2 + l.c3r2,
        }
    }

    /// `self = left · self`: apply `left` after the current transform.
    #[inline]
    pub fn pre_concat(&mut self, left: &Mat2d) {
        *self = left.concat(self);
    }

    /// `self = self · right`: apply `right` before the current transform.
    #[inline]
    pub fn post_concat(&mut self, right: &Mat2d) {
        *self = self.concat(right);
    }

    /// `c · self · c⁻¹`.
    pub fn conjugate(&self, conjugator: &Mat2d) -> Self {
        conjugator.concat(&self.concat(&conjugator.invert()))
    }

    /// Moves the fixed point of this transform from the origin to `p`.
    pub fn pivot(&self, p: Point) -> Self {
        self.conjugate(&Self::translate(p.to_vec()))
    }

    #[inline]
    pub fn map_point(&self, Point { x, y }: Point) -> Point {
        Point::new(
            self.c1r1 * x + self.c2r1 * y + self.c3r1,
            self.c1r2 * x + self.c2r2 * y + self.c3r2,
        )
    }

    #[inline]
    pub fn map_point_in_place(&self, p: &mut Point) {
        *p = self.map_point(*p);
    }

    /// Maps a displacement through the linear part only.
    #[inline]
    pub fn map_vec(&self, Vec2 { x, y }: Vec2) -> Vec2 {
        Vec2::new(self.c1r1 * x + self.c2r1 * y, self.c1r2 * x + self.c2r2 * y)
    }

    /// Axis-aligned bounds of the four mapped corners of `r`.
    ///
    /// Under rotation or shear the image is a parallelogram; the result
    /// encloses all of it.
    pub fn map_rect(&self, r: &Rect) -> Rect {
        Rect::bounding(r.corners().into_iter().map(|c| self.map_point(c)))
    }

    /// Translation column.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.c3r1, self.c3r2)
    }

    #[inline]
    pub fn set_translation(&mut self, v: Vec2) {
        self.c3r1 = v.x;
        self.c3r2 = v.y;
    }

    pub fn equals(&self, other: &Mat2d, e: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= e)
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Column-major `[c1r1, c1r2, c2r1, c2r2, c3r1, c3r2]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 6] {
        [self.c1r1, self.c1r2, self.c2r1, self.c2r2, self.c3r1, self.c3r2]
    }

    #[inline]
    pub fn from_array([c1r1, c1r2, c2r1, c2r2, c3r1, c3r2]: [f64; 6]) -> Self {
        Self {
            c1r1,
            c1r2,
            c2r1,
            c2r2,
            c3r1,
            c3r2,
        }
    }
}

impl From<[f64; 6]> for Mat2d {
    fn from(a: [f64; 6]) -> Self {
        Mat2d::from_array(a)
    }
}

impl From<Mat2d> for [f64; 6] {
    fn from(m: Mat2d) -> Self {
        m.to_array()
    }
}

impl From<Mat2d> for Matrix3<f64> {
    /// Homogeneous 3×3 form with `[0, 0, 1]` as the last row.
    fn from(m: Mat2d) -> Self {
        Matrix3::new(
            m.c1r1, m.c2r1, m.c3r1, //
            m.c1r2, m.c2r2, m.c3r2, //
            0.0, 0.0, 1.0,
        )
    }
}

impl From<Matrix3<f64>> for Mat2d {
    /// Takes the top two rows; the projective row is ignored.
    fn from(m: Matrix3<f64>) -> Self {
        Mat2d {
            c1r1: m[(0, 0)],
            c1r2: m[(1, 0)],
            c2r1: m[(0, 1)],
            c2r2: m[(1, 1)],
            c3r1: m[(0, 2)],
            c3r2: m[(1, 2)],
        }
    }
}
