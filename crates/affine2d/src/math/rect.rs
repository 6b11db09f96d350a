//! Axis-aligned rectangles in a y-up frame.

use serde::{Deserialize, Serialize};

use super::{Point, Vec2};

/// Axis-aligned box with `left/right` on x and `bottom/top` on y (y-up).
///
/// Invariants (not enforced):
/// - valid: `right >= left && top >= bottom`.
/// - empty: `left >= right || bottom >= top`.
/// - `width`/`height` are negative for a flipped rect; `sort` restores validity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub const fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Rect with its top-left corner at `(left, top)`, extending right by
    /// `width` and down by `height`.
    #[inline]
    pub fn dimensions(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top - height)
    }

    /// Smallest rect enclosing every point; the empty rect for no points.
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut iter = points.into_iter();
        let Some(p0) = iter.next() else {
            return Self::empty();
        };
        let mut bounds = Self::dimensions(p0.x, p0.y, 0.0, 0.0);
        for p in iter {
            bounds.union_point_in_place(p);
        }
        bounds
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width() / self.height()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        0.5 * (self.bottom + self.top)
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    /// Corners in counter-clockwise order starting at the top left.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
        ]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.bottom >= self.top
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.right >= self.left && self.top >= self.bottom
    }

    /// Smallest rect containing both inputs.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.min(other.left),
            self.top.max(other.top),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Expands to enclose `p`; unchanged if `p` is already inside.
    #[inline]
    pub fn union_point(&self, p: Point) -> Rect {
        let mut out = *self;
        out.union_point_in_place(p);
        out
    }

    #[inline]
    pub fn union_point_in_place(&mut self, Point { x, y }: Point) {
        self.left = x.min(self.left);
        self.top = y.max(self.top);
        self.right = x.max(self.right);
        self.bottom = y.min(self.bottom);
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.right >= other.left
            && other.right >= self.left
            && self.top >= other.bottom
            && other.top >= self.bottom
    }

    /// Overlap of two rects; flipped (invalid) when they do not intersect.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::new(
            self.left.max(other.left),
            self.top.min(other.top),
            self.right.min(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Moves every edge inward by `v` (outward for negative components).
    pub fn inset(&self, v: Vec2) -> Rect {
        Rect::new(
            self.left + v.x,
            self.top - v.y,
            self.right - v.x,
            self.bottom + v.y,
        )
    }

    /// Translation by `v`; width and height are preserved exactly.
    #[inline]
    pub fn offset(&self, v: Vec2) -> Rect {
        let mut out = *self;
        out.offset_in_place(v);
        out
    }

    #[inline]
    pub fn offset_in_place(&mut self, v: Vec2) {
        self.left += v.x;
        self.top += v.y;
        self.right += v.x;
        self.bottom += v.y;
    }

    #[inline]
    pub fn offset_x(&self, dx: f64) -> Rect {
        self.offset(Vec2::new(dx, 0.0))
    }

    #[inline]
    pub fn offset_y(&self, dy: f64) -> Rect {
        self.offset(Vec2::new(0.0, dy))
    }

    /// Scales the width by `factor`, keeping the horizontal center fixed.
    pub fn scale_x(&self, factor: f64) -> Rect {
        let cx = self.center_x();
        let half = 0.5 * self.width() * factor;
        Rect::new(cx - half, self.top, cx + half, self.bottom)
    }

    /// Scales the height by `factor`, keeping the vertical center fixed.
    pub fn scale_y(&self, factor: f64) -> Rect {
        let cy = self.center_y();
        let half = 0.5 * self.height() * factor;
        Rect::new(self.left, cy + half, self.right, cy - half)
    }

    /// Uniform scale about the center.
    pub fn stretch(&self, factor: f64) -> Rect {
        self.scale_x(factor).scale_y(factor)
    }

    /// Checks if `other` lies entirely inside `self` (edges inclusive).
    #[inline]
    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && other.right <= self.right
            && self.bottom <= other.bottom
            && other.top <= self.top
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }

    #[inline]
    pub fn contains_x(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }

    #[inline]
    pub fn contains_y(&self, y: f64) -> bool {
        self.bottom <= y && y <= self.top
    }

    /// Swaps flipped boundary pairs so the result is valid.
    pub fn sort(&self) -> Rect {
        let v_flipped = self.bottom > self.top;
        let h_flipped = self.left > self.right;
        Rect::new(
            if h_flipped { self.right } else { self.left },
            if v_flipped { self.bottom } else { self.top },
            if h_flipped { self.left } else { self.right },
            if v_flipped { self.top } else { self.bottom },
        )
    }

    pub fn equals(&self, other: &Rect, e: f64) -> bool {
        (self.left - other.left).abs() <= e
            && (self.top - other.top).abs() <= e
            && (self.right - other.right).abs() <= e
            && (self.bottom - other.bottom).abs() <= e
    }
}
