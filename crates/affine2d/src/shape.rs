//! World-space placement of a shared mesh.
//!
//! A `Shape` owns one affine matrix (model → world) and shares its mesh
//! through an `Arc`. All transforms compose onto the matrix; the mesh is never
//! touched. The mesh is assumed centered at its model origin, so the
//! translation column doubles as the shape's center.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::math::{LineSegment, Mat2d, Point, Rect, ScaleToFit, Vec2};
use crate::mesh::{Mesh, MeshKind};

#[derive(Clone, Debug)]
pub struct Shape {
    mesh: Arc<Mesh>,
    matrix: Mat2d,
}

impl Shape {
    pub fn new(mesh: Arc<Mesh>) -> Self {
        Self::with_matrix(mesh, Mat2d::identity())
    }

    pub fn with_matrix(mesh: Arc<Mesh>, matrix: Mat2d) -> Self {
        Self { mesh, matrix }
    }

    #[inline]
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    /// Model → world transform.
    #[inline]
    pub fn matrix(&self) -> &Mat2d {
        &self.matrix
    }

    #[inline]
    pub fn set_matrix(&mut self, matrix: Mat2d) {
        self.matrix = matrix;
    }

    /// World position of the model origin.
    #[inline]
    pub fn center(&self) -> Point {
        self.matrix.translation().to_point()
    }

    #[inline]
    pub fn set_center(&mut self, c: Point) {
        self.matrix.set_translation(c.to_vec());
    }

    /// World-space bounds.
    ///
    /// Polygons union their mapped vertices, which stays exact under rotation
    /// and shear. Ellipses use the closed-form bounds of the transformed curve
    /// rather than of its drawing quad.
    pub fn bounds(&self) -> Rect {
        match self.mesh.kind() {
            MeshKind::Ellipse(e) => e.transformed_bounds(&self.matrix),
            MeshKind::Polygon | MeshKind::Rectangle(_) => Rect::bounding(
                self.mesh
                    .vertices()
                    .iter()
                    .map(|v| self.matrix.map_point(v.to_point())),
            ),
        }
    }

    /// Moves and resizes the shape so its bounds become `dst`, keeping its
    /// orientation.
    pub fn set_bounds(&mut self, dst: &Rect) {
        let fit = Mat2d::rect_to_rect(&self.bounds(), dst, ScaleToFit::Fill);
        self.transform(&fit);
    }

    /// World position of mesh vertex `index`.
    pub fn vertex_at(&self, index: usize) -> Result<Point> {
        let vertices = self.mesh.vertices();
        let v = vertices.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: vertices.len(),
        })?;
        Ok(self.map_point_to_world(v.to_point()))
    }

    #[inline]
    pub fn map_point_to_world(&self, model: Point) -> Point {
        self.matrix.map_point(model)
    }

    /// Inverse mapping; non-finite for a collapsed (singular) shape.
    #[inline]
    pub fn map_point_to_model(&self, world: Point) -> Point {
        self.matrix.invert().map_point(world)
    }

    /// Checks if the world-space point `p` lies inside the shape.
    pub fn contains_point(&self, p: Point) -> bool {
        self.mesh.contains_point(self.map_point_to_model(p))
    }

    /// Applies `m` after the current transform.
    pub fn transform(&mut self, m: &Mat2d) {
        self.matrix.pre_concat(m);
    }

    pub fn translate(&mut self, v: Vec2) {
        self.transform(&Mat2d::translate(v));
    }

    /// Per-axis scale about the current center.
    pub fn scale(&mut self, v: Vec2) {
        self.transform(&Mat2d::scale(v).pivot(self.center()));
    }

    /// Uniform scale about the current center.
    pub fn stretch(&mut self, factor: f64) {
        self.transform(&Mat2d::stretch(factor).pivot(self.center()));
    }

    /// Counter-clockwise rotation about the current center.
    pub fn rotate(&mut self, radians: f64) {
        self.transform(&Mat2d::rotate(radians).pivot(self.center()));
    }

    /// Replaces the transform with the one fitting the mesh bounds into `dst`.
    pub fn scale_to_fit(&mut self, dst: &Rect, mode: ScaleToFit) {
        self.matrix = Mat2d::rect_to_rect(&self.mesh.bounds(), dst, mode);
    }

    /// Replaces the transform so the mesh's top-center lands on `segment.p1`
    /// and its bottom-center on `segment.p2`.
    ///
    /// Translation first, then a uniform stretch and rotation pivoted at `p1`,
    /// so the mesh keeps its aspect.
    pub fn stretch_across(&mut self, segment: &LineSegment) {
        let b = self.mesh.bounds();
        let cx = b.center_x();
        let t = Mat2d::translate(segment.p1 - Point::new(cx, b.top));
        self.matrix = t;
        let c = t.map_point(Point::new(cx, b.bottom));
        self.transform(&Mat2d::stretch_rotate_to_point(c, segment.p2, segment.p1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const E: f64 = 1e-9;

    fn star() -> Shape {
        Shape::new(Arc::new(Mesh::star(5, 0.6).unwrap()))
    }

    #[test]
    fn bounds_start_at_mesh_bounds() {
        let s = star();
        assert!(s.bounds().equals(&s.mesh().bounds(), E));
        assert_eq!(s.center(), Point::ORIGIN);
    }

    #[test]
    fn set_bounds_places_the_shape() {
        let mut s = star();
        let dst = Rect::dimensions(0.0, 0.0, 6.0, 12.0);
        s.set_bounds(&dst);
        assert!(s.bounds().equals(&dst, E));
        s.rotate(0.3);
        s.set_bounds(&dst);
        assert!(s.bounds().equals(&dst, E));
    }

    #[test]
    fn center_moves_bounds() {
        let mut s = star();
        let c = Point::new(3.0, 12.0);
        s.set_center(c);
        assert_eq!(s.center(), c);
        assert!(s.bounds().equals(&s.mesh().bounds().offset(c.to_vec()), E));
        assert_eq!(s.map_point_to_world(Point::ORIGIN), c);
        assert!(s.map_point_to_model(c).equals(Point::ORIGIN, E));
    }

    #[test]
    fn containment_follows_transforms() {
        let mut s = star();
        s.set_center(Point::new(9.0, 15.0));
        assert!(s.contains_point(s.center()));
        assert!(!s.contains_point(Point::ORIGIN));
    }

    #[test]
    fn collapsed_shape_contains_nothing() {
        let mut s = star();
        s.scale(Vec2::new(0.0, 1.0));
        assert!(!s.contains_point(Point::ORIGIN));
    }

    #[test]
    fn translate_moves_center() {
        let mut s = star();
        s.set_center(Point::new(1.0, 1.0));
        s.translate(Vec2::new(-12.0, 23.0));
        assert_eq!(s.center(), Point::new(-11.0, 24.0));
    }

    #[test]
    fn scale_and_stretch_pivot_at_center() {
        let mut s = star();
        s.set_center(Point::new(4.0, -2.0));
        let before = s.bounds();
        s.scale(Vec2::new(2.0, 4.0));
        assert!(s.center().equals(Point::new(4.0, -2.0), E));
        let after = s.bounds();
        assert!((after.width() - 2.0 * before.width()).abs() < E);
        assert!((after.height() - 4.0 * before.height()).abs() < E);

        let aspect = after.aspect();
        s.stretch(0.5);
        assert!(s.center().equals(Point::new(4.0, -2.0), E));
        assert!((s.bounds().aspect() - aspect).abs() < E);
    }

    #[test]
    fn rotate_pivots_at_center() {
        let mut s = star();
        s.set_center(Point::new(2.0, 3.0));
        let c = s.center();
        let v0 = s.vertex_at(0).unwrap();
        s.rotate(FRAC_PI_4);
        assert!(s.center().equals(c, E));
        let expected = Mat2d::rotate(FRAC_PI_4).pivot(c).map_point(v0);
        assert!(s.vertex_at(0).unwrap().equals(expected, E));
        assert!(s.vertex_at(10).is_err());
    }

    #[test]
    fn scale_to_fit_replaces_transform() {
        let mut s = star();
        s.rotate(1.0);
        s.translate(Vec2::new(100.0, 0.0));
        let dst = Rect::dimensions(0.0, 0.0, 12.0, 14.0);
        s.scale_to_fit(&dst, ScaleToFit::Fill);
        assert!(s.bounds().equals(&dst, E));
        s.scale_to_fit(&dst, ScaleToFit::Center);
        assert!(dst.contains(&s.bounds().inset(Vec2::new(E, E))));
        assert!((s.bounds().center_y() - dst.center_y()).abs() < E);
    }

    #[test]
    fn stretch_across_maps_top_and_bottom() {
        let mut hex = Shape::new(Arc::new(Mesh::regular_polygon(6, false).unwrap()));
        let aspect = |s: &Shape| {
            let w = s.vertex_at(1).unwrap().distance(s.vertex_at(5).unwrap());
            let h = s.vertex_at(0).unwrap().distance(s.vertex_at(3).unwrap());
            w / h
        };
        let before = aspect(&hex);
        let line = LineSegment::new(Point::new(3.0, 12.0), Point::new(15.0, -6.0));
        hex.stretch_across(&line);
        assert!(hex.vertex_at(0).unwrap().equals(line.p1, 1e-6));
        assert!(hex.vertex_at(3).unwrap().equals(line.p2, 1e-6));
        assert!((aspect(&hex) - before).abs() < 1e-6);
    }

    #[test]
    fn shapes_share_one_mesh() {
        let mesh = Arc::new(Mesh::regular_polygon(5, true).unwrap());
        let mut a = Shape::new(Arc::clone(&mesh));
        let b = Shape::new(Arc::clone(&mesh));
        a.stretch(3.0);
        assert!(Arc::ptr_eq(a.mesh(), b.mesh()));
        assert_eq!(Arc::strong_count(&mesh), 3);
        assert!(b.bounds().equals(&mesh.bounds(), E));
    }

    #[test]
    fn ellipse_bounds_and_containment() {
        let mut e = Shape::new(Arc::new(Mesh::ellipse()));
        assert!(e.bounds().equals(&e.mesh().bounds(), E));
        let dst = Rect::dimensions(0.0, 0.0, 6.0, 12.0);
        e.set_bounds(&dst);
        assert!(e.bounds().equals(&dst, E));

        e.set_matrix(Mat2d::scale(Vec2::new(2.0, 1.0)));
        assert!(e.contains_point(Point::new(1.9, 0.0)));
        e.rotate(FRAC_PI_2);
        assert!(e.contains_point(Point::new(0.0, 1.9)));
        assert!(!e.contains_point(Point::new(1.9, 0.0)));
        // rotated ellipse bounds are exact, not those of the rotated quad
        e.set_matrix(Mat2d::rotate(FRAC_PI_4));
        assert!(e.bounds().equals(&Rect::new(-1.0, 1.0, 1.0, -1.0), E));
    }
}
