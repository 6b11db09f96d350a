//! Orthographic camera with pan and zoom bounded by a world rectangle.
//!
//! Purpose
//! - Keep `view`, the world area currently shown, consistent with the camera
//!   settings (`position`, `zoom`, viewport aspect) and expose it as a 4×4
//!   orthographic projection for the renderer.
//!
//! Assumptions and conventions
//! - `position` is measured from the world center; `(0, 0)` centers the view
//!   on the world.
//! - Pan and zoom requests are clamped, never rejected. Every mutator returns
//!   the change it actually applied; callers must use that instead of the
//!   request.
//! - `zoom_to_point` chains the two clamped primitives, so near the world
//!   edge both the zoom and the corrective pan may be clamped.

use crate::cfg::{CAMERA_FAR, CAMERA_NEAR};
use crate::math::{Mat2d, Point, Rect, Vec2};

/// What `Camera::zoom_to_point` actually applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomResult {
    /// Effective zoom factor.
    pub scale: f64,
    /// Effective corrective pan.
    pub offset: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    world: Rect,
    view: Rect,
    position: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    matrix: [f32; 16],
}

impl Camera {
    /// Camera showing all of `world` at zoom 1, centered.
    pub fn new(world: Rect, min_zoom: f64, max_zoom: f64) -> Self {
        let mut camera = Self {
            world,
            view: world,
            position: Point::ORIGIN,
            zoom: 1.0,
            min_zoom,
            max_zoom,
            matrix: [0.0; 16],
        };
        camera.update_matrix();
        camera
    }

    #[inline]
    pub fn world(&self) -> Rect {
        self.world
    }

    /// The world area currently in view.
    #[inline]
    pub fn view(&self) -> Rect {
        self.view
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    #[inline]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Column-major orthographic projection of `view`.
    #[inline]
    pub fn matrix(&self) -> &[f32; 16] {
        &self.matrix
    }

    /// Fits the view to a `vw × vh` viewport.
    ///
    /// Starts over from `world`, widens whichever axis is too narrow for the
    /// viewport aspect, then reapplies zoom and position.
    pub fn set_viewport(&mut self, vw: f64, vh: f64) {
        let mut view = self.world;
        let vr = vw / vh;
        let wr = self.world.aspect();
        if wr < vr {
            view = view.scale_x(vr / wr);
        } else {
            view = view.scale_y(wr / vr);
        }
        self.view = view
            .stretch(1.0 / self.zoom)
            .offset(self.position.to_vec());
        self.update_matrix();
        tracing::debug!(vw, vh, view = ?self.view, "camera: viewport");
    }

    /// Pans by `desired`, clamped per axis so the position stays inside the
    /// pannable region at the current zoom.
    ///
    /// The pannable region is `world` scaled by `(zoom - min_zoom) / zoom` and
    /// centered at the origin: at minimum zoom the camera cannot pan at all.
    pub fn offset(&mut self, desired: Vec2) -> Vec2 {
        let ratio = (self.zoom - self.min_zoom) / self.zoom;
        let size = Mat2d::stretch(ratio).map_rect(&self.world);
        let far = size.offset(-size.center().to_vec());
        let target = self.position + desired;

        let mut actual = desired;
        if target.x < far.left {
            actual.x = far.left - self.position.x;
        } else if target.x > far.right {
            actual.x = far.right - self.position.x;
        }
        if target.y < far.bottom {
            actual.y = far.bottom - self.position.y;
        } else if target.y > far.top {
            actual.y = far.top - self.position.y;
        }
        if actual != desired {
            tracing::debug!(requested = ?desired, actual = ?actual, "camera: pan clamped");
        }

        self.view.offset_in_place(actual);
        self.position += actual;
        self.update_matrix();
        actual
    }

    /// Multiplies the zoom by `desired`, clamped to `[min_zoom, max_zoom]`.
    ///
    /// The view shrinks about its own center. Returns the factor applied.
    pub fn zoom_in(&mut self, desired: f64) -> f64 {
        let target = self.zoom * desired;
        let actual = if target < self.min_zoom {
            self.min_zoom / self.zoom
        } else if target > self.max_zoom {
            self.max_zoom / self.zoom
        } else {
            desired
        };
        self.zoom = if actual == desired {
            target
        } else {
            tracing::debug!(requested = desired, actual, "camera: zoom clamped");
            self.zoom * actual
        };
        self.view = self.view.stretch(1.0 / actual);
        self.update_matrix();
        actual
    }

    /// Zooms by `desired` while keeping `focus` at the same place on screen,
    /// as far as the clamps allow.
    pub fn zoom_to_point(&mut self, desired: f64, focus: Point) -> ZoomResult {
        let norm_x = (focus.x - self.view.left) / self.view.width();
        let norm_y = (focus.y - self.view.bottom) / self.view.height();
        let scale = self.zoom_in(desired);
        let aft = Point::new(
            self.view.left + norm_x * self.view.width(),
            self.view.bottom + norm_y * self.view.height(),
        );
        let offset = self.offset(focus - aft);
        ZoomResult { scale, offset }
    }

    fn update_matrix(&mut self) {
        self.matrix = ortho(&self.view, CAMERA_NEAR, CAMERA_FAR);
    }
}

/// Orthographic projection of `clip` into clip space, column-major.
fn ortho(clip: &Rect, near: f64, far: f64) -> [f32; 16] {
    let width = clip.width();
    let height = clip.height();
    let depth = near - far;
    let mut out = [0.0f32; 16];
    out[0] = (2.0 / width) as f32;
    out[5] = (2.0 / height) as f32;
    out[10] = (1.0 / depth) as f32;
    out[12] = (-(clip.right + clip.left) / width) as f32;
    out[13] = (-(clip.top + clip.bottom) / height) as f32;
    out[14] = (-near / depth) as f32;
    out[15] = 1.0;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: f64 = 1e-9;

    fn camera() -> Camera {
        Camera::new(Rect::dimensions(-1.0, 1.0, 2.0, 2.0), 1.0, 10.0)
    }

    #[test]
    fn starts_on_the_whole_world() {
        let c = camera();
        assert_eq!(c.view(), c.world());
        assert_eq!(c.zoom(), 1.0);
        assert_eq!(c.position(), Point::ORIGIN);
        let m = c.matrix();
        assert_eq!(m[0], 1.0);
        assert_eq!(m[5], 1.0);
        assert_eq!(m[12], 0.0);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn viewport_sets_aspect() {
        let mut c = camera();
        c.set_viewport(200.0, 100.0);
        assert_eq!(c.view().aspect(), 2.0);
        assert_eq!(c.view().height(), 2.0);
        c.set_viewport(100.0, 400.0);
        assert!((c.view().aspect() - 0.25).abs() < E);
        assert_eq!(c.view().width(), 2.0);
    }

    #[test]
    fn no_pan_at_minimum_zoom() {
        let mut c = camera();
        let actual = c.offset(Vec2::new(0.5, 0.5));
        assert_eq!(actual, Vec2::ZERO);
        assert_eq!(c.position(), Point::ORIGIN);
    }

    #[test]
    fn pan_is_clamped_per_axis() {
        let mut c = camera();
        c.set_viewport(200.0, 100.0);
        c.zoom_in(2.0);
        // pannable region is the world scaled by 1/2: [-0.5, 0.5]²
        let view = c.view();
        let actual = c.offset(Vec2::new(2.0, -0.25));
        assert!(actual.equals(Vec2::new(0.5, -0.25), E));
        assert!(c.position().equals(Point::new(0.5, -0.25), E));
        assert!(c.view().equals(&view.offset(actual), E));
        assert!(c.world().contains_point(c.position()));

        let actual = c.offset(Vec2::new(0.1, -1.0));
        assert!(actual.equals(Vec2::new(0.0, -0.25), E));
    }

    #[test]
    fn zoom_is_clamped_at_max() {
        let mut c = camera();
        c.set_viewport(200.0, 100.0);
        let area = c.view().area();
        let pos = c.position();
        let actual = c.zoom_in(22.0);
        assert_eq!(actual, 10.0);
        assert_eq!(c.zoom(), c.max_zoom());
        assert!((c.view().area() - area / (actual * actual)).abs() < E);
        assert_eq!(c.position(), pos);
        assert_eq!(c.view().center(), Point::ORIGIN);
    }

    #[test]
    fn zoom_is_clamped_at_min() {
        let mut c = camera();
        c.zoom_in(4.0);
        let actual = c.zoom_in(0.1);
        assert!((actual - 0.25).abs() < E);
        assert!((c.zoom() - 1.0).abs() < E);
        assert!(c.view().equals(&c.world(), E));
    }

    #[test]
    fn zoom_to_point_keeps_focus_in_place() {
        let mut c = camera();
        c.set_viewport(100.0, 100.0);
        let focus = Point::new(0.5, 0.5);
        let before = c.view();
        let nx = (focus.x - before.left) / before.width();
        let area = before.area();
        let pos = c.position();

        let ZoomResult { scale, offset } = c.zoom_to_point(2.0, focus);
        assert_eq!(scale, 2.0);
        assert!((c.view().area() - area / (scale * scale)).abs() < E);
        assert!(c.position().equals(pos + offset, E));
        assert!(c.world().contains_point(c.position()));
        // focus keeps its normalized position within the view
        let after = c.view();
        assert!(((focus.x - after.left) / after.width() - nx).abs() < E);
    }

    #[test]
    fn zoom_to_point_near_edge_is_double_clamped() {
        let mut c = camera();
        let ZoomResult { scale, offset } = c.zoom_to_point(100.0, Point::new(1.0, 1.0));
        assert_eq!(scale, 10.0);
        // pannable region at zoom 10 is [-0.9, 0.9]²
        assert!(offset.equals(Vec2::new(0.9, 0.9), E));
        assert!(c.view().equals(&Rect::new(0.8, 1.0, 1.0, 0.8), E));
    }

    #[test]
    fn projection_maps_view_to_clip_space() {
        let mut c = camera();
        c.zoom_in(2.0);
        c.offset(Vec2::new(0.25, 0.0));
        let m = c.matrix();
        let v = c.view();
        let clip = |x: f64, y: f64| {
            (
                m[0] as f64 * x + m[12] as f64,
                m[5] as f64 * y + m[13] as f64,
            )
        };
        let (l, b) = clip(v.left, v.bottom);
        let (r, t) = clip(v.right, v.top);
        assert!((l + 1.0).abs() < 1e-6 && (b + 1.0).abs() < 1e-6);
        assert!((r - 1.0).abs() < 1e-6 && (t - 1.0).abs() < 1e-6);
        assert!(m[10] < 0.0);
    }
}
