//! Value types for planar affine geometry.
//!
//! Purpose
//! - Small `Copy` structs of `f64` with pure operations that return a fresh
//!   value. Hot paths get explicit `*_in_place` variants that write into
//!   `&mut self` instead of relying on shared output arguments.
//!
//! Assumptions and conventions
//! - y-up: `Rect::dimensions(left, top, w, h)` puts the bottom at `top - h`.
//! - `Vec2` is a free displacement, `Point` a position. Rotations and cross
//!   products live on `Vec2`; positions meet them through `Point - Point`.
//! - Equality is exact via `PartialEq`, or tolerance-bounded via `equals(.., e)`.
//! - Zero-length inputs to `normalize` and `/` yield NaN/Inf; callers with
//!   direction-dependent logic guard themselves.
//!
//! Code cross-refs: `mesh::PolygonMesh`, `stroke::Stroke`, `shape::Shape`, `camera::Camera`.

mod ellipse;
mod line_segment;
mod mat2d;
mod point;
mod rect;
mod vec2;

pub use ellipse::Ellipse;
pub use line_segment::LineSegment;
pub use mat2d::{Mat2d, ScaleToFit};
pub use point::Point;
pub use rect::Rect;
pub use vec2::Vec2;
