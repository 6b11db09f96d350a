//! 2D affine geometry kernel.
//!
//! Value types (`Vec2`, `Point`, `Rect`, `LineSegment`, `Mat2d`, `Ellipse`),
//! procedural meshes (regular polygons, stars, rectangles, border miters),
//! an incremental stroke tessellator, and the transform layer that positions
//! meshes in world space (`Shape`) and frames them for display (`Camera`).
//!
//! Conventions
//! - y-up coordinates everywhere: a valid `Rect` has `top >= bottom`.
//! - Polygon vertices are listed counter-clockwise; `Vec2::rotate90` is the
//!   clockwise quarter turn, which yields the outward normal of such an edge.
//! - `Mat2d` is column-major `[c1r1, c1r2, c2r1, c2r2, c3r1, c3r2]`.
//! - Numerical degeneracies propagate as NaN/Inf; misuse (stroke order,
//!   buffer indexing) is reported through [`Error`].
//!
//! Dependency order, leaves first: `math` → `buffer` → `mesh` → `stroke` →
//! `shape` → `camera`.

pub mod buffer;
pub mod camera;
pub mod cfg;
pub mod error;
pub mod math;
pub mod mesh;
pub mod shape;
pub mod stroke;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use camera::{Camera, ZoomResult};
pub use cfg::{GeomCfg, StrokeCfg};
pub use error::{Error, Result};
pub use math::{Ellipse, LineSegment, Mat2d, Point, Rect, ScaleToFit, Vec2};
pub use mesh::{Mesh, MeshKind, PolygonMesh};
pub use shape::Shape;
pub use stroke::Stroke;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::buffer::{Mat2dBuffer, Vec2Buffer};
    pub use crate::camera::{Camera, ZoomResult};
    pub use crate::math::{Ellipse, LineSegment, Mat2d, Point, Rect, ScaleToFit, Vec2};
    pub use crate::mesh::{Mesh, MeshKind, PolygonMesh};
    pub use crate::shape::Shape;
    pub use crate::stroke::Stroke;
    pub use crate::{GeomCfg, StrokeCfg};
}
