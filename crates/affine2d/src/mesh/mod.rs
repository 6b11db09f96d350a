//! Shared, read-only mesh data.
//!
//! Purpose
//! - `PolygonMesh` owns the model-space vertices, triangle indices, and
//!   border miters produced by the generators.
//! - `Mesh` pairs that geometry with a closed `MeshKind` that decides how
//!   containment is tested. Shapes hold a `Mesh` behind an `Arc` and never
//!   mutate it.
//!
//! Code cross-refs: `shape::Shape`, `buffer::Vec2Buffer`.

mod polygon;

pub use polygon::PolygonMesh;

use crate::error::Result;
use crate::math::{Ellipse, Point, Rect, Vec2};

/// How a mesh answers containment queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeshKind {
    /// Even-odd crossing test over the vertex ring.
    Polygon,
    /// Axis-aligned box test.
    Rectangle(Rect),
    /// Closed-form ellipse test, after a bounds pre-check.
    Ellipse(Ellipse),
}

/// Mesh geometry plus its containment rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    geometry: PolygonMesh,
    kind: MeshKind,
}

impl Mesh {
    /// Polygon mesh using the even-odd rule.
    pub fn polygon(geometry: PolygonMesh) -> Self {
        Self {
            geometry,
            kind: MeshKind::Polygon,
        }
    }

    pub fn regular_polygon(n: usize, flat_top: bool) -> Result<Self> {
        PolygonMesh::regular_polygon(n, flat_top).map(Self::polygon)
    }

    pub fn star(n: usize, ratio: f64) -> Result<Self> {
        PolygonMesh::star(n, ratio).map(Self::polygon)
    }

    pub fn rectangle(r: &Rect) -> Self {
        let geometry = PolygonMesh::rectangle(r);
        let kind = MeshKind::Rectangle(geometry.bounds());
        Self { geometry, kind }
    }

    /// Unit circle drawn on the quad `[-1, 1]²`.
    ///
    /// The quad is the drawn geometry; the circle itself is carved out by
    /// containment here and by the fragment stage of a renderer.
    pub fn ellipse() -> Self {
        let quad = Rect::new(-1.0, 1.0, 1.0, -1.0);
        Self {
            geometry: PolygonMesh::rectangle(&quad),
            kind: MeshKind::Ellipse(Ellipse::circle(1.0, Point::ORIGIN)),
        }
    }

    #[inline]
    pub fn kind(&self) -> MeshKind {
        self.kind
    }

    #[inline]
    pub fn geometry(&self) -> &PolygonMesh {
        &self.geometry
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        self.geometry.vertices()
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        self.geometry.indices()
    }

    /// Model-space bounds of the vertices.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Checks if the model-space point `p` lies inside this mesh.
    pub fn contains_point(&self, p: Point) -> bool {
        match self.kind {
            MeshKind::Polygon => self.geometry.contains_point(p),
            MeshKind::Rectangle(r) => r.contains_point(p),
            MeshKind::Ellipse(e) => self.bounds().contains_point(p) && e.contains_point(p),
        }
    }
}

impl From<PolygonMesh> for Mesh {
    fn from(geometry: PolygonMesh) -> Self {
        Self::polygon(geometry)
    }
}
