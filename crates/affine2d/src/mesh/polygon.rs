//! Procedural polygon meshes: regular polygons, stars, rectangles.
//!
//! Vertices are centered at the model origin and listed counter-clockwise.
//! Triangle indices are `u16`, so a mesh addresses at most 65536 vertices.

use crate::buffer::{even_odd_contains, Vec2Buffer};
use crate::cfg::{MESH_MITER_LIMIT, MESH_MITER_WIDTH};
use crate::error::{Error, Result};
use crate::math::{Mat2d, Point, Rect, Vec2};

/// Highest vertex count addressable by `u16` indices.
const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Immutable vertex, index, and miter data for one polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonMesh {
    vertices: Vec<Vec2>,
    indices: Vec<u16>,
    miters: Vec<Vec2>,
    bounds: Rect,
}

impl PolygonMesh {
    /// Builds a mesh from raw data, computing miters and bounds.
    ///
    /// Every index must address one of `vertices`.
    pub fn new(vertices: Vec<Vec2>, indices: Vec<u16>) -> Result<Self> {
        check_vertex_count(vertices.len())?;
        if let Some(&bad) = indices.iter().find(|&&i| usize::from(i) >= vertices.len()) {
            return Err(Error::IndexOutOfBounds {
                index: usize::from(bad),
                len: vertices.len(),
            });
        }
        let miters = Self::miters(&vertices);
        let bounds = Rect::bounding(vertices.iter().map(|v| v.to_point()));
        Ok(Self {
            vertices,
            indices,
            miters,
            bounds,
        })
    }

    /// Regular `n`-gon inscribed in the unit circle.
    pub fn regular_polygon(n: usize, flat_top: bool) -> Result<Self> {
        let indices = Self::regular_indices(n)?;
        Self::new(Self::regular_vertices(n, flat_top), indices)
    }

    /// Rectangle with the same fan triangulation as a square.
    ///
    /// A flipped `r` is sorted first so the ring stays counter-clockwise.
    pub fn rectangle(r: &Rect) -> Self {
        let r = r.sort();
        Self {
            vertices: Self::rectangle_vertices(&r).to_vec(),
            indices: vec![0, 1, 2, 0, 2, 3],
            miters: Self::miters(&Self::rectangle_vertices(&r)),
            bounds: r,
        }
    }

    /// `n`-pointed star with outer radius 1 and inner radius `ratio`.
    pub fn star(n: usize, ratio: f64) -> Result<Self> {
        let indices = Self::star_indices(n)?;
        Self::new(Self::star_vertices(n, ratio), indices)
    }

    /// Vertices of a regular `n`-gon centered at the origin.
    ///
    /// Vertex 0 is `(0, 1)`, or `(0, 1)` turned by half a step when `flat_top`
    /// so the first and last vertex share a y coordinate. Each further vertex
    /// is the previous one under a single `2π/n` rotation, so all of them stay
    /// equidistant from the origin.
    pub fn regular_vertices(n: usize, flat_top: bool) -> Vec<Vec2> {
        let mut vertices = Vec::with_capacity(n);
        if n == 0 {
            return vertices;
        }
        let angle = std::f64::consts::TAU / n as f64;
        let rotation = Mat2d::rotate(angle);
        let mut v = Vec2::new(0.0, 1.0);
        if flat_top {
            v = Mat2d::rotate(0.5 * angle).map_vec(v);
        }
        vertices.push(v);
        for _ in 1..n {
            v = rotation.map_vec(v);
            vertices.push(v);
        }
        vertices
    }

    /// Fan triangulation `(0, i+1, i+2)` of a convex `n`-gon: `3(n-2)` indices.
    pub fn regular_indices(n: usize) -> Result<Vec<u16>> {
        check_polygon_count(n, 3)?;
        Ok((0..n - 2)
            .flat_map(|i| [0, i + 1, i + 2])
            .map(|i| i as u16)
            .collect())
    }

    /// Corners of `r`, counter-clockwise from the top left.
    pub fn rectangle_vertices(r: &Rect) -> [Vec2; 4] {
        r.corners().map(Point::to_vec)
    }

    /// Vertices of an `n`-pointed star: outer points at even indices, inner
    /// points (radius `ratio`, half a step further round) at odd indices.
    pub fn star_vertices(n: usize, ratio: f64) -> Vec<Vec2> {
        let count = 2 * n;
        let mut vertices = Vec::with_capacity(count);
        if n == 0 {
            return vertices;
        }
        let angle = std::f64::consts::TAU / n as f64;
        let rotation = Mat2d::rotate(angle);
        vertices.push(Vec2::new(0.0, 1.0));
        vertices.push(Mat2d::rotate(0.5 * angle).map_vec(Vec2::new(0.0, ratio)));
        for i in 2..count {
            let v = rotation.map_vec(vertices[i - 2]);
            vertices.push(v);
        }
        vertices
    }

    /// Triangulation of an `n`-pointed star.
    ///
    /// The inner `n`-gon is fanned from vertex 1 through the odd vertices
    /// (`n - 2` triangles), and each outer point closes a spike with its two
    /// inner neighbours (`n` triangles): `2(n - 1)` triangles in total.
    pub fn star_indices(n: usize) -> Result<Vec<u16>> {
        check_polygon_count(n, 2)?;
        check_vertex_count(2 * n)?;
        let count = 2 * n;
        let inner = (0..n - 2).flat_map(|k| [1, 3 + 2 * k, 5 + 2 * k]);
        let spikes = (0..n).flat_map(|i| {
            let outer = 2 * i;
            [(outer + count - 1) % count, outer, outer + 1]
        });
        Ok(inner.chain(spikes).map(|i| i as u16).collect())
    }

    /// Outward miter at every vertex of a counter-clockwise ring.
    ///
    /// Offsetting each vertex by its miter yields a copy of the polygon grown
    /// by one unit along every edge normal; sharp corners are capped at three
    /// units. Colinear neighbours fall back to the shared edge normal.
    pub fn miters(vertices: &[Vec2]) -> Vec<Vec2> {
        let len = vertices.len();
        let Some(&last) = vertices.last() else {
            return Vec::new();
        };
        let mut line1 = vertices[0] - last;
        let mut miters = Vec::with_capacity(len);
        for i in 0..len {
            let line2 = vertices[(i + 1) % len] - vertices[i];
            miters.push(Vec2::miter(line1, line2, MESH_MITER_WIDTH, MESH_MITER_LIMIT));
            line1 = line2;
        }
        miters
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    pub fn vertex_miters(&self) -> &[Vec2] {
        &self.miters
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Vertices packed for upload.
    pub fn vertex_data(&self) -> Vec2Buffer {
        self.vertices.iter().copied().collect()
    }

    /// Miters packed for upload, parallel to [`PolygonMesh::vertex_data`].
    pub fn miter_data(&self) -> Vec2Buffer {
        self.miters.iter().copied().collect()
    }

    /// Even-odd containment of `p` (model space) against the vertex ring.
    pub fn contains_point(&self, p: Point) -> bool {
        even_odd_contains(p, self.vertices.len(), |i| {
            let v = self.vertices[i];
            (v.x, v.y)
        })
    }
}

fn check_polygon_count(n: usize, min: usize) -> Result<()> {
    if n < min {
        return Err(Error::InvalidVertexCount { n, min });
    }
    check_vertex_count(n)
}

fn check_vertex_count(count: usize) -> Result<()> {
    if count > MAX_VERTICES {
        return Err(Error::TooManyVertices { count });
    }
    Ok(())
}
