mod gpu_vertex;
mod tessellate_batch;
mod tessellate_surface;

pub use gpu_vertex::GpuVertex;
pub use tessellate_batch::TessellateBatch;
pub use tessellate_surface::TessellateSurface;

use std::mem::size_of;
use std::ops::Range;

use crate::error::{Result, TessellationError};
use crate::geometry::SurfacePoint;
use crate::math::Point3;

/// Tessellation level used when none is given.
pub const DEFAULT_RESOLUTION: usize = 20;

/// Grid resolution of a tessellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TessellationParams {
    /// Number of strips, i.e. subdivisions along `v`.
    pub rows: usize,
    /// Number of quads per strip, i.e. subdivisions along `u`.
    pub cols: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self::uniform(DEFAULT_RESOLUTION)
    }
}

impl TessellationParams {
    /// Creates parameters with `rows` strips of `cols` quads.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Same resolution along both axes.
    #[must_use]
    pub fn uniform(resolution: usize) -> Self {
        Self::new(resolution, resolution)
    }

    /// Checks the resolution and returns the vertex count of the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidResolution`] if `rows` or `cols` is
    /// zero, or if the vertex buffer size does not fit in memory addressing.
    pub fn validate(&self) -> Result<usize> {
        let invalid = |axis, value| TessellationError::InvalidResolution { axis, value };
        if self.rows == 0 {
            return Err(invalid("rows", self.rows).into());
        }
        if self.cols == 0 || self.vertices_per_strip().is_none() {
            return Err(invalid("cols", self.cols).into());
        }
        self.vertex_count()
            .ok_or_else(|| invalid("rows", self.rows).into())
    }

    /// Vertices in one strip: two per column boundary. `None` on overflow.
    #[must_use]
    pub fn vertices_per_strip(&self) -> Option<usize> {
        self.cols.checked_add(1)?.checked_mul(2)
    }

    /// Total vertices a mesh at this resolution holds, or `None` if the
    /// vertex buffer would exceed `isize::MAX` bytes.
    #[must_use]
    pub fn vertex_count(&self) -> Option<usize> {
        let count = self.rows.checked_mul(self.vertices_per_strip()?)?;
        let bytes = count.checked_mul(size_of::<SurfacePoint>())?;
        isize::try_from(bytes).is_ok().then_some(count)
    }
}

/// A surface tessellated into triangle strips without an index buffer.
///
/// Strip `i` occupies vertices `i * (cols + 1) * 2 .. (i + 1) * (cols + 1) * 2`
/// and alternates between the lower and upper edge of the row, so it can be
/// drawn directly with strip topology. The mesh cannot be modified once
/// built.
#[derive(Debug, Clone, PartialEq)]
pub struct StripMesh {
    vertices: Vec<SurfacePoint>,
    params: TessellationParams,
}

impl StripMesh {
    pub(crate) fn from_parts(vertices: Vec<SurfacePoint>, params: TessellationParams) -> Self {
        debug_assert_eq!(Some(vertices.len()), params.vertex_count());
        Self { vertices, params }
    }

    /// Resolution the mesh was built at.
    #[must_use]
    pub fn params(&self) -> TessellationParams {
        self.params
    }

    /// Number of subdivisions along `v`.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.params.rows
    }

    /// Number of subdivisions along `u`.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.params.cols
    }

    /// Number of strips, equal to `rows`.
    #[must_use]
    pub fn strip_count(&self) -> usize {
        self.params.rows
    }

    /// Vertices in one strip, `(cols + 1) * 2`.
    #[must_use]
    pub fn vertices_per_strip(&self) -> usize {
        // Validated before the mesh was built, so this cannot overflow.
        (self.params.cols + 1) * 2
    }

    /// Vertices in the whole mesh, `rows * (cols + 1) * 2`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Triangles drawn by all strips together.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.strip_count() * (self.vertices_per_strip() - 2)
    }

    /// The flat vertex stream, strips back to back.
    #[must_use]
    pub fn vertices(&self) -> &[SurfacePoint] {
        &self.vertices
    }

    /// First vertex of strip `index` in the flat stream.
    #[must_use]
    pub fn strip_offset(&self, index: usize) -> usize {
        index * self.vertices_per_strip()
    }

    /// Vertex range of strip `index`, or `None` if out of bounds.
    #[must_use]
    pub fn strip_range(&self, index: usize) -> Option<Range<usize>> {
        (index < self.strip_count()).then(|| {
            let start = self.strip_offset(index);
            start..start + self.vertices_per_strip()
        })
    }

    /// Vertices of strip `index`, or `None` if out of bounds.
    #[must_use]
    pub fn strip(&self, index: usize) -> Option<&[SurfacePoint]> {
        self.strip_range(index).map(|range| &self.vertices[range])
    }

    /// Iterates over the strips in order.
    pub fn strips(&self) -> impl Iterator<Item = &[SurfacePoint]> {
        self.vertices.chunks_exact(self.vertices_per_strip())
    }

    /// Axis-aligned bounds of all positions as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (Point3, Point3) {
        let first = self.vertices[0].position;
        self.vertices
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.inf(&v.position), hi.sup(&v.position)))
    }

    /// Number of vertices with a non-finite component.
    #[must_use]
    pub fn non_finite_count(&self) -> usize {
        self.vertices.iter().filter(|v| !v.is_finite()).count()
    }

    /// Converts the vertex stream to the packed single-precision GPU layout.
    #[must_use]
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().map(GpuVertex::from).collect()
    }
}
