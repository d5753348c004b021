use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::{evaluate, ParamSurface};

use super::{StripMesh, TessellationParams};

/// Samples a parametric surface on a regular grid into triangle strips.
pub struct TessellateSurface<'a, S: ParamSurface + ?Sized> {
    surface: &'a S,
    params: TessellationParams,
}

impl<'a, S: ParamSurface + ?Sized> TessellateSurface<'a, S> {
    /// Creates a new `TessellateSurface` operation.
    #[must_use]
    pub fn new(surface: &'a S, params: TessellationParams) -> Self {
        Self { surface, params }
    }

    /// Executes the tessellation, returning a strip mesh.
    ///
    /// Row `r` becomes one strip. For each column `c` in `0..=cols` it
    /// receives the sample at `(c / cols, r / rows)` followed by the one at
    /// `(c / cols, (r + 1) / rows)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` or `cols` is zero or the vertex count
    /// overflows. Nothing is sampled in that case.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<StripMesh> {
        let vertex_count = self.params.validate()?;
        let TessellationParams { rows, cols } = self.params;

        let mut vertices = Vec::with_capacity(vertex_count);
        for row in 0..rows {
            let v0 = row as f64 / rows as f64;
            let v1 = (row + 1) as f64 / rows as f64;
            for col in 0..=cols {
                let u = col as f64 / cols as f64;
                vertices.push(evaluate(self.surface, u, v0));
                vertices.push(evaluate(self.surface, u, v1));
            }
        }

        let mesh = StripMesh::from_parts(vertices, self.params);
        debug!(
            surface = self.surface.name(),
            rows,
            cols,
            vertices = mesh.vertex_count(),
            "tessellated surface"
        );
        let bad = mesh.non_finite_count();
        if bad > 0 {
            warn!(
                surface = self.surface.name(),
                count = bad,
                "mesh contains non-finite vertices"
            );
        }
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ParamsurfError, TessellationError};
    use crate::geometry::surface::{Paraboloid, Plane, Sphere};
    use crate::geometry::SurfaceKind;
    use crate::math::{Dual2, Point2};
    use approx::assert_relative_eq;

    #[test]
    fn sphere_twenty_by_twenty() {
        let mesh = TessellateSurface::new(&Sphere, TessellationParams::default())
            .execute()
            .unwrap();
        assert_eq!(mesh.vertex_count(), 840);
        for v in mesh.vertices() {
            assert_relative_eq!(v.position.coords.norm(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn vertex_order_zigzags_between_rows() {
        let mesh = TessellateSurface::new(&Plane, TessellationParams::new(2, 2))
            .execute()
            .unwrap();
        let uv: Vec<Point2> = mesh.vertices().iter().map(|v| v.texcoord).collect();
        assert_eq!(
            uv[..6],
            [
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.5),
                Point2::new(0.5, 0.0),
                Point2::new(0.5, 0.5),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 0.5),
            ]
        );
        assert_eq!(uv[6], Point2::new(0.0, 0.5));
        assert_eq!(uv[11], Point2::new(1.0, 1.0));
    }

    #[test]
    fn non_square_resolution() {
        let mesh = TessellateSurface::new(&Paraboloid, TessellationParams::new(3, 7))
            .execute()
            .unwrap();
        assert_eq!(mesh.vertex_count(), 3 * 8 * 2);
        assert_eq!(mesh.strip_count(), 3);
    }

    #[test]
    fn zero_resolution_fails() {
        let err = TessellateSurface::new(&Sphere, TessellationParams::new(0, 20))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            ParamsurfError::Tessellation(TessellationError::InvalidResolution { axis: "rows", .. })
        ));
        let err = TessellateSurface::new(&Sphere, TessellationParams::new(20, 0))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            ParamsurfError::Tessellation(TessellationError::InvalidResolution { axis: "cols", .. })
        ));
    }

    #[test]
    fn deterministic() {
        let params = TessellationParams::uniform(12);
        let a = TessellateSurface::new(&SurfaceKind::Torus, params).execute().unwrap();
        let b = TessellateSurface::new(&SurfaceKind::Torus, params).execute().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn domain_errors_propagate_into_mesh() {
        struct Funnel;
        impl ParamSurface for Funnel {
            fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
                [u, v.ln(), v]
            }
            fn name(&self) -> &'static str {
                "funnel"
            }
        }
        let mesh = TessellateSurface::new(&Funnel, TessellationParams::uniform(4))
            .execute()
            .unwrap();
        // v = 0 appears once per column in the first strip.
        assert_eq!(mesh.non_finite_count(), 5);
    }
}
