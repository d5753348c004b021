#![allow(clippy::unwrap_used)]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use paramsurf::error::{ParamsurfError, TessellationError};
use paramsurf::geometry::surface::{Paraboloid, Plane, Sphere};
use paramsurf::geometry::tangents;
use paramsurf::math::{Dual2, Vector2, Vector3};
use paramsurf::tessellation::GpuVertex;
use paramsurf::{evaluate, ParamSurface, SurfaceKind, TessellateSurface, TessellationParams};

#[test]
fn sum_and_product_rules() {
    let a = Dual2::new(1.25, Vector2::new(0.5, -2.0));
    let b = Dual2::new(-3.0, Vector2::new(4.0, 0.75));

    let sum = a + b;
    assert_eq!(sum.gradient, a.gradient + b.gradient);

    let product = a * b;
    assert_eq!(product.value, a.value * b.value);
    assert_eq!(
        product.gradient,
        b.gradient * a.value + a.gradient * b.value
    );
}

#[test]
fn chain_rule_spot_check() {
    let s = Dual2::new(0.0, Vector2::new(1.0, 0.0)).sin();
    assert_eq!(s.gradient, Vector2::new(1.0, 0.0));
}

#[test]
fn sphere_mesh_lies_on_unit_sphere() {
    let mesh = TessellateSurface::new(&Sphere, TessellationParams::uniform(20))
        .execute()
        .unwrap();
    assert_eq!(mesh.vertex_count(), 20 * 21 * 2);
    for v in mesh.vertices() {
        assert_relative_eq!(v.position.coords.norm(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn plane_mesh_is_flat() {
    let mesh = TessellateSurface::new(&Plane, TessellationParams::new(7, 13))
        .execute()
        .unwrap();
    assert!(mesh.vertices().iter().all(|v| v.position.y == 0.0));
}

#[test]
fn retessellation_is_bit_identical() {
    for kind in SurfaceKind::ALL {
        let params = TessellationParams::new(9, 11);
        let a = TessellateSurface::new(&kind, params).execute().unwrap();
        let b = TessellateSurface::new(&kind, params).execute().unwrap();
        let bytes_a = GpuVertex::as_bytes(&a.gpu_vertices()).to_vec();
        let bytes_b = GpuVertex::as_bytes(&b.gpu_vertices()).to_vec();
        assert_eq!(bytes_a, bytes_b, "{kind} differs between runs");
    }
}

#[test]
fn zero_resolution_produces_no_mesh() {
    for params in [
        TessellationParams::new(0, 10),
        TessellationParams::new(10, 0),
        TessellationParams::new(0, 0),
    ] {
        let result = TessellateSurface::new(&Sphere, params).execute();
        assert!(matches!(
            result,
            Err(ParamsurfError::Tessellation(TessellationError::InvalidResolution { .. }))
        ));
    }
}

#[test]
fn paraboloid_height_relation() {
    let mesh = TessellateSurface::new(&Paraboloid, TessellationParams::uniform(10))
        .execute()
        .unwrap();
    for v in mesh.vertices() {
        let p = v.position;
        assert_relative_eq!(p.y, p.x * p.x + p.z * p.z, epsilon = 1e-12);
    }
}

/// Central differences of the position agree with the dual-number tangents.
#[test]
fn dual_tangents_match_finite_differences() {
    const H: f64 = 1e-6;
    let samples = [(0.2, 0.3), (0.35, 0.65), (0.7, 0.45), (0.9, 0.8)];
    for kind in SurfaceKind::ALL {
        for &(u, v) in &samples {
            let (tu, tv) = tangents(&kind, u, v);
            let du = (kind.point(u + H, v).position - kind.point(u - H, v).position) / (2.0 * H);
            let dv = (kind.point(u, v + H).position - kind.point(u, v - H).position) / (2.0 * H);
            let scale = tu.norm().max(tv.norm()).max(1.0);
            assert!(
                (tu - du).norm() < 1e-5 * scale,
                "{kind}: d/du mismatch at ({u}, {v})"
            );
            assert!(
                (tv - dv).norm() < 1e-5 * scale,
                "{kind}: d/dv mismatch at ({u}, {v})"
            );
        }
    }
}

#[test]
fn normals_are_not_normalized() {
    // The core leaves normalization to the renderer.
    let p = evaluate(&Sphere, 0.25, 0.5);
    assert_relative_eq!(p.normal.norm(), 2.0 * std::f64::consts::PI.powi(2), epsilon = 1e-9);
}

#[test]
fn custom_mapping_gets_analytic_normal() {
    /// Graph of `z = u^3 - v^2`.
    struct Graph;

    impl ParamSurface for Graph {
        fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
            [u, v, u.powf(3.0) - v * v]
        }

        fn name(&self) -> &'static str {
            "graph"
        }
    }

    let p = Graph.point(0.5, 0.25);
    // (1, 0, 3u^2) x (0, 1, -2v) = (-3u^2, 2v, 1)
    assert_abs_diff_eq!(p.normal, Vector3::new(-0.75, 0.5, 1.0), epsilon = 1e-12);
}
