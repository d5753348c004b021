mod boy;
mod cylinder;
mod cylinder_cap;
mod dini;
mod kind;
mod klein_bottle;
mod mobius;
mod paraboloid;
mod plane;
mod sphere;
mod torus;
mod tractricoid;

pub use boy::Boy;
pub use cylinder::Cylinder;
pub use cylinder_cap::CylinderCap;
pub use dini::Dini;
pub use kind::SurfaceKind;
pub use klein_bottle::KleinBottle;
pub use mobius::Mobius;
pub use paraboloid::Paraboloid;
pub use plane::Plane;
pub use sphere::Sphere;
pub use torus::Torus;
pub use tractricoid::Tractricoid;

use crate::math::{Dual2, Point2, Point3, Vector3};

/// A surface sample: position, analytic normal and texture coordinate.
///
/// The normal is `dP/du x dP/dv` as computed. It is not normalized and its
/// orientation follows the parameterization, so it may point inward or flip
/// across one-sided surfaces. Consumers that need a view-facing unit normal
/// must fix it up themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// Position on the surface.
    pub position: Point3,
    /// Unnormalized normal.
    pub normal: Vector3,
    /// The `(u, v)` parameters the sample was taken at.
    pub texcoord: Point2,
}

impl SurfacePoint {
    /// Returns `true` if every component is finite.
    ///
    /// A non-finite sample comes from a domain error in the mapping, such as
    /// a division by a parameter that reaches zero.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite())
            && self.normal.iter().all(|c| c.is_finite())
            && self.texcoord.iter().all(|c| c.is_finite())
    }
}

/// A parametric surface over `(u, v)` in `[0, 1] x [0, 1]`.
///
/// Implementors express the position as a closed-form function of two
/// [`Dual2`] parameters. Since every operation on [`Dual2`] carries exact
/// partial derivatives, the evaluator gets analytic tangents and normals
/// without per-surface derivative formulas.
pub trait ParamSurface: Sync {
    /// Evaluates `[X, Y, Z]` at the dual parameters `u` and `v`.
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3];

    /// Short human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Samples the surface at plain parameters `(u, v)`.
    fn point(&self, u: f64, v: f64) -> SurfacePoint
    where
        Self: Sized,
    {
        evaluate(self, u, v)
    }
}

/// Computes the partial derivative vectors `(dP/du, dP/dv)` at `(u, v)`.
pub fn tangents<S: ParamSurface + ?Sized>(surface: &S, u: f64, v: f64) -> (Vector3, Vector3) {
    let (_, tangent_u, tangent_v) = eval_jacobian(surface, u, v);
    (tangent_u, tangent_v)
}

/// Evaluates `surface` at `(u, v)`, producing position, normal and texcoord.
///
/// `u` and `v` are lifted to independent dual variables, so the gradient of
/// each coordinate holds one row of the Jacobian. The normal is the cross
/// product of its two columns.
pub fn evaluate<S: ParamSurface + ?Sized>(surface: &S, u: f64, v: f64) -> SurfacePoint {
    let (position, tangent_u, tangent_v) = eval_jacobian(surface, u, v);
    SurfacePoint {
        position,
        normal: tangent_u.cross(&tangent_v),
        texcoord: Point2::new(u, v),
    }
}

fn eval_jacobian<S: ParamSurface + ?Sized>(surface: &S, u: f64, v: f64) -> (Point3, Vector3, Vector3) {
    let [x, y, z] = surface.eval(Dual2::variable_u(u), Dual2::variable_v(v));
    (
        Point3::new(x.value, y.value, z.value),
        Vector3::new(x.gradient.x, y.gradient.x, z.gradient.x),
        Vector3::new(x.gradient.y, y.gradient.y, z.gradient.y),
    )
}
