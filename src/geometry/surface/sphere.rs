use std::f64::consts::{PI, TAU};

use crate::math::Dual2;

use super::ParamSurface;

/// The unit sphere centered at the origin.
///
/// `P(u, v) = (cos(2*pi*u) * sin(pi*v), sin(2*pi*u) * sin(pi*v), cos(pi*v))`
///
/// `u` runs around the Z axis and `v` from the north pole (`v = 0`) to the
/// south pole (`v = 1`). With this orientation the normal points inward and
/// vanishes at the poles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sphere;

impl ParamSurface for Sphere {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let u = u * TAU;
        let v = v * PI;
        [u.cos() * v.sin(), u.sin() * v.sin(), v.cos()]
    }

    fn name(&self) -> &'static str {
        "sphere"
    }
}
