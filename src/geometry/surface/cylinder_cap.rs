use std::f64::consts::TAU;

use crate::math::Dual2;

use super::ParamSurface;

/// Unit disk in the XZ plane, closing the end of a [`Cylinder`](super::Cylinder).
///
/// `P(u, v) = (cos(2*pi*u) * v, 0, sin(2*pi*u) * v)`, with `v` the radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CylinderCap;

impl ParamSurface for CylinderCap {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let angle = u * TAU;
        [angle.cos() * v, Dual2::constant(0.0), angle.sin() * v]
    }

    fn name(&self) -> &'static str {
        "cylinder-cap"
    }
}
