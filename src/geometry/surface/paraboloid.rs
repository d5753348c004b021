use std::f64::consts::TAU;

use crate::math::Dual2;

use super::ParamSurface;

/// A paraboloid of revolution around the Y axis, radius in `[0, 1]`.
///
/// `X = cos(2*pi*u) * v`, `Z = sin(2*pi*u) * v`, `Y = X^2 + Z^2`.
///
/// `Y` is built from the dual `X` and `Z`, so its gradient comes through the
/// product rule rather than from a separate formula. The apex (`v = 0`) has
/// a zero normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paraboloid;

impl ParamSurface for Paraboloid {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let angle = u * TAU;
        let x = angle.cos() * v;
        let z = angle.sin() * v;
        [x, x * x + z * z, z]
    }

    fn name(&self) -> &'static str {
        "paraboloid"
    }
}
