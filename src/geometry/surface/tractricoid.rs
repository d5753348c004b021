use std::f64::consts::TAU;

use crate::math::Dual2;

use super::ParamSurface;

const HEIGHT: f64 = 3.0;

/// The tractricoid (pseudosphere), rim at `z = 0` narrowing along +Z.
///
/// `h = 3u`, `s = 2*pi*v`: `P = (cos(s)/cosh(h), sin(s)/cosh(h), h - tanh(h))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tractricoid;

impl ParamSurface for Tractricoid {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let h = u * HEIGHT;
        let s = v * TAU;
        [s.cos() / h.cosh(), s.sin() / h.cosh(), h - h.tanh()]
    }

    fn name(&self) -> &'static str {
        "tractricoid"
    }
}
