use std::f64::consts::PI;

use crate::math::Dual2;

use super::ParamSurface;

const SCALE: f64 = 1.0;
const PITCH: f64 = 0.15;

/// Dini's surface: a twisted pseudosphere, two full turns along `u`.
///
/// `v` maps to `t` in `[0.1, 1.0]`, which keeps `ln(tan(t / 2))` away from
/// the singularity at `t = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dini;

impl ParamSurface for Dini {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let s = u * (4.0 * PI);
        let t = v * 0.9 + 0.1;
        [
            s.cos() * t.sin() * SCALE,
            s.sin() * t.sin() * SCALE,
            (t.cos() + (t / 2.0).tan().ln()) * SCALE + s * PITCH,
        ]
    }

    fn name(&self) -> &'static str {
        "dini"
    }
}
