use std::f64::consts::TAU;

use crate::math::Dual2;

use super::ParamSurface;

const MAJOR_RADIUS: f64 = 1.0;
const MINOR_RADIUS: f64 = 0.5;

/// A torus around the Z axis with major radius 1 and tube radius 0.5.
///
/// `u` runs around the tube and `v` around the axis:
/// `d = r*cos(2*pi*u) + R`, `P = (d*cos(2*pi*v), d*sin(2*pi*v), r*sin(2*pi*u))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Torus;

impl ParamSurface for Torus {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let tube = u * TAU;
        let around = v * TAU;
        let d = tube.cos() * MINOR_RADIUS + MAJOR_RADIUS;
        [d * around.cos(), d * around.sin(), tube.sin() * MINOR_RADIUS]
    }

    fn name(&self) -> &'static str {
        "torus"
    }
}
