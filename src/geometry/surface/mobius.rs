use std::f64::consts::PI;

use crate::math::Dual2;

use super::ParamSurface;

const RADIUS: f64 = 1.0;
const WIDTH: f64 = 0.5;

/// A Mobius strip of radius 1 and width 0.5 around the Z axis.
///
/// One-sided: the sample at `(0, v)` coincides with the sample at
/// `(1, 1 - v)` but their normals point in opposite directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mobius;

impl ParamSurface for Mobius {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let a = u * PI;
        let w = (v - 0.5) * WIDTH;
        let r = a.cos() * w + RADIUS;
        let twice = a * 2.0;
        [r * twice.cos(), r * twice.sin(), a.sin() * w]
    }

    fn name(&self) -> &'static str {
        "mobius"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn center_line_is_unit_circle() {
        for &u in &[0.0, 0.2, 0.65] {
            let p = Mobius.point(u, 0.5).position;
            assert_relative_eq!(p.x.hypot(p.y), RADIUS, epsilon = 1e-12);
            assert_abs_diff_eq!(p.z, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn seam_flips_normal() {
        let a = Mobius.point(0.0, 0.25);
        let b = Mobius.point(1.0, 0.75);
        assert_abs_diff_eq!(a.position, b.position, epsilon = 1e-12);
        assert!(a.normal.dot(&b.normal) < 0.0);
        assert_abs_diff_eq!(a.normal, -b.normal, epsilon = 1e-9);
    }
}
