use std::f64::consts::TAU;

use crate::math::Dual2;

use super::ParamSurface;

/// Side of the unit-radius cylinder around the Y axis, `y` in `[0, 1]`.
///
/// `P(u, v) = (cos(2*pi*u), v, sin(2*pi*u))`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cylinder;

impl ParamSurface for Cylinder {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let u = u * TAU;
        [u.cos(), v, u.sin()]
    }

    fn name(&self) -> &'static str {
        "cylinder"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn height_follows_v() {
        for &v in &[0.0, 0.3, 1.0] {
            let p = Cylinder.point(0.6, v);
            assert_eq!(p.position.y, v);
            assert_relative_eq!(p.position.x.hypot(p.position.z), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn normal_points_to_axis() {
        let p = Cylinder.point(0.0, 0.5);
        assert_abs_diff_eq!(p.normal, Vector3::new(-TAU, 0.0, 0.0), epsilon = 1e-9);

        let p = Cylinder.point(0.25, 0.5);
        assert_abs_diff_eq!(p.normal, Vector3::new(0.0, 0.0, -TAU), epsilon = 1e-9);
    }
}
