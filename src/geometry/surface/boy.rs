use std::f64::consts::{PI, SQRT_2};

use crate::math::Dual2;

use super::ParamSurface;

/// Boy's surface, an immersion of the real projective plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boy;

impl ParamSurface for Boy {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let a = (u - 0.5) * PI;
        let b = v * PI;
        // Stays within [3 - 3/sqrt(2), 3 + 3/sqrt(2)], never zero.
        let denom = 3.0 - (a * 3.0).sin() * (b * 2.0).sin() * (3.0 / SQRT_2);
        let cos_b_sq = b.cos() * b.cos();
        let sin_2b = (b * 2.0).sin();
        [
            ((a * 2.0).cos() * cos_b_sq * SQRT_2 + a.cos() * sin_2b) / denom,
            ((a * 2.0).sin() * cos_b_sq * SQRT_2 - a.sin() * sin_2b) / denom,
            cos_b_sq * 3.0 / denom,
        ]
    }

    fn name(&self) -> &'static str {
        "boy"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn samples_are_finite() {
        for i in 0..=16 {
            for j in 0..=16 {
                let p = Boy.point(f64::from(i) / 16.0, f64::from(j) / 16.0);
                assert!(p.is_finite());
            }
        }
    }

    #[test]
    fn top_point() {
        // b = 0: cos^2 = 1, sin(2b) = 0, denom = 3
        let p = Boy.point(0.5, 0.0).position;
        assert_relative_eq!(p.x, SQRT_2 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
    }
}
