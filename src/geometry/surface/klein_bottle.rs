use std::f64::consts::{PI, TAU};

use crate::math::Dual2;

use super::ParamSurface;

/// A Klein bottle in the "bottle" immersion.
///
/// The first half of `u` sweeps the body, where the tube cross-section is
/// rotated with the profile curve; the second half sweeps the handle, where
/// the tube runs straight back through the body. Both halves agree at
/// `u = 0.5` so the surface is continuous across the switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KleinBottle;

impl ParamSurface for KleinBottle {
    fn eval(&self, u: Dual2, v: Dual2) -> [Dual2; 3] {
        let a = u * TAU;
        let b = v * TAU;
        let profile_x = a.cos() * (a.sin() + 1.0) * 0.3;
        let profile_y = a.sin() * 0.8;
        let tube = 0.2 - a.cos() * 0.1;

        let (x, y) = if a.value > PI {
            ((b + PI).cos() * tube + profile_x, profile_y)
        } else {
            (
                a.cos() * b.cos() * tube + profile_x,
                a.sin() * b.cos() * tube + profile_y,
            )
        };
        [x, y, b.sin() * tube]
    }

    fn name(&self) -> &'static str {
        "klein-bottle"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn continuous_across_handle_switch() {
        for &v in &[0.0, 0.3, 0.8] {
            let before = KleinBottle.point(0.5 - 1e-9, v).position;
            let after = KleinBottle.point(0.5 + 1e-9, v).position;
            assert_abs_diff_eq!(before, after, epsilon = 1e-6);
        }
    }

    #[test]
    fn closed_in_both_parameters() {
        for &t in &[0.1, 0.45, 0.7] {
            assert_abs_diff_eq!(
                KleinBottle.point(t, 0.0).position,
                KleinBottle.point(t, 1.0).position,
                epsilon = 1e-12
            );
        }
        // The handle rejoins the body with the tube circle mirrored.
        for &t in &[0.1, 0.25, 0.4] {
            assert_abs_diff_eq!(
                KleinBottle.point(0.0, t).position,
                KleinBottle.point(1.0, 0.5 - t).position,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn samples_are_finite() {
        for i in 0..=20 {
            for j in 0..=20 {
                let p = KleinBottle.point(f64::from(i) / 20.0, f64::from(j) / 20.0);
                assert!(p.is_finite());
            }
        }
    }
}
