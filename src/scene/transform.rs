use crate::error::{Result, SceneError};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

/// Per-instance modeling transform: scale, then rotate, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Non-uniform scale factors; none may be zero.
    pub scale: Vector3,
    /// Rotation axis. A zero axis means no rotation.
    pub rotation_axis: Vector3,
    /// Rotation angle in radians.
    pub rotation_angle: f64,
    /// Offset applied last.
    pub translation: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation_axis: Vector3::zeros(),
            rotation_angle: 0.0,
            translation: Vector3::zeros(),
        }
    }
}

impl Transform {
    /// A pure scale.
    #[must_use]
    pub fn scaled(x: f64, y: f64, z: f64) -> Self {
        Self {
            scale: Vector3::new(x, y, z),
            ..Self::default()
        }
    }

    /// Sets the translation.
    #[must_use]
    pub fn translated(mut self, translation: Vector3) -> Self {
        self.translation = translation;
        self
    }

    /// Sets the rotation around `axis` by `angle` radians.
    #[must_use]
    pub fn rotated(mut self, axis: Vector3, angle: f64) -> Self {
        self.rotation_axis = axis;
        self.rotation_angle = angle;
        self
    }

    /// Checks that the transform is finite and invertible.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Degenerate`] if any component is non-finite or a
    /// scale factor is zero.
    pub fn validate(&self) -> Result<()> {
        let finite = self
            .scale
            .iter()
            .chain(self.rotation_axis.iter())
            .chain(self.translation.iter())
            .all(|c| c.is_finite())
            && self.rotation_angle.is_finite();
        if !finite {
            return Err(SceneError::Degenerate("transform must be finite".into()).into());
        }
        if self.scale.iter().any(|s| s.abs() < TOLERANCE) {
            return Err(
                SceneError::Degenerate("scale factors must be non-zero".into()).into(),
            );
        }
        Ok(())
    }

    /// Model matrix `T * R * S`.
    #[must_use]
    pub fn model_matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.translation)
            * self.rotation(self.rotation_angle)
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Inverse model matrix `S^-1 * R^-1 * T^-1`.
    ///
    /// Only meaningful for a transform that passes [`Transform::validate`].
    #[must_use]
    pub fn inverse_model_matrix(&self) -> Matrix4 {
        let inv_scale = self.scale.map(|s| 1.0 / s);
        Matrix4::new_nonuniform_scaling(&inv_scale)
            * self.rotation(-self.rotation_angle)
            * Matrix4::new_translation(&-self.translation)
    }

    /// Applies the model matrix to a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.model_matrix().transform_point(point)
    }

    fn rotation(&self, angle: f64) -> Matrix4 {
        let len = self.rotation_axis.norm();
        if len < TOLERANCE || angle == 0.0 {
            return Matrix4::identity();
        }
        rotation_matrix(&(self.rotation_axis / len), angle)
    }
}

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names)]
#[rustfmt::skip]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}
