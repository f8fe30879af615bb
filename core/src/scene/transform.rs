//! Transform type for positioning objects in 3D space.

use crate::math::{mat4_from_translation_rotation_scale, Mat4, Vec3};

/// A model-space-to-world transform decomposed into translation, Euler
/// rotation, and scale.
///
/// Rotation is an Euler angle triple in radians, applied in
/// X-then-Y-then-Z order. Demos mutate transforms every frame (a
/// spinning planet bumps `rotation.y`) and the renderer reads them at
/// draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation in world space.
    pub translation: Vec3,
    /// Euler rotation angles in radians, X applied first.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform: no translation, no rotation, unit scale.
    pub fn identity() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Create a transform at the given position.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::identity()
        }
    }

    /// Returns this transform with a different translation.
    #[must_use]
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Returns this transform with a different rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns this transform with a different scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this transform with the same scale on every axis.
    #[must_use]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Translate by an offset.
    pub fn translate(&mut self, offset: Vec3) {
        self.translation += offset;
    }

    /// Add to the Euler rotation angles.
    pub fn rotate(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    /// Get the model matrix for this transform.
    pub fn matrix(&self) -> Mat4 {
        mat4_from_translation_rotation_scale(self.translation, self.rotation, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    #[test]
    fn default_is_identity() {
        let t = Transform::default();
        assert!((t.matrix() - Mat4::identity()).norm() < 1e-6);
    }

    #[test]
    fn builder_sets_fields() {
        let t = Transform::identity()
            .with_translation(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Vec3::new(0.1, 0.2, 0.3))
            .with_uniform_scale(2.0);
        assert_eq!(t.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn matrix_scales_then_translates() {
        let t = Transform::identity()
            .with_translation(Vec3::new(5.0, 0.0, 0.0))
            .with_uniform_scale(2.0);
        let p = t.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((p.x - 7.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_accumulates() {
        let mut t = Transform::identity();
        t.rotate(Vec3::new(0.0, 0.1, 0.0));
        t.rotate(Vec3::new(0.0, 0.2, 0.0));
        assert!((t.rotation.y - 0.3).abs() < 1e-6);
    }
}
