//! Camera for viewing the scene.

use crate::math::{perspective_rh, view_matrix, Mat4, Vec3};

/// A perspective camera positioned with an Euler orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Euler orientation in radians, X applied first.
    pub rotation: Vec3,
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            fovy: std::f32::consts::FRAC_PI_4,
            znear: 0.01,
            zfar: 1500.0,
        }
    }
}

impl Camera {
    /// Create a camera with the given vertical field of view (radians).
    pub fn new(fovy: f32) -> Self {
        Self {
            fovy,
            ..Self::default()
        }
    }

    /// Returns this camera moved to `position`.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Returns this camera with the given Euler orientation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns this camera with the given clip plane distances.
    #[must_use]
    pub fn with_clip_planes(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Get the view matrix (inverse of the camera's rigid transform).
    pub fn view_matrix(&self) -> Mat4 {
        view_matrix(self.position, self.rotation)
    }

    /// Get the view matrix with translation stripped, for skybox
    /// rendering where only the orientation matters.
    pub fn rotation_view_matrix(&self) -> Mat4 {
        view_matrix(Vec3::zeros(), self.rotation)
    }

    /// Get the projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective_rh(self.fovy, aspect, self.znear, self.zfar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::new(1.0).with_position(Vec3::new(0.0, 0.0, 5.0));
        let view = camera.view_matrix();
        // A point at the origin ends up 5 units in front of the camera
        // (negative Z in view space).
        let p = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((p.z - (-5.0)).abs() < 1e-6);
    }

    #[test]
    fn rotation_view_matrix_has_no_translation() {
        let camera = Camera::new(1.0)
            .with_position(Vec3::new(10.0, 20.0, 30.0))
            .with_rotation(Vec3::new(0.0, 1.0, 0.0));
        let view = camera.rotation_view_matrix();
        assert_eq!(view[(0, 3)], 0.0);
        assert_eq!(view[(1, 3)], 0.0);
        assert_eq!(view[(2, 3)], 0.0);
    }

    #[test]
    fn projection_respects_aspect() {
        let camera = Camera::default();
        let square = camera.projection_matrix(1.0);
        let wide = camera.projection_matrix(2.0);
        assert!((square[(0, 0)] - 2.0 * wide[(0, 0)]).abs() < 1e-6);
        assert!((square[(1, 1)] - wide[(1, 1)]).abs() < 1e-6);
    }
}
