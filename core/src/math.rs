//! Math type aliases and helper functions.
//!
//! All rendering math is f32. Rotations are Euler angle triples in
//! radians, applied in X-then-Y-then-Z order (`R = Rz * Ry * Rx`),
//! matching what [`crate::scene::Transform`] stores.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

// ===== Helper functions =====

/// Build a rotation matrix from Euler angles (radians), X applied first.
pub fn rotation_xyz(euler: Vec3) -> Mat4 {
    let rx = nalgebra::Rotation3::from_axis_angle(&nalgebra::Vector3::x_axis(), euler.x);
    let ry = nalgebra::Rotation3::from_axis_angle(&nalgebra::Vector3::y_axis(), euler.y);
    let rz = nalgebra::Rotation3::from_axis_angle(&nalgebra::Vector3::z_axis(), euler.z);
    (rz * ry * rx).to_homogeneous()
}

/// Build a 4x4 TRS model matrix from translation, Euler rotation
/// (radians), and scale: `T * Rz * Ry * Rx * S`.
pub fn mat4_from_translation_rotation_scale(translation: Vec3, euler: Vec3, scale: Vec3) -> Mat4 {
    let t = Mat4::new_translation(&translation);
    let s = Mat4::new_nonuniform_scaling(&scale);
    t * rotation_xyz(euler) * s
}

/// Build a view matrix for a camera at `position` with Euler orientation
/// `euler` (radians): the inverse of the camera's rigid transform,
/// `R^T * T(-position)`.
pub fn view_matrix(position: Vec3, euler: Vec3) -> Mat4 {
    rotation_xyz(euler).transpose() * Mat4::new_translation(&-position)
}

/// Build a right-handed perspective projection with depth range [0, 1]
/// (wgpu/Vulkan convention).
pub fn perspective_rh(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,              0.0,
        0.0,        f,    0.0,              0.0,
        0.0,        0.0,  zfar * nf,        znear * zfar * nf,
        0.0,        0.0,  -1.0,             0.0,
    );
    result
}

/// Convert a 4x4 matrix to a column-major `[[f32; 4]; 4]` array for
/// uniform upload.
pub fn mat4_to_cols_array_2d(m: &Mat4) -> [[f32; 4]; 4] {
    let s = m.as_slice();
    [
        [s[0], s[1], s[2], s[3]],
        [s[4], s[5], s[6], s[7]],
        [s[8], s[9], s[10], s[11]],
        [s[12], s[13], s[14], s[15]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_trs_matrix() {
        let m = mat4_from_translation_rotation_scale(
            Vec3::zeros(),
            Vec3::zeros(),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert!((m - Mat4::identity()).norm() < 1e-6);
    }

    #[test]
    fn translation_lands_in_last_column() {
        let m = mat4_from_translation_rotation_scale(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::zeros(),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(1, 3)], 2.0);
        assert_eq!(m[(2, 3)], 3.0);
    }

    #[test]
    fn rotation_y_90_rotates_x_to_minus_z() {
        let m = rotation_xyz(Vec3::new(0.0, FRAC_PI_2, 0.0));
        let v = m.transform_vector(&Vec3::new(1.0, 0.0, 0.0));
        assert!(v.x.abs() < 1e-5);
        assert!((v.z - (-1.0)).abs() < 1e-5);
    }

    #[test]
    fn rotation_order_is_x_first() {
        // Rotate +Y by 90deg around X (-> +Z), then 90deg around Z.
        // A rotation around Z leaves +Z alone, so the result stays +Z.
        let m = rotation_xyz(Vec3::new(FRAC_PI_2, 0.0, FRAC_PI_2));
        let v = m.transform_vector(&Vec3::new(0.0, 1.0, 0.0));
        assert!(v.x.abs() < 1e-5);
        assert!(v.y.abs() < 1e-5);
        assert!((v.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn view_matrix_inverts_camera_transform() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let euler = Vec3::new(0.1, 0.2, 0.3);
        let view = view_matrix(position, euler);
        let camera_world = Mat4::new_translation(&position) * rotation_xyz(euler);
        assert!((view * camera_world - Mat4::identity()).norm() < 1e-5);
    }

    #[test]
    fn perspective_maps_near_to_zero_depth() {
        let znear = 0.1;
        let zfar = 100.0;
        let m = perspective_rh(1.0, 1.0, znear, zfar);
        let p = m * Vec4::new(0.0, 0.0, -znear, 1.0);
        assert!((p.z / p.w).abs() < 1e-5);
        let p = m * Vec4::new(0.0, 0.0, -zfar, 1.0);
        assert!((p.z / p.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn cols_array_2d_identity() {
        let m = Mat4::identity();
        let cols = mat4_to_cols_array_2d(&m);
        assert_eq!(cols[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cols[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(cols[2], [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(cols[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
