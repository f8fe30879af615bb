//! Demo-scale physics helpers: gravitational attraction and sphere
//! overlap.
//!
//! These operate in the same unit space as the scene transforms. The
//! gravitational constant is the demo-scaled `6.674`, not the SI value;
//! real units would make the toy scenes orbit imperceptibly slowly.

use crate::math::Vec3;

/// Demo-scaled gravitational constant.
pub const GRAVITATIONAL_CONSTANT: f32 = 6.674;

/// Newtonian gravitational force between two point masses:
/// `F = G * m1 * m2 / r^2`.
///
/// Returns the force vector acting on the second body, pulling it
/// toward the first. Returns zero when the positions coincide, where
/// the force direction is undefined.
pub fn gravitational_force(p1: Vec3, m1: f32, p2: Vec3, m2: f32) -> Vec3 {
    let direction = p1 - p2;
    let dist_sq = direction.norm_squared();
    if dist_sq <= 0.0 {
        return Vec3::zeros();
    }
    let force = GRAVITATIONAL_CONSTANT * m1 * m2 / dist_sq;
    direction * (force / dist_sq.sqrt())
}

/// Sphere overlap test: `|c1 - c2|^2 <= (r1 + r2)^2`.
///
/// Touching spheres count as intersecting.
pub fn spheres_intersect(c1: Vec3, r1: f32, c2: Vec3, r2: f32) -> bool {
    let sum = r1 + r2;
    (c1 - c2).norm_squared() <= sum * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_magnitude_follows_inverse_square() {
        let p1 = Vec3::zeros();
        let near = gravitational_force(p1, 1.0, Vec3::new(1.0, 0.0, 0.0), 1.0);
        let far = gravitational_force(p1, 1.0, Vec3::new(2.0, 0.0, 0.0), 1.0);
        assert!((near.norm() - GRAVITATIONAL_CONSTANT).abs() < 1e-4);
        assert!((far.norm() - GRAVITATIONAL_CONSTANT / 4.0).abs() < 1e-4);
    }

    #[test]
    fn force_pulls_second_body_toward_first() {
        let f = gravitational_force(Vec3::zeros(), 1.0, Vec3::new(3.0, 0.0, 0.0), 1.0);
        assert!(f.x < 0.0);
        assert_eq!(f.y, 0.0);
        assert_eq!(f.z, 0.0);
    }

    #[test]
    fn force_scales_with_masses() {
        let p2 = Vec3::new(0.0, 2.0, 0.0);
        let base = gravitational_force(Vec3::zeros(), 1.0, p2, 1.0);
        let heavy = gravitational_force(Vec3::zeros(), 3.0, p2, 2.0);
        assert!((heavy.norm() - 6.0 * base.norm()).abs() < 1e-3);
    }

    #[test]
    fn coincident_positions_yield_zero_force() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(gravitational_force(p, 5.0, p, 5.0), Vec3::zeros());
    }

    #[test]
    fn touching_spheres_intersect() {
        // Unit spheres whose centers are 1 apart overlap.
        assert!(spheres_intersect(
            Vec3::zeros(),
            1.0,
            Vec3::new(1.0, 0.0, 0.0),
            1.0
        ));
        // Exactly touching at distance == r1 + r2.
        assert!(spheres_intersect(
            Vec3::zeros(),
            1.0,
            Vec3::new(2.0, 0.0, 0.0),
            1.0
        ));
    }

    #[test]
    fn separated_spheres_do_not_intersect() {
        assert!(!spheres_intersect(
            Vec3::zeros(),
            1.0,
            Vec3::new(3.0, 0.0, 0.0),
            1.0
        ));
    }
}
