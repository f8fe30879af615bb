//! Point lights and the scene light registry.

use crate::math::Vec3;

/// Maximum number of point lights the forward shader can consume.
///
/// Mirrors the fixed-size light array in the shader; [`SceneLights`]
/// refuses additions beyond this bound.
pub const MAX_POINT_LIGHTS: usize = 8;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Light position in world space.
    pub position: Vec3,
    /// Light color.
    pub color: Vec3,
    /// Light strength multiplier.
    pub intensity: f32,
    /// Quadratic distance attenuation factor.
    pub attenuation: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            attenuation: 0.5,
        }
    }
}

impl PointLight {
    /// Create a light with the given intensity and attenuation.
    pub fn new(intensity: f32, attenuation: f32) -> Self {
        Self {
            intensity,
            attenuation,
            ..Self::default()
        }
    }

    /// Returns this light moved to `position`.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Returns this light with the given color.
    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}

/// The set of point lights illuminating a scene, plus the ambient term.
///
/// Owned by the caller and passed to the renderer each frame, rather
/// than registered in global state.
#[derive(Debug, Clone)]
pub struct SceneLights {
    lights: Vec<PointLight>,
    /// Ambient light contribution in [0, 1].
    pub ambient: f32,
}

impl Default for SceneLights {
    fn default() -> Self {
        Self {
            lights: Vec::new(),
            ambient: 0.2,
        }
    }
}

impl SceneLights {
    /// Create an empty registry with the default ambient term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light. Returns its slot index, or `None` when the shader
    /// capacity [`MAX_POINT_LIGHTS`] is already reached.
    pub fn add(&mut self, light: PointLight) -> Option<usize> {
        if self.lights.len() >= MAX_POINT_LIGHTS {
            log::warn!(
                "Point light capacity ({}) reached, ignoring light",
                MAX_POINT_LIGHTS
            );
            return None;
        }
        self.lights.push(light);
        Some(self.lights.len() - 1)
    }

    /// Remove the light at `index`, shifting later lights down.
    pub fn remove(&mut self, index: usize) -> Option<PointLight> {
        if index < self.lights.len() {
            Some(self.lights.remove(index))
        } else {
            None
        }
    }

    /// Get a mutable reference to the light at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut PointLight> {
        self.lights.get_mut(index)
    }

    /// Number of registered lights.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the registry holds no lights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Iterate over the registered lights.
    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_slot_indices() {
        let mut lights = SceneLights::new();
        assert_eq!(lights.add(PointLight::default()), Some(0));
        assert_eq!(lights.add(PointLight::new(2.0, 0.1)), Some(1));
        assert_eq!(lights.len(), 2);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut lights = SceneLights::new();
        for _ in 0..MAX_POINT_LIGHTS {
            assert!(lights.add(PointLight::default()).is_some());
        }
        assert_eq!(lights.add(PointLight::default()), None);
        assert_eq!(lights.len(), MAX_POINT_LIGHTS);
    }

    #[test]
    fn remove_shifts_later_lights() {
        let mut lights = SceneLights::new();
        lights.add(PointLight::new(1.0, 0.5));
        lights.add(PointLight::new(2.0, 0.5));
        let removed = lights.remove(0).unwrap();
        assert_eq!(removed.intensity, 1.0);
        assert_eq!(lights.len(), 1);
        assert_eq!(lights.iter().next().unwrap().intensity, 2.0);
    }

    #[test]
    fn default_ambient_matches_renderer() {
        assert_eq!(SceneLights::new().ambient, 0.2);
    }
}
