//! Point lights.

use glam::Vec3A;

/// Point light. Uniform in all directions, no falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World position.
    pub position: Vec3A,
    /// Multiplier on both diffuse and specular contributions.
    pub intensity: f32,
}

impl Light {
    /// Unit-intensity light at `position`.
    pub fn new(position: Vec3A) -> Self {
        Self {
            position,
            intensity: 1.0,
        }
    }

    /// Same light with a different intensity.
    pub fn with_intensity(self, intensity: f32) -> Self {
        Self { intensity, ..self }
    }
}
