//! Material system for Whitted-style shading.
//!
//! A material mixes four independent contributions: Phong diffuse, Phong
//! specular, mirror reflection and refraction. The weights are not normalized;
//! each one simply scales its own additive term.

use glam::Vec3A;

use crate::math::Color;

/// Per-material weights of the four shading terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Albedo {
    /// Scales the Lambertian term (`diffuse_color * sum of n.l`).
    pub diffuse: f32,
    /// Scales the white Phong highlight.
    pub specular: f32,
    /// Scales the color seen along the mirror direction.
    pub reflective: f32,
    /// Scales the color seen through the surface.
    pub refractive: f32,
}

impl Albedo {
    /// Build the weights in diffuse, specular, reflective, refractive order.
    pub const fn new(diffuse: f32, specular: f32, reflective: f32, refractive: f32) -> Self {
        Self {
            diffuse,
            specular,
            reflective,
            refractive,
        }
    }
}

/// Surface description shared by every primitive.
///
/// Materials are plain `Copy` values; a sphere owns its own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
    pub refractive_index: f32,
    /// Contribution weights.
    pub albedo: Albedo,
    /// Base color of the diffuse term.
    pub diffuse_color: Color,
    /// Phong shininess.
    pub specular_exponent: f32,
}

impl Material {
    /// Create a material.
    pub const fn new(
        refractive_index: f32,
        albedo: Albedo,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Same material with a different diffuse color.
    pub const fn with_diffuse_color(self, diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            ..self
        }
    }
}

/// Refractive index 1, diffuse weight 2, black, no highlight.
///
/// The checkerboard tiles are this material recolored per tile.
impl Default for Material {
    fn default() -> Self {
        Self::new(1.0, Albedo::new(2.0, 0.0, 0.0, 0.0), Vec3A::ZERO, 0.0)
    }
}

/// Matte off-white with a soft highlight.
pub const IVORY: Material = Material::new(
    1.0,
    Albedo::new(0.9, 0.5, 0.1, 0.0),
    Vec3A::new(0.4, 0.4, 0.3),
    50.0,
);
/// Clear glass: mostly refraction plus a sharp highlight.
pub const GLASS: Material = Material::new(
    1.5,
    Albedo::new(0.0, 0.9, 0.1, 0.8),
    Vec3A::new(0.6, 0.7, 0.8),
    125.0,
);
/// Dull red rubber.
pub const RED_RUBBER: Material = Material::new(
    1.0,
    Albedo::new(1.4, 0.3, 0.0, 0.0),
    Vec3A::new(0.3, 0.1, 0.1),
    10.0,
);
/// Near-perfect mirror.
pub const MIRROR: Material = Material::new(
    1.0,
    Albedo::new(0.0, 16.0, 0.8, 0.0),
    Vec3A::new(1.0, 1.0, 1.0),
    1425.0,
);
/// Polished gold.
pub const GOLD: Material = Material::new(
    1.2,
    Albedo::new(0.8, 0.6, 0.0, 0.0),
    Vec3A::new(0.7, 0.5, 0.2),
    80.0,
);
/// Green gem, mostly specular.
pub const EMERALD: Material = Material::new(
    1.4,
    Albedo::new(0.1, 0.9, 0.0, 0.0),
    Vec3A::new(0.3, 0.8, 0.4),
    100.0,
);
/// Blue gem, mostly reflective.
pub const SAPPHIRE: Material = Material::new(
    1.6,
    Albedo::new(0.0, 0.2, 0.8, 0.0),
    Vec3A::new(0.2, 0.5, 0.7),
    150.0,
);
/// Bright pearl with a broad highlight.
pub const PEARL: Material = Material::new(
    1.2,
    Albedo::new(0.9, 0.9, 0.8, 0.0),
    Vec3A::new(0.8, 0.8, 0.7),
    20.0,
);
/// Red gem.
pub const RUBY: Material = Material::new(
    1.7,
    Albedo::new(0.6, 0.0, 0.1, 0.0),
    Vec3A::new(0.8, 0.2, 0.2),
    120.0,
);
/// Violet gem, mostly reflective.
pub const AMETHYST: Material = Material::new(
    1.5,
    Albedo::new(0.3, 0.0, 0.8, 0.0),
    Vec3A::new(0.6, 0.1, 0.7),
    90.0,
);
/// Blue-green stone.
pub const TURQUOISE: Material = Material::new(
    1.4,
    Albedo::new(0.0, 0.7, 0.8, 0.0),
    Vec3A::new(0.2, 0.5, 0.6),
    70.0,
);
