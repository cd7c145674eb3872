//! Whitted-style light transport.
//!
//! Local Phong shading from point lights with hard shadows, plus one mirror
//! ray and one refracted ray traced recursively at every hit.

use glam::Vec3A;

use crate::hittable::HitRecord;
use crate::math::{unit, Color};
use crate::ray::Ray;
use crate::scene::Scene;

/// Direction returned by [`refract`] under total internal reflection.
pub const TOTAL_INTERNAL_REFLECTION: Vec3A = Vec3A::X;

/// Reflect a vector off a surface using the law of reflection.
pub fn reflect(incident: Vec3A, normal: Vec3A) -> Vec3A {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract a vector through an interface using Snell's law.
///
/// `normal` is the outward normal. A ray arriving from inside (cosine against
/// the normal is negative) is handled by flipping the normal and swapping the
/// two indices. Under total internal reflection this returns
/// [`TOTAL_INTERNAL_REFLECTION`] so the caller always has something to trace.
pub fn refract(incident: Vec3A, normal: Vec3A, eta_transmit: f32, eta_incident: f32) -> Vec3A {
    let cos_incidence = -incident.dot(normal).clamp(-1.0, 1.0);
    if cos_incidence < 0.0 {
        return refract(incident, -normal, eta_incident, eta_transmit);
    }

    let eta = eta_incident / eta_transmit;
    let k = 1.0 - eta * eta * (1.0 - cos_incidence * cos_incidence);
    if k < 0.0 {
        TOTAL_INTERNAL_REFLECTION
    } else {
        incident * eta + normal * (eta * cos_incidence - k.sqrt())
    }
}

/// Light gathered from the scene's lights at one hit point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalIllumination {
    /// Sum of `max(0, l.n)` over unoccluded lights.
    pub diffuse: f32,
    /// Sum of Phong highlight terms over unoccluded lights.
    pub specular: f32,
}

/// Recursive ray tracer over a borrowed scene.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    /// Scene being traced.
    pub scene: &'a Scene,
    /// Deepest recursion level that is still shaded. Rays at
    /// `depth > max_depth` return the background.
    pub max_depth: u32,
}

impl<'a> Tracer<'a> {
    /// Create a tracer.
    pub fn new(scene: &'a Scene, max_depth: u32) -> Self {
        Self { scene, max_depth }
    }

    /// Radiance arriving along `r`.
    ///
    /// Unclamped; tone mapping happens at output.
    pub fn cast_ray(&self, r: &Ray, depth: u32) -> Color {
        if depth > self.max_depth {
            return self.scene.background;
        }
        let Some(rec) = self.scene.intersect(r) else {
            return self.scene.background;
        };

        let material = rec.material;
        let reflect_dir = unit(reflect(r.direction, rec.normal));
        let refract_dir = unit(refract(
            r.direction,
            rec.normal,
            material.refractive_index,
            1.0,
        ));
        let reflect_color = self.cast_ray(&Ray::new(rec.p, reflect_dir), depth + 1);
        let refract_color = self.cast_ray(&Ray::new(rec.p, refract_dir), depth + 1);

        let light = self.illuminate(&rec, r.direction);

        material.diffuse_color * light.diffuse * material.albedo.diffuse
            + Color::ONE * light.specular * material.albedo.specular
            + reflect_color * material.albedo.reflective
            + refract_color * material.albedo.refractive
    }

    /// Diffuse and specular intensity at a hit, skipping shadowed lights.
    ///
    /// A light is shadowed when the shadow ray meets any surface strictly
    /// nearer than the light itself.
    pub fn illuminate(&self, rec: &HitRecord, view_dir: Vec3A) -> LocalIllumination {
        let mut total = LocalIllumination::default();

        for light in &self.scene.lights {
            let to_light = light.position - rec.p;
            let light_dir = unit(to_light);

            if let Some(blocker) = self.scene.intersect(&Ray::new(rec.p, light_dir)) {
                if (blocker.p - rec.p).length() < to_light.length() {
                    continue;
                }
            }

            total.diffuse += light.intensity * light_dir.dot(rec.normal).max(0.0);
            let highlight = (-reflect(-light_dir, rec.normal).dot(view_dir)).max(0.0);
            total.specular += light.intensity * highlight.powf(rec.material.specular_exponent);
        }

        total
    }
}
