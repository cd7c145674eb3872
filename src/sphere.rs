//! Sphere primitive for ray tracing.
//!
//! Uses the geometric ray-sphere test: project the center onto the ray, then
//! measure the half chord.

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::{Interval, SELF_INTERSECTION_EPSILON};
use crate::material::Material;
use crate::math::unit;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Distance to the first crossing beyond `ray_t.min` and below `ray_t.max`.
    ///
    /// `r.direction` must be unit length. The near root is preferred; the far
    /// root is used when the origin sits on or inside the sphere.
    pub fn intersect(&self, r: &Ray, ray_t: Interval) -> Option<f32> {
        let to_center = self.center - r.origin;
        let tca = to_center.dot(r.direction);
        let d2 = to_center.dot(to_center) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        [tca - thc, tca + thc]
            .into_iter()
            .find(|&t| ray_t.surrounds(t))
    }
}

/// Ray-sphere test over the default window `(0.001, inf)`.
///
/// Returns the distance to the nearest crossing past the epsilon, or `None`.
pub fn intersect_sphere(origin: Vec3A, direction: Vec3A, sphere: &Sphere) -> Option<f32> {
    sphere.intersect(
        &Ray::new(origin, direction),
        Interval::new(SELF_INTERSECTION_EPSILON, f32::INFINITY),
    )
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let t = self.intersect(r, ray_t)?;
        let p = r.at(t);
        Some(HitRecord {
            p,
            normal: unit(p - self.center),
            t,
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::IVORY;

    #[test]
    fn test_hit_on_axis() {
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -16.0), 2.0, IVORY);
        let t = intersect_sphere(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0), &s);
        assert_eq!(t, Some(14.0));
    }

    #[test]
    fn test_miss_beside() {
        let s = Sphere::new(Vec3A::new(3.0, 0.0, -16.0), 2.0, IVORY);
        assert!(intersect_sphere(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0), &s).is_none());
    }

    #[test]
    fn test_behind_origin_misses() {
        let s = Sphere::new(Vec3A::new(0.0, 0.0, 10.0), 2.0, IVORY);
        assert!(intersect_sphere(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0), &s).is_none());
    }

    #[test]
    fn test_inside_uses_far_root() {
        let s = Sphere::new(Vec3A::ZERO, 3.0, IVORY);
        let t = intersect_sphere(Vec3A::ZERO, Vec3A::new(1.0, 0.0, 0.0), &s);
        assert_eq!(t, Some(3.0));
    }

    #[test]
    fn test_surface_origin_skips_self() {
        // Starting on the near surface and heading inward only sees the far side
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -10.0), 1.0, IVORY);
        let t = intersect_sphere(Vec3A::new(0.0, 0.0, -9.0), Vec3A::new(0.0, 0.0, -1.0), &s)
            .expect("far side");
        assert!((t - 2.0).abs() < 1e-5);

        // Heading away, nothing
        assert!(
            intersect_sphere(Vec3A::new(0.0, 0.0, -9.0), Vec3A::new(0.0, 0.0, 1.0), &s).is_none()
        );
    }

    #[test]
    fn test_hit_record_normal_points_outward() {
        let s = Sphere::new(Vec3A::ZERO, 2.0, IVORY);
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        let rec = s.hit(&r, Interval::SCENE).expect("inside hit");
        assert!(rec.p.abs_diff_eq(Vec3A::new(0.0, 2.0, 0.0), 1e-5));
        // Ray exits, normal still outward (same side as the ray)
        assert!(rec.normal.abs_diff_eq(Vec3A::new(0.0, 1.0, 0.0), 1e-5));
        assert_eq!(rec.material, IVORY);
    }

    #[test]
    fn test_negative_radius_clamped() {
        let s = Sphere::new(Vec3A::ZERO, -1.0, IVORY);
        assert_eq!(s.radius, 0.0);
    }
}
