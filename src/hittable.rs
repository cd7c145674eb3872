//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, and material data
/// needed for shading calculations.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Unit surface normal. Outward for spheres regardless of which side the
    /// ray came from; `refract` relies on that to detect exiting rays.
    pub normal: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Material of the object at the hit point
    pub material: Material,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so the scene can be shared by the
/// parallel pixel loop.
pub trait Hittable: Sync + Send {
    /// Nearest intersection whose distance lies strictly inside `ray_t`.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through Box<dyn Hittable>.
#[derive(Default)]
pub struct HittableList {
    /// Vector of boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Number of objects in the list.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the list holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        // Walk back to front: each accepted hit shrinks the window to strictly
        // nearer, so on equal distances the object added last wins
        for object in self.objects.iter().rev() {
            let window = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = object.hit(r, window) {
                closest = Some(rec);
            }
        }

        closest
    }
}
