//! Scene container and the built-in reference scene.

use glam::Vec3A;
use log::debug;

use crate::checkerboard::Checkerboard;
use crate::hittable::{HitRecord, Hittable, HittableList};
use crate::interval::Interval;
use crate::light::Light;
use crate::material::{AMETHYST, EMERALD, GOLD, IVORY, PEARL, RUBY, SAPPHIRE, TURQUOISE};
use crate::math::Color;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Color returned for rays that escape the scene.
pub const BACKGROUND: Color = Color::new(0.2, 0.7, 0.8);

/// Immutable scene: geometry, lights and the background color.
///
/// Built once, then shared by reference across render threads.
pub struct Scene {
    /// All intersectable geometry.
    pub objects: HittableList,
    /// Point lights.
    pub lights: Vec<Light>,
    /// Color of escaping rays.
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Empty scene with the default background.
    pub fn new() -> Self {
        Self {
            objects: HittableList::new(),
            lights: Vec::new(),
            background: BACKGROUND,
        }
    }

    /// Add a primitive.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.add(object);
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Nearest surface hit by `r` within `(0.001, 1000)`.
    pub fn intersect(&self, r: &Ray) -> Option<HitRecord> {
        self.objects.hit(r, Interval::SCENE)
    }

    /// Checkerboard floor, eight gem spheres and three lights.
    pub fn reference() -> Self {
        let mut scene = Self::new();

        scene.add(Box::new(Checkerboard::default()));

        let spheres = [
            Sphere::new(Vec3A::new(-3.0, 0.0, -16.0), 2.0, IVORY),
            Sphere::new(Vec3A::new(-1.0, -1.5, -12.0), 2.0, EMERALD),
            Sphere::new(Vec3A::new(1.5, -0.5, -18.0), 3.0, SAPPHIRE),
            Sphere::new(Vec3A::new(7.0, 5.0, -18.0), 4.0, PEARL),
            Sphere::new(Vec3A::new(2.0, 2.0, -10.0), 1.0, GOLD),
            Sphere::new(Vec3A::new(0.0, 4.0, -15.0), 1.5, RUBY),
            Sphere::new(Vec3A::new(-4.0, 1.0, -12.0), 1.8, AMETHYST),
            Sphere::new(Vec3A::new(6.0, -1.0, -14.0), 2.5, TURQUOISE),
        ];
        for sphere in spheres {
            scene.add(Box::new(sphere));
        }

        scene.add_light(Light::new(Vec3A::new(-20.0, 20.0, 20.0)));
        scene.add_light(Light::new(Vec3A::new(30.0, 50.0, -25.0)));
        scene.add_light(Light::new(Vec3A::new(30.0, 20.0, 30.0)));

        debug!(
            "Reference scene: {} objects, {} lights",
            scene.objects.len(),
            scene.lights.len()
        );
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_contents() {
        let scene = Scene::reference();
        // board + 8 spheres
        assert_eq!(scene.objects.len(), 9);
        assert_eq!(scene.lights.len(), 3);
        assert!(scene.lights.iter().all(|l| l.intensity == 1.0));
        assert_eq!(scene.background, BACKGROUND);
    }

    #[test]
    fn test_intersect_prefers_sphere_over_board() {
        let scene = Scene::reference();
        // Straight down through the emerald onto the board
        let r = Ray::new(Vec3A::new(-1.0, 5.0, -12.0), Vec3A::new(0.0, -1.0, 0.0));
        let rec = scene.intersect(&r).expect("hits emerald");
        assert_eq!(rec.material, EMERALD);
        assert!((rec.t - 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_intersect_board_between_spheres() {
        let scene = Scene::reference();
        let r = Ray::new(Vec3A::new(3.0, 0.0, -26.0), Vec3A::new(0.0, -1.0, 0.0));
        let rec = scene.intersect(&r).expect("hits board");
        assert_eq!(rec.normal, Vec3A::Y);
        assert!((rec.p.y + 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_hits_beyond_horizon_are_misses() {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            Vec3A::new(0.0, 0.0, -2000.0),
            10.0,
            IVORY,
        )));
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(scene.intersect(&r).is_none());
    }
}
