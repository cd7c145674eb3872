//! Bounded checkerboard floor.
//!
//! A horizontal rectangle at a fixed height. Tiles are two units wide and
//! alternate between two colors of an otherwise shared base material.

use glam::Vec3A;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::{Interval, SELF_INTERSECTION_EPSILON};
use crate::material::Material;
use crate::math::Color;
use crate::ray::Ray;

/// Horizontal checkerboard rectangle `|x| < half_width`, `z_far < z < z_near`.
#[derive(Debug, Clone, Copy)]
pub struct Checkerboard {
    /// Plane height (`y`).
    pub height: f32,
    /// Half extent along x.
    pub half_width: f32,
    /// Nearer z bound (the larger value).
    pub z_near: f32,
    /// Farther z bound (the smaller value).
    pub z_far: f32,
    /// Tile color when the parity is odd.
    pub odd_color: Color,
    /// Tile color when the parity is even.
    pub even_color: Color,
    /// Material shared by both tile colors.
    pub base: Material,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            half_width: 10.0,
            z_near: -10.0,
            z_far: -30.0,
            odd_color: Color::new(0.3, 0.3, 0.3),
            even_color: Color::new(0.3, 0.2, 0.1),
            base: Material::default(),
        }
    }
}

impl Checkerboard {
    fn contains(&self, p: Vec3A) -> bool {
        p.x.abs() < self.half_width && p.z < self.z_near && p.z > self.z_far
    }

    /// Material of the tile under `p`.
    ///
    /// Both terms truncate toward zero. The +1000 shift keeps the x term
    /// positive so tiles don't double up across x = 0.
    pub fn material_at(&self, p: Vec3A) -> Material {
        let parity = (0.5 * p.x + 1000.0) as i64 + (0.5 * p.z) as i64;
        let color = if parity & 1 == 1 {
            self.odd_color
        } else {
            self.even_color
        };
        self.base.with_diffuse_color(color)
    }
}

impl Hittable for Checkerboard {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // Near-parallel rays never reach the plane
        if r.direction.y.abs() <= SELF_INTERSECTION_EPSILON {
            return None;
        }

        let t = (self.height - r.origin.y) / r.direction.y;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = r.at(t);
        if !self.contains(p) {
            return None;
        }

        Some(HitRecord {
            p,
            normal: Vec3A::Y,
            t,
            material: self.material_at(p),
        })
    }
}
