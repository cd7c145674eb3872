//! Camera for ray generation and scene rendering

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::math::unit;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::Tracer;

/// Linear, unclamped radiance per pixel.
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Pinhole camera looking down -z.
///
/// One ray through the center of every pixel, no anti-aliasing.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Field of view in radians, measured across the image height
    pub fov: f32,
    /// Maximum recursion depth handed to the tracer
    pub max_depth: u32,
    /// Eye position
    pub origin: Vec3A,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a camera with the reference settings.
    ///
    /// Default: 1024x768 image, 1.05 rad field of view, depth 4, eye at the origin.
    pub fn new() -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            fov: 1.05,
            max_depth: 4,
            origin: Vec3A::ZERO,
            show_progress: false,
        }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.image_width as u64 * self.image_height as u64
    }

    /// Unit ray through the center of pixel (i, j), row 0 at the top.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let dir_x = (i as f32 + 0.5) - width / 2.0;
        // Flipped so increasing rows go down
        let dir_y = -(j as f32 + 0.5) + height / 2.0;
        let dir_z = -height / (2.0 * (self.fov / 2.0).tan());

        Ray::new(self.origin, unit(Vec3A::new(dir_x, dir_y, dir_z)))
    }

    /// Renders the scene.
    ///
    /// Pixels are traced independently in parallel across the rayon pool. Each
    /// worker writes only its own pixel; the scene is shared read-only.
    ///
    /// Returns an HDR image buffer with linear f32 RGB values.
    pub fn render(&self, scene: &Scene) -> HdrImage {
        let tracer = Tracer::new(scene, self.max_depth);
        let mut image: HdrImage = ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} using {} CPU cores...",
            self.image_width,
            self.image_height,
            rayon::current_num_threads()
        );
        debug!(
            "fov {:.3} rad, max depth {}, {} lights",
            self.fov,
            self.max_depth,
            scene.lights.len()
        );
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            let color = tracer.cast_ray(&self.primary_ray(i, j), 0);
            *pixel = Rgb([color.x, color.y, color.z]);
            pb.inc(1);
        });

        pb.finish_and_clear();
        info!("Image rendered in {:.2?}", generation_start.elapsed());

        image
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.pixel_count());
        let template = "{bar:40} {pos}/{len} ETA: {eta}";
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            pb.set_style(style);
        }
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::BACKGROUND;

    #[test]
    fn test_primary_rays_are_unit() {
        let camera = Camera::new();
        for (i, j) in [(0, 0), (1023, 767), (512, 384), (100, 700)] {
            let r = camera.primary_ray(i, j);
            assert!((r.direction.length() - 1.0).abs() < 1e-5);
            assert_eq!(r.origin, Vec3A::ZERO);
        }
    }

    #[test]
    fn test_primary_ray_orientation() {
        let camera = Camera::new();
        let top_left = camera.primary_ray(0, 0).direction;
        let bottom_right = camera.primary_ray(1023, 767).direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0 && top_left.z < 0.0);
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0 && bottom_right.z < 0.0);
    }

    #[test]
    fn test_primary_ray_matches_fov() {
        let camera = Camera {
            image_width: 2,
            image_height: 2,
            fov: std::f32::consts::FRAC_PI_2,
            ..Camera::new()
        };
        // Pixel (1, 0) has offset (0.5, 0.5); z = -2 / (2 tan 45deg) = -1
        let d = camera.primary_ray(1, 0).direction;
        let expected = unit(Vec3A::new(0.5, 0.5, -1.0));
        assert!(d.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_render_empty_scene_is_background() {
        let camera = Camera {
            image_width: 8,
            image_height: 6,
            ..Camera::new()
        };
        let image = camera.render(&Scene::new());
        assert_eq!(image.dimensions(), (8, 6));
        for pixel in image.pixels() {
            assert_eq!(Vec3A::from_array(pixel.0), BACKGROUND);
        }
    }
}
