//! Whitted-style recursive ray tracer
//!
//! Renders a fixed checkerboard floor and a set of spheres lit by point lights:
//! Phong shading with hard shadows, plus recursive mirror reflection and
//! Snell's-law refraction. Pixels are traced in parallel on the CPU and the
//! result is tone-mapped to PPM, PNG, or kept as linear EXR.
//!
//! The entry point is [`camera::Camera::render`], which takes an immutable
//! [`scene::Scene`] and returns the radiance buffer.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod checkerboard;
pub mod hittable;
pub mod interval;
pub mod light;
pub mod material;
pub mod math;
pub mod output;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod sphere;
