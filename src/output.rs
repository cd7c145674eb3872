//! # Output Module
//!
//! Turns the rendered radiance buffer into files:
//! - Binary PPM (`P6`), the renderer's native format
//! - PNG, tone-mapped the same way as PPM
//! - OpenEXR, unclamped linear radiance for inspection in an HDR viewer
//!
//! ## Tone Mapping
//!
//! Each pixel is divided by `max(1, r, g, b)` so that over-bright pixels keep
//! their hue instead of clipping per channel, then scaled to 0..=255 and
//! truncated.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::{debug, info};
use thiserror::Error;

use crate::camera::HdrImage;

/// Failure while writing an image to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// PNG encoding failed.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
    /// EXR encoding failed.
    #[error("EXR encoding error: {0}")]
    Exr(#[from] exr::error::Error),
    /// The output path has an extension we don't write.
    #[error("unsupported output format '{0}' (expected .ppm, .png or .exr)")]
    UnsupportedFormat(String),
}

/// Map one radiance triple to display bytes.
///
/// Colors already within [0, 1] are scaled by 255 unchanged; brighter ones are
/// first divided by their largest channel.
pub fn tone_map(rgb: [f32; 3]) -> [u8; 3] {
    let denom = rgb[0].max(rgb[1]).max(rgb[2]).max(1.0);
    // `as u8` truncates and saturates
    rgb.map(|channel| (255.0 * channel / denom) as u8)
}

/// Tone-map a whole image to 8-bit.
pub fn to_ldr(image: &HdrImage) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        Rgb(tone_map(image.get_pixel(x, y).0))
    })
}

/// Write `image` as binary PPM: the `P6` header then 3 bytes per pixel, row-major.
pub fn write_ppm<W: Write>(image: &HdrImage, mut out: W) -> std::io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", image.width(), image.height())?;
    for pixel in image.pixels() {
        out.write_all(&tone_map(pixel.0))?;
    }
    out.flush()
}

/// Save as binary PPM.
pub fn save_image_as_ppm(image: &HdrImage, output_path: &Path) -> Result<(), OutputError> {
    let file = File::create(output_path)?;
    write_ppm(image, BufWriter::new(file))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save as 8-bit PNG using the same tone mapping as PPM.
pub fn save_image_as_png(image: &HdrImage, output_path: &Path) -> Result<(), OutputError> {
    to_ldr(image).save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save the raw radiance as 32-bit float EXR, no tone mapping.
pub fn save_image_as_exr(image: &HdrImage, output_path: &Path) -> Result<(), OutputError> {
    write_rgb_file(
        output_path,
        image.width() as usize,
        image.height() as usize,
        |x, y| {
            let pixel = image.get_pixel(x as u32, y as u32);
            (pixel[0], pixel[1], pixel[2])
        },
    )?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save with the format picked from the file extension.
pub fn save_image(image: &HdrImage, output_path: &Path) -> Result<(), OutputError> {
    let extension = output_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    debug!("Writing {} as '{}'", output_path.display(), extension);

    match extension.as_str() {
        "ppm" => save_image_as_ppm(image, output_path),
        "png" => save_image_as_png(image, output_path),
        "exr" => save_image_as_exr(image, output_path),
        _ => Err(OutputError::UnsupportedFormat(extension)),
    }
}
