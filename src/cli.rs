use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments. The defaults render the reference image.
#[derive(Parser, Debug)]
#[command(name = "whitted")]
#[command(about = "Render the checkerboard and spheres scene with recursive ray tracing")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024, help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768, help = "Image height in pixels")]
    pub height: u32,

    /// Vertical field of view in radians
    #[arg(long, default_value_t = 1.05, help = "Vertical field of view in radians")]
    pub fov: f32,

    /// Deepest reflection/refraction level still shaded
    #[arg(long, default_value_t = 4, help = "Deepest reflection/refraction level still shaded")]
    pub max_depth: u32,

    /// Output file path (.ppm binary, .png 8-bit, .exr linear HDR)
    #[arg(
        short,
        long,
        default_value = "out.ppm",
        help = "Output file path (.ppm binary, .png 8-bit, .exr linear HDR)"
    )]
    pub output: PathBuf,

    /// Hide the progress bar
    #[arg(long, help = "Hide the progress bar")]
    pub no_progress: bool,
}
