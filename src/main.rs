use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use whitted::camera::Camera;
use whitted::output::save_image;
use whitted::scene::Scene;

/// Camera from the command line settings
fn create_camera(args: &Args) -> Camera {
    Camera {
        image_width: args.width,
        image_height: args.height,
        fov: args.fov,
        max_depth: args.max_depth,
        show_progress: !args.no_progress,
        ..Camera::new()
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("whitted - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let scene = Scene::reference();
    info!(
        "Scene: {} objects, {} lights",
        scene.objects.len(),
        scene.lights.len()
    );

    let camera = create_camera(&args);
    let image = camera.render(&scene);

    match save_image(&image, &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to save {}: {}", args.output.display(), e);
            ExitCode::FAILURE
        }
    }
}
