use clap::Parser;
use log::info;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use miniray::camera::Camera;
use miniray::scene::Scene;
use output::save_framebuffer_as_png;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("miniray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}", args.width, args.height);

    // The fixed two-sphere scene: geometry and lighting are not configurable.
    let scene = Scene::two_spheres();

    let mut camera = Camera::new(args.width, args.height);
    camera.max_depth = args.max_depth;

    let frame = match camera.render(&scene) {
        Ok(frame) => frame,
        Err(e) => {
            log::error!("Rendering failed: {}", e);
            std::process::exit(1);
        }
    };

    save_framebuffer_as_png(&frame, &args.output);
}
