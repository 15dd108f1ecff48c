//! Glint command line viewer.
//!
//! Renders a built-in or JSON scene, writing each frame as a PNG while the
//! light orbits the scene.

mod display;
mod scenes;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, Scene};
use glint_renderer::{FrameControls, FrameState, RayTracer, RayTracerConfig};

use crate::display::Display;

#[derive(Parser, Debug)]
#[command(name = "glint", about = "Whitted-style ray tracer")]
struct Args {
    /// Built-in scene (spheres, cube, showcase) or path to a JSON scene file
    #[arg(short, long, default_value = "spheres")]
    scene: String,

    #[arg(long, default_value_t = 700)]
    width: u32,

    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Mirror bounces after the primary hit
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Side of the jittered sample grid per pixel
    #[arg(short, long, default_value_t = 2)]
    aa: u32,

    /// Number of frames to render
    #[arg(short, long, default_value_t = 1)]
    frames: u32,

    /// Worker threads (defaults to all cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Fixed jitter seed for reproducible frames
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 2.2)]
    gamma: f64,

    #[arg(long, default_value_t = 3.0)]
    camera_distance: f64,

    /// Camera rotation about the y axis added per frame, in radians
    #[arg(long, default_value_t = 0.0)]
    rotation_step: f64,

    /// Keep the light still
    #[arg(long)]
    paused: bool,

    /// Directory the frames are written to
    #[arg(short, long, default_value = "frames")]
    output: PathBuf,
}

fn load(name: &str) -> Result<Scene> {
    if let Some(scene) = scenes::builtin(name)? {
        log::info!("Using built-in scene '{}'", name);
        return Ok(scene);
    }
    load_scene(name).with_context(|| {
        format!(
            "'{}' is neither a built-in scene ({}) nor a readable scene file",
            name,
            scenes::BUILTIN_SCENES.join(", ")
        )
    })
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::info!("Starting Glint");

    let scene = load(&args.scene)?;

    let mut config = RayTracerConfig::default()
        .with_resolution(args.width, args.height)
        .with_quality(args.depth, args.aa);
    config.threads = args.threads;
    config.seed = args.seed;

    let mut state = FrameState::default();
    state.on_camera_distance_changed(args.camera_distance);
    state.on_pause_toggled(args.paused);

    let mut tracer = RayTracer::new(scene, config, state.camera())?;
    let mut display = Display::new(args.width, args.height, args.gamma);

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory {}", args.output.display()))?;

    for frame in 0..args.frames {
        let total = tracer.tiles().len();
        let mut done = 0;
        tracer.render_frame(&state, |result| {
            display.blit_tile(result);
            done += 1;
            log::debug!("Frame {}: {}/{} tiles", frame, done, total);
        });

        let path = args.output.join(format!("frame_{:04}.png", frame));
        display.present(&path)?;
        log::info!("Wrote {}", path.display());

        state.on_rotation_changed(state.rotation + args.rotation_step);
        if !state.advance() && args.rotation_step == 0.0 && frame + 1 < args.frames {
            log::info!("Paused with a fixed camera; remaining frames would be identical, stopping");
            break;
        }
    }

    Ok(())
}
