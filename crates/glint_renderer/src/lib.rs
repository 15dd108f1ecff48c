//! Glint renderer - CPU Whitted ray tracing
//!
//! Recursive ray tracing with ambient, Lambertian and Phong lighting, hard
//! shadows and mirror reflection. Frames are split into tiles rendered on a
//! fixed worker pool with jittered supersampling.

mod buffer;
mod camera;
mod config;
mod error;
mod frame;
mod sampler;
pub mod shading;
mod tile;
mod tracer;

pub use buffer::PixelBuffer;
pub use camera::Camera;
pub use config::RayTracerConfig;
pub use error::{RenderError, RenderResult};
pub use frame::{FrameControls, FrameState, LightOrbit, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE};
pub use sampler::{ImagePlane, PixelSampler};
pub use shading::{color_of_ray, EPSILON};
pub use tile::{generate_tiles, render_tile, tile_size_for, Tile, TileResult};
pub use tracer::RayTracer;

/// Re-export the scene types the renderer works with
pub use glint_core::{Color, Scene};
