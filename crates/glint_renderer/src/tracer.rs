//! Frame driver: splits the image into tiles and renders them on a fixed
//! worker pool.

use std::sync::mpsc;
use std::time::Instant;

use glint_core::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::tile::{generate_tiles, render_tile, tile_size_for};
use crate::{Camera, ImagePlane, PixelBuffer, PixelSampler, RayTracerConfig, RenderResult, Tile, TileResult};

/// Owns a scene, a camera and a worker pool sized once at construction.
pub struct RayTracer {
    scene: Scene,
    camera: Camera,
    config: RayTracerConfig,
    image_plane: ImagePlane,
    tiles: Vec<Tile>,
    pool: ThreadPool,
}

fn available_threads() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Per-tile RNG seed. Depends only on the frame seed and the tile origin,
/// so output does not depend on which worker picks up which tile.
fn tile_seed(frame_seed: u64, tile: &Tile) -> u64 {
    let origin = ((tile.x as u64) << 32) | tile.y as u64;
    frame_seed ^ origin.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl RayTracer {
    pub fn new(scene: Scene, config: RayTracerConfig, camera: Camera) -> RenderResult<Self> {
        config.validate()?;

        let threads = config.threads.unwrap_or_else(available_threads);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("glint-tile-{}", i))
            .build()?;

        let tile_size = config
            .tile_size
            .unwrap_or_else(|| tile_size_for(config.width, config.height, threads));
        let tiles = generate_tiles(config.width, config.height, tile_size);

        log::info!(
            "Ray tracer ready: {}x{}, {} tiles of {}px, {} workers",
            config.width,
            config.height,
            tiles.len(),
            tile_size,
            threads
        );

        Ok(Self {
            scene,
            camera,
            config,
            image_plane: ImagePlane::default(),
            tiles,
            pool,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Scene access between frames, e.g. to move lights.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn config(&self) -> &RayTracerConfig {
        &self.config
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn sampler(&self) -> PixelSampler<'_> {
        PixelSampler {
            scene: &self.scene,
            camera: &self.camera,
            image_plane: self.image_plane,
            width: self.config.width,
            height: self.config.height,
            max_recursion_depth: self.config.max_recursion_depth,
            anti_alias_max_level: self.config.anti_alias_max_level,
        }
    }

    /// Renders one frame.
    ///
    /// Every tile becomes a task on the worker pool. `on_tile_complete` runs
    /// on the calling thread as each tile finishes, in completion order, so
    /// a display can update progressively. Returns once every tile is done.
    /// A panic inside a tile aborts the frame and is propagated.
    pub fn do_ray_tracing<F>(&self, mut on_tile_complete: F) -> PixelBuffer
    where
        F: FnMut(&TileResult),
    {
        let start = Instant::now();
        let frame_seed = self.config.seed.unwrap_or_else(rand::random);
        let sampler = self.sampler();
        let mut buffer = PixelBuffer::new(self.config.width, self.config.height);

        log::debug!("Rendering {} tiles (seed {})", self.tiles.len(), frame_seed);

        self.pool.in_place_scope(|scope| {
            let (sender, receiver) = mpsc::channel::<TileResult>();

            for &tile in &self.tiles {
                let sender = sender.clone();
                scope.spawn(move |_| {
                    let mut rng = StdRng::seed_from_u64(tile_seed(frame_seed, &tile));
                    let result = render_tile(&tile, &sampler, &mut rng);
                    // The receiver only hangs up if the caller's callback panicked.
                    let _ = sender.send(result);
                });
            }
            drop(sender);

            for (done, result) in receiver.iter().enumerate() {
                buffer.write_tile(&result);
                on_tile_complete(&result);
                log::debug!("Tile {} done ({}/{})", result.tile.index, done + 1, self.tiles.len());
            }
        });

        log::info!(
            "Frame rendered in {:.2}s ({} tiles)",
            start.elapsed().as_secs_f64(),
            self.tiles.len()
        );

        buffer
    }

    /// Renders one frame without progress reporting.
    pub fn render(&self) -> PixelBuffer {
        self.do_ray_tracing(|_| {})
    }
}
