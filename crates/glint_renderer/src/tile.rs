//! Tile-based scheduling.
//!
//! Divides the image into tiles that are rendered independently, one task
//! per tile, and streamed back to the caller as they complete.

use glint_core::Color;
use rand::Rng;

use crate::PixelSampler;

/// Tiles per worker the automatic tile size aims for.
const TILES_PER_WORKER: u32 = 4;

/// Smallest tile side picked automatically.
const MIN_TILE_SIZE: u32 = 8;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's first column
    pub x: u32,
    /// Y coordinate of the tile's first row (y = 0 is the bottom row)
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position of this tile in the render order
    pub index: usize,
}

impl Tile {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Global pixel coordinates covered by this tile, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let Tile { x, y, width, height, .. } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| (px, py)))
    }
}

/// Tile side giving roughly [`TILES_PER_WORKER`] tiles per worker thread.
pub fn tile_size_for(width: u32, height: u32, threads: usize) -> u32 {
    let target_tiles = (threads.max(1) as f64) * TILES_PER_WORKER as f64;
    let side = ((width as f64 * height as f64) / target_tiles).sqrt().ceil() as u32;
    let max_side = width.max(height).max(1);
    side.clamp(MIN_TILE_SIZE.min(max_side), max_side)
}

/// Generate tiles covering the image, sorted center-out.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let tile_size = tile_size.max(1);
    let mut tiles = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            let th = tile_size.min(height - y);
            tiles.push(Tile::new(x, y, tw, th, tiles.len()));
            x += tile_size;
        }
        y += tile_size;
    }

    sort_spiral(&mut tiles, width, height);

    // Update indices after sorting
    for (i, tile) in tiles.iter_mut().enumerate() {
        tile.index = i;
    }

    tiles
}

/// Sort tiles by distance from the image center so the middle of the frame
/// shows up first.
fn sort_spiral(tiles: &mut [Tile], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let distance = |t: &Tile| {
        let cx = t.x as f64 + t.width as f64 / 2.0;
        let cy = t.y as f64 + t.height as f64 / 2.0;
        (cx - center_x).powi(2) + (cy - center_y).powi(2)
    };

    tiles.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Pixels of one finished tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileResult {
    pub tile: Tile,
    /// Pixel colors in row-major order within the tile
    pub pixels: Vec<Color>,
}

impl TileResult {
    pub fn new(tile: Tile, pixels: Vec<Color>) -> Self {
        Self { tile, pixels }
    }

    /// `((x, y), color)` for every pixel, in global image coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), Color)> + '_ {
        self.tile.pixels().zip(self.pixels.iter().copied())
    }
}

/// Render a single tile into its own buffer.
pub fn render_tile<R: Rng>(tile: &Tile, sampler: &PixelSampler<'_>, rng: &mut R) -> TileResult {
    let pixels = tile
        .pixels()
        .map(|(x, y)| sampler.render_pixel(x, y, rng))
        .collect();
    TileResult::new(*tile, pixels)
}
