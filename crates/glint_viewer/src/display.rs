//! Display side of the renderer: gamma encoding, y flip and PNG output.

use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{Color, PixelBuffer, TileResult};
use image::{Rgb, RgbImage};

/// 8-bit frame being assembled from finished tiles.
pub struct Display {
    image: RgbImage,
    gamma: f64,
}

impl Display {
    pub fn new(width: u32, height: u32, gamma: f64) -> Self {
        Self {
            image: RgbImage::new(width, height),
            gamma,
        }
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        // Renderer rows count up from the bottom; image rows count down.
        let row = self.image.height() - 1 - y;
        self.image.put_pixel(x, row, Rgb(color.to_rgb8(self.gamma)));
    }

    /// Writes a finished tile, so partial frames can be inspected.
    pub fn blit_tile(&mut self, result: &TileResult) {
        for ((x, y), color) in result.iter() {
            self.put(x, y, color);
        }
    }

    /// Replaces the whole frame.
    pub fn blit_buffer(&mut self, buffer: &PixelBuffer) {
        for ((x, y), color) in buffer.iter() {
            self.put(x, y, color);
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn present(&self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("Failed to write frame to {}", path.display()))
    }
}
