use std::collections::HashMap;

use glint_core::Color;

use crate::TileResult;

/// Linear, unclamped render output. Row `y = 0` is the bottom of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Copies a finished tile into place.
    pub fn write_tile(&mut self, result: &TileResult) {
        for ((x, y), color) in result.iter() {
            self.set(x, y, color);
        }
    }

    /// `((x, y), color)` for every pixel.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), Color)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i as u32 % width, i as u32 / width), c))
    }

    /// The frame as a pixel coordinate to color mapping.
    pub fn to_map(&self) -> HashMap<(u32, u32), Color> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tile;

    #[test]
    fn test_write_tile() {
        let mut buffer = PixelBuffer::new(4, 3);
        let tile = Tile::new(1, 1, 2, 2, 0);
        buffer.write_tile(&TileResult::new(tile, vec![Color::RED; 4]));

        assert_eq!(buffer.get(0, 0), Color::BLACK);
        assert_eq!(buffer.get(1, 1), Color::RED);
        assert_eq!(buffer.get(2, 2), Color::RED);
        assert_eq!(buffer.get(3, 2), Color::BLACK);
    }

    #[test]
    fn test_to_map() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set(2, 1, Color::GREEN);

        let map = buffer.to_map();
        assert_eq!(map.len(), 6);
        assert_eq!(map[&(2, 1)], Color::GREEN);
        assert_eq!(map[&(0, 1)], Color::BLACK);
    }
}
