//! Render settings.

use crate::{RenderError, RenderResult};

/// Settings for a [`RayTracer`](crate::RayTracer).
#[derive(Debug, Clone, PartialEq)]
pub struct RayTracerConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of mirror bounces after the primary hit
    pub max_recursion_depth: u32,
    /// Side of the jittered sub-pixel grid; each pixel takes level² samples
    pub anti_alias_max_level: u32,
    /// Worker count; defaults to the available parallelism
    pub threads: Option<usize>,
    /// Tile side in pixels; defaults to roughly four tiles per worker
    pub tile_size: Option<u32>,
    /// Seed for the jitter; `None` draws a fresh seed every frame
    pub seed: Option<u64>,
}

impl Default for RayTracerConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 700,
            max_recursion_depth: 3,
            anti_alias_max_level: 2,
            threads: None,
            tile_size: None,
            seed: None,
        }
    }
}

impl RayTracerConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_quality(mut self, max_recursion_depth: u32, anti_alias_max_level: u32) -> Self {
        self.max_recursion_depth = max_recursion_depth;
        self.anti_alias_max_level = anti_alias_max_level;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = Some(tile_size);
        self
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.anti_alias_max_level == 0 {
            return Err(RenderError::InvalidConfig("anti_alias_max_level must be at least 1".into()));
        }
        if self.threads == Some(0) {
            return Err(RenderError::InvalidConfig("threads must be at least 1".into()));
        }
        if self.tile_size == Some(0) {
            return Err(RenderError::InvalidConfig("tile_size must be at least 1".into()));
        }
        Ok(())
    }
}
