//! Point lights.

use glint_math::Point3D;

use crate::{Color, SceneError, SceneResult};

/// A point light radiating `intensity` uniformly in all directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub position: Point3D,
    pub intensity: f64,
    /// Tints the diffuse and specular terms. White leaves them unchanged.
    pub color: Color,
}

impl LightSource {
    /// Create a white light. The intensity must be finite and positive.
    pub fn new(position: Point3D, intensity: f64) -> SceneResult<Self> {
        if !(intensity.is_finite() && intensity > 0.0) {
            return Err(SceneError::InvalidLight(format!(
                "intensity must be positive, got {}",
                intensity
            )));
        }
        Ok(Self {
            position,
            intensity,
            color: Color::WHITE,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
