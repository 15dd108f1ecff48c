//! Phong material parameters.

use crate::Color;

pub const DEFAULT_PHONG_COEFFICIENT: f64 = 100.0;
pub const DEFAULT_REFLECTIVITY: f64 = 0.3;

/// Surface appearance used by the shading loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse and ambient albedo.
    pub color: Color,
    /// Specular reflectance.
    pub specular_coefficient: Color,
    /// Phong exponent; larger values give tighter highlights.
    pub phong_coefficient: f64,
    /// Fraction of light carried by the mirror bounce, in `[0, 1]`.
    pub reflectivity: f64,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular_coefficient: Color::GRAY_LIGHT,
            phong_coefficient: DEFAULT_PHONG_COEFFICIENT,
            reflectivity: DEFAULT_REFLECTIVITY,
        }
    }

    pub fn with_specular(mut self, specular_coefficient: Color) -> Self {
        self.specular_coefficient = specular_coefficient;
        self
    }

    pub fn with_phong(mut self, phong_coefficient: f64) -> Self {
        self.phong_coefficient = phong_coefficient;
        self
    }

    /// Sets the reflectivity, clamping it into `[0, 1]`.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        let clamped = if reflectivity.is_nan() { 0.0 } else { reflectivity.clamp(0.0, 1.0) };
        if clamped != reflectivity {
            log::warn!("Reflectivity {} out of range, clamped to {}", reflectivity, clamped);
        }
        self.reflectivity = clamped;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::GRAY_LIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        let m = Material::new(Color::RED);
        assert_eq!(m.color, Color::RED);
        assert_eq!(m.specular_coefficient, Color::GRAY_LIGHT);
        assert_eq!(m.phong_coefficient, 100.0);
        assert_eq!(m.reflectivity, 0.3);
    }

    #[test]
    fn test_reflectivity_clamped() {
        assert_eq!(Material::new(Color::RED).with_reflectivity(1.5).reflectivity, 1.0);
        assert_eq!(Material::new(Color::RED).with_reflectivity(-0.2).reflectivity, 0.0);
        assert_eq!(Material::new(Color::RED).with_reflectivity(0.6).reflectivity, 0.6);
    }
}
