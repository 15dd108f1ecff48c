//! Pixel to image-plane mapping and jittered supersampling.

use glint_core::{Color, Scene};
use rand::Rng;

use crate::shading::color_of_ray;
use crate::Camera;

/// Extent of the image plane in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlane {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for ImagePlane {
    fn default() -> Self {
        Self {
            left: -0.5,
            right: 0.5,
            bottom: -0.5,
            top: 0.5,
        }
    }
}

impl ImagePlane {
    /// Maps (possibly fractional) pixel coordinates to `(u, v)`, sampling at
    /// `(i + 0.5, j + 0.5)`. Row `j = 0` is the bottom of the plane.
    pub fn pixel_to_uv(&self, i: f64, j: f64, width: u32, height: u32) -> (f64, f64) {
        let u = self.left + (self.right - self.left) * (i + 0.5) / width as f64;
        let v = self.bottom + (self.top - self.bottom) * (j + 0.5) / height as f64;
        (u, v)
    }
}

/// Everything needed to shade one pixel. Cheap to copy into worker tasks.
#[derive(Clone, Copy)]
pub struct PixelSampler<'a> {
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    pub image_plane: ImagePlane,
    pub width: u32,
    pub height: u32,
    pub max_recursion_depth: u32,
    pub anti_alias_max_level: u32,
}

impl<'a> PixelSampler<'a> {
    pub fn new(scene: &'a Scene, camera: &'a Camera, width: u32, height: u32) -> Self {
        Self {
            scene,
            camera,
            image_plane: ImagePlane::default(),
            width,
            height,
            max_recursion_depth: 3,
            anti_alias_max_level: 1,
        }
    }

    /// Mean of an `L x L` grid of samples, each jittered within its cell.
    pub fn render_pixel<R: Rng>(&self, x: u32, y: u32, rng: &mut R) -> Color {
        let level = self.anti_alias_max_level.max(1);
        let cell = 1.0 / level as f64;
        let mut sum = Color::BLACK;

        for p in 0..level {
            for q in 0..level {
                let i = x as f64 + (p as f64 + rng.gen::<f64>()) * cell;
                let j = y as f64 + (q as f64 + rng.gen::<f64>()) * cell;
                let (u, v) = self.image_plane.pixel_to_uv(i, j, self.width, self.height);
                sum += color_of_ray(self.scene, &self.camera.ray(u, v), self.max_recursion_depth);
            }
        }

        sum / (level * level) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{GeometricObject, Material};
    use glint_math::Point3D;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pixel_to_uv() {
        let plane = ImagePlane::default();
        let (u, v) = plane.pixel_to_uv(0.0, 0.0, 100, 50);
        assert!((u - (-0.5 + 0.5 / 100.0)).abs() < 1e-12);
        assert!((v - (-0.5 + 0.5 / 50.0)).abs() < 1e-12);

        let (u, v) = plane.pixel_to_uv(99.0, 49.0, 100, 50);
        assert!(u < 0.5 && u > 0.49);
        assert!(v < 0.5 && v > 0.48);
    }

    #[test]
    fn test_uniform_scene_averages_to_constant() {
        // An ambient-only wall behind every ray: all samples agree.
        let scene = Scene::builder()
            .ambient_light_intensity(0.5)
            .surface(
                GeometricObject::plane(Point3D::new(0.0, 0.0, -10.0).unwrap(), glint_math::Vector3D::Z).unwrap(),
                Material::new(Color::WHITE).with_reflectivity(0.0),
            )
            .build()
            .unwrap();
        let camera = Camera::default();
        let mut sampler = PixelSampler::new(&scene, &camera, 8, 8);
        sampler.anti_alias_max_level = 3;

        let mut rng = StdRng::seed_from_u64(42);
        let color = sampler.render_pixel(4, 4, &mut rng);
        assert!((color.r - 0.5).abs() < 1e-12);
        assert!((color.b - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_same_pixel() {
        let scene = Scene::builder()
            .ambient_light_intensity(1.0)
            .surface(
                GeometricObject::sphere(Point3D::ORIGIN, 0.6).unwrap(),
                Material::new(Color::CYAN),
            )
            .build()
            .unwrap();
        let camera = Camera::default();
        let mut sampler = PixelSampler::new(&scene, &camera, 16, 16);
        sampler.anti_alias_max_level = 2;

        let a = sampler.render_pixel(3, 12, &mut StdRng::seed_from_u64(7));
        let b = sampler.render_pixel(3, 12, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
