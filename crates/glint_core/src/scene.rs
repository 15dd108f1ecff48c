//! Scene container and nearest-hit queries.

use glint_math::{Interval, Point3D, Ray, Vector3D};

use crate::geometry::{GeometricObject, Geometry};
use crate::{LightSource, Material, SceneError, SceneResult, Surface};

/// Hits farther than this (in ray parameter units) are ignored by default.
pub const DEFAULT_MAX_HIT_DISTANCE: f64 = 100.0;

/// The nearest intersection of a ray with a scene.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the intersection.
    pub distance: f64,
    /// `ray.point_on_ray(distance)`.
    pub point: Point3D,
    pub surface: &'a Surface,
}

impl Hit<'_> {
    /// Surface normal at the hit point.
    pub fn normal(&self) -> Vector3D {
        self.surface.geometry.normal_at_point(self.point)
    }

    pub fn material(&self) -> &Material {
        &self.surface.material
    }
}

/// Surfaces and lights to render.
///
/// Build one with [`Scene::builder`] or load a description with
/// [`Scene::from_json_str`].
#[derive(Debug, Clone)]
pub struct Scene {
    surfaces: Vec<Surface>,
    ambient_light_intensity: f64,
    light_sources: Vec<LightSource>,
    max_hit_distance: f64,
}

impl Scene {
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// Nearest surface hit by `ray` within `interval`.
    ///
    /// Every surface is tested. Hits farther than the scene's maximum hit
    /// distance are discarded; on an exact tie the surface added first wins.
    pub fn hit(&self, ray: &Ray, interval: Interval) -> Option<Hit<'_>> {
        self.surfaces
            .iter()
            .filter_map(|surface| {
                surface
                    .geometry
                    .intersect(ray, interval)
                    .filter(|&t| t <= self.max_hit_distance)
                    .map(|t| (t, surface))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(distance, surface)| Hit {
                distance,
                point: ray.point_on_ray(distance),
                surface,
            })
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn number_of_surfaces(&self) -> usize {
        self.surfaces.len()
    }

    pub fn ambient_light_intensity(&self) -> f64 {
        self.ambient_light_intensity
    }

    pub fn light_sources(&self) -> &[LightSource] {
        &self.light_sources
    }

    /// Lights may be moved or retuned between frames.
    pub fn light_sources_mut(&mut self) -> &mut [LightSource] {
        &mut self.light_sources
    }

    /// Moves the light at `index`. Returns false if there is no such light.
    pub fn set_light_position(&mut self, index: usize, position: Point3D) -> bool {
        match self.light_sources.get_mut(index) {
            Some(light) => {
                light.position = position;
                true
            }
            None => false,
        }
    }

    pub fn max_hit_distance(&self) -> f64 {
        self.max_hit_distance
    }
}

/// Assembles a [`Scene`] one surface and light at a time.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    surfaces: Vec<Surface>,
    ambient_light_intensity: f64,
    light_sources: Vec<LightSource>,
    max_hit_distance: f64,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
            ambient_light_intensity: 0.0,
            light_sources: Vec::new(),
            max_hit_distance: DEFAULT_MAX_HIT_DISTANCE,
        }
    }
}

impl SceneBuilder {
    pub fn ambient_light_intensity(mut self, intensity: f64) -> Self {
        self.ambient_light_intensity = intensity;
        self
    }

    pub fn max_hit_distance(mut self, distance: f64) -> Self {
        self.max_hit_distance = distance;
        self
    }

    pub fn surface(mut self, geometry: GeometricObject, material: Material) -> Self {
        self.surfaces.push(Surface::new(geometry, material));
        self
    }

    pub fn light(mut self, light: LightSource) -> Self {
        self.light_sources.push(light);
        self
    }

    /// Validates the scalar settings and produces the scene.
    ///
    /// A scene without lights is allowed and renders with ambient light only.
    pub fn build(self) -> SceneResult<Scene> {
        if !(self.ambient_light_intensity.is_finite() && self.ambient_light_intensity >= 0.0) {
            return Err(SceneError::Invalid(format!(
                "ambient light intensity must be non-negative, got {}",
                self.ambient_light_intensity
            )));
        }
        if !(self.max_hit_distance > 0.0) {
            return Err(SceneError::Invalid(format!(
                "max hit distance must be positive, got {}",
                self.max_hit_distance
            )));
        }
        if self.light_sources.is_empty() {
            log::warn!("Scene has no light sources; only ambient light will be rendered");
        }

        log::debug!(
            "Built scene: {} surfaces, {} lights, ambient {}",
            self.surfaces.len(),
            self.light_sources.len(),
            self.ambient_light_intensity
        );

        Ok(Scene {
            surfaces: self.surfaces,
            ambient_light_intensity: self.ambient_light_intensity,
            light_sources: self.light_sources,
            max_hit_distance: self.max_hit_distance,
        })
    }
}
