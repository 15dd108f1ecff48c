//! JSON scene descriptions.
//!
//! A description mirrors the in-memory scene but uses plain arrays for
//! points and colors so that files stay easy to write by hand:
//!
//! ```json
//! {
//!   "ambient_light_intensity": 0.2,
//!   "lights": [{ "position": [1.5, 1.5, 0.0], "intensity": 60.0 }],
//!   "surfaces": [
//!     {
//!       "geometry": { "type": "sphere", "center": [0, 0, 0], "radius": 1 },
//!       "material": { "color": "red", "reflectivity": 0.6 }
//!     }
//!   ]
//! }
//! ```
//!
//! Every value passes through the same constructors as hand-built scenes,
//! so invalid shapes are reported as [`SceneError::Geometry`].

use std::path::Path;

use glint_math::{Point3D, Vector3D};
use serde::Deserialize;

use crate::geometry::{GeometricObject, Sphere};
use crate::scene::DEFAULT_MAX_HIT_DISTANCE;
use crate::{Color, LightSource, Material, Scene, SceneError, SceneResult};

const DEFAULT_AMBIENT_LIGHT_INTENSITY: f64 = 0.2;

fn default_ambient() -> f64 {
    DEFAULT_AMBIENT_LIGHT_INTENSITY
}

fn default_max_hit_distance() -> f64 {
    DEFAULT_MAX_HIT_DISTANCE
}

/// Top-level scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default = "default_ambient")]
    pub ambient_light_intensity: f64,
    #[serde(default = "default_max_hit_distance")]
    pub max_hit_distance: f64,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    pub surfaces: Vec<SurfaceDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: [f64; 3],
    pub intensity: f64,
    #[serde(default)]
    pub color: Option<ColorDescription>,
}

/// Either a named constant such as `"gray_light"` or an `[r, g, b]` triple.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorDescription {
    Named(String),
    Rgb([f64; 3]),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceDescription {
    pub geometry: GeometryDescription,
    #[serde(default)]
    pub material: MaterialDescription,
}

/// Material fields; anything omitted takes the material default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialDescription {
    pub color: Option<ColorDescription>,
    pub specular: Option<ColorDescription>,
    pub phong: Option<f64>,
    pub reflectivity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    pub center: [f64; 3],
    pub radius: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryDescription {
    Sphere {
        center: [f64; 3],
        radius: f64,
    },
    Plane {
        point: [f64; 3],
        normal: [f64; 3],
    },
    Cube {
        near: [f64; 3],
        far: [f64; 3],
    },
    Triangle {
        a: [f64; 3],
        b: [f64; 3],
        c: [f64; 3],
    },
    Square {
        center: [f64; 3],
        normal: [f64; 3],
        size: f64,
    },
    Union {
        left: Box<GeometryDescription>,
        right: Box<GeometryDescription>,
    },
    Intersection {
        first: SphereDescription,
        second: SphereDescription,
    },
}

fn point([x, y, z]: [f64; 3]) -> SceneResult<Point3D> {
    Ok(Point3D::new(x, y, z)?)
}

fn vector([x, y, z]: [f64; 3]) -> SceneResult<Vector3D> {
    Ok(Vector3D::new(x, y, z)?)
}

impl ColorDescription {
    pub fn to_color(&self) -> SceneResult<Color> {
        match self {
            ColorDescription::Named(name) => {
                Color::named(name).ok_or_else(|| SceneError::Invalid(format!("unknown color name '{}'", name)))
            }
            ColorDescription::Rgb([r, g, b]) => Ok(Color::new(*r, *g, *b)),
        }
    }
}

impl MaterialDescription {
    pub fn to_material(&self) -> SceneResult<Material> {
        let color = match &self.color {
            Some(color) => color.to_color()?,
            None => Color::WHITE,
        };
        let mut material = Material::new(color);
        if let Some(specular) = &self.specular {
            material = material.with_specular(specular.to_color()?);
        }
        if let Some(phong) = self.phong {
            material = material.with_phong(phong);
        }
        if let Some(reflectivity) = self.reflectivity {
            material = material.with_reflectivity(reflectivity);
        }
        Ok(material)
    }
}

impl SphereDescription {
    fn to_sphere(&self) -> SceneResult<Sphere> {
        Ok(Sphere::new(point(self.center)?, self.radius)?)
    }
}

impl GeometryDescription {
    pub fn to_geometry(&self) -> SceneResult<GeometricObject> {
        let geometry = match self {
            Self::Sphere { center, radius } => GeometricObject::sphere(point(*center)?, *radius)?,
            Self::Plane { point: p, normal } => GeometricObject::plane(point(*p)?, vector(*normal)?)?,
            Self::Cube { near, far } => GeometricObject::cube(point(*near)?, point(*far)?)?,
            Self::Triangle { a, b, c } => GeometricObject::triangle(point(*a)?, point(*b)?, point(*c)?)?,
            Self::Square { center, normal, size } => {
                GeometricObject::square(point(*center)?, vector(*normal)?, *size)?
            }
            Self::Union { left, right } => GeometricObject::union(left.to_geometry()?, right.to_geometry()?),
            Self::Intersection { first, second } => {
                GeometricObject::intersection(first.to_sphere()?, second.to_sphere()?)
            }
        };
        Ok(geometry)
    }
}

impl TryFrom<SceneDescription> for Scene {
    type Error = SceneError;

    fn try_from(description: SceneDescription) -> SceneResult<Scene> {
        let mut builder = Scene::builder()
            .ambient_light_intensity(description.ambient_light_intensity)
            .max_hit_distance(description.max_hit_distance);

        for light in &description.lights {
            let mut source = LightSource::new(point(light.position)?, light.intensity)?;
            if let Some(color) = &light.color {
                source = source.with_color(color.to_color()?);
            }
            builder = builder.light(source);
        }

        for surface in &description.surfaces {
            builder = builder.surface(surface.geometry.to_geometry()?, surface.material.to_material()?);
        }

        builder.build()
    }
}

impl Scene {
    /// Parses and validates a JSON scene description.
    pub fn from_json_str(json: &str) -> SceneResult<Scene> {
        let description: SceneDescription = serde_json::from_str(json)?;
        Scene::try_from(description)
    }
}

/// Loads a scene description from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let json = std::fs::read_to_string(path)?;
    let scene = Scene::from_json_str(&json)?;

    log::info!(
        "Loaded {} surfaces and {} lights from {}",
        scene.number_of_surfaces(),
        scene.light_sources().len(),
        path.display()
    );
    Ok(scene)
}
