//! Built-in demo scenes.

use anyhow::Result;
use glint_core::geometry::Sphere;
use glint_core::{Color, GeometricObject, LightSource, Material, Scene};
use glint_math::{Point3D, Vector3D};

/// Intensity that gives roughly unit irradiance at the light's orbit radius.
const DEMO_LIGHT_INTENSITY: f64 = 60.0;

pub const BUILTIN_SCENES: &[&str] = &["spheres", "cube", "showcase"];

fn p(x: f64, y: f64, z: f64) -> Result<Point3D> {
    Ok(Point3D::new(x, y, z)?)
}

fn v(x: f64, y: f64, z: f64) -> Result<Vector3D> {
    Ok(Vector3D::new(x, y, z)?)
}

fn orbit_light() -> Result<LightSource> {
    Ok(LightSource::new(p(0.0, 1.5, 1.5)?, DEMO_LIGHT_INTENSITY)?)
}

fn material(color: Color, reflectivity: f64) -> Material {
    Material::new(color).with_reflectivity(reflectivity)
}

/// Looks up a built-in scene by name. `None` means the name is not built in.
pub fn builtin(name: &str) -> Result<Option<Scene>> {
    let scene = match name {
        "spheres" | "1" => spheres()?,
        "cube" | "2" => cube()?,
        "showcase" => showcase()?,
        _ => return Ok(None),
    };
    Ok(Some(scene))
}

/// Reflective spheres over a tilted floor.
fn spheres() -> Result<Scene> {
    let scene = Scene::builder()
        .ambient_light_intensity(2.0)
        .surface(GeometricObject::sphere(p(0.5, 0.0, 0.0)?, 1.0)?, material(Color::RED, 0.6))
        .surface(
            GeometricObject::triangle(p(0.5, 0.2, 0.0)?, p(1.0, 0.2, 0.0)?, p(0.0, 1.0, 0.3)?)?,
            material(Color::RED, 0.1),
        )
        .surface(GeometricObject::sphere(p(-1.0, -0.5, 0.0)?, 0.5)?, material(Color::BLUE, 0.7))
        .surface(GeometricObject::sphere(p(-1.0, 0.5, 0.0)?, 0.25)?, material(Color::WHITE, 0.7))
        .surface(GeometricObject::sphere(p(-0.5, -0.8, 0.5)?, 0.2)?, material(Color::YELLOW, 0.75))
        .surface(GeometricObject::sphere(p(-0.1, -0.9, 0.5)?, 0.1)?, material(Color::MAGENTA, 0.85))
        .surface(
            GeometricObject::plane(p(0.0, -1.0, 0.0)?, v(0.0, 1.0, 0.1)?)?,
            material(Color::GREEN, 0.7),
        )
        .light(orbit_light()?)
        .build()?;
    Ok(scene)
}

/// A matte cube on a white floor.
fn cube() -> Result<Scene> {
    let scene = Scene::builder()
        .ambient_light_intensity(0.2)
        .surface(
            GeometricObject::plane(p(0.0, -1.0, 0.0)?, Vector3D::Y)?,
            material(Color::WHITE, 0.0),
        )
        .surface(
            GeometricObject::cube(p(0.0, 0.0, -1.0)?, p(1.0, 1.0, 0.0)?)?,
            Material::new(Color::BLUE),
        )
        .light(orbit_light()?)
        .build()?;
    Ok(scene)
}

/// One of each composite and finite shape.
fn showcase() -> Result<Scene> {
    let lens = GeometricObject::intersection(
        Sphere::new(p(-0.9, 0.0, 0.0)?, 0.6)?,
        Sphere::new(p(-0.5, 0.0, 0.0)?, 0.6)?,
    );
    let snowman = GeometricObject::union(
        GeometricObject::sphere(p(0.8, -0.5, -0.3)?, 0.45)?,
        GeometricObject::sphere(p(0.8, 0.1, -0.3)?, 0.3)?,
    );

    let scene = Scene::builder()
        .ambient_light_intensity(0.3)
        .surface(
            GeometricObject::square(p(0.0, -1.0, 0.0)?, Vector3D::Y, 4.0)?,
            material(Color::GRAY_LIGHT, 0.5),
        )
        .surface(lens, material(Color::CYAN, 0.2))
        .surface(snowman, material(Color::WHITE, 0.3))
        .surface(
            GeometricObject::cube(p(-0.2, -1.0, -1.2)?, p(0.4, -0.4, -0.6)?)?,
            material(Color::MAGENTA, 0.1),
        )
        .light(orbit_light()?)
        .build()?;
    Ok(scene)
}
