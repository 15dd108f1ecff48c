//! Glint core scene types.
//!
//! This crate provides the pieces a scene is made of:
//! - Linear RGB colors and Phong materials
//! - Geometric objects with ray intersection and surface normals
//! - Surfaces, point lights and the `Scene` nearest-hit query
//! - JSON scene descriptions

pub mod color;
pub mod description;
pub mod error;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;
pub mod surface;

pub use color::Color;
pub use description::{load_scene, SceneDescription};
pub use error::{SceneError, SceneResult};
pub use geometry::{GeometricObject, Geometry};
pub use light::LightSource;
pub use material::Material;
pub use scene::{Hit, Scene, SceneBuilder};
pub use surface::Surface;

pub use glint_math::{GeometryError, Interval, Point3D, Ray, Vector3D};
