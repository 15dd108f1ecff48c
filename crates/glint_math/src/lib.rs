//! Linear algebra for the Glint ray tracer.
//!
//! Double-precision vectors, points and matrices backed by `glam`, plus the
//! `Ray` and `Interval` types every intersection routine works with.

mod error;
mod interval;
mod matrix;
mod point;
mod ray;
mod vector;

pub use error::{GeometryError, GeometryResult};
pub use interval::Interval;
pub use matrix::Matrix3x3;
pub use point::Point3D;
pub use ray::Ray;
pub use vector::Vector3D;
