//! Positions in 3D space.

use std::ops::{Add, Sub};

use glam::DVec3;

use crate::error::{check_components, GeometryResult};
use crate::Vector3D;

/// A location in 3D space. Construction rejects NaN components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D(DVec3);

impl Point3D {
    pub const ORIGIN: Point3D = Point3D(DVec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> GeometryResult<Self> {
        check_components(x, y, z)?;
        Ok(Self(DVec3::new(x, y, z)))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Displacement from the origin to this point.
    #[inline]
    pub fn to_vector(self) -> Vector3D {
        Vector3D::from(self.0)
    }

    /// Point moved by `offset`.
    #[inline]
    pub fn translate(self, offset: Vector3D) -> Point3D {
        self + offset
    }

    pub fn squared_distance_to(&self, other: Point3D) -> f64 {
        self.0.distance_squared(other.0)
    }

    pub fn distance_to(&self, other: Point3D) -> f64 {
        self.0.distance(other.0)
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn axis(&self, index: usize) -> f64 {
        self.0[index]
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }
}

impl From<Vector3D> for Point3D {
    fn from(v: Vector3D) -> Self {
        Self(v.as_dvec3())
    }
}

impl From<DVec3> for Point3D {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl Sub for Point3D {
    type Output = Vector3D;
    fn sub(self, rhs: Point3D) -> Vector3D {
        Vector3D::from(self.0 - rhs.0)
    }
}

impl Add<Vector3D> for Point3D {
    type Output = Point3D;
    fn add(self, rhs: Vector3D) -> Point3D {
        Point3D(self.0 + rhs.as_dvec3())
    }
}

impl Sub<Vector3D> for Point3D {
    type Output = Point3D;
    fn sub(self, rhs: Vector3D) -> Point3D {
        Point3D(self.0 - rhs.as_dvec3())
    }
}
