//! Direction vectors.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::DVec3;

use crate::error::{check_components, GeometryResult};
use crate::Point3D;

/// A direction or displacement in 3D space.
///
/// Construction through [`Vector3D::new`] rejects NaN components. Arithmetic
/// on valid vectors is unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D(DVec3);

impl Vector3D {
    pub const ZERO: Vector3D = Vector3D(DVec3::ZERO);
    pub const X: Vector3D = Vector3D(DVec3::X);
    pub const Y: Vector3D = Vector3D(DVec3::Y);
    pub const Z: Vector3D = Vector3D(DVec3::Z);

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

    #[inline]
    pub fn dot(&self, other: Vector3D) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn cross(&self, other: Vector3D) -> Vector3D {
        Vector3D(self.0.cross(other.0))
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.0.length()
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.0.length_squared()
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(&self) -> Vector3D {
        Vector3D(self.0.normalize_or_zero())
    }

    /// Rounds each component to the nearest integer; NaN becomes 0.
    pub fn round(&self) -> Vector3D {
        let round = |v: f64| if v.is_nan() { 0.0 } else { v.round() };
        Vector3D(DVec3::new(round(self.0.x), round(self.0.y), round(self.0.z)))
    }

    /// Component-wise product.
    pub fn mul_elementwise(&self, other: Vector3D) -> Vector3D {
        Vector3D(self.0 * other.0)
    }

    /// Component-wise quotient.
    pub fn div_elementwise(&self, other: Vector3D) -> Vector3D {
        Vector3D(self.0 / other.0)
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn axis(&self, index: usize) -> f64 {
        self.0[index]
    }

    pub fn to_point(self) -> Point3D {
        Point3D::from(self)
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector3D> for DVec3 {
    fn from(v: Vector3D) -> Self {
        v.0
    }
}

impl Add for Vector3D {
    type Output = Vector3D;
    fn add(self, rhs: Vector3D) -> Vector3D {
        Vector3D(self.0 + rhs.0)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Vector3D) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;
    fn sub(self, rhs: Vector3D) -> Vector3D {
        Vector3D(self.0 - rhs.0)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;
    fn neg(self) -> Vector3D {
        Vector3D(-self.0)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;
    fn mul(self, rhs: f64) -> Vector3D {
        Vector3D(self.0 * rhs)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;
    fn mul(self, rhs: Vector3D) -> Vector3D {
        Vector3D(rhs.0 * self)
    }
}

impl Div<f64> for Vector3D {
    type Output = Vector3D;
    fn div(self, rhs: f64) -> Vector3D {
        Vector3D(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;

    #[test]
    fn test_vector_rejects_nan() {
        let err = Vector3D::new(1.0, f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidValue { what: "y", .. }));
        assert!(Vector3D::new(f64::INFINITY, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vector3D::new(1.0, 2.0, 3.0).unwrap();
        let b = Vector3D::new(2.0, 3.0, 4.0).unwrap();
        assert_eq!(a.dot(b), 20.0);

        assert_eq!(Vector3D::X.cross(Vector3D::Y), Vector3D::Z);
        assert_eq!(Vector3D::Y.cross(Vector3D::X), -Vector3D::Z);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vector3D::new(3.0, -4.0, 12.0).unwrap();
        assert!((v.normalize().norm() - 1.0).abs() < 1e-9);
        assert_eq!(Vector3D::ZERO.normalize(), Vector3D::ZERO);
    }

    #[test]
    fn test_round() {
        let v = Vector3D::new(0.49, -1.6, 2.5).unwrap();
        assert_eq!(v.round(), Vector3D::new(0.0, -2.0, 3.0).unwrap());

        let nan = Vector3D::from(DVec3::new(f64::NAN, 1.2, 0.0));
        assert_eq!(nan.round(), Vector3D::new(0.0, 1.0, 0.0).unwrap());
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vector3D::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!((v * 2.0) / 2.0, v);
        assert_eq!(v - v, Vector3D::ZERO);
    }
}
