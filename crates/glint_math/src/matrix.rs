use std::ops::{Add, Mul, Sub};

use glam::DMat3;

use crate::Vector3D;

/// Column-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3(DMat3);

impl Matrix3x3 {
    pub const IDENTITY: Matrix3x3 = Matrix3x3(DMat3::IDENTITY);

    pub fn from_columns(c1: Vector3D, c2: Vector3D, c3: Vector3D) -> Self {
        Self(DMat3::from_cols(c1.as_dvec3(), c2.as_dvec3(), c3.as_dvec3()))
    }

    pub fn column(&self, index: usize) -> Vector3D {
        Vector3D::from(self.0.col(index))
    }

    pub fn determinant(&self) -> f64 {
        self.0.determinant()
    }

    pub fn transpose(&self) -> Matrix3x3 {
        Matrix3x3(self.0.transpose())
    }
}

impl Mul<Vector3D> for Matrix3x3 {
    type Output = Vector3D;
    fn mul(self, rhs: Vector3D) -> Vector3D {
        Vector3D::from(self.0 * rhs.as_dvec3())
    }
}

impl Mul for Matrix3x3 {
    type Output = Matrix3x3;
    fn mul(self, rhs: Matrix3x3) -> Matrix3x3 {
        Matrix3x3(self.0 * rhs.0)
    }
}

impl Add for Matrix3x3 {
    type Output = Matrix3x3;
    fn add(self, rhs: Matrix3x3) -> Matrix3x3 {
        Matrix3x3(self.0 + rhs.0)
    }
}

impl Sub for Matrix3x3 {
    type Output = Matrix3x3;
    fn sub(self, rhs: Matrix3x3) -> Matrix3x3 {
        Matrix3x3(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D::new(x, y, z).unwrap()
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Matrix3x3::IDENTITY.determinant(), 1.0);

        let m = Matrix3x3::from_columns(v(2.0, 0.0, 0.0), v(0.0, 3.0, 0.0), v(1.0, 1.0, 4.0));
        assert!((m.determinant() - 24.0).abs() < 1e-12);

        let singular = Matrix3x3::from_columns(v(1.0, 2.0, 3.0), v(2.0, 4.0, 6.0), v(0.0, 1.0, 0.0));
        assert!(singular.determinant().abs() < 1e-12);
    }

    #[test]
    fn test_columns_and_transpose() {
        let m = Matrix3x3::from_columns(v(1.0, 2.0, 3.0), v(4.0, 5.0, 6.0), v(7.0, 8.0, 9.0));
        assert_eq!(m.column(1), v(4.0, 5.0, 6.0));
        assert_eq!(m.transpose().column(0), v(1.0, 4.0, 7.0));
    }

    #[test]
    fn test_mul_vector() {
        let m = Matrix3x3::from_columns(v(1.0, 0.0, 0.0), v(0.0, 2.0, 0.0), v(0.0, 0.0, 3.0));
        assert_eq!(m * v(1.0, 1.0, 1.0), v(1.0, 2.0, 3.0));
        assert_eq!(m * Matrix3x3::IDENTITY, m);
        assert_eq!((m + m) - m, m);
    }
}
