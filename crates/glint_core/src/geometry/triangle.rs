//! Triangle primitive.

use glint_math::{GeometryError, GeometryResult, Interval, Matrix3x3, Point3D, Ray, Vector3D};

use super::{Geometry, DETERMINANT_EPSILON, ON_OBJECT_TOLERANCE};

/// A single triangle with a precomputed face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point3D,
    b: Point3D,
    c: Point3D,
    ab: Vector3D,
    ac: Vector3D,
    normal: Vector3D,
}

impl Triangle {
    /// Rejects collinear vertices.
    pub fn new(a: Point3D, b: Point3D, c: Point3D) -> GeometryResult<Self> {
        let ab = a - b;
        let ac = a - c;
        let cross = ab.cross(ac);
        if cross.norm() < DETERMINANT_EPSILON {
            return Err(GeometryError::InvalidGeometry(format!(
                "triangle vertices are collinear: {:?}, {:?}, {:?}",
                a, b, c
            )));
        }
        Ok(Self {
            a,
            b,
            c,
            ab,
            ac,
            normal: cross.normalize(),
        })
    }

    pub fn vertices(&self) -> [Point3D; 3] {
        [self.a, self.b, self.c]
    }
}

impl Geometry for Triangle {
    /// Solves `beta * ab + gamma * ac + t * d = a - o` with Cramer's rule.
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        let d = ray.direction;
        let ao = self.a - ray.origin;

        let det_a = Matrix3x3::from_columns(self.ab, self.ac, d).determinant();
        if det_a.abs() < DETERMINANT_EPSILON {
            return None;
        }

        let t = Matrix3x3::from_columns(self.ab, self.ac, ao).determinant() / det_a;
        if !interval.contains(t) {
            return None;
        }

        let gamma = Matrix3x3::from_columns(self.ab, ao, d).determinant() / det_a;
        if !(0.0..=1.0).contains(&gamma) {
            return None;
        }

        let beta = Matrix3x3::from_columns(ao, self.ac, d).determinant() / det_a;
        if beta < 0.0 || beta > 1.0 - gamma {
            return None;
        }

        Some(t)
    }

    fn normal_at_point(&self, _point: Point3D) -> Vector3D {
        self.normal
    }

    /// In the triangle's plane and on the inner side of all three edges.
    fn is_on_object(&self, point: Point3D) -> bool {
        if self.normal.dot(point - self.a).abs() > ON_OBJECT_TOLERANCE {
            return false;
        }
        let edges = [(self.a, self.b), (self.b, self.c), (self.c, self.a)];
        let signs: Vec<f64> = edges
            .iter()
            .map(|&(from, to)| self.normal.dot((to - from).cross(point - from)))
            .collect();
        signs.iter().all(|&s| s >= -ON_OBJECT_TOLERANCE) || signs.iter().all(|&s| s <= ON_OBJECT_TOLERANCE)
    }

    fn translate(&self, offset: Vector3D) -> Self {
        Self {
            a: self.a + offset,
            b: self.b + offset,
            c: self.c + offset,
            ..*self
        }
    }
}
