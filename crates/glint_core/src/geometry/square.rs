//! Finite square lying in a plane.

use glint_math::{GeometryError, GeometryResult, Interval, Point3D, Ray, Vector3D};

use super::plane::plane_parameter;
use super::{Geometry, ON_OBJECT_TOLERANCE};

/// A square of side `size` centered on `center`, facing `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    center: Point3D,
    normal: Vector3D,
    size: f64,
    u: Vector3D,
    v: Vector3D,
}

impl Square {
    pub fn new(center: Point3D, normal: Vector3D, size: f64) -> GeometryResult<Self> {
        if normal.norm_squared() == 0.0 {
            return Err(GeometryError::InvalidGeometry("square normal must be non-zero".into()));
        }
        if !(size.is_finite() && size > 0.0) {
            return Err(GeometryError::InvalidGeometry(format!(
                "square size must be positive, got {}",
                size
            )));
        }

        let normal = normal.normalize();
        let helper = if normal.x().abs() < 0.9 { Vector3D::X } else { Vector3D::Y };
        let u = helper.cross(normal).normalize();
        let v = normal.cross(u);
        Ok(Self {
            center,
            normal,
            size,
            u,
            v,
        })
    }

    pub fn center(&self) -> Point3D {
        self.center
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    fn within_bounds(&self, point: Point3D, slack: f64) -> bool {
        let local = point - self.center;
        let half = self.size / 2.0 + slack;
        local.dot(self.u).abs() <= half && local.dot(self.v).abs() <= half
    }
}

impl Geometry for Square {
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        let t = plane_parameter(self.center, self.normal, ray)?;
        if !interval.contains(t) || !self.within_bounds(ray.point_on_ray(t), 0.0) {
            return None;
        }
        Some(t)
    }

    fn normal_at_point(&self, _point: Point3D) -> Vector3D {
        self.normal
    }

    fn is_on_object(&self, point: Point3D) -> bool {
        self.normal.dot(point - self.center).abs() < ON_OBJECT_TOLERANCE
            && self.within_bounds(point, ON_OBJECT_TOLERANCE)
    }

    fn translate(&self, offset: Vector3D) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3D {
        Point3D::new(x, y, z).unwrap()
    }

    #[test]
    fn test_square_bounds() {
        let square = Square::new(Point3D::ORIGIN, Vector3D::Y, 2.0).unwrap();

        let inside = Ray::new(p(0.5, 3.0, -0.5), -Vector3D::Y);
        assert_eq!(square.intersect(&inside, Interval::non_negative()), Some(3.0));

        let outside = Ray::new(p(1.5, 3.0, 0.0), -Vector3D::Y);
        assert!(square.intersect(&outside, Interval::non_negative()).is_none());
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let square = Square::new(Point3D::ORIGIN, Vector3D::new(1.0, 1.0, 0.0).unwrap(), 1.0).unwrap();
        assert!(square.u.dot(square.normal).abs() < 1e-12);
        assert!(square.v.dot(square.normal).abs() < 1e-12);
        assert!(square.u.dot(square.v).abs() < 1e-12);
        assert!((square.v.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_on_object_and_translate() {
        let square = Square::new(Point3D::ORIGIN, Vector3D::Z, 1.0).unwrap();
        assert!(square.is_on_object(p(0.5, 0.5, 0.0)));
        assert!(!square.is_on_object(p(0.6, 0.0, 0.0)));

        let moved = square.translate(Vector3D::Z);
        assert!(moved.is_on_object(p(0.0, 0.0, 1.0)));
        assert_eq!(moved.normal_at_point(Point3D::ORIGIN), Vector3D::Z);
    }

    #[test]
    fn test_invalid_square() {
        assert!(Square::new(Point3D::ORIGIN, Vector3D::ZERO, 1.0).is_err());
        assert!(Square::new(Point3D::ORIGIN, Vector3D::Z, 0.0).is_err());
    }
}
