//! Infinite plane.

use glint_math::{GeometryError, GeometryResult, Interval, Point3D, Ray, Vector3D};

use super::{Geometry, ON_OBJECT_TOLERANCE, PARALLEL_EPSILON};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point3D,
    normal: Vector3D,
}

impl Plane {
    /// The normal is normalized; a zero normal is rejected.
    pub fn new(point: Point3D, normal: Vector3D) -> GeometryResult<Self> {
        if normal.norm_squared() == 0.0 {
            return Err(GeometryError::InvalidGeometry("plane normal must be non-zero".into()));
        }
        Ok(Self {
            point,
            normal: normal.normalize(),
        })
    }

    pub fn point(&self) -> Point3D {
        self.point
    }

    pub fn normal(&self) -> Vector3D {
        self.normal
    }
}

/// Ray parameter where `ray` meets the plane through `point` with `normal`,
/// or `None` when the ray runs parallel to it.
pub(crate) fn plane_parameter(point: Point3D, normal: Vector3D, ray: &Ray) -> Option<f64> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    Some(normal.dot(point - ray.origin) / denom)
}

impl Geometry for Plane {
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        let t = plane_parameter(self.point, self.normal, ray)?;
        interval.contains(t).then_some(t)
    }

    fn normal_at_point(&self, _point: Point3D) -> Vector3D {
        self.normal
    }

    fn is_on_object(&self, point: Point3D) -> bool {
        self.normal.dot(point - self.point).abs() < ON_OBJECT_TOLERANCE
    }

    fn translate(&self, offset: Vector3D) -> Self {
        Self {
            point: self.point + offset,
            normal: self.normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit_at_origin() {
        let plane = Plane::new(Point3D::ORIGIN, Vector3D::Z).unwrap();
        let ray = Ray::new(Point3D::new(0.0, 0.0, 1.0).unwrap(), -Vector3D::Z);

        let t = plane.intersect(&ray, Interval::non_negative()).unwrap();
        assert_eq!(ray.point_on_ray(t), Point3D::ORIGIN);
        assert!(plane.is_on_object(ray.point_on_ray(t)));
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = Plane::new(Point3D::ORIGIN, Vector3D::Y).unwrap();
        let ray = Ray::new(Point3D::new(0.0, 1.0, 0.0).unwrap(), Vector3D::X);
        assert!(plane.intersect(&ray, Interval::UNIVERSE).is_none());
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = Plane::new(Point3D::ORIGIN, Vector3D::Y).unwrap();
        let ray = Ray::new(Point3D::new(0.0, 1.0, 0.0).unwrap(), Vector3D::Y);
        assert!(plane.intersect(&ray, Interval::non_negative()).is_none());
    }

    #[test]
    fn test_normal_is_normalized() {
        let plane = Plane::new(Point3D::ORIGIN, Vector3D::Y * 5.0).unwrap();
        assert_eq!(plane.normal_at_point(Point3D::ORIGIN), Vector3D::Y);
        assert!(Plane::new(Point3D::ORIGIN, Vector3D::ZERO).is_err());
    }

    #[test]
    fn test_translate() {
        let plane = Plane::new(Point3D::ORIGIN, Vector3D::Y).unwrap().translate(Vector3D::Y);
        assert!(plane.is_on_object(Point3D::new(3.0, 1.0, -2.0).unwrap()));
    }
}
