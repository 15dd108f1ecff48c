//! Sphere primitive.

use glint_math::{GeometryError, GeometryResult, Interval, Point3D, Ray, Vector3D};

use super::{Geometry, ON_OBJECT_TOLERANCE};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3D,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be finite and positive.
    pub fn new(center: Point3D, radius: f64) -> GeometryResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidGeometry(format!(
                "sphere radius must be positive, got {}",
                radius
            )));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point3D {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Both roots of the ray/sphere quadratic, near first, in units of the
    /// ray direction. `None` when the ray misses.
    pub fn roots(&self, ray: &Ray) -> Option<(f64, f64)> {
        let oc = ray.origin - self.center;
        let d = ray.direction;
        let a = d.norm_squared();
        if a == 0.0 {
            return None;
        }

        let f = d.dot(oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = f * f - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        Some(((-f - sqrtd) / a, (-f + sqrtd) / a))
    }

    /// How far `point` lies from the surface.
    pub(crate) fn surface_distance(&self, point: Point3D) -> f64 {
        (point.distance_to(self.center) - self.radius).abs()
    }

    pub(crate) fn contains_point(&self, point: Point3D) -> bool {
        point.distance_to(self.center) <= self.radius + ON_OBJECT_TOLERANCE
    }
}

impl Geometry for Sphere {
    /// Only the near root is considered; a ray starting inside the sphere
    /// reports no hit for the usual non-negative intervals.
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        let (near, _) = self.roots(ray)?;
        interval.contains(near).then_some(near)
    }

    fn normal_at_point(&self, point: Point3D) -> Vector3D {
        (point - self.center).normalize()
    }

    fn is_on_object(&self, point: Point3D) -> bool {
        self.surface_distance(point) < ON_OBJECT_TOLERANCE
    }

    fn translate(&self, offset: Vector3D) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
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
    fn test_sphere_hit_near_root() {
        let sphere = Sphere::new(p(1.0, 1.0, 1.0), 1.0).unwrap();
        let dir = Vector3D::new(1.0, 1.0, 1.0).unwrap().normalize();
        let ray = Ray::new(Point3D::ORIGIN, dir);

        let t = sphere.intersect(&ray, Interval::non_negative()).unwrap();
        assert!((t - (3.0f64.sqrt() - 1.0)).abs() < 1e-9);
        assert!(sphere.is_on_object(ray.point_on_ray(t)));
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(p(0.0, 0.0, -1.0), 0.5).unwrap();

        // Ray pointing away from sphere
        let ray = Ray::new(Point3D::ORIGIN, Vector3D::Y);
        assert!(sphere.intersect(&ray, Interval::non_negative()).is_none());
    }

    #[test]
    fn test_sphere_from_inside_is_miss() {
        let sphere = Sphere::new(Point3D::ORIGIN, 2.0).unwrap();
        let ray = Ray::new(Point3D::ORIGIN, Vector3D::X);
        assert!(sphere.intersect(&ray, Interval::non_negative()).is_none());
    }

    #[test]
    fn test_sphere_interval_rejects_near_root() {
        let sphere = Sphere::new(p(0.0, 0.0, -5.0), 1.0).unwrap();
        let ray = Ray::new(Point3D::ORIGIN, -Vector3D::Z);
        assert_eq!(sphere.intersect(&ray, Interval::non_negative()), Some(4.0));
        assert!(sphere.intersect(&ray, Interval::new(0.0, 3.0)).is_none());
    }

    #[test]
    fn test_sphere_normal_and_translate() {
        let sphere = Sphere::new(Point3D::ORIGIN, 2.0).unwrap();
        assert_eq!(sphere.normal_at_point(p(0.0, 2.0, 0.0)), Vector3D::Y);

        let moved = sphere.translate(Vector3D::X);
        assert_eq!(moved.center(), p(1.0, 0.0, 0.0));
        assert_eq!(moved.radius(), 2.0);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(Sphere::new(Point3D::ORIGIN, 0.0).is_err());
        assert!(Sphere::new(Point3D::ORIGIN, -1.0).is_err());
        assert!(Sphere::new(Point3D::ORIGIN, f64::NAN).is_err());
    }
}
