//! Axis-aligned box.

use glint_math::{GeometryError, GeometryResult, Interval, Point3D, Ray, Vector3D};

use super::{Geometry, ON_OBJECT_TOLERANCE};

/// Pushes face points just past the face so rounding lands on that axis.
const NORMAL_BIAS: f64 = 1.0001;

/// An axis-aligned box between two corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    near: Point3D,
    far: Point3D,
    center: Point3D,
    half_extent: Vector3D,
}

impl Cube {
    /// `near` must be strictly less than `far` on every axis.
    pub fn new(near: Point3D, far: Point3D) -> GeometryResult<Self> {
        for axis in 0..3 {
            if !(near.axis(axis) < far.axis(axis)) {
                return Err(GeometryError::InvalidGeometry(format!(
                    "cube corners must satisfy near < far on every axis, got {:?} and {:?}",
                    near, far
                )));
            }
        }
        let half_extent = (far - near) * 0.5;
        Ok(Self {
            near,
            far,
            center: near + half_extent,
            half_extent,
        })
    }

    pub fn near(&self) -> Point3D {
        self.near
    }

    pub fn far(&self) -> Point3D {
        self.far
    }

    pub fn center(&self) -> Point3D {
        self.center
    }
}

impl Geometry for Cube {
    /// Slab test. A ray starting inside the box has a negative entry
    /// parameter and so misses any non-negative interval.
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        let mut t_near = f64::NEG_INFINITY;
        let mut t_far = f64::INFINITY;

        for axis in 0..3 {
            let origin = ray.origin.axis(axis);
            let dir = ray.direction.axis(axis);
            let t1 = (self.near.axis(axis) - origin) / dir;
            let t2 = (self.far.axis(axis) - origin) / dir;
            let (lo, hi) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
            // NaN slabs (origin on the boundary of a parallel slab) are skipped by max/min.
            t_near = t_near.max(lo);
            t_far = t_far.min(hi);
        }

        if !t_near.is_finite() || t_near > t_far || t_far < 0.0 {
            return None;
        }
        interval.contains(t_near).then_some(t_near)
    }

    /// Axis-aligned unit normal of the face nearest to `point`. On edges and
    /// corners the axis with the largest scaled offset wins, x before y
    /// before z on ties.
    fn normal_at_point(&self, point: Point3D) -> Vector3D {
        let scaled = (point - self.center).div_elementwise(self.half_extent) * NORMAL_BIAS;
        let rounded = scaled.round();

        let nonzero = (0..3).filter(|&axis| rounded.axis(axis) != 0.0).count();
        if nonzero == 1 {
            return rounded.normalize();
        }

        let mut dominant = 0;
        for axis in 1..3 {
            if scaled.axis(axis).abs() > scaled.axis(dominant).abs() {
                dominant = axis;
            }
        }
        let sign = if scaled.axis(dominant) < 0.0 { -1.0 } else { 1.0 };
        match dominant {
            0 => Vector3D::X * sign,
            1 => Vector3D::Y * sign,
            _ => Vector3D::Z * sign,
        }
    }

    fn is_on_object(&self, point: Point3D) -> bool {
        let offset = point - self.center;
        let mut on_face = false;
        for axis in 0..3 {
            let gap = offset.axis(axis).abs() - self.half_extent.axis(axis);
            if gap > ON_OBJECT_TOLERANCE {
                return false;
            }
            if gap.abs() < ON_OBJECT_TOLERANCE {
                on_face = true;
            }
        }
        on_face
    }

    fn translate(&self, offset: Vector3D) -> Self {
        Self {
            near: self.near + offset,
            far: self.far + offset,
            center: self.center + offset,
            half_extent: self.half_extent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3D {
        Point3D::new(x, y, z).unwrap()
    }

    fn unit_cube() -> Cube {
        Cube::new(p(-1.0, -1.0, -1.0), p(1.0, 1.0, 1.0)).unwrap()
    }

    #[test]
    fn test_face_normals() {
        let cube = unit_cube();
        assert_eq!(cube.normal_at_point(p(1.0, 0.0, 0.0)), Vector3D::X);
        assert_eq!(cube.normal_at_point(p(0.0, 0.0, -1.0)), -Vector3D::Z);

        for face in [
            p(1.0, 0.3, -0.2),
            p(-1.0, 0.5, 0.5),
            p(0.1, 1.0, 0.9),
            p(0.0, -1.0, 0.0),
            p(-0.7, 0.2, 1.0),
            p(0.4, 0.4, -1.0),
        ] {
            let n = cube.normal_at_point(face);
            assert!((n.norm() - 1.0).abs() < 1e-12);
            assert!(cube.is_on_object(face));
        }
    }

    #[test]
    fn test_edge_normal_is_axis_aligned() {
        let cube = unit_cube();
        let n = cube.normal_at_point(p(1.0, 1.0, 0.0));
        assert_eq!(n, Vector3D::X);

        let corner = cube.normal_at_point(p(-1.0, -1.0, -1.0));
        assert_eq!(corner, -Vector3D::X);
    }

    #[test]
    fn test_hit_front_face() {
        let cube = unit_cube();
        let ray = Ray::new(p(0.0, 0.0, 5.0), -Vector3D::Z);

        let t = cube.intersect(&ray, Interval::non_negative()).unwrap();
        assert!((t - 4.0).abs() < 1e-12);
        assert_eq!(cube.normal_at_point(ray.point_on_ray(t)), Vector3D::Z);
    }

    #[test]
    fn test_miss_and_inside() {
        let cube = unit_cube();
        let miss = Ray::new(p(3.0, 0.0, 5.0), -Vector3D::Z);
        assert!(cube.intersect(&miss, Interval::non_negative()).is_none());

        let behind = Ray::new(p(0.0, 0.0, 5.0), Vector3D::Z);
        assert!(cube.intersect(&behind, Interval::non_negative()).is_none());

        let inside = Ray::new(Point3D::ORIGIN, Vector3D::X);
        assert!(cube.intersect(&inside, Interval::non_negative()).is_none());
    }

    #[test]
    fn test_oblique_hit() {
        let cube = unit_cube();
        let ray = Ray::new(p(-3.0, 0.5, 0.0), Vector3D::new(1.0, 0.0, 0.0).unwrap());
        let t = cube.intersect(&ray, Interval::non_negative()).unwrap();
        assert!((t - 2.0).abs() < 1e-12);
        assert_eq!(cube.normal_at_point(ray.point_on_ray(t)), -Vector3D::X);
    }

    #[test]
    fn test_invalid_corners() {
        assert!(Cube::new(p(1.0, -1.0, -1.0), p(1.0, 1.0, 1.0)).is_err());
        assert!(Cube::new(p(1.0, 1.0, 1.0), p(-1.0, -1.0, -1.0)).is_err());
    }

    #[test]
    fn test_translate() {
        let moved = unit_cube().translate(Vector3D::Y * 2.0);
        assert_eq!(moved.near(), p(-1.0, 1.0, -1.0));
        assert_eq!(moved.center(), p(0.0, 2.0, 0.0));
        assert_eq!(moved.normal_at_point(p(0.0, 3.0, 0.0)), Vector3D::Y);
    }
}
