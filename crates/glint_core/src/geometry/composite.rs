//! Constructive combinations of shapes.

use glint_math::{Interval, Point3D, Ray, Vector3D};

use super::{GeometricObject, Geometry, Sphere};

/// Everything covered by either child.
#[derive(Debug, Clone, PartialEq)]
pub struct Union {
    left: Box<GeometricObject>,
    right: Box<GeometricObject>,
}

impl Union {
    pub fn new(left: GeometricObject, right: GeometricObject) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn children(&self) -> (&GeometricObject, &GeometricObject) {
        (&self.left, &self.right)
    }
}

impl Geometry for Union {
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        match (self.left.intersect(ray, interval), self.right.intersect(ray, interval)) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (l, r) => l.or(r),
        }
    }

    /// Normal of whichever child the point lies on, left first.
    fn normal_at_point(&self, point: Point3D) -> Vector3D {
        if !self.left.is_on_object(point) && self.right.is_on_object(point) {
            self.right.normal_at_point(point)
        } else {
            self.left.normal_at_point(point)
        }
    }

    fn is_on_object(&self, point: Point3D) -> bool {
        self.left.is_on_object(point) || self.right.is_on_object(point)
    }

    fn translate(&self, offset: Vector3D) -> Self {
        Self::new(self.left.translate(offset), self.right.translate(offset))
    }
}

/// The lens shared by two spheres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereIntersection {
    first: Sphere,
    second: Sphere,
}

impl SphereIntersection {
    pub fn new(first: Sphere, second: Sphere) -> Self {
        Self { first, second }
    }

    pub fn spheres(&self) -> (Sphere, Sphere) {
        (self.first, self.second)
    }
}

impl Geometry for SphereIntersection {
    /// The ray enters the lens at the later of the two entries, provided it
    /// has not already left either sphere by then.
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        let (near1, far1) = self.first.roots(ray)?;
        let (near2, far2) = self.second.roots(ray)?;
        let entry = near1.max(near2);
        if entry > far1.min(far2) {
            return None;
        }
        interval.contains(entry).then_some(entry)
    }

    fn normal_at_point(&self, point: Point3D) -> Vector3D {
        if self.first.surface_distance(point) <= self.second.surface_distance(point) {
            self.first.normal_at_point(point)
        } else {
            self.second.normal_at_point(point)
        }
    }

    fn is_on_object(&self, point: Point3D) -> bool {
        (self.first.is_on_object(point) && self.second.contains_point(point))
            || (self.second.is_on_object(point) && self.first.contains_point(point))
    }

    fn translate(&self, offset: Vector3D) -> Self {
        Self::new(self.first.translate(offset), self.second.translate(offset))
    }
}
