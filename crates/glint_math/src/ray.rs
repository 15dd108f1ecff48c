use crate::{Point3D, Vector3D};

/// A ray in 3D space: a half-line starting at `origin` along `direction`.
///
/// The direction is not required to be unit length; shapes solve for `t`
/// in units of `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3D,
    pub direction: Vector3D,
}

impl Ray {
    pub fn new(origin: Point3D, direction: Vector3D) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Point3D {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector3D {
        self.direction
    }

    /// Returns: origin + t * direction
    pub fn point_on_ray(&self, t: f64) -> Point3D {
        self.origin + self.direction * t
    }

    /// Alias for [`Ray::point_on_ray`].
    #[inline]
    pub fn at(&self, t: f64) -> Point3D {
        self.point_on_ray(t)
    }

    /// Same direction, origin moved by `offset`.
    pub fn translate(&self, offset: Vector3D) -> Ray {
        Ray::new(self.origin + offset, self.direction)
    }
}
