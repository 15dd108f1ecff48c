//! Geometric objects and their ray intersection routines.
//!
//! Each shape implements [`Geometry`]; [`GeometricObject`] is the closed set
//! of shapes a scene can hold and dispatches by `match`. Shapes never apply
//! a self-intersection offset themselves: callers choose the parameter
//! interval.

mod composite;
mod cube;
mod plane;
mod sphere;
mod square;
mod triangle;

pub use composite::{SphereIntersection, Union};
pub use cube::Cube;
pub use plane::Plane;
pub use sphere::Sphere;
pub use square::Square;
pub use triangle::Triangle;

use glint_math::{GeometryResult, Interval, Point3D, Ray, Vector3D};

/// Distance within which a point counts as lying on a surface.
pub const ON_OBJECT_TOLERANCE: f64 = 1e-6;

/// `|D·N|` below this is treated as a ray parallel to a plane.
pub(crate) const PARALLEL_EPSILON: f64 = 1e-12;

/// Determinants below this are treated as singular.
pub(crate) const DETERMINANT_EPSILON: f64 = 1e-12;

/// Operations every shape supports.
pub trait Geometry {
    /// Smallest accepted ray parameter inside `interval`, if any.
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64>;

    /// Unit surface normal at a point on the surface.
    fn normal_at_point(&self, point: Point3D) -> Vector3D;

    /// Whether `point` lies on the surface, within [`ON_OBJECT_TOLERANCE`].
    fn is_on_object(&self, point: Point3D) -> bool;

    /// Copy of the shape moved by `offset`.
    fn translate(&self, offset: Vector3D) -> Self
    where
        Self: Sized;
}

/// Any shape that can be placed in a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometricObject {
    Sphere(Sphere),
    Plane(Plane),
    Cube(Cube),
    Triangle(Triangle),
    Square(Square),
    Union(Union),
    Intersection(SphereIntersection),
}

impl GeometricObject {
    pub fn sphere(center: Point3D, radius: f64) -> GeometryResult<Self> {
        Sphere::new(center, radius).map(Self::Sphere)
    }

    pub fn plane(point: Point3D, normal: Vector3D) -> GeometryResult<Self> {
        Plane::new(point, normal).map(Self::Plane)
    }

    pub fn cube(near: Point3D, far: Point3D) -> GeometryResult<Self> {
        Cube::new(near, far).map(Self::Cube)
    }

    pub fn triangle(a: Point3D, b: Point3D, c: Point3D) -> GeometryResult<Self> {
        Triangle::new(a, b, c).map(Self::Triangle)
    }

    pub fn square(center: Point3D, normal: Vector3D, size: f64) -> GeometryResult<Self> {
        Square::new(center, normal, size).map(Self::Square)
    }

    pub fn union(left: GeometricObject, right: GeometricObject) -> Self {
        Self::Union(Union::new(left, right))
    }

    pub fn intersection(first: Sphere, second: Sphere) -> Self {
        Self::Intersection(SphereIntersection::new(first, second))
    }

    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere(_) => "sphere",
            Self::Plane(_) => "plane",
            Self::Cube(_) => "cube",
            Self::Triangle(_) => "triangle",
            Self::Square(_) => "square",
            Self::Union(_) => "union",
            Self::Intersection(_) => "intersection",
        }
    }
}

impl Geometry for GeometricObject {
    fn intersect(&self, ray: &Ray, interval: Interval) -> Option<f64> {
        match self {
            Self::Sphere(s) => s.intersect(ray, interval),
            Self::Plane(p) => p.intersect(ray, interval),
            Self::Cube(c) => c.intersect(ray, interval),
            Self::Triangle(t) => t.intersect(ray, interval),
            Self::Square(s) => s.intersect(ray, interval),
            Self::Union(u) => u.intersect(ray, interval),
            Self::Intersection(i) => i.intersect(ray, interval),
        }
    }

    fn normal_at_point(&self, point: Point3D) -> Vector3D {
        match self {
            Self::Sphere(s) => s.normal_at_point(point),
            Self::Plane(p) => p.normal_at_point(point),
            Self::Cube(c) => c.normal_at_point(point),
            Self::Triangle(t) => t.normal_at_point(point),
            Self::Square(s) => s.normal_at_point(point),
            Self::Union(u) => u.normal_at_point(point),
            Self::Intersection(i) => i.normal_at_point(point),
        }
    }

    fn is_on_object(&self, point: Point3D) -> bool {
        match self {
            Self::Sphere(s) => s.is_on_object(point),
            Self::Plane(p) => p.is_on_object(point),
            Self::Cube(c) => c.is_on_object(point),
            Self::Triangle(t) => t.is_on_object(point),
            Self::Square(s) => s.is_on_object(point),
            Self::Union(u) => u.is_on_object(point),
            Self::Intersection(i) => i.is_on_object(point),
        }
    }

    fn translate(&self, offset: Vector3D) -> Self {
        match self {
            Self::Sphere(s) => Self::Sphere(s.translate(offset)),
            Self::Plane(p) => Self::Plane(p.translate(offset)),
            Self::Cube(c) => Self::Cube(c.translate(offset)),
            Self::Triangle(t) => Self::Triangle(t.translate(offset)),
            Self::Square(s) => Self::Square(s.translate(offset)),
            Self::Union(u) => Self::Union(u.translate(offset)),
            Self::Intersection(i) => Self::Intersection(i.translate(offset)),
        }
    }
}

macro_rules! impl_from_shape {
    ($($shape:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$shape> for GeometricObject {
                fn from(shape: $shape) -> Self {
                    Self::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape! {
    Sphere => Sphere,
    Plane => Plane,
    Cube => Cube,
    Triangle => Triangle,
    Square => Square,
    Union => Union,
    SphereIntersection => Intersection,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3D {
        Point3D::new(x, y, z).unwrap()
    }

    #[test]
    fn test_dispatch_matches_shape() {
        let sphere = Sphere::new(p(0.0, 0.0, -3.0), 1.0).unwrap();
        let object = GeometricObject::from(sphere);
        let ray = Ray::new(Point3D::ORIGIN, -Vector3D::Z);

        assert_eq!(
            object.intersect(&ray, Interval::non_negative()),
            sphere.intersect(&ray, Interval::non_negative())
        );
        assert_eq!(object.kind(), "sphere");
    }

    #[test]
    fn test_translate_every_variant() {
        let offset = Vector3D::new(0.0, 0.0, -2.0).unwrap();
        let objects = vec![
            GeometricObject::sphere(Point3D::ORIGIN, 0.5).unwrap(),
            GeometricObject::plane(Point3D::ORIGIN, Vector3D::Z).unwrap(),
            GeometricObject::cube(p(-0.5, -0.5, -0.5), p(0.5, 0.5, 0.5)).unwrap(),
            GeometricObject::triangle(p(-1.0, -1.0, 0.0), p(1.0, -1.0, 0.0), p(0.0, 1.0, 0.0)).unwrap(),
            GeometricObject::square(Point3D::ORIGIN, Vector3D::Z, 1.0).unwrap(),
            GeometricObject::union(
                GeometricObject::sphere(Point3D::ORIGIN, 0.5).unwrap(),
                GeometricObject::cube(p(-0.5, -0.5, -0.5), p(0.5, 0.5, 0.5)).unwrap(),
            ),
            GeometricObject::intersection(
                Sphere::new(p(0.0, 0.0, 0.25), 0.5).unwrap(),
                Sphere::new(p(0.0, 0.0, -0.25), 0.5).unwrap(),
            ),
        ];

        let ray = Ray::new(p(0.0, 0.0, 5.0), -Vector3D::Z);
        for object in &objects {
            let before = object.intersect(&ray, Interval::non_negative()).unwrap();
            let after = object.translate(offset).intersect(&ray, Interval::non_negative()).unwrap();
            assert!((after - before - 2.0).abs() < 1e-9, "{} moved wrong", object.kind());
        }
    }
}
