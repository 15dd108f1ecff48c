//! Whitted-style shading: ambient, Lambertian and Phong terms with hard
//! shadows, plus mirror reflection.

use std::f64::consts::PI;

use glint_core::{Color, Hit, Scene};
use glint_math::{Interval, Ray, Vector3D};

/// Offset applied to secondary and shadow rays so they do not re-hit the
/// surface they start on.
pub const EPSILON: f64 = 1e-4;

/// Reflection stops once the remaining weight falls below this.
pub const MIN_CONTRIBUTION: f64 = 1e-6;

/// Mirror `direction` about `normal`: `D - 2(D·N)N`.
#[inline]
pub fn reflect(direction: Vector3D, normal: Vector3D) -> Vector3D {
    direction - normal * (2.0 * direction.dot(normal))
}

/// Ambient plus direct lighting at a hit, without any reflected light.
///
/// Each light is tested with a shadow ray over `[EPSILON, distance]` and
/// falls off with the inverse square of its distance.
pub fn local_color(scene: &Scene, ray: &Ray, hit: &Hit<'_>, normal: Vector3D) -> Color {
    let material = hit.material();
    let mut color = scene.ambient_light_intensity() * material.color;
    let view = -ray.direction.normalize();

    for light in scene.light_sources() {
        let to_light = light.position - hit.point;
        let distance = to_light.norm();
        if distance < EPSILON {
            continue;
        }
        let light_dir = to_light / distance;

        let shadow_ray = Ray::new(hit.point, light_dir);
        if scene.hit(&shadow_ray, Interval::new(EPSILON, distance)).is_some() {
            continue;
        }

        let intensity = light.intensity / (4.0 * PI * distance * distance);
        let diffuse = normal.dot(light_dir).max(0.0) * material.color;
        let half = (view + light_dir).normalize();
        let specular = normal.dot(half).max(0.0).powf(material.phong_coefficient) * material.specular_coefficient;

        color += intensity * ((diffuse + specular) * light.color);
    }

    color
}

/// Color seen along `ray`, following up to `max_recursion_depth` mirror
/// bounces.
///
/// Each hit contributes its local color weighted by `1 - reflectivity` and
/// by the reflectivities of every shallower hit. The deepest permitted hit
/// has no bounce after it and contributes its local color in full, so with
/// `max_recursion_depth = 0` the result is exactly ambient plus direct
/// light. Misses contribute black.
pub fn color_of_ray(scene: &Scene, ray: &Ray, max_recursion_depth: u32) -> Color {
    let mut accumulated = Color::BLACK;
    let mut weight = 1.0;
    let mut ray = *ray;
    let mut interval = Interval::non_negative();

    for depth in 0..=max_recursion_depth {
        let Some(hit) = scene.hit(&ray, interval) else {
            break;
        };
        let normal = hit.normal();
        let local = local_color(scene, &ray, &hit, normal);

        if depth == max_recursion_depth {
            accumulated += weight * local;
            break;
        }

        let reflectivity = hit.material().reflectivity;
        accumulated += (weight * (1.0 - reflectivity)) * local;
        weight *= reflectivity;
        if weight < MIN_CONTRIBUTION {
            break;
        }

        ray = Ray::new(hit.point, reflect(ray.direction, normal));
        interval = Interval::from_min(EPSILON);
    }

    accumulated
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{GeometricObject, LightSource, Material};
    use glint_math::Point3D;

    fn p(x: f64, y: f64, z: f64) -> Point3D {
        Point3D::new(x, y, z).unwrap()
    }

    fn sphere_scene(reflectivity: f64) -> Scene {
        Scene::builder()
            .ambient_light_intensity(0.2)
            .surface(
                GeometricObject::sphere(p(0.0, 0.0, -3.0), 1.0).unwrap(),
                Material::new(Color::RED).with_reflectivity(reflectivity),
            )
            .light(LightSource::new(p(0.0, 2.0, 0.0), 40.0).unwrap())
            .build()
            .unwrap()
    }

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9
    }

    #[test]
    fn test_reflect() {
        let d = Vector3D::new(1.0, -1.0, 0.0).unwrap();
        assert_eq!(reflect(d, Vector3D::Y), Vector3D::new(1.0, 1.0, 0.0).unwrap());
    }

    #[test]
    fn test_depth_zero_is_ambient_plus_direct() {
        let ray = Ray::new(Point3D::ORIGIN, -Vector3D::Z);

        // Hit at (0, 0, -2) with normal +Z; light at (0, 2, 0).
        let point = p(0.0, 0.0, -2.0);
        let to_light = p(0.0, 2.0, 0.0) - point;
        let distance = to_light.norm();
        let l = to_light / distance;
        let n = Vector3D::Z;
        let material = Material::new(Color::RED);
        let intensity = 40.0 / (4.0 * PI * distance * distance);
        let h = (Vector3D::Z + l).normalize();
        let expected = 0.2 * material.color
            + intensity
                * (n.dot(l) * material.color
                    + n.dot(h).powf(material.phong_coefficient) * material.specular_coefficient);

        for reflectivity in [0.0, 0.3, 0.9] {
            let color = color_of_ray(&sphere_scene(reflectivity), &ray, 0);
            assert!(close(color, expected), "reflectivity {}: {:?}", reflectivity, color);
        }
    }

    #[test]
    fn test_miss_is_black() {
        let ray = Ray::new(Point3D::ORIGIN, Vector3D::Z);
        assert_eq!(color_of_ray(&sphere_scene(0.3), &ray, 3), Color::BLACK);
    }

    #[test]
    fn test_shadowed_point_keeps_ambient() {
        let scene = Scene::builder()
            .ambient_light_intensity(0.3)
            .surface(
                GeometricObject::plane(p(0.0, -1.0, 0.0), Vector3D::Y).unwrap(),
                Material::new(Color::WHITE).with_reflectivity(0.0),
            )
            .surface(
                GeometricObject::sphere(p(0.0, 1.0, -1.0), 0.5).unwrap(),
                Material::new(Color::BLUE),
            )
            .light(LightSource::new(p(0.0, 3.0, -1.0), 100.0).unwrap())
            .build()
            .unwrap();

        // Lands on the plane at (0, -1, -1), straight below the blocker.
        let ray = Ray::new(Point3D::ORIGIN, Vector3D::new(0.0, -1.0, -1.0).unwrap().normalize());
        let color = color_of_ray(&scene, &ray, 3);
        assert!(close(color, 0.3 * Color::WHITE), "{:?}", color);
    }

    #[test]
    fn test_reflection_weighting() {
        let scene = Scene::builder()
            .ambient_light_intensity(0.5)
            .surface(
                GeometricObject::plane(p(0.0, -1.0, 0.0), Vector3D::Y).unwrap(),
                Material::new(Color::GREEN).with_reflectivity(0.5),
            )
            .light(LightSource::new(p(0.0, 1.0, -1.0), 20.0).unwrap())
            .build()
            .unwrap();

        let ray = Ray::new(Point3D::ORIGIN, Vector3D::new(0.0, -1.0, -1.0).unwrap().normalize());
        let hit = scene.hit(&ray, Interval::non_negative()).unwrap();
        let local = local_color(&scene, &ray, &hit, hit.normal());

        // The bounce heads up into empty space, so only the local term remains.
        assert!(close(color_of_ray(&scene, &ray, 0), local));
        assert!(close(color_of_ray(&scene, &ray, 1), 0.5 * local));
        assert!(close(color_of_ray(&scene, &ray, 4), 0.5 * local));
    }

    #[test]
    fn test_mirror_sees_other_surface() {
        let scene = Scene::builder()
            .ambient_light_intensity(1.0)
            .surface(
                GeometricObject::plane(p(0.0, 0.0, -2.0), Vector3D::Z).unwrap(),
                Material::new(Color::WHITE).with_reflectivity(1.0),
            )
            .surface(
                GeometricObject::sphere(p(0.0, 0.0, 2.0), 0.5).unwrap(),
                Material::new(Color::YELLOW).with_reflectivity(0.0),
            )
            .build()
            .unwrap();

        // Straight at the mirror, which bounces back into the yellow sphere.
        let ray = Ray::new(Point3D::ORIGIN, -Vector3D::Z);
        let color = color_of_ray(&scene, &ray, 2);
        assert!(close(color, Color::YELLOW), "{:?}", color);
    }

    #[test]
    fn test_light_color_tints_direct_term() {
        let scene = Scene::builder()
            .surface(
                GeometricObject::sphere(p(0.0, 0.0, -3.0), 1.0).unwrap(),
                Material::new(Color::WHITE).with_reflectivity(0.0),
            )
            .light(LightSource::new(p(0.0, 0.0, 0.0), 40.0).unwrap().with_color(Color::RED))
            .build()
            .unwrap();

        let color = color_of_ray(&scene, &Ray::new(Point3D::ORIGIN, -Vector3D::Z), 0);
        assert!(color.r > 0.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);
    }
}
