//! Test-intersection queries
//!
//! Touching counts as intersecting.

use super::QueryCode;
use super::cp::{point_line, point_ray, point_segment};
use crate::geometry::{Aabb, Frustum, Hypersphere, Line, Obb, Ray, Segment, Sphere};
use crate::math::Real;

pub fn line_sphere<T: Real, const N: usize>(
    line: &Line<T, N>,
    sphere: &Hypersphere<T, N>,
) -> bool {
    let cp = point_line(sphere.center(), line).cp;
    cp.distance_squared(sphere.center()) <= sphere.radius() * sphere.radius()
}

pub fn ray_sphere<T: Real, const N: usize>(
    ray: &Ray<T, N>,
    sphere: &Hypersphere<T, N>,
) -> bool {
    let cp = point_ray(sphere.center(), ray).cp;
    cp.distance_squared(sphere.center()) <= sphere.radius() * sphere.radius()
}

pub fn segment_sphere<T: Real, const N: usize>(
    seg: &Segment<T, N>,
    sphere: &Hypersphere<T, N>,
) -> bool {
    let cp = point_segment(sphere.center(), seg).cp;
    cp.distance_squared(sphere.center()) <= sphere.radius() * sphere.radius()
}

pub fn sphere_sphere<T: Real, const N: usize>(
    a: &Hypersphere<T, N>,
    b: &Hypersphere<T, N>,
) -> bool {
    let r = a.radius() + b.radius();
    a.center().distance_squared(b.center()) <= r * r
}

pub fn aabb_aabb<T: Real, const N: usize>(a: &Aabb<T, N>, b: &Aabb<T, N>) -> bool {
    (0..N).all(|i| (a.center[i] - b.center[i]).abs() <= a.half_lengths[i] + b.half_lengths[i])
}

/// `CompletelyInside`, `CompletelyOutside` or `Intersecting`
///
/// A degenerate frustum reports `CompletelyOutside`.
pub fn frustum_sphere<T: Real>(frustum: &Frustum<T>, sphere: &Sphere<T>) -> QueryCode {
    let Some(planes) = frustum.planes() else {
        return QueryCode::CompletelyOutside;
    };

    let r = sphere.radius();
    let mut code = QueryCode::CompletelyInside;
    for plane in &planes {
        let dist = plane.signed_distance(sphere.center());
        if dist <= -r {
            return QueryCode::CompletelyOutside;
        }
        if dist.abs() < r {
            code = QueryCode::Intersecting;
        }
    }
    code
}

pub fn obb_sphere<T: Real>(obb: &Obb<T>, sphere: &Sphere<T>) -> bool {
    let cp = obb.closest_point(sphere.center());
    cp.distance_squared(sphere.center()) <= sphere.radius() * sphere.radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{vec2, vec3};

    #[test]
    fn test_line_sphere() {
        let line = Line::new(vec3(0.0f32, 1.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert!(line_sphere(&line, &Sphere::new(vec3(5.0, 0.0, 0.0), 1.0)));
        assert!(!line_sphere(&line, &Sphere::new(vec3(5.0, 0.0, 0.0), 0.9)));
    }

    #[test]
    fn test_ray_and_segment_sphere() {
        let sphere = Hypersphere::new(vec2(0.0f64, 0.0), 1.0);
        let toward = Ray::new(vec2(-3.0, 0.5), vec2(1.0, 0.0));
        let away = Ray::new(vec2(-3.0, 0.5), vec2(-1.0, 0.0));
        assert!(ray_sphere(&toward, &sphere));
        assert!(!ray_sphere(&away, &sphere));
        let from_inside = Ray::new(vec2(0.2, 0.0), vec2(-1.0, 0.0));
        assert!(ray_sphere(&from_inside, &sphere));

        let short = Segment::new(vec2(-3.0, 0.5), vec2(-1.5, 0.5));
        let across = Segment::new(vec2(-3.0, 0.5), vec2(3.0, 0.5));
        let inside = Segment::new(vec2(-0.1, 0.0), vec2(0.1, 0.0));
        assert!(!segment_sphere(&short, &sphere));
        assert!(segment_sphere(&across, &sphere));
        assert!(segment_sphere(&inside, &sphere));
    }

    #[test]
    fn test_sphere_sphere_and_aabb() {
        let a = Hypersphere::new(vec2(0.0f64, 0.0), 1.0);
        assert!(sphere_sphere(&a, &Hypersphere::new(vec2(2.0, 0.0), 1.0)));
        assert!(!sphere_sphere(&a, &Hypersphere::new(vec2(2.1, 0.0), 1.0)));

        let b0 = Aabb::new(vec2(0.0f64, 0.0), vec2(1.0, 1.0));
        assert!(aabb_aabb(&b0, &Aabb::new(vec2(1.5, 1.5), vec2(0.5, 0.5))));
        assert!(!aabb_aabb(&b0, &Aabb::new(vec2(1.5, 3.0), vec2(0.5, 0.5))));
    }

    #[test]
    fn test_frustum_sphere() {
        let f = Frustum::new(
            vec3(0.0f64, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, 0.0, 1.0),
            1.0,
            10.0,
            [1.0, 1.0],
        );
        let inside = Sphere::new(vec3(5.0, 0.0, 0.0), 1.0);
        let straddling = Sphere::new(vec3(10.0, 0.0, 0.0), 1.0);
        let outside = Sphere::new(vec3(-5.0, 0.0, 0.0), 1.0);
        assert_eq!(frustum_sphere(&f, &inside), QueryCode::CompletelyInside);
        assert_eq!(frustum_sphere(&f, &straddling), QueryCode::Intersecting);
        assert_eq!(frustum_sphere(&f, &outside), QueryCode::CompletelyOutside);
    }

    #[test]
    fn test_obb_sphere() {
        let b = Obb::axis_aligned(vec3(0.0f32, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
        assert!(obb_sphere(&b, &Sphere::new(vec3(1.5, 0.0, 0.0), 0.6)));
        assert!(!obb_sphere(&b, &Sphere::new(vec3(1.5, 1.5, 0.0), 0.6)));
    }
}
