//! Find-intersection queries

use super::QueryCode;
use crate::geometry::{Hypersphere, Line, Plane, Ray, Segment, Triangle};
use crate::math::{Real, Vector, Vector3, is_zero};

/// Where a linear primitive meets a plane
///
/// `u` and `point` are meaningful for `Intersecting`; for `Overlapping`
/// they hold the primitive's start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPlaneResult<T> {
    pub code: QueryCode,
    pub u: T,
    pub point: Vector3<T>,
}

impl<T: Real> LinearPlaneResult<T> {
    fn miss(code: QueryCode, origin: Vector3<T>) -> Self {
        Self {
            code,
            u: T::zero(),
            point: origin,
        }
    }
}

/// Unbounded parameter of `origin + u * direction` on the plane
fn linear_plane<T: Real>(
    origin: Vector3<T>,
    direction: Vector3<T>,
    plane: &Plane<T>,
) -> LinearPlaneResult<T> {
    let denom = plane.normal().dot(direction);
    let dist = plane.signed_distance(origin);

    if is_zero(denom) {
        let code = if is_zero(dist) {
            QueryCode::Overlapping
        } else {
            QueryCode::Parallel
        };
        return LinearPlaneResult::miss(code, origin);
    }

    let u = -dist / denom;
    LinearPlaneResult {
        code: QueryCode::Intersecting,
        u,
        point: origin + direction * u,
    }
}

pub fn line_plane<T: Real>(line: &Line<T, 3>, plane: &Plane<T>) -> LinearPlaneResult<T> {
    linear_plane(line.origin(), line.direction(), plane)
}

pub fn ray_plane<T: Real>(ray: &Ray<T, 3>, plane: &Plane<T>) -> LinearPlaneResult<T> {
    let r = linear_plane(ray.origin(), ray.direction(), plane);
    if r.code == QueryCode::Intersecting && r.u < T::zero() {
        return LinearPlaneResult::miss(QueryCode::NotIntersecting, ray.origin());
    }
    r
}

/// `u` runs from 0 at `p0` to 1 at `p1`
pub fn segment_plane<T: Real>(seg: &Segment<T, 3>, plane: &Plane<T>) -> LinearPlaneResult<T> {
    let r = linear_plane(seg.p0, seg.vector(), plane);
    if r.code == QueryCode::Intersecting && (r.u < T::zero() || r.u > T::one()) {
        return LinearPlaneResult::miss(QueryCode::NotIntersecting, seg.p0);
    }
    r
}

/// Entry and exit parameters of a linear primitive through a sphere (`u0 <= u1`)
///
/// For rays and segments the interval is clipped to the primitive, so
/// `u0 == 0` when it starts inside the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSphereResult<T> {
    pub code: QueryCode,
    pub u0: T,
    pub u1: T,
}

impl<T: Real> LineSphereResult<T> {
    fn miss() -> Self {
        Self {
            code: QueryCode::NotIntersecting,
            u0: T::zero(),
            u1: T::zero(),
        }
    }

    fn hit(u0: T, u1: T) -> Self {
        Self {
            code: QueryCode::Intersecting,
            u0,
            u1,
        }
    }
}

/// Roots of `|origin + u * direction - center| = radius`
fn sphere_roots<T: Real, const N: usize>(
    origin: Vector<T, N>,
    direction: Vector<T, N>,
    sphere: &Hypersphere<T, N>,
) -> Option<(T, T)> {
    let w = origin - sphere.center();
    let a = direction.length_squared();
    let b = w.dot(direction);
    let c = w.length_squared() - sphere.radius() * sphere.radius();

    if a <= T::zero() {
        return (c <= T::zero()).then_some((T::zero(), T::zero()));
    }
    let disc = b * b - a * c;
    if disc < T::zero() {
        return None;
    }
    let root = disc.sqrt();
    Some(((-b - root) / a, (-b + root) / a))
}

/// Roots clipped to `lo..=hi`
fn clipped_sphere_roots<T: Real, const N: usize>(
    origin: Vector<T, N>,
    direction: Vector<T, N>,
    sphere: &Hypersphere<T, N>,
    lo: T,
    hi: T,
) -> LineSphereResult<T> {
    match sphere_roots(origin, direction, sphere) {
        Some((u0, u1)) if u1 >= lo && u0 <= hi => LineSphereResult::hit(u0.max(lo), u1.min(hi)),
        _ => LineSphereResult::miss(),
    }
}

pub fn line_sphere<T: Real, const N: usize>(
    line: &Line<T, N>,
    sphere: &Hypersphere<T, N>,
) -> LineSphereResult<T> {
    match sphere_roots(line.origin(), line.direction(), sphere) {
        Some((u0, u1)) => LineSphereResult::hit(u0, u1),
        None => LineSphereResult::miss(),
    }
}

/// Parameters are distances along the ray
pub fn ray_sphere<T: Real, const N: usize>(
    ray: &Ray<T, N>,
    sphere: &Hypersphere<T, N>,
) -> LineSphereResult<T> {
    clipped_sphere_roots(ray.origin(), ray.direction(), sphere, T::zero(), T::infinity())
}

/// Parameters run from 0 at `p0` to 1 at `p1`
pub fn segment_sphere<T: Real, const N: usize>(
    seg: &Segment<T, N>,
    sphere: &Hypersphere<T, N>,
) -> LineSphereResult<T> {
    clipped_sphere_roots(seg.p0, seg.vector(), sphere, T::zero(), T::one())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTriangleResult<T> {
    pub code: QueryCode,
    /// Distance along the ray
    pub u: T,
    pub point: Vector3<T>,
}

/// Möller–Trumbore; hits from either side of the triangle count
pub fn ray_triangle<T: Real>(ray: &Ray<T, 3>, tri: &Triangle<T, 3>) -> RayTriangleResult<T> {
    let miss = RayTriangleResult {
        code: QueryCode::NotIntersecting,
        u: T::zero(),
        point: ray.origin(),
    };

    let [p0, p1, p2] = tri.points;
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let pvec = ray.direction().cross(e2);
    let det = e1.dot(pvec);
    if is_zero(det) {
        return miss;
    }

    let inv_det = det.recip();
    let tvec = ray.origin() - p0;
    let a = tvec.dot(pvec) * inv_det;
    if a < T::zero() || a > T::one() {
        return miss;
    }

    let qvec = tvec.cross(e1);
    let b = ray.direction().dot(qvec) * inv_det;
    if b < T::zero() || a + b > T::one() {
        return miss;
    }

    let u = e2.dot(qvec) * inv_det;
    if u < T::zero() {
        return miss;
    }

    RayTriangleResult {
        code: QueryCode::Intersecting,
        u,
        point: ray.point_at(u),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{vec2, vec3};

    fn ground() -> Plane<f64> {
        Plane::from_normal_point(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 0.0))
    }

    #[test]
    fn test_line_plane() {
        let line = Line::new(vec3(1.0, 2.0, 3.0), vec3(0.0, 0.0, -1.0));
        let r = line_plane(&line, &ground());
        assert_eq!(r.code, QueryCode::Intersecting);
        assert_eq!(r.u, 3.0);
        assert!(r.point.approx_eq(vec3(1.0, 2.0, 0.0)));

        let flat = Line::new(vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 0.0));
        assert_eq!(line_plane(&flat, &ground()).code, QueryCode::Parallel);
        let inside = Line::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 0.0));
        assert_eq!(line_plane(&inside, &ground()).code, QueryCode::Overlapping);
    }

    #[test]
    fn test_ray_and_segment_plane() {
        let away = Ray::new(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0));
        assert_eq!(ray_plane(&away, &ground()).code, QueryCode::NotIntersecting);

        let short = Segment::new(vec3(0.0, 0.0, 3.0), vec3(0.0, 0.0, 1.0));
        assert_eq!(segment_plane(&short, &ground()).code, QueryCode::NotIntersecting);
        let crossing = Segment::new(vec3(0.0, 0.0, 3.0), vec3(0.0, 0.0, -1.0));
        let r = segment_plane(&crossing, &ground());
        assert_eq!(r.code, QueryCode::Intersecting);
        assert_eq!(r.u, 0.75);
    }

    #[test]
    fn test_line_sphere() {
        let line = Line::new(vec2(-5.0f64, 0.0), vec2(1.0, 0.0));
        let r = line_sphere(&line, &Hypersphere::new(vec2(0.0, 0.0), 2.0));
        assert_eq!(r.code, QueryCode::Intersecting);
        assert_eq!((r.u0, r.u1), (3.0, 7.0));

        let miss = line_sphere(&line, &Hypersphere::new(vec2(0.0, 3.0), 2.0));
        assert_eq!(miss.code, QueryCode::NotIntersecting);
    }

    #[test]
    fn test_ray_sphere() {
        let sphere = Hypersphere::new(vec2(0.0f64, 0.0), 2.0);
        let r = ray_sphere(&Ray::new(vec2(-5.0, 0.0), vec2(1.0, 0.0)), &sphere);
        assert_eq!(r.code, QueryCode::Intersecting);
        assert_eq!((r.u0, r.u1), (3.0, 7.0));

        let inside = ray_sphere(&Ray::new(vec2(1.0, 0.0), vec2(1.0, 0.0)), &sphere);
        assert_eq!(inside.code, QueryCode::Intersecting);
        assert_eq!((inside.u0, inside.u1), (0.0, 1.0));

        let behind = ray_sphere(&Ray::new(vec2(5.0, 0.0), vec2(1.0, 0.0)), &sphere);
        assert_eq!(behind.code, QueryCode::NotIntersecting);
    }

    #[test]
    fn test_segment_sphere() {
        let sphere = Hypersphere::new(vec2(0.0f64, 0.0), 2.0);
        let across = segment_sphere(&Segment::new(vec2(-4.0, 0.0), vec2(4.0, 0.0)), &sphere);
        assert_eq!(across.code, QueryCode::Intersecting);
        assert_eq!((across.u0, across.u1), (0.25, 0.75));

        let entering = segment_sphere(&Segment::new(vec2(-4.0, 0.0), vec2(0.0, 0.0)), &sphere);
        assert_eq!((entering.u0, entering.u1), (0.5, 1.0));

        let short = segment_sphere(&Segment::new(vec2(-4.0, 0.0), vec2(-3.0, 0.0)), &sphere);
        assert_eq!(short.code, QueryCode::NotIntersecting);

        let point_inside = segment_sphere(&Segment::new(vec2(0.5, 0.5), vec2(0.5, 0.5)), &sphere);
        assert_eq!(point_inside.code, QueryCode::Intersecting);
    }

    #[test]
    fn test_ray_triangle() {
        let tri = Triangle::new(
            vec3(0.0f64, 0.0, 0.0),
            vec3(2.0, 0.0, 0.0),
            vec3(0.0, 2.0, 0.0),
        );
        let hit = ray_triangle(&Ray::new(vec3(0.5, 0.5, 4.0), vec3(0.0, 0.0, -1.0)), &tri);
        assert_eq!(hit.code, QueryCode::Intersecting);
        assert!((hit.u - 4.0).abs() < 1e-12);
        assert!(hit.point.approx_eq(vec3(0.5, 0.5, 0.0)));

        let outside = ray_triangle(&Ray::new(vec3(1.5, 1.5, 4.0), vec3(0.0, 0.0, -1.0)), &tri);
        assert_eq!(outside.code, QueryCode::NotIntersecting);
        let behind = ray_triangle(&Ray::new(vec3(0.5, 0.5, 4.0), vec3(0.0, 0.0, 1.0)), &tri);
        assert_eq!(behind.code, QueryCode::NotIntersecting);
    }
}
