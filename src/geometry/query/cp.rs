//! Closest-point queries

use super::QueryCode;
use crate::geometry::{Line, Plane, Ray, Segment};
use crate::math::{Real, Vector, Vector3, is_zero};

/// Closest point on a linear primitive to a query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLinearResult<T, const N: usize> {
    /// Parameter of `cp` along the primitive
    pub u: T,
    pub cp: Vector<T, N>,
}

pub fn point_line<T: Real, const N: usize>(
    p: Vector<T, N>,
    line: &Line<T, N>,
) -> PointLinearResult<T, N> {
    let u = (p - line.origin()).dot(line.direction());
    PointLinearResult {
        u,
        cp: line.point_at(u),
    }
}

pub fn point_ray<T: Real, const N: usize>(
    p: Vector<T, N>,
    ray: &Ray<T, N>,
) -> PointLinearResult<T, N> {
    let u = (p - ray.origin()).dot(ray.direction()).max(T::zero());
    PointLinearResult {
        u,
        cp: ray.point_at(u),
    }
}

/// `u` runs from 0 at `p0` to 1 at `p1`
pub fn point_segment<T: Real, const N: usize>(
    p: Vector<T, N>,
    seg: &Segment<T, N>,
) -> PointLinearResult<T, N> {
    let v = seg.vector();
    let len_sq = v.length_squared();
    let u = if len_sq <= T::zero() {
        T::zero()
    } else {
        ((p - seg.p0).dot(v) / len_sq).max(T::zero()).min(T::one())
    };
    PointLinearResult {
        u,
        cp: seg.point_at(u),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPlaneResult<T> {
    pub cp: Vector3<T>,
    pub signed_distance: T,
}

pub fn point_plane<T: Real>(p: Vector3<T>, plane: &Plane<T>) -> PointPlaneResult<T> {
    let signed_distance = plane.signed_distance(p);
    PointPlaneResult {
        cp: p - plane.normal() * signed_distance,
        signed_distance,
    }
}

/// Closest points between two linear primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPairResult<T, const N: usize> {
    pub code: QueryCode,
    pub u0: T,
    pub u1: T,
    pub cp0: Vector<T, N>,
    pub cp1: Vector<T, N>,
}

/// Closest parameters of `o0 + s * d0` and `o1 + t * d1` with `s` and `t`
/// clamped to their ranges
///
/// Parallel inputs keep `s` at the clamp of 0 and pair it with its
/// projection onto the second primitive.
fn clamped_pair<T: Real, const N: usize>(
    o0: Vector<T, N>,
    d0: Vector<T, N>,
    range0: (T, T),
    o1: Vector<T, N>,
    d1: Vector<T, N>,
    range1: (T, T),
) -> (QueryCode, T, T) {
    let clamp0 = |x: T| x.max(range0.0).min(range0.1);
    let clamp1 = |x: T| x.max(range1.0).min(range1.1);
    let r = o0 - o1;
    let a = d0.length_squared();
    let e = d1.length_squared();
    let c = d0.dot(r);
    let f = d1.dot(r);

    if a <= T::zero() && e <= T::zero() {
        return (QueryCode::Success, clamp0(T::zero()), clamp1(T::zero()));
    }
    if a <= T::zero() {
        let s = clamp0(T::zero());
        return (QueryCode::Success, s, clamp1(f / e));
    }
    if e <= T::zero() {
        let t = clamp1(T::zero());
        return (QueryCode::Success, clamp0(-c / a), t);
    }

    let b = d0.dot(d1);
    let denom = a * e - b * b;
    let (code, mut s) = if is_zero(denom / (a * e)) {
        (QueryCode::Parallel, clamp0(T::zero()))
    } else {
        (QueryCode::Success, clamp0((b * f - c * e) / denom))
    };
    let mut t = (b * s + f) / e;
    if t < range1.0 || t > range1.1 {
        t = clamp1(t);
        s = clamp0((b * t - c) / a);
    }
    (code, s, t)
}

fn unbounded<T: Real>() -> (T, T) {
    (T::neg_infinity(), T::infinity())
}

fn forward<T: Real>() -> (T, T) {
    (T::zero(), T::infinity())
}

fn unit<T: Real>() -> (T, T) {
    (T::zero(), T::one())
}

fn pair_result<T: Real, const N: usize>(
    (code, u0, u1): (QueryCode, T, T),
    cp0: Vector<T, N>,
    cp1: Vector<T, N>,
) -> LinearPairResult<T, N> {
    LinearPairResult {
        code,
        u0,
        u1,
        cp0,
        cp1,
    }
}

/// For parallel lines the origin of `l0` is paired with its projection onto `l1`.
pub fn line_line<T: Real, const N: usize>(
    l0: &Line<T, N>,
    l1: &Line<T, N>,
) -> LinearPairResult<T, N> {
    let (code, u0, u1) = clamped_pair(
        l0.origin(),
        l0.direction(),
        unbounded(),
        l1.origin(),
        l1.direction(),
        unbounded(),
    );
    pair_result((code, u0, u1), l0.point_at(u0), l1.point_at(u1))
}

/// `u0` is the distance along the ray, `u1` along the line
pub fn ray_line<T: Real, const N: usize>(
    ray: &Ray<T, N>,
    line: &Line<T, N>,
) -> LinearPairResult<T, N> {
    let (code, u0, u1) = clamped_pair(
        ray.origin(),
        ray.direction(),
        forward(),
        line.origin(),
        line.direction(),
        unbounded(),
    );
    pair_result((code, u0, u1), ray.point_at(u0), line.point_at(u1))
}

pub fn ray_ray<T: Real, const N: usize>(
    r0: &Ray<T, N>,
    r1: &Ray<T, N>,
) -> LinearPairResult<T, N> {
    let (code, u0, u1) = clamped_pair(
        r0.origin(),
        r0.direction(),
        forward(),
        r1.origin(),
        r1.direction(),
        forward(),
    );
    pair_result((code, u0, u1), r0.point_at(u0), r1.point_at(u1))
}

/// `u0` runs 0..1 along the segment, `u1` is the distance along the line
pub fn segment_line<T: Real, const N: usize>(
    seg: &Segment<T, N>,
    line: &Line<T, N>,
) -> LinearPairResult<T, N> {
    let (code, u0, u1) = clamped_pair(
        seg.p0,
        seg.vector(),
        unit(),
        line.origin(),
        line.direction(),
        unbounded(),
    );
    pair_result((code, u0, u1), seg.point_at(u0), line.point_at(u1))
}

/// `u0` runs 0..1 along the segment, `u1` is the distance along the ray
pub fn segment_ray<T: Real, const N: usize>(
    seg: &Segment<T, N>,
    ray: &Ray<T, N>,
) -> LinearPairResult<T, N> {
    let (code, u0, u1) = clamped_pair(
        seg.p0,
        seg.vector(),
        unit(),
        ray.origin(),
        ray.direction(),
        forward(),
    );
    pair_result((code, u0, u1), seg.point_at(u0), ray.point_at(u1))
}

/// Segment parameters run 0..1; `Parallel` is reported when the segments
/// are parallel (the closest pair is then one of many).
pub fn segment_segment<T: Real, const N: usize>(
    s0: &Segment<T, N>,
    s1: &Segment<T, N>,
) -> LinearPairResult<T, N> {
    let (code, u0, u1) = clamped_pair(s0.p0, s0.vector(), unit(), s1.p0, s1.vector(), unit());
    pair_result((code, u0, u1), s0.point_at(u0), s1.point_at(u1))
}
