//! First point of contact between moving objects
//!
//! Each object moves along a straight trajectory (displacement per unit
//! time). The result is the time at which the objects first touch, or
//! `None` if they are not approaching each other or never meet. Objects
//! that already overlap while approaching report a negative time, so
//! callers decide which window of time they care about.

use crate::geometry::{Hypersphere, Line};
use crate::math::{Real, Vector, is_zero};

/// Smaller root of `a t² + 2 half_b t + c = 0` for an approaching pair
fn approach_time<T: Real>(a: T, half_b: T, c: T) -> Option<T> {
    if is_zero(a) || half_b >= T::zero() {
        return None;
    }
    let disc = half_b * half_b - a * c;
    if disc < T::zero() {
        return None;
    }
    Some((-half_b - disc.sqrt()) / a)
}

pub fn point_hypersphere<T: Real, const N: usize>(
    sphere: &Hypersphere<T, N>,
    sphere_traj: Vector<T, N>,
    point: Vector<T, N>,
    point_traj: Vector<T, N>,
) -> Option<T> {
    let v = point_traj - sphere_traj;
    let p = point - sphere.center();
    let r = sphere.radius();
    approach_time(v.length_squared(), p.dot(v), p.length_squared() - r * r)
}

pub fn hypersphere_hypersphere<T: Real, const N: usize>(
    s0: &Hypersphere<T, N>,
    traj0: Vector<T, N>,
    s1: &Hypersphere<T, N>,
    traj1: Vector<T, N>,
) -> Option<T> {
    let v = traj1 - traj0;
    let p = s1.center() - s0.center();
    let r = s0.radius() + s1.radius();
    approach_time(v.length_squared(), p.dot(v), p.length_squared() - r * r)
}

/// Time at which the sphere's surface reaches the (infinite) line
pub fn hypersphere_line<T: Real, const N: usize>(
    sphere: &Hypersphere<T, N>,
    sphere_traj: Vector<T, N>,
    line: &Line<T, N>,
    line_traj: Vector<T, N>,
) -> Option<T> {
    let dir = line.direction();
    let offset = sphere.center() - line.origin();
    let rel = sphere_traj - line_traj;

    // Components perpendicular to the line
    let a = offset - dir * offset.dot(dir);
    let b = rel - dir * rel.dot(dir);

    let bb = b.dot(b);
    if bb <= T::zero() {
        return None;
    }
    let ab = a.dot(b);
    if ab >= T::zero() {
        return None;
    }
    let r = sphere.radius();
    Some((-ab - (r * r * bb).sqrt()) / bb)
}
