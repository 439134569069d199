//! Plane in 3D: `normal · x + offset = 0`

use serde::{Deserialize, Serialize};

use crate::math::{Real, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Plane<T> {
    normal: Vector3<T>,
    offset: T,
}

impl<T: Real> Plane<T> {
    /// `normal` is normalized; `offset` is taken as given
    pub fn new(normal: Vector3<T>, offset: T) -> Self {
        let len = normal.length();
        if len > T::zero() {
            Self {
                normal: normal / len,
                offset: offset / len,
            }
        } else {
            Self { normal, offset }
        }
    }

    pub fn from_normal_point(normal: Vector3<T>, point: Vector3<T>) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            offset: -normal.dot(point),
        }
    }

    /// Plane through three points, counter-clockwise seen from the normal side
    ///
    /// Returns `None` if the points are collinear.
    pub fn from_points(p0: Vector3<T>, p1: Vector3<T>, p2: Vector3<T>) -> Option<Self> {
        let normal = (p1 - p0).cross(p2 - p0);
        if normal.is_zero() {
            return None;
        }
        Some(Self::from_normal_point(normal, p0))
    }

    #[inline]
    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    #[inline]
    pub fn offset(&self) -> T {
        self.offset
    }

    /// Same plane, facing the other way
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Positive on the side the normal points to
    #[inline]
    pub fn signed_distance(&self, p: Vector3<T>) -> T {
        self.normal.dot(p) + self.offset
    }

    #[inline]
    pub fn distance(&self, p: Vector3<T>) -> T {
        self.signed_distance(p).abs()
    }

    pub fn closest_point(&self, p: Vector3<T>) -> Vector3<T> {
        p - self.normal * self.signed_distance(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3;

    #[test]
    fn test_signed_distance() {
        let p = Plane::from_normal_point(vec3(0.0f32, 0.0, 2.0), vec3(0.0, 0.0, 1.0));
        assert!((p.signed_distance(vec3(5.0, 5.0, 3.0)) - 2.0).abs() < 1e-6);
        assert!((p.signed_distance(vec3(0.0, 0.0, -1.0)) + 2.0).abs() < 1e-6);
        assert!(p.closest_point(vec3(2.0, 3.0, 7.0)).approx_eq(vec3(2.0, 3.0, 1.0)));
        assert_eq!(p.flipped().signed_distance(vec3(0.0, 0.0, 3.0)), -2.0);
    }

    #[test]
    fn test_from_points() {
        let p = Plane::from_points(
            vec3(0.0f64, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert!(p.normal().approx_eq(vec3(0.0, 0.0, 1.0)));

        let collinear = Plane::from_points(
            vec3(0.0f64, 0.0, 0.0),
            vec3(1.0, 1.0, 1.0),
            vec3(2.0, 2.0, 2.0),
        );
        assert!(collinear.is_none());
    }

    #[test]
    fn test_new_normalizes() {
        let p = Plane::new(vec3(0.0f64, 2.0, 0.0), -4.0);
        assert!(p.normal().approx_eq(vec3(0.0, 1.0, 0.0)));
        assert_eq!(p.offset(), -2.0);
    }
}
