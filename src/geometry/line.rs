//! Lines, rays and segments

use serde::{Deserialize, Serialize};

use crate::math::{Real, Vector};

/// Infinite line through `origin` along a unit `direction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Line<T, const N: usize> {
    origin: Vector<T, N>,
    direction: Vector<T, N>,
}

impl<T: Real, const N: usize> Line<T, N> {
    /// `direction` is normalized on construction
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vector<T, N> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector<T, N> {
        self.direction
    }

    pub fn set(&mut self, origin: Vector<T, N>, direction: Vector<T, N>) {
        *self = Self::new(origin, direction);
    }

    /// `origin + u * direction`
    #[inline]
    pub fn point_at(&self, u: T) -> Vector<T, N> {
        self.origin + self.direction * u
    }
}

/// Half-line starting at `origin`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Ray<T, const N: usize> {
    origin: Vector<T, N>,
    direction: Vector<T, N>,
}

impl<T: Real, const N: usize> Ray<T, N> {
    pub fn new(origin: Vector<T, N>, direction: Vector<T, N>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vector<T, N> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector<T, N> {
        self.direction
    }

    #[inline]
    pub fn point_at(&self, u: T) -> Vector<T, N> {
        self.origin + self.direction * u
    }

    pub fn to_line(&self) -> Line<T, N> {
        Line {
            origin: self.origin,
            direction: self.direction,
        }
    }
}

/// Finite segment between two endpoints
///
/// Parameters along a segment run from 0 at `p0` to 1 at `p1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Segment<T, const N: usize> {
    pub p0: Vector<T, N>,
    pub p1: Vector<T, N>,
}

impl<T: Real, const N: usize> Segment<T, N> {
    pub fn new(p0: Vector<T, N>, p1: Vector<T, N>) -> Self {
        Self { p0, p1 }
    }

    /// `p1 - p0`
    #[inline]
    pub fn vector(&self) -> Vector<T, N> {
        self.p1 - self.p0
    }

    pub fn length(&self) -> T {
        self.vector().length()
    }

    /// Unit direction from `p0` to `p1` (zero for a degenerate segment)
    pub fn direction(&self) -> Vector<T, N> {
        self.vector().normalize()
    }

    pub fn center(&self) -> Vector<T, N> {
        self.p0.lerp(self.p1, T::half())
    }

    #[inline]
    pub fn point_at(&self, u: T) -> Vector<T, N> {
        self.p0.lerp(self.p1, u)
    }

    pub fn to_line(&self) -> Line<T, N> {
        Line::new(self.p0, self.vector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{vec2, vec3};

    #[test]
    fn test_line_normalizes_direction() {
        let l = Line::new(vec2(1.0f32, 1.0), vec2(0.0, 5.0));
        assert!(l.direction().approx_eq(vec2(0.0, 1.0)));
        assert!(l.point_at(2.0).approx_eq(vec2(1.0, 3.0)));
    }

    #[test]
    fn test_segment_basics() {
        let s = Segment::new(vec3(0.0f64, 0.0, 0.0), vec3(3.0, 4.0, 0.0));
        assert_eq!(s.length(), 5.0);
        assert!(s.center().approx_eq(vec3(1.5, 2.0, 0.0)));
        assert!(s.direction().approx_eq(vec3(0.6, 0.8, 0.0)));
        assert!(s.to_line().point_at(5.0).approx_eq(s.p1));
    }
}
