//! Triangle

use serde::{Deserialize, Serialize};

use crate::math::{Real, Vector, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Triangle<T, const N: usize> {
    pub points: [Vector<T, N>; 3],
}

impl<T: Real, const N: usize> Triangle<T, N> {
    pub fn new(p0: Vector<T, N>, p1: Vector<T, N>, p2: Vector<T, N>) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    pub fn centroid(&self) -> Vector<T, N> {
        let [a, b, c] = self.points;
        (a + b + c) / T::lit(3.0)
    }
}

impl<T: Real> Triangle<T, 3> {
    /// Unit normal, counter-clockwise winding; zero if degenerate
    pub fn normal(&self) -> Vector3<T> {
        let [a, b, c] = self.points;
        (b - a).cross(c - a).normalize()
    }

    pub fn area(&self) -> T {
        let [a, b, c] = self.points;
        (b - a).cross(c - a).length() * T::half()
    }
}
