//! Simple polygon in the plane

use serde::{Deserialize, Serialize};

use crate::math::{Real, Vector2, is_zero};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero area
    Degenerate,
}

/// Closed polygon; the last vertex connects back to the first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Polygon2D<T> {
    vertices: Vec<Vector2<T>>,
}

impl<T: Real> Polygon2D<T> {
    pub fn new(vertices: Vec<Vector2<T>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vector2<T>] {
        &self.vertices
    }

    pub fn push(&mut self, v: Vector2<T>) {
        self.vertices.push(v);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Directed edges `(v[i], v[i + 1])`, wrapping around
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area; positive for counter-clockwise winding
    pub fn signed_area(&self) -> T {
        self.edges()
            .fold(T::zero(), |acc, (a, b)| acc + a.perp_dot(b))
            * T::half()
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    pub fn winding(&self) -> Winding {
        let a = self.signed_area();
        if is_zero(a) {
            Winding::Degenerate
        } else if a > T::zero() {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Area centroid; `None` for a degenerate polygon
    pub fn centroid(&self) -> Option<Vector2<T>> {
        let area = self.signed_area();
        if is_zero(area) {
            return None;
        }
        let sum = self.edges().fold(Vector2::zero(), |acc, (a, b)| {
            acc + (a + b) * a.perp_dot(b)
        });
        Some(sum / (T::lit(6.0) * area))
    }

    /// Every turn goes the same way (collinear vertices allowed)
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut sign = T::zero();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let turn = (b - a).perp_dot(c - b);
            if is_zero(turn) {
                continue;
            }
            if sign == T::zero() {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        sign != T::zero()
    }

    /// Even-odd crossing test; points exactly on an edge may go either way
    pub fn contains_point(&self, p: Vector2<T>) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y() > p.y()) != (b.y() > p.y()) {
                let x = a.x() + (p.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
                if p.x() < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}
