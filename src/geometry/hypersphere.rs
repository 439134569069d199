//! N-dimensional sphere

use serde::{Deserialize, Serialize};

use crate::math::{Real, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Hypersphere<T, const N: usize> {
    center: Vector<T, N>,
    radius: T,
}

pub type Disk<T> = Hypersphere<T, 2>;
pub type Sphere<T> = Hypersphere<T, 3>;

impl<T: Real, const N: usize> Hypersphere<T, N> {
    pub fn new(center: Vector<T, N>, radius: T) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Vector<T, N> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn set_center(&mut self, center: Vector<T, N>) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: T) {
        self.radius = radius;
    }

    /// Is `p` inside or on the boundary?
    pub fn contains(&self, p: Vector<T, N>) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }
}

impl<T: Real, const N: usize> Default for Hypersphere<T, N> {
    fn default() -> Self {
        Self::new(Vector::zero(), T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2;

    #[test]
    fn test_contains() {
        let mut d = Disk::new(vec2(1.0f32, 1.0), 0.5);
        assert!(d.contains(vec2(1.5, 1.0)));
        assert!(!d.contains(vec2(1.6, 1.0)));

        d.set_center(vec2(0.0, 0.0));
        d.set_radius(2.0);
        assert!(d.contains(vec2(1.5, 1.0)));
    }
}
