//! Axis-aligned bounding box

use serde::{Deserialize, Serialize};

use crate::math::{Real, Vector};

/// Box stored as center plus half extents along each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Aabb<T, const N: usize> {
    pub center: Vector<T, N>,
    pub half_lengths: Vector<T, N>,
}

impl<T: Real, const N: usize> Aabb<T, N> {
    pub fn new(center: Vector<T, N>, half_lengths: Vector<T, N>) -> Self {
        Self {
            center,
            half_lengths: half_lengths.map(|h| h.abs()),
        }
    }

    pub fn from_min_max(min: Vector<T, N>, max: Vector<T, N>) -> Self {
        Self::new((min + max) * T::half(), (max - min) * T::half())
    }

    /// Smallest box containing every point; `None` for an empty slice
    pub fn from_points(points: &[Vector<T, N>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(Self::from_min_max(min, max))
    }

    pub fn min(&self) -> Vector<T, N> {
        self.center - self.half_lengths
    }

    pub fn max(&self) -> Vector<T, N> {
        self.center + self.half_lengths
    }

    pub fn contains(&self, p: Vector<T, N>) -> bool {
        (0..N).all(|i| (p[i] - self.center[i]).abs() <= self.half_lengths[i])
    }

    /// Smallest box containing both
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
    }
}
