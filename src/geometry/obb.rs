//! Oriented bounding box in 3D

use serde::{Deserialize, Serialize};

use crate::math::{Real, Vector3, Vqs};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Obb<T> {
    pub center: Vector3<T>,
    /// Orthonormal local axes
    pub basis: [Vector3<T>; 3],
    /// Half extent along each local axis
    pub half_lengths: Vector3<T>,
}

impl<T: Real> Obb<T> {
    pub fn new(center: Vector3<T>, basis: [Vector3<T>; 3], half_lengths: Vector3<T>) -> Self {
        Self {
            center,
            basis,
            half_lengths,
        }
    }

    /// Axis-aligned box of the given half extents at `center`
    pub fn axis_aligned(center: Vector3<T>, half_lengths: Vector3<T>) -> Self {
        Self::new(
            center,
            [Vector3::x_axis(), Vector3::y_axis(), Vector3::z_axis()],
            half_lengths,
        )
    }

    /// Apply a VQS transform in place
    pub fn transform(&mut self, t: &Vqs<T>) {
        self.center = t.transform_point(self.center);
        self.basis = self.basis.map(|axis| t.q.rotate(axis));
        self.half_lengths *= t.s;
    }

    /// `p` expressed in the box's local frame
    fn local(&self, p: Vector3<T>) -> Vector3<T> {
        let d = p - self.center;
        Vector3::new(self.basis.map(|axis| axis.dot(d)))
    }

    pub fn contains(&self, p: Vector3<T>) -> bool {
        let l = self.local(p);
        (0..3).all(|i| l[i].abs() <= self.half_lengths[i])
    }

    /// Closest point on or inside the box
    pub fn closest_point(&self, p: Vector3<T>) -> Vector3<T> {
        let l = self.local(p);
        (0..3).fold(self.center, |acc, i| {
            let h = self.half_lengths[i];
            acc + self.basis[i] * l[i].max(-h).min(h)
        })
    }
}
