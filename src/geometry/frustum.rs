//! View frustum
//!
//! A truncated pyramid with its apex at `origin`, looking along
//! `basis[0]`. The near rectangle is described by its half height (along
//! `up`) and half width (along `left`); the far rectangle is the same shape
//! scaled by `far / near`.

use serde::{Deserialize, Serialize};

use super::plane::Plane;
use crate::math::{Real, Vector3, Vqs};

pub const TOP: usize = 0;
pub const BOTTOM: usize = 1;
pub const FAR: usize = 2;
pub const NEAR: usize = 3;
pub const LEFT: usize = 4;
pub const RIGHT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Frustum<T> {
    pub origin: Vector3<T>,
    /// `[forward, left, up]`
    pub basis: [Vector3<T>; 3],
    pub near: T,
    pub far: T,
    /// `[half height, half width]` of the near rectangle
    pub near_half_extents: [T; 2],
}

impl<T: Real> Default for Frustum<T> {
    fn default() -> Self {
        Self {
            origin: Vector3::zero(),
            basis: [Vector3::x_axis(), Vector3::y_axis(), Vector3::z_axis()],
            near: T::lit(0.1),
            far: T::lit(100.0),
            near_half_extents: [T::one(), T::one()],
        }
    }
}

impl<T: Real> Frustum<T> {
    pub fn new(
        origin: Vector3<T>,
        forward: Vector3<T>,
        left: Vector3<T>,
        up: Vector3<T>,
        near: T,
        far: T,
        near_half_extents: [T; 2],
    ) -> Self {
        Self {
            origin,
            basis: [forward, left, up],
            near,
            far,
            near_half_extents,
        }
    }

    /// Corner points, indexed by `top/bottom * 4 + far/near * 2 + left/right`
    ///
    /// Order: ftl, ftr, ntl, ntr, fbl, fbr, nbl, nbr.
    pub fn vertices(&self) -> [Vector3<T>; 8] {
        let [forward, left, up] = self.basis;
        let [half_height, half_width] = self.near_half_extents;
        let scale = self.far / self.near;

        let mut out = [Vector3::zero(); 8];
        for (i, v) in out.iter_mut().enumerate() {
            let vertical = if i & 4 == 0 { half_height } else { -half_height };
            let horizontal = if i & 1 == 0 { half_width } else { -half_width };
            let near_corner = forward * self.near + up * vertical + left * horizontal;
            let corner = if i & 2 == 0 {
                near_corner * scale
            } else {
                near_corner
            };
            *v = self.origin + corner;
        }
        out
    }

    /// Centroid of the eight corners
    pub fn center(&self) -> Vector3<T> {
        let sum = self
            .vertices()
            .iter()
            .fold(Vector3::zero(), |acc, &v| acc + v);
        sum / T::lit(8.0)
    }

    /// Bounding planes `[top, bottom, far, near, left, right]`, normals pointing inward
    ///
    /// Returns `None` for a degenerate frustum.
    pub fn planes(&self) -> Option<[Plane<T>; 6]> {
        let v = self.vertices();
        let center = self.center();
        let face = |a: usize, b: usize, c: usize| -> Option<Plane<T>> {
            let p = Plane::from_points(v[a], v[b], v[c])?;
            Some(if p.signed_distance(center) < T::zero() {
                p.flipped()
            } else {
                p
            })
        };

        Some([
            face(0, 1, 2)?,
            face(4, 5, 6)?,
            face(0, 1, 4)?,
            face(2, 3, 6)?,
            face(0, 2, 4)?,
            face(1, 3, 5)?,
        ])
    }

    /// Apply a VQS transform in place
    pub fn transform(&mut self, t: &Vqs<T>) {
        self.origin = t.transform_point(self.origin);
        self.basis = self.basis.map(|axis| t.q.rotate(axis));
        self.near = self.near * t.s;
        self.far = self.far * t.s;
        self.near_half_extents = self.near_half_extents.map(|h| h * t.s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Quaternion, vec3};
    use std::f64::consts::FRAC_PI_2;

    fn unit_frustum() -> Frustum<f64> {
        Frustum::new(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            vec3(0.0, 0.0, 1.0),
            1.0,
            10.0,
            [1.0, 1.0],
        )
    }

    #[test]
    fn test_vertices() {
        let v = unit_frustum().vertices();
        // far top left
        assert!(v[0].approx_eq(vec3(10.0, 10.0, 10.0)));
        // near bottom right
        assert!(v[7].approx_eq(vec3(1.0, -1.0, -1.0)));
    }

    #[test]
    fn test_planes_face_inward() {
        let f = unit_frustum();
        let planes = f.planes().unwrap();
        let inside = vec3(5.0, 0.0, 0.0);
        assert!(planes.iter().all(|p| p.signed_distance(inside) > 0.0));
        assert!(planes[NEAR].signed_distance(vec3(0.5, 0.0, 0.0)) < 0.0);
        assert!(planes[FAR].signed_distance(vec3(11.0, 0.0, 0.0)) < 0.0);
        assert!(planes[TOP].signed_distance(vec3(5.0, 0.0, 6.0)) < 0.0);
        assert!(planes[LEFT].signed_distance(vec3(5.0, 6.0, 0.0)) < 0.0);
        assert!(planes[RIGHT].signed_distance(vec3(5.0, -6.0, 0.0)) < 0.0);
        assert!(planes[BOTTOM].signed_distance(vec3(5.0, 0.0, -6.0)) < 0.0);
    }

    #[test]
    fn test_transform() {
        let mut f = unit_frustum();
        f.transform(&Vqs::new(
            vec3(0.0, 0.0, 5.0),
            Quaternion::rotation_z(FRAC_PI_2),
            2.0,
        ));
        assert!(f.basis[0].approx_eq(vec3(0.0, 1.0, 0.0)));
        assert_eq!(f.near, 2.0);
        assert!(f.vertices()[7].approx_eq(vec3(1.0 * 2.0, 1.0 * 2.0, 5.0 - 2.0)));
    }
}
