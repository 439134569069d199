//! VQS transform: uniform scale, then rotation, then translation

use std::ops::{Mul, MulAssign};

use serde::{Deserialize, Serialize};

use super::matrix::{Matrix33, Matrix44};
use super::quaternion::Quaternion;
use super::real::{Real, is_zero};
use super::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Real")]
pub struct Vqs<T> {
    /// Translation
    pub v: Vector3<T>,
    /// Rotation (unit)
    pub q: Quaternion<T>,
    /// Uniform scale
    pub s: T,
}

impl<T: Real> Vqs<T> {
    pub fn new(v: Vector3<T>, q: Quaternion<T>, s: T) -> Self {
        Self { v, q, s }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::zero(), Quaternion::identity(), T::one())
    }

    pub fn from_translation(v: Vector3<T>) -> Self {
        Self {
            v,
            ..Self::identity()
        }
    }

    pub fn from_rotation(q: Quaternion<T>) -> Self {
        Self {
            q,
            ..Self::identity()
        }
    }

    pub fn from_scale(s: T) -> Self {
        Self {
            s,
            ..Self::identity()
        }
    }

    pub fn transform_point(&self, p: Vector3<T>) -> Vector3<T> {
        self.q.rotate(p * self.s) + self.v
    }

    /// Transform a direction; translation is ignored
    pub fn transform_vector(&self, d: Vector3<T>) -> Vector3<T> {
        self.q.rotate(d * self.s)
    }

    /// Append a translation
    pub fn translate(&mut self, t: Vector3<T>) {
        self.v += t;
    }

    /// Append a rotation about the origin
    pub fn rotate(&mut self, q: Quaternion<T>) {
        self.v = q.rotate(self.v);
        self.q = self.q * q;
    }

    /// Append a uniform scale about the origin
    pub fn scale(&mut self, s: T) {
        self.v *= s;
        self.s = self.s * s;
    }

    pub fn inverse(&self) -> Self {
        let s = self.s.recip();
        let q = self.q.inverse();
        Self::new(q.rotate(-self.v) * s, q, s)
    }

    /// Equivalent homogeneous matrix (row-vector convention)
    pub fn to_matrix(&self) -> Matrix44<T> {
        Matrix44::scaling(self.s) * Matrix44::rotation(&self.q) * Matrix44::translation(self.v)
    }

    /// Decompose an affine matrix with uniform scale
    ///
    /// Returns `None` when the linear part has zero scale.
    pub fn from_matrix(m: &Matrix44<T>) -> Option<Self> {
        let linear: Matrix33<T> = m.sub_matrix::<3, 3>(0, 0)?;
        let s = linear.row(0).length();
        if is_zero(s) {
            return None;
        }
        let q = Quaternion::from_rotation_matrix(&(linear / s));
        let v = m.row(3).truncate();
        Some(Self::new(v, q, s))
    }

    /// Repair non-finite or degenerate components
    pub fn make_valid(&mut self) {
        if !self.v.as_array().iter().all(|c| c.is_finite()) {
            self.v = Vector3::zero();
        }
        self.q.make_valid();
        if !self.s.is_finite() || self.s <= T::zero() {
            self.s = T::one();
        }
    }

    /// Blend two transforms: lerp translation and scale, slerp rotation
    pub fn interpolate(a: &Self, b: &Self, t: T) -> Self {
        Self::new(
            a.v.lerp(b.v, t),
            a.q.slerp(&b.q, t),
            a.s + (b.s - a.s) * t,
        )
    }
}

impl<T: Real> Default for Vqs<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// `a * b` applies `a` first, then `b`
impl<T: Real> Mul for Vqs<T> {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        Self::new(
            b.q.rotate(self.v) * b.s + b.v,
            self.q * b.q,
            self.s * b.s,
        )
    }
}

impl<T: Real> MulAssign for Vqs<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quaternion::EulerOrder;
    use crate::math::vector::vec3;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn sample() -> Vqs<f64> {
        Vqs::new(
            vec3(1.0, -2.0, 3.0),
            Quaternion::from_euler(0.3, 0.7, -0.2, EulerOrder::Xyz),
            2.5,
        )
    }

    #[test]
    fn test_transform_order() {
        let t = Vqs::new(vec3(10.0, 0.0, 0.0), Quaternion::rotation_z(FRAC_PI_2), 2.0);
        // scale (2, 0, 0), rotate (0, 2, 0), translate (10, 2, 0)
        assert!(t.transform_point(vec3(1.0, 0.0, 0.0)).approx_eq(vec3(10.0, 2.0, 0.0)));
        assert!(t.transform_vector(vec3(1.0, 0.0, 0.0)).approx_eq(vec3(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_compose_applies_left_first() {
        let a = sample();
        let b = Vqs::new(vec3(0.0, 1.0, 0.0), Quaternion::rotation_y(1.0), 0.5);
        let p = vec3(0.4, 0.1, -0.9);
        let composed = (a * b).transform_point(p);
        assert!(composed.approx_eq(b.transform_point(a.transform_point(p))));
    }

    #[test]
    fn test_append_ops_match_compose() {
        let mut t = sample();
        t.rotate(Quaternion::rotation_x(0.5));
        t.scale(3.0);
        t.translate(vec3(1.0, 1.0, 1.0));

        let expected = sample()
            * Vqs::from_rotation(Quaternion::rotation_x(0.5))
            * Vqs::from_scale(3.0)
            * Vqs::from_translation(vec3(1.0, 1.0, 1.0));
        let p = vec3(2.0, 0.0, -1.0);
        assert!(t.transform_point(p).approx_eq(expected.transform_point(p)));
    }

    #[test]
    fn test_matrix_round_trip() {
        let t = sample();
        let m = t.to_matrix();
        let p = vec3(1.0, 2.0, 3.0);
        assert!(m.transform_point(p).approx_eq(t.transform_point(p)));

        let back = Vqs::from_matrix(&m).unwrap();
        assert!(back.transform_point(p).approx_eq(t.transform_point(p)));
        assert!(Vqs::<f64>::from_matrix(&Matrix44::zero()).is_none());
    }

    #[test]
    fn test_make_valid() {
        let mut t = Vqs::new(
            vec3(f64::NAN, 0.0, 0.0),
            Quaternion::new(0.0, 0.0, 0.0, 0.0),
            -1.0,
        );
        t.make_valid();
        assert_eq!(t, Vqs::identity());
    }

    #[test]
    fn test_interpolate_endpoints() {
        let a = Vqs::identity();
        let b = sample();
        let p = vec3(1.0, 0.0, 0.0);
        let start = Vqs::interpolate(&a, &b, 0.0);
        let end = Vqs::interpolate(&a, &b, 1.0);
        assert!(start.transform_point(p).approx_eq(p));
        assert!(end.transform_point(p).approx_eq(b.transform_point(p)));
    }

    proptest! {
        #[test]
        fn test_inverse_round_trip(
            rx in -PI..PI, ry in -PI..PI, rz in -PI..PI,
            s in 0.1f64..10.0,
            tx in -50.0f64..50.0, ty in -50.0f64..50.0,
        ) {
            let t = Vqs::new(
                vec3(tx, ty, 1.0),
                Quaternion::from_euler(rx, ry, rz, EulerOrder::Xyz),
                s,
            );
            let p = vec3(0.5, -1.5, 2.0);
            let back = t.inverse().transform_point(t.transform_point(p));
            prop_assert!((back - p).length() < 1e-6);
        }
    }
}
