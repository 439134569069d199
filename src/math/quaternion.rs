//! Rotation quaternion
//!
//! Multiplication concatenates left to right: `p * q` is the rotation that
//! applies `p` first, then `q`. This matches the row-vector matrix
//! convention used by [`Matrix`], so `(p * q).to_matrix()` equals
//! `p.to_matrix() * q.to_matrix()`.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::matrix::Matrix33;
use super::real::{Real, are_equal, is_zero};
use super::vector::{Vector3, vec3};

/// Order in which Euler angles are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EulerOrder {
    /// Rotate about x, then y, then z
    #[default]
    Xyz,
    /// Rotate about z, then y, then x
    Zyx,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Real> Quaternion<T> {
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Rotation of `angle` radians about `axis`
    ///
    /// The axis need not be unit length. A zero axis gives the identity.
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let Some(axis) = axis.try_normalize() else {
            return Self::identity();
        };
        let (s, c) = (angle * T::half()).sin_cos();
        Self::new(c, axis.x() * s, axis.y() * s, axis.z() * s)
    }

    /// Shortest-arc rotation taking unit vector `from` onto unit vector `to`
    pub fn from_to(from: Vector3<T>, to: Vector3<T>) -> Self {
        let d = from.dot(to);
        if d >= T::one() - T::TOLERANCE {
            return Self::identity();
        }
        if d <= -T::one() + T::TOLERANCE {
            // Half turn about any axis perpendicular to `from`
            let axis = from.perpendicular();
            return Self::new(T::zero(), axis.x(), axis.y(), axis.z());
        }
        let c = from.cross(to);
        Self::new(T::one() + d, c.x(), c.y(), c.z()).normalize()
    }

    pub fn from_euler(rx: T, ry: T, rz: T, order: EulerOrder) -> Self {
        let (qx, qy, qz) = (
            Self::rotation_x(rx),
            Self::rotation_y(ry),
            Self::rotation_z(rz),
        );
        match order {
            EulerOrder::Xyz => qx * qy * qz,
            EulerOrder::Zyx => qz * qy * qx,
        }
    }

    /// Rotation held by a (row-vector) rotation matrix
    pub fn from_rotation_matrix(m: &Matrix33<T>) -> Self {
        // r(i, j) is the column-vector form of the same rotation
        let r = |i: usize, j: usize| m.get(j, i);
        let quarter = T::lit(0.25);
        let trace = r(0, 0) + r(1, 1) + r(2, 2);

        let q = if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * T::two();
            Self::new(
                quarter * s,
                (r(2, 1) - r(1, 2)) / s,
                (r(0, 2) - r(2, 0)) / s,
                (r(1, 0) - r(0, 1)) / s,
            )
        } else if r(0, 0) > r(1, 1) && r(0, 0) > r(2, 2) {
            let s = (T::one() + r(0, 0) - r(1, 1) - r(2, 2)).sqrt() * T::two();
            Self::new(
                (r(2, 1) - r(1, 2)) / s,
                quarter * s,
                (r(0, 1) + r(1, 0)) / s,
                (r(0, 2) + r(2, 0)) / s,
            )
        } else if r(1, 1) > r(2, 2) {
            let s = (T::one() + r(1, 1) - r(0, 0) - r(2, 2)).sqrt() * T::two();
            Self::new(
                (r(0, 2) - r(2, 0)) / s,
                (r(0, 1) + r(1, 0)) / s,
                quarter * s,
                (r(1, 2) + r(2, 1)) / s,
            )
        } else {
            let s = (T::one() + r(2, 2) - r(0, 0) - r(1, 1)).sqrt() * T::two();
            Self::new(
                (r(1, 0) - r(0, 1)) / s,
                (r(0, 2) + r(2, 0)) / s,
                (r(1, 2) + r(2, 1)) / s,
                quarter * s,
            )
        };
        q.normalize()
    }

    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = (angle * T::half()).sin_cos();
        Self::new(c, s, T::zero(), T::zero())
    }

    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = (angle * T::half()).sin_cos();
        Self::new(c, T::zero(), s, T::zero())
    }

    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = (angle * T::half()).sin_cos();
        Self::new(c, T::zero(), T::zero(), s)
    }

    #[inline]
    pub fn vector_part(&self) -> Vector3<T> {
        vec3(self.x, self.y, self.z)
    }

    /// Squared magnitude
    #[inline]
    pub fn norm(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> T {
        self.norm().sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Unit quaternion in the same direction; identity for a zero quaternion
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if is_zero(n) {
            return Self::identity();
        }
        *self * n.sqrt().recip()
    }

    pub fn is_unit(&self) -> bool {
        are_equal(self.norm(), T::one())
    }

    pub fn is_identity(&self) -> bool {
        are_equal(self.w.abs(), T::one())
            && is_zero(self.x)
            && is_zero(self.y)
            && is_zero(self.z)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse; identity for a zero quaternion
    pub fn inverse(&self) -> Self {
        let n = self.norm();
        if is_zero(n) {
            return Self::identity();
        }
        self.conjugate() * n.recip()
    }

    /// Replace non-finite or zero values with the identity, otherwise normalize
    pub fn make_valid(&mut self) {
        let finite = [self.w, self.x, self.y, self.z]
            .iter()
            .all(|c| c.is_finite());
        *self = if finite {
            self.normalize()
        } else {
            Self::identity()
        };
    }

    /// Rotate `v` by this (unit) quaternion
    pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
        let u = self.vector_part();
        let t = u.cross(v) * T::two();
        v + t * self.w + u.cross(t)
    }

    /// Rotation axis and angle in radians
    ///
    /// A rotation too small to define an axis reports the x-axis and zero.
    pub fn axis_angle(&self) -> (Vector3<T>, T) {
        let q = self.normalize();
        let w = q.w.max(-T::one()).min(T::one());
        let s = (T::one() - w * w).sqrt();
        if is_zero(s) {
            return (Vector3::x_axis(), T::zero());
        }
        (q.vector_part() / s, T::two() * w.acos())
    }

    pub fn to_matrix(&self) -> Matrix33<T> {
        Matrix33::rotation(self)
    }

    /// Normalized linear interpolation along the shorter arc
    pub fn lerp(&self, end: &Self, t: T) -> Self {
        let end = if self.dot(end) < T::zero() { -*end } else { *end };
        (*self * (T::one() - t) + end * t).normalize()
    }

    /// Spherical linear interpolation along the shorter arc
    pub fn slerp(&self, end: &Self, t: T) -> Self {
        let mut cos = self.dot(end);
        let end = if cos < T::zero() {
            cos = -cos;
            -*end
        } else {
            *end
        };

        // Nearly parallel: sin(angle) is too small to divide by
        if T::one() - cos < T::TOLERANCE {
            return (*self * (T::one() - t) + end * t).normalize();
        }

        let angle = cos.acos();
        let recip = angle.sin().recip();
        let a = ((T::one() - t) * angle).sin() * recip;
        let b = (t * angle).sin() * recip;
        *self * a + end * b
    }

    /// Fast slerp approximation
    ///
    /// Normalized lerp with `t` warped by a cubic fitted to the slerp
    /// speed profile (Blow's correction). Error stays around 1e-3 for
    /// angles below a half turn.
    pub fn approx_slerp(&self, end: &Self, t: T) -> Self {
        let cos = self.dot(end).abs();
        let factor = T::one() - T::lit(0.7878088) * cos;
        let k = T::lit(0.5069269) * factor * factor;
        let b = T::two() * k;
        let c = -T::lit(3.0) * k;
        let d = T::one() + k;
        let t = t * (t * (b * t + c) + d);
        self.lerp(end, t)
    }
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

/// `self * rhs` applies `self` first, then `rhs`
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Hamilton product rhs ⊗ self
        let (a, b) = (rhs, self);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

impl<T: Real> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}
