//! Fixed-size N-dimensional vector
//!
//! `Vector<T, N>` is a plain value type: copied by value, no heap storage.
//! Points and directions share the type; whether a value is a position or
//! an offset is up to the caller.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::real::{Real, are_equal, is_zero};

/// N-dimensional vector with compile-time dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

/// Shorthand for a 2D vector
#[inline]
pub fn vec2<T: Real>(x: T, y: T) -> Vector2<T> {
    Vector::new([x, y])
}

/// Shorthand for a 3D vector
#[inline]
pub fn vec3<T: Real>(x: T, y: T, z: T) -> Vector3<T> {
    Vector::new([x, y, z])
}

/// Shorthand for a 4D vector
#[inline]
pub fn vec4<T: Real>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector::new([x, y, z, w])
}

impl<T: Real, const N: usize> Vector<T, N> {
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    pub fn zero() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Unit vector along `axis`
    ///
    /// Panics if `axis >= N`.
    pub fn unit(axis: usize) -> Self {
        let mut v = Self::zero();
        v.data[axis] = T::one();
        v
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero (or non-finite) vector
    pub fn try_normalize(self) -> Option<Self> {
        let len_sq = self.length_squared();
        if len_sq <= T::zero() || !len_sq.is_finite() {
            return None;
        }
        Some(self / len_sq.sqrt())
    }

    /// Unit vector in the same direction. A zero vector is returned unchanged.
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(self)
    }

    /// All components within tolerance of zero
    pub fn is_zero(self) -> bool {
        self.data.iter().all(|&c| is_zero(c))
    }

    pub fn is_unit(self) -> bool {
        are_equal(self.length_squared(), T::one())
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> T {
        (other - self).length_squared()
    }

    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other - self).length()
    }

    /// Linear interpolation: `self` at t = 0, `other` at t = 1
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Snap components within tolerance of zero to exactly zero
    pub fn clean(self) -> Self {
        self.map(|c| if is_zero(c) { T::zero() } else { c })
    }

    pub fn elementwise_product(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a.min(b))
    }

    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a.max(b))
    }

    /// Component-wise comparison within tolerance
    pub fn approx_eq(self, other: Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| are_equal(a, b))
    }

    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    fn zip_with(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = self;
        for (o, &b) in out.data.iter_mut().zip(other.data.iter()) {
            *o = f(*o, b);
        }
        out
    }
}

impl<T: Real> Vector<T, 2> {
    #[inline]
    pub fn x(self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(self) -> T {
        self.data[1]
    }

    pub fn x_axis() -> Self {
        Self::unit(0)
    }

    pub fn y_axis() -> Self {
        Self::unit(1)
    }

    /// 2D cross product: `self.x * other.y - self.y * other.x`
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn perp_dot(self, other: Self) -> T {
        self.data[0] * other.data[1] - self.data[1] * other.data[0]
    }

    /// `self` rotated a quarter turn counter-clockwise
    #[inline]
    pub fn perpendicular(self) -> Self {
        vec2(-self.data[1], self.data[0])
    }

    /// Unit vector at `angle` radians from the x-axis
    pub fn from_angle(angle: T) -> Self {
        vec2(angle.cos(), angle.sin())
    }

    /// Angle from the x-axis, in (-π, π]
    pub fn angle(self) -> T {
        self.data[1].atan2(self.data[0])
    }

    pub fn extend(self, z: T) -> Vector3<T> {
        vec3(self.data[0], self.data[1], z)
    }
}

impl<T: Real> Vector<T, 3> {
    #[inline]
    pub fn x(self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(self) -> T {
        self.data[2]
    }

    pub fn x_axis() -> Self {
        Self::unit(0)
    }

    pub fn y_axis() -> Self {
        Self::unit(1)
    }

    pub fn z_axis() -> Self {
        Self::unit(2)
    }

    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Some unit vector perpendicular to `self`
    pub fn perpendicular(self) -> Self {
        // Cross with the axis least aligned with self
        let [x, y, z] = self.data.map(|c| c.abs());
        let axis = if x <= y && x <= z {
            Self::x_axis()
        } else if y <= z {
            Self::y_axis()
        } else {
            Self::z_axis()
        };
        self.cross(axis).normalize()
    }

    /// Right-handed orthonormal basis whose first axis is `self` normalized
    pub fn orthonormal_basis(self) -> [Self; 3] {
        let a = self.normalize();
        let b = a.perpendicular();
        let c = a.cross(b);
        [a, b, c]
    }

    pub fn extend(self, w: T) -> Vector4<T> {
        vec4(self.data[0], self.data[1], self.data[2], w)
    }

    pub fn truncate(self) -> Vector2<T> {
        vec2(self.data[0], self.data[1])
    }
}

impl<T: Real> Vector<T, 4> {
    #[inline]
    pub fn x(self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(self) -> T {
        self.data[2]
    }

    #[inline]
    pub fn w(self) -> T {
        self.data[3]
    }

    pub fn truncate(self) -> Vector3<T> {
        vec3(self.data[0], self.data[1], self.data[2])
    }
}

impl<T: Real, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T: Real, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Real, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Real, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Real, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Real, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Real, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Real, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Real, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<T: Real, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

// Serialized as a flat component list; serde has no blanket impl for `[T; N]`.
impl<T: Real, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.as_slice().serialize(serializer)
    }
}

impl<'de, T: Real, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = Vec::<T>::deserialize(deserializer)?;
        let len = components.len();
        let data: [T; N] = components
            .try_into()
            .map_err(|_| {
                <D::Error as serde::de::Error>::invalid_length(
                    len,
                    &"one value per vector component",
                )
            })?;
        Ok(Self { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_length() {
        let a = vec3(1.0f32, 2.0, 2.0);
        assert!((a.length() - 3.0).abs() < 0.0001);
        assert!((a.dot(vec3(1.0, 0.0, 0.0)) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let z = Vector::<f32, 3>::zero();
        assert!(z.try_normalize().is_none());
        assert_eq!(z.normalize(), z);

        let n = vec2(3.0f32, 4.0).normalize();
        assert!(n.approx_eq(vec2(0.6, 0.8)));
    }

    #[test]
    fn test_perp_dot_sign() {
        let x = Vector2::<f32>::x_axis();
        let y = Vector2::<f32>::y_axis();
        assert!(x.perp_dot(y) > 0.0);
        assert!(y.perp_dot(x) < 0.0);
        assert!(x.perpendicular().approx_eq(y));
    }

    #[test]
    fn test_cross_right_handed() {
        let x = Vector3::<f64>::x_axis();
        let y = Vector3::<f64>::y_axis();
        assert!(x.cross(y).approx_eq(Vector3::z_axis()));
    }

    #[test]
    fn test_orthonormal_basis() {
        let [a, b, c] = vec3(0.3f64, -1.2, 0.4).orthonormal_basis();
        assert!(a.is_unit() && b.is_unit() && c.is_unit());
        assert!(is_zero(a.dot(b)));
        assert!(is_zero(a.dot(c)));
        assert!(is_zero(b.dot(c)));
    }

    #[test]
    fn test_scalar_ops() {
        let v = vec2(1.0f32, -2.0);
        assert_eq!(2.0 * v, vec2(2.0, -4.0));
        assert_eq!(v / 2.0, vec2(0.5, -1.0));
        assert_eq!(-v, vec2(-1.0, 2.0));
    }

    #[test]
    fn test_serde_dimension_check() {
        let v: Vector3<f32> = serde_json::from_str("[1.0, 2.0, 3.0]").unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
        assert!(serde_json::from_str::<Vector3<f32>>("[1.0, 2.0]").is_err());
        assert_eq!(serde_json::to_string(&vec2(1.0f32, 0.5)).unwrap(), "[1.0,0.5]");
    }
}
