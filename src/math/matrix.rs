//! Fixed-size M×N matrix
//!
//! Storage is row-major and vectors are treated as row vectors, so a point
//! is transformed with `v * m` and `a * b` applies `a` first, then `b`.
//! Affine 4×4 matrices keep their translation in row 3.

use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::quaternion::Quaternion;
use super::real::{Real, are_equal, is_zero};
use super::vector::{Vector, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    rows: [[T; N]; M],
}

pub type Matrix22<T> = Matrix<T, 2, 2>;
pub type Matrix33<T> = Matrix<T, 3, 3>;
pub type Matrix44<T> = Matrix<T, 4, 4>;

impl<T: Real, const M: usize, const N: usize> Matrix<T, M, N> {
    pub fn zero() -> Self {
        Self {
            rows: [[T::zero(); N]; M],
        }
    }

    pub const fn from_rows(rows: [[T; N]; M]) -> Self {
        Self { rows }
    }

    /// Build from `M * N` values in row-major order
    pub fn from_row_major(values: &[T]) -> Option<Self> {
        if values.len() != M * N {
            return None;
        }
        let mut out = Self::zero();
        for (i, &v) in values.iter().enumerate() {
            out.rows[i / N][i % N] = v;
        }
        Some(out)
    }

    #[inline]
    pub fn to_rows(self) -> [[T; N]; M] {
        self.rows
    }

    #[inline]
    pub fn get(&self, m: usize, n: usize) -> T {
        self.rows[m][n]
    }

    #[inline]
    pub fn set(&mut self, m: usize, n: usize, value: T) {
        self.rows[m][n] = value;
    }

    pub fn row(&self, m: usize) -> Vector<T, N> {
        Vector::new(self.rows[m])
    }

    pub fn set_row(&mut self, m: usize, row: Vector<T, N>) {
        self.rows[m] = row.to_array();
    }

    pub fn column(&self, n: usize) -> Vector<T, M> {
        let mut col = [T::zero(); M];
        for (m, c) in col.iter_mut().enumerate() {
            *c = self.rows[m][n];
        }
        Vector::new(col)
    }

    pub fn set_column(&mut self, n: usize, column: Vector<T, M>) {
        for m in 0..M {
            self.rows[m][n] = column[m];
        }
    }

    /// The P×Q block starting at row `m0`, column `n0`
    ///
    /// Returns `None` if the block does not fit inside this matrix.
    pub fn sub_matrix<const P: usize, const Q: usize>(
        &self,
        m0: usize,
        n0: usize,
    ) -> Option<Matrix<T, P, Q>> {
        if m0 + P > M || n0 + Q > N {
            return None;
        }
        let mut out = Matrix::<T, P, Q>::zero();
        for p in 0..P {
            for q in 0..Q {
                out.rows[p][q] = self.rows[m0 + p][n0 + q];
            }
        }
        Some(out)
    }

    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zero();
        for m in 0..M {
            for n in 0..N {
                out.rows[n][m] = self.rows[m][n];
            }
        }
        out
    }

    /// Frobenius inner product
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for m in 0..M {
            for n in 0..N {
                sum = sum + self.rows[m][n] * other.rows[m][n];
            }
        }
        sum
    }

    pub fn elementwise_product(&self, other: &Self) -> Self {
        let mut out = *self;
        for m in 0..M {
            for n in 0..N {
                out.rows[m][n] = out.rows[m][n] * other.rows[m][n];
            }
        }
        out
    }

    /// Snap entries within tolerance of zero to exactly zero
    pub fn clean(&self) -> Self {
        self.map(|v| if is_zero(v) { T::zero() } else { v })
    }

    pub fn is_zero(&self) -> bool {
        self.rows.iter().flatten().all(|&v| is_zero(v))
    }

    /// Entry-wise comparison within tolerance
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(&a, &b)| are_equal(a, b))
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            rows: self.rows.map(|row| row.map(&f)),
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let mut out = *self;
        for m in 0..M {
            for n in 0..N {
                out.rows[m][n] = f(self.rows[m][n], other.rows[m][n]);
            }
        }
        out
    }
}

impl<T: Real, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        let mut out = Self::zero();
        for i in 0..N {
            out.rows[i][i] = T::one();
        }
        out
    }

    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::identity())
    }

    pub fn transpose_self(&mut self) {
        *self = self.transpose();
    }

    /// Determinant by Gaussian elimination with partial pivoting
    pub fn determinant(&self) -> T {
        let mut a = self.rows;
        let mut det = T::one();

        for col in 0..N {
            let pivot = (col..N)
                .max_by(|&i, &j| {
                    a[i][col]
                        .abs()
                        .partial_cmp(&a[j][col].abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(col);

            if a[pivot][col] == T::zero() {
                return T::zero();
            }
            if pivot != col {
                a.swap(pivot, col);
                det = -det;
            }

            det = det * a[col][col];
            for row in (col + 1)..N {
                let factor = a[row][col] / a[col][col];
                for k in col..N {
                    a[row][k] = a[row][k] - factor * a[col][k];
                }
            }
        }
        det
    }

    /// Inverse by Gauss–Jordan elimination, `None` if the matrix is singular
    pub fn inverse(&self) -> Option<Self> {
        let mut a = self.rows;
        let mut inv = Self::identity().rows;

        for col in 0..N {
            let pivot = (col..N).max_by(|&i, &j| {
                a[i][col]
                    .abs()
                    .partial_cmp(&a[j][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;

            if is_zero(a[pivot][col]) {
                return None;
            }
            a.swap(pivot, col);
            inv.swap(pivot, col);

            let recip = T::one() / a[col][col];
            for k in 0..N {
                a[col][k] = a[col][k] * recip;
                inv[col][k] = inv[col][k] * recip;
            }

            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == T::zero() {
                    continue;
                }
                for k in 0..N {
                    a[row][k] = a[row][k] - factor * a[col][k];
                    inv[row][k] = inv[row][k] - factor * inv[col][k];
                }
            }
        }
        Some(Self { rows: inv })
    }
}

impl<T: Real> Matrix<T, 3, 3> {
    /// Rotation matrix for a unit quaternion
    pub fn rotation(q: &Quaternion<T>) -> Self {
        let two = T::two();
        let one = T::one();
        let (w, x, y, z) = (q.w, q.x, q.y, q.z);

        Self::from_rows([
            [
                one - two * (y * y + z * z),
                two * (x * y + w * z),
                two * (x * z - w * y),
            ],
            [
                two * (x * y - w * z),
                one - two * (x * x + z * z),
                two * (y * z + w * x),
            ],
            [
                two * (x * z + w * y),
                two * (y * z - w * x),
                one - two * (x * x + y * y),
            ],
        ])
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    pub fn translation(v: Vector3<T>) -> Self {
        let mut out = Self::identity();
        out.rows[3] = [v[0], v[1], v[2], T::one()];
        out
    }

    pub fn scaling(s: T) -> Self {
        Self::scaling_xyz(Vector::splat(s))
    }

    pub fn scaling_xyz(s: Vector3<T>) -> Self {
        let mut out = Self::identity();
        for i in 0..3 {
            out.rows[i][i] = s[i];
        }
        out
    }

    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[l, o, o, o], [o, c, s, o], [o, -s, c, o], [o, o, o, l]])
    }

    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, o, -s, o], [o, l, o, o], [s, o, c, o], [o, o, o, l]])
    }

    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, s, o, o], [-s, c, o, o], [o, o, l, o], [o, o, o, l]])
    }

    /// Homogeneous rotation matrix for a unit quaternion
    pub fn rotation(q: &Quaternion<T>) -> Self {
        let r = Matrix::<T, 3, 3>::rotation(q);
        let mut out = Self::identity();
        for m in 0..3 {
            for n in 0..3 {
                out.rows[m][n] = r.rows[m][n];
            }
        }
        out
    }

    /// Transform a point (w = 1)
    pub fn transform_point(&self, p: Vector3<T>) -> Vector3<T> {
        (p.extend(T::one()) * *self).truncate()
    }

    /// Transform a direction (w = 0); translation is ignored
    pub fn transform_vector(&self, v: Vector3<T>) -> Vector3<T> {
        (v.extend(T::zero()) * *self).truncate()
    }
}

impl<T: Real, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    fn index(&self, (m, n): (usize, usize)) -> &T {
        &self.rows[m][n]
    }
}

impl<T: Real, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    fn index_mut(&mut self, (m, n): (usize, usize)) -> &mut T {
        &mut self.rows[m][n]
    }
}

impl<T: Real, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zero();
        for m in 0..M {
            for p in 0..P {
                let mut sum = T::zero();
                for n in 0..N {
                    sum = sum + self.rows[m][n] * rhs.rows[n][p];
                }
                out.rows[m][p] = sum;
            }
        }
        out
    }
}

impl<T: Real, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

/// Row vector times matrix
impl<T: Real, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Vector<T, N> {
    type Output = Vector<T, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Vector<T, P> {
        let mut out = Vector::<T, P>::zero();
        for p in 0..P {
            let mut sum = T::zero();
            for n in 0..N {
                sum = sum + self[n] * rhs.rows[n][p];
            }
            out[p] = sum;
        }
        out
    }
}

impl<T: Real, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|v| v * rhs)
    }
}

impl<T: Real, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Real, const M: usize, const N: usize> Div<T> for Matrix<T, M, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|v| v / rhs)
    }
}

impl<T: Real, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: Real, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: Real, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

// Flat row-major list, same reasoning as `Vector`.
impl<T: Real, const M: usize, const N: usize> Serialize for Matrix<T, M, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let flat: Vec<T> = self.rows.iter().flatten().copied().collect();
        flat.serialize(serializer)
    }
}

impl<'de, T: Real, const M: usize, const N: usize> Deserialize<'de> for Matrix<T, M, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Self::from_row_major(&values).ok_or_else(|| {
            <D::Error as serde::de::Error>::invalid_length(
                values.len(),
                &"M * N values in row-major order",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector::vec3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_and_mul() {
        let a = Matrix::<f64, 2, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::<f64, 3, 2>::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a * b;
        assert_eq!(c, Matrix::from_rows([[58.0, 64.0], [139.0, 154.0]]));
        assert_eq!(Matrix::<f64, 2, 2>::identity() * c, c);
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::<f32, 2, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.get(2, 1), 6.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_determinant() {
        let m = Matrix::<f64, 3, 3>::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]);
        assert!((m.determinant() - 5.0).abs() < 1e-9);
        let inv = m.inverse().unwrap();
        assert!((inv.determinant() - 0.2).abs() < 1e-9);

        let singular = Matrix::<f64, 2, 2>::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert!(singular.determinant().abs() < 1e-12);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_inverse() {
        let m = Matrix::<f64, 4, 4>::rotation_z(0.3)
            * Matrix::scaling(2.0)
            * Matrix::translation(vec3(1.0, -2.0, 0.5));
        let inv = m.inverse().unwrap();
        assert!((m * inv).is_identity());
    }

    #[test]
    fn test_sub_matrix() {
        let m = Matrix::<f32, 3, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let s = m.sub_matrix::<2, 2>(1, 1).unwrap();
        assert_eq!(s, Matrix::from_rows([[5.0, 6.0], [8.0, 9.0]]));
        assert!(m.sub_matrix::<2, 2>(2, 0).is_none());
    }

    #[test]
    fn test_row_vector_transform() {
        let rz = Matrix::<f32, 4, 4>::rotation_z(FRAC_PI_2);
        let p = rz.transform_point(vec3(1.0, 0.0, 0.0));
        assert!(p.approx_eq(vec3(0.0, 1.0, 0.0)));

        // rotate, then translate
        let m = rz * Matrix::translation(vec3(5.0, 0.0, 0.0));
        assert!(m.transform_point(vec3(1.0, 0.0, 0.0)).approx_eq(vec3(5.0, 1.0, 0.0)));
        assert!(m.transform_vector(vec3(1.0, 0.0, 0.0)).approx_eq(vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_rows_and_columns() {
        let mut m = Matrix::<f32, 2, 2>::zero();
        m.set_row(0, Vector::new([1.0, 2.0]));
        m.set_column(1, Vector::new([5.0, 6.0]));
        assert_eq!(m.to_rows(), [[1.0, 5.0], [0.0, 6.0]]);
        assert_eq!(m.column(0), Vector::new([1.0, 0.0]));
        assert_eq!(m[(1, 1)], 6.0);
    }
}
