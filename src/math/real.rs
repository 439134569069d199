//! Scalar abstraction shared by every generic type in the crate

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Floating-point scalar usable by the math and geometry types.
///
/// Implemented for `f32` and `f64`. `TOLERANCE` is the comparison epsilon
/// used by [`is_zero`] and [`are_equal`].
pub trait Real:
    Float + FloatConst + Default + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Comparison epsilon (1e-4 for `f32`, 1e-8 for `f64`)
    const TOLERANCE: Self;

    /// Convert a literal into this scalar type
    #[inline]
    fn lit(value: f64) -> Self {
        num_traits::cast(value).unwrap_or_else(Self::nan)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Real for f32 {
    const TOLERANCE: f32 = 1.0e-4;
}

impl Real for f64 {
    const TOLERANCE: f64 = 1.0e-8;
}

/// Is `a` within tolerance of zero?
#[inline]
pub fn is_zero<T: Real>(a: T) -> bool {
    a.abs() < T::TOLERANCE
}

/// Are `a` and `b` within tolerance of each other?
#[inline]
pub fn are_equal<T: Real>(a: T, b: T) -> bool {
    is_zero(a - b)
}

/// Wrap an angle to [-π, π)
#[inline]
pub fn wrap_angle<T: Real>(angle: T) -> T {
    let tau = T::TAU();
    angle - tau * ((angle + T::PI()) / tau).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.00001f32));
        assert!(!is_zero(0.001f32));
        assert!(is_zero(1.0e-9f64));
        assert!(!is_zero(1.0e-6f64));
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(3.0 * PI) - (-PI)).abs() < 0.001);
        assert!((wrap_angle(PI / 2.0) - PI / 2.0).abs() < 0.001);
        assert!((wrap_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_lit() {
        assert_eq!(<f32 as Real>::lit(0.5), 0.5f32);
        assert_eq!(<f64 as Real>::lit(2.0), 2.0f64);
    }
}
