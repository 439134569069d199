//! Generic linear algebra
//!
//! Everything is parameterised over a [`Real`] scalar and compile-time
//! dimensions. Vectors are row vectors: `v * m` transforms `v`, and
//! products of matrices, quaternions and VQS transforms all read left to
//! right in application order.

pub mod interop;
pub mod matrix;
pub mod quaternion;
pub mod real;
pub mod vector;
pub mod vqs;

pub use matrix::{Matrix, Matrix22, Matrix33, Matrix44};
pub use quaternion::{EulerOrder, Quaternion};
pub use real::{Real, are_equal, is_zero, wrap_angle};
pub use vector::{Vector, Vector2, Vector3, Vector4, vec2, vec3, vec4};
pub use vqs::Vqs;
