//! Conversions between the f32 math types and `glam`
//!
//! glam uses column vectors, so a glam matrix is the transpose of the
//! equivalent row-vector [`Matrix44`]. Quaternion components map one to
//! one, but glam multiplies right to left: our `p * q` is glam's `q * p`.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

use super::matrix::Matrix44;
use super::quaternion::Quaternion;
use super::vector::{Vector2, Vector3, Vector4};

impl From<Vec2> for Vector2<f32> {
    fn from(v: Vec2) -> Self {
        Self::new(v.to_array())
    }
}

impl From<Vector2<f32>> for Vec2 {
    fn from(v: Vector2<f32>) -> Self {
        Vec2::from_array(v.to_array())
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        Self::new(v.to_array())
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Vec3::from_array(v.to_array())
    }
}

impl From<Vec4> for Vector4<f32> {
    fn from(v: Vec4) -> Self {
        Self::new(v.to_array())
    }
}

impl From<Vector4<f32>> for Vec4 {
    fn from(v: Vector4<f32>) -> Self {
        Vec4::from_array(v.to_array())
    }
}

impl From<Quat> for Quaternion<f32> {
    fn from(q: Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}

impl From<Quaternion<f32>> for Quat {
    fn from(q: Quaternion<f32>) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Mat4> for Matrix44<f32> {
    fn from(m: Mat4) -> Self {
        Self::from_rows(m.to_cols_array_2d())
    }
}

impl From<Matrix44<f32>> for Mat4 {
    fn from(m: Matrix44<f32>) -> Self {
        Mat4::from_cols_array_2d(&m.to_rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector::vec3;

    #[test]
    fn test_vector_conversions() {
        let v: Vector3<f32> = Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
        assert_eq!(Vec2::from(Vector2::new([4.0, 5.0])), Vec2::new(4.0, 5.0));
        assert_eq!(Vec4::from(Vector4::<f32>::from(Vec4::ONE)), Vec4::ONE);
    }

    #[test]
    fn test_quaternion_matches_glam() {
        let ours = Quaternion::rotation_z(0.7f32);
        let theirs = Quat::from_rotation_z(0.7);
        let p = vec3(1.0f32, 2.0, -0.5);
        let expected: Vector3<f32> = (theirs * Vec3::from(p)).into();
        assert!(ours.rotate(p).approx_eq(expected));

        let a = Quaternion::rotation_x(0.3f32);
        let b = Quaternion::rotation_y(-1.1f32);
        let glam_product = Quat::from(b) * Quat::from(a);
        let ours_product = Quaternion::from(glam_product);
        assert!((a * b).dot(&ours_product).abs() > 0.9999);
    }

    #[test]
    fn test_matrix_matches_glam() {
        let q = Quaternion::rotation_y(0.4f32);
        let ours = Matrix44::rotation(&q) * Matrix44::translation(vec3(1.0, 2.0, 3.0));
        let theirs = Mat4::from(ours);
        let p = vec3(0.5f32, -1.0, 2.0);
        let expected: Vector3<f32> = theirs.transform_point3(p.into()).into();
        assert!(ours.transform_point(p).approx_eq(expected));
        assert_eq!(Matrix44::from(theirs), ours);
    }
}
