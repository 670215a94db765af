//! Small vector-math helpers shared by the arcball and the camera.
//!
//! glam matrices are column-major: "axis k" of a transform is column k
//! (`x_axis`, `y_axis`, `z_axis`), the translation lives in `w_axis`.

use glam::{Affine3A, Mat4, Quat, Vec3};

/// Below this cross-product magnitude two sphere points are treated as
/// coincident (or antipodal) and produce no rotation.
pub const ROTATION_EPSILON: f32 = 1.0e-6;

/// Inverse of a rigid or similarity transform.
///
/// Only the upper 3x3 block is inverted; the translation is recovered as
/// `-R⁻¹·t`. Callers must supply a matrix without shear or projective
/// terms, a zero-scale matrix yields a non-finite result.
#[must_use]
pub fn affine_inverse(m: Mat4) -> Mat4 {
    Mat4::from(Affine3A::from_mat4(m).inverse())
}

/// Rotation taking unit vector `from` to unit vector `to` along the great
/// circle through both (Shoemake, Graphics Gems IV, III.1).
///
/// The quaternion is `[from × to, from · to]`, which rotates by twice the
/// angle between the points. Returns identity when the axis is degenerate.
#[must_use]
pub fn quat_from_unit_sphere(from: Vec3, to: Vec3) -> Quat {
    let axis = from.cross(to);
    if axis.length() < ROTATION_EPSILON {
        return Quat::IDENTITY;
    }
    Quat::from_xyzw(axis.x, axis.y, axis.z, from.dot(to)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-5;

    #[test]
    fn affine_inverse_of_rigid_transform() {
        let m = Mat4::from_rotation_translation(
            Quat::from_rotation_y(0.7),
            Vec3::new(1.0, -2.0, 3.0),
        );
        let product = m * affine_inverse(m);
        assert!(product.abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn affine_inverse_of_uniform_scale() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::from_rotation_x(-0.3),
            Vec3::new(0.0, 5.0, 0.0),
        );
        let inv = affine_inverse(m);
        assert!((inv * m).abs_diff_eq(Mat4::IDENTITY, EPS));
        assert_eq!(inv.row(3), glam::Vec4::W);
    }

    #[test]
    fn coincident_points_give_identity() {
        let p = Vec3::new(0.3, 0.4, 0.866_025_4).normalize();
        assert_eq!(quat_from_unit_sphere(p, p), Quat::IDENTITY);
    }

    #[test]
    fn antipodal_points_give_identity() {
        assert_eq!(quat_from_unit_sphere(Vec3::Z, -Vec3::Z), Quat::IDENTITY);
    }

    #[test]
    fn quarter_arc_rotates_half_turn() {
        // 90° between the points doubles to a 180° rotation about +Z.
        let q = quat_from_unit_sphere(Vec3::X, Vec3::Y);
        let (axis, angle) = q.to_axis_angle();
        assert!((axis - Vec3::Z).length() < EPS);
        assert!((angle - std::f32::consts::PI).abs() < EPS);
    }
}
