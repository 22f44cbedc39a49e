//! Batch transforms over vertex-buffer style slices.
//!
//! One matrix is applied to many vectors (or many matrices). The matrix
//! columns are loaded into `f32x4` registers once and reused for every
//! element, instead of being reloaded per call as [`mat4_mul_vec4`] does.
//!
//! # Example
//!
//! ```rust
//! use hmath::simd::transform_points;
//! use hmath::{Mat4, Vec4, translate};
//!
//! let m = translate(Mat4::IDENTITY, 0.0, 0.0, -2.0);
//! let quad = [
//!     Vec4::new(-1.0, -1.0, 0.0, 1.0),
//!     Vec4::new(1.0, -1.0, 0.0, 1.0),
//!     Vec4::new(1.0, 1.0, 0.0, 1.0),
//!     Vec4::new(-1.0, 1.0, 0.0, 1.0),
//! ];
//! let moved = transform_points(&m, &quad);
//! assert!(moved.iter().all(|p| p.z == -2.0));
//! ```
//!
//! [`mat4_mul_vec4`]: crate::mat4_mul_vec4

use wide::f32x4;

use crate::{Mat4, Vec4, mat4_mul};

#[inline]
fn apply(cols: &[f32x4; 4], v: Vec4) -> Vec4 {
    let [x, y, z, w] = *cols;
    Vec4::from_simd(
        x * f32x4::splat(v.x) + y * f32x4::splat(v.y) + z * f32x4::splat(v.z) + w * f32x4::splat(v.w),
    )
}

/// Applies `m` to every vector in `points`.
///
/// Lane 3 is honored: points (`w = 1`) pick up translation, directions
/// (`w = 0`) do not.
pub fn transform_points(m: &Mat4, points: &[Vec4]) -> Vec<Vec4> {
    let cols = m.simd_cols();
    points.iter().map(|&p| apply(&cols, p)).collect()
}

/// In-place version of [`transform_points`].
///
/// # Example
///
/// ```rust
/// use hmath::simd::transform_points_inplace;
/// use hmath::{Mat4, Vec4, scale};
///
/// let mut normals = vec![Vec4::X, Vec4::Y];
/// transform_points_inplace(&scale(Mat4::IDENTITY, 2.0), &mut normals);
/// assert_eq!(normals[1], Vec4::new(0.0, 2.0, 0.0, 0.0));
/// ```
pub fn transform_points_inplace(m: &Mat4, points: &mut [Vec4]) {
    let cols = m.simd_cols();
    for p in points.iter_mut() {
        *p = apply(&cols, *p);
    }
}

/// Left-multiplies every matrix in `mats` by `m`, giving `m * mats[i]`.
///
/// Typical use is prepending one view-projection to a list of model
/// matrices.
pub fn mul_batch(m: &Mat4, mats: &[Mat4]) -> Vec<Mat4> {
    mats.iter().map(|&b| mat4_mul(*m, b)).collect()
}
