//! Camera and object transform builders.
//!
//! Object builders take the current matrix and compose the new elementary
//! transform on the **right**, so it applies in the matrix's local frame,
//! before the matrix itself:
//!
//! ```text
//! rotate_x(a, angle)      = a * Rx(angle)
//! translate(a, x, y, z)   = a * T(x, y, z)
//! ```
//!
//! Camera builders ([`look_at`], [`perspective`]) produce a fresh matrix in
//! the right-handed convention where the camera looks down its local -Z
//! axis and clip-space depth spans [-1, 1].
//!
//! # Usage
//!
//! ```rust
//! use hmath::{Mat4, Vec4, rotate_z, scale, translate};
//!
//! let model = scale(translate(Mat4::IDENTITY, 0.0, 1.0, 0.0), 2.0);
//! assert_eq!(model * Vec4::new(1.0, 0.0, 0.0, 1.0), Vec4::new(2.0, 1.0, 0.0, 1.0));
//!
//! let spun = rotate_z(Mat4::IDENTITY, std::f32::consts::FRAC_PI_2);
//! let v = spun * Vec4::X;
//! assert!((v.y - 1.0).abs() < 1e-6);
//! ```

use std::f32::consts::PI;

use hmath_core::{Error, Result};

use crate::{Mat4, Vec3, Vec4, cross, dot, mat4_mul, normalize};

/// Composes a rotation about the X axis, `a * Rx(angle)`.
///
/// Positive angles turn +Y toward +Z.
#[inline]
pub fn rotate_x(a: Mat4, angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let r = Mat4::from_cols(
        Vec4::X,
        Vec4::new(0.0, c, s, 0.0),
        Vec4::new(0.0, -s, c, 0.0),
        Vec4::W,
    );
    mat4_mul(a, r)
}

/// Composes a rotation about the Y axis, `a * Ry(angle)`.
///
/// Positive angles turn +X toward +Z. This is the opposite sense to
/// [`rotate_x`] and [`rotate_z`] (and to `glam::Mat4::from_rotation_y`):
/// `rotate_y(m, a)` equals glam's rotation by `-a`.
#[inline]
pub fn rotate_y(a: Mat4, angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let r = Mat4::from_cols(
        Vec4::new(c, 0.0, s, 0.0),
        Vec4::Y,
        Vec4::new(-s, 0.0, c, 0.0),
        Vec4::W,
    );
    mat4_mul(a, r)
}

/// Composes a rotation about the Z axis, `a * Rz(angle)`.
///
/// Positive angles turn +X toward +Y.
#[inline]
pub fn rotate_z(a: Mat4, angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let r = Mat4::from_cols(
        Vec4::new(c, s, 0.0, 0.0),
        Vec4::new(-s, c, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    );
    mat4_mul(a, r)
}

/// Composes a translation, `a * T(x, y, z)`.
#[inline]
pub fn translate(a: Mat4, x: f32, y: f32, z: f32) -> Mat4 {
    let mut t = Mat4::IDENTITY;
    t[12] = x;
    t[13] = y;
    t[14] = z;
    mat4_mul(a, t)
}

/// Scales the three diagonal lanes of `a` by `k`.
///
/// Only flat lanes 0, 5 and 10 change; translation and perspective terms
/// are left alone. `a` is taken by value, the caller's matrix is untouched.
///
/// ```rust
/// use hmath::{Mat4, scale, translate};
///
/// let m = translate(Mat4::IDENTITY, 1.0, 2.0, 3.0);
/// let s = scale(m, 3.0);
/// assert_eq!(s[0], 3.0);
/// assert_eq!(s[12], 1.0);
/// assert_eq!(m[0], 1.0);
/// ```
#[inline]
pub fn scale(a: Mat4, k: f32) -> Mat4 {
    let mut s = a;
    s[0] *= k;
    s[5] *= k;
    s[10] *= k;
    s
}

/// Orthonormal camera frame derived by [`look_at`].
///
/// All three vectors are directions (lane 3 is 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtBasis {
    /// Right vector, `s`
    pub side: Vec4,
    /// Re-orthogonalized up vector, `t`
    pub up: Vec4,
    /// Unit direction from eye to center
    pub view_dir: Vec4,
}

/// Computes the camera frame for an eye looking at `center`.
///
/// `up` only needs to be non-parallel to the view direction; the returned
/// `up` is rebuilt to be orthogonal to both other vectors. Coincident
/// `eye`/`center`, or `up` parallel to the view direction, produce NaN.
pub fn look_at_basis(eye: Vec3, center: Vec3, up: Vec3) -> LookAtBasis {
    let view_dir = normalize((center - eye).extend(0.0));
    let side = normalize(cross(view_dir, up.extend(0.0)));
    let up = cross(side, view_dir);
    LookAtBasis { side, up, view_dir }
}

/// Builds a right-handed view matrix.
///
/// The camera sits at `eye`, looks toward `center` down its local -Z axis,
/// with +Y roughly along `up`.
///
/// # Example
///
/// ```rust
/// use hmath::{Vec3, Vec4, look_at};
///
/// let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
/// // The eye lands on the view-space origin.
/// assert_eq!(view * Vec4::new(0.0, 0.0, 5.0, 1.0), Vec4::W);
/// ```
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let LookAtBasis {
        side: s,
        up: t,
        view_dir: v,
    } = look_at_basis(eye, center, up);
    let eye = eye.extend(0.0);

    Mat4::from_cols(
        Vec4::new(s.x, t.x, -v.x, 0.0),
        Vec4::new(s.y, t.y, -v.y, 0.0),
        Vec4::new(s.z, t.z, -v.z, 0.0),
        Vec4::new(-dot(s, eye), -dot(t, eye), dot(v, eye), 1.0),
    )
}

/// Builds a right-handed perspective projection.
///
/// `fov` is the vertical field of view in radians, `aspect` is
/// width / height. Maps view-space depth `-near..-far` to clip-space
/// `-1..1`.
///
/// `fov == 0` or `far == near` produce non-finite terms; see
/// [`try_perspective`] for a checked version.
#[inline]
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let a = 1.0 / (fov / 2.0).tan();
    Mat4::from_cols(
        Vec4::new(a / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, a, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -((far + near) / (far - near)), -1.0),
        Vec4::new(0.0, 0.0, -((2.0 * far * near) / (far - near)), 0.0),
    )
}

/// [`perspective`] with parameter validation.
///
/// Rejects non-finite parameters, `fov` outside `(0, π)`, non-positive
/// `aspect`, and `near == far`.
///
/// ```rust
/// use hmath::try_perspective;
///
/// assert!(try_perspective(1.0, 1.5, 0.1, 100.0).is_ok());
/// assert!(try_perspective(1.0, 1.5, 5.0, 5.0).is_err());
/// ```
pub fn try_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4> {
    if ![fov, aspect, near, far].iter().all(|v| v.is_finite()) {
        return Err(Error::invalid_projection("parameters must be finite"));
    }
    if fov <= 0.0 || fov >= PI {
        return Err(Error::invalid_projection(format!(
            "field of view {fov} outside (0, pi)"
        )));
    }
    if aspect <= 0.0 {
        return Err(Error::invalid_projection(format!(
            "aspect ratio {aspect} must be positive"
        )));
    }
    if near == far {
        return Err(Error::invalid_projection(format!(
            "near and far planes coincide at {near}"
        )));
    }
    Ok(perspective(fov, aspect, near, far))
}
