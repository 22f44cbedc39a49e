//! Scalar and vector reductions over [`Vec4`].
//!
//! These functions are total: NaN and Inf propagate per IEEE-754 and
//! nothing is checked. [`try_normalize`] is the checked variant for callers
//! that cannot rule out a zero vector.

use hmath_core::{Error, Result};

use crate::Vec4;

/// Dot product over all four lanes.
///
/// Lanes are multiplied in SIMD, then summed in lane order.
///
/// # Example
///
/// ```rust
/// use hmath::{Vec4, dot};
///
/// let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(dot(a, Vec4::ONE), 10.0);
/// ```
#[inline]
pub fn dot(a: Vec4, b: Vec4) -> f32 {
    let r = a * b;
    r.x + r.y + r.z + r.w
}

/// Cross product of lanes 0-2.
///
/// Lane 3 of the result is always 0, so the result is a direction in
/// homogeneous space whatever the inputs carry in lane 3.
///
/// ```rust
/// use hmath::{Vec4, cross};
///
/// let x = Vec4::new(1.0, 0.0, 0.0, 1.0);
/// let y = Vec4::new(0.0, 1.0, 0.0, 1.0);
/// assert_eq!(cross(x, y), Vec4::Z);
/// ```
#[inline]
pub fn cross(a: Vec4, b: Vec4) -> Vec4 {
    Vec4::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
        0.0,
    )
}

/// Euclidean length, `sqrt(dot(a, a))`.
#[inline]
pub fn length(a: Vec4) -> f32 {
    dot(a, a).sqrt()
}

/// Scales `a` to unit length.
///
/// The caller must pass a non-zero vector: a zero vector divides by zero
/// and yields NaN lanes.
#[inline]
pub fn normalize(a: Vec4) -> Vec4 {
    a / length(a)
}

/// Scales `a` to unit length, failing on zero or non-finite length.
///
/// ```rust
/// use hmath::{Vec4, try_normalize};
///
/// assert!(try_normalize(Vec4::ZERO).is_err());
/// assert_eq!(try_normalize(Vec4::new(0.0, 3.0, 0.0, 0.0)).unwrap(), Vec4::Y);
/// ```
pub fn try_normalize(a: Vec4) -> Result<Vec4> {
    let len = length(a);
    if len == 0.0 || !len.is_finite() {
        return Err(Error::zero_length(len));
    }
    Ok(a / len)
}
