//! Branch-free 4x4 inversion by cofactor expansion.
//!
//! The adjugate is built with two-source shuffles and lane-wise products
//! only, with no pivoting and no data-dependent branches. The determinant
//! falls out of the same cofactors, so [`inverse`] and [`determinant`] share
//! one pass.
//!
//! Singular input is not detected: the final `1 / det` turns into Inf and
//! the result lanes become Inf or NaN. [`try_inverse`] reports
//! [`Error::Singular`] instead.

use hmath_core::{Error, Result};

use crate::{Mat4, Vec4, Vec4i, shuffle, swizzle};

const M0415: Vec4i = Vec4i::new(0, 4, 1, 5);
const M2637: Vec4i = Vec4i::new(2, 6, 3, 7);
const M2301: Vec4i = Vec4i::new(2, 3, 0, 1);
const M1076: Vec4i = Vec4i::new(1, 0, 7, 6);
const M2345: Vec4i = Vec4i::new(2, 3, 4, 5);

/// Unscaled adjugate columns plus the determinant splatted over four lanes.
struct Adjugate {
    cols: [Vec4; 4],
    det: Vec4,
}

fn adjugate(a: &Mat4) -> Adjugate {
    let (ax, ay, az, aw) = (a.x(), a.y(), a.z(), a.w());

    // Transpose into rows, with rows 1 and 3 half-rotated.
    let tmp1 = shuffle(ax, az, M0415);
    let row1 = shuffle(ay, aw, M0415);
    let row0 = shuffle(tmp1, row1, M0415);
    let row1 = shuffle(tmp1, row1, M2637);

    let tmp1 = shuffle(ax, az, M2637);
    let row3 = shuffle(ay, aw, M2637);
    let mut row2 = shuffle(tmp1, row3, M0415);
    let row3 = shuffle(tmp1, row3, M2637);

    let row1 = swizzle(row1, M2301);
    let row3 = swizzle(row3, M2301);

    let mut tmp1 = swizzle(row2 * row3, M1076);
    let mut col0 = row1 * tmp1;
    let mut col1 = row0 * tmp1;
    tmp1 = swizzle(tmp1, M2345);
    col0 = row1 * tmp1 - col0;
    col1 = row0 * tmp1 - col1;
    col1 = swizzle(col1, M2345);

    tmp1 = swizzle(row1 * row2, M1076);
    col0 = row3 * tmp1 + col0;
    let mut col3 = row0 * tmp1;
    tmp1 = swizzle(tmp1, M2345);
    col0 = col0 - row3 * tmp1;
    col3 = row0 * tmp1 - col3;
    col3 = swizzle(col3, M2345);

    tmp1 = swizzle(swizzle(row1, M2345) * row3, M1076);
    row2 = swizzle(row2, M2345);
    col0 = row2 * tmp1 + col0;
    let mut col2 = row0 * tmp1;
    tmp1 = swizzle(tmp1, M2345);
    col0 = col0 - row2 * tmp1;
    col2 = row0 * tmp1 - col2;
    col2 = swizzle(col2, M2345);

    tmp1 = swizzle(row0 * row1, M1076);
    col2 = row3 * tmp1 + col2;
    col3 = row2 * tmp1 - col3;
    tmp1 = swizzle(tmp1, M2345);
    col2 = row3 * tmp1 - col2;
    col3 = col3 - row2 * tmp1;

    tmp1 = swizzle(row0 * row3, M1076);
    col1 = col1 - row2 * tmp1;
    col2 = row1 * tmp1 + col2;
    tmp1 = swizzle(tmp1, M2345);
    col1 = row2 * tmp1 + col1;
    col2 = col2 - row1 * tmp1;

    tmp1 = swizzle(row0 * row2, M1076);
    col1 = row3 * tmp1 + col1;
    col3 = col3 - row1 * tmp1;
    tmp1 = swizzle(tmp1, M2345);
    col1 = col1 - row3 * tmp1;
    col3 = row1 * tmp1 + col3;

    // Horizontal sum of row0 * col0 into every lane.
    let mut det = row0 * col0;
    det = swizzle(det, M2345) + det;
    det = swizzle(det, M1076) + det;

    Adjugate {
        cols: [col0, col1, col2, col3],
        det,
    }
}

/// Inverts a 4x4 matrix.
///
/// Computes `adj(a) / det(a)` without branching. For a singular matrix the
/// result contains Inf or NaN; check with [`Mat4::is_finite`] or use
/// [`try_inverse`].
///
/// # Example
///
/// ```rust
/// use hmath::{Mat4, Vec4, inverse, translate};
///
/// let m = translate(Mat4::IDENTITY, 1.0, 2.0, 3.0);
/// let back = inverse(m) * (m * Vec4::W);
/// assert!((back.x).abs() < 1e-6 && (back.w - 1.0).abs() < 1e-6);
/// ```
pub fn inverse(a: Mat4) -> Mat4 {
    let Adjugate { cols, det } = adjugate(&a);
    let inv_det = Vec4::splat(1.0) / det;
    Mat4::from_cols(
        cols[0] * inv_det,
        cols[1] * inv_det,
        cols[2] * inv_det,
        cols[3] * inv_det,
    )
}

/// Determinant, from the same cofactors [`inverse`] uses.
#[inline]
pub fn determinant(a: Mat4) -> f32 {
    adjugate(&a).det.x
}

/// Inverts `a`, failing when the determinant is zero or non-finite.
///
/// ```rust
/// use hmath::{Mat4, try_inverse};
///
/// assert!(try_inverse(Mat4::ZERO).is_err());
/// assert_eq!(try_inverse(Mat4::IDENTITY).unwrap(), Mat4::IDENTITY);
/// ```
pub fn try_inverse(a: Mat4) -> Result<Mat4> {
    let Adjugate { cols, det } = adjugate(&a);
    if det.x == 0.0 || !det.x.is_finite() {
        return Err(Error::singular(det.x));
    }
    let inv_det = Vec4::splat(1.0 / det.x);
    Ok(Mat4::from_cols(
        cols[0] * inv_det,
        cols[1] * inv_det,
        cols[2] * inv_det,
        cols[3] * inv_det,
    ))
}
