//! 4x4 homogeneous transform matrix.
//!
//! [`Mat4`] is the type a renderer hands to its shaders: model, view and
//! projection transforms.
//!
//! # Convention
//!
//! Matrices are stored **column-major** and use **column vectors**. The
//! backing storage is a single flat `[f32; 16]`:
//!
//! ```text
//! flat index      column view
//!
//! | 0  4  8 12 |   x = [ 0  1  2  3]
//! | 1  5  9 13 |   y = [ 4  5  6  7]
//! | 2  6 10 14 |   z = [ 8  9 10 11]
//! | 3  7 11 15 |   w = [12 13 14 15]   (translation, a.k.a. t)
//! ```
//!
//! The column accessors are views over that same storage, so a write through
//! one view is always visible through the other.
//!
//! # Usage
//!
//! ```rust
//! use hmath::{Mat4, Vec4};
//!
//! let mut m = Mat4::IDENTITY;
//! m.columns_mut()[3] = [1.0, 2.0, 3.0, 1.0];
//! assert_eq!(m[12], 1.0);
//! assert_eq!(m * Vec4::W, Vec4::new(1.0, 2.0, 3.0, 1.0));
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use hmath_core::Error;
use wide::f32x4;

use crate::{Vec4, Vec16, Vec16i, shuffle16};

/// Lane permutation that transposes a column-major flat matrix.
pub const TRANSPOSE_MASK: Vec16i = Vec16i([0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15]);

/// A column-major 4x4 matrix.
///
/// 64 bytes, 16-byte aligned, no padding. [`Mat4::as_bytes`] is the exact
/// layout a graphics API expects for a `mat4` uniform.
///
/// # Example
///
/// ```rust
/// use hmath::{Mat4, Vec4};
///
/// let m = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);
/// assert_eq!(m, Mat4::IDENTITY);
/// assert_eq!(m.as_array()[15], 1.0);
/// ```
#[derive(Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);

    /// Creates a matrix from four columns.
    #[inline]
    pub const fn from_cols(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self {
            m: [
                x.x, x.y, x.z, x.w, //
                y.x, y.y, y.z, y.w, //
                z.x, z.y, z.z, z.w, //
                w.x, w.y, w.z, w.w,
            ],
        }
    }

    /// Creates a matrix from a flat column-major array.
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Returns the flat column-major array.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.m
    }

    /// Creates a matrix from its flat lane view.
    #[inline]
    pub const fn from_vec16(v: Vec16) -> Self {
        Self { m: v.0 }
    }

    /// Returns the flat lane view.
    #[inline]
    pub const fn as_vec16(&self) -> Vec16 {
        Vec16(self.m)
    }

    /// The flat column-major storage.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Mutable flat column-major storage.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 16] {
        &mut self.m
    }

    /// The raw bytes of the flat storage, for uniform upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// The four columns as arrays, borrowing the flat storage.
    #[inline]
    pub fn columns(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(&self.m)
    }

    /// Mutable column view over the flat storage.
    #[inline]
    pub fn columns_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(&mut self.m)
    }

    /// Returns column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.columns()[i])
    }

    /// Replaces column `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[inline]
    pub fn set_col(&mut self, i: usize, v: Vec4) {
        self.columns_mut()[i] = v.to_array();
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[i], self.m[4 + i], self.m[8 + i], self.m[12 + i])
    }

    /// Column 0.
    #[inline]
    pub fn x(&self) -> Vec4 {
        self.col(0)
    }

    /// Column 1.
    #[inline]
    pub fn y(&self) -> Vec4 {
        self.col(1)
    }

    /// Column 2.
    #[inline]
    pub fn z(&self) -> Vec4 {
        self.col(2)
    }

    /// Column 3.
    #[inline]
    pub fn w(&self) -> Vec4 {
        self.col(3)
    }

    /// Column 3, named for its role as the translation of an affine transform.
    #[inline]
    pub fn t(&self) -> Vec4 {
        self.col(3)
    }

    /// Returns the transpose, see [`transpose`].
    #[inline]
    pub fn transpose(&self) -> Self {
        transpose(*self)
    }

    /// Returns the inverse, see [`inverse`](crate::inverse).
    #[inline]
    pub fn inverse(&self) -> Self {
        crate::inverse(*self)
    }

    /// Returns the determinant, see [`determinant`](crate::determinant).
    #[inline]
    pub fn determinant(&self) -> f32 {
        crate::determinant(*self)
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Converts to glam Mat4. Both are column-major, no transpose happens.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }

    #[inline]
    pub(crate) fn simd_cols(&self) -> [f32x4; 4] {
        let c = self.columns();
        [
            f32x4::from(c[0]),
            f32x4::from(c[1]),
            f32x4::from(c[2]),
            f32x4::from(c[3]),
        ]
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mat4")
            .field("x", &self.columns()[0])
            .field("y", &self.columns()[1])
            .field("z", &self.columns()[2])
            .field("w", &self.columns()[3])
            .finish()
    }
}

/// Multiplies a matrix by a column vector.
///
/// `a.x*b[0] + a.y*b[1] + a.z*b[2] + a.w*b[3]`: each column scaled by the
/// matching lane of `b` and accumulated, no row iteration.
///
/// # Example
///
/// ```rust
/// use hmath::{Mat4, Vec4, mat4_mul_vec4, translate};
///
/// let t = translate(Mat4::IDENTITY, 1.0, 2.0, 3.0);
/// let p = mat4_mul_vec4(t, Vec4::W);
/// assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
/// ```
#[inline]
pub fn mat4_mul_vec4(a: Mat4, b: Vec4) -> Vec4 {
    let [x, y, z, w] = a.simd_cols();
    Vec4::from_simd(
        x * f32x4::splat(b.x) + y * f32x4::splat(b.y) + z * f32x4::splat(b.z) + w * f32x4::splat(b.w),
    )
}

/// Multiplies two matrices.
///
/// Column `i` of the result is `a * b.col(i)`. When used as transforms,
/// `b` is applied to a point first.
#[inline]
pub fn mat4_mul(a: Mat4, b: Mat4) -> Mat4 {
    Mat4::from_cols(
        mat4_mul_vec4(a, b.x()),
        mat4_mul_vec4(a, b.y()),
        mat4_mul_vec4(a, b.z()),
        mat4_mul_vec4(a, b.w()),
    )
}

/// Transposes a matrix with one fixed 16-lane permutation.
///
/// ```rust
/// use hmath::{Mat4, transpose};
///
/// let m = Mat4::from_cols_array(std::array::from_fn(|i| i as f32));
/// let t = transpose(m);
/// assert_eq!(t.as_array()[1], 4.0);
/// assert_eq!(transpose(t), m);
/// ```
#[inline]
pub fn transpose(a: Mat4) -> Mat4 {
    Mat4::from_vec16(shuffle16(a.as_vec16(), TRANSPOSE_MASK))
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        mat4_mul_vec4(self, rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        mat4_mul(self, rhs)
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols_array(self.m.map(|v| v * rhs))
    }
}

/// Flat lane access, column-major.
impl Index<usize> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self::from_cols_array(m)
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> [f32; 16] {
        m.to_cols_array()
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self, Error> {
        let m: [f32; 16] = s.try_into().map_err(|_| Error::lane_count(16, s.len()))?;
        Ok(Self::from_cols_array(m))
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Mat4 {
        Mat4::from_cols_array([
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ])
    }

    #[test]
    fn test_mat4_layout() {
        assert_eq!(std::mem::size_of::<Mat4>(), 64);
        assert_eq!(std::mem::align_of::<Mat4>(), 16);
        let m = sample();
        let bytes = m.as_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[48..52], &13.0f32.to_ne_bytes());
    }

    #[test]
    fn test_column_view_tracks_flat_storage() {
        let mut m = sample();
        assert_eq!(m.x(), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.w(), m.t());

        m[13] = -1.0;
        assert_eq!(m.w().y, -1.0);
        assert_eq!(m.columns()[3][1], -1.0);

        m.set_col(1, Vec4::splat(0.5));
        assert_eq!(m.as_array()[4..8], [0.5; 4]);

        m.columns_mut()[2][3] = 42.0;
        assert_eq!(m[11], 42.0);
        assert_eq!(m.as_vec16()[11], 42.0);
    }

    #[test]
    fn test_row() {
        let m = sample();
        assert_eq!(m.row(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m.row(3), Vec4::new(4.0, 8.0, 12.0, 16.0));
    }

    #[test]
    fn test_mul_vec4() {
        let m = sample();
        // Column combination: x + 2y + 3z + 4w
        let v = m * Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v, Vec4::new(90.0, 100.0, 110.0, 120.0));
    }

    #[test]
    fn test_mul_identity() {
        let m = sample();
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn test_mul_not_commutative() {
        let a = sample();
        let b = transpose(sample());
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn test_mul_matches_glam() {
        let a = sample();
        let b = Mat4::from_cols_array(std::array::from_fn(|i| (i as f32 * 0.37).sin()));
        let ours = a * b;
        let theirs = Mat4::from_glam(a.to_glam() * b.to_glam());
        assert_abs_diff_eq!(ours, theirs, epsilon = 1e-4);
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t.x(), m.row(0));
        assert_eq!(t.row(2), m.z());
        assert_eq!(t.transpose(), m);
        assert_eq!(Mat4::IDENTITY.transpose(), Mat4::IDENTITY);
    }

    #[test]
    fn test_scalar_mul() {
        let m = Mat4::IDENTITY * 2.0;
        assert_eq!(m[0], 2.0);
        assert_eq!(m[1], 0.0);
        assert_eq!(m[15], 2.0);
    }

    #[test]
    fn test_try_from_slice() {
        let flat = sample().to_cols_array();
        assert_eq!(Mat4::try_from(&flat[..]).unwrap(), sample());
        assert_eq!(
            Mat4::try_from(&flat[..12]).unwrap_err(),
            Error::lane_count(16, 12)
        );
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_debug_shows_columns() {
        let s = format!("{:?}", Mat4::IDENTITY);
        assert!(s.contains("w: [0.0, 0.0, 0.0, 1.0]"));
    }
}
