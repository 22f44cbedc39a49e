//! Packed float vector types.
//!
//! [`Vec4`] is the workhorse: a 16-byte aligned group of four `f32` lanes
//! whose arithmetic is evaluated through [`wide::f32x4`]. [`Vec2`] and
//! [`Vec3`] are plain storage types for attributes and camera inputs, and
//! [`Vec16`] is the flat lane view of a [`Mat4`](crate::Mat4).
//!
//! All arithmetic is lanewise and returns a new value.
//!
//! # Usage
//!
//! ```rust
//! use hmath::{Vec3, Vec4};
//!
//! let p = Vec3::new(1.0, 2.0, 3.0).extend(1.0);
//! let d = Vec4::new(0.5, 0.5, 0.5, 0.0);
//! assert_eq!(p + d, Vec4::new(1.5, 2.5, 3.5, 1.0));
//! assert_eq!(p[3], 1.0);
//! ```

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use hmath_core::Error;
use wide::f32x4;

/// A 2D vector of `f32` lanes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    /// Lane 0
    pub x: f32,
    /// Lane 1
    pub y: f32,
}

/// A 3D vector of `f32` lanes.
///
/// Used for points and directions passed to the camera builders. Promote
/// it with [`Vec3::extend`] before mixing with [`Vec4`] arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// Lane 0
    pub x: f32,
    /// Lane 1
    pub y: f32,
    /// Lane 2
    pub z: f32,
}

/// A 4D vector of `f32` lanes, 16-byte aligned.
///
/// In homogeneous coordinates `w = 1` marks a point and `w = 0` a direction.
///
/// # Example
///
/// ```rust
/// use hmath::Vec4;
///
/// let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(v * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
/// assert_eq!(std::mem::align_of::<Vec4>(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec4 {
    /// Lane 0
    pub x: f32,
    /// Lane 1
    pub y: f32,
    /// Lane 2
    pub z: f32,
    /// Lane 3
    pub w: f32,
}

/// Sixteen `f32` lanes.
///
/// The flat view of a [`Mat4`](crate::Mat4), in column-major order.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec16(pub [f32; 16]);

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// One vector.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both lanes set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Converts to glam Vec2.
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Creates from glam Vec2.
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// One vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z vector.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all lanes set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Appends a fourth lane.
    ///
    /// `extend(1.0)` gives a homogeneous point, `extend(0.0)` a direction.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Vec4 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// One vector.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Unit X vector.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Unit Y vector.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Unit Z vector.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Unit W vector, the homogeneous origin.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all lanes set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops lane 3.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Loads the lanes into a SIMD register.
    #[inline]
    pub fn to_simd(self) -> f32x4 {
        f32x4::from(self.to_array())
    }

    /// Stores SIMD lanes back into a vector.
    #[inline]
    pub fn from_simd(v: f32x4) -> Self {
        Self::from_array(v.to_array())
    }

    /// Dot product, see [`dot`](crate::dot).
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        crate::dot(self, other)
    }

    /// Cross product of lanes 0-2, see [`cross`](crate::cross).
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        crate::cross(self, other)
    }

    /// Euclidean length over all four lanes.
    #[inline]
    pub fn length(self) -> f32 {
        crate::length(self)
    }

    /// Scales to unit length. Non-finite for a zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        crate::normalize(self)
    }

    /// Returns true if all lanes are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Returns true if any lane is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Converts to glam Vec4.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Vec4.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl Vec16 {
    /// All lanes zero.
    pub const ZERO: Self = Self([0.0; 16]);

    /// Creates a vector with all lanes set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self([v; 16])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 16] {
        self.0
    }
}

impl Default for Vec16 {
    fn default() -> Self {
        Self::ZERO
    }
}

// Indexing

impl Index<usize> for Vec2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of bounds: {}", i),
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl Index<usize> for Vec16 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec16 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.0[i]
    }
}

// Vec2 arithmetic

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Vec3 arithmetic

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vec4 arithmetic, evaluated in SIMD lanes

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_simd(self.to_simd() + rhs.to_simd())
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_simd(self.to_simd() - rhs.to_simd())
    }
}

impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_simd(self.to_simd() * rhs.to_simd())
    }
}

impl Div for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_simd(self.to_simd() / rhs.to_simd())
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_simd(self.to_simd() * f32x4::splat(rhs))
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::from_simd(self.to_simd() / f32x4::splat(rhs))
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

// Vec16 arithmetic

impl Add for Vec16 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for Vec16 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Mul for Vec16 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] * rhs.0[i]))
    }
}

impl Div for Vec16 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] / rhs.0[i]))
    }
}

impl Mul<f32> for Vec16 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0.map(|v| v * rhs))
    }
}

// Conversions

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<[f32; 16]> for Vec16 {
    #[inline]
    fn from(a: [f32; 16]) -> Self {
        Self(a)
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self, Error> {
        match *s {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(Error::lane_count(3, s.len())),
        }
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = Error;

    fn try_from(s: &[f32]) -> Result<Self, Error> {
        match *s {
            [x, y, z, w] => Ok(Self::new(x, y, z, w)),
            _ => Err(Error::lane_count(4, s.len())),
        }
    }
}

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}

impl From<glam::Vec4> for Vec4 {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec4> for glam::Vec4 {
    #[inline]
    fn from(v: Vec4) -> glam::Vec4 {
        v.to_glam()
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Vec4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_layout() {
        assert_eq!(std::mem::size_of::<Vec4>(), 16);
        assert_eq!(std::mem::align_of::<Vec4>(), 16);
        assert_eq!(std::mem::size_of::<Vec16>(), 64);
        assert_eq!(std::mem::size_of::<Vec3>(), 12);
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(4.0, 3.0, 2.0, 1.0);

        assert_eq!(a + b, Vec4::splat(5.0));
        assert_eq!(a - b, Vec4::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a * b, Vec4::new(4.0, 6.0, 6.0, 4.0));
        assert_eq!(a / Vec4::splat(2.0), Vec4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_vec4_div_by_zero_is_infinite() {
        let v = Vec4::new(1.0, -1.0, 0.0, 2.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert!(!v.is_finite());
    }

    #[test]
    fn test_vec4_index() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
        v[2] = 9.0;
        assert_eq!(v.z, 9.0);
    }

    #[test]
    #[should_panic]
    fn test_vec4_index_out_of_bounds() {
        let v = Vec4::ZERO;
        let _ = v[4];
    }

    #[test]
    fn test_vec3_extend_truncate() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let p = v.extend(1.0);
        assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(p.truncate(), v);
    }

    #[test]
    fn test_vec2_vec3_ops() {
        assert_eq!(Vec2::new(1.0, 2.0) + Vec2::ONE, Vec2::new(2.0, 3.0));
        assert_eq!(Vec2::new(4.0, 2.0) / 2.0, Vec2::new(2.0, 1.0));
        assert_eq!(Vec3::new(1.0, 2.0, 3.0) * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec3::ONE - Vec3::X, Vec3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_vec16_ops() {
        let a = Vec16(std::array::from_fn(|i| i as f32));
        let b = a + Vec16::splat(1.0);
        assert_eq!(b[0], 1.0);
        assert_eq!(b[15], 16.0);
        assert_eq!((b - a), Vec16::splat(1.0));
        assert_eq!((a * 2.0)[7], 14.0);
    }

    #[test]
    fn test_try_from_slice() {
        let lanes: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
        let v = Vec4::try_from(&lanes[..]).unwrap();
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));

        let err = Vec4::try_from(&lanes[..2]).unwrap_err();
        assert_eq!(err, Error::lane_count(4, 2));

        assert!(Vec3::try_from(&lanes[1..]).is_ok());
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let g: glam::Vec4 = v.into();
        assert_eq!(Vec4::from(g), v);
    }
}
