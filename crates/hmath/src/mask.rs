//! Integer lane vectors and lane shuffles.
//!
//! [`Vec4i`] and [`Vec16i`] hold `i32` lanes. Their main job is to describe
//! a fixed permutation for [`shuffle`] and [`shuffle16`], which rearrange
//! float lanes without branching.
//!
//! # Two-source shuffle
//!
//! [`shuffle`] treats its two inputs as one 8-lane sequence:
//!
//! ```text
//! index:  0  1  2  3  4  5  6  7
//! lane:  a0 a1 a2 a3 b0 b1 b2 b3
//! ```
//!
//! Mask lane `i` selects which of those eight lanes lands in output lane
//! `i`. Mask values are taken modulo the source width, so every mask is
//! valid and no shuffle can panic.
//!
//! ```rust
//! use hmath::{Vec4, Vec4i, shuffle};
//!
//! let a = Vec4::new(0.0, 1.0, 2.0, 3.0);
//! let b = Vec4::new(4.0, 5.0, 6.0, 7.0);
//! let interleaved = shuffle(a, b, Vec4i::new(0, 4, 1, 5));
//! assert_eq!(interleaved, Vec4::new(0.0, 4.0, 1.0, 5.0));
//! ```
//!
//! Integer division is total in the same way: a zero divisor yields 0 in
//! that lane and `i32::MIN / -1` wraps.

use std::ops::{Add, Div, Index, Mul, Sub};

use bytemuck::{Pod, Zeroable};
use wide::i32x4;

use crate::{Vec4, Vec16};

/// Four `i32` lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec4i(pub [i32; 4]);

/// Sixteen `i32` lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C, align(16))]
pub struct Vec16i(pub [i32; 16]);

impl Vec4i {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self([x, y, z, w])
    }

    /// Creates a vector with all lanes set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self([v; 4])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        self.0
    }

    #[inline]
    fn to_simd(self) -> i32x4 {
        i32x4::from(self.0)
    }

    #[inline]
    fn from_simd(v: i32x4) -> Self {
        Self(v.to_array())
    }
}

impl Vec16i {
    /// Identity permutation.
    pub const IDENTITY: Self = Self([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);

    /// Creates a vector with all lanes set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self([v; 16])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [i32; 16] {
        self.0
    }
}

impl Default for Vec16i {
    fn default() -> Self {
        Self::splat(0)
    }
}

impl Index<usize> for Vec4i {
    type Output = i32;

    #[inline]
    fn index(&self, i: usize) -> &i32 {
        &self.0[i]
    }
}

impl Index<usize> for Vec16i {
    type Output = i32;

    #[inline]
    fn index(&self, i: usize) -> &i32 {
        &self.0[i]
    }
}

impl Add for Vec4i {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_simd(self.to_simd() + rhs.to_simd())
    }
}

impl Sub for Vec4i {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_simd(self.to_simd() - rhs.to_simd())
    }
}

impl Mul for Vec4i {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_simd(self.to_simd() * rhs.to_simd())
    }
}

impl Add for Vec16i {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].wrapping_add(rhs.0[i])))
    }
}

impl Sub for Vec16i {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].wrapping_sub(rhs.0[i])))
    }
}

impl Mul for Vec16i {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i].wrapping_mul(rhs.0[i])))
    }
}

impl Div for Vec4i {
    type Output = Self;

    /// Lanewise division. A zero divisor gives 0; `i32::MIN / -1` wraps.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| lane_div(self.0[i], rhs.0[i])))
    }
}

impl Div for Vec16i {
    type Output = Self;

    /// Lanewise division. A zero divisor gives 0; `i32::MIN / -1` wraps.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| lane_div(self.0[i], rhs.0[i])))
    }
}

#[inline]
fn lane_div(a: i32, b: i32) -> i32 {
    if b == 0 { 0 } else { a.wrapping_div(b) }
}

impl From<[i32; 4]> for Vec4i {
    #[inline]
    fn from(a: [i32; 4]) -> Self {
        Self(a)
    }
}

impl From<[i32; 16]> for Vec16i {
    #[inline]
    fn from(a: [i32; 16]) -> Self {
        Self(a)
    }
}

/// Picks four lanes out of the concatenation `a ++ b`.
///
/// Mask lane `i` names the source lane for output lane `i`: 0-3 select from
/// `a`, 4-7 from `b`. Values are reduced modulo 8.
#[inline]
pub fn shuffle(a: Vec4, b: Vec4, mask: Vec4i) -> Vec4 {
    let lanes = [a.x, a.y, a.z, a.w, b.x, b.y, b.z, b.w];
    let [i0, i1, i2, i3] = mask.0.map(|i| (i & 7) as usize);
    Vec4::new(lanes[i0], lanes[i1], lanes[i2], lanes[i3])
}

/// Permutes the lanes of a single vector, `shuffle(v, v, mask)`.
#[inline]
pub fn swizzle(v: Vec4, mask: Vec4i) -> Vec4 {
    shuffle(v, v, mask)
}

/// Permutes sixteen lanes. Mask values are reduced modulo 16.
///
/// ```rust
/// use hmath::{Vec16, Vec16i, shuffle16};
///
/// let v = Vec16(std::array::from_fn(|i| i as f32));
/// assert_eq!(shuffle16(v, Vec16i::IDENTITY), v);
/// ```
#[inline]
pub fn shuffle16(v: Vec16, mask: Vec16i) -> Vec16 {
    Vec16(mask.0.map(|i| v.0[(i & 15) as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_two_sources() {
        let a = Vec4::new(0.0, 1.0, 2.0, 3.0);
        let b = Vec4::new(4.0, 5.0, 6.0, 7.0);

        assert_eq!(shuffle(a, b, Vec4i::new(2, 6, 3, 7)), Vec4::new(2.0, 6.0, 3.0, 7.0));
        assert_eq!(shuffle(a, b, Vec4i::new(7, 6, 5, 4)), Vec4::new(7.0, 6.0, 5.0, 4.0));
    }

    #[test]
    fn test_swizzle() {
        let v = Vec4::new(0.0, 1.0, 2.0, 3.0);
        // 4 and 5 wrap back onto v itself
        assert_eq!(swizzle(v, Vec4i::new(2, 3, 4, 5)), Vec4::new(2.0, 3.0, 0.0, 1.0));
        assert_eq!(swizzle(v, Vec4i::new(1, 0, 7, 6)), Vec4::new(1.0, 0.0, 3.0, 2.0));
    }

    #[test]
    fn test_shuffle_mask_wraps() {
        let a = Vec4::new(0.0, 1.0, 2.0, 3.0);
        let b = Vec4::new(4.0, 5.0, 6.0, 7.0);
        assert_eq!(shuffle(a, b, Vec4i::new(8, 9, -1, 15)), Vec4::new(0.0, 1.0, 7.0, 7.0));
    }

    #[test]
    fn test_shuffle16_reverse() {
        let v = Vec16(std::array::from_fn(|i| i as f32));
        let rev = Vec16i(std::array::from_fn(|i| 15 - i as i32));
        let r = shuffle16(v, rev);
        assert_eq!(r[0], 15.0);
        assert_eq!(r[15], 0.0);
        assert_eq!(shuffle16(r, rev), v);
    }

    #[test]
    fn test_int_lane_div() {
        let a = Vec4i::new(9, -7, 5, i32::MIN);
        let b = Vec4i::new(2, 2, 0, -1);
        assert_eq!(a / b, Vec4i::new(4, -3, 0, i32::MIN));

        let halved = Vec16i::IDENTITY / Vec16i::splat(2);
        assert_eq!(halved[15], 7);
        assert_eq!(Vec16i::IDENTITY / Vec16i::splat(0), Vec16i::splat(0));
    }

    #[test]
    fn test_int_lane_ops() {
        let a = Vec4i::new(1, 2, 3, 4);
        assert_eq!(a + Vec4i::splat(1), Vec4i::new(2, 3, 4, 5));
        assert_eq!(a - a, Vec4i::splat(0));
        assert_eq!(a * Vec4i::splat(4), Vec4i::new(4, 8, 12, 16));

        let m = Vec16i::IDENTITY * Vec16i::splat(2);
        assert_eq!(m[15], 30);
        assert_eq!((m - Vec16i::IDENTITY), Vec16i::IDENTITY);
        assert_eq!((Vec16i::IDENTITY + Vec16i::splat(1))[0], 1);
    }
}
