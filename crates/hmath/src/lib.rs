//! # hmath
//!
//! Fixed-size linear algebra for 3D graphics.
//!
//! This crate provides the small numeric kernel a renderer needs between its
//! scene graph and its uniform uploads:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`], [`Vec16`] - Packed float lanes
//! - [`Vec4i`], [`Vec16i`] - Integer lanes used as permutation masks
//! - [`Mat4`] - Column-major 4x4 homogeneous transform
//! - Camera and object transform builders ([`look_at`], [`perspective`],
//!   [`rotate_x`], [`translate`], ...)
//! - Branch-free adjugate [`inverse`]
//!
//! # Design
//!
//! Matrices are stored **column-major** and use **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Composition is right-to-left: in `a * b` the transform `b` is applied to a
//! point first. The builders follow the same rule, so
//! `translate(rotate_y(m, a), x, y, z)` translates in the rotated frame.
//!
//! The kernel functions are total over IEEE-754. A zero vector normalizes to
//! NaN, a singular matrix inverts to Inf/NaN, a degenerate frustum gives
//! non-finite projection terms. Callers who want an error instead use the
//! `try_*` variants, which return [`hmath_core::Result`].
//!
//! # Usage
//!
//! ```rust
//! use hmath::{Mat4, Vec3, Vec4, look_at, perspective, rotate_y, translate};
//!
//! let proj = perspective(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0);
//! let view = look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let model = translate(rotate_y(Mat4::IDENTITY, 0.5), 1.0, 0.0, 0.0);
//!
//! let mvp = proj * view * model;
//! let clip = mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert!(clip.is_finite());
//!
//! // Column-major bytes, ready for a uniform upload.
//! assert_eq!(mvp.as_bytes().len(), 64);
//! ```
//!
//! # Dependencies
//!
//! - [`wide`] - Portable `f32x4` lanes for [`Vec4`] arithmetic
//! - [`glam`] - Interop conversions
//! - [`bytemuck`] - `Pod` layout for zero-copy uploads
//! - [`approx`] - Tolerance comparisons
//! - `serde` (optional) - Serialization of all value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod arith;
mod inverse;
mod mask;
mod mat4;
mod transform;
mod vec;
pub mod simd;

pub use arith::*;
pub use inverse::*;
pub use mask::*;
pub use mat4::*;
pub use transform::*;
pub use vec::*;

pub use hmath_core::{Error, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
