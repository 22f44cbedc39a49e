//! Error types for the checked hmath operations.
//!
//! The kernel itself is total over IEEE-754: a singular matrix inverts to
//! Inf/NaN lanes, a zero vector normalizes to NaN. Callers that want to fail
//! fast use the `try_*` functions, which return these errors.
//!
//! # Usage
//!
//! ```rust
//! use hmath_core::{Error, Result};
//!
//! fn check_lanes(got: usize) -> Result<()> {
//!     if got != 16 {
//!         return Err(Error::lane_count(16, got));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_lanes(15).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the checked layer over the numeric kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Matrix has a zero or non-finite determinant.
    #[error("matrix is singular (determinant {determinant})")]
    Singular {
        /// Determinant computed for the matrix
        determinant: f32,
    },

    /// Vector has zero or non-finite length and cannot be normalized.
    #[error("cannot normalize vector of length {length}")]
    ZeroLength {
        /// Length computed for the vector
        length: f32,
    },

    /// Source data has the wrong number of lanes for the target type.
    #[error("lane count mismatch: expected {expected}, got {got}")]
    LaneCount {
        /// Lanes required by the target type
        expected: usize,
        /// Lanes supplied
        got: usize,
    },

    /// Projection parameters describe a degenerate frustum.
    #[error("invalid projection: {reason}")]
    InvalidProjection {
        /// Which parameter is out of range
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::Singular`] error.
    #[inline]
    pub fn singular(determinant: f32) -> Self {
        Self::Singular { determinant }
    }

    /// Creates an [`Error::ZeroLength`] error.
    #[inline]
    pub fn zero_length(length: f32) -> Self {
        Self::ZeroLength { length }
    }

    /// Creates an [`Error::LaneCount`] error.
    #[inline]
    pub fn lane_count(expected: usize, got: usize) -> Self {
        Self::LaneCount { expected, got }
    }

    /// Creates an [`Error::InvalidProjection`] error.
    #[inline]
    pub fn invalid_projection(reason: impl Into<String>) -> Self {
        Self::InvalidProjection {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error comes from a degenerate input value
    /// rather than malformed data.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::Singular { .. } | Self::ZeroLength { .. } | Self::InvalidProjection { .. }
        )
    }
}
