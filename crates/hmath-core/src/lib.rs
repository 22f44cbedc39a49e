//! # hmath-core
//!
//! Core types shared by the hmath crates.
//!
//! - [`Error`], [`Result`] - Errors for the checked (`try_*`) layer
//!
//! ## Crate Structure
//!
//! ```text
//! hmath-core (this crate)
//!    ^
//!    |
//!    +-- hmath (vectors, mat4, transforms, inversion)
//!          ^
//!          +-- hmath-cli (inspection tool)
//!          +-- hmath-bench (criterion benchmarks)
//! ```
//!
//! The numeric kernel in `hmath` never returns errors; special values
//! (Inf/NaN) propagate instead. [`Error`] is only produced by the checked
//! wrappers and by conversions from untrusted data such as slices.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;
