//! Fluent Result - Success/Failure Values with Combinators
//!
//! This crate provides [`Result`], an immutable value that is either a
//! [`Success`](Result::Success) carrying a success value or a
//! [`Failure`](Result::Failure) carrying a failure value, together with a
//! fluent set of combinators.
//!
//! Every combinator is a stateless dispatch on the current variant and never
//! invokes a callback that belongs to the other variant. Combinators that
//! are identity no-ops move the receiver through untouched instead of
//! rebuilding it.
//!
//! ## Architecture
//!
//! - **[`result`]**: the two-variant type, its combinators and iterators
//! - **[`results`]**: factory functions (`success`, `failure`, `of_nullable`, ...)
//! - **[`lazy`]**: results computed on first access
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `lazy` (default): Deferred results backed by `once_cell`
//! - `serde`: Serialization support
//!
//! ## Example
//!
//! ```
//! use fluent_result::results;
//!
//! let parsed = results::of_optional("42".parse::<u32>().ok(), || "not a number");
//! let doubled = parsed
//!     .filter(|n| *n < 100, |_| "too large")
//!     .map(|n| n * 2);
//!
//! assert_eq!(doubled.or_else(0), 84);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

#[cfg(feature = "lazy")]
pub mod lazy;
pub mod result;
pub mod results;

#[cfg(feature = "lazy")]
pub use lazy::LazyResult;
pub use result::{IntoIter, Iter, Result};

/// Result type for variant-demanding conversions
pub type VariantResult<T> = core::result::Result<T, VariantError>;

/// Errors raised when a caller demands one variant and gets the other
///
/// The payload of the unexpected variant is carried as its debug rendering,
/// so the error stays independent of the result's type parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum VariantError {
    /// A success was required but the result was a failure
    #[error("Expected success, found failure: {0}")]
    UnexpectedFailure(String),

    /// A failure was required but the result was a success
    #[error("Expected failure, found success: {0}")]
    UnexpectedSuccess(String),
}

impl VariantError {
    /// Create an unexpected failure error from the failure payload
    pub fn unexpected_failure(failure: &impl core::fmt::Debug) -> Self {
        Self::UnexpectedFailure(format!("{failure:?}"))
    }

    /// Create an unexpected success error from the success payload
    pub fn unexpected_success(success: &impl core::fmt::Debug) -> Self {
        Self::UnexpectedSuccess(format!("{success:?}"))
    }
}
