//! Factory functions for [`Result`]
//!
//! Free functions so call sites read `results::success(v)` or, with a glob
//! import, just `success(v)`.

use core::result::Result as StdResult;

use crate::Result;

/// Create a successful result holding `value`
///
/// Any value is accepted, including `()` or an `Option`.
#[inline]
pub const fn success<S, F>(value: S) -> Result<S, F> {
    Result::Success(value)
}

/// Create a failed result holding `value`
#[inline]
pub const fn failure<S, F>(value: F) -> Result<S, F> {
    Result::Failure(value)
}

/// Create a success from a possibly absent value
///
/// An absent value (`None`) produces a failure built by `failure_supplier`,
/// which is not called when the value is present.
///
/// # Examples
///
/// ```
/// use fluent_result::Result;
/// use fluent_result::results::{failure, of_nullable, success};
///
/// let present: Result<&str, &str> = of_nullable(Some("SUCCESS"), || "FAILURE");
/// let absent: Result<u32, &str> = of_nullable(None, || "FAILURE");
///
/// assert_eq!(present, success("SUCCESS"));
/// assert_eq!(absent, failure("FAILURE"));
/// ```
pub fn of_nullable<S, F>(value: Option<S>, failure_supplier: impl FnOnce() -> F) -> Result<S, F> {
    of_optional(value, failure_supplier)
}

/// Create a success from a present option, or a failure from an empty one
///
/// `failure_supplier` is only called for `None`.
pub fn of_optional<S, F>(
    optional: Option<S>,
    failure_supplier: impl FnOnce() -> F,
) -> Result<S, F> {
    match optional {
        Some(value) => Result::Success(value),
        None => Result::Failure(failure_supplier()),
    }
}

/// Convert a standard library result
#[inline]
pub fn from_std<S, F>(result: StdResult<S, F>) -> Result<S, F> {
    result.into()
}

/// Run a fallible computation and capture its outcome
///
/// Panics raised by `callable` are not caught.
pub fn of_fallible<S, F>(callable: impl FnOnce() -> StdResult<S, F>) -> Result<S, F> {
    from_std(callable())
}

/// Defer a computation until its result is first needed
#[cfg(feature = "lazy")]
pub fn lazy<'a, S: 'a, F: 'a>(
    supplier: impl FnOnce() -> Result<S, F> + 'a,
) -> crate::LazyResult<'a, S, F> {
    crate::LazyResult::new(supplier)
}
