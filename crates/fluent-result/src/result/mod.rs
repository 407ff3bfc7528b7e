//! The Success/Failure Result Type
//!
//! A closed two-variant enum with a fluent combinator API. Every combinator
//! dispatches on the current variant with an exhaustive `match`, so a
//! callback attached to the other variant is never evaluated.
//!
//! Combinators take `self` by value. When a combinator has nothing to do
//! (a passing `filter`, an `if_success` on a failure, ...) the receiver is
//! moved back out unchanged: no payload is cloned or rebuilt.

mod iter;

use core::fmt;
use core::result::Result as StdResult;

use crate::{VariantError, VariantResult};

pub use iter::{IntoIter, Iter};

/// Either a successful outcome carrying `S` or a failed outcome carrying `F`
///
/// Equality and hashing are structural over (variant, value). Two results of
/// different variants are never equal, even when their payloads are.
///
/// # Examples
///
/// ```
/// use fluent_result::Result;
///
/// let ok: Result<u32, &str> = Result::Success(2);
/// let err: Result<u32, &str> = Result::Failure("boom");
///
/// assert_eq!(ok.map(|n| n + 1), Result::Success(3));
/// assert_eq!(err.map(|n| n + 1), Result::Failure("boom"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Result` may be a `Failure` variant, which should be handled"]
pub enum Result<S, F> {
    /// Successful outcome
    Success(S),

    /// Failed outcome
    Failure(F),
}

impl<S, F> Result<S, F> {
    /// Create a successful result
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Create a failed result
    #[inline]
    pub const fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    /// Returns true if this is a success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if this is a failure
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns true if this is a success whose value satisfies `predicate`
    ///
    /// The predicate is not evaluated on a failure.
    pub fn has_success(&self, predicate: impl FnOnce(&S) -> bool) -> bool {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns true if this is a failure whose value satisfies `predicate`
    ///
    /// The predicate is not evaluated on a success.
    pub fn has_failure(&self, predicate: impl FnOnce(&F) -> bool) -> bool {
        match self {
            Self::Success(_) => false,
            Self::Failure(value) => predicate(value),
        }
    }

    /// Borrow the success value, if any
    #[inline]
    pub const fn get_success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure value, if any
    #[inline]
    pub const fn get_failure(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    /// Take the success value, discarding a failure
    #[inline]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Take the failure value, discarding a success
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(value) => Some(value),
        }
    }

    /// View this result through references
    #[inline]
    pub const fn as_ref(&self) -> Result<&S, &F> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Transform the success value
    ///
    /// A failure keeps its value and only changes its success type; the
    /// mapper is never called for it.
    pub fn map<S2>(self, success_mapper: impl FnOnce(S) -> S2) -> Result<S2, F> {
        match self {
            Self::Success(value) => Result::Success(success_mapper(value)),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Transform the failure value
    ///
    /// A success keeps its value; the mapper is never called for it.
    pub fn map_failure<F2>(self, failure_mapper: impl FnOnce(F) -> F2) -> Result<S, F2> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => Result::Failure(failure_mapper(value)),
        }
    }

    /// Transform whichever value is present, with the mapper for its variant
    pub fn map_both<S2, F2>(
        self,
        success_mapper: impl FnOnce(S) -> S2,
        failure_mapper: impl FnOnce(F) -> F2,
    ) -> Result<S2, F2> {
        match self {
            Self::Success(value) => Result::Success(success_mapper(value)),
            Self::Failure(value) => Result::Failure(failure_mapper(value)),
        }
    }

    /// Replace this result with the one produced by the mapper for its variant
    ///
    /// Exactly one mapper runs, and whatever it returns is handed back as is.
    pub fn flat_map<S2, F2>(
        self,
        success_mapper: impl FnOnce(S) -> Result<S2, F2>,
        failure_mapper: impl FnOnce(F) -> Result<S2, F2>,
    ) -> Result<S2, F2> {
        match self {
            Self::Success(value) => success_mapper(value),
            Self::Failure(value) => failure_mapper(value),
        }
    }

    /// Chain a computation that may fail onto a success
    ///
    /// A failure is carried over with its value untouched.
    pub fn flat_map_success<S2>(
        self,
        success_mapper: impl FnOnce(S) -> Result<S2, F>,
    ) -> Result<S2, F> {
        match self {
            Self::Success(value) => success_mapper(value),
            Self::Failure(value) => Result::Failure(value),
        }
    }

    /// Chain a computation onto a failure
    ///
    /// A success is carried over with its value untouched.
    pub fn flat_map_failure<F2>(
        self,
        failure_mapper: impl FnOnce(F) -> Result<S, F2>,
    ) -> Result<S, F2> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(value) => failure_mapper(value),
        }
    }

    /// Turn a success into a failure unless its value satisfies `predicate`
    ///
    /// A passing success is returned as is. A failure is returned as is
    /// without evaluating either closure.
    pub fn filter(
        self,
        predicate: impl FnOnce(&S) -> bool,
        failure_mapper: impl FnOnce(S) -> F,
    ) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(failure_mapper(value))
                }
            }
            failure => failure,
        }
    }

    /// Turn a failure into a success if its value satisfies `predicate`
    ///
    /// Mirror of [`filter`](Self::filter) for the failure side.
    pub fn recover(
        self,
        predicate: impl FnOnce(&F) -> bool,
        success_mapper: impl FnOnce(F) -> S,
    ) -> Self {
        match self {
            Self::Failure(value) => {
                if predicate(&value) {
                    Self::Success(success_mapper(value))
                } else {
                    Self::Failure(value)
                }
            }
            success => success,
        }
    }

    /// Run `action` on the success value, then return this result
    pub fn if_success(self, action: impl FnOnce(&S)) -> Self {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` on the failure value, then return this result
    pub fn if_failure(self, action: impl FnOnce(&F)) -> Self {
        if let Self::Failure(value) = &self {
            action(value);
        }
        self
    }

    /// Run the action matching the variant, then return this result
    pub fn if_success_or_else(
        self,
        success_action: impl FnOnce(&S),
        failure_action: impl FnOnce(&F),
    ) -> Self {
        match &self {
            Self::Success(value) => success_action(value),
            Self::Failure(value) => failure_action(value),
        }
        self
    }

    /// Unwrap the success value, or return `fallback`
    pub fn or_else(self, fallback: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Unwrap the success value, or compute one from the failure value
    pub fn or_else_map(self, fallback_supplier: impl FnOnce(F) -> S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(value) => fallback_supplier(value),
        }
    }

    /// Iterate over the success value (zero or one element)
    ///
    /// Each call returns a fresh iterator.
    #[inline]
    pub fn stream_success(&self) -> Iter<'_, S> {
        Iter::new(self.get_success())
    }

    /// Iterate over the failure value (zero or one element)
    #[inline]
    pub fn stream_failure(&self) -> Iter<'_, F> {
        Iter::new(self.get_failure())
    }

    /// Consume into an iterator over the success value
    #[inline]
    pub fn into_stream_success(self) -> IntoIter<S> {
        IntoIter::new(self.into_success())
    }

    /// Consume into an iterator over the failure value
    #[inline]
    pub fn into_stream_failure(self) -> IntoIter<F> {
        IntoIter::new(self.into_failure())
    }

    /// Unwrap the success value, or turn the failure into a caller error
    ///
    /// This is the only combinator that aborts the happy path: the error
    /// built by `exception_supplier` is returned in `Err` for the caller to
    /// propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns the error produced from the failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_result::results;
    ///
    /// fn port(raw: &str) -> Result<u16, String> {
    ///     let port = results::of_optional(raw.parse::<u16>().ok(), || raw.to_owned())
    ///         .get_or_else_throw(|bad| format!("invalid port: {bad}"))?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port("8080"), Ok(8080));
    /// assert_eq!(port("http"), Err("invalid port: http".to_owned()));
    /// ```
    pub fn get_or_else_throw<E>(self, exception_supplier: impl FnOnce(F) -> E) -> StdResult<S, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(value) => {
                tracing::debug!(
                    error_type = core::any::type_name::<E>(),
                    "Converting failure into error"
                );
                Err(exception_supplier(value))
            }
        }
    }

    /// Convert into a standard library result
    #[inline]
    pub fn into_std(self) -> StdResult<S, F> {
        self.into()
    }
}

impl<S, F: fmt::Debug> Result<S, F> {
    /// Take the success value, or report the unexpected failure
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UnexpectedFailure`] on a failure.
    pub fn try_into_success(self) -> VariantResult<S> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(value) => Err(VariantError::unexpected_failure(&value)),
        }
    }
}

impl<S: fmt::Debug, F> Result<S, F> {
    /// Take the failure value, or report the unexpected success
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UnexpectedSuccess`] on a success.
    pub fn try_into_failure(self) -> VariantResult<F> {
        match self {
            Self::Success(value) => Err(VariantError::unexpected_success(&value)),
            Self::Failure(value) => Ok(value),
        }
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Result<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success[{value}]"),
            Self::Failure(value) => write!(f, "Failure[{value}]"),
        }
    }
}

impl<S, F> From<StdResult<S, F>> for Result<S, F> {
    fn from(result: StdResult<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(value) => Self::Failure(value),
        }
    }
}

impl<S, F> From<Result<S, F>> for StdResult<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Result::Success(value) => Ok(value),
            Result::Failure(value) => Err(value),
        }
    }
}
