//! Deferred Results
//!
//! A [`LazyResult`] holds the computation that produces a [`Result`] rather
//! than the result itself. The computation runs the first time the value is
//! demanded and is memoized afterwards. Transforming a lazy result composes
//! a new computation and evaluates nothing.
//!
//! Lazy results use single-threaded memoization and are not `Sync`.

use std::fmt;

use once_cell::unsync::Lazy;

use crate::Result;

type Supplier<'a, S, F> = Box<dyn FnOnce() -> Result<S, F> + 'a>;

/// A result computed on first access
///
/// # Examples
///
/// ```
/// use fluent_result::{results, LazyResult};
///
/// let lazy: LazyResult<'_, u32, &str> = results::lazy(|| results::success(20));
/// let doubled = lazy.map(|n| n * 2);
///
/// assert!(!doubled.is_evaluated());
/// assert_eq!(doubled.get(), &results::success(40));
/// assert!(doubled.is_evaluated());
/// ```
pub struct LazyResult<'a, S, F> {
    cell: Lazy<Result<S, F>, Supplier<'a, S, F>>,
}

impl<'a, S: 'a, F: 'a> LazyResult<'a, S, F> {
    /// Create a lazy result from the computation that produces it
    ///
    /// `supplier` runs at most once.
    pub fn new(supplier: impl FnOnce() -> Result<S, F> + 'a) -> Self {
        let supplier: Supplier<'a, S, F> = Box::new(move || {
            tracing::trace!("Evaluating lazy result");
            supplier()
        });
        Self {
            cell: Lazy::new(supplier),
        }
    }

    /// Evaluate if needed and borrow the result
    pub fn get(&self) -> &Result<S, F> {
        Lazy::force(&self.cell)
    }

    /// Returns true once the computation has run
    pub fn is_evaluated(&self) -> bool {
        Lazy::get(&self.cell).is_some()
    }

    /// Evaluate if needed and take the result
    pub fn into_result(self) -> Result<S, F> {
        match Lazy::into_value(self.cell) {
            Ok(result) => result,
            Err(supplier) => supplier(),
        }
    }

    /// Evaluate if needed and report whether the result is a success
    pub fn is_success(&self) -> bool {
        self.get().is_success()
    }

    /// Evaluate if needed and report whether the result is a failure
    pub fn is_failure(&self) -> bool {
        self.get().is_failure()
    }

    /// Defer [`Result::map`] until evaluation
    pub fn map<S2: 'a>(self, success_mapper: impl FnOnce(S) -> S2 + 'a) -> LazyResult<'a, S2, F> {
        LazyResult::new(move || self.into_result().map(success_mapper))
    }

    /// Defer [`Result::map_failure`] until evaluation
    pub fn map_failure<F2: 'a>(
        self,
        failure_mapper: impl FnOnce(F) -> F2 + 'a,
    ) -> LazyResult<'a, S, F2> {
        LazyResult::new(move || self.into_result().map_failure(failure_mapper))
    }

    /// Defer [`Result::flat_map_success`] until evaluation
    pub fn flat_map_success<S2: 'a>(
        self,
        success_mapper: impl FnOnce(S) -> Result<S2, F> + 'a,
    ) -> LazyResult<'a, S2, F> {
        LazyResult::new(move || self.into_result().flat_map_success(success_mapper))
    }

    /// Defer [`Result::flat_map_failure`] until evaluation
    pub fn flat_map_failure<F2: 'a>(
        self,
        failure_mapper: impl FnOnce(F) -> Result<S, F2> + 'a,
    ) -> LazyResult<'a, S, F2> {
        LazyResult::new(move || self.into_result().flat_map_failure(failure_mapper))
    }
}

impl<'a, S: 'a, F: 'a> From<Result<S, F>> for LazyResult<'a, S, F> {
    fn from(result: Result<S, F>) -> Self {
        Self::new(move || result)
    }
}

impl<S: fmt::Debug, F: fmt::Debug> fmt::Debug for LazyResult<'_, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Lazy::get(&self.cell) {
            Some(result) => f.debug_tuple("LazyResult").field(result).finish(),
            None => f.write_str("LazyResult(<unevaluated>)"),
        }
    }
}
