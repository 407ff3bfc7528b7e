//! fluent-result benchmarking suite
//!
//! Shared input generators for the combinator benchmarks.

pub use fluent_result::{LazyResult, Result, results};

/// Build `len` results where every `failure_every`-th one is a failure
///
/// Successes carry their index, failures carry a short message. A
/// `failure_every` of zero yields only successes.
pub fn mixed_results(len: usize, failure_every: usize) -> Vec<Result<u64, String>> {
    (0..len)
        .map(|i| {
            if failure_every != 0 && i % failure_every == 0 {
                results::failure(format!("failure #{i}"))
            } else {
                results::success(i as u64)
            }
        })
        .collect()
}

/// Number of failures [`mixed_results`] produces for the same arguments
pub fn expected_failures(len: usize, failure_every: usize) -> usize {
    if failure_every == 0 {
        0
    } else {
        len.div_ceil(failure_every)
    }
}
