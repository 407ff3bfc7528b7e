//! Comprehensive tests for the factory functions and structural equality

use fluent_result::results::{failure, from_std, of_fallible, of_nullable, of_optional, success};
use fluent_result::{Result, VariantError};
use std::cell::Cell;
use std::collections::HashSet;

const SUCCESS: &str = "SUCCESS";
const FAILURE: &str = "FAILURE";

// ============================================================================
// of_nullable / of_optional
// ============================================================================

#[test]
fn test_of_nullable_returns_success_when_present() {
    let result = of_nullable(Some(SUCCESS), || FAILURE);
    assert_eq!(result, success(SUCCESS));
}

#[test]
fn test_of_nullable_returns_failure_when_absent() {
    let result: Result<i32, &str> = of_nullable(None, || FAILURE);
    assert_eq!(result, failure(FAILURE));
}

#[test]
fn test_of_nullable_supplier_invoked_only_when_absent() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        FAILURE
    };

    let _present = of_nullable(Some(1), supplier);
    assert_eq!(calls.get(), 0);

    let _absent: Result<i32, &str> = of_nullable(None, supplier);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_of_optional() {
    assert_eq!(of_optional(Some(SUCCESS), || FAILURE), success(SUCCESS));

    let empty: Result<&str, &str> = of_optional(None, || FAILURE);
    assert_eq!(empty, failure(FAILURE));
}

#[test]
fn test_success_may_hold_absent_value() {
    let result: Result<Option<i32>, &str> = success(None);
    assert!(result.is_success());
    assert_eq!(result.into_success(), Some(None));
}

// ============================================================================
// Standard library interop
// ============================================================================

#[test]
fn test_from_std() {
    let ok: std::result::Result<u8, &str> = Ok(1);
    let err: std::result::Result<u8, &str> = Err(FAILURE);

    assert_eq!(from_std(ok), success(1));
    assert_eq!(from_std(err), failure(FAILURE));
}

#[test]
fn test_of_fallible_captures_error() {
    let result = of_fallible(|| "not a number".parse::<i64>());
    assert!(result.is_failure());
    assert!(result.has_failure(|e| !e.to_string().is_empty()));
}

#[test]
fn test_into_std_round_trip_keeps_variant() {
    let result: Result<u8, &str> = failure(FAILURE);
    let std_result: std::result::Result<u8, &str> = result.into();
    assert_eq!(Result::from(std_result), failure(FAILURE));
}

// ============================================================================
// Variant-demanding conversions
// ============================================================================

#[test]
fn test_try_into_success_on_failure() {
    let result: Result<u8, &str> = failure(FAILURE);
    let error = result.try_into_success().unwrap_err();

    assert_eq!(
        error,
        VariantError::UnexpectedFailure("\"FAILURE\"".to_string())
    );
}

#[test]
fn test_try_into_failure_on_failure() {
    let result: Result<u8, &str> = failure(FAILURE);
    assert_eq!(result.try_into_failure(), Ok(FAILURE));
}

// ============================================================================
// Equality / Hash
// ============================================================================

#[test]
fn test_structural_equality() {
    let a: Result<String, i32> = success(SUCCESS.to_string());
    let b: Result<String, i32> = success(SUCCESS.to_string());
    assert_eq!(a, b);

    let c: Result<i32, String> = failure(FAILURE.to_string());
    let d: Result<i32, String> = failure("OTHER".to_string());
    assert_ne!(c, d);
}

#[test]
fn test_variants_with_equal_payloads_differ() {
    let s: Result<&str, &str> = success(SUCCESS);
    let f: Result<&str, &str> = failure(SUCCESS);
    assert_ne!(s, f);
}

#[test]
fn test_hash_consistent_with_equality() {
    let mut set: HashSet<Result<i32, i32>> = HashSet::new();
    set.insert(success(1));
    set.insert(success(1));
    set.insert(failure(1));

    assert_eq!(set.len(), 2);
    assert!(set.contains(&success(1)));
    assert!(set.contains(&failure(1)));
}

#[test]
fn test_clone_is_equal() {
    let original: Result<Vec<u8>, String> = success(vec![1, 2, 3]);
    assert_eq!(original.clone(), original);
}

// ============================================================================
// Display / Debug
// ============================================================================

#[test]
fn test_display_format() {
    let s: Result<i32, &str> = success(10);
    let f: Result<i32, &str> = failure(FAILURE);
    assert_eq!(format!("{s}"), "Success[10]");
    assert_eq!(format!("{f}"), "Failure[FAILURE]");
}

#[test]
fn test_debug_format() {
    let f: Result<i32, &str> = failure(FAILURE);
    assert_eq!(format!("{f:?}"), "Failure(\"FAILURE\")");
}
