#![cfg(feature = "dev")]
//! White-box tests for the sorting kernels and the provider trait.
//!
//! These tests reach through the `dev` internals to exercise:
//! - The kernels directly, without the engine in front
//! - A single generic driver instantiated for every provider, which is
//!   the structural form of the identical-signatures guarantee
//!
//! ## Test Organization
//!
//! 1. **Kernel Behavior** - sort/argsort/lexsort building blocks
//! 2. **Generic Provider Driver** - one function, every provider

use axsort::internals::algorithms::{argsort, lexsort, sort};
use axsort::internals::engine::provider::{HostProvider, NullProvider, SortProvider};
use axsort::prelude::*;

// ============================================================================
// Kernel Behavior Tests
// ============================================================================

/// Test the ascending-order check used by the sort fast path.
#[test]
fn test_is_sorted() {
    assert!(sort::is_sorted(&[1.0_f64, 2.0, 2.0, 3.0]));
    assert!(!sort::is_sorted(&[2.0_f64, 1.0]));
    // NaN-last order: NaN at the end is sorted, NaN before a value is not.
    assert!(sort::is_sorted(&[1.0_f64, f64::NAN]));
    assert!(!sort::is_sorted(&[f64::NAN, 1.0_f64]));
}

/// Test sorting a single segment in place.
#[test]
fn test_sort_segment_kernel() {
    let mut seg = vec![4_i32, 2, 8, 6];

    sort::sort_segment(&mut seg);

    assert_eq!(seg, vec![2, 4, 6, 8]);
}

/// Test the argsort kernel reuses its scratch across segments.
#[test]
fn test_argsort_scratch_reuse() {
    let mut pairs: Vec<(i32, usize)> = Vec::new();
    let mut out_a = vec![0usize; 3];
    let mut out_b = vec![0usize; 3];

    argsort::argsort_segment(&mut out_a, &[3, 1, 2], &mut pairs);
    argsort::argsort_segment(&mut out_b, &[9, 8, 7], &mut pairs);

    assert_eq!(out_a, vec![1, 2, 0]);
    assert_eq!(out_b, vec![2, 1, 0]);
}

/// Test the lexsort kernel walks keys primary-last.
#[test]
fn test_lexsort_kernel() {
    let keys = vec![1_i32, 0, 0, 1, 5, 5, 4, 4];
    let mut indices = vec![0usize; 4];

    lexsort::lexsort_keys(&mut indices, &keys, 2, 4);

    assert_eq!(indices, vec![2, 3, 1, 0]);
}

// ============================================================================
// Generic Provider Driver Tests
// ============================================================================

/// One driver for every provider: the trait pins the signatures.
fn drive<P: SortProvider>(provider: &mut P) -> Result<(), SortError> {
    let shape = Shape::new(&[2, 3]).unwrap();
    let mut data = vec![3.0_f64, 1.0, 2.0, 6.0, 4.0, 5.0];
    let mut indices = vec![0usize; 6];

    provider.sort(&mut data, &shape)?;
    provider.argsort(&mut indices, &data, &shape)?;

    let keys = vec![1_i64, 2, 0];
    let km = KeyMatrix::new(&keys, 1, 3).unwrap();
    let mut lex = vec![0usize; 3];
    provider.lexsort(&mut lex, &km)?;

    provider.synchronize()
}

/// Test the host provider through the generic driver.
#[test]
fn test_generic_driver_host() {
    drive(&mut HostProvider).unwrap();
}

/// Test the no-op provider through the same generic driver.
#[test]
fn test_generic_driver_null() {
    drive(&mut NullProvider).unwrap();
}

/// Test host and null providers report distinct names.
#[test]
fn test_provider_names() {
    assert_eq!(HostProvider.name(), "host");
    assert_eq!(NullProvider.name(), "null");
}
