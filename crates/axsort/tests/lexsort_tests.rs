//! Tests for the lexsort operation.
//!
//! These tests verify multi-key lexicographic ordering through the
//! public API:
//! - Primary-last key convention
//! - Stable tie-breaking across and within keys
//! - Reduction to argsort for a single key row
//! - Key matrix geometry validation
//!
//! ## Test Organization
//!
//! 1. **Basic Lexsort** - two-key orderings
//! 2. **Single-Key Reduction** - equivalence with argsort
//! 3. **Stability** - fully tied columns keep input order
//! 4. **Geometry** - malformed matrices are rejected

use axsort::prelude::*;

fn sorter() -> ArraySorter {
    Sorter::new().backend(CPU).build().unwrap()
}

// ============================================================================
// Basic Lexsort Tests
// ============================================================================

/// Test two-key ordering with the last row as the primary key.
#[test]
fn test_lexsort_primary_last() {
    // Row 0 (secondary): 1, 0, 1, 0
    // Row 1 (primary):   9, 9, 8, 8
    let keys = vec![1_i32, 0, 1, 0, 9, 9, 8, 8];
    let km = KeyMatrix::new(&keys, 2, 4).unwrap();

    let perm = sorter().lexsort(&km).unwrap();

    // Primary 8 first (columns 2, 3), ordered by secondary 0 < 1 within;
    // then primary 9 (columns 0, 1) likewise.
    assert_eq!(perm, vec![3, 2, 1, 0]);
}

/// Test that the secondary key only breaks primary ties.
#[test]
fn test_lexsort_secondary_on_ties_only() {
    // Row 0 (secondary): 0, 9, 0
    // Row 1 (primary):   2, 1, 1
    let keys = vec![0_i64, 9, 0, 2, 1, 1];
    let km = KeyMatrix::new(&keys, 2, 3).unwrap();

    let perm = sorter().lexsort(&km).unwrap();

    // Primary 1 at columns 1, 2; secondary orders column 2 (0) before
    // column 1 (9). Column 0 (primary 2) comes last.
    assert_eq!(perm, vec![2, 1, 0]);
}

/// Test a three-key ordering cascades tie-breaks in reverse row order.
#[test]
fn test_lexsort_three_keys() {
    // Row 0 (tertiary):  1, 0, 0, 0
    // Row 1 (secondary): 5, 5, 4, 4
    // Row 2 (primary):   7, 7, 7, 7
    let keys = vec![1_u32, 0, 0, 0, 5, 5, 4, 4, 7, 7, 7, 7];
    let km = KeyMatrix::new(&keys, 3, 4).unwrap();

    let perm = sorter().lexsort(&km).unwrap();

    // All primaries tie; secondary 4 (columns 2, 3) precedes 5 (0, 1);
    // tertiary orders column 1 (0) before column 0 (1).
    assert_eq!(perm, vec![2, 3, 1, 0]);
}

/// Test float keys order NaN columns last.
#[test]
fn test_lexsort_float_nan_last() {
    let keys = vec![f64::NAN, 1.0, 0.5];
    let km = KeyMatrix::new(&keys, 1, 3).unwrap();

    let perm = sorter().lexsort(&km).unwrap();

    assert_eq!(perm, vec![2, 1, 0]);
}

// ============================================================================
// Single-Key Reduction Tests
// ============================================================================

/// Test that a single-key lexsort equals argsort of that key row.
#[test]
fn test_lexsort_single_key_equals_argsort() {
    let keys = vec![3.0_f64, 1.0, 2.0, 1.0, 0.0];
    let km = KeyMatrix::new(&keys, 1, 5).unwrap();
    let shape = Shape::vector(5).unwrap();
    let mut s = sorter();

    let lex = s.lexsort(&km).unwrap();
    let arg = s.argsort(&keys, &shape).unwrap();

    assert_eq!(lex, arg);
}

/// Test the single-key reduction on integer data with many ties.
#[test]
fn test_lexsort_single_key_ties_match_argsort() {
    let keys: Vec<i32> = (0..40).map(|i| (i * 11) % 5).collect();
    let km = KeyMatrix::new(&keys, 1, 40).unwrap();
    let shape = Shape::vector(40).unwrap();
    let mut s = sorter();

    assert_eq!(s.lexsort(&km).unwrap(), s.argsort(&keys, &shape).unwrap());
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test fully tied columns keep their input order.
#[test]
fn test_lexsort_all_ties_identity() {
    let keys = vec![4_u8, 4, 4, 4, 2, 2, 2, 2];
    let km = KeyMatrix::new(&keys, 2, 4).unwrap();

    let perm = sorter().lexsort(&km).unwrap();

    assert_eq!(perm, vec![0, 1, 2, 3]);
}

/// Test that the result is a permutation of 0..columns.
#[test]
fn test_lexsort_is_permutation() {
    let keys: Vec<i16> = (0..90).map(|i| (i * 29) % 7).collect();
    let km = KeyMatrix::new(&keys, 3, 30).unwrap();

    let mut perm = sorter().lexsort(&km).unwrap();
    perm.sort_unstable();

    assert_eq!(perm, (0..30).collect::<Vec<_>>());
}

// ============================================================================
// Geometry Tests
// ============================================================================

/// Test that a key buffer not matching its geometry is rejected.
#[test]
fn test_lexsort_bad_geometry() {
    let keys = vec![1_i32, 2, 3, 4, 5];

    let err = KeyMatrix::new(&keys, 2, 3).unwrap_err();

    assert_eq!(
        err,
        SortError::InvalidKeyMatrix {
            rows: 2,
            columns: 3,
            len: 5
        }
    );
}

/// Test that empty key matrices are rejected.
#[test]
fn test_lexsort_empty_rejected() {
    let keys: Vec<f32> = vec![];

    assert_eq!(KeyMatrix::new(&keys, 0, 4).unwrap_err(), SortError::EmptyInput);
    assert_eq!(KeyMatrix::new(&keys, 1, 0).unwrap_err(), SortError::EmptyInput);
}

/// Test that a wrong-length index buffer is rejected.
#[test]
fn test_lexsort_into_wrong_index_len() {
    let keys = vec![1_i32, 2, 3];
    let km = KeyMatrix::new(&keys, 1, 3).unwrap();
    let mut indices = vec![0usize; 2];

    let err = sorter().lexsort_into(&mut indices, &km).unwrap_err();

    assert_eq!(
        err,
        SortError::InvalidIndexBuffer {
            expected: 3,
            got: 2
        }
    );
}
