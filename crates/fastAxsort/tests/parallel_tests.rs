#![cfg(feature = "cpu")]
//! Tests for the data-parallel CPU provider.
//!
//! These tests verify that the parallel provider is a drop-in
//! replacement for the reference host path: identical permutations,
//! identical stability, identical NaN placement — at sizes large enough
//! to actually split across threads.
//!
//! ## Test Organization
//!
//! 1. **Agreement** - parallel output equals serial output
//! 2. **Stability** - tie order survives parallel execution
//! 3. **Scale** - multi-segment and single-segment parallel paths

use fastAxsort::prelude::*;

/// Deterministic pseudo-random data without an RNG dependency.
fn scrambled(n: usize, modulus: i64) -> Vec<i64> {
    (0..n)
        .map(|i| ((i as i64).wrapping_mul(6364136223846793005) >> 33) % modulus)
        .collect()
}

fn parallel_sorter() -> fastAxsort::prelude::ArraySorter {
    Sorter::new().parallel(true).build().unwrap()
}

fn serial_sorter() -> fastAxsort::prelude::ArraySorter {
    Sorter::new().parallel(false).build().unwrap()
}

// ============================================================================
// Agreement Tests
// ============================================================================

/// Test parallel and serial sort produce identical output.
#[test]
fn test_parallel_sort_agrees_with_serial() {
    let base = scrambled(10_000, 9973);
    let shape = Shape::new(&[10, 1000]).unwrap();

    let mut par = base.clone();
    let mut ser = base.clone();
    parallel_sorter().sort_slice(&mut par, &shape).unwrap();
    serial_sorter().sort_slice(&mut ser, &shape).unwrap();

    assert_eq!(par, ser);
}

/// Test parallel and serial argsort produce identical permutations.
#[test]
fn test_parallel_argsort_agrees_with_serial() {
    let data = scrambled(8_192, 127);
    let shape = Shape::new(&[8, 1024]).unwrap();
    let mut par = vec![0usize; data.len()];
    let mut ser = vec![0usize; data.len()];

    parallel_sorter()
        .argsort_into(&mut par, &data, &shape)
        .unwrap();
    serial_sorter()
        .argsort_into(&mut ser, &data, &shape)
        .unwrap();

    assert_eq!(par, ser);
}

/// Test parallel and serial lexsort produce identical permutations.
#[test]
fn test_parallel_lexsort_agrees_with_serial() {
    let keys: Vec<i64> = scrambled(3_000, 11);
    let km = KeyMatrix::new(&keys, 3, 1000).unwrap();

    let par = parallel_sorter().lexsort(&km).unwrap();
    let ser = serial_sorter().lexsort(&km).unwrap();

    assert_eq!(par, ser);
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test that heavy ties argsort identically on both paths.
///
/// With only three distinct values over many elements, any instability
/// in the parallel path would reorder tied indices.
#[test]
fn test_parallel_argsort_stability_under_ties() {
    let data: Vec<u32> = (0..4_098).map(|i| (i % 3) as u32).collect();

    let mut par_sorter = parallel_sorter();
    let mut ser_sorter = serial_sorter();

    let par = par_sorter.argsort(&data).unwrap();
    let ser = ser_sorter.argsort(&data).unwrap();

    assert_eq!(par, ser);

    // Tied indices must be strictly increasing within each value class.
    for class in par.chunks_exact(data.len() / 3) {
        assert!(class.windows(2).all(|w| w[0] < w[1]));
    }
}

/// Test NaN placement on the single-segment parallel path.
#[test]
fn test_parallel_sort_nan_last() {
    let mut data: Vec<f64> = (0..2_048)
        .map(|i| if i % 500 == 0 { f64::NAN } else { (i % 97) as f64 })
        .collect();

    parallel_sorter().sort(&mut data).unwrap();

    let first_nan = data.iter().position(|v| v.is_nan()).unwrap();
    assert!(data[..first_nan].windows(2).all(|w| w[0] <= w[1]));
    assert!(data[first_nan..].iter().all(|v| v.is_nan()));
}

// ============================================================================
// Scale Tests
// ============================================================================

/// Test a large single segment exercises the in-segment parallel sort.
#[test]
fn test_parallel_single_segment_large() {
    let mut data = scrambled(100_000, 1_000_003);
    let mut expected = data.clone();
    expected.sort();

    parallel_sorter().sort(&mut data).unwrap();

    assert_eq!(data, expected);
}

/// Test many small segments exercise the per-segment parallel path.
#[test]
fn test_parallel_many_small_segments() {
    let base = scrambled(9_000, 53);
    let shape = Shape::new(&[1000, 9]).unwrap();

    let mut par = base.clone();
    parallel_sorter().sort_slice(&mut par, &shape).unwrap();

    for seg in par.chunks_exact(9) {
        assert!(seg.windows(2).all(|w| w[0] <= w[1]));
    }
}
