#![cfg(feature = "gpu")]
//! Tests for the GPU provider.
//!
//! These tests require a working GPU adapter and only run with the
//! `gpu` feature enabled. They verify:
//! - Device sort agrees with the host path for every encodable dtype
//! - Device argsort is stable (index tie-breaking in the network)
//! - Capability fallback routes unsupported requests to the CPU path
//!
//! ## Test Organization
//!
//! 1. **Device Sort** - f32/i32/u32 round trips
//! 2. **Device Argsort** - permutations and stability
//! 3. **Capability Fallback** - wide dtypes and lexsort still work

use approx::assert_abs_diff_eq;
use fastAxsort::prelude::*;

fn gpu_sorter() -> ArraySorter {
    Sorter::new().backend(GPU).build().unwrap()
}

// ============================================================================
// Device Sort Tests
// ============================================================================

/// Test a basic f32 sort on the device.
#[test]
fn test_gpu_sort_f32() {
    let mut data = vec![2.5_f32, -1.0, 0.0, 7.25, -3.5];

    gpu_sorter().sort(&mut data).unwrap();

    let expected = [-3.5_f32, -1.0, 0.0, 2.5, 7.25];
    for (got, want) in data.iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = 0.0);
    }
}

/// Test i32 sign handling through the key encoding.
#[test]
fn test_gpu_sort_i32() {
    let mut data = vec![5_i32, -7, 0, i32::MIN, i32::MAX, -1];

    gpu_sorter().sort(&mut data).unwrap();

    assert_eq!(data, vec![i32::MIN, -7, -1, 0, 5, i32::MAX]);
}

/// Test u32 sorting at a size that forces padding.
#[test]
fn test_gpu_sort_u32_padded() {
    // 1000 elements pad to 1024 in the network.
    let mut data: Vec<u32> = (0..1000u64)
        .map(|i| (i.wrapping_mul(2654435761) % 4001) as u32)
        .collect();
    let mut expected = data.clone();
    expected.sort_unstable();

    gpu_sorter().sort(&mut data).unwrap();

    assert_eq!(data, expected);
}

/// Test NaN values land at the end of the device-sorted output.
#[test]
fn test_gpu_sort_nan_last() {
    let mut data = vec![f32::NAN, 1.0, f32::INFINITY, -1.0, f32::NAN];

    gpu_sorter().sort(&mut data).unwrap();

    assert_eq!(data[0], -1.0);
    assert_eq!(data[1], 1.0);
    assert_eq!(data[2], f32::INFINITY);
    assert!(data[3].is_nan());
    assert!(data[4].is_nan());
}

// ============================================================================
// Device Argsort Tests
// ============================================================================

/// Test the device argsort permutation matches the host path.
#[test]
fn test_gpu_argsort_matches_host() {
    let data: Vec<f32> = (0..2_048).map(|i| ((i * 97) % 389) as f32).collect();

    let gpu = gpu_sorter().argsort(&data).unwrap();
    let host = Sorter::new().backend(CPU).build().unwrap().argsort(&data).unwrap();

    assert_eq!(gpu, host);
}

/// Test device argsort tie-breaking is stable.
#[test]
fn test_gpu_argsort_stable() {
    let data: Vec<u32> = (0..512).map(|i| (i % 4) as u32).collect();

    let perm = gpu_sorter().argsort(&data).unwrap();

    for class in perm.chunks_exact(128) {
        assert!(class.windows(2).all(|w| w[0] < w[1]));
    }
}

// ============================================================================
// Capability Fallback Tests
// ============================================================================

/// Test that f64 input transparently runs on the CPU path.
#[test]
fn test_gpu_fallback_f64() {
    let mut data = vec![3.0_f64, 1.0, 2.0];

    let mut sorter = gpu_sorter();
    sorter.sort(&mut data).unwrap();

    assert_eq!(data, vec![1.0, 2.0, 3.0]);
}

/// Test that multi-segment input transparently runs on the CPU path.
#[test]
fn test_gpu_fallback_multi_segment() {
    let mut data = vec![4.0_f32, 3.0, 2.0, 1.0];
    let shape = Shape::new(&[2, 2]).unwrap();

    gpu_sorter().sort_slice(&mut data, &shape).unwrap();

    assert_eq!(data, vec![3.0, 4.0, 1.0, 2.0]);
}

/// Test that lexsort on a GPU-backed sorter still works.
#[test]
fn test_gpu_fallback_lexsort() {
    let keys = vec![1.0_f32, 0.0, 1.0, 0.0, 9.0, 9.0, 8.0, 8.0];
    let km = KeyMatrix::new(&keys, 2, 4).unwrap();

    let perm = gpu_sorter().lexsort(&km).unwrap();

    assert_eq!(perm, vec![3, 2, 1, 0]);
}

/// Test synchronize after device work succeeds.
#[test]
fn test_gpu_synchronize() {
    let mut data = vec![2.0_f32, 1.0];
    let mut sorter = gpu_sorter();

    sorter.sort(&mut data).unwrap();
    sorter.synchronize().unwrap();

    assert_eq!(data, vec![1.0, 2.0]);
}
