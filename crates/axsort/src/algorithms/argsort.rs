//! Index-producing stable sort of last-axis segments.
//!
//! ## Purpose
//!
//! This module provides the reference kernel behind the `argsort`
//! operation: for each segment it writes the permutation of
//! `0..segment_len` that stably orders the segment's values ascending.
//! The data itself is never modified.
//!
//! ## Design notes
//!
//! * **Pair sort**: Sorts `(value, local_index)` pairs rather than
//!   indices with indirect lookups; the pairs stay small and data
//!   movement stays cache-friendly.
//! * **Explicit scratch**: The pair buffer is passed in by the caller so
//!   parallel drivers can keep one buffer per thread. The driver in this
//!   module owns a single buffer reused across segments.
//! * **Stability**: Equal values keep their original relative order, so
//!   the emitted permutation is the unique stable one.
//!
//! ## Invariants
//!
//! * `indices.len() == data.len()` and both are multiples of
//!   `segment_len` (validated upstream).
//! * Each emitted segment of `indices` is a permutation of
//!   `0..segment_len`.
//!
//! ## Non-goals
//!
//! * This module does not validate geometry.
//! * This module does not produce globally-offset indices; indices are
//!   local to their segment.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::dtype::SortElement;

// ============================================================================
// Kernel
// ============================================================================

/// Write the stable ascending permutation of every segment of `data`
/// into the matching segment of `indices`.
#[inline]
pub fn argsort_segments<T: SortElement>(indices: &mut [usize], data: &[T], segment_len: usize) {
    let mut pairs: Vec<(T, usize)> = Vec::with_capacity(segment_len);
    for (out, segment) in indices
        .chunks_exact_mut(segment_len)
        .zip(data.chunks_exact(segment_len))
    {
        argsort_segment(out, segment, &mut pairs);
    }
}

/// Argsort a single segment into `out`, using `pairs` as scratch.
///
/// `out` and `segment` must have equal lengths; `pairs` is cleared and
/// refilled, retaining its capacity across calls.
#[inline]
pub fn argsort_segment<T: SortElement>(
    out: &mut [usize],
    segment: &[T],
    pairs: &mut Vec<(T, usize)>,
) {
    pairs.clear();
    pairs.extend(segment.iter().copied().zip(0..segment.len()));

    // Stable sort on the value; ties keep insertion order, which is the
    // original index order.
    pairs.sort_by(|a, b| a.0.sort_cmp(&b.0));

    for (slot, &(_, idx)) in out.iter_mut().zip(pairs.iter()) {
        *slot = idx;
    }
}
