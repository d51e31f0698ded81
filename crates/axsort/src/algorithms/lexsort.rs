//! Stable lexicographic ordering over multi-row key matrices.
//!
//! ## Purpose
//!
//! This module provides the reference kernel behind the `lexsort`
//! operation: given `rows` key sequences of `columns` elements each, it
//! writes the single permutation of `0..columns` that orders the columns
//! lexicographically.
//!
//! ## Design notes
//!
//! * **Primary-last**: The last key row is the primary key; earlier rows
//!   break ties in reverse order. One stable comparator walking the rows
//!   from last to first is equivalent to the classic
//!   sort-by-each-key-in-turn formulation, without `rows` separate
//!   sorting passes.
//! * **Stability**: Columns equal under every key keep their original
//!   relative order.
//! * **Reduction**: With a single key row the comparator degenerates to
//!   a plain value comparison, so the result equals `argsort` of that
//!   row.
//!
//! ## Invariants
//!
//! * `indices.len() == columns` and `keys.len() == rows * columns`
//!   (validated upstream).
//! * The emitted indices are a permutation of `0..columns`.
//!
//! ## Non-goals
//!
//! * This module does not validate geometry.
//! * This module does not support per-key sort direction.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::dtype::SortElement;

// ============================================================================
// Kernel
// ============================================================================

/// Compare two key matrix columns lexicographically, primary key last.
///
/// `keys` is row-major: row `r` occupies `keys[r * columns..(r + 1) * columns]`.
#[inline]
pub fn compare_columns<T: SortElement>(
    keys: &[T],
    rows: usize,
    columns: usize,
    a: usize,
    b: usize,
) -> Ordering {
    for r in (0..rows).rev() {
        let base = r * columns;
        let ord = keys[base + a].sort_cmp(&keys[base + b]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Write the stable lexicographic permutation of the key matrix columns
/// into `indices`.
#[inline]
pub fn lexsort_keys<T: SortElement>(
    indices: &mut [usize],
    keys: &[T],
    rows: usize,
    columns: usize,
) {
    for (slot, i) in indices.iter_mut().zip(0..columns) {
        *slot = i;
    }

    indices.sort_by(|&a, &b| compare_columns(keys, rows, columns, a, b));
}
