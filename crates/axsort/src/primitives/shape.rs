//! Shape descriptors and key matrix geometry.
//!
//! ## Purpose
//!
//! This module defines the `Shape` describing a multi-dimensional,
//! row-major array as seen by the sorting engine, and the `KeyMatrix`
//! view over lexsort key rows.
//!
//! ## Design notes
//!
//! * **Last-axis convention**: The sort axis is always the last axis. An
//!   N-dimensional array collapses to `num_segments` contiguous segments
//!   of `segment_len` elements each.
//! * **Fail-fast**: Degenerate geometry (no dimensions, zero-sized
//!   dimensions, mismatched key buffers) is rejected at construction.
//! * **Borrowed keys**: `KeyMatrix` borrows the caller's buffer; the
//!   engine never copies or owns key data.
//!
//! ## Key concepts
//!
//! * **Segment**: One row along the last axis; the unit `sort` and
//!   `argsort` operate on.
//! * **Key row**: One of the `rows` keys in a lexsort; the last row is
//!   the primary sort key.
//!
//! ## Invariants
//!
//! * `len() == num_segments() * segment_len()`.
//! * Every dimension is at least 1.
//! * `KeyMatrix` buffers hold exactly `rows * columns` elements.
//!
//! ## Non-goals
//!
//! * This module does not support strided or non-contiguous layouts.
//! * This module does not validate element values (NaN is a legal input).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Shape
// ============================================================================

/// Row-major shape of a multi-dimensional array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a shape from dimension sizes.
    ///
    /// Rejects empty dimension lists and zero-sized dimensions.
    pub fn new(dims: &[usize]) -> Result<Self, SortError> {
        if dims.is_empty() {
            return Err(SortError::EmptyInput);
        }
        for (axis, &d) in dims.iter().enumerate() {
            if d == 0 {
                return Err(SortError::ZeroDimension { axis });
            }
        }
        Ok(Self {
            dims: dims.to_vec(),
        })
    }

    /// Convenience constructor for a one-dimensional shape.
    pub fn vector(n: usize) -> Result<Self, SortError> {
        Self::new(&[n])
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// The dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    /// Always false; shapes with zero elements cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Length of one segment along the sort (last) axis.
    pub fn segment_len(&self) -> usize {
        *self.dims.last().expect("shape has at least one dimension")
    }

    /// Number of contiguous segments along the sort axis.
    pub fn num_segments(&self) -> usize {
        self.dims[..self.dims.len() - 1].iter().product()
    }
}

// ============================================================================
// KeyMatrix
// ============================================================================

/// Borrowed view over a row-major matrix of lexsort keys.
///
/// `rows` key sequences of `columns` elements each, stored contiguously.
/// The last row is the primary sort key; earlier rows break ties in
/// reverse order.
#[derive(Debug, Clone, Copy)]
pub struct KeyMatrix<'a, T> {
    keys: &'a [T],
    rows: usize,
    columns: usize,
}

impl<'a, T> KeyMatrix<'a, T> {
    /// Create a key matrix view, checking geometry against the buffer.
    pub fn new(keys: &'a [T], rows: usize, columns: usize) -> Result<Self, SortError> {
        if rows == 0 || columns == 0 {
            return Err(SortError::EmptyInput);
        }
        if keys.len() != rows * columns {
            return Err(SortError::InvalidKeyMatrix {
                rows,
                columns,
                len: keys.len(),
            });
        }
        Ok(Self {
            keys,
            rows,
            columns,
        })
    }

    /// Number of key rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (elements per key row; the permutation length).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// One key row as a slice.
    pub fn row(&self, r: usize) -> &'a [T] {
        &self.keys[r * self.columns..(r + 1) * self.columns]
    }

    /// The whole backing buffer.
    pub fn as_slice(&self) -> &'a [T] {
        self.keys
    }
}
