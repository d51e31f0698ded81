//! The execution-provider seam and the built-in providers.
//!
//! ## Purpose
//!
//! This module defines `SortProvider`, the interface every execution
//! backend implements, together with the two providers the core crate
//! ships: the reference `HostProvider` and the deliberately inert
//! `NullProvider`.
//!
//! ## Design notes
//!
//! * **One seam, many backends**: Accelerated providers live in
//!   extension crates and implement the same trait; callers never branch
//!   on build configuration themselves.
//! * **Capability-checked**: `supports` lets the engine ask before
//!   dispatching, so partial backends degrade to a capable one instead
//!   of failing mid-operation.
//! * **Identical signatures**: Every provider exposes the same operation
//!   signatures through the trait, so swapping providers can never
//!   change the call surface (link-compatibility is structural).
//!
//! ## Key concepts
//!
//! * **HostProvider**: Runs the reference kernels synchronously on the
//!   calling thread; supports every operation and dtype.
//! * **NullProvider**: Accepts every operation, performs no computation
//!   and no writes, and reports success. This is the degraded variant
//!   for builds on platforms without an accelerator; invoking it leaves
//!   output buffers untouched by design.
//!
//! ## Invariants
//!
//! * Providers are handed pre-validated geometry; they never re-check.
//! * `synchronize` returning `Ok` means no provider work is in flight.
//!
//! ## Non-goals
//!
//! * This module does not select providers (the builder does).
//! * This module does not validate inputs (the executor does).

// Internal dependencies
use crate::algorithms::{argsort, lexsort, sort};
use crate::primitives::dtype::{DType, SortElement};
use crate::primitives::errors::SortError;
use crate::primitives::shape::{KeyMatrix, Shape};

// ============================================================================
// Operation
// ============================================================================

/// The operations a provider can be asked to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// In-place segment sort.
    Sort,
    /// Index-producing segment sort.
    ArgSort,
    /// Multi-key lexicographic sort.
    LexSort,
}

impl Operation {
    /// Returns a human-readable label for this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Sort => "sort",
            Operation::ArgSort => "argsort",
            Operation::LexSort => "lexsort",
        }
    }
}

// ============================================================================
// SortProvider
// ============================================================================

/// Interface implemented by every execution backend.
///
/// Inputs reaching a provider have already passed validation; shape and
/// buffer lengths are mutually consistent.
pub trait SortProvider {
    /// Short stable name used in diagnostics and errors.
    fn name(&self) -> &'static str;

    /// Whether this provider can execute `op` for `dtype` and `shape`.
    ///
    /// `shape` is `None` for lexsort, whose geometry is carried by the
    /// key matrix.
    fn supports(&self, op: Operation, dtype: DType, shape: Option<&Shape>) -> bool;

    /// Sort every last-axis segment of `data` ascending, in place.
    fn sort<T: SortElement>(&mut self, data: &mut [T], shape: &Shape) -> Result<(), SortError>;

    /// Write each segment's stable ascending permutation into `indices`.
    fn argsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        shape: &Shape,
    ) -> Result<(), SortError>;

    /// Write the stable lexicographic permutation of the key matrix
    /// columns into `indices`.
    fn lexsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError>;

    /// Drain any asynchronous provider work.
    fn synchronize(&mut self) -> Result<(), SortError>;
}

// ============================================================================
// HostProvider
// ============================================================================

/// Reference provider running the stable kernels on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProvider;

impl SortProvider for HostProvider {
    fn name(&self) -> &'static str {
        "host"
    }

    fn supports(&self, _op: Operation, _dtype: DType, _shape: Option<&Shape>) -> bool {
        true
    }

    fn sort<T: SortElement>(&mut self, data: &mut [T], shape: &Shape) -> Result<(), SortError> {
        sort::sort_segments(data, shape.segment_len());
        Ok(())
    }

    fn argsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        argsort::argsort_segments(indices, data, shape.segment_len());
        Ok(())
    }

    fn lexsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        lexsort::lexsort_keys(indices, keys.as_slice(), keys.rows(), keys.columns());
        Ok(())
    }

    fn synchronize(&mut self) -> Result<(), SortError> {
        Ok(())
    }
}

// ============================================================================
// NullProvider
// ============================================================================

/// Inert provider for degraded builds: no computation, no writes.
///
/// Every operation reports success while leaving output buffers exactly
/// as they were. Callers opting into this provider accept unwritten
/// output as the cost of link-compatible builds without an accelerator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProvider;

impl SortProvider for NullProvider {
    fn name(&self) -> &'static str {
        "null"
    }

    fn supports(&self, _op: Operation, _dtype: DType, _shape: Option<&Shape>) -> bool {
        true
    }

    fn sort<T: SortElement>(&mut self, _data: &mut [T], _shape: &Shape) -> Result<(), SortError> {
        Ok(())
    }

    fn argsort<T: SortElement>(
        &mut self,
        _indices: &mut [usize],
        _data: &[T],
        _shape: &Shape,
    ) -> Result<(), SortError> {
        Ok(())
    }

    fn lexsort<T: SortElement>(
        &mut self,
        _indices: &mut [usize],
        _keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        Ok(())
    }

    fn synchronize(&mut self) -> Result<(), SortError> {
        Ok(())
    }
}
