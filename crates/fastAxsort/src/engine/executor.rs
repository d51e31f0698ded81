//! Backend selection and the data-parallel CPU provider.
//!
//! ## Purpose
//!
//! This module provides the `ParallelProvider`, a drop-in replacement
//! for the core host provider that distributes segment sorting across
//! CPU cores, and the `FastProvider` selection enum that slots whichever
//! provider the builder resolved into the core crate's executor shell.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution; one
//!   segment per task, with per-thread scratch via `for_each_init`.
//! * **Single-segment path**: One-dimensional inputs parallelize inside
//!   the segment with rayon's stable parallel sort.
//! * **Capability fallback**: The GPU arm consults the device provider's
//!   capabilities per call and reroutes unsupported requests to the host
//!   path, emitting a `tracing` event so the reroute is observable.
//! * **Integration**: `FastProvider` implements the core `SortProvider`
//!   trait, so the core executor's validation sequencing is reused
//!   unchanged.
//!
//! ## Invariants
//!
//! * Parallel results are identical to the reference host kernels
//!   (stability included).
//! * Fallback never changes operation semantics, only where they run.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (the core executor does).
//! * This module does not decide backends (the builder does).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// Export dependencies from axsort
#[cfg(feature = "cpu")]
use axsort::internals::algorithms::{argsort, lexsort, sort};
use axsort::internals::engine::provider::{
    HostProvider, NullProvider, Operation, SortProvider,
};
use axsort::internals::primitives::dtype::{DType, SortElement};
use axsort::internals::primitives::errors::SortError;
use axsort::internals::primitives::shape::{KeyMatrix, Shape};

// Internal dependencies
#[cfg(feature = "gpu")]
use crate::engine::gpu::GpuProvider;

// ============================================================================
// ParallelProvider
// ============================================================================

/// Data-parallel CPU provider.
///
/// Semantics match the reference host provider exactly; only the
/// execution strategy differs.
#[cfg(feature = "cpu")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelProvider;

#[cfg(feature = "cpu")]
impl SortProvider for ParallelProvider {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn supports(&self, _op: Operation, _dtype: DType, _shape: Option<&Shape>) -> bool {
        true
    }

    fn sort<T: SortElement>(&mut self, data: &mut [T], shape: &Shape) -> Result<(), SortError> {
        let segment_len = shape.segment_len();
        if shape.num_segments() == 1 {
            // One segment: parallelize inside it. rayon's par_sort_by is
            // stable, matching the host kernel.
            data.par_sort_by(|a, b| a.sort_cmp(b));
        } else {
            data.par_chunks_exact_mut(segment_len)
                .for_each(|segment| sort::sort_segment(segment));
        }
        Ok(())
    }

    fn argsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        let segment_len = shape.segment_len();
        if shape.num_segments() == 1 {
            let mut pairs: Vec<(T, usize)> = data.iter().copied().zip(0..data.len()).collect();
            pairs.par_sort_by(|a, b| a.0.sort_cmp(&b.0));
            for (slot, &(_, idx)) in indices.iter_mut().zip(pairs.iter()) {
                *slot = idx;
            }
        } else {
            indices
                .par_chunks_exact_mut(segment_len)
                .zip(data.par_chunks_exact(segment_len))
                .for_each_init(Vec::new, |pairs, (out, segment)| {
                    argsort::argsort_segment(out, segment, pairs);
                });
        }
        Ok(())
    }

    fn lexsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        let (rows, columns) = (keys.rows(), keys.columns());
        let key_slice = keys.as_slice();

        for (slot, i) in indices.iter_mut().zip(0..columns) {
            *slot = i;
        }
        indices.par_sort_by(|&a, &b| lexsort::compare_columns(key_slice, rows, columns, a, b));
        Ok(())
    }

    fn synchronize(&mut self) -> Result<(), SortError> {
        Ok(())
    }
}

// ============================================================================
// FastProvider - backend selection
// ============================================================================

/// The providers this crate's builder can resolve to.
///
/// Implements the core `SortProvider` trait so the core executor shell
/// (validation, sequencing) wraps it unchanged.
#[derive(Debug)]
pub enum FastProvider {
    /// Reference single-threaded host kernels.
    Host(HostProvider),

    /// Data-parallel CPU execution.
    #[cfg(feature = "cpu")]
    Parallel(ParallelProvider),

    /// GPU execution with capability fallback to the host path.
    #[cfg(feature = "gpu")]
    Gpu {
        /// The device provider.
        gpu: GpuProvider,
        /// Host path for requests outside the device's capabilities.
        fallback: HostProvider,
    },

    /// Inert no-op provider for degraded builds.
    Null(NullProvider),
}

#[cfg(feature = "gpu")]
macro_rules! gpu_or_fallback {
    ($gpu:expr, $fallback:expr, $op:expr, $dtype:expr, $shape:expr, $call:ident ( $($arg:expr),* )) => {{
        if $gpu.supports($op, $dtype, $shape) {
            $gpu.$call($($arg),*)
        } else {
            tracing::debug!(
                operation = $op.as_str(),
                dtype = $dtype.as_str(),
                "request outside device capability; falling back to host path"
            );
            $fallback.$call($($arg),*)
        }
    }};
}

impl SortProvider for FastProvider {
    fn name(&self) -> &'static str {
        match self {
            FastProvider::Host(p) => p.name(),
            #[cfg(feature = "cpu")]
            FastProvider::Parallel(p) => p.name(),
            #[cfg(feature = "gpu")]
            FastProvider::Gpu { gpu, .. } => gpu.name(),
            FastProvider::Null(p) => p.name(),
        }
    }

    fn supports(&self, op: Operation, dtype: DType, shape: Option<&Shape>) -> bool {
        match self {
            FastProvider::Host(p) => p.supports(op, dtype, shape),
            #[cfg(feature = "cpu")]
            FastProvider::Parallel(p) => p.supports(op, dtype, shape),
            // The GPU arm as a whole supports everything; requests the
            // device cannot take run on the fallback.
            #[cfg(feature = "gpu")]
            FastProvider::Gpu { .. } => true,
            FastProvider::Null(p) => p.supports(op, dtype, shape),
        }
    }

    fn sort<T: SortElement>(&mut self, data: &mut [T], shape: &Shape) -> Result<(), SortError> {
        match self {
            FastProvider::Host(p) => p.sort(data, shape),
            #[cfg(feature = "cpu")]
            FastProvider::Parallel(p) => p.sort(data, shape),
            #[cfg(feature = "gpu")]
            FastProvider::Gpu { gpu, fallback } => gpu_or_fallback!(
                gpu,
                fallback,
                Operation::Sort,
                T::DTYPE,
                Some(shape),
                sort(data, shape)
            ),
            FastProvider::Null(p) => p.sort(data, shape),
        }
    }

    fn argsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        match self {
            FastProvider::Host(p) => p.argsort(indices, data, shape),
            #[cfg(feature = "cpu")]
            FastProvider::Parallel(p) => p.argsort(indices, data, shape),
            #[cfg(feature = "gpu")]
            FastProvider::Gpu { gpu, fallback } => gpu_or_fallback!(
                gpu,
                fallback,
                Operation::ArgSort,
                T::DTYPE,
                Some(shape),
                argsort(indices, data, shape)
            ),
            FastProvider::Null(p) => p.argsort(indices, data, shape),
        }
    }

    fn lexsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        match self {
            FastProvider::Host(p) => p.lexsort(indices, keys),
            #[cfg(feature = "cpu")]
            FastProvider::Parallel(p) => p.lexsort(indices, keys),
            #[cfg(feature = "gpu")]
            FastProvider::Gpu { gpu, fallback } => gpu_or_fallback!(
                gpu,
                fallback,
                Operation::LexSort,
                T::DTYPE,
                None,
                lexsort(indices, keys)
            ),
            FastProvider::Null(p) => p.lexsort(indices, keys),
        }
    }

    fn synchronize(&mut self) -> Result<(), SortError> {
        match self {
            FastProvider::Host(p) => p.synchronize(),
            #[cfg(feature = "cpu")]
            FastProvider::Parallel(p) => p.synchronize(),
            #[cfg(feature = "gpu")]
            FastProvider::Gpu { gpu, .. } => gpu.synchronize(),
            FastProvider::Null(p) => p.synchronize(),
        }
    }
}
