//! High-level API for accelerated sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing builder and sorter handle for
//! the accelerated crate: the same configuration surface as the core
//! `axsort` builder, extended with parallel execution control and
//! device backend resolution, plus container-based operation variants.
//!
//! ## Design notes
//!
//! * **Same shape as core**: Configuration methods, duplicate-parameter
//!   detection, and the build step mirror `axsort::SorterBuilder`; code
//!   written against one moves to the other unchanged.
//! * **Resolution at build**: Backend availability is settled in
//!   `.build()`, with `tracing` events recording what was resolved.
//! * **Core shell reused**: The built handle wraps the core executor
//!   around this crate's provider enum, so validation sequencing is
//!   identical across both crates.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Sorter::new()`.
//! 2. Chain configuration methods (`.backend()`, `.parallel()`,
//!    `.degrade_missing_backend()`).
//! 3. Call `.build()` to obtain an [`ArraySorter`].

// Export dependencies from axsort
use axsort::internals::engine::executor::SortExecutor;
use axsort::internals::engine::provider::{HostProvider, NullProvider, SortProvider};

// Publicly re-exported types
pub use axsort::internals::primitives::backend::Backend;
pub use axsort::prelude::{DType, KeyMatrix, Shape, SortElement, SortError};

// Internal dependencies
use crate::engine::executor::FastProvider;
use crate::input::{SortInput, SortInputMut};

#[cfg(feature = "cpu")]
use crate::engine::executor::ParallelProvider;
#[cfg(feature = "gpu")]
use crate::engine::gpu::GpuProvider;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an accelerated [`ArraySorter`].
#[derive(Debug, Clone, Default)]
pub struct SorterBuilder {
    /// Execution backend selection.
    pub backend: Option<Backend>,

    /// Parallel CPU execution hint (default: on when compiled in).
    pub parallel: Option<bool>,

    /// Resolve unavailable backends to the inert no-op provider instead
    /// of failing the build.
    pub degrade_missing_backend: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SorterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            backend: None,
            parallel: None,
            degrade_missing_backend: None,
            duplicate_param: None,
        }
    }

    /// Select the execution backend (default: CPU).
    pub fn backend(mut self, backend: Backend) -> Self {
        if self.backend.is_some() {
            self.duplicate_param = Some("backend");
        }
        self.backend = Some(backend);
        self
    }

    /// Enable or disable data-parallel CPU execution.
    ///
    /// Only meaningful for the CPU backend; without the `cpu` feature
    /// the hint resolves to the single-threaded reference path.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Allow an unavailable backend to resolve to the no-op provider.
    ///
    /// The no-op provider reports success without writing output; this
    /// exists for builds that must link and run on platforms without an
    /// accelerator, and is off by default.
    pub fn degrade_missing_backend(mut self, degrade: bool) -> Self {
        if self.degrade_missing_backend.is_some() {
            self.duplicate_param = Some("degrade_missing_backend");
        }
        self.degrade_missing_backend = Some(degrade);
        self
    }

    /// Build the sorter, resolving the configured backend to a provider.
    pub fn build(self) -> Result<ArraySorter, SortError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(SortError::DuplicateParameter { parameter });
        }

        let backend = self.backend.unwrap_or_default();
        let parallel = self.parallel.unwrap_or(cfg!(feature = "cpu"));
        let degrade = self.degrade_missing_backend.unwrap_or(false);

        let provider = match backend {
            Backend::CPU => resolve_cpu(parallel),
            Backend::GPU => resolve_gpu(degrade)?,
        };
        tracing::debug!(
            backend = backend.as_str(),
            provider = provider.name(),
            "resolved sorting provider"
        );

        Ok(ArraySorter {
            executor: SortExecutor::new(provider),
            backend,
        })
    }
}

#[cfg(feature = "cpu")]
fn resolve_cpu(parallel: bool) -> FastProvider {
    if parallel {
        FastProvider::Parallel(ParallelProvider)
    } else {
        FastProvider::Host(HostProvider)
    }
}

#[cfg(not(feature = "cpu"))]
fn resolve_cpu(parallel: bool) -> FastProvider {
    if parallel {
        tracing::debug!("parallel execution not compiled in; using host path");
    }
    FastProvider::Host(HostProvider)
}

#[cfg(feature = "gpu")]
fn resolve_gpu(degrade: bool) -> Result<FastProvider, SortError> {
    match GpuProvider::new() {
        Ok(gpu) => Ok(FastProvider::Gpu {
            gpu,
            fallback: HostProvider,
        }),
        Err(e) if degrade => {
            tracing::warn!(error = %e, "GPU unavailable; degrading to the no-op provider");
            Ok(FastProvider::Null(NullProvider))
        }
        Err(e) => Err(e),
    }
}

#[cfg(not(feature = "gpu"))]
fn resolve_gpu(degrade: bool) -> Result<FastProvider, SortError> {
    if degrade {
        tracing::warn!("GPU support not compiled in; degrading to the no-op provider");
        Ok(FastProvider::Null(NullProvider))
    } else {
        Err(SortError::BackendUnavailable { backend: "GPU" })
    }
}

// ============================================================================
// ArraySorter
// ============================================================================

/// Configured accelerated sorting handle.
///
/// One handle serves every element type and input container; the dtype
/// and shape are carried by the call, not the handle.
#[derive(Debug)]
pub struct ArraySorter {
    executor: SortExecutor<FastProvider>,
    backend: Backend,
}

impl ArraySorter {
    /// Sort every last-axis segment of a container ascending, in place.
    pub fn sort<T, I>(&mut self, data: &mut I) -> Result<(), SortError>
    where
        T: SortElement,
        I: SortInputMut<T> + ?Sized,
    {
        let shape = data.sort_shape()?;
        self.executor.sort(data.as_sort_slice_mut()?, &shape)
    }

    /// Slice variant of [`ArraySorter::sort`] with an explicit shape.
    pub fn sort_slice<T: SortElement>(
        &mut self,
        data: &mut [T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        self.executor.sort(data, shape)
    }

    /// Compute each segment's stable ascending permutation.
    pub fn argsort<T, I>(&mut self, data: &I) -> Result<Vec<usize>, SortError>
    where
        T: SortElement,
        I: SortInput<T> + ?Sized,
    {
        let shape = data.sort_shape()?;
        let slice = data.as_sort_slice()?;
        let mut indices = vec![0usize; slice.len()];
        self.executor.argsort(&mut indices, slice, &shape)?;
        Ok(indices)
    }

    /// Write each segment's stable ascending permutation into `indices`.
    pub fn argsort_into<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        self.executor.argsort(indices, data, shape)
    }

    /// Compute the stable lexicographic permutation of the key matrix
    /// columns.
    pub fn lexsort<T: SortElement>(
        &mut self,
        keys: &KeyMatrix<'_, T>,
    ) -> Result<Vec<usize>, SortError> {
        let mut indices = vec![0usize; keys.columns()];
        self.executor.lexsort(&mut indices, keys)?;
        Ok(indices)
    }

    /// Write the stable lexicographic permutation of the key matrix
    /// columns into `indices`.
    pub fn lexsort_into<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        self.executor.lexsort(indices, keys)
    }

    /// Drain any asynchronous provider work.
    pub fn synchronize(&mut self) -> Result<(), SortError> {
        self.executor.synchronize()
    }

    /// The backend this sorter was built for.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// The name of the provider actually resolved at build time.
    pub fn provider_name(&self) -> &'static str {
        self.executor.provider().name()
    }
}
