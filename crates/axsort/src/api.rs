//! High-level API for array sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for choosing an execution backend and degradation policy, and
//! the `ArraySorter` handle exposing the three operations.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (CPU backend,
//!   strict availability).
//! * **Validated**: Configuration errors (duplicate parameters,
//!   unavailable backends) surface when `.build()` is called.
//! * **Dtype-per-call**: The built sorter is not generic; each operation
//!   is, so one handle serves every element type.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Sorter::new()`.
//! 2. Chain configuration methods (`.backend()`,
//!    `.degrade_missing_backend()`).
//! 3. Call `.build()` to obtain an [`ArraySorter`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::engine::provider::{HostProvider, NullProvider, Operation, SortProvider};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::backend::Backend;
pub use crate::primitives::dtype::{DType, SortElement};
pub use crate::primitives::errors::SortError;
pub use crate::primitives::shape::{KeyMatrix, Shape};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an [`ArraySorter`].
#[derive(Debug, Clone, Default)]
pub struct SorterBuilder {
    /// Execution backend selection.
    pub backend: Option<Backend>,

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
        let degrade = self.degrade_missing_backend.unwrap_or(false);

        // The core crate carries no accelerated providers; GPU resolves
        // to the no-op provider only under explicit degradation.
        let provider = match backend {
            Backend::CPU => CoreProvider::Host(HostProvider),
            Backend::GPU if degrade => CoreProvider::Null(NullProvider),
            Backend::GPU => {
                return Err(SortError::BackendUnavailable {
                    backend: backend.as_str(),
                })
            }
        };

        Ok(ArraySorter {
            executor: SortExecutor::new(provider),
            backend,
        })
    }
}

// ============================================================================
// Core provider selection
// ============================================================================

/// The providers the core crate can resolve to.
#[derive(Debug, Clone, Copy)]
pub enum CoreProvider {
    /// Reference host kernels.
    Host(HostProvider),
    /// Inert no-op provider.
    Null(NullProvider),
}

impl SortProvider for CoreProvider {
    fn name(&self) -> &'static str {
        match self {
            CoreProvider::Host(p) => p.name(),
            CoreProvider::Null(p) => p.name(),
        }
    }

    fn supports(&self, op: Operation, dtype: DType, shape: Option<&Shape>) -> bool {
        match self {
            CoreProvider::Host(p) => p.supports(op, dtype, shape),
            CoreProvider::Null(p) => p.supports(op, dtype, shape),
        }
    }

    fn sort<T: SortElement>(&mut self, data: &mut [T], shape: &Shape) -> Result<(), SortError> {
        match self {
            CoreProvider::Host(p) => p.sort(data, shape),
            CoreProvider::Null(p) => p.sort(data, shape),
        }
    }

    fn argsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        match self {
            CoreProvider::Host(p) => p.argsort(indices, data, shape),
            CoreProvider::Null(p) => p.argsort(indices, data, shape),
        }
    }

    fn lexsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        match self {
            CoreProvider::Host(p) => p.lexsort(indices, keys),
            CoreProvider::Null(p) => p.lexsort(indices, keys),
        }
    }

    fn synchronize(&mut self) -> Result<(), SortError> {
        match self {
            CoreProvider::Host(p) => p.synchronize(),
            CoreProvider::Null(p) => p.synchronize(),
        }
    }
}

// ============================================================================
// ArraySorter
// ============================================================================

/// Configured sorting handle.
///
/// One handle serves every element type; the dtype is carried by the
/// call, not the handle.
#[derive(Debug)]
pub struct ArraySorter {
    executor: SortExecutor<CoreProvider>,
    backend: Backend,
}

impl ArraySorter {
    /// Sort every last-axis segment of `data` ascending, in place.
    pub fn sort<T: SortElement>(
        &mut self,
        data: &mut [T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        self.executor.sort(data, shape)
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

    /// Compute each segment's stable ascending permutation.
    pub fn argsort<T: SortElement>(
        &mut self,
        data: &[T],
        shape: &Shape,
    ) -> Result<Vec<usize>, SortError> {
        Validator::validate_data(data.len(), shape)?;
        let mut indices = vec![0usize; data.len()];
        self.executor.argsort(&mut indices, data, shape)?;
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
