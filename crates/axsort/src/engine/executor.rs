//! Validate-then-dispatch execution control.
//!
//! ## Purpose
//!
//! This module provides `SortExecutor`, the orchestration shell around a
//! provider: it validates caller geometry, then hands the operation to
//! the provider it owns. The public `ArraySorter` handle is a thin
//! wrapper over this type.
//!
//! ## Design notes
//!
//! * **Sequencing**: Validation always runs, regardless of provider —
//!   even the inert provider rejects malformed geometry, so degraded
//!   builds fail loudly on caller bugs the engine can detect.
//! * **Generic ownership**: The executor is generic over its provider so
//!   extension crates can slot composite providers (capability fallback,
//!   instrumentation) into the same shell.
//!
//! ## Invariants
//!
//! * Providers only ever see geometry-consistent inputs.
//! * The executor holds exactly one provider for its lifetime.
//!
//! ## Non-goals
//!
//! * This module does not choose providers (the builder does).
//! * This module does not implement sorting (providers do).

// Internal dependencies
use crate::engine::provider::SortProvider;
use crate::engine::validator::Validator;
use crate::primitives::dtype::SortElement;
use crate::primitives::errors::SortError;
use crate::primitives::shape::{KeyMatrix, Shape};

// ============================================================================
// SortExecutor
// ============================================================================

/// Orchestration shell owning a provider and running validation before
/// every dispatch.
#[derive(Debug)]
pub struct SortExecutor<P> {
    provider: P,
}

impl<P: SortProvider> SortExecutor<P> {
    /// Wrap a provider in an executor.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The provider this executor dispatches to.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Sort every last-axis segment of `data` ascending, in place.
    pub fn sort<T: SortElement>(
        &mut self,
        data: &mut [T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        Validator::validate_data(data.len(), shape)?;
        self.provider.sort(data, shape)
    }

    /// Write each segment's stable ascending permutation into `indices`.
    pub fn argsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        data: &[T],
        shape: &Shape,
    ) -> Result<(), SortError> {
        Validator::validate_data(data.len(), shape)?;
        Validator::validate_indices(indices.len(), data.len())?;
        self.provider.argsort(indices, data, shape)
    }

    /// Write the stable lexicographic permutation of the key matrix
    /// columns into `indices`.
    pub fn lexsort<T: SortElement>(
        &mut self,
        indices: &mut [usize],
        keys: &KeyMatrix<'_, T>,
    ) -> Result<(), SortError> {
        Validator::validate_indices(indices.len(), keys.columns())?;
        self.provider.lexsort(indices, keys)
    }

    /// Drain any asynchronous provider work.
    pub fn synchronize(&mut self) -> Result<(), SortError> {
        self.provider.synchronize()
    }
}
