//! Input abstractions for accelerated sorting.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction over sortable containers,
//! allowing the sorter to process multiple data formats (slices,
//! vectors, ndarray arrays of any dimension) through a single interface
//! that also carries the array's shape.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to underlying buffers.
//! * **Shape-carrying**: Multi-dimensional containers report their own
//!   shape; flat containers report a one-dimensional shape.
//! * **Fail-fast validation**: Memory continuity is checked before
//!   processing; non-contiguous arrays return an error.
//!
//! ## Key concepts
//!
//! * **SortInput**: Read access plus shape, for `argsort`.
//! * **SortInputMut**: Adds mutable access, for in-place `sort`.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in
//!   row-major order.
//!
//! ## Non-goals
//!
//! * This module does not copy, reshape, or clean data.

// External dependencies
use ndarray::{ArrayBase, Data, DataMut, Dimension};

// Export dependencies from axsort
use axsort::prelude::{Shape, SortElement, SortError};

/// Trait for containers that can be argsorted.
pub trait SortInput<T: SortElement> {
    /// The container's elements as one contiguous row-major slice.
    fn as_sort_slice(&self) -> Result<&[T], SortError>;

    /// The container's shape; flat containers are one-dimensional.
    fn sort_shape(&self) -> Result<Shape, SortError>;
}

/// Trait for containers that can be sorted in place.
pub trait SortInputMut<T: SortElement>: SortInput<T> {
    /// Mutable view of the container's elements.
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError>;
}

impl<T: SortElement> SortInput<T> for [T] {
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        Ok(self)
    }

    fn sort_shape(&self) -> Result<Shape, SortError> {
        Shape::vector(self.len())
    }
}

impl<T: SortElement> SortInputMut<T> for [T] {
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError> {
        Ok(self)
    }
}

impl<T: SortElement> SortInput<T> for Vec<T> {
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        Ok(self.as_slice())
    }

    fn sort_shape(&self) -> Result<Shape, SortError> {
        Shape::vector(self.len())
    }
}

impl<T: SortElement> SortInputMut<T> for Vec<T> {
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError> {
        Ok(self.as_mut_slice())
    }
}

impl<T: SortElement, S, D> SortInput<T> for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
{
    fn as_sort_slice(&self) -> Result<&[T], SortError> {
        self.as_slice().ok_or_else(|| {
            SortError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }

    fn sort_shape(&self) -> Result<Shape, SortError> {
        Shape::new(self.shape())
    }
}

impl<T: SortElement, S, D> SortInputMut<T> for ArrayBase<S, D>
where
    S: DataMut<Elem = T>,
    D: Dimension,
{
    fn as_sort_slice_mut(&mut self) -> Result<&mut [T], SortError> {
        self.as_slice_mut().ok_or_else(|| {
            SortError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
