//! Layer 2: Algorithms
//!
//! This layer implements the stable sorting kernels: in-place segment
//! sorting, index-producing argsort, and multi-key lexsort. It contains
//! the ordering logic of the crate but is orchestrated by the engine
//! layer; kernels assume geometry has already been validated.

// In-place stable sorting of last-axis segments.
pub mod sort;

// Index-producing stable sort of last-axis segments.
pub mod argsort;

// Stable lexicographic ordering over multi-row key matrices.
pub mod lexsort;
