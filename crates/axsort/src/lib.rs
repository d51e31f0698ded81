//! # axsort — Axis-Wise Array Sorting for Rust
//!
//! Stable `sort`, `argsort`, and `lexsort` over multi-dimensional arrays,
//! built around a pluggable execution-provider seam so the same operations
//! can run on a reference host path, a data-parallel path, or an
//! accelerator — or be compiled down to a deliberate no-op on platforms
//! without one.
//!
//! ## What does it do?
//!
//! An N-dimensional, row-major array is treated as a batch of contiguous
//! segments (the rows along its last axis). `sort` orders each segment in
//! place, `argsort` produces the permutation that would order each segment,
//! and `lexsort` produces the single permutation ordering the columns of a
//! multi-row key matrix lexicographically (last key row is the primary
//! key). All three are stable; float NaN values order after every other
//! value.
//!
//! ## Quick Start
//!
//! ```rust
//! use axsort::prelude::*;
//!
//! let mut data = vec![3.0_f64, 1.0, 2.0, 9.0, 7.0, 8.0];
//! let shape = Shape::new(&[2, 3])?; // two segments of three elements
//!
//! let mut sorter = Sorter::new().backend(CPU).build()?;
//! sorter.sort(&mut data, &shape)?;
//!
//! assert_eq!(data, vec![1.0, 2.0, 3.0, 7.0, 8.0, 9.0]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! Index-returning variants follow the same pattern:
//!
//! ```rust
//! use axsort::prelude::*;
//!
//! let data = vec![30_i32, 10, 20];
//! let shape = Shape::vector(3)?;
//!
//! let mut sorter = Sorter::new().build()?;
//! let perm = sorter.argsort(&data, &shape)?;
//!
//! assert_eq!(perm, vec![1, 2, 0]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, SortError>`; the `?` operator is
//! idiomatic. Validation is fail-fast: shape/buffer mismatches, zero
//! dimensions, and malformed key matrices are rejected before any
//! provider work is dispatched.
//!
//! ## Degraded builds
//!
//! The no-op provider exists for builds that must link and run on
//! platforms without an accelerator: it accepts every operation with the
//! same signatures, performs no computation, and writes nothing. Opt in
//! via `.degrade_missing_backend(true)` — silently unwritten output is a
//! documented footgun, not a default.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! axsort = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - the stable segmented sorting kernels.
mod algorithms;

// Layer 3: Engine - providers, validation, and execution control.
mod engine;

// High-level fluent API for array sorting.
mod api;

// Standard axsort prelude.
pub mod prelude {
    pub use crate::api::{
        ArraySorter,
        Backend::{CPU, GPU},
        DType, KeyMatrix, Shape, SortElement, SortError, SorterBuilder as Sorter,
    };
}

// Internal modules for extension crates and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
