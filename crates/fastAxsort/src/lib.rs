//! # fastAxsort — Accelerated Array Sorting
//!
//! Accelerated execution for [`axsort`]: the same stable `sort`,
//! `argsort`, and `lexsort` operations behind the same builder API, with
//! data-parallel CPU execution by default and a wgpu compute provider
//! behind the `gpu` feature.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastAxsort::prelude::*;
//! use ndarray::Array2;
//!
//! let mut data = Array2::from_shape_vec((2, 3), vec![9.0, 7.0, 8.0, 3.0, 1.0, 2.0])?;
//!
//! // Build the sorter with parallel execution (default)
//! let mut sorter = Sorter::new().backend(CPU).build()?;
//!
//! // Sort each row in place
//! sorter.sort(&mut data)?;
//!
//! assert_eq!(data.as_slice().unwrap(), &[7.0, 8.0, 9.0, 1.0, 2.0, 3.0]);
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! ## Backends
//!
//! * **CPU** (default) — rayon data-parallel execution across segments;
//!   `.parallel(false)` pins the reference single-threaded path.
//! * **GPU** (`gpu` feature) — a wgpu compute provider sorting
//!   order-preserving 32-bit key encodings with a bitonic network. The
//!   provider declares its capabilities per call; anything outside them
//!   (lexsort, wide dtypes, multi-segment arrays) transparently runs on
//!   the CPU path, with a `tracing` event marking the fallback.
//!
//! Building with `.backend(GPU)` but without the `gpu` feature fails
//! unless `.degrade_missing_backend(true)` is set, in which case the
//! inert no-op provider is substituted: calls succeed, outputs stay
//! unwritten. That is the link-compatibility contract for platforms
//! without an accelerator — see the `axsort` documentation.
//!
//! ## ndarray Integration
//!
//! `fastAxsort` accepts `ndarray` arrays of any dimension (contiguous,
//! standard layout) as well as slices and vectors; shapes are derived
//! from the input, and the sort axis is always the last one.
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, SortError>`; the `?` operator is
//! idiomatic.

#![allow(non_snake_case)]

/// GPU-accelerated execution provider.
#[cfg(feature = "gpu")]
pub mod gpu {
    pub use crate::engine::gpu::GpuProvider;
}

// Engine - providers and backend selection.
mod engine;

// High-level fluent API for accelerated sorting.
mod api;

// Input data handling.
mod input;

// Standard fastAxsort prelude.
pub mod prelude {
    pub use crate::api::{
        ArraySorter,
        Backend::{CPU, GPU},
        DType, KeyMatrix, Shape, SortElement, SortError, SorterBuilder as Sorter,
    };
    pub use crate::input::{SortInput, SortInputMut};
}
