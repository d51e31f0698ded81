//! Engine layer
//!
//! This layer provides the accelerated execution providers for sorting.
//! It handles backend selection, capability-checked dispatch, and the
//! distribution of compute across CPU cores or GPU hardware.

// Backend selection and the data-parallel CPU provider.
pub mod executor;

// GPU-accelerated execution provider using wgpu.
#[cfg(feature = "gpu")]
pub mod gpu;
