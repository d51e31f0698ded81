//! Execution backend configuration.
//!
//! ## Purpose
//!
//! This module defines the `Backend` enum used by the builder (and by
//! extension crates such as `fastAxsort`) to select computational
//! backends at runtime. The core `axsort` crate implements no GPU path
//! itself; requesting one here either fails at build time or resolves to
//! the no-op provider when degradation is explicitly requested.
//!
//! ## Design notes
//!
//! * **Extension-focused**: The GPU variant exists so downstream crates
//!   can accept the same builder configuration.
//! * **Explicit degradation**: Unavailable backends never silently swap
//!   in the no-op provider unless the caller opted in.
//!
//! ## Key concepts
//!
//! * **CPU**: Default execution mode (the reference host kernels).
//! * **GPU**: Hardware accelerated mode (requires an extension crate
//!   with device support).
//!
//! ## Invariants
//!
//! * The default backend is always `CPU`.
//!
//! ## Non-goals
//!
//! * This module does not provide GPU implementations.

/// Execution backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum Backend {
    /// CPU execution (reference kernels; extension crates may parallelize).
    #[default]
    CPU,

    /// GPU execution (requires an extension crate with device support).
    GPU,
}

impl Backend {
    /// Returns a human-readable label for this backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::CPU => "CPU",
            Backend::GPU => "GPU",
        }
    }
}
