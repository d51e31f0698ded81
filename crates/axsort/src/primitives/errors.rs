//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while
//! validating and executing sort, argsort, and lexsort operations,
//! including geometry mismatches, unsupported capabilities, and device
//! failures surfaced by accelerated providers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (expected vs. got
//!   lengths, the offending axis or code).
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//! * **Trait Implementation**: Implements `Display` and
//!   `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Geometry validation**: Empty input, shape/buffer mismatches,
//!    malformed key matrices, wrong index buffer lengths.
//! 2. **Capability**: A provider declining an operation it cannot run.
//! 3. **Device faults**: Adapter/device acquisition or transfer failures
//!    reported by accelerated providers.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::dtype::DType;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SortError {
    /// Input is empty; sorting requires at least one element.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Buffer length does not match the element count implied by the shape.
    MismatchedLength {
        /// Element count implied by the shape.
        expected: usize,
        /// Number of elements in the buffer.
        got: usize,
    },

    /// A shape dimension is zero.
    ZeroDimension {
        /// Index of the zero-sized axis.
        axis: usize,
    },

    /// Numeric dtype code does not name a supported element type.
    InvalidDTypeCode(i32),

    /// Index output buffer has the wrong length.
    InvalidIndexBuffer {
        /// Required index count.
        expected: usize,
        /// Number of slots in the buffer.
        got: usize,
    },

    /// Key buffer length does not match the stated matrix geometry.
    InvalidKeyMatrix {
        /// Number of key rows.
        rows: usize,
        /// Number of columns per row.
        columns: usize,
        /// Number of elements in the key buffer.
        len: usize,
    },

    /// Provider cannot execute the requested operation for this input.
    UnsupportedOperation {
        /// Name of the provider (e.g., "null", "gpu").
        provider: &'static str,
        /// Name of the operation (e.g., "lexsort").
        operation: &'static str,
        /// Element type of the request.
        dtype: DType,
    },

    /// Requested backend is not compiled into or reachable from this build.
    BackendUnavailable {
        /// Name of the backend (e.g., "GPU").
        backend: &'static str,
    },

    /// Failure reported by an accelerated provider's device layer.
    DeviceError(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MismatchedLength { expected, got } => {
                write!(
                    f,
                    "Length mismatch: shape implies {expected} elements, buffer has {got}"
                )
            }
            Self::ZeroDimension { axis } => {
                write!(f, "Invalid shape: dimension {axis} has size 0")
            }
            Self::InvalidDTypeCode(code) => {
                write!(f, "Invalid dtype code: {code}")
            }
            Self::InvalidIndexBuffer { expected, got } => {
                write!(
                    f,
                    "Invalid index buffer: need {expected} slots, got {got}"
                )
            }
            Self::InvalidKeyMatrix { rows, columns, len } => {
                write!(
                    f,
                    "Invalid key matrix: {rows}x{columns} geometry needs {} elements, buffer has {len}",
                    rows * columns
                )
            }
            Self::UnsupportedOperation {
                provider,
                operation,
                dtype,
            } => {
                write!(
                    f,
                    "Provider '{provider}' does not support {operation} for dtype {}",
                    dtype.as_str()
                )
            }
            Self::BackendUnavailable { backend } => {
                write!(f, "Backend '{backend}' is not available in this build")
            }
            Self::DeviceError(msg) => write!(f, "Device error: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
