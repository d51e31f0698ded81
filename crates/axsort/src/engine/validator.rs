//! Input validation for sorting operations.
//!
//! ## Purpose
//!
//! This module provides the validation functions the executor runs
//! before dispatching to a provider. It checks buffer lengths against
//! shape geometry and index buffers against their required lengths.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; none of
//!   them touch element values.
//! * **Single authority**: Providers trust validated geometry and never
//!   re-check it.
//!
//! ## Key concepts
//!
//! * **Geometry consistency**: A buffer is valid for a shape when its
//!   element count equals the shape's element product.
//! * **Index capacity**: Index buffers must have exactly one slot per
//!   element being permuted.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * Shapes and key matrices are internally consistent on construction;
//!   the validator only relates them to caller buffers.
//!
//! ## Non-goals
//!
//! * This module does not inspect element values (NaN is legal input).
//! * This module does not sort or transform data.

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::shape::Shape;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorting inputs.
///
/// Provides static methods relating caller buffers to the geometry they
/// claim. All methods return `Result<(), SortError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a data buffer against its shape.
    pub fn validate_data(data_len: usize, shape: &Shape) -> Result<(), SortError> {
        // Check 1: Non-empty buffer
        if data_len == 0 {
            return Err(SortError::EmptyInput);
        }

        // Check 2: Shape/buffer agreement
        let expected = shape.len();
        if data_len != expected {
            return Err(SortError::MismatchedLength {
                expected,
                got: data_len,
            });
        }

        Ok(())
    }

    /// Validate an index output buffer against its required length.
    pub fn validate_indices(indices_len: usize, expected: usize) -> Result<(), SortError> {
        if indices_len != expected {
            return Err(SortError::InvalidIndexBuffer {
                expected,
                got: indices_len,
            });
        }
        Ok(())
    }
}
