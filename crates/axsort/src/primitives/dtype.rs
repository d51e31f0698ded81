//! Element type tags and the element comparison seam.
//!
//! ## Purpose
//!
//! This module defines the `DType` tag identifying the element type of a
//! caller buffer, and the `SortElement` trait binding concrete Rust types
//! to their tag and to the total ordering the sorting kernels use.
//!
//! ## Design notes
//!
//! * **Stable codes**: Each tag has a fixed numeric code so foreign
//!   callers can name types without referring to Rust generics.
//! * **Total order**: `SortElement::sort_cmp` is a total order even for
//!   floats; kernels never need to reason about partial comparison.
//! * **No-std**: Uses `num_traits::float::FloatCore` so float
//!   classification works without the standard library.
//!
//! ## Key concepts
//!
//! * **NaN-last**: For float types, NaN orders after every non-NaN value
//!   and NaNs compare equal to each other, so they collect at the end of
//!   a sorted segment in first-seen order (stable kernels preserve it).
//!
//! ## Invariants
//!
//! * `DType::from_code(t.code()) == Ok(t)` for every tag.
//! * `sort_cmp` is reflexive-equal, antisymmetric, and transitive.
//!
//! ## Non-goals
//!
//! * This module does not define complex, boolean, or half-precision
//!   tags; unknown codes are rejected by `from_code`.

// External dependencies
use core::cmp::Ordering;
use num_traits::float::FloatCore;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// DType
// ============================================================================

/// Enumerates the element types the sorting engine can operate on.
///
/// Providers use `DType` to decide memory layout and which compute path
/// to dispatch; the engine uses it for capability checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit unsigned integer.
    U64,
    /// 32-bit IEEE 754 floating point.
    F32,
    /// 64-bit IEEE 754 floating point.
    F64,
}

impl DType {
    /// All supported tags, in code order.
    pub const ALL: [DType; 10] = [
        DType::I8,
        DType::I16,
        DType::I32,
        DType::I64,
        DType::U8,
        DType::U16,
        DType::U32,
        DType::U64,
        DType::F32,
        DType::F64,
    ];

    /// Resolve a stable numeric code to a tag.
    pub fn from_code(code: i32) -> Result<Self, SortError> {
        match code {
            0 => Ok(DType::I8),
            1 => Ok(DType::I16),
            2 => Ok(DType::I32),
            3 => Ok(DType::I64),
            4 => Ok(DType::U8),
            5 => Ok(DType::U16),
            6 => Ok(DType::U32),
            7 => Ok(DType::U64),
            8 => Ok(DType::F32),
            9 => Ok(DType::F64),
            _ => Err(SortError::InvalidDTypeCode(code)),
        }
    }

    /// Returns the stable numeric code for this tag.
    pub fn code(self) -> i32 {
        match self {
            DType::I8 => 0,
            DType::I16 => 1,
            DType::I32 => 2,
            DType::I64 => 3,
            DType::U8 => 4,
            DType::U16 => 5,
            DType::U32 => 6,
            DType::U64 => 7,
            DType::F32 => 8,
            DType::F64 => 9,
        }
    }

    /// Returns the size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::I32 | DType::U32 | DType::F32 => 4,
            DType::I64 | DType::U64 | DType::F64 => 8,
        }
    }

    /// Returns a human-readable label for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::F32 => "f32",
            DType::F64 => "f64",
        }
    }

    /// True for the floating-point tags.
    pub fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}

// ============================================================================
// SortElement
// ============================================================================

/// Trait for element types the sorting kernels operate on.
///
/// Binds a concrete Rust type to its [`DType`] tag and to the total order
/// used throughout the engine.
pub trait SortElement: Copy + PartialOrd + Send + Sync + 'static {
    /// The tag describing this element type.
    const DTYPE: DType;

    /// Total-order comparison used by every sorting kernel.
    ///
    /// For floats this is the NaN-last order described in the module
    /// docs; for integers it is the natural order.
    fn sort_cmp(&self, other: &Self) -> Ordering;

    /// Order-preserving 32-bit key encoding, if this type has one.
    ///
    /// Accelerated providers sort encoded keys instead of raw values;
    /// `a.sort_cmp(&b)` must agree with `a.to_key32().cmp(&b.to_key32())`
    /// wherever both encodings exist. Float NaN collapses to the maximal
    /// key. Types wider than 32 bits return `None` and stay on the host
    /// path.
    fn to_key32(self) -> Option<u32> {
        None
    }

    /// Inverse of [`SortElement::to_key32`].
    ///
    /// Returns `None` for types without a 32-bit encoding. NaN decodes
    /// to the canonical quiet NaN (payloads are not preserved).
    fn from_key32(bits: u32) -> Option<Self> {
        let _ = bits;
        None
    }
}

macro_rules! impl_int_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl SortElement for $ty {
                const DTYPE: DType = DType::$tag;

                #[inline]
                fn sort_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl SortElement for $ty {
                const DTYPE: DType = DType::$tag;

                #[inline]
                fn sort_cmp(&self, other: &Self) -> Ordering {
                    // NaN-last total order: every NaN sorts after every
                    // non-NaN, and NaNs are mutually equal.
                    match (FloatCore::is_nan(*self), FloatCore::is_nan(*other)) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        (false, false) => {
                            self.partial_cmp(other).unwrap_or(Ordering::Equal)
                        }
                    }
                }
            }
        )*
    };
}

impl_int_element!(
    i8 => I8,
    i16 => I16,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u64 => U64,
);

impl_float_element!(
    f64 => F64,
);

// The three 32-bit types carry order-preserving key encodings; their
// comparison bodies match the macros above.

impl SortElement for u32 {
    const DTYPE: DType = DType::U32;

    #[inline]
    fn sort_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    #[inline]
    fn to_key32(self) -> Option<u32> {
        Some(self)
    }

    #[inline]
    fn from_key32(bits: u32) -> Option<Self> {
        Some(bits)
    }
}

impl SortElement for i32 {
    const DTYPE: DType = DType::I32;

    #[inline]
    fn sort_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    #[inline]
    fn to_key32(self) -> Option<u32> {
        // Bias the sign so the unsigned order matches the signed order.
        Some((self as u32) ^ 0x8000_0000)
    }

    #[inline]
    fn from_key32(bits: u32) -> Option<Self> {
        Some((bits ^ 0x8000_0000) as i32)
    }
}

impl SortElement for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (FloatCore::is_nan(*self), FloatCore::is_nan(*other)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
        }
    }

    #[inline]
    fn to_key32(self) -> Option<u32> {
        // Sign-flip encoding: negatives invert, positives set the top
        // bit. NaN collapses to the maximal key so it lands after +inf.
        if FloatCore::is_nan(self) {
            return Some(u32::MAX);
        }
        let bits = self.to_bits();
        if bits & 0x8000_0000 != 0 {
            Some(!bits)
        } else {
            Some(bits | 0x8000_0000)
        }
    }

    #[inline]
    fn from_key32(bits: u32) -> Option<Self> {
        if bits == u32::MAX {
            return Some(f32::NAN);
        }
        if bits & 0x8000_0000 != 0 {
            Some(f32::from_bits(bits & 0x7FFF_FFFF))
        } else {
            Some(f32::from_bits(!bits))
        }
    }
}
