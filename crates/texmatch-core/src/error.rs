//! Error types shared across the texmatch crates.
//!
//! The [`Error`] enum covers the failure modes of buffer construction,
//! occupancy masking, and statistics gathering. The taxonomy is deliberately
//! small:
//!
//! - **Invalid input**: [`InvalidDimensions`](Error::InvalidDimensions),
//!   [`SizeMismatch`](Error::SizeMismatch),
//!   [`MaskDimensionMismatch`](Error::MaskDimensionMismatch) - rejected before
//!   any partial work is performed.
//! - **Empty eligible set**: [`NoEligiblePixels`](Error::NoEligiblePixels) -
//!   surfaced to the caller instead of returning degenerate zero-variance
//!   statistics, which would silently corrupt a downstream transfer.
//! - **Allocation**: [`AllocationFailed`](Error::AllocationFailed) - reserved
//!   for intermediate-buffer exhaustion.
//!
//! Degenerate statistics (stddev near zero) are *not* an error: the transfer
//! math epsilon-guards the divisor instead.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or analyzing pixel data.
#[derive(Debug, Error)]
pub enum Error {
    /// Image dimensions are unusable for the requested operation.
    ///
    /// Returned for zero-area buffers where pixels are required, or for
    /// dimensions that would overflow buffer size calculations.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// Buffer length does not match `width * height * 4`.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch {
        /// Expected element count
        expected: usize,
        /// Actual element count
        actual: usize,
    },

    /// Occupancy mask dimensions differ from the pixel buffer dimensions.
    #[error("mask {mask_width}x{mask_height} does not match buffer {width}x{height}")]
    MaskDimensionMismatch {
        /// Mask width
        mask_width: u32,
        /// Mask height
        mask_height: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// No pixel passed the eligibility filter (alpha threshold and/or mask).
    ///
    /// Statistics over an empty set have no defined mean or deviation, so
    /// this is a caller-visible failure rather than a silent default.
    #[error("no eligible pixels (alpha threshold and occupancy mask excluded everything)")]
    NoEligiblePixels,

    /// An intermediate buffer could not be allocated.
    #[error("failed to allocate {requested} bytes: {reason}")]
    AllocationFailed {
        /// Bytes requested
        requested: usize,
        /// Failure reason
        reason: String,
    },

    /// A triangle index refers past the end of the UV array.
    #[error("triangle index {index} out of range for {vertex_count} UV vertices")]
    IndexOutOfRange {
        /// Offending index value
        index: u32,
        /// Number of UV vertices available
        vertex_count: usize,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::SizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Creates an [`Error::MaskDimensionMismatch`] error.
    #[inline]
    pub fn mask_mismatch(mask: (u32, u32), buffer: (u32, u32)) -> Self {
        Self::MaskDimensionMismatch {
            mask_width: mask.0,
            mask_height: mask.1,
            width: buffer.0,
            height: buffer.1,
        }
    }

    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: u32, vertex_count: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            vertex_count,
        }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this is an input-validation error.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::SizeMismatch { .. }
                | Self::MaskDimensionMismatch { .. }
                | Self::IndexOutOfRange { .. }
        )
    }

    /// Returns `true` if the eligible pixel set was empty.
    #[inline]
    pub fn is_no_eligible_pixels(&self) -> bool {
        matches!(self, Self::NoEligiblePixels)
    }
}
