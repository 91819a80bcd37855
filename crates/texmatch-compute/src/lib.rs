//! # texmatch-compute
//!
//! Data-parallel statistics reduction and transfer kernels.
//!
//! Implements the same mathematical contract as `texmatch-stats` via a
//! tiled two-phase reduction suitable for wide parallel execution:
//!
//! ```text
//! TransferProcessor (capability probing + fallback)
//!     └── ReduceKernels trait
//!             ├── ParallelKernels (rayon, feature "parallel")
//!             └── ScalarKernels  (single-threaded emulation)
//! ```
//!
//! - **Phase 1 (mean)**: each tile accumulates partial f64 channel sums and
//!   an eligible count; a final combine divides total sum by total count.
//! - **Phase 2 (variance)**: takes the fully-reduced phase-1 mean by value
//!   (a hard barrier) and accumulates squared deviations against it.
//! - **Phase 3 (transfer)**: independent per-pixel map.
//!
//! On identical inputs the two backends, and the sequential engine, agree
//! within 1e-3 absolute per channel.
//!
//! # Example
//!
//! ```rust
//! use texmatch_compute::{compute_statistics_parallel, is_parallel_available};
//! use texmatch_core::PixelBuffer;
//!
//! let buf = PixelBuffer::filled(64, 64, [0.4, 0.5, 0.6, 1.0]);
//! if is_parallel_available() {
//!     let stats = compute_statistics_parallel(&buf, 0.0, None).unwrap();
//!     assert_eq!(stats.count, 64 * 64);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;
pub mod kernels;
pub mod processor;
pub mod reduce;
pub mod scalar;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use backend::{create_kernels, detect_backends, select_best_backend, Backend, BackendInfo};
pub use kernels::{generate_tiles, DeviationPartial, ReduceKernels, SumPartial, Tile, DEFAULT_TILE_DIM};
pub use processor::TransferProcessor;
pub use reduce::{
    apply_transfer_parallel, apply_transfer_with, compute_statistics_parallel,
    compute_statistics_with, is_parallel_available,
};
pub use scalar::ScalarKernels;

#[cfg(feature = "parallel")]
pub use parallel::ParallelKernels;

use thiserror::Error;

/// Errors from the parallel engine.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// The requested backend is not compiled in or cannot run here.
    ///
    /// Recoverable: callers fall back to [`ScalarKernels`] or to the
    /// sequential engine with no interface change.
    #[error("backend not available: {0}")]
    BackendUnavailable(String),

    /// Input validation or statistics failure from the shared core.
    #[error(transparent)]
    Core(#[from] texmatch_core::Error),
}

impl ComputeError {
    /// Returns `true` if this failure can be recovered by selecting
    /// another backend.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_))
    }
}

/// Result type alias using [`ComputeError`].
pub type ComputeResult<T> = Result<T, ComputeError>;
