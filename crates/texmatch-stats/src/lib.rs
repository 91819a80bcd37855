//! # texmatch-stats
//!
//! Sequential Lab-space statistics and moment-matching color transfer.
//!
//! This is the reference engine: single-threaded, deterministic,
//! synchronous, safe to call from any thread. The tiled-parallel engine in
//! `texmatch-compute` implements the identical mathematical contract and
//! must agree with this one within 1e-3 per channel.
//!
//! # Modules
//!
//! - [`statistics`] - per-channel mean/stddev over the eligible pixel set
//! - [`transfer`] - per-pixel moment matching and in-place buffer transfer
//!
//! # Example
//!
//! ```rust
//! use texmatch_core::{PixelBuffer, TransferConfig};
//! use texmatch_stats::{apply_transfer, compute_statistics};
//!
//! let mut target = PixelBuffer::filled(4, 4, [1.0, 0.0, 0.0, 1.0]);
//! let reference = PixelBuffer::filled(4, 4, [0.0, 0.0, 1.0, 1.0]);
//! let config = TransferConfig::default();
//!
//! let target_stats = compute_statistics(&target, config.alpha_threshold, None).unwrap();
//! let ref_stats = compute_statistics(&reference, config.alpha_threshold, None).unwrap();
//! apply_transfer(&mut target, &target_stats, &ref_stats, &config).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod statistics;
pub mod transfer;

pub use statistics::compute_statistics;
pub use transfer::{apply_transfer, transfer_pixel, STDDEV_EPSILON};
