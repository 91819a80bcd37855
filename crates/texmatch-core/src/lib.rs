//! # texmatch-core
//!
//! Core types for geometry-aware statistical texture recoloring.
//!
//! This crate provides the foundational types used throughout the texmatch
//! workspace:
//!
//! - [`PixelBuffer`] - Row-major RGBA f32 image buffer
//! - [`OccupancyMask`] - Per-texel UV-occupancy grid
//! - [`ColorStatistics`] - Per-Lab-channel mean/stddev over an eligible pixel set
//! - [`TransferConfig`] - Per-invocation transfer parameters
//! - [`MaterialSlot`], [`TextureKey`] - Transient material-binding descriptors
//! - Accessor traits for host-owned assets ([`PixelAccessor`],
//!   [`GeometryAccessor`], [`MaterialAccessor`])
//!
//! ## Ownership model
//!
//! All buffers and masks are caller-owned. Engines built on top of this crate
//! never retain references across calls and never mutate their inputs unless
//! an operation is explicitly in-place.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies:
//!
//! ```text
//! texmatch-core (this crate)
//!    ^
//!    |
//!    +-- texmatch-color (Lab/HSV color math)
//!    +-- texmatch-stats (sequential statistics + transfer)
//!    +-- texmatch-compute (tiled parallel reduction)
//!    +-- texmatch-uv (UV occupancy, slot resolution)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for config and statistics value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accessor;
pub mod buffer;
pub mod config;
pub mod error;
pub mod mask;
pub mod material;
pub mod stats;

pub use accessor::{GeometryAccessor, MaterialAccessor, MemoryMesh, MemoryRenderer, MemoryTexture, PixelAccessor};
pub use buffer::{PixelBuffer, CHANNELS};
pub use config::TransferConfig;
pub use error::{Error, Result};
pub use mask::OccupancyMask;
pub use material::{MaterialSlot, TextureKey};
pub use stats::{ChannelStats, ColorStatistics};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use texmatch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::accessor::{GeometryAccessor, MaterialAccessor, PixelAccessor};
    pub use crate::buffer::PixelBuffer;
    pub use crate::config::TransferConfig;
    pub use crate::error::{Error, Result};
    pub use crate::mask::OccupancyMask;
    pub use crate::material::{MaterialSlot, TextureKey};
    pub use crate::stats::{ChannelStats, ColorStatistics};
}
