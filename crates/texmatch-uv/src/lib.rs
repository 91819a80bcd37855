//! UV-space analysis for geometry-aware recoloring.
//!
//! Rasterizes a mesh's UV triangles into an [`OccupancyMask`] so that
//! reference statistics only see texels the geometry actually samples, and
//! resolves which material slot binds a given texture.
//!
//! # Architecture
//!
//! ```text
//! GeometryAccessor ──> raster ──> OccupancyMask ──> statistics mask
//! MaterialAccessor ──> resolve ──> slot index
//! ```
//!
//! # Dependencies
//!
//! - `texmatch-core`: mask/accessor types
//! - `glam`: 2D vector math for the rasterizer
//!
//! # Used By
//!
//! - `texmatch-tests`: end-to-end recoloring scenarios

#![warn(missing_docs)]

pub mod raster;
pub mod resolve;

pub use raster::{build_occupancy_mask, build_occupancy_mask_for, RasterMode};
pub use resolve::find_material_slot_using_texture;
