//! # texmatch-color
//!
//! Color-space math for statistical texture recoloring.
//!
//! Pure, stateless conversion functions with no side effects and no I/O:
//!
//! - [`srgb`] - sRGB piecewise transfer function (EOTF/OETF)
//! - [`xyz`] - sRGB <-> CIE XYZ via the standard D65 matrices
//! - [`lab`] - XYZ <-> CIE L\*a\*b\* and the composed RGB <-> Lab path
//! - [`hsv`] - hexagonal RGB <-> HSV
//!
//! # Round-trip guarantee
//!
//! For any RGB in [0,1]^3, `lab::lab_to_rgb(lab::rgb_to_lab(c))` reproduces
//! `c` within 1e-3 per channel. `lab_to_rgb` clamps its output to [0,1];
//! for out-of-gamut Lab values this truncation is deliberate and lossy.
//!
//! # Dependencies
//!
//! - [`glam`] - 3x3 matrices and vectors for the XYZ transforms
//!
//! # Used By
//!
//! - `texmatch-stats` - Lab conversion for statistics and transfer
//! - `texmatch-compute` - same math on the parallel path

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hsv;
pub mod lab;
pub mod srgb;
pub mod xyz;

pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use lab::{lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab};
pub use xyz::{rgb_to_xyz, xyz_to_rgb};
