//! sRGB <-> CIE XYZ conversion.
//!
//! Gamma handling and the standard sRGB matrices (D65 white, IEC
//! 61966-2-1). Input RGB is display-referred (gamma-encoded); the
//! conversion linearizes through [`crate::srgb`] before the matrix.
//!
//! All matrix math uses [`glam`]; the matrices are stored column-major as
//! glam requires, written out here column by column.

use glam::{Mat3, Vec3};

use crate::srgb;

/// Linear sRGB -> XYZ (D65), column-major.
const RGB_TO_XYZ: Mat3 = Mat3::from_cols(
    Vec3::new(0.412_456_4, 0.212_672_9, 0.019_333_9),
    Vec3::new(0.357_576_1, 0.715_152_2, 0.119_192_0),
    Vec3::new(0.180_437_5, 0.072_175_0, 0.950_304_1),
);

/// XYZ (D65) -> linear sRGB, column-major.
const XYZ_TO_RGB: Mat3 = Mat3::from_cols(
    Vec3::new(3.240_454_2, -0.969_266_0, 0.055_643_4),
    Vec3::new(-1.537_138_5, 1.876_010_8, -0.204_025_9),
    Vec3::new(-0.498_531_4, 0.041_556_0, 1.057_225_2),
);

/// Converts gamma-encoded sRGB to CIE XYZ.
///
/// # Example
///
/// ```rust
/// use texmatch_color::xyz::rgb_to_xyz;
///
/// // White maps to the D65 white point.
/// let white = rgb_to_xyz([1.0, 1.0, 1.0]);
/// assert!((white[0] - 0.95047).abs() < 1e-3);
/// assert!((white[1] - 1.0).abs() < 1e-3);
/// assert!((white[2] - 1.08883).abs() < 1e-3);
/// ```
#[inline]
pub fn rgb_to_xyz(rgb: [f32; 3]) -> [f32; 3] {
    let linear = srgb::eotf_rgb(rgb);
    let xyz = RGB_TO_XYZ * Vec3::from_array(linear);
    xyz.to_array()
}

/// Converts CIE XYZ to gamma-encoded sRGB.
///
/// Linear RGB is clamped to [0, 1] before encoding; out-of-gamut XYZ
/// values truncate to the gamut boundary.
#[inline]
pub fn xyz_to_rgb(xyz: [f32; 3]) -> [f32; 3] {
    let linear = XYZ_TO_RGB * Vec3::from_array(xyz);
    let clamped = linear.clamp(Vec3::ZERO, Vec3::ONE);
    srgb::oetf_rgb(clamped.to_array())
}
