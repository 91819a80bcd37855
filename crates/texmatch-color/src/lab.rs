//! CIE L\*a\*b\* conversion.
//!
//! Derived from XYZ with the D65 illuminant. The CIE f(t) function uses the
//! (6/29)^3 breakpoint: cube root above it, a linear segment below it, so
//! the conversion has no singularity or NaN near zero.
//!
//! # Ranges
//!
//! - L\* in [0, 100], a\*/b\* roughly [-128, 127] for in-gamut sRGB
//!
//! # Reference
//!
//! CIE 15:2004

use crate::xyz;

/// D65 reference white, X component.
const XN: f32 = 0.95047;
/// D65 reference white, Y component.
const YN: f32 = 1.0;
/// D65 reference white, Z component.
const ZN: f32 = 1.08883;

/// CIE breakpoint (6/29)^3.
const EPSILON: f32 = 216.0 / 24389.0;
/// CIE linear-segment slope, 24389/27.
const KAPPA: f32 = 24389.0 / 27.0;

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

/// Converts CIE XYZ (D65) to L\*a\*b\*.
#[inline]
pub fn xyz_to_lab(xyz: [f32; 3]) -> [f32; 3] {
    let fx = lab_f(xyz[0] / XN);
    let fy = lab_f(xyz[1] / YN);
    let fz = lab_f(xyz[2] / ZN);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Converts L\*a\*b\* to CIE XYZ (D65).
#[inline]
pub fn lab_to_xyz(lab: [f32; 3]) -> [f32; 3] {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = fy + lab[1] / 500.0;
    let fz = fy - lab[2] / 200.0;
    [XN * lab_f_inv(fx), YN * lab_f_inv(fy), ZN * lab_f_inv(fz)]
}

/// Converts gamma-encoded sRGB to L\*a\*b\*.
///
/// # Example
///
/// ```rust
/// use texmatch_color::lab::rgb_to_lab;
///
/// let [l, a, b] = rgb_to_lab([1.0, 1.0, 1.0]);
/// assert!((l - 100.0).abs() < 0.1);
/// assert!(a.abs() < 0.1 && b.abs() < 0.1);
/// ```
#[inline]
pub fn rgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    xyz_to_lab(xyz::rgb_to_xyz(rgb))
}

/// Converts L\*a\*b\* to gamma-encoded sRGB, clamped to [0, 1].
///
/// Out-of-gamut Lab values truncate to the sRGB gamut boundary. This is a
/// deliberate, lossy clamp: statistical transfer can push matched colors
/// outside the displayable range and they are brought back per channel.
#[inline]
pub fn lab_to_rgb(lab: [f32; 3]) -> [f32; 3] {
    xyz::xyz_to_rgb(lab_to_xyz(lab))
}
