//! Per-pixel moment-matching transfer.
//!
//! Reinhard-style statistics matching: each Lab channel of the target pixel
//! is normalized against the target distribution and rescaled to the
//! reference distribution, then blended with the original by the configured
//! intensity. This is moment matching, not bin-wise histogram equalization.

use texmatch_core::{ColorStatistics, PixelBuffer, Result, TransferConfig};
use texmatch_color::{lab_to_rgb, rgb_to_lab};

/// Divisor floor for near-zero standard deviations.
///
/// A uniform target (stddev 0) would otherwise divide by zero; clamping the
/// divisor maps every pixel to the reference mean instead of producing
/// NaN/Infinity. Degenerate statistics are handled here, never surfaced as
/// an error.
pub const STDDEV_EPSILON: f32 = 1e-4;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Recolors a single RGBA pixel by moment matching.
///
/// Pixels with alpha below `config.alpha_threshold` pass through unchanged,
/// mirroring the eligibility filter of the statistics pass. Alpha is always
/// preserved bit-exact; RGB output is clamped to [0, 1].
///
/// # Example
///
/// ```rust
/// use texmatch_core::{PixelBuffer, TransferConfig};
/// use texmatch_stats::{compute_statistics, transfer_pixel};
///
/// let buf = PixelBuffer::filled(2, 2, [0.5, 0.5, 0.5, 1.0]);
/// let stats = compute_statistics(&buf, 0.0, None).unwrap();
///
/// // Matching a distribution to itself is the identity.
/// let out = transfer_pixel([0.5, 0.5, 0.5, 1.0], &stats, &stats, &TransferConfig::default());
/// assert!((out[0] - 0.5).abs() < 1e-3);
/// ```
pub fn transfer_pixel(
    pixel: [f32; 4],
    target: &ColorStatistics,
    reference: &ColorStatistics,
    config: &TransferConfig,
) -> [f32; 4] {
    if pixel[3] < config.alpha_threshold {
        return pixel;
    }

    let lab = rgb_to_lab([pixel[0], pixel[1], pixel[2]]);
    let mut blended = [0.0f32; 3];
    for c in 0..3 {
        let t = target.channel(c);
        let r = reference.channel(c);
        let normalized = (lab[c] - t.mean) / t.stddev.max(STDDEV_EPSILON);
        let matched = normalized * r.stddev + r.mean;
        blended[c] = lerp(lab[c], matched, config.intensity);
    }
    if config.preserve_luminance {
        blended[0] = lab[0];
    }

    let rgb = lab_to_rgb(blended);
    [rgb[0], rgb[1], rgb[2], pixel[3]]
}

/// Applies the transfer to every pixel of `target` in place.
///
/// Sequential, deterministic. Statistics for both images must have been
/// computed with the same alpha threshold as `config` for the eligibility
/// filter to line up.
pub fn apply_transfer(
    target: &mut PixelBuffer,
    target_stats: &ColorStatistics,
    reference_stats: &ColorStatistics,
    config: &TransferConfig,
) -> Result<()> {
    for chunk in target.data_mut().chunks_exact_mut(4) {
        let pixel = [chunk[0], chunk[1], chunk[2], chunk[3]];
        let out = transfer_pixel(pixel, target_stats, reference_stats, config);
        chunk.copy_from_slice(&out);
    }
    Ok(())
}
