//! Sequential statistics over an eligible pixel set.

use texmatch_core::{ColorStatistics, Error, OccupancyMask, PixelBuffer, Result};
use texmatch_color::rgb_to_lab;

/// Computes Lab-space mean and population standard deviation per channel.
///
/// Eligibility: a pixel counts iff `alpha >= alpha_threshold` and, when a
/// mask is supplied, its texel is marked occupied. Sums and sums of squares
/// accumulate in f64.
///
/// # Errors
///
/// - [`Error::InvalidDimensions`] for a zero-area buffer
/// - [`Error::MaskDimensionMismatch`] when the mask does not match
/// - [`Error::NoEligiblePixels`] when the filter excludes every pixel
///
/// All validation happens before any pixel is read.
///
/// # Example
///
/// ```rust
/// use texmatch_core::PixelBuffer;
/// use texmatch_stats::compute_statistics;
///
/// let gray = PixelBuffer::filled(8, 8, [0.5, 0.5, 0.5, 1.0]);
/// let stats = compute_statistics(&gray, 0.0, None).unwrap();
/// assert_eq!(stats.count, 64);
/// assert!(stats.l.stddev < 1e-4); // uniform image
/// ```
pub fn compute_statistics(
    buffer: &PixelBuffer,
    alpha_threshold: f32,
    mask: Option<&OccupancyMask>,
) -> Result<ColorStatistics> {
    if buffer.is_empty() {
        return Err(Error::invalid_dimensions(
            buffer.width(),
            buffer.height(),
            "statistics require a non-empty buffer",
        ));
    }
    if let Some(mask) = mask {
        buffer.check_mask(mask)?;
    }

    let mut sum = [0.0f64; 3];
    let mut sum_sq = [0.0f64; 3];
    let mut count = 0usize;

    for (x, y, pixel) in buffer.pixels() {
        if pixel[3] < alpha_threshold {
            continue;
        }
        if let Some(mask) = mask {
            if !mask.is_occupied(x, y) {
                continue;
            }
        }
        let lab = rgb_to_lab([pixel[0], pixel[1], pixel[2]]);
        for c in 0..3 {
            let v = lab[c] as f64;
            sum[c] += v;
            sum_sq[c] += v * v;
        }
        count += 1;
    }

    if count == 0 {
        return Err(Error::NoEligiblePixels);
    }
    Ok(ColorStatistics::from_raw_moments(sum, sum_sq, count))
}
