//! Kernel-runner abstraction and shared tile math.
//!
//! [`ReduceKernels`] is the capability seam between the reduction driver in
//! [`crate::reduce`] and an execution substrate. Both provided backends run
//! the exact same per-tile functions defined here; they differ only in how
//! the tile grid is dispatched.
//!
//! Partials use f64 accumulation so that the summation-order differences
//! between backends stay well inside the 1e-3 equivalence bound.

use texmatch_core::{ColorStatistics, OccupancyMask, PixelBuffer, TransferConfig};
use texmatch_color::rgb_to_lab;

/// Default tile edge length for the reduction grid.
pub const DEFAULT_TILE_DIM: u32 = 8;

/// One rectangle of the reduction grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Tile width (may be short at the right border).
    pub width: u32,
    /// Tile height (may be short at the bottom border).
    pub height: u32,
}

/// Splits a buffer into a row-major grid of tiles.
///
/// Border tiles are clipped to the buffer; every pixel belongs to exactly
/// one tile.
pub fn generate_tiles(width: u32, height: u32, tile_dim: u32) -> Vec<Tile> {
    let cols = width.div_ceil(tile_dim);
    let rows = height.div_ceil(tile_dim);
    let mut tiles = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = col * tile_dim;
            let y = row * tile_dim;
            tiles.push(Tile {
                x,
                y,
                width: tile_dim.min(width - x),
                height: tile_dim.min(height - y),
            });
        }
    }
    tiles
}

/// Phase-1 partial: per-channel Lab sums plus the eligible-pixel count.
///
/// Combination is plain addition, associative and commutative, so the
/// reduction result is independent of tile completion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumPartial {
    /// Per-channel sum of Lab values.
    pub sum: [f64; 3],
    /// Eligible pixels in this tile.
    pub count: u64,
}

/// Phase-2 partial: per-channel sums of squared deviations from a mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviationPartial {
    /// Per-channel sum of `(v - mean)^2`.
    pub sum_sq_dev: [f64; 3],
    /// Eligible pixels in this tile.
    pub count: u64,
}

#[inline]
fn eligible(
    pixel: [f32; 4],
    alpha_threshold: f32,
    mask: Option<&OccupancyMask>,
    x: u32,
    y: u32,
) -> bool {
    pixel[3] >= alpha_threshold && mask.is_none_or(|m| m.is_occupied(x, y))
}

/// Accumulates the phase-1 partial for one tile.
pub fn tile_sum(
    buffer: &PixelBuffer,
    alpha_threshold: f32,
    mask: Option<&OccupancyMask>,
    tile: Tile,
) -> SumPartial {
    let mut partial = SumPartial::default();
    for y in tile.y..tile.y + tile.height {
        for x in tile.x..tile.x + tile.width {
            let pixel = buffer.pixel(x, y);
            if !eligible(pixel, alpha_threshold, mask, x, y) {
                continue;
            }
            let lab = rgb_to_lab([pixel[0], pixel[1], pixel[2]]);
            for c in 0..3 {
                partial.sum[c] += lab[c] as f64;
            }
            partial.count += 1;
        }
    }
    partial
}

/// Accumulates the phase-2 partial for one tile against a known mean.
pub fn tile_deviation(
    buffer: &PixelBuffer,
    alpha_threshold: f32,
    mask: Option<&OccupancyMask>,
    mean: [f64; 3],
    tile: Tile,
) -> DeviationPartial {
    let mut partial = DeviationPartial::default();
    for y in tile.y..tile.y + tile.height {
        for x in tile.x..tile.x + tile.width {
            let pixel = buffer.pixel(x, y);
            if !eligible(pixel, alpha_threshold, mask, x, y) {
                continue;
            }
            let lab = rgb_to_lab([pixel[0], pixel[1], pixel[2]]);
            for c in 0..3 {
                let d = lab[c] as f64 - mean[c];
                partial.sum_sq_dev[c] += d * d;
            }
            partial.count += 1;
        }
    }
    partial
}

/// Execution substrate for the reduction phases and the transfer map.
///
/// Implementations must dispatch every tile exactly once per phase and may
/// complete tiles in any order; the f64 partials make combination
/// order-independent up to floating rounding.
pub trait ReduceKernels: Send + Sync {
    /// Backend name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this backend actually runs tiles concurrently.
    fn is_parallel(&self) -> bool;

    /// Phase 1: per-tile Lab sums and eligible counts.
    fn sum_partials(
        &self,
        buffer: &PixelBuffer,
        alpha_threshold: f32,
        mask: Option<&OccupancyMask>,
        tiles: &[Tile],
    ) -> Vec<SumPartial>;

    /// Phase 2: per-tile squared deviations from the phase-1 mean.
    ///
    /// Callers must not invoke this before the phase-1 reduction has been
    /// fully combined; passing `mean` by value is the barrier.
    fn deviation_partials(
        &self,
        buffer: &PixelBuffer,
        alpha_threshold: f32,
        mask: Option<&OccupancyMask>,
        mean: [f64; 3],
        tiles: &[Tile],
    ) -> Vec<DeviationPartial>;

    /// Phase 3: independent per-pixel moment-matching transfer, in place.
    fn map_transfer(
        &self,
        buffer: &mut PixelBuffer,
        target_stats: &ColorStatistics,
        reference_stats: &ColorStatistics,
        config: &TransferConfig,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tiles_exact_fit() {
        let tiles = generate_tiles(16, 16, 8);
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| t.width == 8 && t.height == 8));
    }

    #[test]
    fn test_generate_tiles_clips_border() {
        let tiles = generate_tiles(10, 5, 8);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0], Tile { x: 0, y: 0, width: 8, height: 5 });
        assert_eq!(tiles[1], Tile { x: 8, y: 0, width: 2, height: 5 });
    }

    #[test]
    fn test_tiles_partition_every_pixel() {
        let (w, h) = (13u32, 7u32);
        let tiles = generate_tiles(w, h, 8);
        let covered: u64 = tiles.iter().map(|t| (t.width * t.height) as u64).sum();
        assert_eq!(covered, (w * h) as u64);
    }

    #[test]
    fn test_tile_sum_respects_mask() {
        let buf = PixelBuffer::filled(8, 8, [0.5, 0.5, 0.5, 1.0]);
        let mut mask = OccupancyMask::new(8, 8);
        mask.mark(0, 0);
        mask.mark(1, 0);
        let tile = Tile { x: 0, y: 0, width: 8, height: 8 };
        let partial = tile_sum(&buf, 0.0, Some(&mask), tile);
        assert_eq!(partial.count, 2);
    }

    #[test]
    fn test_tile_deviation_of_uniform_is_zero() {
        let buf = PixelBuffer::filled(4, 4, [0.3, 0.3, 0.3, 1.0]);
        let tile = Tile { x: 0, y: 0, width: 4, height: 4 };
        let sum = tile_sum(&buf, 0.0, None, tile);
        let mean = [
            sum.sum[0] / sum.count as f64,
            sum.sum[1] / sum.count as f64,
            sum.sum[2] / sum.count as f64,
        ];
        let dev = tile_deviation(&buf, 0.0, None, mean, tile);
        for c in 0..3 {
            assert!(dev.sum_sq_dev[c] < 1e-9);
        }
    }
}
