//! Single-threaded emulation of the tiled reduction.
//!
//! Runs the identical tile grid and per-tile math as the parallel backend,
//! one tile at a time. Always available; this is the substitution target
//! when no parallel-capable backend is present.

use texmatch_core::{ColorStatistics, OccupancyMask, PixelBuffer, TransferConfig};
use texmatch_stats::transfer_pixel;

use crate::kernels::{tile_deviation, tile_sum, DeviationPartial, ReduceKernels, SumPartial, Tile};

/// CPU-emulated kernel runner (no concurrency).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarKernels;

impl ScalarKernels {
    /// Creates the scalar runner.
    pub fn new() -> Self {
        Self
    }
}

impl ReduceKernels for ScalarKernels {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn is_parallel(&self) -> bool {
        false
    }

    fn sum_partials(
        &self,
        buffer: &PixelBuffer,
        alpha_threshold: f32,
        mask: Option<&OccupancyMask>,
        tiles: &[Tile],
    ) -> Vec<SumPartial> {
        tiles
            .iter()
            .map(|&tile| tile_sum(buffer, alpha_threshold, mask, tile))
            .collect()
    }

    fn deviation_partials(
        &self,
        buffer: &PixelBuffer,
        alpha_threshold: f32,
        mask: Option<&OccupancyMask>,
        mean: [f64; 3],
        tiles: &[Tile],
    ) -> Vec<DeviationPartial> {
        tiles
            .iter()
            .map(|&tile| tile_deviation(buffer, alpha_threshold, mask, mean, tile))
            .collect()
    }

    fn map_transfer(
        &self,
        buffer: &mut PixelBuffer,
        target_stats: &ColorStatistics,
        reference_stats: &ColorStatistics,
        config: &TransferConfig,
    ) {
        for chunk in buffer.data_mut().chunks_exact_mut(4) {
            let pixel = [chunk[0], chunk[1], chunk[2], chunk[3]];
            let out = transfer_pixel(pixel, target_stats, reference_stats, config);
            chunk.copy_from_slice(&out);
        }
    }
}
