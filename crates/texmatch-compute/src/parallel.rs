//! Rayon-backed kernel runner.
//!
//! Dispatches the tile grid over the rayon worker pool. Each worker
//! produces partials for disjoint tiles; the combine step in
//! [`crate::reduce`] is a plain fold, so no shared mutable state exists
//! between workers. The calls block until every tile has completed
//! (synchronous from the caller's perspective).

use rayon::prelude::*;

use texmatch_core::{ColorStatistics, OccupancyMask, PixelBuffer, TransferConfig};
use texmatch_stats::transfer_pixel;

use crate::kernels::{tile_deviation, tile_sum, DeviationPartial, ReduceKernels, SumPartial, Tile};

/// Data-parallel kernel runner over the rayon thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelKernels;

impl ParallelKernels {
    /// Creates the parallel runner.
    pub fn new() -> Self {
        Self
    }
}

impl ReduceKernels for ParallelKernels {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn is_parallel(&self) -> bool {
        true
    }

    fn sum_partials(
        &self,
        buffer: &PixelBuffer,
        alpha_threshold: f32,
        mask: Option<&OccupancyMask>,
        tiles: &[Tile],
    ) -> Vec<SumPartial> {
        tiles
            .par_iter()
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
            .par_iter()
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
        buffer.data_mut().par_chunks_mut(4).for_each(|chunk| {
            let pixel = [chunk[0], chunk[1], chunk[2], chunk[3]];
            let out = transfer_pixel(pixel, target_stats, reference_stats, config);
            chunk.copy_from_slice(&out);
        });
    }
}
