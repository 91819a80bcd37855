//! Two-phase reduction driver.
//!
//! Drives a [`ReduceKernels`] backend through the mean and variance phases
//! and combines the tile partials. The phase-1 result is combined on the
//! calling thread before phase 2 is dispatched, which is the
//! synchronization barrier the variance pass requires.
//!
//! All intermediate partial vectors are plain owned allocations; they drop
//! on every exit path, early `NoEligiblePixels` return included.

use tracing::debug;

use texmatch_core::{ColorStatistics, Error, OccupancyMask, PixelBuffer, TransferConfig};

use crate::kernels::{generate_tiles, ReduceKernels, DEFAULT_TILE_DIM};
use crate::ComputeResult;

/// Returns whether a data-parallel backend is compiled into this build.
#[inline]
pub fn is_parallel_available() -> bool {
    cfg!(feature = "parallel")
}

/// Computes Lab statistics with an explicit kernel runner.
///
/// Identical signature semantics to
/// [`texmatch_stats::compute_statistics`]: same validation, same
/// eligibility filter, same `NoEligiblePixels` failure mode.
pub fn compute_statistics_with(
    kernels: &dyn ReduceKernels,
    buffer: &PixelBuffer,
    alpha_threshold: f32,
    mask: Option<&OccupancyMask>,
) -> ComputeResult<ColorStatistics> {
    if buffer.is_empty() {
        return Err(Error::invalid_dimensions(
            buffer.width(),
            buffer.height(),
            "statistics require a non-empty buffer",
        )
        .into());
    }
    if let Some(mask) = mask {
        buffer.check_mask(mask)?;
    }

    let tiles = generate_tiles(buffer.width(), buffer.height(), DEFAULT_TILE_DIM);
    debug!(
        backend = kernels.name(),
        width = buffer.width(),
        height = buffer.height(),
        tiles = tiles.len(),
        "phase 1: mean reduction"
    );

    let partials = kernels.sum_partials(buffer, alpha_threshold, mask, &tiles);
    let mut sum = [0.0f64; 3];
    let mut count = 0u64;
    for p in &partials {
        for c in 0..3 {
            sum[c] += p.sum[c];
        }
        count += p.count;
    }
    if count == 0 {
        return Err(Error::NoEligiblePixels.into());
    }
    let mean = [
        sum[0] / count as f64,
        sum[1] / count as f64,
        sum[2] / count as f64,
    ];

    // Phase 1 is fully combined here; only now may phase 2 start.
    debug!(backend = kernels.name(), eligible = count, "phase 2: variance reduction");
    let deviations = kernels.deviation_partials(buffer, alpha_threshold, mask, mean, &tiles);
    let mut sum_sq_dev = [0.0f64; 3];
    for p in &deviations {
        for c in 0..3 {
            sum_sq_dev[c] += p.sum_sq_dev[c];
        }
    }

    Ok(ColorStatistics::from_mean_and_deviations(
        mean,
        sum_sq_dev,
        count as usize,
    ))
}

/// Applies the moment-matching transfer in place with an explicit runner.
pub fn apply_transfer_with(
    kernels: &dyn ReduceKernels,
    target: &mut PixelBuffer,
    target_stats: &ColorStatistics,
    reference_stats: &ColorStatistics,
    config: &TransferConfig,
) -> ComputeResult<()> {
    debug!(
        backend = kernels.name(),
        width = target.width(),
        height = target.height(),
        intensity = config.intensity,
        "phase 3: transfer map"
    );
    kernels.map_transfer(target, target_stats, reference_stats, config);
    Ok(())
}

/// Computes Lab statistics on the data-parallel backend.
///
/// # Errors
///
/// [`crate::ComputeError::BackendUnavailable`] when the `parallel` feature
/// is not compiled in; callers substitute the sequential engine.
pub fn compute_statistics_parallel(
    buffer: &PixelBuffer,
    alpha_threshold: f32,
    mask: Option<&OccupancyMask>,
) -> ComputeResult<ColorStatistics> {
    let kernels = crate::create_kernels(crate::Backend::Parallel)?;
    compute_statistics_with(kernels.as_ref(), buffer, alpha_threshold, mask)
}

/// Applies the transfer in place on the data-parallel backend.
///
/// # Errors
///
/// [`crate::ComputeError::BackendUnavailable`] when the `parallel` feature
/// is not compiled in.
pub fn apply_transfer_parallel(
    target: &mut PixelBuffer,
    target_stats: &ColorStatistics,
    reference_stats: &ColorStatistics,
    config: &TransferConfig,
) -> ComputeResult<()> {
    let kernels = crate::create_kernels(crate::Backend::Parallel)?;
    apply_transfer_with(kernels.as_ref(), target, target_stats, reference_stats, config)
}
