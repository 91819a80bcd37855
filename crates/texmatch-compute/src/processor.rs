//! Capability-probing processor with automatic fallback.
//!
//! The engines themselves never switch backends behind the caller's back;
//! that orchestration decision lives here. [`TransferProcessor::auto`]
//! probes once at construction and degrades from the parallel backend to
//! the scalar emulation when the former is unavailable.

use tracing::debug;

use texmatch_core::{ColorStatistics, OccupancyMask, PixelBuffer, TransferConfig};

use crate::{
    apply_transfer_with, compute_statistics_with, create_kernels, Backend, ComputeResult,
    ReduceKernels,
};

/// High-level recoloring driver bound to one kernel backend.
pub struct TransferProcessor {
    kernels: Box<dyn ReduceKernels>,
}

impl TransferProcessor {
    /// Creates a processor on the best available backend.
    ///
    /// Never fails: when no parallel backend is compiled in, this falls
    /// back to [`crate::ScalarKernels`].
    pub fn auto() -> Self {
        let kernels = match create_kernels(Backend::Auto) {
            Ok(k) => k,
            // Auto resolves to an available backend; scalar is the floor.
            Err(_) => Box::new(crate::ScalarKernels::new()),
        };
        debug!(backend = kernels.name(), "processor ready");
        Self { kernels }
    }

    /// Creates a processor on a specific backend.
    ///
    /// # Errors
    ///
    /// [`crate::ComputeError::BackendUnavailable`] if the backend is not
    /// compiled in. Recover by retrying with [`Backend::Scalar`] or
    /// [`Backend::Auto`].
    pub fn with_backend(backend: Backend) -> ComputeResult<Self> {
        let kernels = create_kernels(backend)?;
        Ok(Self { kernels })
    }

    /// Name of the backend this processor dispatches to.
    pub fn backend_name(&self) -> &'static str {
        self.kernels.name()
    }

    /// Whether this processor runs tiles concurrently.
    pub fn is_parallel(&self) -> bool {
        self.kernels.is_parallel()
    }

    /// Computes Lab statistics on this processor's backend.
    pub fn compute_statistics(
        &self,
        buffer: &PixelBuffer,
        alpha_threshold: f32,
        mask: Option<&OccupancyMask>,
    ) -> ComputeResult<ColorStatistics> {
        compute_statistics_with(self.kernels.as_ref(), buffer, alpha_threshold, mask)
    }

    /// Applies a precomputed transfer in place.
    pub fn apply_transfer(
        &self,
        target: &mut PixelBuffer,
        target_stats: &ColorStatistics,
        reference_stats: &ColorStatistics,
        config: &TransferConfig,
    ) -> ComputeResult<()> {
        apply_transfer_with(
            self.kernels.as_ref(),
            target,
            target_stats,
            reference_stats,
            config,
        )
    }

    /// Full pipeline: statistics for both images, then in-place recolor.
    ///
    /// `reference_mask`, when present, restricts which reference texels
    /// count toward the reference statistics (UV-occupancy filtering).
    /// Returns the reference statistics for diagnostics.
    pub fn recolor(
        &self,
        target: &mut PixelBuffer,
        reference: &PixelBuffer,
        reference_mask: Option<&OccupancyMask>,
        config: &TransferConfig,
    ) -> ComputeResult<ColorStatistics> {
        let target_stats =
            self.compute_statistics(target, config.alpha_threshold, None)?;
        let reference_stats =
            self.compute_statistics(reference, config.alpha_threshold, reference_mask)?;
        self.apply_transfer(target, &target_stats, &reference_stats, config)?;
        Ok(reference_stats)
    }
}

impl std::fmt::Debug for TransferProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferProcessor")
            .field("backend", &self.kernels.name())
            .finish()
    }
}
