//! Backend detection and selection.
//!
//! Capability probing lives here so that callers can pick an execution
//! substrate before touching pixel data, and so that an unavailable
//! backend is observable (as [`ComputeError::BackendUnavailable`]) rather
//! than silently substituted inside the math.

use crate::{ComputeError, ComputeResult, ReduceKernels, ScalarKernels};

/// Available execution backends for the reduction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Auto-select the best available (parallel when compiled in).
    #[default]
    Auto,
    /// Single-threaded emulation; always available.
    Scalar,
    /// Rayon thread-pool dispatch (feature `parallel`).
    Parallel,
}

impl Backend {
    /// Check if this backend is available in the current build.
    pub fn is_available(&self) -> bool {
        match self {
            Self::Auto => true,
            Self::Scalar => true,
            Self::Parallel => cfg!(feature = "parallel"),
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Scalar => "scalar",
            Self::Parallel => "parallel",
        }
    }
}

/// Information about a compute backend.
#[derive(Debug, Clone)]
pub struct BackendInfo {
    /// Backend type.
    pub backend: Backend,
    /// Human-readable name.
    pub name: &'static str,
    /// Whether the backend is available.
    pub available: bool,
    /// Priority for auto-selection (higher = preferred).
    pub priority: u32,
    /// Description.
    pub description: &'static str,
}

/// Detect all backends known to this build.
pub fn detect_backends() -> Vec<BackendInfo> {
    let mut backends = vec![BackendInfo {
        backend: Backend::Scalar,
        name: "scalar",
        available: true,
        priority: 10,
        description: "single-threaded tiled reduction",
    }];

    let parallel_available = Backend::Parallel.is_available();
    backends.push(BackendInfo {
        backend: Backend::Parallel,
        name: "parallel",
        available: parallel_available,
        priority: if parallel_available { 100 } else { 0 },
        description: "rayon thread-pool tiled reduction",
    });

    backends.sort_by(|a, b| b.priority.cmp(&a.priority));
    backends
}

/// Select the best available backend.
pub fn select_best_backend() -> Backend {
    detect_backends()
        .into_iter()
        .filter(|b| b.available)
        .max_by_key(|b| b.priority)
        .map(|b| b.backend)
        .unwrap_or(Backend::Scalar)
}

/// Create a kernel runner for the requested backend.
///
/// # Errors
///
/// Returns [`ComputeError::BackendUnavailable`] when the `parallel`
/// backend is requested but not compiled in. The caller recovers by
/// selecting [`Backend::Scalar`] (or the sequential engine) instead.
pub fn create_kernels(backend: Backend) -> ComputeResult<Box<dyn ReduceKernels>> {
    match backend {
        Backend::Auto => create_kernels(select_best_backend()),
        Backend::Scalar => Ok(Box::new(ScalarKernels::new())),
        Backend::Parallel => {
            #[cfg(feature = "parallel")]
            {
                Ok(Box::new(crate::ParallelKernels::new()))
            }
            #[cfg(not(feature = "parallel"))]
            {
                Err(ComputeError::BackendUnavailable(
                    "parallel feature not enabled".to_string(),
                ))
            }
        }
    }
}
