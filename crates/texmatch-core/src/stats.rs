//! Per-channel color statistics.
//!
//! [`ColorStatistics`] captures mean and standard deviation of the L*, a*,
//! and b* channels over an eligible pixel set, plus the eligible count.
//! Both the sequential and the tiled-parallel engine finish their reductions
//! through the constructors here so the final division/clamp/sqrt math is
//! identical on both paths.
//!
//! Accumulation is f64 end to end: single-precision running sums drift
//! visibly over megapixel buffers, and the two engines are required to agree
//! within 1e-3 per channel.

/// Mean and standard deviation of a single Lab channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelStats {
    /// Population mean.
    pub mean: f32,
    /// Population standard deviation (never negative).
    pub stddev: f32,
}

/// Lab-space statistics over an eligible pixel subset.
///
/// Any value produced by a statistics call has `count > 0`; an empty
/// eligible set is reported as `Error::NoEligiblePixels` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStatistics {
    /// L* (lightness) channel statistics.
    pub l: ChannelStats,
    /// a* (green-red) channel statistics.
    pub a: ChannelStats,
    /// b* (blue-yellow) channel statistics.
    pub b: ChannelStats,
    /// Number of pixels that passed the eligibility filter.
    pub count: usize,
}

impl ColorStatistics {
    /// Builds statistics from raw per-channel sums and sums of squares.
    ///
    /// Used by the sequential engine: variance = sumsq/n - mean^2
    /// (population variance), clamped to >= 0 before the square root to
    /// absorb floating-point error on near-uniform inputs.
    pub fn from_raw_moments(sum: [f64; 3], sum_sq: [f64; 3], count: usize) -> Self {
        let n = count as f64;
        let stat = |c: usize| {
            let mean = sum[c] / n;
            let variance = (sum_sq[c] / n - mean * mean).max(0.0);
            ChannelStats {
                mean: mean as f32,
                stddev: variance.sqrt() as f32,
            }
        };
        Self {
            l: stat(0),
            a: stat(1),
            b: stat(2),
            count,
        }
    }

    /// Builds statistics from a known mean and summed squared deviations.
    ///
    /// Used by the two-phase parallel engine: phase 1 reduces the mean,
    /// phase 2 accumulates `(v - mean)^2` against it.
    pub fn from_mean_and_deviations(mean: [f64; 3], sum_sq_dev: [f64; 3], count: usize) -> Self {
        let n = count as f64;
        let stat = |c: usize| ChannelStats {
            mean: mean[c] as f32,
            stddev: (sum_sq_dev[c] / n).max(0.0).sqrt() as f32,
        };
        Self {
            l: stat(0),
            a: stat(1),
            b: stat(2),
            count,
        }
    }

    /// Returns the statistics for channel index 0 (L*), 1 (a*), or 2 (b*).
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    #[inline]
    pub fn channel(&self, index: usize) -> ChannelStats {
        match index {
            0 => self.l,
            1 => self.a,
            2 => self.b,
            _ => panic!("Lab channel index out of range: {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_raw_moments_uniform_has_zero_stddev() {
        // Four identical samples per channel.
        let sum = [200.0, 40.0, -80.0];
        let sum_sq = [10000.0, 400.0, 1600.0];
        let stats = ColorStatistics::from_raw_moments(sum, sum_sq, 4);
        assert_abs_diff_eq!(stats.l.mean, 50.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stats.l.stddev, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stats.a.mean, 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stats.b.mean, -20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_raw_moments_clamps_negative_variance() {
        // sumsq/n fractionally below mean^2, as floating error produces.
        let stats = ColorStatistics::from_raw_moments([30.0; 3], [299.9999999; 3], 3);
        assert!(stats.l.stddev >= 0.0);
        assert!(stats.l.stddev < 1e-3);
    }

    #[test]
    fn test_two_paths_agree() {
        // Samples 10 and 30: mean 20, population variance 100, stddev 10.
        let raw = ColorStatistics::from_raw_moments([40.0; 3], [1000.0; 3], 2);
        let dev = ColorStatistics::from_mean_and_deviations([20.0; 3], [200.0; 3], 2);
        assert_abs_diff_eq!(raw.l.mean, dev.l.mean, epsilon = 1e-6);
        assert_abs_diff_eq!(raw.l.stddev, dev.l.stddev, epsilon = 1e-6);
        assert_abs_diff_eq!(raw.l.stddev, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn test_channel_indexing() {
        let stats = ColorStatistics::from_raw_moments([1.0, 2.0, 3.0], [1.0, 4.0, 9.0], 1);
        assert_eq!(stats.channel(0), stats.l);
        assert_eq!(stats.channel(1), stats.a);
        assert_eq!(stats.channel(2), stats.b);
    }
}
