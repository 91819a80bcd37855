//! Transfer configuration.

/// Parameters for one color-transfer invocation.
///
/// Immutable value passed per call; there is no process-global
/// configuration anywhere in the workspace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferConfig {
    /// Blend factor between the original and the matched color.
    ///
    /// 0 leaves the target untouched, 1 applies the full moment match,
    /// values above 1 extrapolate past it.
    pub intensity: f32,
    /// Keep the target's original L* channel, matching only a*/b*.
    ///
    /// Prevents global brightness drift when the reference is much darker
    /// or brighter than the target.
    pub preserve_luminance: bool,
    /// Minimum alpha for a pixel to be recolored and to count toward
    /// statistics, in [0, 1].
    pub alpha_threshold: f32,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            preserve_luminance: false,
            alpha_threshold: 0.0,
        }
    }
}

impl TransferConfig {
    /// Returns a copy with the given intensity.
    #[inline]
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Returns a copy with luminance preservation enabled or disabled.
    #[inline]
    pub fn with_preserve_luminance(mut self, preserve: bool) -> Self {
        self.preserve_luminance = preserve;
        self
    }

    /// Returns a copy with the given alpha threshold.
    #[inline]
    pub fn with_alpha_threshold(mut self, threshold: f32) -> Self {
        self.alpha_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let cfg = TransferConfig::default();
        assert_eq!(cfg.intensity, 1.0);
        assert!(!cfg.preserve_luminance);
        assert_eq!(cfg.alpha_threshold, 0.0);
    }

    #[test]
    fn test_builders() {
        let cfg = TransferConfig::default()
            .with_intensity(0.5)
            .with_preserve_luminance(true)
            .with_alpha_threshold(0.1);
        assert_eq!(cfg.intensity, 0.5);
        assert!(cfg.preserve_luminance);
        assert_eq!(cfg.alpha_threshold, 0.1);
    }
}
