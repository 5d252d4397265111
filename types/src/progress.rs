//! Slide-to-confirm progress value.

/// Horizontal confirmation progress, always within `0.0..=100.0`.
///
/// Construction clamps, and a NaN input (e.g. from a zero-width track during a
/// resize) collapses to zero so it can never reach rendered state.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SliderProgress(f32);

impl SliderProgress {
    pub const ZERO: SliderProgress = SliderProgress(0.0);
    pub const FULL: SliderProgress = SliderProgress(100.0);

    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    #[must_use]
    pub const fn percent(self) -> f32 {
        self.0
    }

    /// Fraction in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Strictly greater than `threshold` percent.
    #[must_use]
    pub fn exceeds(self, threshold: f32) -> bool {
        self.0 > threshold
    }
}
