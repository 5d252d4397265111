//! Resolved predictor settings shared across crates.
//!
//! Raw TOML deserialization structs stay private in `daypredict-config`. The
//! config loader validates them and resolves them into these types, so a
//! `PredictorSettings` value is always usable as-is.

use std::time::Duration;

/// Scripted messages shown while the "prediction" runs, in display order.
pub const LOADING_MESSAGES: [&str; 7] = [
    "Running DNA Analysis...",
    "Consulting Elon Musk...",
    "Hacking NASA For Data...",
    "Calling to Stephen Hawking...",
    "Calculating with fingers...",
    "Analysing Epstein file...",
    "Finalizing prediction...",
];

/// Time each loading message stays on screen.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(2000);

/// Percentage the slider must pass to count as confirmed.
pub const DEFAULT_COMMIT_THRESHOLD: f32 = 95.0;

/// Slider handle width, in terminal cells.
pub const DEFAULT_HANDLE_WIDTH: f32 = 6.0;

/// Total horizontal inset of the handle lane inside the track, in terminal cells.
pub const DEFAULT_HANDLE_PADDING: f32 = 2.0;

/// Upper bound for either slider dimension, in terminal cells.
pub const MAX_SLIDER_CELLS: f32 = 64.0;

/// Geometry of the slider handle used to convert pointer position to progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderMetrics {
    pub handle_width: f32,
    pub handle_padding: f32,
}

impl SliderMetrics {
    /// Handle width in `(0, MAX]`, padding in `[0, MAX]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.handle_width > 0.0
            && self.handle_width <= MAX_SLIDER_CELLS
            && self.handle_padding >= 0.0
            && self.handle_padding <= MAX_SLIDER_CELLS
    }
}

impl Default for SliderMetrics {
    fn default() -> Self {
        Self {
            handle_width: DEFAULT_HANDLE_WIDTH,
            handle_padding: DEFAULT_HANDLE_PADDING,
        }
    }
}

/// Validated predictor configuration.
///
/// Invariants: `loading_messages` is non-empty, `step_interval` is non-zero,
/// and `commit_threshold` lies in `(0, 100)`. The config loader enforces them;
/// the constructors here only ever produce valid values.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorSettings {
    loading_messages: Vec<String>,
    step_interval: Duration,
    commit_threshold: f32,
    slider: SliderMetrics,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            loading_messages: LOADING_MESSAGES.iter().map(ToString::to_string).collect(),
            step_interval: DEFAULT_STEP_INTERVAL,
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            slider: SliderMetrics::default(),
        }
    }
}

impl PredictorSettings {
    /// Replace the message script. An empty list keeps the current one.
    #[must_use]
    pub fn with_loading_messages(mut self, messages: Vec<String>) -> Self {
        if !messages.is_empty() {
            self.loading_messages = messages;
        }
        self
    }

    /// Replace the step interval. A zero interval keeps the current one.
    #[must_use]
    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.step_interval = interval;
        }
        self
    }

    /// Replace the commit threshold. Values outside `(0, 100)` keep the current one.
    #[must_use]
    pub fn with_commit_threshold(mut self, threshold: f32) -> Self {
        if threshold > 0.0 && threshold < 100.0 {
            self.commit_threshold = threshold;
        }
        self
    }

    /// Replace the slider geometry. Dimensions outside
    /// [`SliderMetrics::is_valid`] keep the current geometry.
    #[must_use]
    pub fn with_slider(mut self, slider: SliderMetrics) -> Self {
        if slider.is_valid() {
            self.slider = slider;
        }
        self
    }

    #[must_use]
    pub fn loading_messages(&self) -> &[String] {
        &self.loading_messages
    }

    /// Message to show at `index`; past the end repeats the last message.
    #[must_use]
    pub fn message_at(&self, index: usize) -> &str {
        let last = self.loading_messages.len().saturating_sub(1);
        self.loading_messages
            .get(index.min(last))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    #[must_use]
    pub fn commit_threshold(&self) -> f32 {
        self.commit_threshold
    }

    #[must_use]
    pub fn slider(&self) -> SliderMetrics {
        self.slider
    }
}
