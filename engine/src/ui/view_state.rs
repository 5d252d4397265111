//! View state for rendering.
//!
//! Groups the state that only affects how things look (animations, frame
//! timing, UI options), separate from the predictor's state machine.

use std::time::Duration;

use tokio::time::Instant;

use daypredict_types::{SliderProgress, ui::UiOptions};

use super::{REVEAL_DURATION, RevealEffect, SNAP_DURATION, SliderDisplay};

#[derive(Debug)]
pub struct ViewState {
    pub ui_options: UiOptions,
    /// Timestamp of last frame on tokio's clock (for animation timing).
    pub last_frame: Instant,
    pub slider: SliderDisplay,
    pub reveal: Option<RevealEffect>,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            last_frame: Instant::now(),
            slider: SliderDisplay::default(),
            reveal: None,
        }
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    pub fn advance(&mut self, delta: Duration) {
        self.slider.advance(delta);
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.advance(delta);
            if reveal.is_finished() {
                self.reveal = None;
            }
        }
    }

    pub fn settle_slider(&mut self, target: SliderProgress) {
        let duration = if self.ui_options.reduced_motion {
            Duration::ZERO
        } else {
            SNAP_DURATION
        };
        self.slider.snap_to(target, duration);
    }

    pub fn start_reveal(&mut self) {
        self.reveal = if self.ui_options.reduced_motion {
            None
        } else {
            Some(RevealEffect::pop_scale(REVEAL_DURATION))
        };
    }

    pub fn reset(&mut self) {
        self.slider = SliderDisplay::default();
        self.reveal = None;
    }
}
