//! Displayed slider position.
//!
//! While the handle is held the display tracks the gesture exactly. When the
//! handle is let go it eases to its resting value instead of jumping.

use std::time::Duration;

use daypredict_types::SliderProgress;

use super::animation::{EffectTimer, ease_out_cubic};

/// Time the handle takes to settle after release.
pub const SNAP_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Snap {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

#[derive(Debug, Clone, Default)]
pub struct SliderDisplay {
    shown: SliderProgress,
    snap: Option<Snap>,
}

impl SliderDisplay {
    #[must_use]
    pub fn shown(&self) -> SliderProgress {
        self.shown
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    /// Jump straight to `target`, dropping any running snap.
    pub fn follow(&mut self, target: SliderProgress) {
        self.snap = None;
        self.shown = target;
    }

    /// Ease from the current position to `target`.
    pub fn snap_to(&mut self, target: SliderProgress, duration: Duration) {
        if duration.is_zero() || self.shown == target {
            self.follow(target);
            return;
        }
        self.snap = Some(Snap {
            from: self.shown.percent(),
            to: target.percent(),
            timer: EffectTimer::new(duration),
        });
    }

    pub fn advance(&mut self, delta: Duration) {
        let Some(snap) = self.snap.as_mut() else {
            return;
        };
        snap.timer.advance(delta);
        let t = ease_out_cubic(snap.timer.progress());
        self.shown = SliderProgress::new(snap.from + (snap.to - snap.from) * t);
        if snap.timer.is_finished() {
            self.shown = SliderProgress::new(snap.to);
            self.snap = None;
        }
    }
}
