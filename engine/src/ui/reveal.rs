//! Pop-in effect for the verdict card.

use std::time::Duration;

use super::animation::EffectTimer;

/// How long the verdict card takes to scale in.
pub const REVEAL_DURATION: Duration = Duration::from_millis(700);

#[derive(Debug, Clone)]
pub struct RevealEffect {
    timer: EffectTimer,
}

impl RevealEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
