//! Outcome of a prediction and the top-level phase of the predictor.

use crate::Day;

/// Result of comparing the user's guess against tomorrow's actual day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub guess: Day,
    pub actual_next_day: Day,
    pub is_correct: bool,
}

impl Verdict {
    #[must_use]
    pub fn headline(&self) -> String {
        if self.is_correct {
            format!("Yes, you are correct! Tomorrow is {}", self.guess)
        } else {
            format!(
                "No, you are wrong! Tomorrow is actually {}",
                self.actual_next_day
            )
        }
    }

    #[must_use]
    pub const fn tagline(&self) -> &'static str {
        if self.is_correct {
            "Your IQ is higher than 99.9% of all humanity"
        } else {
            "Your IQ might be lower than room temperature"
        }
    }
}

/// Mutually exclusive surface the predictor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Day picker and slider, no drag in progress.
    #[default]
    Idle,
    /// Day picker and slider, handle held.
    Dragging,
    /// Scripted loading messages are playing.
    Sequencing { index: usize },
    /// Sequence finished and the verdict is shown.
    Result(Verdict),
}

impl Phase {
    /// Whether the day picker and slider are on screen.
    #[must_use]
    pub const fn is_choosing(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Dragging)
    }
}
