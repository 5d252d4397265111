//! Core engine for DayPredictor - state machine and orchestration.
//!
//! This crate contains the App state machine without TUI dependencies.
//! Renderers read an [`App::presentation`] snapshot and feed pointer events
//! back through the `pointer_*` operations.

mod app;
pub mod gesture;
pub mod sequencer;
pub mod ui;
pub mod verdict;

pub use app::{App, Presentation};
pub use gesture::{DragGesture, GestureOutcome, TrackGeometry, progress_at};
pub use sequencer::{Sequencer, SequencerEvent, SequencerState};
pub use verdict::{Clock, FixedClock, LocalClock, day_of_week, evaluate};

// Re-export from crates for public API
pub use daypredict_types::{
    DAYS, Day, Phase, PredictorSettings, SliderMetrics, SliderProgress, Verdict,
};
