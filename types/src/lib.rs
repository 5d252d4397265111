//! Core domain types for DayPredictor.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod day;
mod progress;
mod settings;
pub mod ui;
mod verdict;

pub use day::{DAYS, Day};
pub use progress::SliderProgress;
pub use settings::{
    DEFAULT_COMMIT_THRESHOLD, DEFAULT_HANDLE_PADDING, DEFAULT_HANDLE_WIDTH, DEFAULT_STEP_INTERVAL,
    LOADING_MESSAGES, MAX_SLIDER_CELLS, PredictorSettings, SliderMetrics,
};
pub use verdict::{Phase, Verdict};
