//! The predictor application state machine.
//!
//! `App` owns the single session record: selected day, drag gesture, current
//! stage, and the loading sequencer. Every operation is a single synchronous
//! step, so the caller's event loop sees each transition complete before it
//! applies the next event.

use chrono::Datelike;
use tracing::{debug, info, warn};

use daypredict_types::{Day, Phase, PredictorSettings, SliderProgress, Verdict, ui::UiOptions};

use crate::gesture::{DragGesture, GestureOutcome, TrackGeometry};
use crate::sequencer::{Sequencer, SequencerEvent};
use crate::ui::{RevealEffect, ViewState};
use crate::verdict::{Clock, LocalClock, evaluate};


/// Which surface is on screen. Dragging is a sub-state of `Choosing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Choosing,
    Sequencing,
    Result(Verdict),
}

/// Declarative snapshot of everything the renderer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation<'a> {
    pub phase: Phase,
    pub selected_day: Option<Day>,
    /// Progress as the gesture last computed it.
    pub slider_progress: SliderProgress,
    /// Progress to draw this frame (eases after release).
    pub slider_display: SliderProgress,
    pub drag_active: bool,
    /// The slider only accepts input once a day is chosen.
    pub slider_enabled: bool,
    pub message_index: usize,
    /// Loading message for the current index, while sequencing.
    pub message: Option<&'a str>,
    pub verdict: Option<Verdict>,
}

#[derive(Debug)]
pub struct App {
    settings: PredictorSettings,
    clock: Box<dyn Clock>,
    selected: Option<Day>,
    gesture: DragGesture,
    stage: Stage,
    sequencer: Sequencer,
    track: Option<TrackGeometry>,
    view: ViewState,
    tick: usize,
    should_quit: bool,
}

impl App {
    /// Create an app that reads today's date from the local wall clock.
    #[must_use]
    pub fn new(settings: PredictorSettings, ui_options: UiOptions) -> Self {
        Self::with_clock(settings, ui_options, LocalClock)
    }

    #[must_use]
    pub fn with_clock(
        settings: PredictorSettings,
        ui_options: UiOptions,
        clock: impl Clock + 'static,
    ) -> Self {
        let sequencer = Sequencer::new(settings.loading_messages().len(), settings.step_interval());
        Self {
            settings,
            clock: Box::new(clock),
            selected: None,
            gesture: DragGesture::default(),
            stage: Stage::Choosing,
            sequencer,
            track: None,
            view: ViewState::new(ui_options),
            tick: 0,
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Choose a day. Overwrites any previous choice; ignored once the
    /// prediction is running or showing its verdict.
    pub fn select_day(&mut self, day: Day) {
        if self.stage != Stage::Choosing {
            return;
        }
        if self.selected != Some(day) {
            debug!(%day, "day selected");
        }
        self.selected = Some(day);
    }

    #[must_use]
    pub fn selected_day(&self) -> Option<Day> {
        self.selected
    }

    // ------------------------------------------------------------------
    // Drag gesture
    // ------------------------------------------------------------------

    /// Record where the slider track was last drawn.
    pub fn set_slider_track(&mut self, track: TrackGeometry) {
        self.track = Some(track);
    }

    #[must_use]
    pub fn slider_track(&self) -> Option<TrackGeometry> {
        self.track
    }

    /// Pointer pressed on the slider handle.
    pub fn pointer_down(&mut self, pointer_x: f32) {
        if self.selected.is_none() || self.stage != Stage::Choosing {
            return;
        }
        if self.gesture.press() == GestureOutcome::Started {
            debug!(pointer_x, "slider drag started");
            self.view.slider.follow(self.gesture.progress());
        }
    }

    /// Pointer moved anywhere while a drag may be active.
    pub fn pointer_move(&mut self, pointer_x: f32) {
        if self.selected.is_none() || !self.gesture.is_active() {
            return;
        }
        // Without a drawn track there is nothing to measure against yet.
        let track = self.track.unwrap_or(TrackGeometry {
            left: 0.0,
            width: 0.0,
        });
        let outcome = self.gesture.drag_to(
            pointer_x,
            track,
            self.settings.slider(),
            self.settings.commit_threshold(),
        );
        self.view.slider.follow(self.gesture.progress());
        if outcome == GestureOutcome::Committed {
            self.begin_sequence();
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_drag("released");
    }

    /// The drag was interrupted (focus lost, terminal resized).
    pub fn pointer_cancel(&mut self) {
        self.end_drag("cancelled");
    }

    fn end_drag(&mut self, how: &'static str) {
        if self.selected.is_none() {
            return;
        }
        match self.gesture.release(self.settings.commit_threshold()) {
            GestureOutcome::Committed => {
                self.view.slider.follow(self.gesture.progress());
                self.begin_sequence();
            }
            GestureOutcome::Released => {
                debug!(how, "slider drag ended below threshold");
                self.view.settle_slider(self.gesture.progress());
            }
            GestureOutcome::Ignored | GestureOutcome::Started | GestureOutcome::Moved => {}
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    #[must_use]
    pub fn slider_progress(&self) -> SliderProgress {
        self.gesture.progress()
    }

    // ------------------------------------------------------------------
    // Sequencer
    // ------------------------------------------------------------------

    fn begin_sequence(&mut self) {
        info!(day = ?self.selected, "prediction committed");
        self.stage = Stage::Sequencing;
        self.sequencer.start();
    }

    /// Advance frame-driven state: animations and queued sequencer ticks.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let delta = self.view.frame_elapsed();
        self.view.advance(delta);
        self.poll_sequencer();
    }

    fn poll_sequencer(&mut self) {
        for event in self.sequencer.poll() {
            match event {
                SequencerEvent::Advanced { index } => {
                    debug!(index, "loading message advanced");
                }
                SequencerEvent::Completed => self.finish_sequence(),
            }
        }
    }

    fn finish_sequence(&mut self) {
        if self.stage != Stage::Sequencing {
            return;
        }
        let Some(guess) = self.selected else {
            warn!("sequence completed without a selected day; resetting");
            self.reset();
            return;
        };
        let today = self.clock.today();
        let verdict = evaluate(guess, today);
        info!(
            %guess,
            actual = %verdict.actual_next_day,
            correct = verdict.is_correct,
            "prediction complete"
        );
        self.stage = Stage::Result(verdict);
        self.view.start_reveal();
    }

    #[must_use]
    pub fn loading_message_index(&self) -> usize {
        match self.stage {
            Stage::Sequencing => self.sequencer.index(),
            Stage::Choosing | Stage::Result(_) => 0,
        }
    }

    /// Message for the current index, clamped to the last one.
    #[must_use]
    pub fn loading_message(&self) -> Option<&str> {
        match self.stage {
            Stage::Sequencing => Some(self.settings.message_at(self.sequencer.index())),
            Stage::Choosing | Stage::Result(_) => None,
        }
    }

    // ------------------------------------------------------------------
    // Verdict & reset
    // ------------------------------------------------------------------

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.stage {
            Stage::Result(verdict) => Some(verdict),
            Stage::Choosing | Stage::Sequencing => None,
        }
    }

    /// Return every field to its initial value and stop any pending timer.
    pub fn reset(&mut self) {
        self.sequencer.stop();
        self.selected = None;
        self.gesture.reset();
        self.stage = Stage::Choosing;
        self.view.reset();
        debug!("predictor reset");
    }

    // ------------------------------------------------------------------
    // Read-side
    // ------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Choosing if self.gesture.is_active() => Phase::Dragging,
            Stage::Choosing => Phase::Idle,
            Stage::Sequencing => Phase::Sequencing {
                index: self.sequencer.index(),
            },
            Stage::Result(verdict) => Phase::Result(verdict),
        }
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation<'_> {
        Presentation {
            phase: self.phase(),
            selected_day: self.selected,
            slider_progress: self.gesture.progress(),
            slider_display: self.view.slider.shown(),
            drag_active: self.gesture.is_active(),
            slider_enabled: self.selected.is_some(),
            message_index: self.loading_message_index(),
            message: self.loading_message(),
            verdict: self.verdict(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &PredictorSettings {
        &self.settings
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn reveal_effect(&self) -> Option<&RevealEffect> {
        self.view.reveal.as_ref()
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Year shown in the footer.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.clock.today().year()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the sequencer timer before the app goes away.
    pub fn shutdown(&mut self) {
        self.sequencer.stop();
    }
}
