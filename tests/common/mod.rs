//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use ratatui::Terminal;

use daypredict_engine::{App, FixedClock, PredictorSettings};
use daypredict_tui::{HitMap, draw};
use daypredict_types::ui::UiOptions;

use crate::vt100_backend::VT100Backend;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 48;
pub const STEP: Duration = Duration::from_millis(2000);

/// Saturday, so tomorrow is Sunday.
pub fn saturday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

pub fn ascii() -> UiOptions {
    UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    }
}

/// ASCII glyphs with animations off, so frames are stable.
pub fn calm() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..ascii()
    }
}

pub fn app_on(today: NaiveDate, options: UiOptions) -> App {
    App::with_clock(PredictorSettings::default(), options, FixedClock(today))
}

/// An app drawn once on a virtual terminal, as the binary's loop would.
pub struct Harness {
    pub app: App,
    pub terminal: Terminal<VT100Backend>,
    pub hits: HitMap,
}

impl Harness {
    pub fn new(app: App) -> Self {
        Self::with_size(app, WIDTH, HEIGHT)
    }

    pub fn with_size(app: App, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(VT100Backend::new(width, height)).expect("terminal");
        let mut harness = Self {
            app,
            terminal,
            hits: HitMap::default(),
        };
        harness.render();
        harness
    }

    pub fn render(&mut self) {
        let Self {
            app,
            terminal,
            hits,
        } = self;
        terminal.draw(|frame| draw(frame, app, hits)).expect("draw");
    }

    pub fn screen(&self) -> String {
        self.terminal.backend().contents()
    }

    /// Let `steps` sequencer intervals pass, then run one frame.
    pub async fn wait_steps(&mut self, steps: u32) {
        tokio::time::sleep(STEP * steps + Duration::from_millis(1)).await;
        self.app.tick();
        self.render();
    }
}
