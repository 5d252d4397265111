//! Input handling for the DayPredictor TUI.
//!
//! Terminal events are read on a blocking thread and drained once per frame.
//! Mouse presses are routed through the [`HitMap`] built by the last draw; a
//! press on the slider handle captures the pointer so later drags and the
//! release reach the slider even when they leave the handle's cells.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use daypredict_engine::App;

use crate::hit::{HitMap, HitTarget};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Which pointer, if any, currently owns the slider.
///
/// Terminals report a single mouse, so capture is a flag: held from the press
/// on the handle until release or cancel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerCapture {
    held: bool,
}

impl PointerCapture {
    #[must_use]
    pub fn is_held(self) -> bool {
        self.held
    }

    /// Returns false when another press already holds the capture.
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Drop the capture once the app no longer has a drag in progress.
    pub fn sync(&mut self, app: &App) {
        if self.held && !app.is_dragging() {
            self.held = false;
        }
    }
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
    capture: PointerCapture,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
            capture: PointerCapture::default(),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a blocked send in the reader thread returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued terminal events into the app. Returns true when the app
/// should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump, hits: &HitMap) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &mut input.capture, hits, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event. Returns true when the app should exit.
pub fn apply_event(
    app: &mut App,
    capture: &mut PointerCapture,
    hits: &HitMap,
    event: Event,
) -> bool {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, capture, hits, mouse),
        Event::FocusLost | Event::Resize(..) => {
            if capture.is_held() {
                debug!("pointer capture lost");
                app.pointer_cancel();
                capture.release();
            }
        }
        _ => {}
    }
    capture.sync(app);
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }
    let ctrl_c =
        key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'Q')) {
        app.request_quit();
    }
}

fn handle_mouse(app: &mut App, capture: &mut PointerCapture, hits: &HitMap, mouse: MouseEvent) {
    let pointer_x = pointer_x(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hits.target_at(mouse.column, mouse.row) {
                Some(HitTarget::Day(day)) => app.select_day(day),
                Some(HitTarget::SliderHandle) => {
                    if capture.acquire() {
                        app.pointer_down(pointer_x);
                    }
                }
                Some(HitTarget::PredictAgain) => app.reset(),
                None => {}
            }
        }
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            if capture.is_held() {
                app.pointer_move(pointer_x);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if capture.is_held() {
                app.pointer_up();
                capture.release();
            }
        }
        _ => {}
    }
}

/// Horizontal pointer position at the centre of a terminal cell.
fn pointer_x(column: u16) -> f32 {
    f32::from(column) + 0.5
}
