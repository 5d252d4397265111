//! End-to-end predictor flows: mouse events routed through the hit map built
//! by a real draw, sequencer ticks on tokio's paused clock.

use std::time::Duration;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use daypredict_engine::{Day, Phase, SliderProgress};
use daypredict_tui::{PointerCapture, apply_event};
use daypredict_types::LOADING_MESSAGES;

use crate::common::{Harness, app_on, ascii, calm, saturday};

fn mouse(h: &mut Harness, capture: &mut PointerCapture, kind: MouseEventKind, col: u16, row: u16) {
    let event = Event::Mouse(MouseEvent {
        kind,
        column: col,
        row,
        modifiers: KeyModifiers::NONE,
    });
    apply_event(&mut h.app, capture, &h.hits, event);
    h.render();
}

fn click(h: &mut Harness, capture: &mut PointerCapture, area: Rect) {
    let (col, row) = (area.x + 1, area.y);
    mouse(h, capture, MouseEventKind::Down(MouseButton::Left), col, row);
    mouse(h, capture, MouseEventKind::Up(MouseButton::Left), col, row);
}

fn handle(h: &Harness) -> Rect {
    h.hits.slider_handle().expect("slider handle is clickable")
}

/// Grab the handle and drag it `cells` columns to the right.
fn drag_by(h: &mut Harness, capture: &mut PointerCapture, cells: u16) {
    let grip = handle(h);
    let row = grip.y + 1;
    mouse(h, capture, MouseEventKind::Down(MouseButton::Left), grip.x + 1, row);
    for step in 1..=cells {
        mouse(h, capture, MouseEventKind::Drag(MouseButton::Left), grip.x + 1 + step, row);
    }
}

fn choose(h: &mut Harness, capture: &mut PointerCapture, day: Day) {
    let area = h.hits.day_area(day).expect("day button drawn");
    click(h, capture, area);
}

#[tokio::test(start_paused = true)]
async fn correct_guess_plays_every_message_then_praises() {
    let mut h = Harness::new(app_on(saturday(), calm()));
    let mut capture = PointerCapture::default();

    choose(&mut h, &mut capture, Day::Sunday);
    assert!(h.screen().contains("> Sunday"));

    drag_by(&mut h, &mut capture, 60);
    assert!(!capture.is_held());
    assert!(h.screen().contains(LOADING_MESSAGES[0]));
    assert!(!h.screen().contains("SLIDE TO PREDICT"));

    for message in &LOADING_MESSAGES[1..] {
        h.wait_steps(1).await;
        assert!(h.screen().contains(message), "missing {message:?}");
    }

    h.wait_steps(1).await;
    let screen = h.screen();
    assert!(screen.contains("Yes, you are correct! Tomorrow is Sunday"));
    assert!(screen.contains("Your IQ is higher than 99.9% of all humanity"));
    assert!(screen.contains("[ Predict Again ]"));
}

#[tokio::test(start_paused = true)]
async fn wrong_guess_names_the_actual_day() {
    let mut h = Harness::new(app_on(saturday(), calm()));
    let mut capture = PointerCapture::default();

    choose(&mut h, &mut capture, Day::Friday);
    drag_by(&mut h, &mut capture, 60);
    h.wait_steps(7).await;

    let screen = h.screen();
    assert!(screen.contains("No, you are wrong! Tomorrow is actually Sunday"));
    assert!(screen.contains("room temperature"));
}

#[tokio::test(start_paused = true)]
async fn short_drag_snaps_back_and_keeps_the_choice() {
    let mut h = Harness::new(app_on(saturday(), calm()));
    let mut capture = PointerCapture::default();

    choose(&mut h, &mut capture, Day::Monday);
    let start = handle(&h);
    drag_by(&mut h, &mut capture, 10);
    assert_eq!(h.app.phase(), Phase::Dragging);
    assert!(handle(&h).x > start.x);

    let grip = handle(&h);
    mouse(&mut h, &mut capture, MouseEventKind::Up(MouseButton::Left), grip.x, grip.y);
    assert_eq!(h.app.phase(), Phase::Idle);
    assert_eq!(h.app.slider_progress(), SliderProgress::ZERO);
    assert_eq!(handle(&h), start);
    assert_eq!(h.app.selected_day(), Some(Day::Monday));

    // Nothing is pending: time passing changes nothing.
    h.wait_steps(10).await;
    assert!(h.screen().contains("SLIDE TO PREDICT"));
}

#[tokio::test(start_paused = true)]
async fn slider_is_inert_until_a_day_is_chosen() {
    let mut h = Harness::new(app_on(saturday(), calm()));
    let mut capture = PointerCapture::default();

    assert!(h.hits.slider_handle().is_none());
    let track = h.app.slider_track().expect("track recorded by draw");
    let (_, row) = h
        .terminal
        .backend()
        .find("SLIDE TO PREDICT")
        .expect("track label drawn");
    let col = track.left as u16 + 1;
    mouse(&mut h, &mut capture, MouseEventKind::Down(MouseButton::Left), col, row);
    mouse(&mut h, &mut capture, MouseEventKind::Drag(MouseButton::Left), col + 60, row);

    assert!(!capture.is_held());
    assert_eq!(h.app.phase(), Phase::Idle);
    assert_eq!(h.app.slider_progress(), SliderProgress::ZERO);
}

#[tokio::test(start_paused = true)]
async fn predict_again_returns_to_a_blank_picker() {
    let mut h = Harness::new(app_on(saturday(), calm()));
    let mut capture = PointerCapture::default();

    choose(&mut h, &mut capture, Day::Sunday);
    drag_by(&mut h, &mut capture, 60);
    h.wait_steps(7).await;

    let again = h.hits.predict_again().expect("predict again button");
    click(&mut h, &mut capture, again);

    assert_eq!(h.app.phase(), Phase::Idle);
    assert_eq!(h.app.selected_day(), None);
    let screen = h.screen();
    assert!(screen.contains("Tomorrow is which day?"));
    assert!(screen.contains("SLIDE TO PREDICT"));
    assert!(!screen.contains("> Sunday"));

    // A second round runs the full sequence again.
    choose(&mut h, &mut capture, Day::Saturday);
    drag_by(&mut h, &mut capture, 60);
    h.wait_steps(6).await;
    assert!(h.screen().contains(LOADING_MESSAGES[6]));
    h.wait_steps(1).await;
    assert!(h.screen().contains("Tomorrow is actually Sunday"));
}

#[tokio::test(start_paused = true)]
async fn clicking_day_text_on_screen_selects_it() {
    let mut h = Harness::new(app_on(saturday(), calm()));
    let mut capture = PointerCapture::default();

    let (col, row) = h
        .terminal
        .backend()
        .find("Thursday")
        .expect("Thursday drawn");
    mouse(&mut h, &mut capture, MouseEventKind::Down(MouseButton::Left), col, row);
    assert_eq!(h.app.selected_day(), Some(Day::Thursday));
}

#[tokio::test(start_paused = true)]
async fn focus_loss_mid_drag_cancels() {
    let mut h = Harness::new(app_on(saturday(), calm()));
    let mut capture = PointerCapture::default();

    choose(&mut h, &mut capture, Day::Tuesday);
    drag_by(&mut h, &mut capture, 20);
    assert!(capture.is_held());

    apply_event(&mut h.app, &mut capture, &h.hits, Event::FocusLost);
    assert!(!capture.is_held());
    assert_eq!(h.app.phase(), Phase::Idle);
    assert_eq!(h.app.slider_progress(), SliderProgress::ZERO);
}

#[tokio::test(start_paused = true)]
async fn verdict_card_pops_in() {
    let mut h = Harness::new(app_on(saturday(), ascii()));
    let mut capture = PointerCapture::default();

    choose(&mut h, &mut capture, Day::Sunday);
    drag_by(&mut h, &mut capture, 60);
    h.wait_steps(7).await;
    assert!(h.app.reveal_effect().is_some());
    let first = h.hits.predict_again().expect("button");

    tokio::time::sleep(Duration::from_millis(800)).await;
    h.app.tick();
    h.render();
    assert!(h.app.reveal_effect().is_none());
    let settled = h.hits.predict_again().expect("button");
    assert!(settled.y > first.y, "card grows downward as it scales in");
    assert!(h.screen().contains("Yes, you are correct! Tomorrow is Sunday"));
}
