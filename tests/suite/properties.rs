//! Cross-crate properties of the predictor: progress range, commit
//! monotonicity, sequence length, and the verdict rule over real calendars.

use std::time::Duration;

use chrono::{Datelike, Days, NaiveDate};

use daypredict_engine::{
    DAYS, Day, Phase, Sequencer, SequencerEvent, SliderMetrics, SliderProgress, TrackGeometry,
    evaluate, progress_at,
};
use daypredict_types::LOADING_MESSAGES;

use crate::common::{STEP, app_on, ascii, saturday};

#[test]
fn progress_stays_in_range_for_any_pointer() {
    let metrics = SliderMetrics::default();
    let tracks = [
        TrackGeometry {
            left: 0.0,
            width: 40.0,
        },
        TrackGeometry {
            left: 25.0,
            width: 9.0,
        },
        // Narrower than the handle itself.
        TrackGeometry {
            left: 5.0,
            width: 4.0,
        },
        TrackGeometry {
            left: 0.0,
            width: 0.0,
        },
    ];
    let pointers = [
        f32::NEG_INFINITY,
        -1e9,
        -1.0,
        0.0,
        3.5,
        17.25,
        40.0,
        1e9,
        f32::INFINITY,
        f32::NAN,
    ];
    for track in tracks {
        for x in pointers {
            let pct = progress_at(x, track, metrics).percent();
            assert!((0.0..=100.0).contains(&pct), "{pct} for x={x} on {track:?}");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn commit_is_final_within_a_gesture() {
    let mut app = app_on(saturday(), ascii());
    app.set_slider_track(TrackGeometry {
        left: 0.0,
        width: 40.0,
    });
    app.select_day(Day::Wednesday);
    app.pointer_down(3.0);
    app.pointer_move(39.0);
    assert_eq!(app.slider_progress(), SliderProgress::FULL);

    for x in [0.0, 12.0, -50.0, 39.0] {
        app.pointer_move(x);
        assert_eq!(app.slider_progress(), SliderProgress::FULL);
    }
    app.pointer_up();
    assert!(matches!(app.phase(), Phase::Sequencing { .. }));
    app.shutdown();
}

#[tokio::test(start_paused = true)]
async fn restarting_mid_sequence_emits_exactly_n_steps() {
    let steps = LOADING_MESSAGES.len();
    let mut sequencer = Sequencer::new(steps, STEP);
    sequencer.start();
    tokio::time::sleep(STEP * 3 + Duration::from_millis(1)).await;
    // Three ticks are queued and never drained before the restart.
    sequencer.start();

    let mut events = Vec::new();
    for _ in 0..(steps * 2) {
        tokio::time::sleep(STEP).await;
        events.extend(sequencer.poll());
    }

    let advanced = events
        .iter()
        .filter(|e| matches!(e, SequencerEvent::Advanced { .. }))
        .count();
    let completed = events
        .iter()
        .filter(|e| matches!(e, SequencerEvent::Completed))
        .count();
    assert_eq!(advanced, steps - 1);
    assert_eq!(completed, 1);
    assert_eq!(events.last(), Some(&SequencerEvent::Completed));
}

#[test]
fn verdict_matches_the_calendar_for_every_guess() {
    // Two full weeks spanning a month and a year boundary.
    let start = NaiveDate::from_ymd_opt(2025, 12, 25).expect("valid date");
    for offset in 0..14 {
        let today = start + Days::new(offset);
        let tomorrow = today.succ_opt().expect("tomorrow exists");
        let expected = DAYS[tomorrow.weekday().num_days_from_monday() as usize];

        let correct: Vec<Day> = DAYS
            .iter()
            .copied()
            .filter(|guess| evaluate(*guess, today).is_correct)
            .collect();
        assert_eq!(correct, vec![expected], "today {today}");
        for guess in DAYS {
            assert_eq!(evaluate(guess, today).actual_next_day, expected);
        }
    }
}

#[test]
fn leap_day_and_new_year() {
    let leap = NaiveDate::from_ymd_opt(2024, 2, 28).expect("valid date");
    assert_eq!(evaluate(Day::Thursday, leap).actual_next_day, Day::Thursday);

    let eve = NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date");
    assert_eq!(evaluate(Day::Friday, eve).actual_next_day, Day::Friday);
}
