//! Verdict evaluation and the clock it reads "today" from.

use std::fmt::Debug;

use chrono::{Datelike, Local, NaiveDate, Weekday};

use daypredict_types::{Day, Verdict};

/// Source of the current calendar date.
pub trait Clock: Debug + Send + Sync {
    /// Today's date in the observer's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[must_use]
pub fn day_of_week(date: NaiveDate) -> Day {
    from_weekday(date.weekday())
}

fn from_weekday(weekday: Weekday) -> Day {
    match weekday {
        Weekday::Mon => Day::Monday,
        Weekday::Tue => Day::Tuesday,
        Weekday::Wed => Day::Wednesday,
        Weekday::Thu => Day::Thursday,
        Weekday::Fri => Day::Friday,
        Weekday::Sat => Day::Saturday,
        Weekday::Sun => Day::Sunday,
    }
}

/// Compare `guess` with the weekday of the day after `today`.
#[must_use]
pub fn evaluate(guess: Day, today: NaiveDate) -> Verdict {
    let actual_next_day = day_of_week(today).succ();
    Verdict {
        guess,
        actual_next_day,
        is_correct: guess == actual_next_day,
    }
}
