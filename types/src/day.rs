//! Days of the week, in the order the picker presents them.

use std::fmt;

/// One of the seven selectable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Picker order: Monday first, Sunday last.
pub const DAYS: [Day; 7] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
    Day::Saturday,
    Day::Sunday,
];

impl Day {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Zero-based position in [`DAYS`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The calendar day that follows this one. Sunday wraps to Monday.
    #[must_use]
    pub const fn succ(self) -> Day {
        DAYS[(self.index() + 1) % DAYS.len()]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
