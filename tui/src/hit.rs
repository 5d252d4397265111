//! Clickable regions recorded during the last draw.

use ratatui::layout::{Position, Rect};

use daypredict_types::Day;

/// Something a pointer press can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Day(Day),
    SliderHandle,
    PredictAgain,
}

/// Screen regions of the interactive controls, rebuilt on every frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    days: Vec<(Day, Rect)>,
    slider_handle: Option<Rect>,
    predict_again: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.days.clear();
        self.slider_handle = None;
        self.predict_again = None;
    }

    pub fn add_day(&mut self, day: Day, area: Rect) {
        self.days.push((day, area));
    }

    pub fn set_slider_handle(&mut self, area: Rect) {
        self.slider_handle = Some(area);
    }

    pub fn set_predict_again(&mut self, area: Rect) {
        self.predict_again = Some(area);
    }

    #[must_use]
    pub fn day_area(&self, day: Day) -> Option<Rect> {
        self.days
            .iter()
            .find_map(|(d, area)| (*d == day).then_some(*area))
    }

    #[must_use]
    pub fn slider_handle(&self) -> Option<Rect> {
        self.slider_handle
    }

    #[must_use]
    pub fn predict_again(&self) -> Option<Rect> {
        self.predict_again
    }

    /// Topmost control under the given cell.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if self.slider_handle.is_some_and(|area| area.contains(pos)) {
            return Some(HitTarget::SliderHandle);
        }
        if self.predict_again.is_some_and(|area| area.contains(pos)) {
            return Some(HitTarget::PredictAgain);
        }
        self.days
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(day, _)| HitTarget::Day(*day))
    }
}
