//! Slide-to-confirm drag recognizer.
//!
//! Converts a 1-D pointer position inside a track of known width into a
//! [`SliderProgress`] and decides when the gesture counts as committed. The
//! commit check runs on every move, so a fast flick that jumps past the
//! threshold between two samples still commits without waiting for release.

use daypredict_types::{SliderMetrics, SliderProgress};
use tracing::debug;

/// Horizontal placement of the slider track, in the same units as pointer x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f32,
    pub width: f32,
}

/// Map a pointer x coordinate to slider progress.
///
/// A track too narrow to hold the handle (non-positive travel) maps every
/// position to zero instead of dividing by zero.
#[must_use]
pub fn progress_at(pointer_x: f32, track: TrackGeometry, metrics: SliderMetrics) -> SliderProgress {
    let travel = track.width - metrics.handle_padding - metrics.handle_width;
    if !travel.is_finite() || travel <= 0.0 {
        return SliderProgress::ZERO;
    }
    let offset = pointer_x - track.left - metrics.handle_width / 2.0;
    SliderProgress::new(offset / travel * 100.0)
}

/// What a pointer event did to the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No drag in progress, or a second pointer tried to start one.
    Ignored,
    Started,
    Moved,
    /// Progress passed the threshold; the drag is over and progress is full.
    Committed,
    /// The drag ended below the threshold and progress snapped back to zero.
    Released,
}

#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    active: bool,
    progress: SliderProgress,
}

impl DragGesture {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn progress(&self) -> SliderProgress {
        self.progress
    }

    /// Begin a drag. Progress is untouched until the first move.
    pub fn press(&mut self) -> GestureOutcome {
        if self.active {
            return GestureOutcome::Ignored;
        }
        self.active = true;
        GestureOutcome::Started
    }

    pub fn drag_to(
        &mut self,
        pointer_x: f32,
        track: TrackGeometry,
        metrics: SliderMetrics,
        threshold: f32,
    ) -> GestureOutcome {
        if !self.active {
            return GestureOutcome::Ignored;
        }
        self.progress = progress_at(pointer_x, track, metrics);
        if self.progress.exceeds(threshold) {
            debug!(pointer_x, "slider passed commit threshold mid-drag");
            return self.commit();
        }
        GestureOutcome::Moved
    }

    /// End the drag (pointer up or cancel). Progress left above the threshold
    /// commits; anything else snaps back to zero.
    pub fn release(&mut self, threshold: f32) -> GestureOutcome {
        if !self.active {
            return GestureOutcome::Ignored;
        }
        if self.progress.exceeds(threshold) {
            debug!("slider released above commit threshold");
            return self.commit();
        }
        self.active = false;
        self.progress = SliderProgress::ZERO;
        GestureOutcome::Released
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn commit(&mut self) -> GestureOutcome {
        self.active = false;
        self.progress = SliderProgress::FULL;
        GestureOutcome::Committed
    }
}
