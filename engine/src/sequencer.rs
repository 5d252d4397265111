//! Timed playback of the scripted loading messages.
//!
//! A running sequence owns exactly one timer task. The task only sends tick
//! messages; all state changes happen when the owner drains them with
//! [`Sequencer::poll`]. Every run is tagged with a run id, so ticks queued by a
//! superseded run are dropped even if they were sent before the abort landed.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Stopped,
    Running {
        index: usize,
    },
    Complete,
}

/// Transition observed while draining ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    Advanced { index: usize },
    Completed,
}

#[derive(Debug, Clone, Copy)]
struct Tick {
    run: u64,
}

#[derive(Debug)]
pub struct Sequencer {
    steps: usize,
    interval: Duration,
    state: SequencerState,
    run: u64,
    timer: Option<AbortHandle>,
    tx: mpsc::UnboundedSender<Tick>,
    rx: mpsc::UnboundedReceiver<Tick>,
}

impl Sequencer {
    /// `steps` is clamped to at least one so a sequence always ends.
    #[must_use]
    pub fn new(steps: usize, interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            steps: steps.max(1),
            interval,
            state: SequencerState::Stopped,
            run: 0,
            timer: None,
            tx,
            rx,
        }
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Current message index; zero unless running.
    #[must_use]
    pub fn index(&self) -> usize {
        match self.state {
            SequencerState::Running { index } => index,
            SequencerState::Stopped | SequencerState::Complete => 0,
        }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        matches!(self.state, SequencerState::Running { .. })
    }

    #[cfg(test)]
    fn steps(&self) -> usize {
        self.steps
    }

    /// Start from index zero, cancelling any timer from a previous run.
    ///
    /// Must be called from within a tokio runtime; outside one the sequence
    /// is marked running but never advances.
    pub fn start(&mut self) {
        self.cancel_timer();
        self.run = self.run.wrapping_add(1);
        self.state = SequencerState::Running { index: 0 };

        let Ok(handle) = Handle::try_current() else {
            warn!("sequencer started outside a tokio runtime; it will not advance");
            return;
        };

        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        let tx = self.tx.clone();
        let run = self.run;
        let steps = self.steps;
        let interval = self.interval;

        let task = async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for _ in 0..steps {
                ticker.tick().await;
                if tx.send(Tick { run }).is_err() {
                    break;
                }
            }
        };

        handle.spawn(async move {
            let _ = Abortable::new(task, abort_registration).await;
        });
        self.timer = Some(abort_handle);
        debug!(run, steps, ?interval, "sequencer started");
    }

    /// Cancel the pending timer and return to `Stopped`.
    pub fn stop(&mut self) {
        self.cancel_timer();
        // Invalidate anything the old task already queued.
        self.run = self.run.wrapping_add(1);
        self.state = SequencerState::Stopped;
    }

    /// Drain queued ticks and apply them in order.
    pub fn poll(&mut self) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        while let Ok(tick) = self.rx.try_recv() {
            if tick.run != self.run {
                debug!(stale = tick.run, current = self.run, "dropping stale tick");
                continue;
            }
            let SequencerState::Running { index } = self.state else {
                continue;
            };
            let next = index + 1;
            if next >= self.steps {
                self.cancel_timer();
                self.state = SequencerState::Complete;
                debug!(run = self.run, "sequencer complete");
                events.push(SequencerEvent::Completed);
            } else {
                self.state = SequencerState::Running { index: next };
                events.push(SequencerEvent::Advanced { index: next });
            }
        }
        events
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for Sequencer {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
