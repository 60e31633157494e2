//! Auto-dismiss timer
//!
//! One pending tokio task per widget instance. Scheduling always aborts the
//! previous task first, so a notice shown by a second copy is never hidden by
//! the first copy's timer. Each task carries a generation number; a signal
//! whose generation is no longer current is ignored even if it was already
//! sitting in the channel when the task was aborted.

use super::WidgetSlot;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// How long a notice stays up after the most recent copy
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Messages sent from timer tasks back to the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSignal {
    DismissExpired { slot: WidgetSlot, generation: u64 },
}

/// Cancellable one-shot dismiss timer owned by a single widget
pub struct DismissTimer {
    slot: WidgetSlot,
    delay: Duration,
    signals: mpsc::Sender<WidgetSignal>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl DismissTimer {
    pub fn new(slot: WidgetSlot, delay: Duration, signals: mpsc::Sender<WidgetSignal>) -> Self {
        Self {
            slot,
            delay,
            signals,
            pending: None,
            generation: 0,
        }
    }

    /// Replace any pending timer with a fresh one. Returns its generation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self) -> u64 {
        self.cancel();

        let generation = self.generation;
        let slot = self.slot;
        let delay = self.delay;
        let signals = self.signals.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the host page is shutting down
            let _ = signals
                .send(WidgetSignal::DismissExpired { slot, generation })
                .await;
        }));

        generation
    }

    /// Abort the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Whether a timer is currently pending
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Claim a fired signal. True only for the currently pending timer.
    pub fn accept(&mut self, generation: u64) -> bool {
        if self.pending.is_none() || generation != self.generation {
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
