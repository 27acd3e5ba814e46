//! Cancellable one-shot timers for deferred UI transitions

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// The two deferred transitions the form schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Clears the form and hides the success banner after an accepted submit
    SuccessReset,
    /// Ends the rejection shake animation
    ShakeClear,
}

impl TimerKind {
    /// Fixed delay before this timer fires
    pub fn delay(self) -> Duration {
        match self {
            TimerKind::SuccessReset => Duration::from_millis(3000),
            TimerKind::ShakeClear => Duration::from_millis(500),
        }
    }
}

/// Schedules one-shot timers as spawned sleep tasks. Fired kinds arrive on
/// the receiver returned by [`TimerService::new`]; scheduling a kind that is
/// already pending aborts the earlier task first, so at most one task per
/// kind is ever in flight.
pub struct TimerService {
    tx: UnboundedSender<TimerKind>,
    pending: HashMap<TimerKind, JoinHandle<()>>,
}

impl TimerService {
    pub fn new() -> (Self, UnboundedReceiver<TimerKind>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                pending: HashMap::new(),
            },
            rx,
        )
    }

    /// Schedule `kind` to fire after its fixed delay, replacing any pending
    /// timer of the same kind
    pub fn schedule(&mut self, kind: TimerKind) {
        self.schedule_after(kind, kind.delay());
    }

    fn schedule_after(&mut self, kind: TimerKind, delay: Duration) {
        self.cancel(kind);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver dropped means the app is shutting down
            let _ = tx.send(kind);
        });
        self.pending.insert(kind, handle);
    }

    /// Abort a pending timer of `kind`, if any
    pub fn cancel(&mut self, kind: TimerKind) {
        if let Some(handle) = self.pending.remove(&kind) {
            handle.abort();
        }
    }

    /// Drop the bookkeeping for a kind that has fired. Aborting a task that
    /// already completed is a no-op, so this is safe either way.
    pub fn mark_fired(&mut self, kind: TimerKind) {
        self.cancel(kind);
    }
}
