//! # Undo Controller
//!
//! Deletion is always reversible for a short window. The controller owns a
//! single pending slot: the most recently deleted record plus an armed
//! expiry deadline. There is no history stack; deleting again while a
//! deletion is pending silently drops the earlier one.
//!
//! The timer is an owned deadline, not a background thread. jobtrack is
//! single-threaded and event-driven, so the host loop pumps [`tick`] between
//! events to finalize expiry, and [`restore`] re-checks the deadline itself
//! so a stale undo is a no-op regardless of pump frequency. Cancelling a
//! timer is dropping its handle, which makes cancellation idempotent by
//! construction.
//!
//! [`tick`]: UndoController::tick
//! [`restore`]: UndoController::restore

use crate::error::Result;
use crate::model::Application;
use crate::store::{RecordStore, StorageBackend};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a deletion stays reversible unless configured otherwise.
pub const DEFAULT_UNDO_WINDOW: Duration = Duration::from_secs(10);

/// An armed expiry deadline. Dropping the timer cancels it.
///
/// A window too long for the clock to represent arms with no deadline
/// at all; such a timer never elapses.
#[derive(Debug)]
struct ExpiryTimer {
    deadline: Option<Instant>,
}

impl ExpiryTimer {
    fn arm(window: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(window),
        }
    }

    fn is_elapsed(&self) -> bool {
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    fn remaining(&self) -> Duration {
        match self.deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => Duration::MAX,
        }
    }
}

#[derive(Debug)]
struct PendingUndo {
    record: Application,
    timer: ExpiryTimer,
}

/// Outcome of an undo attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    /// The deletion was reversed; the record is back in the store.
    Restored(Application),
    /// The window had already closed; the record stays deleted.
    Expired,
    /// There was nothing to undo.
    Idle,
}

pub struct UndoController {
    window: Duration,
    pending: Option<PendingUndo>,
}

impl UndoController {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_UNDO_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Remove the record from the store and hold it for possible undo.
    ///
    /// Returns the removed record, the caller's cue to offer undo. If the
    /// id is not in the store nothing changes and `None` comes back.
    pub fn delete<B: StorageBackend>(
        &mut self,
        store: &mut RecordStore<B>,
        id: Uuid,
    ) -> Result<Option<Application>> {
        match store.remove(id)? {
            Some(record) => {
                // Replacing the slot drops any earlier timer, cancelling it.
                self.pending = Some(PendingUndo {
                    record: record.clone(),
                    timer: ExpiryTimer::arm(self.window),
                });
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Reverse the pending deletion if the window is still open.
    ///
    /// The deadline is re-checked here, so an undo arriving after expiry
    /// reports `Expired` even if no tick has run in between. If the store
    /// write fails the pending record is put back, leaving the undo
    /// retryable.
    pub fn restore<B: StorageBackend>(
        &mut self,
        store: &mut RecordStore<B>,
    ) -> Result<RestoreOutcome> {
        let pending = match self.pending.take() {
            Some(pending) => pending,
            None => return Ok(RestoreOutcome::Idle),
        };

        if pending.timer.is_elapsed() {
            return Ok(RestoreOutcome::Expired);
        }

        if let Err(e) = store.upsert(&pending.record) {
            self.pending = Some(pending);
            return Err(e);
        }
        Ok(RestoreOutcome::Restored(pending.record))
    }

    /// Finalize expiry. The host event loop calls this between events.
    ///
    /// Returns the expired record exactly once after the window closes,
    /// `None` otherwise.
    pub fn tick(&mut self) -> Option<Application> {
        match &self.pending {
            Some(pending) if pending.timer.is_elapsed() => {
                self.pending.take().map(|pending| pending.record)
            }
            _ => None,
        }
    }

    /// The record awaiting undo, if its window is still open.
    /// An elapsed-but-unticked slot counts as already gone.
    pub fn pending(&self) -> Option<&Application> {
        self.pending
            .as_ref()
            .filter(|pending| !pending.timer.is_elapsed())
            .map(|pending| &pending.record)
    }

    /// Time left in the undo window.
    pub fn time_left(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .filter(|pending| !pending.timer.is_elapsed())
            .map(|pending| pending.timer.remaining())
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Default for UndoController {
    fn default() -> Self {
        Self::new()
    }
}
