//! Redraw scheduling for the event loop.
//!
//! The loop repaints after local input (key press, resize, finished
//! command) or when the store has published a revision the last frame did
//! not show. Idle polls draw nothing.

use tokio::sync::watch;

/// Decides whether the next loop turn paints a frame.
#[derive(Debug)]
pub struct RedrawGate {
    changes: watch::Receiver<u64>,
    dirty: bool,
}

impl RedrawGate {
    /// Gate over a store subscription. The first call always draws.
    pub fn new(changes: watch::Receiver<u64>) -> Self {
        Self {
            changes,
            dirty: true,
        }
    }

    /// Local screen state changed.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// `true` when a frame is due; consumes the pending change.
    pub fn should_draw(&mut self) -> bool {
        // A closed channel means the store is gone; nothing new to show.
        let store_changed = self.changes.has_changed().unwrap_or(false);
        if !(self.dirty || store_changed) {
            return false;
        }
        self.changes.borrow_and_update();
        self.dirty = false;
        true
    }
}
