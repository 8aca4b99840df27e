//! # Feed Events
//!
//! Notifications from the controller to whatever renders the feed.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Feed Events                                    │
//! │                                                                         │
//! │  load_all() ──► emit_state(Loading)                                    │
//! │      │                                                                  │
//! │      ├─ ok ───► emit_state(Idle) ──► emit_window(12 of 30)             │
//! │      │                                                                  │
//! │      └─ fail ─► emit_state(Error) ──► emit_error(LOAD_FAILED_NOTICE)   │
//! │                                                                         │
//! │  load_more() ─► emit_window(24 of 30)      (only when the window grew) │
//! │                                                                         │
//! │  The error notice is sent once per failed load. It is a toast, not a   │
//! │  banner: the previously loaded items stay on screen.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use nearnow_core::{LoadState, PageSummary};

/// User-facing text for a failed load.
pub const LOAD_FAILED_NOTICE: &str = "Failed to load data. Please try again.";

/// Receiver for feed events (implemented by the view integration).
pub trait FeedEventEmitter: Send + Sync {
    /// The load state changed.
    fn emit_state(&self, state: LoadState);

    /// The visible window changed.
    fn emit_window(&self, summary: PageSummary);

    /// A load failed; show a transient notification.
    fn emit_error(&self, message: &str);
}

/// No-op event emitter.
pub struct NoOpEmitter;

impl FeedEventEmitter for NoOpEmitter {
    fn emit_state(&self, _state: LoadState) {}
    fn emit_window(&self, _summary: PageSummary) {}
    fn emit_error(&self, _message: &str) {}
}

/// A recorded feed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    State(LoadState),
    Window(PageSummary),
    Error(String),
}

/// Emitter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    events: Mutex<Vec<FeedEvent>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<FeedEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn push(&self, event: FeedEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl FeedEventEmitter for RecordingEmitter {
    fn emit_state(&self, state: LoadState) {
        self.push(FeedEvent::State(state));
    }

    fn emit_window(&self, summary: PageSummary) {
        self.push(FeedEvent::Window(summary));
    }

    fn emit_error(&self, message: &str) {
        self.push(FeedEvent::Error(message.to_string()));
    }
}
