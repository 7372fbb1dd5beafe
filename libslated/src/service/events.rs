//! Event system for submission progress
//!
//! An in-process broadcast bus distributing submission lifecycle events to
//! subscribers (CLI output, logging) without blocking the gateway. If no
//! subscribers exist, events are dropped immediately; lagging subscribers
//! lose oldest events first.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Broadcast bus for submission events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the given per-subscriber buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers, non-blocking
    pub fn emit(&self, event: Event) {
        // send() errors when nobody is listening, which is fine
        let _ = self.sender.send(event);
    }

    /// Number of active subscribers (debugging/metrics only)
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Submission lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// All preconditions passed; the expanded batch is about to persist
    SubmissionStarted {
        /// Number of selected accounts
        accounts: usize,
        /// Number of selected post types
        post_types: usize,
    },

    /// A precondition failed before any external call
    SubmissionRejected {
        /// User-visible rejection message
        reason: String,
    },

    /// The batch persisted successfully
    SubmissionCompleted {
        /// Total records created
        records: usize,
        /// Distinct accounts covered
        accounts: usize,
        /// Scheduled date and time, e.g. "2026-09-14 12:00"
        scheduled_for: String,
    },

    /// Persistence or authentication failed; the draft is preserved
    SubmissionFailed {
        /// Error message
        error: String,
    },
}
