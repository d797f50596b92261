//! Per-document debounce scheduling.
//!
//! Rapid edit events collapse into one evaluation: each document owns at
//! most one pending pass, and a newer event replaces the older one
//! (last-write-wins, not a queue). Documents debounce independently, so
//! typing in one file never cancels a pending pass in another.
//!
//! Time is injected: callers pass `Instant`s to [`DebounceScheduler::record`]
//! and [`DebounceScheduler::take_due`], which keeps tests deterministic and
//! leaves the wakeup mechanism to the host loop.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::event::{DocumentId, EditEvent};

#[derive(Debug)]
struct PendingPass {
    due: Instant,
    event: EditEvent,
}

/// Delay-and-coalesce scheduler holding one pending pass per document.
#[derive(Debug)]
pub struct DebounceScheduler {
    delay: Duration,
    pending: HashMap<DocumentId, PendingPass>,
}

impl DebounceScheduler {
    /// Creates a scheduler with the given debounce delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an edit event, replacing any pending pass for the same
    /// document and restarting its delay.
    pub fn record(&mut self, event: EditEvent, now: Instant) {
        let due = now + self.delay;
        let document = event.document().clone();
        if let Some(previous) = self
            .pending
            .insert(document.clone(), PendingPass { due, event })
        {
            tracing::trace!(
                document = %document,
                superseded_revision = previous.event.revision(),
                "pending pass superseded"
            );
        }
    }

    /// Cancels the pending pass for a document, if any.
    pub fn cancel(&mut self, document: &DocumentId) {
        if self.pending.remove(document).is_some() {
            tracing::trace!(document = %document, "pending pass cancelled");
        }
    }

    /// Removes and returns every pass whose delay has elapsed, oldest
    /// deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<EditEvent> {
        let due_documents: Vec<DocumentId> = self
            .pending
            .iter()
            .filter(|(_, pass)| pass.due <= now)
            .map(|(document, _)| document.clone())
            .collect();

        let mut due: Vec<PendingPass> = due_documents
            .iter()
            .filter_map(|document| self.pending.remove(document))
            .collect();
        due.sort_by_key(|pass| pass.due);
        due.into_iter().map(|pass| pass.event).collect()
    }

    /// Returns whether a pass is pending for the document.
    #[must_use]
    pub fn is_pending(&self, document: &DocumentId) -> bool {
        self.pending.contains_key(document)
    }

    /// Returns the earliest pending deadline, for host loops that sleep
    /// until the next wakeup.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|pass| pass.due).min()
    }
}
