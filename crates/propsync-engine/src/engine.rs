//! The reconciliation engine.
//!
//! Drives one pass per debounced edit event through its phases: evaluate
//! the snapshot against the outline, apply the planned batch atomically,
//! then re-format the affected span. Each phase boundary re-reads the
//! document; offsets are only trusted within the single atomic batch.
//! A pass that cannot proceed ends silently — reconciliation is a
//! background convenience, never a user-initiated command.

use std::time::{Duration, Instant};

use propsync_core::{EditBatch, reconcile};

use crate::debounce::DebounceScheduler;
use crate::event::{DocumentId, EditEvent};
use crate::host::{DocumentHost, OutlineSource};

/// Engine construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long to wait after the last edit before evaluating.
    pub debounce_delay: Duration,
    /// Suffix that marks a type declaration as a props interface.
    pub props_suffix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_delay: Duration::from_millis(500),
            props_suffix: propsync_core::PROPS_SUFFIX.to_owned(),
        }
    }
}

/// How one reconciliation pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The document is not open in the host.
    NoSnapshot,
    /// No outline could be produced for the snapshot.
    NoOutline,
    /// Planning decided the pass does not apply.
    Skipped(reconcile::SkipReason),
    /// Declared and destructured names already agree.
    InSync,
    /// The host rejected the planned edit batch.
    ApplyRejected,
    /// Edits were applied and the affected span re-formatted.
    Applied {
        /// Number of fields inserted into the parameter list.
        added: usize,
        /// Number of fields removed from the parameter list.
        removed: usize,
    },
}

/// Keeps props interfaces and destructured parameter lists in agreement.
///
/// The host feeds edit events into [`SyncEngine::on_did_change`] and pumps
/// [`SyncEngine::tick`] from its event loop (or a timer armed from
/// [`SyncEngine::next_deadline`]).
pub struct SyncEngine<H, O> {
    config: EngineConfig,
    scheduler: DebounceScheduler,
    host: H,
    outline_source: O,
}

impl<H: DocumentHost, O: OutlineSource> SyncEngine<H, O> {
    /// Creates an engine over the given host and outline source.
    #[must_use]
    pub fn new(config: EngineConfig, host: H, outline_source: O) -> Self {
        let scheduler = DebounceScheduler::new(config.debounce_delay);
        Self {
            config,
            scheduler,
            host,
            outline_source,
        }
    }

    /// Returns the host, for callers that also drive it directly.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Records an edit event for debounced evaluation.
    ///
    /// Events with an empty change list are ignored. A newer event for the
    /// same document supersedes the pending one.
    pub fn on_did_change(&mut self, event: EditEvent, now: Instant) {
        if event.changes().is_empty() {
            return;
        }
        self.scheduler.record(event, now);
    }

    /// Returns the earliest pending evaluation deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Runs every pass whose debounce delay has elapsed and returns the
    /// outcome per document.
    pub fn tick(&mut self, now: Instant) -> Vec<(DocumentId, PassOutcome)> {
        let mut outcomes = Vec::new();
        for event in self.scheduler.take_due(now) {
            let Some(edit_offset) = event.first_change_offset() else {
                continue;
            };
            let document = event.document().clone();
            let outcome = self.run_pass(&document, edit_offset);
            tracing::debug!(
                document = %document,
                revision = event.revision(),
                ?outcome,
                "reconciliation pass finished"
            );
            outcomes.push((document, outcome));
        }
        outcomes
    }

    /// Runs one reconciliation pass immediately.
    ///
    /// `edit_offset` is the start offset of the triggering edit in the
    /// document's current text. The pass re-reads the document at each
    /// phase boundary; only the planned batch freezes offsets.
    pub fn run_pass(&mut self, document: &DocumentId, edit_offset: usize) -> PassOutcome {
        let Some(text) = self.host.snapshot(document) else {
            return PassOutcome::NoSnapshot;
        };
        let Some(outline) = self.outline_source.outline(document, &text) else {
            return PassOutcome::NoOutline;
        };

        let plan = match reconcile::plan(&text, &outline, edit_offset, &self.config.props_suffix) {
            reconcile::Outcome::Skipped(reason) => {
                tracing::trace!(document = %document, reason = reason.as_str(), "pass skipped");
                return PassOutcome::Skipped(reason);
            }
            reconcile::Outcome::InSync => return PassOutcome::InSync,
            reconcile::Outcome::Plan(plan) => plan,
        };

        if !self.host.apply_edits(document, plan.batch()) {
            return PassOutcome::ApplyRejected;
        }

        self.format_affected_span(document, plan.props_list_start());

        PassOutcome::Applied {
            added: plan.added().len(),
            removed: plan.removed().len(),
        }
    }

    /// The formatting phase: re-read the document, recompute the closing
    /// brace, and apply whatever the host's range formatter returns.
    fn format_affected_span(&mut self, document: &DocumentId, props_list_start: usize) {
        let Some(fresh) = self.host.snapshot(document) else {
            return;
        };
        let Some(span) = reconcile::format_span_after(&fresh, props_list_start) else {
            return;
        };

        let formatting_edits = self.host.format_range(document, span);
        if formatting_edits.is_empty() {
            return;
        }

        let batch: EditBatch = formatting_edits.into_iter().collect();
        if !self.host.apply_edits(document, &batch) {
            tracing::debug!(document = %document, "host rejected formatting edits");
        }
    }
}
