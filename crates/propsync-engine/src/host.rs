//! Collaborator traits the engine drives.
//!
//! The host editor owns the documents; the engine only ever sees them
//! through these seams. Every call that cannot produce its result returns
//! an empty value rather than an error: a missing snapshot or outline
//! simply ends the current pass.

use propsync_core::{EditBatch, Outline, Span, TextEdit};

use crate::event::DocumentId;

/// Produces the symbol outline for a document snapshot.
///
/// One method, one result shape. The production implementation parses the
/// snapshot with Tree-sitter ([`crate::TreeSitterOutlineSource`]); tests
/// may substitute a canned outline.
pub trait OutlineSource {
    /// Returns the outline for the snapshot, or `None` when no outline
    /// can be produced.
    fn outline(&mut self, document: &DocumentId, text: &str) -> Option<Outline>;
}

/// Document access and mutation provided by the host editor.
///
/// `apply_edits` interprets every edit in the batch against the document
/// state at call time, mirroring an editor's atomic edit builder; the
/// engine never interleaves reads with partially applied batches.
pub trait DocumentHost {
    /// Returns the current text of the document, or `None` when it is not
    /// open.
    fn snapshot(&self, document: &DocumentId) -> Option<String>;

    /// Applies an edit batch atomically. Returns `false` when the host
    /// rejected the batch.
    fn apply_edits(&mut self, document: &DocumentId, batch: &EditBatch) -> bool;

    /// Requests a structural re-format of `range` and returns the
    /// replacement edits, which the caller applies. An empty result means
    /// the formatter had nothing to change.
    fn format_range(&mut self, document: &DocumentId, range: Span) -> Vec<TextEdit>;

    /// Inserts a template at `offset`. Templates may carry cursor
    /// placeholders ([`propsync_core::snippet::CURSOR_PLACEHOLDER`]);
    /// snippet-capable hosts position the cursor there. Returns `false`
    /// when the insertion was rejected.
    fn insert_template(&mut self, document: &DocumentId, offset: usize, template: &str) -> bool;

    /// Shows a non-blocking error notification to the user.
    fn show_error(&mut self, message: &str);
}
