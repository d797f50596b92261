//! Text edits and atomic edit batches.
//!
//! Every edit in a batch addresses the same immutable snapshot. Offsets go
//! stale the instant any edit is applied, so a batch is applied as one
//! atomic operation: positions are resolved before any text moves, and the
//! edits land from the highest offset down so earlier offsets never shift.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A single replacement against one snapshot.
///
/// Insertions use an empty range; deletions use empty replacement text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    range: Span,
    new_text: String,
}

impl TextEdit {
    /// Creates a replacement edit.
    #[must_use]
    pub fn replace(range: Span, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Creates an insertion at a single offset.
    #[must_use]
    pub fn insert(offset: usize, new_text: impl Into<String>) -> Self {
        Self::replace(Span::at(offset), new_text)
    }

    /// Creates a deletion of the given range.
    #[must_use]
    pub fn delete(range: Span) -> Self {
        Self::replace(range, String::new())
    }

    /// Returns the range this edit replaces.
    #[must_use]
    pub const fn range(&self) -> Span {
        self.range
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn new_text(&self) -> &str {
        &self.new_text
    }
}

/// An ordered set of edits addressed against one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBatch {
    edits: Vec<TextEdit>,
}

impl EditBatch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self { edits: Vec::new() }
    }

    /// Appends an edit to the batch.
    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    /// Returns the edits in batch order.
    #[must_use]
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Returns whether the batch holds no edits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Returns the number of edits in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Applies every edit to `snapshot` and returns the new text.
    ///
    /// All ranges are interpreted against `snapshot`, never against the
    /// intermediate results. Edits are applied position-descending; edits
    /// sharing a position keep their batch order in the output. Edits whose
    /// ranges fall outside the snapshot or split a UTF-8 sequence are
    /// ignored.
    #[must_use]
    pub fn apply(&self, snapshot: &str) -> String {
        let mut ordered: Vec<&TextEdit> = self.edits.iter().collect();
        ordered.sort_by_key(|edit| edit.range.start());

        let mut result = snapshot.to_owned();
        for edit in ordered.iter().rev() {
            let Span { start, end } = edit.range;
            let valid = end <= result.len()
                && start <= end
                && result.is_char_boundary(start)
                && result.is_char_boundary(end);
            if valid {
                result.replace_range(start..end, &edit.new_text);
            }
        }
        result
    }
}

impl FromIterator<TextEdit> for EditBatch {
    fn from_iter<I: IntoIterator<Item = TextEdit>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}
