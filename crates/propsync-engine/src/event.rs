//! Edit events delivered by the host editor.

use std::fmt;

use serde::{Deserialize, Serialize};

use propsync_core::Span;

/// Opaque identifier for one open document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a document identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One contiguous change within an edit event: the replaced range and the
/// text that replaced it, both relative to the pre-edit snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentChange {
    span: Span,
    text: String,
}

impl ContentChange {
    /// Creates a content change.
    #[must_use]
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    /// Returns the replaced range.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A document-change notification from the host.
///
/// The revision stamps the document state after this event, so a pending
/// pass can be recognised as superseded when a newer event arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditEvent {
    document: DocumentId,
    changes: Vec<ContentChange>,
    revision: u64,
}

impl EditEvent {
    /// Creates an edit event.
    #[must_use]
    pub fn new(document: DocumentId, changes: Vec<ContentChange>, revision: u64) -> Self {
        Self {
            document,
            changes,
            revision,
        }
    }

    /// Returns the changed document.
    #[must_use]
    pub const fn document(&self) -> &DocumentId {
        &self.document
    }

    /// Returns the changes in this event.
    #[must_use]
    pub fn changes(&self) -> &[ContentChange] {
        &self.changes
    }

    /// Returns the document revision after this event.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the start offset of the first change, the trigger position
    /// for reconciliation.
    #[must_use]
    pub fn first_change_offset(&self) -> Option<usize> {
        self.changes.first().map(|change| change.span().start())
    }
}
