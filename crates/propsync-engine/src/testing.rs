//! In-memory host for tests and embedding without a real editor.
//!
//! [`MemoryHost`] keeps documents as plain strings, applies edit batches
//! with the core's atomic semantics, records error notifications, and
//! stands in for the editor's range formatter with a deterministic
//! single-line reflow of the destructured list. That determinism lets
//! end-to-end tests assert exact text.

use std::collections::HashMap;

use propsync_core::snippet::CURSOR_PLACEHOLDER;
use propsync_core::{EditBatch, Span, TextEdit};

use crate::event::DocumentId;
use crate::host::DocumentHost;

/// A recording, in-memory [`DocumentHost`].
#[derive(Debug, Default)]
pub struct MemoryHost {
    documents: HashMap<DocumentId, String>,
    errors: Vec<String>,
}

impl MemoryHost {
    /// Creates an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (or replaces) a document.
    pub fn open(&mut self, document: DocumentId, text: impl Into<String>) {
        self.documents.insert(document, text.into());
    }

    /// Returns a document's current text.
    #[must_use]
    pub fn text(&self, document: &DocumentId) -> Option<&str> {
        self.documents.get(document).map(String::as_str)
    }

    /// Returns every error notification shown so far.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl DocumentHost for MemoryHost {
    fn snapshot(&self, document: &DocumentId) -> Option<String> {
        self.documents.get(document).cloned()
    }

    fn apply_edits(&mut self, document: &DocumentId, batch: &EditBatch) -> bool {
        let Some(text) = self.documents.get_mut(document) else {
            return false;
        };
        *text = batch.apply(text);
        true
    }

    fn format_range(&mut self, document: &DocumentId, range: Span) -> Vec<TextEdit> {
        let Some(region) = self
            .documents
            .get(document)
            .and_then(|text| text.get(range.start()..range.end()))
        else {
            return Vec::new();
        };

        let Some(reflowed) = reflow_braced_list(region) else {
            return Vec::new();
        };
        if reflowed == region {
            return Vec::new();
        }
        vec![TextEdit::replace(range, reflowed)]
    }

    fn insert_template(&mut self, document: &DocumentId, offset: usize, template: &str) -> bool {
        let Some(text) = self.documents.get_mut(document) else {
            return false;
        };
        if offset > text.len() || !text.is_char_boundary(offset) {
            return false;
        }
        // A real snippet host replaces the placeholder with the cursor.
        let literal = template.replace(CURSOR_PLACEHOLDER, "");
        text.insert_str(offset, &literal);
        true
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }
}

/// Reflows a `{ ... }` region onto one line with single-space, comma
/// separated entries. Returns `None` when the region is not brace
/// delimited.
fn reflow_braced_list(region: &str) -> Option<String> {
    let inner = region.strip_prefix('{')?.strip_suffix('}')?;
    let entries: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        Some("{ }".to_owned())
    } else {
        Some(format!("{{ {} }}", entries.join(", ")))
    }
}
