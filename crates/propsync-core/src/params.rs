//! Destructured parameter-list extraction.
//!
//! The component's parameter pattern is read straight out of the text with
//! brace and comma scanning; no parse tree is consulted. The extracted
//! list is the reconciliation target.

use crate::scan::find_from;

/// The destructured field names of a component's parameter pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterList {
    fields: Vec<String>,
    list_start: usize,
    list_end: usize,
    has_trailing_separator: bool,
}

impl ParameterList {
    /// Returns the field names in occurrence order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the offset just past the pattern's opening `{`.
    #[must_use]
    pub const fn list_start(&self) -> usize {
        self.list_start
    }

    /// Returns the offset of the pattern's closing `}`.
    #[must_use]
    pub const fn list_end(&self) -> usize {
        self.list_end
    }

    /// Returns whether the raw list ended in a separator.
    #[must_use]
    pub const fn has_trailing_separator(&self) -> bool {
        self.has_trailing_separator
    }
}

/// Extracts the destructured parameter list beginning at or after
/// `search_from` (typically the end of the component symbol's name).
///
/// The raw substring between the first `{` and the following `}` is split
/// on commas and each piece trimmed. A trailing empty piece signals a
/// trailing separator; it is recorded and dropped from the field list.
/// An empty or whitespace-only pattern therefore yields no fields with
/// `has_trailing_separator` set, matching how a bare `{ }` behaves.
#[must_use]
pub fn extract(text: &str, search_from: usize) -> Option<ParameterList> {
    let open = find_from(text, '{', search_from)?;
    let list_start = open + 1;
    let list_end = find_from(text, '}', list_start)?;
    let raw = text.get(list_start..list_end)?;

    let mut fields: Vec<String> = raw.split(',').map(|piece| piece.trim().to_owned()).collect();
    let has_trailing_separator = fields.last().is_some_and(String::is_empty);
    if has_trailing_separator {
        fields.pop();
    }

    Some(ParameterList {
        fields,
        list_start,
        list_end,
        has_trailing_separator,
    })
}
