//! Symbol outline data model.
//!
//! The outline is the result shape every outline provider must produce:
//! a document-ordered list of named symbols, each with a full range, a
//! selection range (the name itself) and optional child symbols. The
//! reconciler consumes exactly two kinds of entry: the props interface
//! (name ends with the configured suffix, children are the declared prop
//! names) and the component symbol (name matches the component).

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A named declaration in a document, with optional child symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    name: String,
    range: Span,
    selection_range: Span,
    children: Vec<Symbol>,
}

impl Symbol {
    /// Creates a leaf symbol with no children.
    #[must_use]
    pub fn new(name: impl Into<String>, range: Span, selection_range: Span) -> Self {
        Self {
            name: name.into(),
            range,
            selection_range,
            children: Vec::new(),
        }
    }

    /// Creates a symbol with child symbols.
    #[must_use]
    pub fn with_children(
        name: impl Into<String>,
        range: Span,
        selection_range: Span,
        children: Vec<Symbol>,
    ) -> Self {
        Self {
            name: name.into(),
            range,
            selection_range,
            children,
        }
    }

    /// Returns the symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full extent of the declaration.
    #[must_use]
    pub const fn range(&self) -> Span {
        self.range
    }

    /// Returns the range of the declared name itself.
    #[must_use]
    pub const fn selection_range(&self) -> Span {
        self.selection_range
    }

    /// Returns the child symbols in document order.
    #[must_use]
    pub fn children(&self) -> &[Symbol] {
        &self.children
    }

    /// Returns the child names in document order.
    #[must_use]
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(Symbol::name).collect()
    }
}

/// A document's symbols in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    symbols: Vec<Symbol>,
}

impl Outline {
    /// Creates an outline from document-ordered symbols.
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Returns the top-level symbols.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns whether the outline has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the first symbol whose name ends with `suffix`.
    ///
    /// This is how the props interface is located; only one props interface
    /// per document is supported, and the first match wins.
    #[must_use]
    pub fn props_interface(&self, suffix: &str) -> Option<&Symbol> {
        self.symbols
            .iter()
            .find(|symbol| symbol.name.ends_with(suffix))
    }

    /// Returns the first symbol with exactly the given name.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.name == name)
    }
}
