//! Tree-sitter backed outline source.

use propsync_core::Outline;
use propsync_syntax::{Parser, document_outline};

use crate::event::DocumentId;
use crate::host::OutlineSource;

/// Outline source that parses each snapshot with the TSX grammar.
///
/// Parsing is error-tolerant, so an outline is produced even mid-edit;
/// only a parser failure yields `None`.
pub struct TreeSitterOutlineSource {
    parser: Parser,
}

impl TreeSitterOutlineSource {
    /// Creates the outline source.
    ///
    /// # Errors
    ///
    /// Returns an error if the TSX grammar cannot be loaded.
    pub fn new() -> Result<Self, propsync_syntax::SyntaxError> {
        Ok(Self {
            parser: Parser::new()?,
        })
    }
}

impl OutlineSource for TreeSitterOutlineSource {
    fn outline(&mut self, document: &DocumentId, text: &str) -> Option<Outline> {
        match self.parser.parse(text) {
            Ok(parse) => Some(document_outline(&parse)),
            Err(error) => {
                tracing::debug!(document = %document, %error, "outline unavailable");
                None
            }
        }
    }
}
