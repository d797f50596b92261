//! Tree-sitter backed outline provider for props reconciliation.
//!
//! This crate is the parser-backed implementation of the outline
//! capability: it parses TSX source with Tree-sitter and extracts the
//! symbol outline (`propsync-core`'s [`propsync_core::Outline`]) that the
//! reconciliation engine consumes. Parsing is error-tolerant, so an
//! outline is still produced for partially edited source.
//!
//! - [`Parser`] / [`ParseResult`] — TSX parsing with error detection
//! - [`document_outline`] — symbol extraction from a parse result

mod error;
mod outline;
mod parser;

pub use error::SyntaxError;
pub use outline::document_outline;
pub use parser::{ParseResult, Parser};

#[cfg(test)]
mod tests;
