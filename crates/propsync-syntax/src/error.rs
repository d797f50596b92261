//! Error types for TSX parsing.

use thiserror::Error;

/// Errors from parsing TSX source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser with the TSX grammar.
    #[error("failed to initialise TSX parser: {message}")]
    ParserInit {
        /// Description of the failure.
        message: String,
    },

    /// The parser failed to produce a syntax tree.
    #[error("failed to parse TSX source: {message}")]
    Parse {
        /// Description of the failure.
        message: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInit {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
