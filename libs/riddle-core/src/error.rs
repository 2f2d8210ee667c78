//! Error types for riddle-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a riddle deck.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing ID for riddle starting at line {line}")]
    MissingId { line: usize },

    #[error("missing question at line {line}")]
    MissingQuestion { line: usize },

    #[error("missing answer at line {line}")]
    MissingAnswer { line: usize },

    #[error("duplicate ID {id} at line {line}")]
    DuplicateId { id: String, line: usize },

    #[error("riddle {id} at line {line} needs at least one distractor option")]
    NotEnoughOptions { id: String, line: usize },

    #[error("empty deck")]
    EmptyDeck,
}
