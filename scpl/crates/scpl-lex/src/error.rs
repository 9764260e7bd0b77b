//! Lexer error types.

use thiserror::Error;

/// A failure to lex the input.
///
/// Every variant carries a 0-based character index so callers can draw a
/// caret at the failing site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No candidate accepted the character at `index`.
    #[error("unknown token")]
    Unknown { index: usize },

    /// Text accumulated but no candidate ever reached a complete state.
    /// `text` is the partial token, starting at `index`.
    #[error("unfinished token")]
    Unfinished { index: usize, text: String },

    /// A candidate invalidated itself with a kind-specific diagnostic
    /// (`too many points`, `octet must be between 0 and 255`, ...).
    #[error("{message}")]
    Invalid { index: usize, message: &'static str },
}

impl LexError {
    /// The character index where the token started to go wrong.
    pub fn index(&self) -> usize {
        match self {
            LexError::Unknown { index }
            | LexError::Unfinished { index, .. }
            | LexError::Invalid { index, .. } => *index,
        }
    }

    /// The character index to point a caret at. For unfinished tokens this
    /// is the last accepted character rather than the token start.
    pub fn caret_index(&self) -> usize {
        match self {
            LexError::Unfinished { index, text } => {
                index + text.chars().count().saturating_sub(1)
            }
            _ => self.index(),
        }
    }
}
