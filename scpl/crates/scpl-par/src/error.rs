//! Parser error types.

use scpl_ast::ValueError;
use scpl_lex::Token;
use thiserror::Error;

/// A failure to parse a token stream. Every variant points at the token
/// where parsing failed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Structural errors: missing operands, unmatched scopes, unknown
    /// variables, operators in impossible positions.
    #[error("{message}")]
    Syntax { token: Token, message: String },

    /// The operand types fit no specialization of the operator, or a
    /// set literal is heterogeneous.
    #[error("{message}")]
    Type { token: Token, message: String },

    /// Operand construction failed on a lexically valid token.
    #[error("{error}")]
    Value { token: Token, error: ValueError },
}

impl ParseError {
    /// The token the error points at.
    pub fn token(&self) -> &Token {
        match self {
            ParseError::Syntax { token, .. }
            | ParseError::Type { token, .. }
            | ParseError::Value { token, .. } => token,
        }
    }

    /// The character index to draw a caret at.
    pub fn index(&self) -> usize {
        self.token().index
    }
}

pub(crate) fn syntax(token: Token, message: impl Into<String>) -> ParseError {
    ParseError::Syntax {
        token,
        message: message.into(),
    }
}

pub(crate) fn type_error(token: Token, message: impl Into<String>) -> ParseError {
    ParseError::Type {
        token,
        message: message.into(),
    }
}
