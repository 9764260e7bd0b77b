//! Evaluation and operand-construction errors.

use thiserror::Error;

/// A failure while constructing an operand from token text: the shape
/// was lexable but the value is out of range. The parser attaches the
/// originating token's index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValueError(pub String);

/// A failure during evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The variable bag has no entry for a referenced name.
    #[error("name {0:?} not found")]
    NameNotFound(String),

    /// The variable bag holds a value of the wrong kind for this name.
    #[error("variable {name:?} is not of type {expected}")]
    WrongType {
        name: String,
        expected: &'static str,
    },

    #[error("integer overflow in {0}")]
    Overflow(&'static str),

    #[error("shift amount {0} out of range")]
    ShiftRange(i64),

    #[error("negative integer exponent")]
    NegativeExponent,

    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error(transparent)]
    Pattern(#[from] scpl_regex::RetokenizeError),
}
