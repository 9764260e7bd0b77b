//! scpl-regex - Structural Regex Retokenization
//!
//! Splits a compiled regex's source text into structural tokens (groups,
//! classes, repeats, escapes, operators, literals, in-class ranges) and
//! rewrites the literal parts through a casemap, a character-to-string
//! substitution table. This implements case-insensitive matching under
//! custom alphabets: patterns carrying the `i` flag are refolded once
//! through the table and the flag is dropped.
//!
//! The retokenizer is deliberately standalone: it knows nothing about the
//! SCPL parser and is reached only through [`fold_pattern`].

mod lexer;
mod ranges;
mod translate;

pub use lexer::{tokenise, RegexToken, RegexTokenKind};
pub use translate::{fold_pattern, translate, CaseTable};

use thiserror::Error;

/// A structural error in a regex source, with the character index of the
/// construct that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RetokenizeError {
    pub index: usize,
    pub message: &'static str,
}
