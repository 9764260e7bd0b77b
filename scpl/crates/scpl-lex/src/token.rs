//! Token definitions.

use std::fmt;

/// The kind of a lexed token.
///
/// `Space` is transparent: the parser never inspects it. Every other kind
/// is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Space,
    Word,
    Number,
    Hex,
    Duration,
    String,
    Regex,
    Scope,
    Operator,
    Ipv4,
    Ipv6,
}

/// One token: its kind, its verbatim text, and the character index of its
/// first character in the input.
///
/// Concatenating the `text` of every token in a lex result reconstructs
/// the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub index: usize,
}

impl Token {
    /// Transparent tokens are skipped by the parser.
    pub fn is_transparent(&self) -> bool {
        self.kind == TokenKind::Space
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.text)
    }
}
