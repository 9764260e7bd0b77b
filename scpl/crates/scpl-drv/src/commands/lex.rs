//! The `lex` subcommand.

use scpl_lex::{tokenise, Token};
use tracing::debug;

use crate::report;

pub fn run(expr: &str) -> u8 {
    match lex(expr) {
        Some(_) => 0,
        None => 1,
    }
}

/// Tokenises and prints; shared with the later pipeline stages so their
/// output always starts with the token line.
pub(crate) fn lex(expr: &str) -> Option<Vec<Token>> {
    match tokenise(expr) {
        Ok(tokens) => {
            debug!(count = tokens.len(), "lexed");
            let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
            println!("tokens  : [{}]", rendered.join(", "));
            Some(tokens)
        }
        Err(err) => {
            report::caret(expr, err.caret_index(), &err.to_string());
            None
        }
    }
}
