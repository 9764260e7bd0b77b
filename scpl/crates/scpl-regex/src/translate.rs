//! Casemap translation over structural tokens.

use rustc_hash::FxHashMap;

use crate::lexer::{tokenise, RegexToken, RegexTokenKind};
use crate::ranges;
use crate::RetokenizeError;

/// A casemap: each character maps to its full replacement text, e.g.
/// `a → "aA"` for folding, or `[ → "[{"` under rfc1459 rules.
pub type CaseTable = FxHashMap<char, String>;

/// Rewrites literal tokens through `table`.
///
/// - In-class ranges expand to their member characters, each replaced by
///   its translation (members without one stay), deduplicated in order.
/// - A literal with translation `t` becomes `t` inside a class; outside,
///   it becomes the class `[t]` when `t` has several characters, else `t`.
/// - Everything else passes through untouched.
pub fn translate(tokens: &[RegexToken], table: &CaseTable) -> Vec<RegexToken> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut in_class = false;

    for token in tokens {
        match token.kind {
            RegexTokenKind::Class => {
                in_class = token.text.starts_with('[');
                out.push(token.clone());
            }
            RegexTokenKind::Range => {
                let (start, end) = range_ends(&token.text);
                let members = ranges::expand(start, end).unwrap_or_default();
                let mut expanded = String::new();
                for member in members.chars() {
                    let piece = match table.get(&member) {
                        Some(replacement) => replacement.clone(),
                        None => member.to_string(),
                    };
                    for c in piece.chars() {
                        if !expanded.contains(c) {
                            expanded.push(c);
                        }
                    }
                }
                out.push(RegexToken {
                    kind: RegexTokenKind::Opaque,
                    text: expanded,
                });
            }
            RegexTokenKind::Literal => {
                let mut text = String::new();
                let mut changed = false;
                for c in token.text.chars() {
                    match table.get(&c) {
                        Some(replacement) => {
                            changed = true;
                            if in_class || replacement.chars().count() <= 1 {
                                text.push_str(replacement);
                            } else {
                                text.push('[');
                                text.push_str(replacement);
                                text.push(']');
                            }
                        }
                        None => text.push(c),
                    }
                }
                if changed {
                    out.push(RegexToken {
                        kind: RegexTokenKind::Opaque,
                        text,
                    });
                } else {
                    out.push(token.clone());
                }
            }
            _ => out.push(token.clone()),
        }
    }

    out
}

/// Tokenizes `pattern`, translates it through `table`, and reassembles
/// the rewritten source. The single entry point used by the AST's
/// casemapped nodes.
pub fn fold_pattern(pattern: &str, table: &CaseTable) -> Result<String, RetokenizeError> {
    let tokens = tokenise(pattern)?;
    Ok(translate(&tokens, table)
        .into_iter()
        .map(|t| t.text)
        .collect())
}

fn range_ends(text: &str) -> (char, char) {
    let mut chars = text.chars();
    let start = chars.next().unwrap_or('\0');
    let end = chars.nth(1).unwrap_or(start);
    (start, end)
}
