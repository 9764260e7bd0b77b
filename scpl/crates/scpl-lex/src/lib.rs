//! scpl-lex - The SCPL Lexer
//!
//! Turns one line of filter text into an ordered token sequence by
//! advancing many mutually ambiguous partial-token candidates in parallel.
//! Token kinds overlap heavily at their leading characters (`/a/` could be
//! a regex or a division, `1.2.3.4` starts like a float, `fd84::` starts
//! like a word, `0x10` starts like a number), so instead of committing at
//! the first character, the lexer seeds one candidate per kind and offers
//! every incoming character to all survivors.
//!
//! When all candidates have rejected, the round resolves:
//!
//! - the latest-seeded candidate still complete when it was dropped wins
//!   and is emitted; the character that emptied the set reseeds the next
//!   round;
//! - otherwise, if a candidate retracted a complete state while rejecting
//!   (e.g. `1.0f`), its kind-specific diagnostic wins;
//! - otherwise accumulated text is an `unfinished token`, and an
//!   unrecognized first character is an `unknown token`.
//!
//! End of input forces every remaining candidate to resolve the same way.

mod candidate;
mod edge_cases;
mod error;
mod token;

pub use error::LexError;
pub use token::{Token, TokenKind};

use candidate::Candidate;

/// Splits `input` into tokens.
///
/// Concatenating the text of every returned token reconstructs `input`.
/// Indices count characters, not bytes.
pub fn tokenise(input: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    // True at the start of the expression and after operator tokens; the
    // regex candidate needs it for delimiter disambiguation.
    let mut after_operator = true;
    let mut pos = 0;

    while pos < chars.len() {
        let start = pos;
        // candidates stay in place for the whole round; liveness is a
        // bitmask so advancing a character allocates nothing
        let mut candidates = candidate::seed(after_operator);
        let all: u16 = (1 << candidates.len()) - 1;
        let mut dead: u16 = 0;
        let mut broken: Option<(usize, &'static str)> = None;

        let token = loop {
            if pos == chars.len() {
                // end of input forces the remaining candidates to resolve
                break resolve_round(&candidates, all & !dead, start, pos, broken)?;
            }
            let c = chars[pos];
            let mut dropped: u16 = 0;
            for (i, cand) in candidates.iter_mut().enumerate() {
                let bit = 1 << i;
                if dead & bit != 0 {
                    continue;
                }
                let was_complete = cand.complete();
                if let Err(reason) = cand.push(c) {
                    dead |= bit;
                    dropped |= bit;
                    // the latest retraction wins: it is the candidate
                    // that got furthest before invalidating itself
                    if was_complete && !cand.complete() {
                        let index = start + cand.text().chars().count();
                        broken = Some((index, reason));
                    }
                }
            }
            if dead == all {
                // the character at `pos` emptied the set; it is not
                // consumed and reseeds the next round after emission
                break resolve_round(&candidates, dropped, start, pos, broken)?;
            }
            pos += 1;
        };

        if !token.is_transparent() {
            after_operator = token.kind == TokenKind::Operator;
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// Resolves an emptied round. `mask` selects the candidates dropped by
/// the final character (or still standing at end of input); the
/// latest-seeded complete one among them wins.
fn resolve_round(
    candidates: &[Candidate],
    mask: u16,
    start: usize,
    pos: usize,
    broken: Option<(usize, &'static str)>,
) -> Result<Token, LexError> {
    let mut finalists = candidates
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, cand)| cand);

    if let Some(winner) = finalists.clone().rev().find(|cand| cand.complete()) {
        return Ok(Token {
            kind: winner.kind(),
            text: winner.text().to_string(),
            index: start,
        });
    }
    if let Some((index, message)) = broken {
        return Err(LexError::Invalid { index, message });
    }
    if pos > start {
        let text = finalists
            .by_ref()
            .max_by_key(|cand| cand.text().chars().count())
            .map(|cand| cand.text().to_string())
            .unwrap_or_default();
        return Err(LexError::Unfinished { index: start, text });
    }
    Err(LexError::Unknown { index: pos })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenise(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_round_trip_reconstructs_input() {
        let input = "a && \"s\" + /r/i == 10.84.1.1/16 ** -1w2d {1, 2}";
        let tokens = tokenise(input).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_indices_cover_input() {
        let tokens = tokenise("1 + two").unwrap();
        let indices: Vec<usize> = tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_regex_at_expression_start() {
        let tokens = tokenise("/asd/").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Regex);
        assert_eq!(tokens[0].text, "/asd/");
    }

    #[test]
    fn test_slash_after_operand_is_division() {
        assert_eq!(
            kinds("1/a/b"),
            vec![
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Word,
                TokenKind::Operator,
                TokenKind::Word,
            ]
        );
    }

    #[test]
    fn test_spaced_slash_still_division() {
        assert_eq!(
            kinds("1 /asd/"),
            vec![
                TokenKind::Number,
                TokenKind::Space,
                TokenKind::Operator,
                TokenKind::Word,
                TokenKind::Operator,
            ]
        );
    }

    #[test]
    fn test_regex_after_operator() {
        assert_eq!(
            kinds("a =~ /b/"),
            vec![
                TokenKind::Word,
                TokenKind::Space,
                TokenKind::Operator,
                TokenKind::Space,
                TokenKind::Regex,
            ]
        );
    }

    #[test]
    fn test_in_lexes_as_operator() {
        let tokens = tokenise("in").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].text, "in");
    }

    #[test]
    fn test_word_beats_addresses() {
        let tokens = tokenise("fd84").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn test_number_beats_live_duration_candidate() {
        let tokens = tokenise("123").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
    }

    #[test]
    fn test_hex_wins_after_number_retracts() {
        let tokens = tokenise("0x1F").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Hex);
        assert_eq!(tokens[0].text, "0x1F");
    }

    #[test]
    fn test_duration_token() {
        let tokens = tokenise("1w2d3h4m5s").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Duration);
    }

    #[test]
    fn test_ipv4_and_cidr() {
        assert_eq!(kinds("10.84.1.1"), vec![TokenKind::Ipv4]);
        let tokens = tokenise("10.84.0.0/16").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Ipv4);
        assert_eq!(tokens[0].text, "10.84.0.0/16");
    }

    #[test]
    fn test_ipv6_and_cidr() {
        assert_eq!(kinds("fd84:9d71:8b8:1::1"), vec![TokenKind::Ipv6]);
        assert_eq!(kinds("fd84:9d71:8b8::/48"), vec![TokenKind::Ipv6]);
    }

    #[test]
    fn test_set_literal_braces() {
        assert_eq!(
            kinds("{1, 2}"),
            vec![
                TokenKind::Scope,
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Space,
                TokenKind::Number,
                TokenKind::Scope,
            ]
        );
    }

    #[test]
    fn test_unfinished_string() {
        let err = tokenise("'asd").unwrap_err();
        assert!(matches!(err, LexError::Unfinished { index: 0, .. }));
    }

    #[test]
    fn test_unfinished_number() {
        let err = tokenise("1.").unwrap_err();
        assert!(matches!(err, LexError::Unfinished { index: 0, .. }));
    }

    #[test]
    fn test_too_many_points() {
        let err = tokenise("1.2.3").unwrap_err();
        assert_eq!(
            err,
            LexError::Invalid {
                index: 3,
                message: "too many points"
            }
        );
    }

    #[test]
    fn test_letter_after_number() {
        let err = tokenise("1.0f").unwrap_err();
        assert!(matches!(err, LexError::Invalid { index: 3, .. }));
    }

    #[test]
    fn test_octet_out_of_range() {
        let err = tokenise("1.2.3.256").unwrap_err();
        assert_eq!(
            err,
            LexError::Invalid {
                index: 8,
                message: "octet must be between 0 and 255"
            }
        );
    }

    #[test]
    fn test_double_truncation() {
        let err = tokenise("1::2::3").unwrap_err();
        assert!(matches!(
            err,
            LexError::Invalid {
                message: "double truncation",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_token() {
        let err = tokenise("\\").unwrap_err();
        assert_eq!(err, LexError::Unknown { index: 0 });
    }

    #[test]
    fn test_unknown_token_mid_input() {
        let err = tokenise("1 \\ 2").unwrap_err();
        assert_eq!(err, LexError::Unknown { index: 2 });
    }

    #[test]
    fn test_exotic_regex_delimiter() {
        // any character outside the excluded sets may delimit a pattern
        let tokens = tokenise("#asd#").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Regex);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenise("").unwrap(), vec![]);
    }

    #[test]
    fn test_all_operator_symbols_lex() {
        for &(symbol, _) in scpl_util::op::BINARY_OPERATORS {
            let tokens = tokenise(symbol).unwrap();
            assert_eq!(tokens[0].kind, TokenKind::Operator, "symbol {symbol}");
            assert_eq!(tokens[0].text, symbol);
        }
        for &(symbol, _) in scpl_util::op::UNARY_OPERATORS {
            let tokens = tokenise(symbol).unwrap();
            assert_eq!(tokens[0].kind, TokenKind::Operator, "symbol {symbol}");
        }
    }
}
