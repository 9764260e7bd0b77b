//! Partial-token candidates.
//!
//! Every input position seeds one candidate per token kind. A candidate is
//! offered each incoming character and either accepts it (appending to its
//! text, possibly becoming complete) or rejects it with a reason and drops
//! out. The driver in `lib.rs` emits a token when the whole set has
//! dropped.
//!
//! The `push` contract:
//! - `Ok(())` means the character was appended to `text`;
//! - `Err(reason)` means the text is unchanged and the candidate is dead.
//!   A candidate that *retracts* a previously complete state on rejection
//!   (sets `complete` back to false) marks the accumulated text as broken,
//!   which turns into a positioned diagnostic if nothing else wins the
//!   round. This is how `1.0f` fails instead of lexing as `1.0` + `f`.

mod address;
mod number;
mod operator;
mod string;
mod word;

pub(crate) use address::{Ipv4Candidate, Ipv6Candidate};
pub(crate) use number::{DurationCandidate, HexCandidate, NumberCandidate};
pub(crate) use operator::{OperatorCandidate, ScopeCandidate};
pub(crate) use string::{RegexCandidate, StringCandidate};
pub(crate) use word::{SpaceCandidate, WordCandidate};

use crate::token::TokenKind;

/// One live partial token.
pub(crate) enum Candidate {
    Regex(RegexCandidate),
    String(StringCandidate),
    Ipv4(Ipv4Candidate),
    Ipv6(Ipv6Candidate),
    Scope(ScopeCandidate),
    Word(WordCandidate),
    Operator(OperatorCandidate),
    Space(SpaceCandidate),
    Number(NumberCandidate),
    Hex(HexCandidate),
    Duration(DurationCandidate),
}

impl Candidate {
    pub(crate) fn push(&mut self, c: char) -> Result<(), &'static str> {
        match self {
            Candidate::Regex(cand) => cand.push(c),
            Candidate::String(cand) => cand.push(c),
            Candidate::Ipv4(cand) => cand.push(c),
            Candidate::Ipv6(cand) => cand.push(c),
            Candidate::Scope(cand) => cand.push(c),
            Candidate::Word(cand) => cand.push(c),
            Candidate::Operator(cand) => cand.push(c),
            Candidate::Space(cand) => cand.push(c),
            Candidate::Number(cand) => cand.push(c),
            Candidate::Hex(cand) => cand.push(c),
            Candidate::Duration(cand) => cand.push(c),
        }
    }

    pub(crate) fn complete(&self) -> bool {
        match self {
            Candidate::Regex(cand) => cand.complete,
            Candidate::String(cand) => cand.complete,
            Candidate::Ipv4(cand) => cand.complete,
            Candidate::Ipv6(cand) => cand.complete,
            Candidate::Scope(cand) => cand.complete,
            Candidate::Word(cand) => cand.complete,
            Candidate::Operator(cand) => cand.complete,
            Candidate::Space(cand) => cand.complete,
            Candidate::Number(cand) => cand.complete,
            Candidate::Hex(cand) => cand.complete,
            Candidate::Duration(cand) => cand.complete,
        }
    }

    pub(crate) fn text(&self) -> &str {
        match self {
            Candidate::Regex(cand) => &cand.text,
            Candidate::String(cand) => &cand.text,
            Candidate::Ipv4(cand) => &cand.text,
            Candidate::Ipv6(cand) => &cand.text,
            Candidate::Scope(cand) => &cand.text,
            Candidate::Word(cand) => &cand.text,
            Candidate::Operator(cand) => &cand.text,
            Candidate::Space(cand) => &cand.text,
            Candidate::Number(cand) => &cand.text,
            Candidate::Hex(cand) => &cand.text,
            Candidate::Duration(cand) => &cand.text,
        }
    }

    pub(crate) fn kind(&self) -> TokenKind {
        match self {
            Candidate::Regex(_) => TokenKind::Regex,
            Candidate::String(_) => TokenKind::String,
            Candidate::Ipv4(_) => TokenKind::Ipv4,
            Candidate::Ipv6(_) => TokenKind::Ipv6,
            Candidate::Scope(_) => TokenKind::Scope,
            Candidate::Word(_) => TokenKind::Word,
            Candidate::Operator(_) => TokenKind::Operator,
            Candidate::Space(_) => TokenKind::Space,
            Candidate::Number(_) => TokenKind::Number,
            Candidate::Hex(_) => TokenKind::Hex,
            Candidate::Duration(_) => TokenKind::Duration,
        }
    }
}

/// Seeds a fresh candidate set.
///
/// The order is load-bearing: when several candidates finish on the same
/// character, the driver emits the latest-seeded complete one. `Operator`
/// after `Word` makes `in` an operator; `Number` after the address
/// candidates makes `123` a number.
///
/// `after_operator` is true when the previous significant token was an
/// operator (or there is none yet); the regex candidate needs it to decide
/// whether an operator character may open a pattern.
pub(crate) fn seed(after_operator: bool) -> Vec<Candidate> {
    vec![
        Candidate::Regex(RegexCandidate::new(after_operator)),
        Candidate::String(StringCandidate::new()),
        Candidate::Ipv4(Ipv4Candidate::new()),
        Candidate::Ipv6(Ipv6Candidate::new()),
        Candidate::Scope(ScopeCandidate::new()),
        Candidate::Word(WordCandidate::new()),
        Candidate::Operator(OperatorCandidate::new()),
        Candidate::Space(SpaceCandidate::new()),
        Candidate::Number(NumberCandidate::new()),
        Candidate::Hex(HexCandidate::new()),
        Candidate::Duration(DurationCandidate::new()),
    ]
}
