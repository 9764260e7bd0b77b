//! Operator and scope candidates.

use scpl_util::op;

/// Longest-match against the union of the binary and unary operator
/// tables. The first character only needs to *start* some operator
/// (`=` alone is incomplete, waiting for `==` or `=~`); every extension
/// must itself be a complete operator.
pub(crate) struct OperatorCandidate {
    pub(crate) text: String,
    pub(crate) complete: bool,
}

impl OperatorCandidate {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            complete: false,
        }
    }

    pub(crate) fn push(&mut self, c: char) -> Result<(), &'static str> {
        if self.text.is_empty() {
            if op::is_operator_start(c) {
                self.text.push(c);
                self.complete = op::is_operator_symbol(&self.text);
                Ok(())
            } else {
                Err("not an operator")
            }
        } else {
            let mut extended = self.text.clone();
            extended.push(c);
            if op::is_operator_symbol(&extended) {
                self.text = extended;
                self.complete = true;
                Ok(())
            } else {
                Err("invalid operator")
            }
        }
    }
}

/// A single scope character: one of `( ) [ ] { }`.
pub(crate) struct ScopeCandidate {
    pub(crate) text: String,
    pub(crate) complete: bool,
}

impl ScopeCandidate {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            complete: false,
        }
    }

    pub(crate) fn push(&mut self, c: char) -> Result<(), &'static str> {
        if !self.text.is_empty() {
            Err("already finished")
        } else if matches!(c, '(' | ')' | '[' | ']' | '{' | '}') {
            self.text.push(c);
            self.complete = true;
            Ok(())
        } else {
            Err("not a scope character")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_longest_match() {
        let mut cand = OperatorCandidate::new();
        cand.push('*').unwrap();
        assert!(cand.complete);
        cand.push('*').unwrap();
        assert!(cand.complete);
        assert!(cand.push('*').is_err());
        assert_eq!(cand.text, "**");
    }

    #[test]
    fn test_operator_equals_needs_second_char() {
        let mut cand = OperatorCandidate::new();
        cand.push('=').unwrap();
        assert!(!cand.complete);
        cand.push('~').unwrap();
        assert!(cand.complete);
    }

    #[test]
    fn test_operator_word_symbol() {
        let mut cand = OperatorCandidate::new();
        cand.push('i').unwrap();
        assert!(!cand.complete);
        cand.push('n').unwrap();
        assert!(cand.complete);
    }

    #[test]
    fn test_scope_is_single_character() {
        let mut cand = ScopeCandidate::new();
        cand.push('{').unwrap();
        assert!(cand.complete);
        assert!(cand.push('}').is_err());
    }
}
