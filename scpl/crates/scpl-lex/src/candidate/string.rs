//! String and regex candidates.

use scpl_util::op;

/// Returns the closing delimiter that matches an opening one.
fn closing(delim: char) -> char {
    match delim {
        '“' => '”',
        other => other,
    }
}

/// A quoted string: `"`, `'`, or `“` (closed by `”`), with backslash
/// escaping the next character. The delimiters and inner text are kept
/// verbatim; escapes are only honored for finding the closing delimiter.
pub(crate) struct StringCandidate {
    pub(crate) text: String,
    pub(crate) complete: bool,
    delim: Option<char>,
    escape: bool,
}

impl StringCandidate {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            complete: false,
            delim: None,
            escape: false,
        }
    }

    pub(crate) fn push(&mut self, c: char) -> Result<(), &'static str> {
        if self.complete {
            return Err("string already completed");
        }
        match self.delim {
            Some(delim) => {
                self.text.push(c);
                if self.escape {
                    self.escape = false;
                } else if c == closing(delim) {
                    self.complete = true;
                } else if c == '\\' {
                    self.escape = true;
                }
                Ok(())
            }
            None => {
                if matches!(c, '"' | '\'' | '“') {
                    self.delim = Some(c);
                    self.text.push(c);
                    Ok(())
                } else {
                    Err("invalid string delimiter")
                }
            }
        }
    }
}

/// A regex literal: a one-character delimiter, the pattern with backslash
/// escapes, the matching delimiter, then zero or more letter flags.
///
/// Almost any character can be the delimiter. Excluded outright:
/// alphanumerics, space, backslash, the five scope characters, and unary
/// operator symbols. A character that can start an operator is allowed
/// only when the previous significant token was itself an operator,
/// which is what makes `/a/` after `=~` a pattern, but the `/` in
/// `1/a/b` a division.
pub(crate) struct RegexCandidate {
    pub(crate) text: String,
    pub(crate) complete: bool,
    after_operator: bool,
    delim: Option<char>,
    escape: bool,
}

impl RegexCandidate {
    pub(crate) fn new(after_operator: bool) -> Self {
        Self {
            text: String::new(),
            complete: false,
            after_operator,
            delim: None,
            escape: false,
        }
    }

    pub(crate) fn push(&mut self, c: char) -> Result<(), &'static str> {
        if self.complete {
            return if c.is_ascii_alphabetic() || c == '_' {
                self.text.push(c);
                Ok(())
            } else {
                Err("invalid flag character")
            };
        }
        match self.delim {
            Some(delim) => {
                self.text.push(c);
                if self.escape {
                    self.escape = false;
                } else if c == delim {
                    self.complete = true;
                } else if c == '\\' {
                    self.escape = true;
                }
                Ok(())
            }
            None => {
                if c.is_alphanumeric()
                    || c == ' '
                    || c == '\\'
                    || matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
                {
                    Err("invalid regex delimiter")
                } else if op::is_unary_symbol(c) {
                    Err("invalid regex delimiter")
                } else if op::is_operator_start(c) && !self.after_operator {
                    Err("invalid regex delimiter")
                } else {
                    self.delim = Some(c);
                    self.text.push(c);
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_closes_on_matching_delimiter() {
        let mut cand = StringCandidate::new();
        for c in "'a\"b'".chars() {
            cand.push(c).unwrap();
        }
        assert!(cand.complete);
        assert!(cand.push('x').is_err());
    }

    #[test]
    fn test_string_curved_quotes() {
        let mut cand = StringCandidate::new();
        for c in "“asd”".chars() {
            cand.push(c).unwrap();
        }
        assert!(cand.complete);
    }

    #[test]
    fn test_string_escaped_delimiter_stays_open() {
        let mut cand = StringCandidate::new();
        for c in r#""a\""#.chars() {
            cand.push(c).unwrap();
        }
        assert!(!cand.complete);
    }

    #[test]
    fn test_regex_operator_delimiter_needs_operator_context() {
        let mut cand = RegexCandidate::new(false);
        assert!(cand.push('/').is_err());

        let mut cand = RegexCandidate::new(true);
        for c in "/asd/i".chars() {
            cand.push(c).unwrap();
        }
        assert!(cand.complete);
        assert_eq!(cand.text, "/asd/i");
    }

    #[test]
    fn test_regex_comma_delimiter_always_allowed_without_context() {
        // ',' is an operator symbol, so it needs operator context too;
        // a fresh expression counts as operator context.
        let mut cand = RegexCandidate::new(true);
        for c in ",asd,".chars() {
            cand.push(c).unwrap();
        }
        assert!(cand.complete);
    }

    #[test]
    fn test_regex_rejects_unary_and_scope_delimiters() {
        for delim in ['!', '~', '+', '-', '(', '{', '['] {
            let mut cand = RegexCandidate::new(true);
            assert!(cand.push(delim).is_err(), "{delim} must not open a regex");
        }
    }
}
