//! Delimiter selection for pretty-printing.
//!
//! String and regex literals remember the delimiter they were written with
//! and round-trip through it. Literals produced by evaluation have no
//! delimiter; printing picks the first candidate that does not occur
//! unescaped in the payload, falling back to the first candidate with
//! in-content escaping.

/// Yields the indices of every unescaped occurrence of `needle` in `text`.
///
/// A backslash escapes the character after it, so `\"` does not count as an
/// occurrence of `"`.
pub fn find_unescaped(text: &str, needle: char) -> impl Iterator<Item = usize> + '_ {
    let mut chars = text.char_indices();
    std::iter::from_fn(move || {
        while let Some((index, c)) = chars.next() {
            if c == '\\' {
                chars.next();
            } else if c == needle {
                return Some(index);
            }
        }
        None
    })
}

/// Picks the first delimiter from `candidates` that does not occur
/// unescaped in `text`, if any.
pub fn find_unused_delimiter(text: &str, candidates: &[char]) -> Option<char> {
    candidates
        .iter()
        .copied()
        .find(|&c| find_unescaped(text, c).next().is_none())
}

/// Wraps `text` in a delimiter chosen from `candidates`.
///
/// When every candidate occurs in the payload, the first candidate is used
/// and its unescaped occurrences are escaped.
pub fn with_delimiter(text: &str, candidates: &[char]) -> String {
    if let Some(delim) = find_unused_delimiter(text, candidates) {
        return format!("{delim}{text}{delim}");
    }

    let delim = candidates[0];
    let mut escaped = text.to_string();
    let indices: Vec<usize> = find_unescaped(text, delim).collect();
    for index in indices.into_iter().rev() {
        escaped.insert(index, '\\');
    }
    format!("{delim}{escaped}{delim}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_unescaped_skips_escapes() {
        let found: Vec<usize> = find_unescaped(r#"a\"b"c"#, '"').collect();
        assert_eq!(found, vec![4]);
    }

    #[test]
    fn test_unused_delimiter_prefers_first() {
        assert_eq!(find_unused_delimiter("abc", &['"', '\'']), Some('"'));
        assert_eq!(find_unused_delimiter("a\"c", &['"', '\'']), Some('\''));
        assert_eq!(find_unused_delimiter("\"'", &['"', '\'']), None);
    }

    #[test]
    fn test_with_delimiter_escapes_on_exhaustion() {
        assert_eq!(with_delimiter("asd", &['"', '\'']), "\"asd\"");
        assert_eq!(with_delimiter("a\"b", &['"', '\'']), "'a\"b'");
        assert_eq!(with_delimiter("\"'", &['"', '\'']), "\"\\\"'\"");
    }
}
