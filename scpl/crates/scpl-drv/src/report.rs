//! Caret diagnostics on the source line.

use scpl_util::caret_line;

/// Prints the source line, a caret under the failing character, and the
/// message.
pub fn caret(line: &str, index: usize, message: &str) {
    println!("{line}");
    println!("{}", caret_line(index));
    println!("{message}");
}
