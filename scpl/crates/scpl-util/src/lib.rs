//! scpl-util - Shared Foundation Types
//!
//! Small utilities used across the SCPL pipeline: the static operator
//! catalogue (shared by the lexer's symbol matching and the parser's
//! precedence rules), delimiter selection for pretty-printing string and
//! regex literals, and caret rendering for positional diagnostics. Hash
//! collections are re-exported here so every crate in the workspace
//! agrees on the hasher.

mod caret;
mod delim;
pub mod op;

pub use caret::caret_line;
pub use delim::{find_unescaped, find_unused_delimiter, with_delimiter};
pub use op::{Associativity, OpInfo, OpName};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
