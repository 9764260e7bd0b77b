//! Edge case tests for scpl-lex
