//! Edge case tests for scpl-sem
