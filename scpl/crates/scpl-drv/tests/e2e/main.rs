//! End-to-end tests driving the `scpl` binary.

mod cli_tests;
