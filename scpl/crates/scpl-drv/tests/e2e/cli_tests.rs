//! CLI interface tests: subcommands, output shape, exit codes.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn scpl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_scpl"))
}

fn scpl() -> Command {
    Command::new(scpl_bin())
}

#[test]
fn test_cli_help() {
    scpl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scpl"));
}

#[test]
fn test_cli_version() {
    scpl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scpl"));
}

// ==================== LEX ====================

#[test]
fn test_lex_prints_tokens() {
    scpl()
        .args(["lex", "1 + 2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens  :"))
        .stdout(predicate::str::contains("Number(1)"))
        .stdout(predicate::str::contains("Operator(+)"));
}

#[test]
fn test_lex_error_exit_code_and_caret() {
    scpl()
        .args(["lex", "'unterminated"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("'unterminated"))
        .stdout(predicate::str::contains("^"))
        .stdout(predicate::str::contains("unfinished token"));
}

#[test]
fn test_lex_kind_specific_diagnostic() {
    scpl()
        .args(["lex", "1.2.3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("too many points"));
}

// ==================== PARSE ====================

#[test]
fn test_parse_prints_ast_and_deps() {
    scpl()
        .args(["parse", "1 + 2 * 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ast     : Add(Integer(1), Multiply(Integer(2), Integer(3)))",
        ))
        .stdout(predicate::str::contains("constant: true"))
        .stdout(predicate::str::contains("deps    : []"))
        .stdout(predicate::str::contains("precomp : Integer(7)"));
}

#[test]
fn test_parse_with_variables() {
    scpl()
        .args(["parse", "a * 2", r#"{"a": "3"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("GetInteger(a)"))
        .stdout(predicate::str::contains("constant: false"))
        .stdout(predicate::str::contains("deps    : [a]"));
}

#[test]
fn test_parse_error_exit_code() {
    scpl()
        .args(["parse", "1 +"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("parse error: missing binary operand"));
}

#[test]
fn test_parse_unknown_variable() {
    scpl()
        .args(["parse", "missing + 1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("unknown variable missing"));
}

#[test]
fn test_parse_type_error() {
    scpl()
        .args(["parse", "1 + \"a\""])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("invalid operands for operator"));
}

#[test]
fn test_parse_lex_error_exits_one() {
    scpl().args(["parse", "'open"]).assert().code(1);
}

// ==================== EVAL ====================

#[test]
fn test_eval_arithmetic() {
    scpl()
        .args(["eval", "1 + 2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eval    : Integer(3)"))
        .stdout(predicate::str::contains("duration:"));
}

#[test]
fn test_eval_with_variable_bag() {
    scpl()
        .args(["eval", "a * 2 + 1", r#"{"a": "3"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("vars    : {a=Integer(3)}"))
        .stdout(predicate::str::contains("eval    : Integer(7)"));
}

#[test]
fn test_eval_string_concatenation() {
    scpl()
        .args(["eval", "\"asd\" + \"asd\""])
        .assert()
        .success()
        .stdout(predicate::str::contains("eval    : \"asdasd\""));
}

#[test]
fn test_eval_regex_concatenation() {
    scpl()
        .args(["eval", "\"asd.\" + /asd/i"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r"Regex(/asd\.(?i:asd)/)"));
}

#[test]
fn test_eval_cidr_membership() {
    scpl()
        .args(["eval", "10.84.1.1 in 10.84.0.0/16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eval    : Bool(true)"));
}

#[test]
fn test_eval_set_variable() {
    scpl()
        .args(["eval", "2 in allowed", r#"{"allowed": "{1, 2, 3}"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("eval    : Bool(true)"));
}

#[test]
fn test_eval_error_exit_code() {
    // constant folding hits the shift-range check
    scpl().args(["eval", "1 << 64"]).assert().code(2);
}

#[test]
fn test_eval_runtime_error_exits_one() {
    scpl()
        .args(["eval", "a << b", r#"{"a": "1", "b": "64"}"#])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("eval error"));
}

#[test]
fn test_eval_bad_variable_json() {
    scpl()
        .args(["eval", "1", "{not json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("variable error"));
}
