//! Typed AST nodes.
//!
//! One expression enum per result kind, so every node's `eval` returns
//! its native Rust type and no heterogeneous value crosses a hot path.
//! The resolver in scpl-sem is the only place that builds operator
//! variants; it guarantees the operand types encoded in each variant.
//!
//! `Display` renders the `repr` vocabulary the CLI and tests rely on:
//! `Add(Integer(1), Float(2.0))`, `Both(...)`, `GetString(name)` and so
//! on.

mod address;
mod boolean;
mod float;
mod integer;
mod set;
mod string;
mod regexes;

pub use address::{Cidrv4Expr, Cidrv6Expr, Ipv4Expr, Ipv6Expr};
pub use boolean::BoolExpr;
pub use float::FloatExpr;
pub use integer::IntExpr;
pub use regexes::RegexExpr;
pub use set::{HashExpr, SetExpr};
pub use string::StrExpr;

use crate::error::EvalError;
use crate::value::Value;
use crate::Vars;

/// Looks up `name` in the variable bag.
pub(crate) fn lookup<'v>(vars: &'v Vars, name: &str) -> Result<&'v Value, EvalError> {
    vars.get(name)
        .ok_or_else(|| EvalError::NameNotFound(name.to_string()))
}

/// Builds the kind-mismatch error for a variable reference.
pub(crate) fn wrong_type(name: &str, expected: &'static str) -> EvalError {
    EvalError::WrongType {
        name: name.to_string(),
        expected,
    }
}
