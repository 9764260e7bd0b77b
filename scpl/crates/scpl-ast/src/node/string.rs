//! String-typed nodes.

use std::fmt;

use scpl_regex::CaseTable;

use super::{lookup, wrong_type, RegexExpr};
use crate::error::EvalError;
use crate::value::{StringValue, Value};
use crate::Vars;

/// An expression whose static type is String.
#[derive(Debug, Clone, PartialEq)]
pub enum StrExpr {
    Const(StringValue),
    Var(String),
    Add(Box<StrExpr>, Box<StrExpr>),
    /// `=~` against a plain regex: the matched substring, or empty.
    Match(Box<StrExpr>, Box<RegexExpr>),
    /// Per-character case folding through a table; lowercases without one.
    Casefold {
        atom: Box<StrExpr>,
        table: Option<CaseTable>,
    },
}

impl StrExpr {
    pub fn eval(&self, vars: &Vars) -> Result<StringValue, EvalError> {
        match self {
            StrExpr::Const(value) => Ok(value.clone()),
            StrExpr::Var(name) => match lookup(vars, name)? {
                Value::String(value) => Ok(value.clone()),
                _ => Err(wrong_type(name, "String")),
            },
            StrExpr::Add(left, right) => {
                let mut value = left.eval(vars)?.value;
                value.push_str(&right.eval(vars)?.value);
                Ok(StringValue::new(value))
            }
            StrExpr::Match(left, right) => {
                let reference = left.eval(vars)?.value;
                let regex = right.eval(vars)?;
                let compiled = regex.compile()?;
                match compiled.find(&reference) {
                    Some(found) if regex.expected => Ok(StringValue::new(found.as_str())),
                    _ => Ok(StringValue::new("")),
                }
            }
            StrExpr::Casefold { atom, table } => {
                let value = atom.eval(vars)?.value;
                let folded = match table {
                    Some(table) => value
                        .chars()
                        .map(|c| {
                            table
                                .get(&c)
                                .cloned()
                                .unwrap_or_else(|| c.to_string())
                        })
                        .collect(),
                    None => value.to_lowercase(),
                };
                Ok(StringValue::new(folded))
            }
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            StrExpr::Const(_) => true,
            StrExpr::Var(_) => false,
            StrExpr::Add(left, right) => left.is_constant() && right.is_constant(),
            StrExpr::Match(left, right) => left.is_constant() && right.is_constant(),
            StrExpr::Casefold { atom, .. } => atom.is_constant(),
        }
    }

    /// Replaces every constant subtree with its evaluated literal.
    pub fn precompile(self) -> Result<StrExpr, EvalError> {
        if self.is_constant() {
            return Ok(StrExpr::Const(self.eval(&Vars::default())?));
        }
        Ok(match self {
            StrExpr::Add(left, right) => StrExpr::Add(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            StrExpr::Match(left, right) => StrExpr::Match(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            StrExpr::Casefold { atom, table } => StrExpr::Casefold {
                atom: Box::new(atom.precompile()?),
                table,
            },
            leaf => leaf,
        })
    }
}

impl fmt::Display for StrExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrExpr::Const(value) => write!(f, "{value}"),
            StrExpr::Var(name) => write!(f, "GetString({name})"),
            StrExpr::Add(left, right) => write!(f, "Add({left}, {right})"),
            StrExpr::Match(left, right) => write!(f, "Match({left}, {right})"),
            StrExpr::Casefold { atom, .. } => write!(f, "Casefold({atom})"),
        }
    }
}
