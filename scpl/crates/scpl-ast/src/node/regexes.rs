//! Regex-typed nodes.

use std::collections::BTreeSet;
use std::fmt;

use scpl_regex::{fold_pattern, CaseTable};

use super::{lookup, wrong_type, StrExpr};
use crate::error::EvalError;
use crate::value::{RegexValue, Value};
use crate::Vars;

/// An expression whose static type is Regex.
#[derive(Debug, Clone, PartialEq)]
pub enum RegexExpr {
    Const(RegexValue),
    Var(String),
    /// Concatenation. Flags common to both sides hoist to the result;
    /// each side's remaining flags wrap its pattern in an inline group.
    Add(Box<RegexExpr>, Box<RegexExpr>),
    /// A string escaped into a literal pattern.
    CastString(Box<StrExpr>),
    /// Toggles the match expectation: `=~` against a complement regex
    /// yields "does not match". Double complement folds at resolution.
    Complement(Box<RegexExpr>),
    /// Refolds a case-insensitive pattern through a casemap and drops
    /// the `i` flag. Patterns without the flag pass through.
    Casemapped {
        atom: Box<RegexExpr>,
        table: CaseTable,
    },
}

impl RegexExpr {
    pub fn eval(&self, vars: &Vars) -> Result<RegexValue, EvalError> {
        match self {
            RegexExpr::Const(value) => Ok(value.clone()),
            RegexExpr::Var(name) => match lookup(vars, name)? {
                Value::Regex(value) => Ok(value.clone()),
                _ => Err(wrong_type(name, "Regex")),
            },
            RegexExpr::Add(left, right) => {
                let left = left.eval(vars)?;
                let right = right.eval(vars)?;
                Ok(concatenate(left, right))
            }
            RegexExpr::CastString(atom) => {
                let value = atom.eval(vars)?;
                Ok(RegexValue::new(regex::escape(&value.value)))
            }
            RegexExpr::Complement(atom) => {
                let mut value = atom.eval(vars)?;
                value.expected = !value.expected;
                Ok(value)
            }
            RegexExpr::Casemapped { atom, table } => {
                let value = atom.eval(vars)?;
                if !value.flags.contains(&'i') {
                    return Ok(value);
                }
                let folded = fold_pattern(&value.pattern, table)?;
                let mut flags = value.flags.clone();
                flags.remove(&'i');
                Ok(RegexValue {
                    delimiter: value.delimiter,
                    pattern: folded,
                    flags,
                    expected: value.expected,
                })
            }
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            RegexExpr::Const(_) => true,
            RegexExpr::Var(_) => false,
            RegexExpr::Add(left, right) => left.is_constant() && right.is_constant(),
            RegexExpr::CastString(atom) => atom.is_constant(),
            RegexExpr::Complement(atom) => atom.is_constant(),
            RegexExpr::Casemapped { atom, .. } => atom.is_constant(),
        }
    }

    /// True for nodes the resolver can see are complemented without
    /// evaluating: the complement wrapper and complement literals.
    pub fn is_complement(&self) -> bool {
        match self {
            RegexExpr::Complement(_) => true,
            RegexExpr::Const(value) => !value.expected,
            _ => false,
        }
    }

    /// Replaces every constant subtree with its evaluated literal.
    pub fn precompile(self) -> Result<RegexExpr, EvalError> {
        if self.is_constant() {
            return Ok(RegexExpr::Const(self.eval(&Vars::default())?));
        }
        Ok(match self {
            RegexExpr::Add(left, right) => RegexExpr::Add(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            RegexExpr::CastString(atom) => RegexExpr::CastString(Box::new(atom.precompile()?)),
            RegexExpr::Complement(atom) => RegexExpr::Complement(Box::new(atom.precompile()?)),
            RegexExpr::Casemapped { atom, table } => RegexExpr::Casemapped {
                atom: Box::new(atom.precompile()?),
                table,
            },
            leaf => leaf,
        })
    }
}

/// Joins two regex values, scoping unequal flags with inline groups:
/// `"asd." + /asd/i` becomes `asd\.(?i:asd)` with no outer flags.
fn concatenate(left: RegexValue, right: RegexValue) -> RegexValue {
    let common: BTreeSet<char> = left.flags.intersection(&right.flags).copied().collect();
    let pattern_left = scope_flags(&left.pattern, &left.flags, &common);
    let pattern_right = scope_flags(&right.pattern, &right.flags, &common);
    RegexValue {
        delimiter: None,
        pattern: pattern_left + &pattern_right,
        flags: common,
        expected: left.expected && right.expected,
    }
}

fn scope_flags(pattern: &str, flags: &BTreeSet<char>, common: &BTreeSet<char>) -> String {
    let uncommon: String = flags.difference(common).collect();
    if uncommon.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{uncommon}:{pattern})")
    }
}

impl fmt::Display for RegexExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexExpr::Const(value) => write!(f, "Regex({value})"),
            RegexExpr::Var(name) => write!(f, "GetRegex({name})"),
            RegexExpr::Add(left, right) => write!(f, "Add({left}, {right})"),
            RegexExpr::CastString(atom) => write!(f, "CastRegex({atom})"),
            RegexExpr::Complement(atom) => write!(f, "Complement({atom})"),
            RegexExpr::Casemapped { atom, .. } => write!(f, "Casemapped({atom})"),
        }
    }
}
