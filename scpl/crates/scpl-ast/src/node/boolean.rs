//! Bool-typed nodes.
//!
//! Comparisons, membership, boolean connectives and the casts into Bool.
//! `&&` and `||` short-circuit. `!=` does not exist as a node: the
//! resolver synthesizes `Not(Equal(..))`.

use std::fmt;

use super::{
    lookup, wrong_type, Cidrv4Expr, Cidrv6Expr, FloatExpr, HashExpr, IntExpr, Ipv4Expr,
    Ipv6Expr, RegexExpr, SetExpr, StrExpr,
};
use crate::error::EvalError;
use crate::value::Value;
use crate::Vars;

/// An expression whose static type is Bool.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolExpr {
    Const(bool),
    Var(String),
    Not(Box<BoolExpr>),
    Both(Box<BoolExpr>, Box<BoolExpr>),
    Either(Box<BoolExpr>, Box<BoolExpr>),
    EqualBool(Box<BoolExpr>, Box<BoolExpr>),
    EqualInteger(Box<IntExpr>, Box<IntExpr>),
    EqualString(Box<StrExpr>, Box<StrExpr>),
    GreaterInteger(Box<IntExpr>, Box<IntExpr>),
    GreaterFloat(Box<FloatExpr>, Box<FloatExpr>),
    LesserInteger(Box<IntExpr>, Box<IntExpr>),
    LesserFloat(Box<FloatExpr>, Box<FloatExpr>),
    /// Substring containment: `left in right`.
    ContainsString(Box<StrExpr>, Box<StrExpr>),
    /// `ip in cidr`: true when `ip & mask == network`.
    ContainsIpv4(Box<Ipv4Expr>, Box<Cidrv4Expr>),
    ContainsIpv6(Box<Ipv6Expr>, Box<Cidrv6Expr>),
    /// Membership in a hash set; the needle is behind a hash cast.
    ContainsSet(HashExpr, Box<SetExpr>),
    /// `=~` against a complement regex: true iff the pattern does not
    /// match.
    MatchComplement(Box<StrExpr>, Box<RegexExpr>),
    CastString(Box<StrExpr>),
    CastInteger(Box<IntExpr>),
    CastFloat(Box<FloatExpr>),
    CastRegex(Box<RegexExpr>),
}

impl BoolExpr {
    pub fn eval(&self, vars: &Vars) -> Result<bool, EvalError> {
        match self {
            BoolExpr::Const(value) => Ok(*value),
            BoolExpr::Var(name) => match lookup(vars, name)? {
                Value::Bool(value) => Ok(*value),
                _ => Err(wrong_type(name, "Bool")),
            },
            BoolExpr::Not(atom) => Ok(!atom.eval(vars)?),
            BoolExpr::Both(left, right) => Ok(left.eval(vars)? && right.eval(vars)?),
            BoolExpr::Either(left, right) => Ok(left.eval(vars)? || right.eval(vars)?),
            BoolExpr::EqualBool(left, right) => Ok(left.eval(vars)? == right.eval(vars)?),
            BoolExpr::EqualInteger(left, right) => Ok(left.eval(vars)? == right.eval(vars)?),
            BoolExpr::EqualString(left, right) => {
                Ok(left.eval(vars)?.value == right.eval(vars)?.value)
            }
            BoolExpr::GreaterInteger(left, right) => Ok(left.eval(vars)? > right.eval(vars)?),
            BoolExpr::GreaterFloat(left, right) => Ok(left.eval(vars)? > right.eval(vars)?),
            BoolExpr::LesserInteger(left, right) => Ok(left.eval(vars)? < right.eval(vars)?),
            BoolExpr::LesserFloat(left, right) => Ok(left.eval(vars)? < right.eval(vars)?),
            BoolExpr::ContainsString(left, right) => {
                Ok(right.eval(vars)?.value.contains(&left.eval(vars)?.value))
            }
            BoolExpr::ContainsIpv4(left, right) => {
                let network = right.eval(vars)?;
                Ok(left.eval(vars)? & network.mask == network.network)
            }
            BoolExpr::ContainsIpv6(left, right) => {
                let network = right.eval(vars)?;
                Ok(left.eval(vars)? & network.mask == network.network)
            }
            BoolExpr::ContainsSet(needle, set) => {
                let hashes = set.eval(vars)?.hashes;
                Ok(hashes.contains(&needle.eval(vars)?))
            }
            BoolExpr::MatchComplement(left, right) => {
                let reference = left.eval(vars)?.value;
                let compiled = right.eval(vars)?.compile()?;
                Ok(!compiled.is_match(&reference))
            }
            BoolExpr::CastString(atom) => Ok(!atom.eval(vars)?.value.is_empty()),
            BoolExpr::CastInteger(atom) => Ok(atom.eval(vars)? != 0),
            BoolExpr::CastFloat(atom) => Ok(atom.eval(vars)? != 0.0),
            BoolExpr::CastRegex(atom) => Ok(!atom.eval(vars)?.pattern.is_empty()),
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            BoolExpr::Const(_) => true,
            BoolExpr::Var(_) => false,
            BoolExpr::Not(atom) => atom.is_constant(),
            BoolExpr::Both(left, right) | BoolExpr::Either(left, right) => {
                left.is_constant() && right.is_constant()
            }
            BoolExpr::EqualBool(left, right) => left.is_constant() && right.is_constant(),
            BoolExpr::EqualInteger(left, right) => left.is_constant() && right.is_constant(),
            BoolExpr::EqualString(left, right) => left.is_constant() && right.is_constant(),
            BoolExpr::GreaterInteger(left, right) | BoolExpr::LesserInteger(left, right) => {
                left.is_constant() && right.is_constant()
            }
            BoolExpr::GreaterFloat(left, right) | BoolExpr::LesserFloat(left, right) => {
                left.is_constant() && right.is_constant()
            }
            BoolExpr::ContainsString(left, right) => left.is_constant() && right.is_constant(),
            BoolExpr::ContainsIpv4(left, right) => left.is_constant() && right.is_constant(),
            BoolExpr::ContainsIpv6(left, right) => left.is_constant() && right.is_constant(),
            BoolExpr::ContainsSet(needle, set) => needle.is_constant() && set.is_constant(),
            BoolExpr::MatchComplement(left, right) => left.is_constant() && right.is_constant(),
            BoolExpr::CastString(atom) => atom.is_constant(),
            BoolExpr::CastInteger(atom) => atom.is_constant(),
            BoolExpr::CastFloat(atom) => atom.is_constant(),
            BoolExpr::CastRegex(atom) => atom.is_constant(),
        }
    }

    /// Replaces every constant subtree with its evaluated literal.
    pub fn precompile(self) -> Result<BoolExpr, EvalError> {
        if self.is_constant() {
            return Ok(BoolExpr::Const(self.eval(&Vars::default())?));
        }
        let fold = |expr: Box<BoolExpr>| -> Result<Box<BoolExpr>, EvalError> {
            Ok(Box::new(expr.precompile()?))
        };
        Ok(match self {
            BoolExpr::Not(atom) => BoolExpr::Not(fold(atom)?),
            BoolExpr::Both(left, right) => BoolExpr::Both(fold(left)?, fold(right)?),
            BoolExpr::Either(left, right) => BoolExpr::Either(fold(left)?, fold(right)?),
            BoolExpr::EqualBool(left, right) => BoolExpr::EqualBool(fold(left)?, fold(right)?),
            BoolExpr::EqualInteger(left, right) => BoolExpr::EqualInteger(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::EqualString(left, right) => BoolExpr::EqualString(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::GreaterInteger(left, right) => BoolExpr::GreaterInteger(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::GreaterFloat(left, right) => BoolExpr::GreaterFloat(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::LesserInteger(left, right) => BoolExpr::LesserInteger(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::LesserFloat(left, right) => BoolExpr::LesserFloat(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::ContainsString(left, right) => BoolExpr::ContainsString(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::ContainsIpv4(left, right) => BoolExpr::ContainsIpv4(left, right),
            BoolExpr::ContainsIpv6(left, right) => BoolExpr::ContainsIpv6(left, right),
            BoolExpr::ContainsSet(needle, set) => {
                BoolExpr::ContainsSet(needle.precompile()?, Box::new(set.precompile()?))
            }
            BoolExpr::MatchComplement(left, right) => BoolExpr::MatchComplement(
                Box::new(left.precompile()?),
                Box::new(right.precompile()?),
            ),
            BoolExpr::CastString(atom) => BoolExpr::CastString(Box::new(atom.precompile()?)),
            BoolExpr::CastInteger(atom) => BoolExpr::CastInteger(Box::new(atom.precompile()?)),
            BoolExpr::CastFloat(atom) => BoolExpr::CastFloat(Box::new(atom.precompile()?)),
            BoolExpr::CastRegex(atom) => BoolExpr::CastRegex(Box::new(atom.precompile()?)),
            leaf => leaf,
        })
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolExpr::Const(true) => write!(f, "Bool(true)"),
            BoolExpr::Const(false) => write!(f, "Bool(false)"),
            BoolExpr::Var(name) => write!(f, "GetBool({name})"),
            BoolExpr::Not(atom) => write!(f, "Not({atom})"),
            BoolExpr::Both(left, right) => write!(f, "Both({left}, {right})"),
            BoolExpr::Either(left, right) => write!(f, "Either({left}, {right})"),
            BoolExpr::EqualBool(left, right) => write!(f, "Equal({left}, {right})"),
            BoolExpr::EqualInteger(left, right) => write!(f, "Equal({left}, {right})"),
            BoolExpr::EqualString(left, right) => write!(f, "Equal({left}, {right})"),
            BoolExpr::GreaterInteger(left, right) => write!(f, "Greater({left}, {right})"),
            BoolExpr::GreaterFloat(left, right) => write!(f, "Greater({left}, {right})"),
            BoolExpr::LesserInteger(left, right) => write!(f, "Lesser({left}, {right})"),
            BoolExpr::LesserFloat(left, right) => write!(f, "Lesser({left}, {right})"),
            BoolExpr::ContainsString(left, right) => write!(f, "Contains({left}, {right})"),
            BoolExpr::ContainsIpv4(left, right) => write!(f, "Contains({left}, {right})"),
            BoolExpr::ContainsIpv6(left, right) => write!(f, "Contains({left}, {right})"),
            BoolExpr::ContainsSet(needle, set) => write!(f, "Contains({needle}, {set})"),
            BoolExpr::MatchComplement(left, right) => {
                write!(f, "Match({left}, Complement({right}))")
            }
            BoolExpr::CastString(atom) => write!(f, "CastBool({atom})"),
            BoolExpr::CastInteger(atom) => write!(f, "CastBool({atom})"),
            BoolExpr::CastFloat(atom) => write!(f, "CastBool({atom})"),
            BoolExpr::CastRegex(atom) => write!(f, "CastBool({atom})"),
        }
    }
}
