//! The top-level AST node: one typed expression of any kind.

use std::fmt;

use crate::error::EvalError;
use crate::kind::Kind;
use crate::node::{
    BoolExpr, Cidrv4Expr, Cidrv6Expr, FloatExpr, IntExpr, Ipv4Expr, Ipv6Expr, RegexExpr,
    SetExpr, StrExpr,
};
use crate::value::Value;
use crate::Vars;

/// A typed AST node. The variant is the node's static result type;
/// evaluation can only ever produce a value of that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Bool(BoolExpr),
    Integer(IntExpr),
    Float(FloatExpr),
    String(StrExpr),
    Regex(RegexExpr),
    Ipv4(Ipv4Expr),
    Ipv6(Ipv6Expr),
    Cidrv4(Cidrv4Expr),
    Cidrv6(Cidrv6Expr),
    Set(SetExpr),
}

impl Atom {
    /// The node's static type.
    pub fn kind(&self) -> Kind {
        match self {
            Atom::Bool(_) => Kind::Bool,
            Atom::Integer(_) => Kind::Integer,
            Atom::Float(_) => Kind::Float,
            Atom::String(_) => Kind::String,
            Atom::Regex(_) => Kind::Regex,
            Atom::Ipv4(_) => Kind::Ipv4,
            Atom::Ipv6(_) => Kind::Ipv6,
            Atom::Cidrv4(_) => Kind::Cidrv4,
            Atom::Cidrv6(_) => Kind::Cidrv6,
            Atom::Set(set) => Kind::Set(set.element()),
        }
    }

    /// True when no variable reference occurs anywhere in the subtree.
    pub fn is_constant(&self) -> bool {
        match self {
            Atom::Bool(expr) => expr.is_constant(),
            Atom::Integer(expr) => expr.is_constant(),
            Atom::Float(expr) => expr.is_constant(),
            Atom::String(expr) => expr.is_constant(),
            Atom::Regex(expr) => expr.is_constant(),
            Atom::Ipv4(expr) => expr.is_constant(),
            Atom::Ipv6(expr) => expr.is_constant(),
            Atom::Cidrv4(expr) => expr.is_constant(),
            Atom::Cidrv6(expr) => expr.is_constant(),
            Atom::Set(expr) => expr.is_constant(),
        }
    }

    /// Evaluates the tree against a variable bag.
    pub fn eval(&self, vars: &Vars) -> Result<Value, EvalError> {
        Ok(match self {
            Atom::Bool(expr) => Value::Bool(expr.eval(vars)?),
            Atom::Integer(expr) => Value::Integer(expr.eval(vars)?),
            Atom::Float(expr) => Value::Float(expr.eval(vars)?),
            Atom::String(expr) => Value::String(expr.eval(vars)?),
            Atom::Regex(expr) => Value::Regex(expr.eval(vars)?),
            Atom::Ipv4(expr) => Value::Ipv4(expr.eval(vars)?),
            Atom::Ipv6(expr) => Value::Ipv6(expr.eval(vars)?),
            Atom::Cidrv4(expr) => Value::Cidrv4(expr.eval(vars)?),
            Atom::Cidrv6(expr) => Value::Cidrv6(expr.eval(vars)?),
            Atom::Set(expr) => Value::Set(expr.eval(vars)?),
        })
    }

    /// Folds every constant subtree into its evaluated literal. A
    /// constant subtree that fails to evaluate (a bad pattern, an
    /// overflow) surfaces here instead of at `eval`.
    pub fn precompile(self) -> Result<Atom, EvalError> {
        Ok(match self {
            Atom::Bool(expr) => Atom::Bool(expr.precompile()?),
            Atom::Integer(expr) => Atom::Integer(expr.precompile()?),
            Atom::Float(expr) => Atom::Float(expr.precompile()?),
            Atom::String(expr) => Atom::String(expr.precompile()?),
            Atom::Regex(expr) => Atom::Regex(expr.precompile()?),
            Atom::Set(expr) => Atom::Set(expr.precompile()?),
            leaf @ (Atom::Ipv4(_) | Atom::Ipv6(_) | Atom::Cidrv4(_) | Atom::Cidrv6(_)) => leaf,
        })
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Bool(expr) => write!(f, "{expr}"),
            Atom::Integer(expr) => write!(f, "{expr}"),
            Atom::Float(expr) => write!(f, "{expr}"),
            Atom::String(expr) => write!(f, "{expr}"),
            Atom::Regex(expr) => write!(f, "{expr}"),
            Atom::Ipv4(expr) => write!(f, "{expr}"),
            Atom::Ipv6(expr) => write!(f, "{expr}"),
            Atom::Cidrv4(expr) => write!(f, "{expr}"),
            Atom::Cidrv6(expr) => write!(f, "{expr}"),
            Atom::Set(expr) => write!(f, "{expr}"),
        }
    }
}
