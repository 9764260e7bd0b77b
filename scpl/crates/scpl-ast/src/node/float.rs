//! Float-typed nodes.

use std::fmt;

use super::{lookup, wrong_type, IntExpr};
use crate::error::EvalError;
use crate::value::Value;
use crate::Vars;

/// An expression whose static type is Float.
///
/// `CastInteger` is the explicit widening node the resolver inserts for
/// mixed Integer/Float arithmetic, and for `/` and `%`, which produce
/// Float even on two Integers.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatExpr {
    Const(f64),
    Var(String),
    Add(Box<FloatExpr>, Box<FloatExpr>),
    Subtract(Box<FloatExpr>, Box<FloatExpr>),
    Multiply(Box<FloatExpr>, Box<FloatExpr>),
    Divide(Box<FloatExpr>, Box<FloatExpr>),
    Modulo(Box<FloatExpr>, Box<FloatExpr>),
    Exponent(Box<FloatExpr>, Box<FloatExpr>),
    Negative(Box<FloatExpr>),
    CastInteger(Box<IntExpr>),
}

impl FloatExpr {
    pub fn eval(&self, vars: &Vars) -> Result<f64, EvalError> {
        match self {
            FloatExpr::Const(value) => Ok(*value),
            FloatExpr::Var(name) => match lookup(vars, name)? {
                Value::Float(value) => Ok(*value),
                _ => Err(wrong_type(name, "Float")),
            },
            FloatExpr::Add(left, right) => Ok(left.eval(vars)? + right.eval(vars)?),
            FloatExpr::Subtract(left, right) => Ok(left.eval(vars)? - right.eval(vars)?),
            FloatExpr::Multiply(left, right) => Ok(left.eval(vars)? * right.eval(vars)?),
            FloatExpr::Divide(left, right) => Ok(left.eval(vars)? / right.eval(vars)?),
            FloatExpr::Modulo(left, right) => {
                // floored modulo: the result takes the divisor's sign
                let left = left.eval(vars)?;
                let right = right.eval(vars)?;
                Ok(left - right * (left / right).floor())
            }
            FloatExpr::Exponent(left, right) => Ok(left.eval(vars)?.powf(right.eval(vars)?)),
            FloatExpr::Negative(atom) => Ok(-atom.eval(vars)?),
            FloatExpr::CastInteger(atom) => Ok(atom.eval(vars)? as f64),
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            FloatExpr::Const(_) => true,
            FloatExpr::Var(_) => false,
            FloatExpr::Add(left, right)
            | FloatExpr::Subtract(left, right)
            | FloatExpr::Multiply(left, right)
            | FloatExpr::Divide(left, right)
            | FloatExpr::Modulo(left, right)
            | FloatExpr::Exponent(left, right) => left.is_constant() && right.is_constant(),
            FloatExpr::Negative(atom) => atom.is_constant(),
            FloatExpr::CastInteger(atom) => atom.is_constant(),
        }
    }

    /// Replaces every constant subtree with its evaluated literal.
    pub fn precompile(self) -> Result<FloatExpr, EvalError> {
        if self.is_constant() {
            return Ok(FloatExpr::Const(self.eval(&Vars::default())?));
        }
        let fold = |expr: Box<FloatExpr>| -> Result<Box<FloatExpr>, EvalError> {
            Ok(Box::new(expr.precompile()?))
        };
        Ok(match self {
            FloatExpr::Add(left, right) => FloatExpr::Add(fold(left)?, fold(right)?),
            FloatExpr::Subtract(left, right) => FloatExpr::Subtract(fold(left)?, fold(right)?),
            FloatExpr::Multiply(left, right) => FloatExpr::Multiply(fold(left)?, fold(right)?),
            FloatExpr::Divide(left, right) => FloatExpr::Divide(fold(left)?, fold(right)?),
            FloatExpr::Modulo(left, right) => FloatExpr::Modulo(fold(left)?, fold(right)?),
            FloatExpr::Exponent(left, right) => FloatExpr::Exponent(fold(left)?, fold(right)?),
            FloatExpr::Negative(atom) => FloatExpr::Negative(fold(atom)?),
            FloatExpr::CastInteger(atom) => FloatExpr::CastInteger(Box::new(atom.precompile()?)),
            leaf => leaf,
        })
    }
}

impl fmt::Display for FloatExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatExpr::Const(value) => write!(f, "Float({value:?})"),
            FloatExpr::Var(name) => write!(f, "GetFloat({name})"),
            FloatExpr::Add(left, right) => write!(f, "Add({left}, {right})"),
            FloatExpr::Subtract(left, right) => write!(f, "Subtract({left}, {right})"),
            FloatExpr::Multiply(left, right) => write!(f, "Multiply({left}, {right})"),
            FloatExpr::Divide(left, right) => write!(f, "Divide({left}, {right})"),
            FloatExpr::Modulo(left, right) => write!(f, "Modulo({left}, {right})"),
            FloatExpr::Exponent(left, right) => write!(f, "Exponent({left}, {right})"),
            FloatExpr::Negative(atom) => write!(f, "Negative({atom})"),
            FloatExpr::CastInteger(atom) => write!(f, "CastFloat({atom})"),
        }
    }
}
