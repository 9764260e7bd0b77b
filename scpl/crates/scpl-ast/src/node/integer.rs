//! Integer-typed nodes.

use std::fmt;

use super::{lookup, wrong_type};
use crate::error::EvalError;
use crate::value::Value;
use crate::Vars;

/// An expression whose static type is Integer.
///
/// Division and modulo are absent: both always produce Float, so they
/// live on [`super::FloatExpr`] behind integer casts.
#[derive(Debug, Clone, PartialEq)]
pub enum IntExpr {
    Const(i64),
    Var(String),
    Add(Box<IntExpr>, Box<IntExpr>),
    Subtract(Box<IntExpr>, Box<IntExpr>),
    Multiply(Box<IntExpr>, Box<IntExpr>),
    Exponent(Box<IntExpr>, Box<IntExpr>),
    And(Box<IntExpr>, Box<IntExpr>),
    Or(Box<IntExpr>, Box<IntExpr>),
    Xor(Box<IntExpr>, Box<IntExpr>),
    ShiftLeft(Box<IntExpr>, Box<IntExpr>),
    ShiftRight(Box<IntExpr>, Box<IntExpr>),
    Negative(Box<IntExpr>),
    Complement(Box<IntExpr>),
}

impl IntExpr {
    pub fn eval(&self, vars: &Vars) -> Result<i64, EvalError> {
        match self {
            IntExpr::Const(value) => Ok(*value),
            IntExpr::Var(name) => match lookup(vars, name)? {
                Value::Integer(value) => Ok(*value),
                _ => Err(wrong_type(name, "Integer")),
            },
            IntExpr::Add(left, right) => left
                .eval(vars)?
                .checked_add(right.eval(vars)?)
                .ok_or(EvalError::Overflow("addition")),
            IntExpr::Subtract(left, right) => left
                .eval(vars)?
                .checked_sub(right.eval(vars)?)
                .ok_or(EvalError::Overflow("subtraction")),
            IntExpr::Multiply(left, right) => left
                .eval(vars)?
                .checked_mul(right.eval(vars)?)
                .ok_or(EvalError::Overflow("multiplication")),
            IntExpr::Exponent(left, right) => {
                let base = left.eval(vars)?;
                let exponent = right.eval(vars)?;
                if exponent < 0 {
                    return Err(EvalError::NegativeExponent);
                }
                let exponent =
                    u32::try_from(exponent).map_err(|_| EvalError::Overflow("exponent"))?;
                base.checked_pow(exponent)
                    .ok_or(EvalError::Overflow("exponent"))
            }
            IntExpr::And(left, right) => Ok(left.eval(vars)? & right.eval(vars)?),
            IntExpr::Or(left, right) => Ok(left.eval(vars)? | right.eval(vars)?),
            IntExpr::Xor(left, right) => Ok(left.eval(vars)? ^ right.eval(vars)?),
            IntExpr::ShiftLeft(left, right) => {
                let amount = right.eval(vars)?;
                let amount = shift_amount(amount)?;
                left.eval(vars)?
                    .checked_shl(amount)
                    .ok_or(EvalError::Overflow("shift"))
            }
            IntExpr::ShiftRight(left, right) => {
                let amount = right.eval(vars)?;
                let amount = shift_amount(amount)?;
                left.eval(vars)?
                    .checked_shr(amount)
                    .ok_or(EvalError::Overflow("shift"))
            }
            IntExpr::Negative(atom) => atom
                .eval(vars)?
                .checked_neg()
                .ok_or(EvalError::Overflow("negation")),
            IntExpr::Complement(atom) => Ok(!atom.eval(vars)?),
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            IntExpr::Const(_) => true,
            IntExpr::Var(_) => false,
            IntExpr::Add(left, right)
            | IntExpr::Subtract(left, right)
            | IntExpr::Multiply(left, right)
            | IntExpr::Exponent(left, right)
            | IntExpr::And(left, right)
            | IntExpr::Or(left, right)
            | IntExpr::Xor(left, right)
            | IntExpr::ShiftLeft(left, right)
            | IntExpr::ShiftRight(left, right) => left.is_constant() && right.is_constant(),
            IntExpr::Negative(atom) | IntExpr::Complement(atom) => atom.is_constant(),
        }
    }

    /// Replaces every constant subtree with its evaluated literal.
    pub fn precompile(self) -> Result<IntExpr, EvalError> {
        if self.is_constant() {
            return Ok(IntExpr::Const(self.eval(&Vars::default())?));
        }
        let fold = |expr: Box<IntExpr>| -> Result<Box<IntExpr>, EvalError> {
            Ok(Box::new(expr.precompile()?))
        };
        Ok(match self {
            IntExpr::Add(left, right) => IntExpr::Add(fold(left)?, fold(right)?),
            IntExpr::Subtract(left, right) => IntExpr::Subtract(fold(left)?, fold(right)?),
            IntExpr::Multiply(left, right) => IntExpr::Multiply(fold(left)?, fold(right)?),
            IntExpr::Exponent(left, right) => IntExpr::Exponent(fold(left)?, fold(right)?),
            IntExpr::And(left, right) => IntExpr::And(fold(left)?, fold(right)?),
            IntExpr::Or(left, right) => IntExpr::Or(fold(left)?, fold(right)?),
            IntExpr::Xor(left, right) => IntExpr::Xor(fold(left)?, fold(right)?),
            IntExpr::ShiftLeft(left, right) => IntExpr::ShiftLeft(fold(left)?, fold(right)?),
            IntExpr::ShiftRight(left, right) => IntExpr::ShiftRight(fold(left)?, fold(right)?),
            IntExpr::Negative(atom) => IntExpr::Negative(fold(atom)?),
            IntExpr::Complement(atom) => IntExpr::Complement(fold(atom)?),
            leaf => leaf,
        })
    }
}

fn shift_amount(amount: i64) -> Result<u32, EvalError> {
    if (0..64).contains(&amount) {
        Ok(amount as u32)
    } else {
        Err(EvalError::ShiftRange(amount))
    }
}

impl fmt::Display for IntExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntExpr::Const(value) => write!(f, "Integer({value})"),
            IntExpr::Var(name) => write!(f, "GetInteger({name})"),
            IntExpr::Add(left, right) => write!(f, "Add({left}, {right})"),
            IntExpr::Subtract(left, right) => write!(f, "Subtract({left}, {right})"),
            IntExpr::Multiply(left, right) => write!(f, "Multiply({left}, {right})"),
            IntExpr::Exponent(left, right) => write!(f, "Exponent({left}, {right})"),
            IntExpr::And(left, right) => write!(f, "And({left}, {right})"),
            IntExpr::Or(left, right) => write!(f, "Or({left}, {right})"),
            IntExpr::Xor(left, right) => write!(f, "Xor({left}, {right})"),
            IntExpr::ShiftLeft(left, right) => write!(f, "Left({left}, {right})"),
            IntExpr::ShiftRight(left, right) => write!(f, "Right({left}, {right})"),
            IntExpr::Negative(atom) => write!(f, "Negative({atom})"),
            IntExpr::Complement(atom) => write!(f, "Complement({atom})"),
        }
    }
}
