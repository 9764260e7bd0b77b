//! Arithmetic specializations.

use scpl_ast::{Atom, FloatExpr, IntExpr, RegexExpr, StrExpr};

/// The explicit Integer-to-Float widening cast.
fn widen(atom: IntExpr) -> FloatExpr {
    FloatExpr::CastInteger(Box::new(atom))
}

pub(crate) fn add(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        (Atom::Integer(l), Atom::Integer(r)) => {
            Atom::Integer(IntExpr::Add(Box::new(l), Box::new(r)))
        }
        (Atom::Integer(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Add(Box::new(widen(l)), Box::new(r)))
        }
        (Atom::Float(l), Atom::Integer(r)) => {
            Atom::Float(FloatExpr::Add(Box::new(l), Box::new(widen(r))))
        }
        (Atom::Float(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Add(Box::new(l), Box::new(r)))
        }
        (Atom::String(l), Atom::String(r)) => {
            Atom::String(StrExpr::Add(Box::new(l), Box::new(r)))
        }
        // complement regexes cannot concatenate
        (Atom::String(l), Atom::Regex(r)) if !r.is_complement() => Atom::Regex(
            RegexExpr::Add(Box::new(RegexExpr::CastString(Box::new(l))), Box::new(r)),
        ),
        (Atom::Regex(l), Atom::String(r)) if !l.is_complement() => Atom::Regex(
            RegexExpr::Add(Box::new(l), Box::new(RegexExpr::CastString(Box::new(r)))),
        ),
        (Atom::Regex(l), Atom::Regex(r)) if !l.is_complement() && !r.is_complement() => {
            Atom::Regex(RegexExpr::Add(Box::new(l), Box::new(r)))
        }
        _ => return None,
    })
}

pub(crate) fn subtract(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        (Atom::Integer(l), Atom::Integer(r)) => {
            Atom::Integer(IntExpr::Subtract(Box::new(l), Box::new(r)))
        }
        (Atom::Integer(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Subtract(Box::new(widen(l)), Box::new(r)))
        }
        (Atom::Float(l), Atom::Integer(r)) => {
            Atom::Float(FloatExpr::Subtract(Box::new(l), Box::new(widen(r))))
        }
        (Atom::Float(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Subtract(Box::new(l), Box::new(r)))
        }
        _ => return None,
    })
}

pub(crate) fn multiply(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        (Atom::Integer(l), Atom::Integer(r)) => {
            Atom::Integer(IntExpr::Multiply(Box::new(l), Box::new(r)))
        }
        (Atom::Integer(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Multiply(Box::new(widen(l)), Box::new(r)))
        }
        (Atom::Float(l), Atom::Integer(r)) => {
            Atom::Float(FloatExpr::Multiply(Box::new(l), Box::new(widen(r))))
        }
        (Atom::Float(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Multiply(Box::new(l), Box::new(r)))
        }
        _ => return None,
    })
}

/// Both operands coerced to Float; division of two Integers still
/// produces a Float.
fn as_float(atom: Atom) -> Option<FloatExpr> {
    match atom {
        Atom::Integer(expr) => Some(widen(expr)),
        Atom::Float(expr) => Some(expr),
        _ => None,
    }
}

pub(crate) fn divide(left: Atom, right: Atom) -> Option<Atom> {
    let left = as_float(left)?;
    let right = as_float(right)?;
    Some(Atom::Float(FloatExpr::Divide(Box::new(left), Box::new(right))))
}

/// Mirrors division: always Float.
pub(crate) fn modulo(left: Atom, right: Atom) -> Option<Atom> {
    let left = as_float(left)?;
    let right = as_float(right)?;
    Some(Atom::Float(FloatExpr::Modulo(Box::new(left), Box::new(right))))
}

pub(crate) fn exponent(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        // a negative literal exponent forces the Float specialization
        (Atom::Integer(l), Atom::Integer(r @ IntExpr::Negative(_))) => {
            Atom::Float(FloatExpr::Exponent(Box::new(widen(l)), Box::new(widen(r))))
        }
        (Atom::Integer(l), Atom::Integer(r)) => {
            Atom::Integer(IntExpr::Exponent(Box::new(l), Box::new(r)))
        }
        (Atom::Integer(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Exponent(Box::new(widen(l)), Box::new(r)))
        }
        (Atom::Float(l), Atom::Integer(r)) => {
            Atom::Float(FloatExpr::Exponent(Box::new(l), Box::new(widen(r))))
        }
        (Atom::Float(l), Atom::Float(r)) => {
            Atom::Float(FloatExpr::Exponent(Box::new(l), Box::new(r)))
        }
        _ => return None,
    })
}

/// Unary `+` is a passthrough on numeric operands.
pub(crate) fn positive(atom: Atom) -> Option<Atom> {
    match atom {
        Atom::Integer(_) | Atom::Float(_) => Some(atom),
        _ => None,
    }
}

/// Unary `-`; negating a negation returns the original node.
pub(crate) fn negative(atom: Atom) -> Option<Atom> {
    Some(match atom {
        Atom::Integer(IntExpr::Negative(inner)) => Atom::Integer(*inner),
        Atom::Integer(expr) => Atom::Integer(IntExpr::Negative(Box::new(expr))),
        Atom::Float(FloatExpr::Negative(inner)) => Atom::Float(*inner),
        Atom::Float(expr) => Atom::Float(FloatExpr::Negative(Box::new(expr))),
        _ => return None,
    })
}
