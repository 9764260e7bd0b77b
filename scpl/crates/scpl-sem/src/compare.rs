//! Comparison specializations.

use scpl_ast::{Atom, BoolExpr, FloatExpr, IntExpr};

fn widen(atom: IntExpr) -> FloatExpr {
    FloatExpr::CastInteger(Box::new(atom))
}

/// `==` exists for Bool, Integer and String; Float equality is
/// deliberately absent.
pub(crate) fn equal(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        (Atom::Bool(l), Atom::Bool(r)) => {
            Atom::Bool(BoolExpr::EqualBool(Box::new(l), Box::new(r)))
        }
        (Atom::Integer(l), Atom::Integer(r)) => {
            Atom::Bool(BoolExpr::EqualInteger(Box::new(l), Box::new(r)))
        }
        (Atom::String(l), Atom::String(r)) => {
            Atom::Bool(BoolExpr::EqualString(Box::new(l), Box::new(r)))
        }
        _ => return None,
    })
}

pub(crate) fn greater(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        (Atom::Integer(l), Atom::Integer(r)) => {
            Atom::Bool(BoolExpr::GreaterInteger(Box::new(l), Box::new(r)))
        }
        (Atom::Integer(l), Atom::Float(r)) => {
            Atom::Bool(BoolExpr::GreaterFloat(Box::new(widen(l)), Box::new(r)))
        }
        (Atom::Float(l), Atom::Integer(r)) => {
            Atom::Bool(BoolExpr::GreaterFloat(Box::new(l), Box::new(widen(r))))
        }
        (Atom::Float(l), Atom::Float(r)) => {
            Atom::Bool(BoolExpr::GreaterFloat(Box::new(l), Box::new(r)))
        }
        _ => return None,
    })
}

pub(crate) fn lesser(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        (Atom::Integer(l), Atom::Integer(r)) => {
            Atom::Bool(BoolExpr::LesserInteger(Box::new(l), Box::new(r)))
        }
        (Atom::Integer(l), Atom::Float(r)) => {
            Atom::Bool(BoolExpr::LesserFloat(Box::new(widen(l)), Box::new(r)))
        }
        (Atom::Float(l), Atom::Integer(r)) => {
            Atom::Bool(BoolExpr::LesserFloat(Box::new(l), Box::new(widen(r))))
        }
        (Atom::Float(l), Atom::Float(r)) => {
            Atom::Bool(BoolExpr::LesserFloat(Box::new(l), Box::new(r)))
        }
        _ => return None,
    })
}
