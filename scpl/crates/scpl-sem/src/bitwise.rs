//! Bitwise specializations: Integer-only, plus the regex complement.

use scpl_ast::{Atom, IntExpr, RegexExpr};

fn int_pair(left: Atom, right: Atom) -> Option<(IntExpr, IntExpr)> {
    match (left, right) {
        (Atom::Integer(l), Atom::Integer(r)) => Some((l, r)),
        _ => None,
    }
}

pub(crate) fn and(left: Atom, right: Atom) -> Option<Atom> {
    let (l, r) = int_pair(left, right)?;
    Some(Atom::Integer(IntExpr::And(Box::new(l), Box::new(r))))
}

pub(crate) fn or(left: Atom, right: Atom) -> Option<Atom> {
    let (l, r) = int_pair(left, right)?;
    Some(Atom::Integer(IntExpr::Or(Box::new(l), Box::new(r))))
}

pub(crate) fn xor(left: Atom, right: Atom) -> Option<Atom> {
    let (l, r) = int_pair(left, right)?;
    Some(Atom::Integer(IntExpr::Xor(Box::new(l), Box::new(r))))
}

pub(crate) fn shift_left(left: Atom, right: Atom) -> Option<Atom> {
    let (l, r) = int_pair(left, right)?;
    Some(Atom::Integer(IntExpr::ShiftLeft(Box::new(l), Box::new(r))))
}

pub(crate) fn shift_right(left: Atom, right: Atom) -> Option<Atom> {
    let (l, r) = int_pair(left, right)?;
    Some(Atom::Integer(IntExpr::ShiftRight(Box::new(l), Box::new(r))))
}

/// Unary `~`: Integer bit complement, or the regex complement marker.
/// A double regex complement folds back to the original; the Integer
/// form stays nested.
pub(crate) fn complement(atom: Atom) -> Option<Atom> {
    Some(match atom {
        Atom::Integer(expr) => Atom::Integer(IntExpr::Complement(Box::new(expr))),
        Atom::Regex(RegexExpr::Complement(inner)) => Atom::Regex(*inner),
        Atom::Regex(expr) => Atom::Regex(RegexExpr::Complement(Box::new(expr))),
        _ => return None,
    })
}
