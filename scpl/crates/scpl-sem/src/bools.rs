//! Boolean connectives: `&&`, `||`, unary `!`.
//!
//! All three cast their operands to Bool first, so any castable operand
//! kind participates.

use scpl_ast::{Atom, BoolExpr};

use crate::cast::cast_bool;

pub(crate) fn both(left: Atom, right: Atom) -> Option<Atom> {
    let l = cast_bool(left)?;
    let r = cast_bool(right)?;
    Some(Atom::Bool(BoolExpr::Both(Box::new(l), Box::new(r))))
}

pub(crate) fn either(left: Atom, right: Atom) -> Option<Atom> {
    let l = cast_bool(left)?;
    let r = cast_bool(right)?;
    Some(Atom::Bool(BoolExpr::Either(Box::new(l), Box::new(r))))
}

pub(crate) fn not(atom: Atom) -> Option<Atom> {
    let inner = cast_bool(atom)?;
    Some(Atom::Bool(BoolExpr::Not(Box::new(inner))))
}
