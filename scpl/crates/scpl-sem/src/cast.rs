//! Cast selection: Bool coercions and the hash cast.

use scpl_ast::{Atom, BoolExpr, HashExpr};

/// Coerces an atom into a Bool expression, inserting the explicit cast
/// node for its kind. Addresses, networks and sets have no boolean
/// interpretation.
pub fn cast_bool(atom: Atom) -> Option<BoolExpr> {
    Some(match atom {
        Atom::Bool(expr) => expr,
        Atom::String(expr) => BoolExpr::CastString(Box::new(expr)),
        Atom::Regex(expr) => BoolExpr::CastRegex(Box::new(expr)),
        Atom::Integer(expr) => BoolExpr::CastInteger(Box::new(expr)),
        Atom::Float(expr) => BoolExpr::CastFloat(Box::new(expr)),
        _ => return None,
    })
}

/// Wraps a hashable atom in the hash cast used by set membership.
pub fn cast_hash(atom: Atom) -> Option<HashExpr> {
    Some(match atom {
        Atom::Integer(expr) => HashExpr::Integer(Box::new(expr)),
        Atom::Float(expr) => HashExpr::Float(Box::new(expr)),
        Atom::String(expr) => HashExpr::String(Box::new(expr)),
        Atom::Ipv4(expr) => HashExpr::Ipv4(Box::new(expr)),
        Atom::Ipv6(expr) => HashExpr::Ipv6(Box::new(expr)),
        _ => return None,
    })
}
