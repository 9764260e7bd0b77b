//! `=~` and `in` specializations.

use scpl_ast::{Atom, BoolExpr, RegexExpr, StrExpr};

use crate::cast::cast_hash;

/// `=~`: against a plain regex the result is the matched substring
/// (String); against a complement regex it is Bool, true iff the
/// pattern does not match.
pub(crate) fn match_of(left: Atom, right: Atom) -> Option<Atom> {
    let Atom::String(reference) = left else {
        return None;
    };
    match right {
        Atom::Regex(RegexExpr::Complement(inner)) => Some(Atom::Bool(
            BoolExpr::MatchComplement(Box::new(reference), inner),
        )),
        Atom::Regex(regex) if regex.is_complement() => Some(Atom::Bool(
            BoolExpr::MatchComplement(Box::new(reference), Box::new(regex)),
        )),
        Atom::Regex(regex) => Some(Atom::String(StrExpr::Match(
            Box::new(reference),
            Box::new(regex),
        ))),
        _ => None,
    }
}

/// `in`: substring, CIDR membership, or hash-set membership.
pub(crate) fn contains(left: Atom, right: Atom) -> Option<Atom> {
    Some(match (left, right) {
        (Atom::String(l), Atom::String(r)) => {
            Atom::Bool(BoolExpr::ContainsString(Box::new(l), Box::new(r)))
        }
        (Atom::Ipv4(l), Atom::Cidrv4(r)) => {
            Atom::Bool(BoolExpr::ContainsIpv4(Box::new(l), Box::new(r)))
        }
        (Atom::Ipv6(l), Atom::Cidrv6(r)) => {
            Atom::Bool(BoolExpr::ContainsIpv6(Box::new(l), Box::new(r)))
        }
        (needle, Atom::Set(set)) => {
            let cast = cast_hash(needle)?;
            // the needle kind must match the element kind; the empty set
            // accepts any hashable needle (and never contains it)
            if let Some(element) = set.element() {
                if element != cast.element() {
                    return None;
                }
            }
            Atom::Bool(BoolExpr::ContainsSet(cast, Box::new(set)))
        }
        _ => return None,
    })
}
