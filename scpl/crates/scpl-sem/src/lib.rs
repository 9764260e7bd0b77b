//! scpl-sem - The Operator Resolver
//!
//! The type checker of the pipeline. For every operator the parser pops,
//! the resolver picks the single concrete specialization determined by
//! the operand kinds, inserting explicit cast nodes where an operand
//! widens, or reports that no specialization exists (`None`, which the
//! parser turns into a positioned type error).
//!
//! The whole compatibility matrix lives in this crate as pattern matches
//! over `(operator, left kind, right kind)`; scpl-ast defines what nodes
//! exist, this crate decides which may be built.

mod arithmetic;
mod bitwise;
mod bools;
mod cast;
mod compare;
mod edge_cases;
mod matches;
mod sets;
mod variable;

pub use cast::{cast_bool, cast_hash};
pub use sets::{set, SetError};
pub use variable::variable;

use scpl_ast::Atom;
use scpl_util::OpName;

/// Resolves a binary operator application to a specialized node.
///
/// `!=` is synthesized as `!(==)` rather than having nodes of its own.
pub fn binary(op: OpName, left: Atom, right: Atom) -> Option<Atom> {
    match op {
        OpName::Add => arithmetic::add(left, right),
        OpName::Subtract => arithmetic::subtract(left, right),
        OpName::Multiply => arithmetic::multiply(left, right),
        OpName::Divide => arithmetic::divide(left, right),
        OpName::Modulo => arithmetic::modulo(left, right),
        OpName::Exponent => arithmetic::exponent(left, right),
        OpName::Both => bools::both(left, right),
        OpName::Either => bools::either(left, right),
        OpName::Equal => compare::equal(left, right),
        OpName::Unequal => compare::equal(left, right).and_then(bools::not),
        OpName::Greater => compare::greater(left, right),
        OpName::Lesser => compare::lesser(left, right),
        OpName::Match => matches::match_of(left, right),
        OpName::Contains => matches::contains(left, right),
        OpName::And => bitwise::and(left, right),
        OpName::Or => bitwise::or(left, right),
        OpName::Xor => bitwise::xor(left, right),
        OpName::ShiftLeft => bitwise::shift_left(left, right),
        OpName::ShiftRight => bitwise::shift_right(left, right),
        _ => None,
    }
}

/// Resolves a unary operator application to a specialized node.
pub fn unary(op: OpName, atom: Atom) -> Option<Atom> {
    match op {
        OpName::Not => bools::not(atom),
        OpName::Positive => arithmetic::positive(atom),
        OpName::Negative => arithmetic::negative(atom),
        OpName::Complement => bitwise::complement(atom),
        _ => None,
    }
}
