//! Set literal construction.

use scpl_ast::{Atom, ElemKind, Kind, SetExpr};

use crate::cast::cast_hash;

/// Why a `{...}` literal failed to build, pointing at the first
/// offending element so the parser can place a caret on its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetError {
    /// Position of the offending element within the literal.
    pub index: usize,
    /// The offending element's kind.
    pub found: Kind,
    /// The element kind established by the preceding elements, when the
    /// failure is heterogeneity rather than unhashability.
    pub expected: Option<ElemKind>,
}

/// Builds a homogeneous hash set from scope atoms. The first element
/// fixes the element kind; `{}` is the untyped empty set.
pub fn set(atoms: Vec<Atom>) -> Result<SetExpr, SetError> {
    let mut element: Option<ElemKind> = None;
    let mut members = Vec::with_capacity(atoms.len());

    for (index, atom) in atoms.into_iter().enumerate() {
        let kind = atom.kind();
        let Some(cast) = cast_hash(atom) else {
            return Err(SetError {
                index,
                found: kind,
                expected: element,
            });
        };
        match element {
            None => element = Some(cast.element()),
            Some(expected) if expected != cast.element() => {
                return Err(SetError {
                    index,
                    found: kind,
                    expected: Some(expected),
                });
            }
            _ => {}
        }
        members.push(cast);
    }

    Ok(SetExpr::Const { element, members })
}
