//! Set-typed nodes and the hash cast.

use std::fmt;

use scpl_util::FxHashSet;

use super::{lookup, wrong_type, FloatExpr, IntExpr, Ipv4Expr, Ipv6Expr, StrExpr};
use crate::error::EvalError;
use crate::hash;
use crate::kind::ElemKind;
use crate::value::{SetValue, Value};
use crate::Vars;

/// The explicit cast that hashes an operand into the integer domain a
/// set stores. Built by the resolver for set members and for the left
/// operand of `in` against a set.
#[derive(Debug, Clone, PartialEq)]
pub enum HashExpr {
    Integer(Box<IntExpr>),
    Float(Box<FloatExpr>),
    String(Box<StrExpr>),
    Ipv4(Box<Ipv4Expr>),
    Ipv6(Box<Ipv6Expr>),
}

impl HashExpr {
    pub fn eval(&self, vars: &Vars) -> Result<u64, EvalError> {
        Ok(match self {
            HashExpr::Integer(atom) => hash::hash_integer(atom.eval(vars)?),
            HashExpr::Float(atom) => hash::hash_float(atom.eval(vars)?),
            HashExpr::String(atom) => hash::hash_string(&atom.eval(vars)?.value),
            HashExpr::Ipv4(atom) => hash::hash_ipv4(atom.eval(vars)?),
            HashExpr::Ipv6(atom) => hash::hash_ipv6(atom.eval(vars)?),
        })
    }

    /// The element kind this cast hashes from.
    pub fn element(&self) -> ElemKind {
        match self {
            HashExpr::Integer(_) => ElemKind::Integer,
            HashExpr::Float(_) => ElemKind::Float,
            HashExpr::String(_) => ElemKind::String,
            HashExpr::Ipv4(_) => ElemKind::Ipv4,
            HashExpr::Ipv6(_) => ElemKind::Ipv6,
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            HashExpr::Integer(atom) => atom.is_constant(),
            HashExpr::Float(atom) => atom.is_constant(),
            HashExpr::String(atom) => atom.is_constant(),
            HashExpr::Ipv4(atom) => atom.is_constant(),
            HashExpr::Ipv6(atom) => atom.is_constant(),
        }
    }

    pub fn precompile(self) -> Result<HashExpr, EvalError> {
        Ok(match self {
            HashExpr::Integer(atom) => HashExpr::Integer(Box::new(atom.precompile()?)),
            HashExpr::Float(atom) => HashExpr::Float(Box::new(atom.precompile()?)),
            HashExpr::String(atom) => HashExpr::String(Box::new(atom.precompile()?)),
            HashExpr::Ipv4(atom) => HashExpr::Ipv4(atom),
            HashExpr::Ipv6(atom) => HashExpr::Ipv6(atom),
        })
    }

    /// Display of the operand under the cast, used by set literals whose
    /// printed form shows the members themselves.
    fn inner(&self) -> String {
        match self {
            HashExpr::Integer(atom) => atom.to_string(),
            HashExpr::Float(atom) => atom.to_string(),
            HashExpr::String(atom) => atom.to_string(),
            HashExpr::Ipv4(atom) => atom.to_string(),
            HashExpr::Ipv6(atom) => atom.to_string(),
        }
    }
}

impl fmt::Display for HashExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastHash({})", self.inner())
    }
}

/// An expression whose static type is a homogeneous set.
#[derive(Debug, Clone, PartialEq)]
pub enum SetExpr {
    /// A `{...}` literal: members behind hash casts, all of one kind.
    Const {
        element: Option<ElemKind>,
        members: Vec<HashExpr>,
    },
    /// A variable reference, with the element kind the environment
    /// declared for it.
    Var {
        name: String,
        element: Option<ElemKind>,
    },
}

impl SetExpr {
    pub fn eval(&self, vars: &Vars) -> Result<SetValue, EvalError> {
        match self {
            SetExpr::Const { element, members } => {
                let mut hashes = FxHashSet::default();
                for member in members {
                    hashes.insert(member.eval(vars)?);
                }
                Ok(SetValue {
                    element: *element,
                    hashes,
                })
            }
            SetExpr::Var { name, element } => match lookup(vars, name)? {
                Value::Set(value) => {
                    match (element, value.element) {
                        (Some(declared), Some(actual)) if *declared != actual => {
                            Err(wrong_type(name, "Set"))
                        }
                        _ => Ok(value.clone()),
                    }
                }
                _ => Err(wrong_type(name, "Set")),
            },
        }
    }

    /// The element kind, when one is known; empty literals have none.
    pub fn element(&self) -> Option<ElemKind> {
        match self {
            SetExpr::Const { element, .. } => *element,
            SetExpr::Var { element, .. } => *element,
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            SetExpr::Const { members, .. } => members.iter().all(HashExpr::is_constant),
            SetExpr::Var { .. } => false,
        }
    }

    /// Folds each member; the set shape itself is kept so the literal
    /// still prints its members.
    pub fn precompile(self) -> Result<SetExpr, EvalError> {
        Ok(match self {
            SetExpr::Const { element, members } => SetExpr::Const {
                element,
                members: members
                    .into_iter()
                    .map(HashExpr::precompile)
                    .collect::<Result<_, _>>()?,
            },
            leaf => leaf,
        })
    }
}

impl fmt::Display for SetExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetExpr::Const { members, .. } => {
                write!(f, "Set(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member.inner())?;
                }
                write!(f, ")")
            }
            SetExpr::Var { name, .. } => write!(f, "GetSet({name})"),
        }
    }
}
