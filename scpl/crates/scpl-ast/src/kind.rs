//! The closed sum of operand types.

use std::fmt;

/// Element types a set may hold. Only hashable kinds qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemKind {
    Integer,
    Float,
    String,
    Ipv4,
    Ipv6,
}

/// The static type of an atom.
///
/// Integer and Float are disjoint; widening only happens through explicit
/// cast nodes inserted by the resolver. A set's element kind is `None`
/// only for the empty set literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Integer,
    Float,
    String,
    Regex,
    Ipv4,
    Ipv6,
    Cidrv4,
    Cidrv6,
    Set(Option<ElemKind>),
}

impl ElemKind {
    /// The operand kind of an element of this kind.
    pub fn kind(self) -> Kind {
        match self {
            ElemKind::Integer => Kind::Integer,
            ElemKind::Float => Kind::Float,
            ElemKind::String => Kind::String,
            ElemKind::Ipv4 => Kind::Ipv4,
            ElemKind::Ipv6 => Kind::Ipv6,
        }
    }
}

impl fmt::Display for ElemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemKind::Integer => write!(f, "Integer"),
            ElemKind::Float => write!(f, "Float"),
            ElemKind::String => write!(f, "String"),
            ElemKind::Ipv4 => write!(f, "IPv4"),
            ElemKind::Ipv6 => write!(f, "IPv6"),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Bool => write!(f, "Bool"),
            Kind::Integer => write!(f, "Integer"),
            Kind::Float => write!(f, "Float"),
            Kind::String => write!(f, "String"),
            Kind::Regex => write!(f, "Regex"),
            Kind::Ipv4 => write!(f, "IPv4"),
            Kind::Ipv6 => write!(f, "IPv6"),
            Kind::Cidrv4 => write!(f, "CIDRv4"),
            Kind::Cidrv6 => write!(f, "CIDRv6"),
            Kind::Set(Some(elem)) => write!(f, "Set[{elem}]"),
            Kind::Set(None) => write!(f, "Set[]"),
        }
    }
}
