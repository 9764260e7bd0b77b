//! Variable reference construction.

use scpl_ast::{
    Atom, BoolExpr, Cidrv4Expr, Cidrv6Expr, FloatExpr, IntExpr, Ipv4Expr, Ipv6Expr, Kind,
    RegexExpr, SetExpr, StrExpr,
};

/// Builds the typed variable node for a name whose kind the environment
/// resolved.
pub fn variable(name: &str, kind: Kind) -> Atom {
    let name = name.to_string();
    match kind {
        Kind::Bool => Atom::Bool(BoolExpr::Var(name)),
        Kind::Integer => Atom::Integer(IntExpr::Var(name)),
        Kind::Float => Atom::Float(FloatExpr::Var(name)),
        Kind::String => Atom::String(StrExpr::Var(name)),
        Kind::Regex => Atom::Regex(RegexExpr::Var(name)),
        Kind::Ipv4 => Atom::Ipv4(Ipv4Expr::Var(name)),
        Kind::Ipv6 => Atom::Ipv6(Ipv6Expr::Var(name)),
        Kind::Cidrv4 => Atom::Cidrv4(Cidrv4Expr::Var(name)),
        Kind::Cidrv6 => Atom::Cidrv6(Cidrv6Expr::Var(name)),
        Kind::Set(element) => Atom::Set(SetExpr::Var { name, element }),
    }
}
