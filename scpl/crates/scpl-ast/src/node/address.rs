//! Address-typed nodes: IPv4, IPv6 and their CIDR forms.
//!
//! No operator produces an address or a network, so these are leaf-only:
//! literals and variable references.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::{lookup, wrong_type};
use crate::error::EvalError;
use crate::value::{Cidr, Value};
use crate::Vars;

#[derive(Debug, Clone, PartialEq)]
pub enum Ipv4Expr {
    Const(u32),
    Var(String),
}

impl Ipv4Expr {
    pub fn eval(&self, vars: &Vars) -> Result<u32, EvalError> {
        match self {
            Ipv4Expr::Const(value) => Ok(*value),
            Ipv4Expr::Var(name) => match lookup(vars, name)? {
                Value::Ipv4(value) => Ok(*value),
                _ => Err(wrong_type(name, "IPv4")),
            },
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Ipv4Expr::Const(_))
    }
}

impl fmt::Display for Ipv4Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ipv4Expr::Const(value) => write!(f, "IPv4({})", Ipv4Addr::from(*value)),
            Ipv4Expr::Var(name) => write!(f, "GetIPv4({name})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Ipv6Expr {
    Const(u128),
    Var(String),
}

impl Ipv6Expr {
    pub fn eval(&self, vars: &Vars) -> Result<u128, EvalError> {
        match self {
            Ipv6Expr::Const(value) => Ok(*value),
            Ipv6Expr::Var(name) => match lookup(vars, name)? {
                Value::Ipv6(value) => Ok(*value),
                _ => Err(wrong_type(name, "IPv6")),
            },
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Ipv6Expr::Const(_))
    }
}

impl fmt::Display for Ipv6Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ipv6Expr::Const(value) => write!(f, "IPv6({})", Ipv6Addr::from(*value)),
            Ipv6Expr::Var(name) => write!(f, "GetIPv6({name})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cidrv4Expr {
    Const(Cidr<u32>),
    Var(String),
}

impl Cidrv4Expr {
    pub fn eval(&self, vars: &Vars) -> Result<Cidr<u32>, EvalError> {
        match self {
            Cidrv4Expr::Const(value) => Ok(*value),
            Cidrv4Expr::Var(name) => match lookup(vars, name)? {
                Value::Cidrv4(value) => Ok(*value),
                _ => Err(wrong_type(name, "CIDRv4")),
            },
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Cidrv4Expr::Const(_))
    }
}

impl fmt::Display for Cidrv4Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cidrv4Expr::Const(value) => write!(f, "CIDRv4({value})"),
            Cidrv4Expr::Var(name) => write!(f, "GetCIDRv4({name})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cidrv6Expr {
    Const(Cidr<u128>),
    Var(String),
}

impl Cidrv6Expr {
    pub fn eval(&self, vars: &Vars) -> Result<Cidr<u128>, EvalError> {
        match self {
            Cidrv6Expr::Const(value) => Ok(*value),
            Cidrv6Expr::Var(name) => match lookup(vars, name)? {
                Value::Cidrv6(value) => Ok(*value),
                _ => Err(wrong_type(name, "CIDRv6")),
            },
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Cidrv6Expr::Const(_))
    }
}

impl fmt::Display for Cidrv6Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cidrv6Expr::Const(value) => write!(f, "CIDRv6({value})"),
            Cidrv6Expr::Var(name) => write!(f, "GetCIDRv6({name})"),
        }
    }
}
