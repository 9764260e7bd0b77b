//! Operand constructors: token text to literal atoms.
//!
//! The lexer has already validated the shape; these parse the value and
//! catch what shape validation cannot (integer overflow, CIDR prefix
//! range). Failures are [`ValueError`]s the parser positions at the
//! originating token.

use std::collections::BTreeSet;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::ValueError;
use crate::node::{
    BoolExpr, Cidrv4Expr, Cidrv6Expr, FloatExpr, IntExpr, Ipv4Expr, Ipv6Expr, RegexExpr, StrExpr,
};
use crate::value::{Cidr, RegexValue, StringValue};
use crate::Atom;

/// Seconds per duration unit letter.
const DURATION_UNITS: &[(char, i64)] = &[
    ('w', 604_800),
    ('d', 86_400),
    ('h', 3_600),
    ('m', 60),
    ('s', 1),
];

/// Resolves `true`/`false`; any other word is a variable reference.
pub fn keyword(text: &str) -> Option<Atom> {
    match text {
        "true" => Some(Atom::Bool(BoolExpr::Const(true))),
        "false" => Some(Atom::Bool(BoolExpr::Const(false))),
        _ => None,
    }
}

pub fn integer(text: &str) -> Result<Atom, ValueError> {
    let value: i64 = text
        .parse()
        .map_err(|_| ValueError(format!("invalid integer literal {text}")))?;
    Ok(Atom::Integer(IntExpr::Const(value)))
}

pub fn float(text: &str) -> Result<Atom, ValueError> {
    let value: f64 = text
        .parse()
        .map_err(|_| ValueError(format!("invalid float literal {text}")))?;
    Ok(Atom::Float(FloatExpr::Const(value)))
}

/// Hex lexes to an Integer; the type system never sees a Hex kind.
pub fn hex(text: &str) -> Result<Atom, ValueError> {
    let digits = text
        .strip_prefix("0x")
        .ok_or_else(|| ValueError(format!("invalid hex literal {text}")))?;
    let value = i64::from_str_radix(digits, 16)
        .map_err(|_| ValueError(format!("invalid hex literal {text}")))?;
    Ok(Atom::Integer(IntExpr::Const(value)))
}

/// A duration lexes to an Integer holding its total seconds.
pub fn duration(text: &str) -> Result<Atom, ValueError> {
    let mut total: i64 = 0;
    let mut run: i64 = 0;
    for c in text.chars() {
        if let Some(digit) = c.to_digit(10) {
            run = run
                .checked_mul(10)
                .and_then(|r| r.checked_add(i64::from(digit)))
                .ok_or_else(|| ValueError(format!("duration out of range {text}")))?;
        } else {
            let scale = DURATION_UNITS
                .iter()
                .find(|&&(unit, _)| unit == c)
                .map(|&(_, scale)| scale)
                .ok_or_else(|| ValueError(format!("invalid duration literal {text}")))?;
            total = run
                .checked_mul(scale)
                .and_then(|part| total.checked_add(part))
                .ok_or_else(|| ValueError(format!("duration out of range {text}")))?;
            run = 0;
        }
    }
    Ok(Atom::Integer(IntExpr::Const(total)))
}

/// Strips the delimiters; the inner text is kept raw (escapes are only
/// meaningful to the lexer's delimiter search).
pub fn string(text: &str) -> Atom {
    let chars: Vec<char> = text.chars().collect();
    let delimiter = chars.first().copied();
    let value: String = chars[1..chars.len().saturating_sub(1)].iter().collect();
    Atom::String(StrExpr::Const(StringValue { delimiter, value }))
}

/// Splits `<delim>pattern<delim>flags` at the delimiter's last
/// occurrence.
pub fn regex(text: &str) -> Atom {
    let chars: Vec<char> = text.chars().collect();
    let delimiter = chars[0];
    let rest = &chars[1..];
    let close = rest
        .iter()
        .rposition(|&c| c == delimiter)
        .unwrap_or(rest.len());
    let pattern: String = rest[..close].iter().collect();
    let flags: BTreeSet<char> = rest[close + 1..].iter().copied().collect();
    Atom::Regex(RegexExpr::Const(RegexValue {
        delimiter: Some(delimiter),
        pattern,
        flags,
        expected: true,
    }))
}

pub fn ipv4(text: &str) -> Result<Atom, ValueError> {
    Ok(Atom::Ipv4(Ipv4Expr::Const(parse_v4(text)?)))
}

pub fn ipv6(text: &str) -> Result<Atom, ValueError> {
    Ok(Atom::Ipv6(Ipv6Expr::Const(parse_v6(text)?)))
}

pub fn cidrv4(text: &str) -> Result<Atom, ValueError> {
    let (address, prefix) = split_cidr(text)?;
    let prefix = parse_prefix(prefix, Cidr::<u32>::MAX_PREFIX)?;
    let cidr = Cidr::<u32>::new(parse_v4(address)?, prefix)
        .ok_or_else(|| prefix_error(prefix, Cidr::<u32>::MAX_PREFIX))?;
    Ok(Atom::Cidrv4(Cidrv4Expr::Const(cidr)))
}

pub fn cidrv6(text: &str) -> Result<Atom, ValueError> {
    let (address, prefix) = split_cidr(text)?;
    let prefix = parse_prefix(prefix, Cidr::<u128>::MAX_PREFIX)?;
    let cidr = Cidr::<u128>::new(parse_v6(address)?, prefix)
        .ok_or_else(|| prefix_error(prefix, Cidr::<u128>::MAX_PREFIX))?;
    Ok(Atom::Cidrv6(Cidrv6Expr::Const(cidr)))
}

fn parse_v4(text: &str) -> Result<u32, ValueError> {
    text.parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| ValueError(format!("invalid IPv4 address {text}")))
}

fn parse_v6(text: &str) -> Result<u128, ValueError> {
    text.parse::<Ipv6Addr>()
        .map(u128::from)
        .map_err(|_| ValueError(format!("invalid IPv6 address {text}")))
}

fn split_cidr(text: &str) -> Result<(&str, &str), ValueError> {
    text.split_once('/')
        .ok_or_else(|| ValueError(format!("invalid CIDR {text}")))
}

fn parse_prefix(text: &str, maxbits: u8) -> Result<u8, ValueError> {
    match text.parse::<u32>() {
        Ok(value) if value <= u32::from(maxbits) => Ok(value as u8),
        Ok(value) => Err(ValueError(format!(
            "invalid prefix length {value} (min 0 max {maxbits})"
        ))),
        Err(_) => Err(ValueError(format!("invalid prefix length {text}"))),
    }
}

fn prefix_error(prefix: u8, maxbits: u8) -> ValueError {
    ValueError(format!(
        "invalid prefix length {prefix} (min 0 max {maxbits})"
    ))
}
