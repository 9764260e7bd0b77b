//! Runtime values.
//!
//! Evaluation inside the tree is monomorphic: each node family returns
//! its native Rust type. `Value` is the boundary representation: the
//! variable bag maps names to values, and `Atom::eval` wraps its result
//! in one.

use std::collections::BTreeSet;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use scpl_util::{with_delimiter, FxHashSet};

use crate::kind::{ElemKind, Kind};

/// Delimiter preference when printing a string with no remembered one.
pub const STRING_DELIMS: &[char] = &['"', '\''];
/// Delimiter preference when printing a regex with no remembered one.
pub const REGEX_DELIMS: &[char] = &['/', ',', ';', ':'];

/// A string plus the delimiter it was written with, kept for faithful
/// round-trip printing. Equality and hashing ignore the delimiter.
#[derive(Debug, Clone)]
pub struct StringValue {
    pub delimiter: Option<char>,
    pub value: String,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            delimiter: None,
            value: value.into(),
        }
    }
}

impl PartialEq for StringValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for StringValue {}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.delimiter {
            Some('“') => write!(f, "“{}”", self.value),
            Some(delim) => write!(f, "{delim}{}{delim}", self.value),
            None => write!(f, "{}", with_delimiter(&self.value, STRING_DELIMS)),
        }
    }
}

/// An uncompiled regex: pattern source, flag set, remembered delimiter,
/// and the match expectation (`expected = false` marks a complement
/// regex, whose `=~` yields "does not match").
#[derive(Debug, Clone)]
pub struct RegexValue {
    pub delimiter: Option<char>,
    pub pattern: String,
    pub flags: BTreeSet<char>,
    pub expected: bool,
}

impl RegexValue {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            delimiter: None,
            pattern: pattern.into(),
            flags: BTreeSet::new(),
            expected: true,
        }
    }

    /// Compiles the pattern. Only the `i` flag is honored; it is applied
    /// as an inline group so alternations stay scoped.
    pub fn compile(&self) -> Result<regex::Regex, regex::Error> {
        if self.flags.contains(&'i') {
            regex::Regex::new(&format!("(?i:{})", self.pattern))
        } else {
            regex::Regex::new(&self.pattern)
        }
    }
}

impl PartialEq for RegexValue {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.flags == other.flags
            && self.expected == other.expected
    }
}
impl Eq for RegexValue {}

impl fmt::Display for RegexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.delimiter {
            Some(delim) => write!(f, "{delim}{}{delim}", self.pattern)?,
            None => write!(f, "{}", with_delimiter(&self.pattern, REGEX_DELIMS))?,
        }
        for flag in &self.flags {
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

/// A network in CIDR form. Host bits are masked out at construction, so
/// `network == address & mask` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr<T> {
    pub network: T,
    pub prefix: u8,
    pub mask: T,
}

impl Cidr<u32> {
    pub const MAX_PREFIX: u8 = 32;

    pub fn new(address: u32, prefix: u8) -> Option<Self> {
        if prefix > Self::MAX_PREFIX {
            return None;
        }
        let mask = u32::MAX
            .checked_shl(u32::from(Self::MAX_PREFIX - prefix))
            .unwrap_or(0);
        Some(Self {
            network: address & mask,
            prefix,
            mask,
        })
    }
}

impl Cidr<u128> {
    pub const MAX_PREFIX: u8 = 128;

    pub fn new(address: u128, prefix: u8) -> Option<Self> {
        if prefix > Self::MAX_PREFIX {
            return None;
        }
        let mask = u128::MAX
            .checked_shl(u32::from(Self::MAX_PREFIX - prefix))
            .unwrap_or(0);
        Some(Self {
            network: address & mask,
            prefix,
            mask,
        })
    }
}

impl fmt::Display for Cidr<u32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.network), self.prefix)
    }
}

impl fmt::Display for Cidr<u128> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv6Addr::from(self.network), self.prefix)
    }
}

/// The evaluated form of a set: its element kind and the semantic hashes
/// of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetValue {
    pub element: Option<ElemKind>,
    pub hashes: FxHashSet<u64>,
}

/// A runtime value of any operand kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(StringValue),
    Regex(RegexValue),
    Ipv4(u32),
    Ipv6(u128),
    Cidrv4(Cidr<u32>),
    Cidrv6(Cidr<u128>),
    Set(SetValue),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Regex(_) => Kind::Regex,
            Value::Ipv4(_) => Kind::Ipv4,
            Value::Ipv6(_) => Kind::Ipv6,
            Value::Cidrv4(_) => Kind::Cidrv4,
            Value::Cidrv6(_) => Kind::Cidrv6,
            Value::Set(set) => Kind::Set(set.element),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "Bool(true)"),
            Value::Bool(false) => write!(f, "Bool(false)"),
            Value::Integer(value) => write!(f, "Integer({value})"),
            Value::Float(value) => write!(f, "Float({value:?})"),
            Value::String(value) => write!(f, "{value}"),
            Value::Regex(value) => write!(f, "Regex({value})"),
            Value::Ipv4(value) => write!(f, "IPv4({})", Ipv4Addr::from(*value)),
            Value::Ipv6(value) => write!(f, "IPv6({})", Ipv6Addr::from(*value)),
            Value::Cidrv4(value) => write!(f, "CIDRv4({value})"),
            Value::Cidrv6(value) => write!(f, "CIDRv6({value})"),
            Value::Set(value) => write!(f, "Set({} elements)", value.hashes.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_masks_host_bits() {
        let cidr = Cidr::<u32>::new(u32::from(Ipv4Addr::new(10, 84, 1, 1)), 16).unwrap();
        assert_eq!(Ipv4Addr::from(cidr.network), Ipv4Addr::new(10, 84, 0, 0));
        assert_eq!(cidr.mask, 0xffff_0000);
        assert_eq!(cidr.to_string(), "10.84.0.0/16");
    }

    #[test]
    fn test_cidr_prefix_bounds() {
        assert!(Cidr::<u32>::new(0, 33).is_none());
        assert!(Cidr::<u32>::new(0, 0).is_some());
        assert_eq!(Cidr::<u32>::new(u32::MAX, 0).unwrap().network, 0);
        assert_eq!(Cidr::<u32>::new(u32::MAX, 32).unwrap().mask, u32::MAX);
        assert!(Cidr::<u128>::new(0, 129).is_none());
        assert_eq!(Cidr::<u128>::new(u128::MAX, 128).unwrap().mask, u128::MAX);
    }

    #[test]
    fn test_string_round_trip_display() {
        let kept = StringValue {
            delimiter: Some('\''),
            value: "asd".into(),
        };
        assert_eq!(kept.to_string(), "'asd'");
        assert_eq!(StringValue::new("asd").to_string(), "\"asd\"");
        assert_eq!(StringValue::new("a\"b").to_string(), "'a\"b'");
    }

    #[test]
    fn test_regex_display_with_flags() {
        let mut value = RegexValue::new("asd");
        value.flags.insert('i');
        assert_eq!(value.to_string(), "/asd/i");
        value.delimiter = Some(',');
        assert_eq!(value.to_string(), ",asd,i");
    }

    #[test]
    fn test_regex_compile_honors_i_flag() {
        let mut value = RegexValue::new("a|b");
        value.flags.insert('i');
        let compiled = value.compile().unwrap();
        assert!(compiled.is_match("A"));
        assert!(compiled.is_match("B"));
    }

    #[test]
    fn test_string_equality_ignores_delimiter() {
        let a = StringValue {
            delimiter: Some('"'),
            value: "x".into(),
        };
        let b = StringValue {
            delimiter: Some('\''),
            value: "x".into(),
        };
        assert_eq!(a, b);
    }
}
