//! scpl-ast - Typed AST, Operand Model and Evaluator
//!
//! The data layer of the pipeline: operand kinds, literal constructors,
//! the per-kind expression enums the resolver assembles, runtime values,
//! semantic hashing, constant folding, and `eval`.
//!
//! A node's enum variant *is* its static type; `Atom::Integer` can only
//! evaluate to an `i64`. Operator specializations live as variants on the
//! expression enum of their result kind (`Add(Int, Int)` on `IntExpr`,
//! `Equal(Int, Int)` on `BoolExpr`), with explicit cast nodes where the
//! resolver widened an operand.

pub mod literal;

mod atom;
mod error;
mod hash;
mod kind;
mod node;
mod value;

pub use atom::Atom;
pub use error::{EvalError, ValueError};
pub use hash::{hash_float, hash_integer, hash_ipv4, hash_ipv6, hash_string};
pub use kind::{ElemKind, Kind};
pub use node::{
    BoolExpr, Cidrv4Expr, Cidrv6Expr, FloatExpr, HashExpr, IntExpr, Ipv4Expr, Ipv6Expr,
    RegexExpr, SetExpr, StrExpr,
};
pub use value::{Cidr, RegexValue, SetValue, StringValue, Value, REGEX_DELIMS, STRING_DELIMS};

/// The variable bag `eval` consumes: name to value, in insertion order.
pub type Vars = indexmap::IndexMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_vocabulary() {
        let node = Atom::Integer(IntExpr::Add(
            Box::new(IntExpr::Const(1)),
            Box::new(IntExpr::Negative(Box::new(IntExpr::Const(2)))),
        ));
        assert_eq!(node.to_string(), "Add(Integer(1), Negative(Integer(2)))");
    }

    #[test]
    fn test_variable_display() {
        let node = Atom::String(StrExpr::Var("nick".into()));
        assert_eq!(node.to_string(), "GetString(nick)");
    }

    #[test]
    fn test_eval_name_not_found() {
        let node = Atom::Integer(IntExpr::Var("missing".into()));
        assert!(matches!(
            node.eval(&Vars::default()),
            Err(EvalError::NameNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_eval_wrong_type() {
        let mut vars = Vars::default();
        vars.insert("x".into(), Value::Bool(true));
        let node = Atom::Integer(IntExpr::Var("x".into()));
        assert!(matches!(
            node.eval(&vars),
            Err(EvalError::WrongType { expected: "Integer", .. })
        ));
    }

    #[test]
    fn test_precompile_folds_constant_subtrees() {
        // a * (1 + 2) folds the right subtree only
        let node = Atom::Integer(IntExpr::Multiply(
            Box::new(IntExpr::Var("a".into())),
            Box::new(IntExpr::Add(
                Box::new(IntExpr::Const(1)),
                Box::new(IntExpr::Const(2)),
            )),
        ));
        let folded = node.precompile().unwrap();
        assert_eq!(folded.to_string(), "Multiply(GetInteger(a), Integer(3))");
    }

    #[test]
    fn test_precompile_matches_eval_for_constants() {
        let node = Atom::Integer(IntExpr::Exponent(
            Box::new(IntExpr::Const(2)),
            Box::new(IntExpr::Exponent(
                Box::new(IntExpr::Const(3)),
                Box::new(IntExpr::Const(2)),
            )),
        ));
        let value = node.eval(&Vars::default()).unwrap();
        let folded = node.precompile().unwrap();
        assert_eq!(folded, Atom::Integer(IntExpr::Const(512)));
        assert_eq!(value, Value::Integer(512));
    }

    #[test]
    fn test_integer_overflow_is_an_error() {
        let node = Atom::Integer(IntExpr::Add(
            Box::new(IntExpr::Const(i64::MAX)),
            Box::new(IntExpr::Const(1)),
        ));
        assert!(matches!(
            node.eval(&Vars::default()),
            Err(EvalError::Overflow("addition"))
        ));
    }

    #[test]
    fn test_shift_range_is_checked() {
        let node = Atom::Integer(IntExpr::ShiftLeft(
            Box::new(IntExpr::Const(1)),
            Box::new(IntExpr::Const(64)),
        ));
        assert!(matches!(
            node.eval(&Vars::default()),
            Err(EvalError::ShiftRange(64))
        ));
    }

    #[test]
    fn test_division_yields_float() {
        let node = Atom::Float(FloatExpr::Divide(
            Box::new(FloatExpr::CastInteger(Box::new(IntExpr::Const(1)))),
            Box::new(FloatExpr::CastInteger(Box::new(IntExpr::Const(2)))),
        ));
        assert_eq!(node.eval(&Vars::default()).unwrap(), Value::Float(0.5));
    }

    #[test]
    fn test_regex_concatenation_scopes_flags() {
        let mut right = RegexValue::new("asd");
        right.flags.insert('i');
        let node = Atom::Regex(RegexExpr::Add(
            Box::new(RegexExpr::CastString(Box::new(StrExpr::Const(
                StringValue::new("asd."),
            )))),
            Box::new(RegexExpr::Const(right)),
        ));
        match node.eval(&Vars::default()).unwrap() {
            Value::Regex(value) => {
                assert_eq!(value.pattern, r"asd\.(?i:asd)");
                assert!(value.flags.is_empty());
                assert!(value.expected);
            }
            other => panic!("unexpected value {other:?}"),
        }
    }

    #[test]
    fn test_complement_toggles_expectation() {
        let node = RegexExpr::Complement(Box::new(RegexExpr::Const(RegexValue::new("^as"))));
        let value = node.eval(&Vars::default()).unwrap();
        assert!(!value.expected);
    }

    #[test]
    fn test_match_returns_matched_substring() {
        let node = StrExpr::Match(
            Box::new(StrExpr::Const(StringValue::new("asd"))),
            Box::new(RegexExpr::Const(RegexValue::new("^as"))),
        );
        assert_eq!(node.eval(&Vars::default()).unwrap().value, "as");

        let node = StrExpr::Match(
            Box::new(StrExpr::Const(StringValue::new("asd"))),
            Box::new(RegexExpr::Const(RegexValue::new("^bd"))),
        );
        assert_eq!(node.eval(&Vars::default()).unwrap().value, "");
    }

    #[test]
    fn test_match_complement_inverts() {
        let node = BoolExpr::MatchComplement(
            Box::new(StrExpr::Const(StringValue::new("asd"))),
            Box::new(RegexExpr::Const(RegexValue::new("^bd"))),
        );
        assert!(node.eval(&Vars::default()).unwrap());

        let node = BoolExpr::MatchComplement(
            Box::new(StrExpr::Const(StringValue::new("asd"))),
            Box::new(RegexExpr::Const(RegexValue::new("^as"))),
        );
        assert!(!node.eval(&Vars::default()).unwrap());
    }

    #[test]
    fn test_cidr_membership() {
        let cidr = Cidr::<u32>::new(u32::from_be_bytes([10, 84, 0, 0]), 16).unwrap();
        let inside = BoolExpr::ContainsIpv4(
            Box::new(Ipv4Expr::Const(u32::from_be_bytes([10, 84, 1, 1]))),
            Box::new(Cidrv4Expr::Const(cidr)),
        );
        assert!(inside.eval(&Vars::default()).unwrap());

        let outside = BoolExpr::ContainsIpv4(
            Box::new(Ipv4Expr::Const(u32::from_be_bytes([10, 85, 0, 1]))),
            Box::new(Cidrv4Expr::Const(cidr)),
        );
        assert!(!outside.eval(&Vars::default()).unwrap());
    }

    #[test]
    fn test_set_membership_via_hashes() {
        let members = vec![
            HashExpr::Integer(Box::new(IntExpr::Const(1))),
            HashExpr::Integer(Box::new(IntExpr::Const(2))),
            HashExpr::Integer(Box::new(IntExpr::Const(3))),
        ];
        let set = SetExpr::Const {
            element: Some(ElemKind::Integer),
            members,
        };
        let hit = BoolExpr::ContainsSet(
            HashExpr::Integer(Box::new(IntExpr::Const(2))),
            Box::new(set.clone()),
        );
        assert!(hit.eval(&Vars::default()).unwrap());

        let miss = BoolExpr::ContainsSet(
            HashExpr::Integer(Box::new(IntExpr::Const(4))),
            Box::new(set),
        );
        assert!(!miss.eval(&Vars::default()).unwrap());
    }

    #[test]
    fn test_casefold_default_lowercases() {
        let node = StrExpr::Casefold {
            atom: Box::new(StrExpr::Const(StringValue::new("AsD"))),
            table: None,
        };
        assert_eq!(node.eval(&Vars::default()).unwrap().value, "asd");
    }

    #[test]
    fn test_casemapped_refolds_insensitive_patterns() {
        let mut value = RegexValue::new("a[b-d]");
        value.flags.insert('i');
        let table: scpl_regex::CaseTable = [('a', "aA".to_string()), ('c', "cC".to_string())]
            .into_iter()
            .collect();
        let node = RegexExpr::Casemapped {
            atom: Box::new(RegexExpr::Const(value)),
            table,
        };
        let folded = node.eval(&Vars::default()).unwrap();
        assert_eq!(folded.pattern, "[aA][bcCd]");
        assert!(!folded.flags.contains(&'i'));
    }
}
