//! Whole-pipeline scenarios through the library crates: lex, parse,
//! fold, evaluate.

use scpl_ast::{Kind, Value, Vars};
use scpl_lex::tokenise;
use scpl_par::{parse, VarTypes};

fn compile(input: &str, types: &VarTypes) -> scpl_ast::Atom {
    let tokens = tokenise(input).expect("lex");
    let (mut atoms, _) = parse(tokens, types).expect("parse");
    assert_eq!(atoms.len(), 1);
    atoms.remove(0)
}

fn eval_const(input: &str) -> Value {
    compile(input, &VarTypes::default())
        .eval(&Vars::default())
        .expect("eval")
}

#[test]
fn test_string_concatenation() {
    let value = eval_const("\"asd\" + \"asd\"");
    match value {
        Value::String(s) => assert_eq!(s.value, "asdasd"),
        other => panic!("unexpected value {other:?}"),
    }
}

#[test]
fn test_string_regex_concatenation() {
    let value = eval_const("\"asd.\" + /asd/i");
    match value {
        Value::Regex(regex) => {
            assert_eq!(regex.pattern, r"asd\.(?i:asd)");
            assert!(regex.flags.is_empty());
            let compiled = regex.compile().unwrap();
            assert!(compiled.is_match("asd.ASD"));
            assert!(!compiled.is_match("asdxasd"));
        }
        other => panic!("unexpected value {other:?}"),
    }
}

#[test]
fn test_cidr_membership() {
    assert_eq!(eval_const("10.84.1.1 in 10.84.0.0/16"), Value::Bool(true));
    assert_eq!(eval_const("10.85.0.1 in 10.84.0.0/16"), Value::Bool(false));
    assert_eq!(
        eval_const("fd84:9d71:8b8:1::1 in fd84:9d71:8b8::/48"),
        Value::Bool(true)
    );
}

#[test]
fn test_variable_arithmetic() {
    let mut types = VarTypes::default();
    types.insert("a".to_string(), Kind::Integer);
    let tokens = tokenise("a * 2 + 1").unwrap();
    let (atoms, deps) = parse(tokens, &types).unwrap();
    assert_eq!(deps.len(), 1);
    assert!(deps.contains("a"));

    let mut vars = Vars::default();
    vars.insert("a".to_string(), Value::Integer(3));
    assert_eq!(atoms[0].eval(&vars).unwrap(), Value::Integer(7));
}

#[test]
fn test_complement_match() {
    assert_eq!(eval_const("\"asd\" =~ ~/^bd/"), Value::Bool(true));
    assert_eq!(eval_const("\"asd\" =~ ~/^as/"), Value::Bool(false));
}

#[test]
fn test_plain_match_substring() {
    match eval_const("\"asd\" =~ /s./") {
        Value::String(s) => assert_eq!(s.value, "sd"),
        other => panic!("unexpected value {other:?}"),
    }
}

#[test]
fn test_duration_literal() {
    assert_eq!(eval_const("1w2d3h4m5s"), Value::Integer(788_645));
}

#[test]
fn test_set_membership_through_variable() {
    let set_value = eval_const("{1, 2, 3}");
    let Value::Set(set) = set_value else {
        panic!("expected a set value");
    };

    let mut types = VarTypes::default();
    types.insert("that_set".to_string(), Kind::Set(set.element));
    let mut vars = Vars::default();
    vars.insert("that_set".to_string(), Value::Set(set));

    let hit = compile("2 in that_set", &types);
    assert_eq!(hit.eval(&vars).unwrap(), Value::Bool(true));
    let miss = compile("4 in that_set", &types);
    assert_eq!(miss.eval(&vars).unwrap(), Value::Bool(false));
}

#[test]
fn test_exponent_tower() {
    assert_eq!(eval_const("2 ** 3 ** 2"), Value::Integer(512));
}

#[test]
fn test_negative_exponent_is_float() {
    match eval_const("2 ** -1") {
        Value::Float(value) => assert_eq!(value, 0.5),
        other => panic!("unexpected value {other:?}"),
    }
}

#[test]
fn test_division_of_integers_is_float() {
    assert_eq!(eval_const("1 / 2"), Value::Float(0.5));
    assert_eq!(eval_const("5 % 3"), Value::Float(2.0));
}

#[test]
fn test_precompile_agrees_with_eval() {
    let atom = compile("1 + 2 * 3 == 7", &VarTypes::default());
    let value = atom.eval(&Vars::default()).unwrap();
    let folded = atom.precompile().unwrap();
    assert_eq!(folded.eval(&Vars::default()).unwrap(), value);
    assert_eq!(value, Value::Bool(true));
}

#[test]
fn test_mixed_filter_expression() {
    let mut types = VarTypes::default();
    types.insert("nick".to_string(), Kind::String);
    types.insert("ip".to_string(), Kind::Ipv4);

    let atom = compile("nick =~ /^bad/ && ip in 10.84.0.0/16", &types);
    assert_eq!(atom.kind(), Kind::Bool);

    let mut vars = Vars::default();
    vars.insert(
        "nick".to_string(),
        Value::String(scpl_ast::StringValue::new("badwolf")),
    );
    vars.insert(
        "ip".to_string(),
        Value::Ipv4(u32::from_be_bytes([10, 84, 9, 9])),
    );
    assert_eq!(atom.eval(&vars).unwrap(), Value::Bool(true));

    vars.insert(
        "nick".to_string(),
        Value::String(scpl_ast::StringValue::new("goodwolf")),
    );
    assert_eq!(atom.eval(&vars).unwrap(), Value::Bool(false));
}

#[test]
fn test_hex_and_bitwise() {
    assert_eq!(eval_const("0xF0 | 0x0F"), Value::Integer(255));
    assert_eq!(eval_const("0xFF & 0x0F"), Value::Integer(15));
    assert_eq!(eval_const("1 << 4"), Value::Integer(16));
    assert_eq!(eval_const("~0"), Value::Integer(-1));
}
