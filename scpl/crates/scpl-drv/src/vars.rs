//! Variable bag decoding.
//!
//! The CLI takes variables as a JSON object whose values are strings
//! containing SCPL literal expressions: `{"a": "3", "net": "10.0.0.0/8"}`.
//! Each value is compiled with an empty environment and evaluated once;
//! the resulting kinds become the parser's type environment and the
//! values the evaluator's bag.

use anyhow::{bail, Context, Result};

use scpl_ast::{Value, Vars};
use scpl_par::VarTypes;

/// Decodes the optional JSON argument into a type environment and a
/// variable bag, preserving declaration order.
pub fn decode(json: Option<&str>) -> Result<(VarTypes, Vars)> {
    let mut types = VarTypes::default();
    let mut bag = Vars::default();

    let Some(json) = json else {
        return Ok((types, bag));
    };

    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(json).context("variables must be a JSON object")?;

    for (name, serialized) in map {
        let Some(source) = serialized.as_str() else {
            bail!("variable {name} must be a string of SCPL source");
        };
        let value = compile_literal(source)
            .with_context(|| format!("variable {name} ({source:?})"))?;
        types.insert(name.clone(), value.kind());
        bag.insert(name, value);
    }

    Ok((types, bag))
}

fn compile_literal(source: &str) -> Result<Value> {
    let tokens = scpl_lex::tokenise(source).map_err(|e| anyhow::anyhow!("{e}"))?;
    let (atoms, _) = scpl_par::parse(tokens, &VarTypes::default())
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let mut atoms = atoms.into_iter();
    let Some(atom) = atoms.next() else {
        bail!("empty expression");
    };
    if atoms.next().is_some() {
        bail!("expected a single expression");
    }
    atom.eval(&Vars::default()).map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scpl_ast::Kind;

    #[test]
    fn test_decode_none() {
        let (types, bag) = decode(None).unwrap();
        assert!(types.is_empty());
        assert!(bag.is_empty());
    }

    #[test]
    fn test_decode_typed_values() {
        let (types, bag) =
            decode(Some(r#"{"a": "3", "s": "'x'", "net": "10.0.0.0/8"}"#)).unwrap();
        assert_eq!(types.get("a"), Some(&Kind::Integer));
        assert_eq!(types.get("s"), Some(&Kind::String));
        assert_eq!(types.get("net"), Some(&Kind::Cidrv4));
        assert_eq!(bag.get("a"), Some(&Value::Integer(3)));
    }

    #[test]
    fn test_decode_preserves_order() {
        let (types, _) = decode(Some(r#"{"b": "1", "a": "2"}"#)).unwrap();
        let names: Vec<&String> = types.keys().collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_decode_set_variable() {
        let (types, bag) = decode(Some(r#"{"allowed": "{1, 2, 3}"}"#)).unwrap();
        assert!(matches!(types.get("allowed"), Some(Kind::Set(Some(_)))));
        assert!(matches!(bag.get("allowed"), Some(Value::Set(_))));
    }

    #[test]
    fn test_decode_rejects_non_strings() {
        assert!(decode(Some(r#"{"a": 3}"#)).is_err());
        assert!(decode(Some("[]")).is_err());
        assert!(decode(Some(r#"{"a": "1 +"}"#)).is_err());
    }
}
