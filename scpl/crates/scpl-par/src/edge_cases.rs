//! Edge case tests for scpl-par

#[cfg(test)]
mod tests {
    use scpl_ast::{Value, Vars};
    use scpl_lex::tokenise;

    use crate::{parse, ParseError, VarTypes};

    fn parse_str(input: &str) -> Result<(Vec<scpl_ast::Atom>, crate::Deps), ParseError> {
        parse(tokenise(input).unwrap(), &VarTypes::default())
    }

    fn syntax_message(input: &str) -> (String, String) {
        match parse_str(input).unwrap_err() {
            ParseError::Syntax { token, message } => (token.text, message),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    // ==================== SCOPES ====================

    #[test]
    fn test_edge_unclosed_scope() {
        let (text, message) = syntax_message("(1 + 2");
        assert_eq!(text, "(");
        assert_eq!(message, "unclosed scope");
    }

    #[test]
    fn test_edge_unexpected_terminator() {
        let (text, message) = syntax_message("1 + 2)");
        assert_eq!(text, ")");
        assert_eq!(message, "unexpected scope terminator");
    }

    #[test]
    fn test_edge_mismatched_terminator() {
        let (text, message) = syntax_message("(1}");
        assert_eq!(text, "(");
        assert_eq!(message, "mismatched scope terminator");
    }

    #[test]
    fn test_edge_reserved_bracket_scope() {
        let (text, message) = syntax_message("[1]");
        assert_eq!(text, "[");
        assert_eq!(message, "reserved scope");
    }

    #[test]
    fn test_edge_nested_scopes() {
        let (atoms, _) = parse_str("((1 + 2)) * 2").unwrap();
        assert_eq!(
            atoms[0].to_string(),
            "Multiply(Add(Integer(1), Integer(2)), Integer(2))"
        );
    }

    #[test]
    fn test_edge_group_inside_set() {
        let (atoms, _) = parse_str("{(1), 2}").unwrap();
        assert_eq!(atoms[0].to_string(), "Set(Integer(1), Integer(2))");
    }

    #[test]
    fn test_edge_multi_atom_group() {
        // a parenthesized list re-pushes all atoms; they surface as
        // multiple roots
        let (atoms, _) = parse_str("(1, 2)").unwrap();
        assert_eq!(atoms.len(), 2);
    }

    #[test]
    fn test_edge_empty_parens() {
        let (atoms, _) = parse_str("()").unwrap();
        assert!(atoms.is_empty());
    }

    // ==================== COMMAS ====================

    #[test]
    fn test_edge_comma_in_root_scope() {
        let (text, message) = syntax_message("1, 2");
        assert_eq!(text, ",");
        assert_eq!(message, "comma in root scope");
    }

    // ==================== OPERATORS ====================

    #[test]
    fn test_edge_missing_binary_operand() {
        let (text, message) = syntax_message("1 +");
        assert_eq!(text, "+");
        assert_eq!(message, "missing binary operand");
    }

    #[test]
    fn test_edge_missing_unary_operand() {
        let (text, message) = syntax_message("!");
        assert_eq!(text, "!");
        assert_eq!(message, "missing unary operand");
    }

    #[test]
    fn test_edge_invalid_unary_operator() {
        // `*` has no unary reading
        let (text, message) = syntax_message("* 1");
        assert_eq!(text, "*");
        assert_eq!(message, "invalid unary operator");
    }

    #[test]
    fn test_edge_invalid_binary_operator() {
        // `~` has no binary reading
        let (text, message) = syntax_message("1 ~ 2");
        assert_eq!(text, "~");
        assert_eq!(message, "invalid binary operator");
    }

    #[test]
    fn test_edge_missing_operator_between_operands() {
        let (text, message) = syntax_message("1 2");
        assert_eq!(text, "2");
        assert_eq!(message, "missing operator");
    }

    // ==================== BOOLEAN CHAINS ====================

    #[test]
    fn test_edge_casting_connectives_evaluate() {
        let eval = |input: &str| {
            let (atoms, _) = parse_str(input).unwrap();
            atoms[0].eval(&Vars::default()).unwrap()
        };
        assert_eq!(eval("1 && \"a\""), Value::Bool(true));
        assert_eq!(eval("0 || \"\""), Value::Bool(false));
        assert_eq!(eval("!0"), Value::Bool(true));
        assert_eq!(eval("!!\"x\""), Value::Bool(true));
        assert_eq!(eval("true == !false"), Value::Bool(true));
        assert_eq!(eval("1 != 2"), Value::Bool(true));
    }

    #[test]
    fn test_edge_double_negative_folds_in_tree() {
        let (atoms, _) = parse_str("- -1").unwrap();
        assert_eq!(atoms[0].to_string(), "Integer(1)");
    }

    #[test]
    fn test_edge_double_complement_folds_for_regex() {
        let (atoms, _) = parse_str("~~/a/").unwrap();
        assert_eq!(atoms[0].to_string(), "Regex(/a/)");
    }

    // ==================== CONSTANT FOLDING ====================

    #[test]
    fn test_edge_precompile_equals_eval() {
        let (atoms, _) = parse_str("1 + 2 * 3 - 4").unwrap();
        let atom = atoms.into_iter().next().unwrap();
        assert!(atom.is_constant());
        let value = atom.eval(&Vars::default()).unwrap();
        let folded = atom.precompile().unwrap();
        assert_eq!(folded.to_string(), "Integer(3)");
        assert_eq!(value, Value::Integer(3));
    }

    #[test]
    fn test_edge_variables_are_not_constant() {
        let mut types = VarTypes::default();
        types.insert("a".to_string(), scpl_ast::Kind::Integer);
        let (atoms, _) = parse(tokenise("a + 1").unwrap(), &types).unwrap();
        assert!(!atoms[0].is_constant());
        let folded = atoms.into_iter().next().unwrap().precompile().unwrap();
        assert_eq!(folded.to_string(), "Add(GetInteger(a), Integer(1))");
    }

    // ==================== WHITESPACE ====================

    #[test]
    fn test_edge_spaces_are_transparent() {
        let tight = parse_str("1+2*3").unwrap().0[0].to_string();
        let spaced = parse_str("  1  +  2  *  3  ").unwrap().0[0].to_string();
        assert_eq!(tight, spaced);
    }

    #[test]
    fn test_edge_empty_input() {
        let (atoms, deps) = parse_str("").unwrap();
        assert!(atoms.is_empty());
        assert!(deps.is_empty());
    }
}
