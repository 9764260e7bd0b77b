//! The `parse` subcommand.

use scpl_ast::Atom;
use scpl_par::VarTypes;
use tracing::debug;

use crate::commands::lex;
use crate::report;

pub fn run(expr: &str, vars_json: Option<&str>) -> u8 {
    let Some(tokens) = lex::lex(expr) else {
        return 1;
    };
    let (types, _) = match crate::vars::decode(vars_json) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("variable error: {err:#}");
            return 2;
        }
    };
    match parse(expr, tokens, &types) {
        Some(_) => 0,
        None => 2,
    }
}

/// Parses, prints the AST and dependencies, and returns the precompiled
/// atoms.
pub(crate) fn parse(
    expr: &str,
    tokens: Vec<scpl_lex::Token>,
    types: &VarTypes,
) -> Option<Vec<Atom>> {
    let (atoms, deps) = match scpl_par::parse(tokens, types) {
        Ok(parsed) => parsed,
        Err(err) => {
            report::caret(expr, err.index(), &format!("parse error: {err}"));
            return None;
        }
    };
    debug!(atoms = atoms.len(), deps = deps.len(), "parsed");

    let rendered: Vec<String> = atoms.iter().map(ToString::to_string).collect();
    println!("ast     : {}", rendered.join(", "));
    let constant = atoms.iter().all(Atom::is_constant);
    println!("constant: {constant}");

    let mut names: Vec<&String> = deps.iter().collect();
    names.sort();
    let names: Vec<String> = names.into_iter().cloned().collect();
    println!("deps    : [{}]", names.join(", "));

    let mut folded = Vec::with_capacity(atoms.len());
    for atom in atoms {
        match atom.precompile() {
            Ok(atom) => folded.push(atom),
            Err(err) => {
                report::caret(expr, 0, &format!("precompile error: {err}"));
                return None;
            }
        }
    }
    let rendered: Vec<String> = folded.iter().map(ToString::to_string).collect();
    println!("precomp : {}", rendered.join(", "));

    Some(folded)
}
