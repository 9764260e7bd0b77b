//! The `eval` subcommand.

use std::time::Instant;

use tracing::debug;

use crate::commands::{lex, parse};

pub fn run(expr: &str, vars_json: Option<&str>) -> u8 {
    let Some(tokens) = lex::lex(expr) else {
        return 1;
    };
    let (types, bag) = match crate::vars::decode(vars_json) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("variable error: {err:#}");
            return 1;
        }
    };
    let Some(atoms) = parse::parse(expr, tokens, &types) else {
        return 2;
    };
    let mut atoms = atoms.into_iter();
    let (Some(atom), None) = (atoms.next(), atoms.next()) else {
        println!("nothing to do");
        return 1;
    };

    let rendered: Vec<String> = bag
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    println!("vars    : {{{}}}", rendered.join(", "));

    let start = Instant::now();
    match atom.eval(&bag) {
        Ok(value) => {
            let elapsed = start.elapsed();
            debug!(?elapsed, "evaluated");
            println!("eval    : {value}");
            println!("duration: {:.2}\u{b5}s", elapsed.as_secs_f64() * 1e6);
            0
        }
        Err(err) => {
            println!("eval error: {err}");
            1
        }
    }
}
