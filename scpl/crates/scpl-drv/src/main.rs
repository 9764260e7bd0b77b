//! scpl - Filter Expression Compiler CLI
//!
//! A thin harness around the pipeline crates: `lex` prints the token
//! stream, `parse` prints the typed AST and its dependencies, `eval`
//! evaluates against a JSON variable bag and reports the duration.
//!
//! Exit codes: 0 success, 1 lex/eval error, 2 parse error.

mod commands;
mod report;
mod vars;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// scpl - compile and evaluate filter expressions
#[derive(Parser, Debug)]
#[command(name = "scpl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compile and evaluate SCPL filter expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (same as SCPL_LOG=debug)
    #[arg(short, long, global = true, env = "SCPL_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenise an expression and print the token stream
    Lex {
        /// The expression to tokenise
        expr: String,
    },
    /// Parse an expression and print its AST and dependencies
    Parse {
        /// The expression to parse
        expr: String,
        /// JSON object mapping variable names to SCPL literals
        vars: Option<String>,
    },
    /// Evaluate an expression against a variable bag
    Eval {
        /// The expression to evaluate
        expr: String,
        /// JSON object mapping variable names to SCPL literals
        vars: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SCPL_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.command {
        Commands::Lex { expr } => commands::lex::run(&expr),
        Commands::Parse { expr, vars } => commands::parse::run(&expr, vars.as_deref()),
        Commands::Eval { expr, vars } => commands::eval::run(&expr, vars.as_deref()),
    };
    ExitCode::from(code)
}
