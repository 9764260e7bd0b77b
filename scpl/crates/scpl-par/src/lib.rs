//! scpl-par - The SCPL Parser
//!
//! A single left-to-right pass over the token stream with two stacks:
//! typed operands (each carrying its originating token) and pending
//! operators. Operators reduce through the scpl-sem resolver as the
//! shunting-yard pop rule fires, so every reduction immediately yields a
//! type-specialized node; there is no untyped intermediate tree.
//!
//! Scopes ride the operator stack as sentinels that nothing outranks.
//! The first operand pushed directly under a scope plants a synthetic
//! comma, and every explicit comma adds another, which makes the
//! collected contents countable when the closer pops: `(` regroups them,
//! `{` hands them to the set builder, `[` is reserved.
//!
//! Output is `(atoms, deps)`: the unreduced top-level operands (usually
//! exactly one) and every variable name the expression references.

mod edge_cases;
mod error;

pub use error::ParseError;

use indexmap::IndexMap;

use scpl_ast::{literal, Atom, Kind};
use scpl_lex::{Token, TokenKind};
use scpl_util::op::{self, Associativity, OpName};
use scpl_util::FxHashSet;

use error::{syntax, type_error};

/// The variable environment: name to kind, in declaration order.
pub type VarTypes = IndexMap<String, Kind>;

/// The set of variable names an expression references.
pub type Deps = FxHashSet<String>;

enum StackOp {
    Binary { op: OpName, token: Token },
    Unary { op: OpName, token: Token },
    Scope { opener: char, token: Token },
    Comma { token: Token },
}

impl StackOp {
    /// Whether this stack entry outranks an incoming operator of
    /// `weight`. Sentinels never pop through the rule.
    fn pops_before(&self, weight: u8) -> bool {
        let op = match self {
            StackOp::Binary { op, .. } | StackOp::Unary { op, .. } => *op,
            StackOp::Scope { .. } | StackOp::Comma { .. } => return false,
        };
        let info = op.info();
        match info.associativity {
            Associativity::Left => info.weight >= weight,
            Associativity::Right => info.weight > weight,
            Associativity::None => false,
        }
    }
}

/// Parses a token stream against a variable environment.
pub fn parse(tokens: Vec<Token>, types: &VarTypes) -> Result<(Vec<Atom>, Deps), ParseError> {
    Parser::new(types).run(tokens)
}

struct Parser<'t> {
    types: &'t VarTypes,
    operands: Vec<(Atom, Token)>,
    operators: Vec<StackOp>,
    deps: Deps,
    last_is_operator: bool,
}

impl<'t> Parser<'t> {
    fn new(types: &'t VarTypes) -> Self {
        Self {
            types,
            operands: Vec::new(),
            operators: Vec::new(),
            deps: Deps::default(),
            last_is_operator: false,
        }
    }

    fn run(mut self, tokens: Vec<Token>) -> Result<(Vec<Atom>, Deps), ParseError> {
        for token in tokens {
            match token.kind {
                TokenKind::Space => continue,
                TokenKind::Scope => self.scope(token)?,
                TokenKind::Operator => self.operator(token)?,
                _ => self.operand(token)?,
            }
        }

        while let Some(head) = self.operators.last() {
            match head {
                StackOp::Scope { token, .. } => {
                    return Err(syntax(token.clone(), "unclosed scope"));
                }
                StackOp::Comma { token } => {
                    return Err(syntax(token.clone(), "comma in root scope"));
                }
                _ => self.pop_op()?,
            }
        }

        let atoms = self.operands.into_iter().map(|(atom, _)| atom).collect();
        Ok((atoms, self.deps))
    }

    /// Reduces the top operator against the operand stack.
    fn pop_op(&mut self) -> Result<(), ParseError> {
        match self.operators.pop() {
            Some(StackOp::Unary { op, token }) => {
                let (atom, _) = self
                    .operands
                    .pop()
                    .ok_or_else(|| syntax(token.clone(), "missing unary operand"))?;
                let resolved = scpl_sem::unary(op, atom)
                    .ok_or_else(|| type_error(token.clone(), "invalid operands for operator"))?;
                self.operands.push((resolved, token));
                Ok(())
            }
            Some(StackOp::Binary { op, token }) => {
                let right = self.operands.pop();
                let left = self.operands.pop();
                let (Some((left, _)), Some((right, _))) = (left, right) else {
                    return Err(syntax(token, "missing binary operand"));
                };
                let resolved = scpl_sem::binary(op, left, right)
                    .ok_or_else(|| type_error(token.clone(), "invalid operands for operator"))?;
                self.operands.push((resolved, token));
                Ok(())
            }
            // scope and comma sentinels are handled by scope closers and
            // the end-of-input sweep before this is ever reached
            _ => unreachable!("sentinel on reduction path"),
        }
    }

    fn operator(&mut self, token: Token) -> Result<(), ParseError> {
        let entry = if self.last_is_operator || self.operands.is_empty() {
            let op = op::unary_operator(&token.text)
                .ok_or_else(|| syntax(token.clone(), "invalid unary operator"))?;
            StackOp::Unary { op, token }
        } else {
            let op = op::binary_operator(&token.text)
                .ok_or_else(|| syntax(token.clone(), "invalid binary operator"))?;
            if op == OpName::Comma {
                StackOp::Comma { token }
            } else {
                StackOp::Binary { op, token }
            }
        };

        let weight = match &entry {
            StackOp::Binary { op, .. } | StackOp::Unary { op, .. } => op.info().weight,
            StackOp::Comma { .. } => OpName::Comma.info().weight,
            StackOp::Scope { .. } => unreachable!("scope is not an operator token"),
        };

        while self
            .operators
            .last()
            .is_some_and(|head| head.pops_before(weight))
        {
            self.pop_op()?;
        }

        self.operators.push(entry);
        self.last_is_operator = true;
        Ok(())
    }

    fn scope(&mut self, token: Token) -> Result<(), ParseError> {
        let c = token.text.chars().next().unwrap_or_default();
        match c {
            '(' | '[' | '{' => {
                self.operators.push(StackOp::Scope { opener: c, token });
                Ok(())
            }
            _ => self.close_scope(c, token),
        }
    }

    fn close_scope(&mut self, closer: char, token: Token) -> Result<(), ParseError> {
        let mut scope_atoms: Vec<(Atom, Token)> = Vec::new();

        let (opener, opener_token) = loop {
            match self.operators.last() {
                None => return Err(syntax(token, "unexpected scope terminator")),
                Some(StackOp::Scope { .. }) => {
                    let Some(StackOp::Scope { opener, token }) = self.operators.pop() else {
                        unreachable!("scope vanished from stack top");
                    };
                    break (opener, token);
                }
                Some(StackOp::Comma { .. }) => {
                    let Some(StackOp::Comma { token: comma }) = self.operators.pop() else {
                        unreachable!("comma vanished from stack top");
                    };
                    let entry = self
                        .operands
                        .pop()
                        .ok_or_else(|| syntax(comma, "missing operand"))?;
                    scope_atoms.insert(0, entry);
                }
                _ => self.pop_op()?,
            }
        };

        if matching_closer(opener) != closer {
            return Err(syntax(opener_token, "mismatched scope terminator"));
        }

        match opener {
            '(' => {
                for (atom, token) in scope_atoms {
                    self.push_operand(atom, token);
                }
            }
            '{' => {
                let tokens: Vec<Token> =
                    scope_atoms.iter().map(|(_, token)| token.clone()).collect();
                let atoms: Vec<Atom> = scope_atoms.into_iter().map(|(atom, _)| atom).collect();
                match scpl_sem::set(atoms) {
                    Ok(set) => self.push_operand(Atom::Set(set), opener_token),
                    Err(err) => {
                        let at = tokens
                            .into_iter()
                            .nth(err.index)
                            .unwrap_or(opener_token);
                        let message = match err.expected {
                            Some(expected) => format!("{} in {} set", err.found, expected),
                            None => format!("{} is not hashable", err.found),
                        };
                        return Err(type_error(at, message));
                    }
                }
            }
            // recognized by the lexer, consumed by nothing in the
            // operator table
            _ => return Err(syntax(opener_token, "reserved scope")),
        }

        self.last_is_operator = false;
        Ok(())
    }

    fn operand(&mut self, token: Token) -> Result<(), ParseError> {
        if !(self.last_is_operator || self.operands.is_empty()) {
            return Err(syntax(token, "missing operator"));
        }

        let atom = self.build_operand(&token)?;
        self.push_operand(atom, token);
        self.last_is_operator = false;
        Ok(())
    }

    /// Pushes an operand, planting the synthetic comma that makes scope
    /// contents countable when it lands directly under a scope sentinel.
    fn push_operand(&mut self, atom: Atom, token: Token) {
        if matches!(self.operators.last(), Some(StackOp::Scope { .. })) {
            self.operators.push(StackOp::Comma {
                token: token.clone(),
            });
        }
        self.operands.push((atom, token));
    }

    fn build_operand(&mut self, token: &Token) -> Result<Atom, ParseError> {
        let value = |result: Result<Atom, scpl_ast::ValueError>| {
            result.map_err(|error| ParseError::Value {
                token: token.clone(),
                error,
            })
        };

        match token.kind {
            TokenKind::Word => {
                if let Some(atom) = literal::keyword(&token.text) {
                    return Ok(atom);
                }
                let Some(&kind) = self.types.get(&token.text) else {
                    return Err(syntax(
                        token.clone(),
                        format!("unknown variable {}", token.text),
                    ));
                };
                self.deps.insert(token.text.clone());
                Ok(scpl_sem::variable(&token.text, kind))
            }
            TokenKind::Number => {
                if token.text.contains('.') {
                    value(literal::float(&token.text))
                } else {
                    value(literal::integer(&token.text))
                }
            }
            TokenKind::Hex => value(literal::hex(&token.text)),
            TokenKind::Duration => value(literal::duration(&token.text)),
            TokenKind::String => Ok(literal::string(&token.text)),
            TokenKind::Regex => Ok(literal::regex(&token.text)),
            TokenKind::Ipv4 => {
                if token.text.contains('/') {
                    value(literal::cidrv4(&token.text))
                } else {
                    value(literal::ipv4(&token.text))
                }
            }
            TokenKind::Ipv6 => {
                if token.text.contains('/') {
                    value(literal::cidrv6(&token.text))
                } else {
                    value(literal::ipv6(&token.text))
                }
            }
            _ => Err(syntax(token.clone(), "unknown token")),
        }
    }
}

fn matching_closer(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}
