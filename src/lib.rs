//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming language, a
//! small C-like scripting language with integers, booleans, `let` bindings,
//! `if`/`else` expressions and `return`.
//! Source text is lexed, parsed into a syntax tree by a Pratt parser, and the
//! tree is evaluated directly against a lexically scoped environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Program,
    error::ParseErrors,
    interpreter::{
        environment::Environment,
        evaluator::core::Eval,
        parser::core::Parser,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression node types that the
/// parser produces and the evaluator walks. Every node keeps the token it was
/// parsed from and renders back to a canonical, fully parenthesized source
/// form.
///
/// # Responsibilities
/// - Defines the closed set of statement and expression variants.
/// - Defines the prefix and infix operators.
/// - Renders nodes for diagnostics and tests.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors are collected by the parser and reported together. Runtime
/// errors are carried inside error values by the evaluator.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, evaluator, runtime values and
/// environments.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;

/// Parses `source` into a program.
///
/// # Errors
/// Returns every diagnostic the parser recorded if there was at least one.
///
/// # Examples
/// ```
/// use monkey::parse;
///
/// let program = parse("-a * b;").unwrap();
/// assert_eq!(program.to_string(), "((-a) * b)");
///
/// assert!(parse("let = 5;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(ParseErrors(errors))
    }
}

/// Parses and evaluates `source` against `env`.
///
/// The program is evaluated only if it parsed cleanly. Bindings made by `let`
/// stay in `env`, so one environment can be reused across calls. Runtime
/// failures are not `Err`s: they come back as [`Value::Error`].
///
/// Returns `Ok(None)` when the program produces no value, for example when it
/// is empty or ends with a `let`.
///
/// # Errors
/// Returns the parser's diagnostics if the source does not parse.
///
/// # Examples
/// ```
/// use monkey::{evaluate, interpreter::{environment::Environment, value::Value}};
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate("let x = 5;", &mut env).unwrap(), None);
/// assert_eq!(evaluate("x * 2", &mut env).unwrap(), Some(Value::Integer(10)));
///
/// let result = evaluate("5 + true;", &mut env).unwrap().unwrap();
/// assert_eq!(result.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn evaluate(source: &str, env: &mut Environment<'_>) -> Result<Option<Value>, ParseErrors> {
    let program = parse(source)?;
    let result = program.eval(env);

    debug!(result = ?result, "evaluated program");

    Ok(result)
}
