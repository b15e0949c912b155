//! # mmm
//!
//! mmm is a small, dynamically-typed scripting language: integers, booleans,
//! strings, slices, conditionals, and first-class functions with lexical
//! closures. This crate contains the whole interpreter — lexer, Pratt
//! parser, AST, and a tree-walking evaluator — plus the `mmm` binary that
//! runs scripts and an interactive session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use std::rc::Rc;

use crate::error::ParseError;
use crate::interpreter::evaluator::eval_program;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::Parser;
use crate::interpreter::value::core::Value;
use crate::interpreter::value::env::Env;

/// Defines the structure of parsed code.
///
/// Declares the `Program`, `Statement`, and `Expr` types the parser builds
/// and the evaluator walks, together with their canonical string
/// renderings.
///
/// # Responsibilities
/// - Defines statement and expression nodes for all language constructs.
/// - Renders every node back to a canonical source-like form.
pub mod ast;
/// Provides the error types for parsing.
///
/// Parse errors are collected by the parser and surfaced as a list;
/// evaluation has no error type here because runtime failures travel as
/// in-band error values.
///
/// # Responsibilities
/// - Defines the parse error enum and its messages.
/// - Integrates with the standard error traits for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together lexing, parsing, evaluation, and the value model, and
/// exposes each stage for callers that want only part of the pipeline.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and value types.
/// - Provides the entry points used by the binary and by tests.
pub mod interpreter;

/// Parses and evaluates `source` inside `env`, returning the program's
/// final value.
///
/// When the parser records any errors the program is not evaluated and the
/// errors are returned instead. An `Ok(None)` means the program ran but its
/// last statement produced nothing visible (a `let`, for example). Runtime
/// failures are part of the value domain: they arrive as `Ok(Some(value))`
/// where the value is an error.
///
/// # Examples
/// ```
/// use mmm::interpret;
/// use mmm::interpreter::value::env::Env;
///
/// let env = Env::new();
/// let value = interpret("let x = 2; x + 2;", &env).unwrap();
/// assert_eq!(value.unwrap().inspect(), "4");
///
/// // The environment persists between calls, like a REPL session.
/// let value = interpret("x * 10", &env).unwrap();
/// assert_eq!(value.unwrap().inspect(), "20");
/// ```
pub fn interpret(source: &str, env: &Rc<Env>) -> Result<Option<Value>, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse();
    if parser.errors().is_empty() {
        Ok(eval_program(&program, env))
    } else {
        Err(parser.into_errors())
    }
}
