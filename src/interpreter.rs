/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, maintaining the chain of
/// lexical environments and producing runtime values. Runtime failures are
/// in-band: they come back as error values that short-circuit whatever
/// surrounds them, never as host-level panics or `Err`s.
///
/// # Responsibilities
/// - Evaluates statements and expressions against an environment.
/// - Implements truthiness, operator semantics, and closure capture.
/// - Propagates `Return` and `Error` sentinels to the right boundary.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces tokens one at a time:
/// identifiers, integer and string literals, operators, delimiters, and
/// keywords. It has no failure mode of its own; unrecognized input becomes
/// `Illegal` tokens for the parser to report.
///
/// # Responsibilities
/// - Converts the input into a lazy stream of tokens.
/// - Resolves keywords and strips quotes from string literals.
/// - Emits `EOF` forever once the input is exhausted.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: each token kind may start an expression (its prefix
/// role) and may continue one (its infix role, at some precedence).
/// Statements wrap the expressions; errors are collected, not thrown.
///
/// # Responsibilities
/// - Converts tokens into `Program`, `Statement`, and `Expr` nodes.
/// - Applies operator precedence and associativity.
/// - Records human-readable errors and keeps parsing best-effort.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum with all variants the evaluator can produce,
/// the type names used in error messages, and the environment type that
/// realizes lexical scope.
///
/// # Responsibilities
/// - Defines `Value`, `Type`, and the function-value payload.
/// - Implements inspection renderings and the language's equality.
/// - Provides the parent-linked environment chain.
pub mod value;
