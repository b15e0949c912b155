/// The recursive tree walk over statements and expressions.
///
/// Dispatches every AST node to the operation that evaluates it, tracks the
/// current environment, and implements the in-band propagation rules for
/// `Return` and `Error` sentinels.
pub mod core;

/// Binary (infix) operations: arithmetic, comparison, concatenation.
mod binary;
/// The process-wide builtin function table.
mod builtin;
/// Function application for user functions and builtins.
mod call;
/// Slice indexing.
mod index;
/// Prefix operations: `!` and unary `-`.
mod unary;

pub use self::core::eval_program;
