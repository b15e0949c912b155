/// The Pratt expression parser and statement grammar.
///
/// Declares the [`Parser`] itself, its precedence ladder, and the
/// lowest-level expression loop. Statement parsing and the individual
/// prefix/infix handlers live in the sibling modules.
pub mod core;
/// Prefix and infix expression handlers, parameter lists, and
/// comma-separated expression lists.
mod expr;
/// Statement parsing: `let`, `return`, expression statements, and blocks.
mod statement;

pub use self::core::Parser;
