/// Runtime values.
///
/// Declares the `Value` enum the evaluator produces, the `Type` names used
/// in error messages, and the function-value payload that carries a captured
/// environment.
pub mod core;
/// Lexical environments.
///
/// A chain of name-to-value frames. Lookup walks outward through parents;
/// `let` always writes the innermost frame. Function values keep their
/// defining frame alive by holding a counted reference to it.
pub mod env;
