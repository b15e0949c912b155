use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::interpreter::value::core::{BuiltinFn, Value};

lazy_static! {
    /// The builtin function table, consulted when an identifier is not
    /// bound anywhere in the environment chain. Initialized once and never
    /// mutated afterwards.
    static ref BUILTINS: HashMap<&'static str, BuiltinFn> = {
        let mut table = HashMap::new();
        table.insert("len", len as BuiltinFn);
        table
    };
}

/// Resolves `name` against the builtin table.
pub(in crate::interpreter::evaluator) fn lookup(name: &str) -> Option<Value> {
    BUILTINS.get(name).copied().map(Value::Builtin)
}

/// `len(x)`: the byte length of a string or the element count of a slice.
fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return Value::error("len only accepts one argument.");
    }
    match &args[0] {
        Value::Str(value) => Value::Int(i64::try_from(value.len()).unwrap_or(i64::MAX)),
        Value::Slice(values) => Value::Int(i64::try_from(values.len()).unwrap_or(i64::MAX)),
        other => Value::Error(format!("argument to `len` not supported, got {}", other.ty())),
    }
}
