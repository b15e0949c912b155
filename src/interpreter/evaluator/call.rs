use std::rc::Rc;

use crate::ast::Expr;
use crate::interpreter::evaluator::core::{eval_block, eval_expressions, eval_operand};
use crate::interpreter::value::core::Value;
use crate::interpreter::value::env::Env;

/// Evaluates a call expression.
///
/// The callee evaluates first, then the arguments left to right with the
/// single-error short-circuit convention of
/// [`eval_expressions`](crate::interpreter::evaluator::core::eval_expressions).
pub(in crate::interpreter::evaluator) fn eval_call(
    callee: &Expr,
    args: &[Expr],
    env: &Rc<Env>,
) -> Option<Value> {
    let function = eval_operand(callee, env);
    if function.is_error() {
        return Some(function);
    }

    let mut args = eval_expressions(args, env);
    if args.len() == 1 && args[0].is_error() {
        return args.pop();
    }

    apply(&function, args)
}

/// Applies a function value to already-evaluated arguments.
///
/// User functions run their body in a fresh child of the environment they
/// captured at definition, with parameters bound positionally; a `Return`
/// coming out of the body is unwrapped exactly once here. Builtins are
/// plain function pointers and receive the argument slice directly.
fn apply(function: &Value, args: Vec<Value>) -> Option<Value> {
    match function {
        Value::Fn(function) => {
            if function.params.len() != args.len() {
                return Some(Value::Error(format!(
                    "wrong number of arguments: want={}, got={}",
                    function.params.len(),
                    args.len(),
                )));
            }

            let env = Env::with_parent(&function.env);
            for (param, arg) in function.params.iter().zip(args) {
                env.set(param, arg);
            }

            match eval_block(&function.body, &env) {
                Some(Value::Return(value)) => Some(*value),
                other => other,
            }
        }
        Value::Builtin(function) => Some(function(&args)),
        other => Some(Value::Error(format!("not a function: {}", other.ty()))),
    }
}
