use std::rc::Rc;

use crate::ast::{Block, Expr, Program, Statement};
use crate::interpreter::evaluator::{binary, builtin, call, index, unary};
use crate::interpreter::value::core::{FnValue, Value};
use crate::interpreter::value::env::Env;

/// Evaluates a program in `env` and returns its final value.
///
/// Statements run in order. A `return` ends the program with its unwrapped
/// value and an error ends it immediately; otherwise the result is whatever
/// the last statement produced. `None` means the program produced nothing
/// visible (for example, a trailing `let`), which is distinct from the
/// language's `null`.
pub fn eval_program(program: &Program, env: &Rc<Env>) -> Option<Value> {
    let mut result = None;
    for statement in &program.statements {
        let value = eval_statement(statement, env);
        match value {
            Some(Value::Return(inner)) => return Some(*inner),
            Some(Value::Error(message)) => return Some(Value::Error(message)),
            other => result = other,
        }
    }
    result
}

/// Evaluates a single statement.
///
/// `let` binds its value and yields nothing; `return` wraps its value in the
/// [`Value::Return`] sentinel so enclosing blocks pass it outward untouched.
pub(in crate::interpreter::evaluator) fn eval_statement(
    statement: &Statement,
    env: &Rc<Env>,
) -> Option<Value> {
    match statement {
        Statement::Expr(expr) => eval_expression(expr, env),
        Statement::Return(expr) => {
            let value = eval_operand(expr, env);
            if value.is_error() {
                return Some(value);
            }
            Some(Value::Return(Box::new(value)))
        }
        Statement::Let { name, value } => {
            let value = eval_operand(value, env);
            if value.is_error() {
                return Some(value);
            }
            env.set(name, value);
            None
        }
    }
}

/// Evaluates a block, passing `Return` and `Error` sentinels outward still
/// wrapped. Unwrapping happens only at a function-call boundary or at the
/// program root.
pub(in crate::interpreter::evaluator) fn eval_block(block: &Block, env: &Rc<Env>) -> Option<Value> {
    let mut result = None;
    for statement in &block.statements {
        result = eval_statement(statement, env);
        if let Some(value) = &result {
            if matches!(value, Value::Return(_) | Value::Error(_)) {
                return result;
            }
        }
    }
    result
}

/// Evaluates one expression.
///
/// Returns `None` only for expressions that genuinely produce nothing: a
/// call or `if` whose chosen block ends in a `let` (or is empty). Operand
/// positions treat that absence as `null` via [`eval_operand`].
pub(in crate::interpreter::evaluator) fn eval_expression(
    expr: &Expr,
    env: &Rc<Env>,
) -> Option<Value> {
    match expr {
        Expr::Integer(value) => Some(Value::Int(*value)),
        Expr::Bool(value) => Some(Value::Bool(*value)),
        Expr::Str(value) => Some(Value::Str(value.as_str().into())),
        Expr::Ident(name) => Some(eval_ident(name, env)),
        Expr::Prefix { op, right } => {
            let right = eval_operand(right, env);
            if right.is_error() {
                return Some(right);
            }
            Some(unary::eval_prefix(*op, right))
        }
        Expr::Infix { left, op, right } => {
            let left = eval_operand(left, env);
            if left.is_error() {
                return Some(left);
            }
            let right = eval_operand(right, env);
            if right.is_error() {
                return Some(right);
            }
            Some(binary::eval_infix(&left, *op, &right))
        }
        Expr::If { condition, consequence, alternative } => {
            let condition = eval_operand(condition, env);
            if condition.is_error() {
                return Some(condition);
            }
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Some(Value::Null)
            }
        }
        Expr::Function { params, body } => Some(Value::Fn(Rc::new(FnValue {
            params: params.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        }))),
        Expr::Call { callee, args } => call::eval_call(callee, args, env),
        Expr::Slice(exprs) => {
            let mut values = eval_expressions(exprs, env);
            if values.len() == 1 && values[0].is_error() {
                return values.pop();
            }
            Some(Value::from(values))
        }
        Expr::Index { left, index } => {
            let left = eval_operand(left, env);
            if left.is_error() {
                return Some(left);
            }
            let index = eval_operand(index, env);
            if index.is_error() {
                return Some(index);
            }
            Some(index::eval_index(&left, &index))
        }
    }
}

/// Evaluates an expression in a position that needs a value: an expression
/// that produced nothing becomes `null`.
pub(in crate::interpreter::evaluator) fn eval_operand(expr: &Expr, env: &Rc<Env>) -> Value {
    eval_expression(expr, env).unwrap_or(Value::Null)
}

/// Evaluates a list of expressions left to right.
///
/// On the first error the result is a one-element list holding only that
/// error; callers recognize the pattern and propagate it.
pub(in crate::interpreter::evaluator) fn eval_expressions(
    exprs: &[Expr],
    env: &Rc<Env>,
) -> Vec<Value> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_operand(expr, env);
        if value.is_error() {
            return vec![value];
        }
        values.push(value);
    }
    values
}

fn eval_ident(name: &str, env: &Rc<Env>) -> Value {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(value) = builtin::lookup(name) {
        return value;
    }
    Value::Error(format!("identifier not found: {name}"))
}
