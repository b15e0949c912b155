use crate::ast::PrefixOp;
use crate::interpreter::value::core::Value;

/// Applies a prefix operator to an evaluated operand.
///
/// `!` negates the operand's truthiness and never fails. Unary `-` is only
/// defined for integers and wraps at the i64 boundary; anything else is an
/// unknown-operator error.
pub(in crate::interpreter::evaluator) fn eval_prefix(op: PrefixOp, right: Value) -> Value {
    match op {
        PrefixOp::Bang => Value::Bool(!right.is_truthy()),
        PrefixOp::Minus => match right {
            Value::Int(value) => Value::Int(value.wrapping_neg()),
            other => Value::Error(format!("unknown operator: -{}", other.ty())),
        },
    }
}
