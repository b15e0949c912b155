use crate::ast::InfixOp;
use crate::interpreter::value::core::Value;

/// Applies a binary operator to two evaluated operands.
///
/// Operands of different types are a type mismatch before any operator
/// dispatch happens. Integers support the full operator set, strings support
/// only `+`, and every other same-type pair supports only `==`/`!=`, which
/// compare by the identity semantics of [`Value`]'s equality.
pub(in crate::interpreter::evaluator) fn eval_infix(left: &Value, op: InfixOp, right: &Value) -> Value {
    if left.ty() != right.ty() {
        return Value::Error(format!("type mismatch: {} {} {}", left.ty(), op, right.ty()));
    }

    match (left, right) {
        (Value::Int(l), Value::Int(r)) => eval_int_infix(*l, op, *r),
        (Value::Str(l), Value::Str(r)) => {
            if op == InfixOp::Plus {
                Value::Str(format!("{l}{r}").into())
            } else {
                unknown_operator(left, op, right)
            }
        }
        _ => match op {
            InfixOp::EQ => Value::Bool(left == right),
            InfixOp::NotEQ => Value::Bool(left != right),
            _ => unknown_operator(left, op, right),
        },
    }
}

/// Integer arithmetic wraps at the i64 boundary; comparisons produce
/// booleans. Division by zero is reported as an in-band error rather than
/// tearing down the host.
fn eval_int_infix(l: i64, op: InfixOp, r: i64) -> Value {
    match op {
        InfixOp::Plus => Value::Int(l.wrapping_add(r)),
        InfixOp::Minus => Value::Int(l.wrapping_sub(r)),
        InfixOp::Star => Value::Int(l.wrapping_mul(r)),
        InfixOp::Slash => {
            if r == 0 {
                Value::error("division by zero")
            } else {
                Value::Int(l.wrapping_div(r))
            }
        }
        InfixOp::LT => Value::Bool(l < r),
        InfixOp::GT => Value::Bool(l > r),
        InfixOp::EQ => Value::Bool(l == r),
        InfixOp::NotEQ => Value::Bool(l != r),
    }
}

fn unknown_operator(left: &Value, op: InfixOp, right: &Value) -> Value {
    Value::Error(format!("unknown operator: {} {} {}", left.ty(), op, right.ty()))
}
