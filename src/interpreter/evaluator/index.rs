use crate::interpreter::value::core::Value;

/// Evaluates `left[index]`.
///
/// Only slices are indexable. A non-integer, negative, or out-of-range index
/// quietly produces `null`; indexing anything that is not a slice is an
/// error.
pub(in crate::interpreter::evaluator) fn eval_index(left: &Value, index: &Value) -> Value {
    match left {
        Value::Slice(values) => {
            let Value::Int(i) = index else {
                return Value::Null;
            };
            match usize::try_from(*i) {
                Ok(i) if i < values.len() => values[i].clone(),
                _ => Value::Null,
            }
        }
        other => Value::Error(format!("index operator not supported for {}", other.ty())),
    }
}

#[cfg(test)]
mod tests {
    use super::eval_index;
    use crate::interpreter::value::core::Value;

    fn slice() -> Value {
        Value::from(vec![Value::Int(10), Value::Int(20)])
    }

    #[test]
    fn in_range_indexes() {
        assert_eq!(eval_index(&slice(), &Value::Int(0)), Value::Int(10));
        assert_eq!(eval_index(&slice(), &Value::Int(1)), Value::Int(20));
    }

    #[test]
    fn out_of_range_and_non_integer_indexes_are_null() {
        assert_eq!(eval_index(&slice(), &Value::Int(2)), Value::Null);
        assert_eq!(eval_index(&slice(), &Value::Int(-1)), Value::Null);
        assert_eq!(eval_index(&slice(), &Value::Bool(true)), Value::Null);
    }

    #[test]
    fn only_slices_are_indexable() {
        assert_eq!(
            eval_index(&Value::Int(1), &Value::Int(0)),
            Value::error("index operator not supported for Int"),
        );
    }
}
