use crate::{
    ast::{Expression, PrefixOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::fail,
        value::{FALSE, TRUE, Value},
    },
};

impl Expression {
    /// Applies a prefix operator to an evaluated operand.
    ///
    /// Supported operators:
    /// - `Not`: `true` and `false` swap, `null` becomes `true`, and every
    ///   other value becomes `false`. Integers are not coerced, so `!0` is
    ///   `false`.
    /// - `Negate`: integer negation. Any other operand is an unknown operator.
    ///
    /// ## Example
    /// ```
    /// use monkey::{
    ///     ast::{Expression, PrefixOperator},
    ///     interpreter::value::{FALSE, TRUE, Value},
    /// };
    ///
    /// assert_eq!(Expression::eval_prefix(PrefixOperator::Negate, &Value::Integer(5)),
    ///            Value::Integer(-5));
    /// assert_eq!(Expression::eval_prefix(PrefixOperator::Not, &TRUE), FALSE);
    /// assert_eq!(Expression::eval_prefix(PrefixOperator::Not, &Value::Integer(0)), FALSE);
    /// ```
    #[must_use]
    pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> Value {
        match operator {
            PrefixOperator::Not => match right {
                Value::Boolean(value) => Value::from(!*value),
                Value::Null => TRUE,
                _ => FALSE,
            },
            PrefixOperator::Negate => match right {
                Value::Integer(value) => match value.checked_neg() {
                    Some(negated) => Value::Integer(negated),
                    None => fail(RuntimeError::Overflow { expression: format!("-({value})") }),
                },
                other => fail(RuntimeError::UnknownPrefixOperator { operator,
                                                                    operand: other.value_type() }),
            },
        }
    }
}
