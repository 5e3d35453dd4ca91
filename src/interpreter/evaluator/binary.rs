use crate::{
    ast::{Expression, InfixOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::fail, value::Value},
};

impl Expression {
    /// Applies an infix operator to two evaluated operands.
    ///
    /// The cases are tried in order:
    /// 1. two integers: arithmetic or comparison by value;
    /// 2. `==` / `!=`: identity of the shared `true`, `false` and `null`
    ///    instances, so `true == true` holds and `1 == true` does not;
    /// 3. operands of different types: a type mismatch;
    /// 4. anything else: an unknown operator.
    ///
    /// ## Example
    /// ```
    /// use monkey::{
    ///     ast::{Expression, InfixOperator},
    ///     interpreter::value::{FALSE, TRUE, Value},
    /// };
    ///
    /// let sum = Expression::eval_infix(InfixOperator::Add, &Value::Integer(2), &Value::Integer(3));
    /// assert_eq!(sum, Value::Integer(5));
    ///
    /// assert_eq!(Expression::eval_infix(InfixOperator::Equal, &TRUE, &TRUE), TRUE);
    /// assert_eq!(Expression::eval_infix(InfixOperator::Equal, &Value::Integer(1), &TRUE),
    ///            FALSE);
    /// ```
    #[must_use]
    pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> Value {
        match (left, right) {
            (Value::Integer(left), Value::Integer(right)) => {
                Self::eval_integer_infix(operator, *left, *right)
            },
            _ if operator == InfixOperator::Equal => Value::from(left.is_identical(right)),
            _ if operator == InfixOperator::NotEqual => Value::from(!left.is_identical(right)),
            _ if left.value_type() != right.value_type() => {
                fail(RuntimeError::TypeMismatch { left: left.value_type(),
                                                  operator,
                                                  right: right.value_type() })
            },
            _ => fail(RuntimeError::UnknownInfixOperator { left: left.value_type(),
                                                           operator,
                                                           right: right.value_type() }),
        }
    }

    /// Integer arithmetic and comparison.
    ///
    /// Arithmetic is checked: leaving the `i64` range is an overflow error and
    /// a zero divisor is a division-by-zero error. Division truncates toward
    /// zero.
    fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Value {
        let checked = |result: Option<i64>| match result {
            Some(value) => Value::Integer(value),
            None => fail(RuntimeError::Overflow { expression: format!("{left} {operator} {right}") }),
        };

        match operator {
            InfixOperator::Add => checked(left.checked_add(right)),
            InfixOperator::Sub => checked(left.checked_sub(right)),
            InfixOperator::Mul => checked(left.checked_mul(right)),
            InfixOperator::Div => {
                if right == 0 {
                    return fail(RuntimeError::DivisionByZero { dividend: left });
                }
                checked(left.checked_div(right))
            },
            InfixOperator::Less => Value::from(left < right),
            InfixOperator::Greater => Value::from(left > right),
            InfixOperator::Equal => Value::from(left == right),
            InfixOperator::NotEqual => Value::from(left != right),
        }
    }
}
