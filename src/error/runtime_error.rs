use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::ValueType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are not thrown: the evaluator wraps them in
/// [`Value::Error`](crate::interpreter::value::Value::Error) and hands them
/// back like any other result.
pub enum RuntimeError {
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// The operand's type.
        operand:  ValueType,
    },
    /// An infix operator was applied to two operands of the same type that it
    /// does not support.
    UnknownInfixOperator {
        /// Left operand type.
        left:     ValueType,
        /// The operator.
        operator: InfixOperator,
        /// Right operand type.
        right:    ValueType,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Left operand type.
        left:     ValueType,
        /// The operator.
        operator: InfixOperator,
        /// Right operand type.
        right:    ValueType,
    },
    /// A name was not bound in any enclosing environment.
    IdentifierNotFound {
        /// The unbound name.
        name: String,
    },
    /// Integer division with a zero divisor.
    DivisionByZero {
        /// The dividend.
        dividend: i64,
    },
    /// Integer arithmetic left the 64-bit signed range.
    Overflow {
        /// The operation that overflowed, as written, e.g. `1 + 9223372036854775807`.
        expression: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => write!(f, "type mismatch: {left} {operator} {right}"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::DivisionByZero { dividend } => write!(f, "division by zero: {dividend} / 0"),
            Self::Overflow { expression } => write!(f, "integer overflow: {expression}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
