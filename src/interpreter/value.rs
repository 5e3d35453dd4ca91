use std::fmt;

use crate::error::RuntimeError;

/// The shared `true` value.
pub const TRUE: Value = Value::Boolean(true);
/// The shared `false` value.
pub const FALSE: Value = Value::Boolean(false);
/// The shared null value, produced by an `if` without a taken branch.
pub const NULL: Value = Value::Null;

/// Represents a runtime value in the interpreter.
///
/// `Boolean` and `Null` carry no heap data, so every [`TRUE`], [`FALSE`] and
/// [`NULL`] is indistinguishable from every other: comparing two of them is
/// comparing the same instance. `ReturnValue` and `Error` are short-circuit
/// carriers that the evaluator passes outward untouched until they reach the
/// program level; they never wrap one another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`. Build these through [`Value::from`] or the shared
    /// constants.
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// The value of a `return` statement on its way out of nested blocks.
    ReturnValue(Box<Self>),
    /// A runtime failure on its way out of the evaluation.
    Error(RuntimeError),
}

/// The type tag of a [`Value`], as it appears in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `RETURN_VALUE`
    ReturnValue,
    /// `ERROR`
    Error,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Integer => "INTEGER",
                        Self::Boolean => "BOOLEAN",
                        Self::Null => "NULL",
                        Self::ReturnValue => "RETURN_VALUE",
                        Self::Error => "ERROR",
                    })
    }
}

impl From<bool> for Value {
    /// Resolves a native boolean to the shared [`TRUE`] or [`FALSE`].
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Null => ValueType::Null,
            Self::ReturnValue(_) => ValueType::ReturnValue,
            Self::Error(_) => ValueType::Error,
        }
    }

    /// Returns `true` for [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` for the values that halt a statement sequence:
    /// [`Value::ReturnValue`] and [`Value::Error`].
    #[must_use]
    pub const fn is_short_circuit(&self) -> bool {
        matches!(self, Self::ReturnValue(_) | Self::Error(_))
    }

    /// Judges the value as a condition.
    ///
    /// Booleans are themselves, null is false, integers are true when
    /// non-zero, and anything else is true.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::value::{NULL, Value};
    ///
    /// assert!(Value::Integer(1).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(value) => *value,
            Self::Null => false,
            Self::Integer(value) => *value != 0,
            Self::ReturnValue(_) | Self::Error(_) => true,
        }
    }

    /// Returns `true` when both sides are the same shared instance.
    ///
    /// Only the payload-free singletons ([`TRUE`], [`FALSE`], [`NULL`]) have a
    /// shared identity. Integers are compared by value elsewhere and are never
    /// identical here.
    #[must_use]
    pub const fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(left), Self::Boolean(right)) => *left == *right,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }

    /// Strips a [`Value::ReturnValue`] carrier, leaving any other value as is.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(inner) => *inner,
            other => other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}
