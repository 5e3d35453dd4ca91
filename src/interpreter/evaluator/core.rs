use tracing::{debug, trace};

use crate::{
    ast::{BlockStatement, Expression, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{NULL, Value},
    },
};

/// A syntax tree node that can be evaluated against an [`Environment`].
///
/// Statements produce `Option<Value>`: `None` for constructs that yield no
/// value, such as `let`. Expressions always produce a [`Value`]. Failures are
/// never returned out of band; they come back as [`Value::Error`].
pub trait Eval {
    /// What evaluating this node produces.
    type Output;

    /// Evaluates the node, applying any `let` bindings to `env`.
    fn eval(&self, env: &mut Environment<'_>) -> Self::Output;
}

/// Evaluates `node` against `env`.
///
/// ## Example
/// ```
/// use monkey::{
///     interpreter::{environment::Environment, evaluator::core::eval, value::Value},
///     parse,
/// };
///
/// let program = parse("let a = 5; a * 2").unwrap();
/// let mut env = Environment::new();
///
/// assert_eq!(eval(&program, &mut env), Some(Value::Integer(10)));
/// assert_eq!(env.get("a"), Some(&Value::Integer(5)));
/// ```
pub fn eval<N: Eval + ?Sized>(node: &N, env: &mut Environment<'_>) -> N::Output {
    node.eval(env)
}

/// Wraps `error` as a value, logging it once at the point it is raised.
pub(super) fn fail(error: RuntimeError) -> Value {
    debug!(%error, "runtime error");
    Value::Error(error)
}

impl Eval for Program {
    type Output = Option<Value>;

    /// Runs the statements in order. A `return` ends the whole program and
    /// its value is unwrapped here, and only here. An error ends it too.
    fn eval(&self, env: &mut Environment<'_>) -> Option<Value> {
        let mut result = None;

        for statement in &self.statements {
            result = statement.eval(env);

            if result.as_ref().is_some_and(Value::is_short_circuit) {
                return result.map(Value::unwrap_return);
            }
        }

        result
    }
}

impl Eval for BlockStatement {
    type Output = Option<Value>;

    /// Runs the statements in order, stopping at the first `return` or error
    /// and handing it outward still wrapped, so every enclosing block stops as
    /// well.
    fn eval(&self, env: &mut Environment<'_>) -> Option<Value> {
        let mut result = None;

        for statement in &self.statements {
            result = statement.eval(env);

            if result.as_ref().is_some_and(Value::is_short_circuit) {
                break;
            }
        }

        result
    }
}

impl Eval for Statement {
    type Output = Option<Value>;

    fn eval(&self, env: &mut Environment<'_>) -> Option<Value> {
        match self {
            Self::Let { name, value, .. } => {
                let value = eval_optional(value.as_ref(), env);
                if value.is_short_circuit() {
                    return Some(value);
                }

                trace!(name = %name, value = %value, "binding");
                env.set(name.value.clone(), value);
                None
            },
            Self::Return { value, .. } => {
                let value = eval_optional(value.as_ref(), env);
                if value.is_short_circuit() {
                    return Some(value);
                }

                Some(Value::ReturnValue(Box::new(value)))
            },
            Self::Expression { expression, .. } => Some(expression.eval(env)),
            Self::Block(block) => block.eval(env),
        }
    }
}

impl Eval for Expression {
    type Output = Value;

    fn eval(&self, env: &mut Environment<'_>) -> Value {
        match self {
            Self::Identifier(identifier) => eval_identifier(identifier, env),
            Self::IntegerLiteral { value, .. } => Value::Integer(*value),
            Self::BooleanLiteral { value, .. } => Value::from(*value),
            Self::Prefix { operator, right, .. } => {
                let right = right.eval(env);
                if right.is_short_circuit() {
                    return right;
                }

                Self::eval_prefix(*operator, &right)
            },
            Self::Infix { left,
                          operator,
                          right,
                          .. } => {
                let left = left.eval(env);
                if left.is_short_circuit() {
                    return left;
                }

                let right = right.eval(env);
                if right.is_short_circuit() {
                    return right;
                }

                Self::eval_infix(*operator, &left, &right)
            },
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => eval_if(condition, consequence, alternative.as_ref(), env),
        }
    }
}

/// Evaluates an optional expression, treating a missing one as `null`.
fn eval_optional(expression: Option<&Expression>, env: &mut Environment<'_>) -> Value {
    expression.map_or(NULL, |expression| expression.eval(env))
}

fn eval_identifier(identifier: &Identifier, env: &Environment<'_>) -> Value {
    match env.get(&identifier.value) {
        Some(value) => value.clone(),
        None => fail(RuntimeError::IdentifierNotFound { name: identifier.value.clone() }),
    }
}

/// Picks a branch by the condition's truthiness. A branch that produces no
/// value, and a false condition without `else`, both give `null`.
fn eval_if(condition: &Expression,
           consequence: &BlockStatement,
           alternative: Option<&BlockStatement>,
           env: &mut Environment<'_>)
           -> Value {
    let condition = condition.eval(env);
    if condition.is_short_circuit() {
        return condition;
    }

    let branch = if condition.is_truthy() {
        Some(consequence)
    } else {
        alternative
    };

    branch.and_then(|block| block.eval(env)).unwrap_or(NULL)
}
