use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Name bindings for one lexical scope.
///
/// An environment optionally borrows the scope that encloses it. Lookups fall
/// back through that chain innermost-first; writes always land in the local
/// scope, so a child can shadow but never modify its parent. The borrow means
/// a parent outlives every child created from it and can be shared by any
/// number of them.
///
/// ## Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::Value};
///
/// let mut global = Environment::new();
/// global.set("x", Value::Integer(1));
///
/// let mut local = Environment::enclosed(&global);
/// local.set("x", Value::Integer(2));
///
/// assert_eq!(local.get("x"), Some(&Value::Integer(2)));
/// assert_eq!(global.get("x"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Default)]
pub struct Environment<'outer> {
    store: HashMap<String, Value>,
    outer: Option<&'outer Environment<'outer>>,
}

impl<'outer> Environment<'outer> {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None, }
    }

    /// Creates an empty environment enclosed by `outer`.
    #[must_use]
    pub fn enclosed(outer: &'outer Environment<'outer>) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer), }
    }

    /// Resolves `name`, checking this scope first and then each enclosing one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.store.get(name) {
            Some(value) => Some(value),
            None => self.outer.and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this scope, replacing any local binding of the same
    /// name, and returns the stored value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> &Value {
        let slot = self.store
                       .entry(name.into())
                       .insert_entry(value);
        slot.into_mut()
    }
}
