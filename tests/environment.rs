use monkey::interpreter::{environment::Environment, value::Value};

#[test]
fn unbound_name_is_absent() {
    let env = Environment::new();

    assert_eq!(env.get("x"), None);
}

#[test]
fn set_returns_the_stored_value() {
    let mut env = Environment::new();

    assert_eq!(env.set("x", Value::Integer(3)), &Value::Integer(3));
    assert_eq!(env.set("x", Value::Boolean(true)), &Value::Boolean(true));
    assert_eq!(env.get("x"), Some(&Value::Boolean(true)));
}

#[test]
fn lookups_walk_outward() {
    let mut global = Environment::new();
    global.set("a", Value::Integer(1));

    let mut middle = Environment::enclosed(&global);
    middle.set("b", Value::Integer(2));

    let inner = Environment::enclosed(&middle);

    assert_eq!(inner.get("a"), Some(&Value::Integer(1)));
    assert_eq!(inner.get("b"), Some(&Value::Integer(2)));
    assert_eq!(inner.get("c"), None);
}

#[test]
fn inner_bindings_shadow_without_touching_the_parent() {
    let mut global = Environment::new();
    global.set("x", Value::Integer(1));

    {
        let mut local = Environment::enclosed(&global);
        local.set("x", Value::Integer(10));
        local.set("y", Value::Integer(20));

        assert_eq!(local.get("x"), Some(&Value::Integer(10)));
    }

    assert_eq!(global.get("x"), Some(&Value::Integer(1)));
    assert_eq!(global.get("y"), None);
}

#[test]
fn siblings_do_not_see_each_other() {
    let global = Environment::new();

    let mut left = Environment::enclosed(&global);
    let right = Environment::enclosed(&global);
    left.set("only_left", Value::Null);

    assert_eq!(left.get("only_left"), Some(&Value::Null));
    assert_eq!(right.get("only_left"), None);
}
