use mscript::{
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopePolicy},
        value::Value,
    },
};

#[test]
fn new_environment_has_only_global_scope() {
    let env = Environment::new();

    assert_eq!(env.depth(), 1);
    assert_eq!(env.policy(), ScopePolicy::AssignToNearest);
    assert!(!env.exists("x"));
}

#[test]
fn global_scope_cannot_be_popped() {
    let mut env = Environment::new();

    assert!(matches!(env.pop_scope(), Err(RuntimeError::ScopeUnderflow)));

    env.push_scope();
    env.push_scope();
    assert_eq!(env.depth(), 3);
    assert!(env.pop_scope().is_ok());
    assert!(env.pop_scope().is_ok());
    assert!(env.pop_scope().is_err());
    assert_eq!(env.depth(), 1);
}

#[test]
fn lookup_prefers_innermost_binding() {
    let mut env = Environment::new();
    env.set("x", Value::Integer(1));
    env.push_scope();
    env.define_local("x", Value::from("inner"));

    assert_eq!(env.get("x"), Some(&Value::from("inner")));

    env.pop_scope().unwrap();
    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn assign_to_nearest_updates_outer_binding() {
    let mut env = Environment::with_policy(ScopePolicy::AssignToNearest);
    env.set("x", Value::Integer(1));

    env.push_scope();
    env.set("x", Value::Integer(2));
    env.set("fresh", Value::Char('f'));
    env.pop_scope().unwrap();

    assert_eq!(env.get("x"), Some(&Value::Integer(2)));
    assert_eq!(env.get("fresh"), None);
}

#[test]
fn define_or_shadow_leaves_outer_binding() {
    let mut env = Environment::with_policy(ScopePolicy::DefineOrShadow);
    env.set("x", Value::Integer(1));

    env.push_scope();
    env.set("x", Value::Integer(2));
    assert_eq!(env.get("x"), Some(&Value::Integer(2)));
    env.pop_scope().unwrap();

    assert_eq!(env.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn rebinding_may_change_kind() {
    let mut env = Environment::new();
    env.set("v", Value::Integer(1));
    env.set("v", Value::Float(1.5));

    assert_eq!(env.get("v"), Some(&Value::Float(1.5)));
}
