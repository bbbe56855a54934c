use crate::common::fresh_engine;
use vellum::{Value, VellumError, USER_NS};

// === Bindings are visible to evaluation ===

#[test]
fn test_locals_scenario() {
    let mut engine = fresh_engine();
    engine.put("$hello", Value::Int(17));
    assert_eq!(engine.eval("$hello").unwrap().to_string(), "17");
    assert_eq!(engine.get("$hello").unwrap().to_string(), "17");

    // The engine-scope bindings refuse bulk removal outright
    assert_eq!(
        engine.bindings_mut().clear(),
        Err(VellumError::unsupported_operation("clear"))
    );
}

#[test]
fn test_eval_sees_latest_shadowing_binding() {
    let mut engine = fresh_engine();
    engine.put("x", Value::Int(1));
    engine.put("x", Value::Int(2));
    assert_eq!(engine.eval("x").unwrap(), Value::Int(2));
}

#[test]
fn test_eval_qualified_binding() {
    let mut engine = fresh_engine();
    engine.put("tools.box.hammer", Value::from("claw"));
    assert_eq!(engine.eval("tools.box.hammer").unwrap(), Value::from("claw"));
}

// === Literal forms ===

#[test]
fn test_eval_literal_forms() {
    let engine = fresh_engine();
    assert_eq!(engine.eval("42").unwrap(), Value::Int(42));
    assert_eq!(engine.eval("-3").unwrap(), Value::Int(-3));
    assert_eq!(engine.eval("2.5").unwrap(), Value::Float(2.5));
    assert_eq!(engine.eval("true").unwrap(), Value::Bool(true));
    assert_eq!(engine.eval("nil").unwrap(), Value::Nil);
    assert_eq!(engine.eval("\"quoted\"").unwrap(), Value::from("quoted"));
}

// === Failure surface ===

#[test]
fn test_eval_failures_are_errors_not_absent() {
    let engine = fresh_engine();

    assert_eq!(
        engine.eval("never-defined"),
        Err(VellumError::unresolved_symbol("never-defined"))
    );
    assert!(matches!(
        engine.eval(""),
        Err(VellumError::SyntaxError { .. })
    ));
    assert!(matches!(
        engine.eval("two forms"),
        Err(VellumError::SyntaxError { .. })
    ));

    // Map-side lookups of the same missing name stay absent, not error
    assert_eq!(engine.get("never-defined"), None);
}

#[test]
fn test_eval_unbound_var_is_an_error() {
    let engine = fresh_engine();
    engine
        .bindings()
        .registry()
        .intern_var(USER_NS, "declared")
        .unwrap();
    assert_eq!(
        engine.eval("declared"),
        Err(VellumError::unbound_symbol("declared"))
    );
}

// === Current namespace ===

#[test]
fn test_current_namespace_is_user() {
    let engine = fresh_engine();
    assert_eq!(engine.eval("*ns*").unwrap(), Value::from(USER_NS));
    assert_eq!(engine.bindings().registry().current().as_ref(), USER_NS);
}

// === Referred built-ins ===

#[test]
fn test_core_natives_resolve_through_user() {
    let engine = fresh_engine();
    let func = match engine.eval("str").unwrap() {
        Value::NativeFn(func) => func,
        other => panic!("expected native fn, got {:?}", other),
    };
    assert_eq!(
        func(&[Value::from("n = "), Value::Int(5)]).unwrap(),
        Value::from("n = 5")
    );

    // Visible to eval, but not a variable: absent from the map surface
    assert_eq!(engine.get("str"), None);
}
