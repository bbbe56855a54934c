use crate::common::{fresh_bindings, fresh_registry};
use vellum::{Bindings, Value, VellumError, USER_NS};

// === Map contract scenarios ===

#[test]
fn test_bindings_scenario() {
    let mut engine = crate::common::fresh_engine();

    let baseline = engine.bindings().len();
    assert!(!engine.bindings().keys().contains("foo"));

    engine.put("foo", Value::from("bar"));
    assert_eq!(engine.get("foo"), Some(Value::from("bar")));
    assert_eq!(engine.bindings().get("foo"), Some(Value::from("bar")));
    assert_eq!(engine.bindings().len(), baseline + 1);
    assert!(engine.bindings().keys().contains("foo"));
}

#[test]
fn test_round_trip_qualified_and_not() {
    let mut bindings = fresh_bindings();
    bindings.insert("plain", Value::Int(1));
    bindings.insert("deep.ns.path.x", Value::Int(2));
    assert_eq!(bindings.get("plain"), Some(Value::Int(1)));
    assert_eq!(bindings.get("deep.ns.path.x"), Some(Value::Int(2)));
}

#[test]
fn test_qualified_insert_interns_in_named_namespace() {
    let mut bindings = fresh_bindings();
    bindings.insert("ns.name", Value::Int(1));
    bindings.insert("name", Value::Int(2));

    let registry = bindings.registry();
    let qualified = registry.lookup_var("ns", "name").unwrap();
    let unqualified = registry.lookup_var(USER_NS, "name").unwrap();
    assert_eq!(qualified.ns(), "ns");
    assert_eq!(unqualified.ns(), USER_NS);
    assert_ne!(qualified, unqualified);
}

#[test]
fn test_unsupported_ops_are_unconditional() {
    let mut bindings = fresh_bindings();

    // On a fresh binding set
    assert_eq!(
        bindings.remove("foo"),
        Err(VellumError::unsupported_operation("remove"))
    );
    assert_eq!(
        bindings.clear(),
        Err(VellumError::unsupported_operation("clear"))
    );

    // And on a populated one, for present and absent keys alike
    bindings.insert("foo", Value::Int(1));
    assert!(bindings.remove("foo").is_err());
    assert!(bindings.remove("nope").is_err());
    assert!(bindings.clear().is_err());
    // The failed calls changed nothing
    assert_eq!(bindings.get("foo"), Some(Value::Int(1)));
}

#[test]
fn test_size_tracks_pushes_not_namespace_contents() {
    let mut bindings = fresh_bindings();

    // A var that already exists and already has a (root) value
    let var = bindings.registry().intern_var(USER_NS, "seen").unwrap();
    var.bind_root(Value::Int(1));

    let n = bindings.len();
    bindings.insert("seen", Value::Int(2));
    assert_eq!(bindings.len(), n + 1);
}

#[test]
fn test_snapshot_isolation() {
    let mut bindings = fresh_bindings();
    bindings.insert("a", Value::Int(1));

    let keys = bindings.keys();
    let values = bindings.values();
    let entries = bindings.entries();

    bindings.insert("b", Value::Int(2));

    assert!(!keys.contains("b"));
    assert!(!values.contains(&Value::Int(2)));
    assert!(!entries.contains_key("b"));

    // A fresh view sees it
    assert!(bindings.keys().contains("b"));
    assert!(bindings.contains_value(&Value::Int(2)));
}

#[test]
fn test_contains_key_matches_get() {
    let mut bindings = fresh_bindings();
    bindings.insert("present", Value::Int(1));
    bindings.insert("nil-bound", Value::Nil);
    bindings.registry().intern_var(USER_NS, "ghost").unwrap();

    for key in ["present", "nil-bound", "ghost", "missing", "a.b"] {
        assert_eq!(
            bindings.contains_key(key),
            bindings.get(key).is_some(),
            "contains_key/get disagree for {}",
            key
        );
    }
}

// === Known, deliberate limitations ===

#[test]
fn test_unbound_and_missing_are_indistinguishable() {
    // An interned-but-unbound var and a key that was never interned
    // both answer absent: the contract conflates the two states on
    // purpose, and callers cannot tell them apart through the map.
    let bindings = fresh_bindings();
    bindings.registry().intern_var(USER_NS, "ghost").unwrap();

    assert_eq!(bindings.get("ghost"), None);
    assert_eq!(bindings.get("phantom"), None);
    assert!(!bindings.contains_key("ghost"));
    assert!(!bindings.contains_key("phantom"));
    assert!(!bindings.keys().contains("ghost"));
}

#[test]
fn test_frames_accumulate_without_pop() {
    // The adapter only pushes; nothing here ever pops. The enclosing
    // lifecycle owns that decision, and a context that never does pop
    // keeps every frame alive.
    let mut bindings = fresh_bindings();
    let depth = bindings.frames().depth();
    bindings.insert("a", Value::Int(1));
    bindings.insert("a", Value::Int(2));
    bindings.insert("a", Value::Int(3));
    assert_eq!(bindings.frames().depth(), depth + 3);

    // A caller balancing pushes can pop explicitly
    bindings.frames_mut().pop();
    assert_eq!(bindings.get("a"), Some(Value::Int(2)));
}

// === Batch insert ===

#[test]
fn test_insert_all_is_per_entry() {
    let mut bindings = fresh_bindings();
    let baseline = bindings.len();
    bindings.insert_all(vec![
        ("x".to_string(), Value::Int(1)),
        ("bad.".to_string(), Value::Int(2)),
        ("y".to_string(), Value::Int(3)),
    ]);
    // The refused entry is swallowed; the rest of the batch lands
    assert_eq!(bindings.get("x"), Some(Value::Int(1)));
    assert_eq!(bindings.get("y"), Some(Value::Int(3)));
    assert_eq!(bindings.len(), baseline + 2);
}

// === Shared registry, separate contexts ===

#[test]
fn test_var_creation_is_global_values_are_not() {
    let registry = fresh_registry();
    let mut first = Bindings::new(registry.clone()).unwrap();
    let second = Bindings::new(registry.clone()).unwrap();

    first.insert("shared", Value::Int(7));

    assert!(registry.lookup_var(USER_NS, "shared").is_some());
    assert_eq!(first.get("shared"), Some(Value::Int(7)));
    // The other context sees the var as unbound, not the pushed value
    assert_eq!(second.get("shared"), None);
    assert!(!second.keys().contains("shared"));
}

#[test]
fn test_isolated_registries_do_not_interact() {
    let mut first = fresh_bindings();
    let second = fresh_bindings();

    first.insert("only-here", Value::Int(1));
    assert_eq!(second.get("only-here"), None);
    assert!(second.registry().lookup_var(USER_NS, "only-here").is_none());
}
