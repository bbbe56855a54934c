use vellum::{Binding, ScriptLanguage, Value, VellumLanguage};

#[test]
fn test_language_descriptor() {
    let language = VellumLanguage::new().unwrap();
    assert_eq!(language.language_name(), "Vellum");
    assert_eq!(language.engine_name(), "vellum");
    assert_eq!(language.extensions(), &["vl"]);
}

#[test]
fn test_engine_from_descriptor_round_trips() {
    let language = VellumLanguage::new().unwrap();
    let mut engine = language.script_engine().unwrap();
    engine.put("greeting", Value::from("hi"));
    assert_eq!(engine.eval("greeting").unwrap(), Value::from("hi"));
}

#[test]
fn test_decode_is_the_outermost_collapse() {
    let language = VellumLanguage::new().unwrap();

    // Unbound becomes absent only here
    assert_eq!(language.decode(Binding::Unbound), None);
    assert_eq!(
        language.decode(Binding::Bound(Value::from("v"))),
        Some(Value::from("v"))
    );
    assert_eq!(language.decode(Binding::Bound(Value::Nil)), Some(Value::Nil));
}

#[test]
fn test_descriptor_shares_one_registry() {
    let language = VellumLanguage::new().unwrap();
    let mut writer = language.script_engine().unwrap();
    let reader = language.script_engine().unwrap();

    writer.put("fact", Value::Int(1));

    // Same registry: the var exists for both engines. Separate
    // contexts: the value does not leak across.
    assert!(language
        .registry()
        .lookup_var(vellum::USER_NS, "fact")
        .is_some());
    assert_eq!(reader.get("fact"), None);
}
