//! Built-in functions for the core namespace.
//!
//! Primitives are mapped into the core namespace as native members,
//! not as variables, and become visible to the default namespace when
//! an execution context refers core in. They take and return `Value`
//! directly.

use crate::error::VellumError;
use crate::namespace::{NsRegistry, CORE_NS};
use crate::value::{NativeFn, Value};

/// A primitive definition: name, docstring, function
pub struct PrimitiveDef {
    pub name: &'static str,
    pub doc: &'static str,
    pub func: NativeFn,
}

fn arity_mismatch(expected: usize, got: usize) -> String {
    format!(
        "Argument error: expected {} argument{}, got {}",
        expected,
        if expected == 1 { "" } else { "s" },
        got
    )
}

/// `str`: concatenate the display form of every argument
fn prim_str(args: &[Value]) -> Result<Value, String> {
    let mut out = String::new();
    for arg in args {
        // nil contributes nothing
        if !arg.is_nil() {
            out.push_str(&arg.to_string());
        }
    }
    Ok(Value::from(out))
}

/// `nil?`: true iff the single argument is nil
fn prim_nil_p(args: &[Value]) -> Result<Value, String> {
    if args.len() != 1 {
        return Err(arity_mismatch(1, args.len()));
    }
    Ok(Value::Bool(args[0].is_nil()))
}

/// `type`: the runtime type name of the single argument
fn prim_type(args: &[Value]) -> Result<Value, String> {
    if args.len() != 1 {
        return Err(arity_mismatch(1, args.len()));
    }
    Ok(Value::from(args[0].type_name()))
}

/// The core primitive table
pub const PRIMITIVES: &[PrimitiveDef] = &[
    PrimitiveDef {
        name: "str",
        doc: "Concatenate the string form of the arguments.",
        func: prim_str,
    },
    PrimitiveDef {
        name: "nil?",
        doc: "True if the argument is nil.",
        func: prim_nil_p,
    },
    PrimitiveDef {
        name: "type",
        doc: "The type name of the argument, as a string.",
        func: prim_type,
    },
];

/// Register every core primitive into the registry's core namespace
pub fn register_primitives(registry: &NsRegistry) -> Result<(), VellumError> {
    for def in PRIMITIVES {
        registry.define_native(CORE_NS, def.name, def.func)?;
    }
    Ok(())
}
