//! Script-engine glue over the runtime.
//!
//! An `Engine` is one execution context: a bindings view plus the
//! evaluation entry point the host hands to script authors. Bindings
//! inserted through the map surface are visible to evaluation on the
//! same engine, because both go through the same context frames.

use crate::bindings::Bindings;
use crate::error::VellumError;
use crate::namespace::{NsMember, NsRegistry};
use crate::reader::{read_str, Form};
use crate::symbol::Sym;
use crate::value::Value;
use std::sync::Arc;

/// One script-execution context over a shared registry
pub struct Engine {
    bindings: Bindings,
}

impl Engine {
    /// Create an engine over `registry`. Constructing the bindings view
    /// performs the namespace setup (current namespace switched to
    /// `user`, core referred in).
    pub fn new(registry: Arc<NsRegistry>) -> Result<Self, VellumError> {
        Ok(Engine {
            bindings: Bindings::new(registry)?,
        })
    }

    /// The engine-scope bindings
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    /// Insert into the engine-scope bindings
    pub fn put(&mut self, key: &str, value: Value) -> Option<Value> {
        self.bindings.insert(key, value)
    }

    /// Look up in the engine-scope bindings
    pub fn get(&self, key: &str) -> Option<Value> {
        self.bindings.get(key)
    }

    /// Evaluate a single form: a literal evaluates to itself, a symbol
    /// dereferences through this context.
    pub fn eval(&self, src: &str) -> Result<Value, VellumError> {
        match read_str(src)? {
            Form::Literal(value) => Ok(value),
            Form::Symbol(sym) => self.deref_symbol(&sym),
        }
    }

    /// Dereference a symbol. Qualified symbols resolve to the var owned
    /// by the named namespace; unqualified symbols resolve through the
    /// current namespace's full mappings, referred members included.
    fn deref_symbol(&self, sym: &Sym) -> Result<Value, VellumError> {
        let registry = self.bindings.registry();
        let member = match sym.ns() {
            Some(ns) => registry.lookup_var(ns, sym.name()).map(NsMember::Var),
            None => {
                let current = registry.current();
                registry.resolve(&current, sym.name())
            }
        };

        match member {
            Some(NsMember::Var(var)) => self
                .bindings
                .current_value(&var)
                .ok_or_else(|| VellumError::unbound_symbol(sym.to_string())),
            Some(NsMember::Native(func)) => Ok(Value::NativeFn(func)),
            None => Err(VellumError::unresolved_symbol(sym.to_string())),
        }
    }
}
