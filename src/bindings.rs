//! The bindings adapter: namespace/variable state as a flat map.
//!
//! `Bindings` presents the registry's dynamic variables to a host
//! application as a string-keyed map. Keys may be qualified with a
//! namespace (`"my.ns.x"`, split at the last `.`); unqualified keys
//! live in the default `user` namespace. Inserting pushes a
//! context-local dynamic binding (the var's root is never written),
//! and deleting is not supported at all.
//!
//! Two contract quirks are preserved deliberately:
//! - `len()` reports the context's dynamic-override count, not the
//!   number of bound variables in the namespace.
//! - a missing key and an interned-but-unbound variable are both
//!   absent from `get`; the two states are indistinguishable at this
//!   boundary.

use crate::binding::BindingStack;
use crate::error::VellumError;
use crate::namespace::{NsMember, NsRegistry, CORE_NS, NS_VAR, USER_NS};
use crate::symbol::Sym;
use crate::value::Value;
use crate::var::Var;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Map-style view of an execution context's dynamic bindings.
///
/// One `Bindings` belongs to one execution context; the registry behind
/// it is shared, so variables created here are visible everywhere, but
/// the values pushed here are visible only through this context.
pub struct Bindings {
    registry: Arc<NsRegistry>,
    frames: BindingStack,
}

impl Bindings {
    /// Create a bindings view over `registry`.
    ///
    /// One-time setup: switches the registry's current namespace to
    /// `user` (creating it if needed), refers the core namespace into
    /// it, and pushes a context binding of `*ns*` to `"user"`. A fresh
    /// adapter therefore starts with `len() == 1`.
    pub fn new(registry: Arc<NsRegistry>) -> Result<Self, VellumError> {
        registry.set_current(USER_NS)?;
        registry.refer(USER_NS, CORE_NS)?;

        let ns_var = registry
            .lookup_var(CORE_NS, NS_VAR)
            .ok_or_else(|| VellumError::unresolved_symbol(NS_VAR))?;
        let mut frames = BindingStack::new();
        frames.push_binding(ns_var, Value::from(USER_NS));

        Ok(Bindings { registry, frames })
    }

    /// The registry this view is backed by
    pub fn registry(&self) -> &Arc<NsRegistry> {
        &self.registry
    }

    /// The context's binding frames
    pub fn frames(&self) -> &BindingStack {
        &self.frames
    }

    /// Mutable access to the binding frames. The adapter itself only
    /// pushes; an enclosing lifecycle that wants to balance pushes with
    /// pops at scope exit does it through here.
    pub fn frames_mut(&mut self) -> &mut BindingStack {
        &mut self.frames
    }

    /// The value currently in effect for `var` in this context:
    /// the context override if present, else the root binding.
    pub(crate) fn current_value(&self, var: &Var) -> Option<Value> {
        self.frames.lookup(var).or_else(|| var.root().into_value())
    }

    /// Look up a key. Absent namespaces, absent variables, and unbound
    /// variables all answer `None`; resolution failures never escape.
    pub fn get(&self, key: &str) -> Option<Value> {
        let sym = Sym::parse(key);
        let (ns, name) = sym.resolve(USER_NS);
        let var = self.registry.lookup_var(ns, name)?;
        self.current_value(&var)
    }

    /// Insert a binding, returning the previous value per the map
    /// contract.
    ///
    /// The var is interned (created unbound if absent, its namespace
    /// too), marked dynamic, and a context binding is pushed on top of
    /// this context's frames. The root binding is never touched. If the
    /// registry refuses the name (empty namespace or name segment), the
    /// operation is a no-op beyond the previous-value capture.
    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        let sym = Sym::parse(key);
        let (ns, name) = sym.resolve(USER_NS);

        let previous = self
            .registry
            .lookup_var(ns, name)
            .and_then(|var| self.current_value(&var));

        match self.registry.intern_var(ns, name) {
            Ok(var) => {
                var.mark_dynamic();
                self.frames.push_binding(var, value);
            }
            Err(err) => {
                debug!("insert of '{}' ignored: {}", key, err);
            }
        }
        previous
    }

    /// Insert every entry individually, in no particular order. There
    /// is no atomicity across the batch; a refused entry is swallowed
    /// exactly as `insert` swallows it.
    pub fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        for (key, value) in entries {
            self.insert(&key, value);
        }
    }

    /// Removing a dynamic binding is not a supported operation.
    /// Fails unconditionally, whatever the map state.
    pub fn remove(&mut self, _key: &str) -> Result<Option<Value>, VellumError> {
        Err(VellumError::unsupported_operation("remove"))
    }

    /// Bulk removal is not a supported operation. Fails
    /// unconditionally so a "reset all bindings" misuse is caught
    /// instead of silently doing nothing.
    pub fn clear(&mut self) -> Result<(), VellumError> {
        Err(VellumError::unsupported_operation("clear"))
    }

    /// Number of distinct vars this context currently overrides.
    ///
    /// This is the context's dynamic-binding accounting, NOT the number
    /// of bound variables in the namespace: observable behavior
    /// inherited from the underlying runtime and reproduced as-is.
    pub fn len(&self) -> usize {
        self.frames.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff `get(key)` answers with a value. Bound-to-nothing and
    /// nonexistent are conflated here, like everywhere else on this
    /// boundary.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Membership test against a fresh snapshot of the default
    /// namespace's bound variables
    pub fn contains_value(&self, value: &Value) -> bool {
        self.snapshot().values().any(|v| v == value)
    }

    /// The key set of a fresh snapshot. Not live: later inserts do not
    /// mutate a previously returned set.
    pub fn keys(&self) -> HashSet<String> {
        self.snapshot().into_keys().collect()
    }

    /// The values of a fresh snapshot
    pub fn values(&self) -> Vec<Value> {
        self.snapshot().into_values().collect()
    }

    /// A fresh snapshot of bare name → current value
    pub fn entries(&self) -> HashMap<String, Value> {
        self.snapshot()
    }

    /// Build the snapshot map: every variable owned by the default
    /// namespace with a binding currently in effect in this context.
    /// Recomputed on every call, never cached.
    fn snapshot(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();
        for (name, member) in self.registry.members(USER_NS) {
            let var = match member {
                NsMember::Var(var) => var,
                _ => continue, // skip non-variables
            };
            if var.ns() != USER_NS {
                continue; // skip referred vars
            }
            match self.current_value(&var) {
                Some(value) => {
                    map.insert(name, value);
                }
                None => continue, // skip unbound vars
            }
        }
        map
    }
}
