//! Namespace registry.
//!
//! The registry is the process-wide symbol store: named namespaces,
//! each mapping bare names to members. It is an explicit, injectable
//! service: callers construct their own (typically one per process,
//! shared via `Arc`), and tests construct isolated ones. Variable
//! creation through the registry is immediately visible to every
//! thread holding the same registry.
//!
//! A namespace member is either a variable owned by some namespace
//! (its own, or another's when projected in by `refer`) or a native
//! function mapped directly. Only variables participate in dynamic
//! binding; natives exist so built-ins can be referred into the
//! default namespace without becoming variables.

use crate::error::VellumError;
use crate::value::{NativeFn, Value};
use crate::var::Var;
use log::{trace, warn};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Name of the core/built-in namespace
pub const CORE_NS: &str = "vellum.core";

/// Name of the default namespace for unqualified keys
pub const USER_NS: &str = "user";

/// Name of the current-namespace var interned in the core namespace
pub const NS_VAR: &str = "*ns*";

/// A single entry in a namespace's mappings
#[derive(Clone)]
pub enum NsMember {
    /// A variable. May be owned by this namespace or referred in from
    /// another one; ownership is recorded on the var itself.
    Var(Arc<Var>),
    /// A built-in function mapped directly, not via a variable
    Native(NativeFn),
}

impl fmt::Debug for NsMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NsMember::Var(var) => write!(f, "{:?}", var),
            NsMember::Native(_) => write!(f, "<native-fn>"),
        }
    }
}

/// A named namespace: bare name → member
#[derive(Debug)]
struct Namespace {
    name: Arc<str>,
    mappings: FxHashMap<String, NsMember>,
}

impl Namespace {
    fn new(name: Arc<str>) -> Self {
        Namespace {
            name,
            mappings: FxHashMap::default(),
        }
    }
}

/// Process-wide namespace registry.
///
/// All mutation goes through one lock; vars handed out are `Arc`s whose
/// root state carries its own lock, so nothing here is held across
/// caller code.
pub struct NsRegistry {
    namespaces: RwLock<FxHashMap<String, Namespace>>,
    current: RwLock<Arc<str>>,
}

impl NsRegistry {
    /// Create a registry with the core namespace bootstrapped.
    ///
    /// The core namespace starts with the dynamic `*ns*` var, root-bound
    /// to the core namespace's own name. The current namespace starts
    /// as core until an execution context switches it.
    pub fn new() -> Self {
        let registry = NsRegistry {
            namespaces: RwLock::new(FxHashMap::default()),
            current: RwLock::new(Arc::from(CORE_NS)),
        };
        let ns_var = registry
            .intern_var(CORE_NS, NS_VAR)
            .expect("core namespace bootstrap");
        ns_var.mark_dynamic();
        ns_var.bind_root(Value::from(CORE_NS));
        registry
    }

    /// Name of the current namespace
    pub fn current(&self) -> Arc<str> {
        self.current.read().expect("registry lock poisoned").clone()
    }

    /// Switch the current namespace, creating it if absent
    pub fn set_current(&self, name: &str) -> Result<(), VellumError> {
        self.ensure_namespace(name)?;
        *self.current.write().expect("registry lock poisoned") = Arc::from(name);
        Ok(())
    }

    /// Create a namespace if it does not already exist
    pub fn ensure_namespace(&self, name: &str) -> Result<(), VellumError> {
        if name.is_empty() {
            return Err(VellumError::invalid_name(name, "empty namespace segment"));
        }
        let mut namespaces = self.namespaces.write().expect("registry lock poisoned");
        namespaces
            .entry(name.to_string())
            .or_insert_with(|| Namespace::new(Arc::from(name)));
        Ok(())
    }

    /// Get or create the var `name` owned by namespace `ns`.
    ///
    /// Creates the namespace if absent. A fresh var starts unbound. If
    /// the name is currently mapped to a foreign var or a native, the
    /// mapping is replaced by a fresh var owned here.
    pub fn intern_var(&self, ns: &str, name: &str) -> Result<Arc<Var>, VellumError> {
        if ns.is_empty() {
            return Err(VellumError::invalid_name(
                format!("{}.{}", ns, name),
                "empty namespace segment",
            ));
        }
        if name.is_empty() {
            return Err(VellumError::invalid_name(
                format!("{}.{}", ns, name),
                "empty name segment",
            ));
        }

        let mut namespaces = self.namespaces.write().expect("registry lock poisoned");
        let namespace = namespaces
            .entry(ns.to_string())
            .or_insert_with(|| Namespace::new(Arc::from(ns)));

        if let Some(NsMember::Var(var)) = namespace.mappings.get(name) {
            if var.ns() == ns {
                return Ok(var.clone());
            }
        }
        if namespace.mappings.contains_key(name) {
            warn!("intern of {}.{} replaces existing mapping", ns, name);
        }

        let var = Arc::new(Var::new(namespace.name.clone(), Arc::from(name)));
        namespace
            .mappings
            .insert(name.to_string(), NsMember::Var(var.clone()));
        Ok(var)
    }

    /// Look up the var `name` owned by namespace `ns`, without creating
    /// anything. Referred-in vars do not count; the mapping must be a
    /// var whose owner is `ns`.
    pub fn lookup_var(&self, ns: &str, name: &str) -> Option<Arc<Var>> {
        let namespaces = self.namespaces.read().expect("registry lock poisoned");
        match namespaces.get(ns)?.mappings.get(name)? {
            NsMember::Var(var) if var.ns() == ns => Some(var.clone()),
            _ => None,
        }
    }

    /// Resolve `name` through the full mappings of namespace `ns`,
    /// including referred members. This is the evaluation-side lookup.
    pub fn resolve(&self, ns: &str, name: &str) -> Option<NsMember> {
        let namespaces = self.namespaces.read().expect("registry lock poisoned");
        namespaces.get(ns)?.mappings.get(name).cloned()
    }

    /// Map a native function into namespace `ns`, creating it if absent
    pub fn define_native(&self, ns: &str, name: &str, func: NativeFn) -> Result<(), VellumError> {
        self.ensure_namespace(ns)?;
        let mut namespaces = self.namespaces.write().expect("registry lock poisoned");
        let namespace = namespaces.get_mut(ns).expect("namespace just ensured");
        namespace
            .mappings
            .insert(name.to_string(), NsMember::Native(func));
        Ok(())
    }

    /// Project every mapping of `source` into `target` without
    /// transferring ownership. Names `target` already maps are left
    /// alone.
    pub fn refer(&self, target: &str, source: &str) -> Result<(), VellumError> {
        let mut namespaces = self.namespaces.write().expect("registry lock poisoned");
        let source_mappings: Vec<(String, NsMember)> = match namespaces.get(source) {
            Some(ns) => ns
                .mappings
                .iter()
                .map(|(name, member)| (name.clone(), member.clone()))
                .collect(),
            None => return Err(VellumError::namespace_not_found(source)),
        };
        let namespace = namespaces
            .get_mut(target)
            .ok_or_else(|| VellumError::namespace_not_found(target))?;

        let mut added = 0;
        for (name, member) in source_mappings {
            if !namespace.mappings.contains_key(&name) {
                namespace.mappings.insert(name, member);
                added += 1;
            }
        }
        trace!("referred {} mappings from {} into {}", added, source, target);
        Ok(())
    }

    /// Enumerate the mappings of namespace `ns` at this moment.
    /// Unknown namespaces enumerate as empty.
    pub fn members(&self, ns: &str) -> Vec<(String, NsMember)> {
        let namespaces = self.namespaces.read().expect("registry lock poisoned");
        match namespaces.get(ns) {
            Some(namespace) => namespace
                .mappings
                .iter()
                .map(|(name, member)| (name.clone(), member.clone()))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for NsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
