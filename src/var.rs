//! Variables and their bound state.
//!
//! A `Var` is owned by exactly one namespace and carries a root binding
//! shared by every execution context. "Unbound" is a first-class state,
//! represented by the `Binding` enum rather than a sentinel value;
//! collapsing `Unbound` to an absent result happens only at the
//! outermost map/decode boundary.

use crate::value::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Global counter for var ids. Ids key context-local binding frames,
/// so they must be unique across every registry in the process.
static VAR_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_var_id() -> u64 {
    VAR_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// The bound state of a variable: either a value or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Bound(Value),
    Unbound,
}

impl Binding {
    pub fn is_bound(&self) -> bool {
        matches!(self, Binding::Bound(_))
    }

    /// Collapse to an optional value. `Unbound` becomes `None`, the
    /// same answer as a variable that does not exist, which is the
    /// contract's deliberate ambiguity.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Binding::Bound(value) => Some(value),
            Binding::Unbound => None,
        }
    }
}

/// A named variable owned by a namespace.
///
/// The root binding is process-wide state; context-local overrides live
/// in each execution context's `BindingStack` and shadow the root
/// without ever modifying it.
pub struct Var {
    id: u64,
    ns: Arc<str>,
    name: Arc<str>,
    root: RwLock<Binding>,
    dynamic: AtomicBool,
}

impl Var {
    /// Create a new unbound var owned by `ns`
    pub fn new(ns: Arc<str>, name: Arc<str>) -> Self {
        Var {
            id: next_var_id(),
            ns,
            name,
            root: RwLock::new(Binding::Unbound),
            dynamic: AtomicBool::new(false),
        }
    }

    /// Process-unique id, used to key binding frames
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the owning namespace
    pub fn ns(&self) -> &str {
        &self.ns
    }

    /// Bare name within the owning namespace
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current root binding
    pub fn root(&self) -> Binding {
        self.root.read().expect("var root lock poisoned").clone()
    }

    /// Bind the root value, replacing any previous root binding
    pub fn bind_root(&self, value: Value) {
        *self.root.write().expect("var root lock poisoned") = Binding::Bound(value);
    }

    /// Whether the root is bound. Context-local overrides are not
    /// visible here; boundness including overrides is the adapter's
    /// view, not the var's.
    pub fn is_bound(&self) -> bool {
        self.root.read().expect("var root lock poisoned").is_bound()
    }

    /// Mark the var as supporting context-local dynamic rebinding
    pub fn mark_dynamic(&self) {
        self.dynamic.store(true, Ordering::Relaxed);
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic.load(Ordering::Relaxed)
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#'{}.{}", self.ns, self.name)
    }
}
