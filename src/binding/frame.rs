//! Context-local dynamic binding frames.
//!
//! A `BindingStack` belongs to one execution context (it is not
//! process- or thread-global state) and holds a stack of frames. Each
//! frame carries the *merged* view of every override in effect at the
//! moment it was pushed: pushing clones the top frame and inserts the
//! new binding, so lookup and counting only ever consult the top.
//!
//! Push and pop are symmetric, but the bindings adapter only pushes;
//! popping at scope exit is the enclosing execution lifecycle's
//! decision. A context that pushes without ever popping accumulates
//! frames for its whole life, an inherited property of this design,
//! not an accident.

use crate::value::Value;
use crate::var::Var;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// One binding frame: the merged override view, keyed by var id
#[derive(Debug, Clone, Default)]
pub struct Frame {
    bindings: FxHashMap<u64, (Arc<Var>, Value)>,
}

impl Frame {
    /// Number of distinct overridden vars in this frame
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The override for `var` in this frame, if any
    pub fn get(&self, var: &Var) -> Option<&Value> {
        self.bindings.get(&var.id()).map(|(_, value)| value)
    }
}

/// Stack of binding frames for one execution context
#[derive(Debug, Default)]
pub struct BindingStack {
    frames: Vec<Frame>,
}

impl BindingStack {
    pub fn new() -> Self {
        BindingStack { frames: Vec::new() }
    }

    /// Push a new frame binding `var` to `value` on top of everything
    /// currently in effect. Re-pushing a var already overridden
    /// replaces its entry in the merged view; the distinct-var count
    /// does not grow.
    pub fn push_binding(&mut self, var: Arc<Var>, value: Value) {
        let mut frame = self.frames.last().cloned().unwrap_or_default();
        frame.bindings.insert(var.id(), (var, value));
        self.frames.push(frame);
    }

    /// Pop the top frame, restoring whatever the previous frame bound
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Number of frames on the stack
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of distinct vars currently overridden
    pub fn count(&self) -> usize {
        self.frames.last().map_or(0, Frame::len)
    }

    /// The override currently in effect for `var`, if any
    pub fn lookup(&self, var: &Var) -> Option<Value> {
        self.frames.last().and_then(|frame| frame.get(var).cloned())
    }

    /// Whether `var` is currently overridden
    pub fn has(&self, var: &Var) -> bool {
        self.lookup(var).is_some()
    }
}
