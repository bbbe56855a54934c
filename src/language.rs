//! Language plugin wrapper.
//!
//! The seam a host's script-engine plugin layer sees: a language
//! descriptor that names the language, claims file extensions, hands
//! out engines over a shared registry, and decodes raw binding states
//! into host-facing optional values. Discovery and registration of
//! descriptors belong to the host plugin framework, not this crate.

use crate::engine::Engine;
use crate::error::VellumError;
use crate::namespace::NsRegistry;
use crate::primitives::register_primitives;
use crate::value::Value;
use crate::var::Binding;
use std::sync::Arc;

/// A scripting language adapter as the host plugin layer sees it
pub trait ScriptLanguage {
    /// Human-facing language name
    fn language_name(&self) -> &str;

    /// Engine identifier, as used in engine lookups
    fn engine_name(&self) -> &str;

    /// File extensions (without the dot) this language claims
    fn extensions(&self) -> &[&str];

    /// Create a fresh execution engine for this language
    fn script_engine(&self) -> Result<Engine, VellumError>;

    /// Collapse a raw binding state to a host-facing value. This is the
    /// outermost boundary: `Unbound` becomes absent here, and nowhere
    /// earlier.
    fn decode(&self, binding: Binding) -> Option<Value> {
        binding.into_value()
    }
}

/// The vellum runtime as a script language.
///
/// Engines handed out by one descriptor share its registry: variables
/// created in one engine are visible to all, while each engine's
/// dynamic binding values stay its own.
pub struct VellumLanguage {
    registry: Arc<NsRegistry>,
}

impl VellumLanguage {
    /// Create a descriptor with a fresh registry, core primitives
    /// installed
    pub fn new() -> Result<Self, VellumError> {
        let registry = Arc::new(NsRegistry::new());
        register_primitives(&registry)?;
        Ok(VellumLanguage { registry })
    }

    /// Create a descriptor over an existing registry
    pub fn with_registry(registry: Arc<NsRegistry>) -> Self {
        VellumLanguage { registry }
    }

    pub fn registry(&self) -> &Arc<NsRegistry> {
        &self.registry
    }
}

impl ScriptLanguage for VellumLanguage {
    fn language_name(&self) -> &str {
        "Vellum"
    }

    fn engine_name(&self) -> &str {
        "vellum"
    }

    fn extensions(&self) -> &[&str] {
        &["vl"]
    }

    fn script_engine(&self) -> Result<Engine, VellumError> {
        Engine::new(self.registry.clone())
    }
}
