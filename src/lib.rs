//! # Vellum - An Embeddable Namespace/Dynamic-Variable Runtime
//!
//! Vellum keeps script-visible state in named namespaces of dynamic
//! variables and presents it to host applications as a flat,
//! string-keyed bindings map.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use vellum::{register_primitives, Engine, NsRegistry, Value};
//!
//! let registry = Arc::new(NsRegistry::new());
//! register_primitives(&registry).unwrap();
//!
//! let mut engine = Engine::new(registry).unwrap();
//! engine.put("greeting", Value::from("hello"));
//! assert_eq!(engine.get("greeting"), Some(Value::from("hello")));
//! assert_eq!(engine.eval("greeting").unwrap(), Value::from("hello"));
//! ```
//!
//! ## Architecture
//!
//! State flows through three layers:
//!
//! 1. **Registry** - named namespaces mapping bare names to variables
//!    and native members, shared process-wide
//! 2. **Binding frames** - per-context dynamic overrides that shadow a
//!    variable's root without writing it
//! 3. **Bindings adapter** - the map-style contract (insert/lookup
//!    always allowed, removal never) the host embeds against
//!
//! Keys qualify a namespace with `.` (split at the last occurrence);
//! unqualified keys land in the `user` namespace. Deletion of dynamic
//! bindings is not part of the contract: `remove` and `clear` fail
//! unconditionally.

pub mod binding;
pub mod bindings;
pub mod engine;
pub mod error;
pub mod language;
pub mod namespace;
pub mod primitives;
pub mod reader;
pub mod symbol;
pub mod value;
pub mod var;

pub use binding::BindingStack;
pub use bindings::Bindings;
pub use engine::Engine;
pub use error::VellumError;
pub use language::{ScriptLanguage, VellumLanguage};
pub use namespace::{NsMember, NsRegistry, CORE_NS, USER_NS};
pub use primitives::register_primitives;
pub use reader::{read_str, Form};
pub use symbol::Sym;
pub use value::{NativeFn, Value};
pub use var::{Binding, Var};
