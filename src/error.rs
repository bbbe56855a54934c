//! Typed errors for the vellum runtime.
//!
//! A single error enum covers the registry, the reader, the engine, and
//! the bindings adapter's refused operations. Resolution failures inside
//! the adapter's `get`/`insert` never surface as errors; they collapse
//! to absent results at the map boundary.

use std::error::Error as StdError;
use std::fmt;

/// Typed error enum for vellum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VellumError {
    /// A map operation the bindings contract refuses unconditionally
    /// (`remove`, `clear`).
    UnsupportedOperation {
        operation: String,
    },

    /// A namespace or variable name segment that cannot be interned.
    InvalidName {
        name: String,
        reason: String,
    },

    /// A namespace referenced by name does not exist.
    NamespaceNotFound {
        name: String,
    },

    /// A symbol with no mapping in the namespace it was resolved against.
    UnresolvedSymbol {
        name: String,
    },

    /// A symbol that resolved to a variable with no binding in effect.
    UnboundSymbol {
        name: String,
    },

    /// Malformed source text given to the reader.
    SyntaxError {
        message: String,
    },

    // Generic error for fallback
    Generic {
        message: String,
    },
}

impl VellumError {
    /// Create an unsupported-operation error
    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        VellumError::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    /// Create an invalid-name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        VellumError::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a namespace-not-found error
    pub fn namespace_not_found(name: impl Into<String>) -> Self {
        VellumError::NamespaceNotFound { name: name.into() }
    }

    /// Create an unresolved-symbol error
    pub fn unresolved_symbol(name: impl Into<String>) -> Self {
        VellumError::UnresolvedSymbol { name: name.into() }
    }

    /// Create an unbound-symbol error
    pub fn unbound_symbol(name: impl Into<String>) -> Self {
        VellumError::UnboundSymbol { name: name.into() }
    }

    /// Create a syntax error
    pub fn syntax_error(message: impl Into<String>) -> Self {
        VellumError::SyntaxError {
            message: message.into(),
        }
    }

    /// Get a human-readable description of the error
    pub fn description(&self) -> String {
        match self {
            VellumError::UnsupportedOperation { operation } => {
                format!("Unsupported operation: {}", operation)
            }
            VellumError::InvalidName { name, reason } => {
                format!("Invalid name '{}': {}", name, reason)
            }
            VellumError::NamespaceNotFound { name } => {
                format!("Namespace not found: {}", name)
            }
            VellumError::UnresolvedSymbol { name } => {
                format!("Unable to resolve symbol: {}", name)
            }
            VellumError::UnboundSymbol { name } => {
                format!("Unbound symbol: {}", name)
            }
            VellumError::SyntaxError { message } => {
                format!("Syntax error: {}", message)
            }
            VellumError::Generic { message } => format!("Error: {}", message),
        }
    }
}

impl fmt::Display for VellumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl StdError for VellumError {}

/// Conversion from VellumError to String for compatibility
impl From<VellumError> for String {
    fn from(err: VellumError) -> String {
        err.description()
    }
}

/// Conversion from String to VellumError for fallback
impl From<String> for VellumError {
    fn from(msg: String) -> Self {
        VellumError::Generic { message: msg }
    }
}

impl From<&str> for VellumError {
    fn from(msg: &str) -> Self {
        VellumError::Generic {
            message: msg.to_string(),
        }
    }
}
