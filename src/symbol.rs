//! Qualified symbol names.
//!
//! A flat string key is split into (namespace, bare name) at the *last*
//! occurrence of `.`; keys without a separator belong to whatever
//! default namespace the caller resolves against. The split is purely
//! syntactic; no namespace existence check happens here.

use std::fmt;

/// The namespace separator in flat string keys
pub const NS_SEPARATOR: char = '.';

/// A parsed symbol: optional namespace qualifier plus bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sym {
    ns: Option<String>,
    name: String,
}

impl Sym {
    /// Parse a flat key, splitting at the last `.`.
    ///
    /// `"a.b.c"` parses as namespace `"a.b"`, name `"c"`; `"c"` parses
    /// as unqualified. Empty segments are preserved as-is; rejecting
    /// them is the registry's job.
    pub fn parse(key: &str) -> Self {
        match key.rfind(NS_SEPARATOR) {
            Some(dot) => Sym {
                ns: Some(key[..dot].to_string()),
                name: key[dot + 1..].to_string(),
            },
            None => Sym {
                ns: None,
                name: key.to_string(),
            },
        }
    }

    /// The namespace qualifier, if the key carried one
    pub fn ns(&self) -> Option<&str> {
        self.ns.as_deref()
    }

    /// The bare name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_qualified(&self) -> bool {
        self.ns.is_some()
    }

    /// Resolve to a concrete (namespace, name) pair, falling back to
    /// `default_ns` for unqualified symbols.
    pub fn resolve<'a>(&'a self, default_ns: &'a str) -> (&'a str, &'a str) {
        (self.ns.as_deref().unwrap_or(default_ns), &self.name)
    }
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ns {
            Some(ns) => write!(f, "{}{}{}", ns, NS_SEPARATOR, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
