//! Vendor-prefix resolution.
//!
//! Property names are in the camelCase form used by style objects
//! (`transform`, `WebkitTransform`). The first spelling the engine supports
//! wins and is memoized for the lifetime of the resolver.

use std::cell::RefCell;
use std::fmt;

use hashbrown::{HashMap, HashSet};

pub const VENDOR_PREFIXES: &[&str] = &["", "Webkit", "Moz", "ms", "O"];

/// Capability probe: does the engine's style object expose `name`?
pub trait StyleSupport {
    fn supports(&self, name: &str) -> bool;
}

/// Probe backed by a fixed set of names, for hosts without a live style object.
#[derive(Clone, Debug, Default)]
pub struct StaticSupport {
    names: HashSet<String>,
}

impl StaticSupport {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl StyleSupport for StaticSupport {
    fn supports(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Probe that accepts every unprefixed name.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unprefixed;

impl StyleSupport for Unprefixed {
    fn supports(&self, _name: &str) -> bool {
        true
    }
}

pub struct VendorPrefixResolver {
    support: Box<dyn StyleSupport>,
    matches: RefCell<HashMap<String, String>>,
}

impl fmt::Debug for VendorPrefixResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorPrefixResolver")
            .field("memoized", &self.matches.borrow().len())
            .finish()
    }
}

impl VendorPrefixResolver {
    pub fn new(support: impl StyleSupport + 'static) -> Self {
        Self {
            support: Box::new(support),
            matches: RefCell::new(HashMap::new()),
        }
    }

    /// Supported spelling of `property`, or `property` itself when no
    /// spelling is supported. Misses are not memoized.
    pub fn resolve(&self, property: &str) -> String {
        if let Some(hit) = self.matches.borrow().get(property) {
            return hit.clone();
        }
        for vendor in VENDOR_PREFIXES {
            let candidate = if vendor.is_empty() {
                property.to_string()
            } else {
                format!("{vendor}{}", capitalize(property))
            };
            if self.support.supports(&candidate) {
                self.matches
                    .borrow_mut()
                    .insert(property.to_string(), candidate.clone());
                return candidate;
            }
        }
        property.to_string()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
