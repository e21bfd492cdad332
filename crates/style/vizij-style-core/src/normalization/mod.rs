//! Normalization registry.
//!
//! A normalization translates a logical property (including synthetic ones
//! such as `translateX`) into the concrete property the engine understands and
//! rewrites the value to match. Families:
//! - [`transform`]: per-axis transform terms, accumulated in the transform cache
//! - [`color`]: RGBA component lists to functional color syntax
//! - [`effects`]: clip, blur and opacity

pub mod color;
pub mod effects;
pub mod transform;

use std::borrow::Cow;
use std::fmt;

use hashbrown::HashMap;

use crate::config::EngineProfile;
use crate::element::ElementData;
use crate::value::StyleValue;

/// Concrete name of the composite transform property.
pub const TRANSFORM: &str = "transform";

pub trait Normalization: fmt::Debug {
    /// Concrete property name for this element. Depends only on element and
    /// engine capabilities, never on the value being written.
    fn resolve_name<'a>(&'a self, element: &ElementData, engine: &EngineProfile) -> Cow<'a, str>;

    /// Rewrite `value` for the concrete property. Only transform families may
    /// touch `element` (its transform cache); everything else must be pure.
    fn inject_value(
        &self,
        element: &mut ElementData,
        value: &StyleValue,
        engine: &EngineProfile,
    ) -> StyleValue;
}

#[derive(Default)]
pub struct NormalizationRegistry {
    entries: HashMap<String, Box<dyn Normalization>>,
}

impl fmt::Debug for NormalizationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizationRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl NormalizationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard families for `engine`. 3-D transform terms are only
    /// registered when the engine can render them.
    pub fn standard(engine: &EngineProfile) -> Self {
        let mut reg = Self::new();
        transform::register(&mut reg, engine);
        color::register(&mut reg);
        effects::register(&mut reg);
        reg
    }

    pub fn register(&mut self, property: impl Into<String>, entry: impl Normalization + 'static) {
        self.entries.insert(property.into(), Box::new(entry));
    }

    pub fn get(&self, property: &str) -> Option<&dyn Normalization> {
        self.entries.get(property).map(|b| b.as_ref())
    }

    pub fn has(&self, property: &str) -> bool {
        self.entries.contains_key(property)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_families_follow_engine() {
        let modern = NormalizationRegistry::standard(&EngineProfile::modern());
        let legacy = NormalizationRegistry::standard(&EngineProfile::legacy());
        for name in ["translateX", "rotateZ", "color", "fill", "clip", "blur", "opacity"] {
            assert!(modern.has(name), "{name}");
            assert!(legacy.has(name), "{name}");
        }
        assert!(modern.has("rotateX"));
        assert!(modern.has("transformPerspective"));
        assert!(!legacy.has("rotateX"));
        assert!(!legacy.has("translateZ"));
    }
}
