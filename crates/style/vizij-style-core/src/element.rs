//! Host element contract and the per-element animation record.

use crate::error::{CommitError, LookupError};
use crate::transform_cache::TransformCache;

/// The element being animated. Adapters (DOM, headless test doubles)
/// implement this and the dispatcher performs exactly one write per call.
pub trait StyleElement {
    /// Assign `style[name] = value`. `name` is the concrete, possibly vendor-prefixed name.
    fn set_style(&mut self, name: &str, value: &str) -> Result<(), CommitError>;

    /// Assign an attribute. Only used for SVG dimensional properties.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), CommitError>;

    /// Current resolved value of `property`, used to seed hook injection when
    /// the caller has no cached root value.
    fn current_value(&self, property: &str) -> Result<String, LookupError>;
}

/// Animation state the scheduler keeps per element and lends to the dispatcher.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementData {
    pub is_svg: bool,
    pub transform_cache: TransformCache,
}

impl ElementData {
    pub fn html() -> Self {
        Self::default()
    }

    pub fn svg() -> Self {
        Self {
            is_svg: true,
            ..Self::default()
        }
    }
}
