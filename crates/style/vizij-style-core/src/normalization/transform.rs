//! Transform sub-properties. Each one reports `transform` as its concrete
//! name and records its term in the element's transform cache.

use std::borrow::Cow;

use super::{Normalization, NormalizationRegistry, TRANSFORM};
use crate::config::EngineProfile;
use crate::element::ElementData;
use crate::value::StyleValue;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Translate,
    Scale,
    Skew,
    Rotate,
    Perspective,
}

pub const TRANSFORMS_2D: &[(&str, TransformKind)] = &[
    ("translateX", TransformKind::Translate),
    ("translateY", TransformKind::Translate),
    ("scale", TransformKind::Scale),
    ("scaleX", TransformKind::Scale),
    ("scaleY", TransformKind::Scale),
    ("skewX", TransformKind::Skew),
    ("skewY", TransformKind::Skew),
    ("rotateZ", TransformKind::Rotate),
];

pub const TRANSFORMS_3D: &[(&str, TransformKind)] = &[
    ("transformPerspective", TransformKind::Perspective),
    ("translateZ", TransformKind::Translate),
    ("scaleZ", TransformKind::Scale),
    ("rotateX", TransformKind::Rotate),
    ("rotateY", TransformKind::Rotate),
];

const LENGTH_UNITS: &[&str] = &["%", "px", "em", "rem", "vw", "vh"];

#[derive(Clone, Debug)]
pub struct TransformComponent {
    name: String,
    kind: TransformKind,
}

impl TransformComponent {
    pub fn new(name: impl Into<String>, kind: TransformKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }
}

impl Normalization for TransformComponent {
    fn resolve_name<'a>(&'a self, _element: &ElementData, _engine: &EngineProfile) -> Cow<'a, str> {
        Cow::Borrowed(TRANSFORM)
    }

    fn inject_value(
        &self,
        element: &mut ElementData,
        value: &StyleValue,
        _engine: &EngineProfile,
    ) -> StyleValue {
        let text = value.to_string();
        if accepts(self.kind, text.trim()) {
            element
                .transform_cache
                .set(self.name.clone(), format!("({})", text.trim()));
        }
        element
            .transform_cache
            .get(&self.name)
            .map(StyleValue::from)
            .unwrap_or_default()
    }
}

/// Unit check per family; a rejected value leaves the cached term as it was.
fn accepts(kind: TransformKind, text: &str) -> bool {
    let ends_with_digit = text.chars().last().is_some_and(|c| c.is_ascii_digit());
    let lower = text.to_ascii_lowercase();
    match kind {
        TransformKind::Translate => {
            ends_with_digit || LENGTH_UNITS.iter().any(|u| lower.ends_with(u))
        }
        TransformKind::Scale => ends_with_digit,
        TransformKind::Skew | TransformKind::Rotate => ends_with_digit || lower.ends_with("deg"),
        TransformKind::Perspective => true,
    }
}

pub(super) fn register(reg: &mut NormalizationRegistry, engine: &EngineProfile) {
    for (name, kind) in TRANSFORMS_2D {
        reg.register(*name, TransformComponent::new(*name, *kind));
    }
    if engine.supports_3d_transforms {
        for (name, kind) in TRANSFORMS_3D {
            reg.register(*name, TransformComponent::new(*name, *kind));
        }
    }
}
