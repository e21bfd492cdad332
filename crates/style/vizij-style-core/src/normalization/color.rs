//! Color properties. Tweened colors travel as space-separated RGBA component
//! lists (that is what the color hooks produce); the styling engine wants a
//! functional `rgba(...)` value.

use std::borrow::Cow;

use super::{Normalization, NormalizationRegistry};
use crate::config::EngineProfile;
use crate::element::ElementData;
use crate::value::StyleValue;

pub const COLOR_PROPERTIES: &[&str] = &[
    "fill",
    "stroke",
    "stopColor",
    "color",
    "backgroundColor",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "outlineColor",
];

const FUNCTIONAL_PREFIXES: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla("];

#[derive(Clone, Debug)]
pub struct ColorProperty {
    property: String,
}

impl ColorProperty {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
        }
    }
}

impl Normalization for ColorProperty {
    fn resolve_name<'a>(&'a self, _element: &ElementData, _engine: &EngineProfile) -> Cow<'a, str> {
        Cow::Borrowed(&self.property)
    }

    fn inject_value(
        &self,
        _element: &mut ElementData,
        value: &StyleValue,
        engine: &EngineProfile,
    ) -> StyleValue {
        let text = value.to_string();
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();
        if FUNCTIONAL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
            return value.clone();
        }
        let components = match hex_components(trimmed) {
            Some(c) => c,
            None => match numeric_components(trimmed) {
                Some(c) => c,
                None => return value.clone(),
            },
        };
        StyleValue::Text(format_color(&components, engine.legacy_style_errors))
    }
}

/// `#rgb` / `#rrggbb` to `[r, g, b]`.
pub(crate) fn hex_components(s: &str) -> Option<Vec<f64>> {
    let hex = s.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |h: &str| u8::from_str_radix(h, 16).ok().map(f64::from);
    match hex.len() {
        3 => hex
            .chars()
            .map(|c| channel(&format!("{c}{c}")))
            .collect(),
        6 => (0..3).map(|i| channel(&hex[i * 2..i * 2 + 2])).collect(),
        _ => None,
    }
}

/// Three or four whitespace-separated numbers.
fn numeric_components(s: &str) -> Option<Vec<f64>> {
    let parts: Vec<f64> = s
        .split_whitespace()
        .map(|p| p.parse::<f64>().ok())
        .collect::<Option<_>>()?;
    matches!(parts.len(), 3 | 4).then_some(parts)
}

/// RGB channels are truncated to integers; alpha is kept as is. Engines
/// without RGBA support get `rgb()` with alpha dropped.
fn format_color(components: &[f64], legacy: bool) -> String {
    let rgb: Vec<String> = components
        .iter()
        .take(3)
        .map(|c| format!("{}", c.trunc()))
        .collect();
    if legacy {
        return format!("rgb({})", rgb.join(","));
    }
    let alpha = components.get(3).copied().unwrap_or(1.0);
    format!("rgba({},{alpha})", rgb.join(","))
}

pub(super) fn register(reg: &mut NormalizationRegistry) {
    for name in COLOR_PROPERTIES {
        reg.register(*name, ColorProperty::new(*name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inject(v: &str, engine: &EngineProfile) -> String {
        ColorProperty::new("color")
            .inject_value(&mut ElementData::html(), &StyleValue::from(v), engine)
            .to_string()
    }

    #[test]
    fn components_become_rgba() {
        let modern = EngineProfile::modern();
        assert_eq!(inject("255 128.7 0", &modern), "rgba(255,128,0,1)");
        assert_eq!(inject("10 20 30 0.5", &modern), "rgba(10,20,30,0.5)");
    }

    #[test]
    fn hex_is_expanded() {
        let modern = EngineProfile::modern();
        assert_eq!(inject("#f00", &modern), "rgba(255,0,0,1)");
        assert_eq!(inject("#00ff80", &modern), "rgba(0,255,128,1)");
    }

    #[test]
    fn legacy_drops_alpha() {
        assert_eq!(inject("10 20 30 0.5", &EngineProfile::legacy()), "rgb(10,20,30)");
    }

    #[test]
    fn other_values_pass_through() {
        let modern = EngineProfile::modern();
        assert_eq!(inject("rgb(1, 2, 3)", &modern), "rgb(1, 2, 3)");
        assert_eq!(inject("red", &modern), "red");
        assert_eq!(inject("1 2", &modern), "1 2");
        assert_eq!(inject("#ggg", &modern), "#ggg");
    }
}
