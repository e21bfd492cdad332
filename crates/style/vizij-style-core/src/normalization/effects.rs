//! Clip rectangles and filter-based effects (blur, legacy opacity).

use std::borrow::Cow;

use super::{Normalization, NormalizationRegistry};
use crate::config::EngineProfile;
use crate::element::ElementData;
use crate::value::StyleValue;

/// `clip` takes the four edges wrapped in `rect(...)`.
#[derive(Clone, Debug, Default)]
pub struct Clip;

impl Normalization for Clip {
    fn resolve_name<'a>(&'a self, _element: &ElementData, _engine: &EngineProfile) -> Cow<'a, str> {
        Cow::Borrowed("clip")
    }

    fn inject_value(
        &self,
        _element: &mut ElementData,
        value: &StyleValue,
        _engine: &EngineProfile,
    ) -> StyleValue {
        let text = value.to_string();
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower == "auto" || lower.starts_with("rect(") {
            return value.clone();
        }
        StyleValue::Text(format!("rect({trimmed})"))
    }
}

/// Synthetic `blur` written through `filter`.
#[derive(Clone, Debug, Default)]
pub struct Blur;

impl Normalization for Blur {
    fn resolve_name<'a>(&'a self, _element: &ElementData, _engine: &EngineProfile) -> Cow<'a, str> {
        Cow::Borrowed("filter")
    }

    fn inject_value(
        &self,
        _element: &mut ElementData,
        value: &StyleValue,
        _engine: &EngineProfile,
    ) -> StyleValue {
        match value.as_number() {
            Some(n) if n != 0.0 => match value {
                StyleValue::Number(n) => StyleValue::Text(format!("blur({n}px)")),
                StyleValue::Text(s) => StyleValue::Text(format!("blur({})", s.trim())),
            },
            _ => StyleValue::from("none"),
        }
    }
}

/// Opacity, expressed through the alpha filter on engines that need it.
#[derive(Clone, Debug, Default)]
pub struct Opacity;

impl Normalization for Opacity {
    fn resolve_name<'a>(&'a self, _element: &ElementData, engine: &EngineProfile) -> Cow<'a, str> {
        if engine.legacy_opacity_filter {
            Cow::Borrowed("filter")
        } else {
            Cow::Borrowed("opacity")
        }
    }

    fn inject_value(
        &self,
        _element: &mut ElementData,
        value: &StyleValue,
        engine: &EngineProfile,
    ) -> StyleValue {
        if !engine.legacy_opacity_filter {
            return value.clone();
        }
        let percent = (value.as_number().unwrap_or(1.0) * 100.0).trunc();
        StyleValue::Text(format!("alpha(opacity={percent})"))
    }
}

pub(super) fn register(reg: &mut NormalizationRegistry) {
    reg.register("clip", Clip);
    reg.register("blur", Blur);
    reg.register("opacity", Opacity);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: &dyn Normalization, v: StyleValue, engine: &EngineProfile) -> (String, String) {
        let mut el = ElementData::html();
        let name = n.resolve_name(&el, engine).into_owned();
        (name, n.inject_value(&mut el, &v, engine).to_string())
    }

    #[test]
    fn clip_wraps_edges() {
        let e = EngineProfile::modern();
        assert_eq!(run(&Clip, "0px 10px 20px 0px".into(), &e).1, "rect(0px 10px 20px 0px)");
        assert_eq!(run(&Clip, "rect(1px 1px 1px 1px)".into(), &e).1, "rect(1px 1px 1px 1px)");
        assert_eq!(run(&Clip, "auto".into(), &e).1, "auto");
    }

    #[test]
    fn blur_zero_is_none() {
        let e = EngineProfile::modern();
        assert_eq!(run(&Blur, 4.0.into(), &e), ("filter".into(), "blur(4px)".into()));
        assert_eq!(run(&Blur, "2em".into(), &e).1, "blur(2em)");
        assert_eq!(run(&Blur, 0.0.into(), &e).1, "none");
    }

    #[test]
    fn opacity_filter_on_legacy_engines() {
        assert_eq!(
            run(&Opacity, 0.5.into(), &EngineProfile::modern()),
            ("opacity".into(), "0.5".into())
        );
        assert_eq!(
            run(&Opacity, 0.456.into(), &EngineProfile::legacy()),
            ("filter".into(), "alpha(opacity=45)".into())
        );
    }
}
