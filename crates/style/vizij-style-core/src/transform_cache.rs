//! Per-element accumulator of transform sub-components.
//!
//! Transform sub-properties (translateX, rotateZ, ...) are never written to the
//! element one by one. Each write lands here, keyed by sub-property, and a
//! later flush composes the whole cache into a single `transform` value.
//! Entries keep their first insertion order so the composed string is stable
//! across ticks.

use indexmap::IndexMap;

use crate::value::leading_float;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformCache {
    entries: IndexMap<String, String>,
}

impl TransformCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for a sub-property, including its parentheses, e.g. `"(10px)"`.
    /// `None` means unset, not zero.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Overwrite one sub-property. Other keys are untouched.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Compose the CSS `transform` value. `transformPerspective` must lead the
    /// list to affect the other terms, so it is hoisted to the front.
    pub fn compose_css(&self) -> String {
        let mut terms: Vec<String> = Vec::with_capacity(self.entries.len());
        let mut perspective = None;
        for (name, value) in self.iter() {
            if name == "transformPerspective" {
                perspective = Some(value);
                continue;
            }
            terms.push(format!("{name}{value}"));
        }
        if let Some(p) = perspective {
            terms.insert(0, format!("perspective{p}"));
        }
        terms.join(" ")
    }

    /// Compose SVG attribute syntax. SVG has no per-axis translate/scale
    /// functions, so axes are grouped into one `translate(x y)`/`scale(sx sy)`
    /// term, emitted at the position of the first member seen.
    pub fn compose_svg(&self) -> String {
        let num = |name: &str, fallback: f64| -> f64 {
            self.get(name)
                .and_then(|v| leading_float(v.trim_start_matches('(')))
                .unwrap_or(fallback)
        };
        let mut emitted: Vec<&'static str> = Vec::new();
        let mut terms: Vec<String> = Vec::new();
        for (name, _) in self.iter() {
            let group = if name.starts_with("translate") {
                "translate"
            } else if name.starts_with("scale") {
                "scale"
            } else if name.starts_with("rotate") {
                "rotate"
            } else if name == "skewX" {
                "skewX"
            } else if name == "skewY" {
                "skewY"
            } else {
                continue;
            };
            if emitted.contains(&group) {
                continue;
            }
            emitted.push(group);
            let term = match group {
                "translate" => format!("translate({} {})", num("translateX", 0.0), num("translateY", 0.0)),
                "scale" => {
                    let uniform = num("scale", 1.0);
                    if uniform != 1.0 {
                        format!("scale({uniform} {uniform})")
                    } else {
                        format!("scale({} {})", num("scaleX", 1.0), num("scaleY", 1.0))
                    }
                }
                "rotate" => format!("rotate({} 0 0)", num("rotateZ", 0.0)),
                other => format!("{other}({})", num(other, 0.0)),
            };
            terms.push(term);
        }
        terms.join(" ")
    }
}
