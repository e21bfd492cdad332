//! DOM implementations of the dispatcher's host traits.
//!
//! Styles are assigned through the element's style object by camelCase name
//! (`style.WebkitTransform = ...`), which is the naming the registries use.

use js_sys::Reflect;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, SvgElement, Window};

use vizij_style::{
    CommitError, LookupError, ScrollContainer, ScrollDirection, StyleElement, StyleSupport,
    Viewport,
};

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `WebkitTransform` -> `-webkit-transform`, `msTransform` -> `-ms-transform`.
pub fn hyphenate(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

pub struct DomElement {
    element: Element,
    style: JsValue,
}

impl DomElement {
    pub fn new(element: Element) -> Result<Self, JsValue> {
        let style = Reflect::get(&element, &JsValue::from_str("style"))?;
        Ok(Self { element, style })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn is_svg(&self) -> bool {
        self.element.dyn_ref::<SvgElement>().is_some()
    }
}

impl StyleElement for DomElement {
    fn set_style(&mut self, name: &str, value: &str) -> Result<(), CommitError> {
        Reflect::set(&self.style, &JsValue::from_str(name), &JsValue::from_str(value))
            .map(|_| ())
            .map_err(|e| CommitError::Host(describe(&e)))
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), CommitError> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| CommitError::Host(describe(&e)))
    }

    fn current_value(&self, property: &str) -> Result<String, LookupError> {
        let window = web_sys::window().ok_or_else(|| LookupError::Host("no window".into()))?;
        let computed = window
            .get_computed_style(&self.element)
            .map_err(|e| LookupError::Host(describe(&e)))?
            .ok_or_else(|| LookupError::Unavailable {
                property: property.to_string(),
            })?;
        let value = computed
            .get_property_value(&hyphenate(property))
            .map_err(|e| LookupError::Host(describe(&e)))?;
        if value.is_empty() {
            return Err(LookupError::Unavailable {
                property: property.to_string(),
            });
        }
        Ok(value)
    }
}

pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for WindowViewport {
    fn scroll_to(&mut self, x: f64, y: f64) {
        self.window.scroll_to_with_x_and_y(x, y);
    }
}

pub struct DomScrollContainer {
    element: Element,
}

impl DomScrollContainer {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ScrollContainer for DomScrollContainer {
    fn set_scroll_offset(
        &mut self,
        direction: ScrollDirection,
        offset: f64,
    ) -> Result<(), CommitError> {
        let key = match direction {
            ScrollDirection::Left => "scrollLeft",
            ScrollDirection::Top => "scrollTop",
        };
        match Reflect::set(&self.element, &JsValue::from_str(key), &JsValue::from_f64(offset)) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CommitError::Host(format!("{key} is not writable"))),
            Err(e) => Err(CommitError::Host(describe(&e))),
        }
    }
}

/// Probes a detached `<div>`'s style object: a supported property reads back as a string.
pub struct DomStyleSupport {
    style: JsValue,
}

impl DomStyleSupport {
    pub fn new() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let probe = document.create_element("div")?;
        let style = Reflect::get(&probe, &JsValue::from_str("style"))?;
        Ok(Self { style })
    }
}

impl StyleSupport for DomStyleSupport {
    fn supports(&self, name: &str) -> bool {
        Reflect::get(&self.style, &JsValue::from_str(name))
            .map(|v| v.is_string())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::hyphenate;

    #[test]
    fn hyphenates_style_names() {
        assert_eq!(hyphenate("backgroundColor"), "background-color");
        assert_eq!(hyphenate("WebkitTransform"), "-webkit-transform");
        assert_eq!(hyphenate("msTransform"), "-ms-transform");
        assert_eq!(hyphenate("opacity"), "opacity");
    }
}
