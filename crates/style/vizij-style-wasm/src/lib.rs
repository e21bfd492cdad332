//! wasm-bindgen surface for the style dispatcher.
//!
//! JS usage:
//!   const style = new VizijStyle({ debug: "off" });
//!   const target = new StyleTarget(element);
//!   style.set_property_value(target, "translateX", "10px");
//!   style.flush_transforms(target);

pub mod dom;

use js_sys::Reflect;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use vizij_style::{
    flush_transform_cache, Config, Dispatcher, ElementData, ScrollDirection, ScrollRequest,
    StyleRegistry, StyleValue, WriteRequest,
};

use crate::dom::{DomElement, DomScrollContainer, DomStyleSupport, WindowViewport};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_error(context: &str, err: &JsValue) -> JsError {
    JsError::new(&format!(
        "{context}: {}",
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    ))
}

/// Registries and configuration for one engine. Build once per page.
#[wasm_bindgen]
pub struct VizijStyle {
    config: Config,
    registry: StyleRegistry,
}

/// An element plus the animation record the dispatcher reads and writes.
#[wasm_bindgen]
pub struct StyleTarget {
    dom: DomElement,
    data: ElementData,
}

#[wasm_bindgen]
impl StyleTarget {
    #[wasm_bindgen(constructor)]
    pub fn new(element: Element) -> Result<StyleTarget, JsError> {
        let dom = DomElement::new(element).map_err(|e| js_error("style target", &e))?;
        let data = if dom.is_svg() {
            ElementData::svg()
        } else {
            ElementData::html()
        };
        Ok(StyleTarget { dom, data })
    }

    #[wasm_bindgen(getter, js_name = isSvg)]
    pub fn is_svg(&self) -> bool {
        self.data.is_svg
    }

    /// Cached transform terms as `[name, value]` pairs in composition order.
    #[wasm_bindgen(js_name = transform_cache)]
    pub fn transform_cache(&self) -> Result<JsValue, JsError> {
        let entries: Vec<(&str, &str)> = self.data.transform_cache.iter().collect();
        swb::to_value(&entries).map_err(|e| JsError::new(&format!("transform cache error: {e}")))
    }

    #[wasm_bindgen(js_name = clear_transforms)]
    pub fn clear_transforms(&mut self) {
        self.data.transform_cache.clear();
    }
}

struct ScrollOptions {
    direction: ScrollDirection,
    alternate_value: f64,
    container: Option<Element>,
}

fn parse_scroll(scroll: &JsValue) -> Result<Option<ScrollOptions>, JsError> {
    if jsvalue_is_undefined_or_null(scroll) {
        return Ok(None);
    }
    let get = |key: &str| Reflect::get(scroll, &JsValue::from_str(key)).map_err(|e| js_error("scroll", &e));
    let direction = match get("direction")?.as_string().as_deref() {
        Some("Left") => ScrollDirection::Left,
        Some("Top") | None => ScrollDirection::Top,
        Some(other) => return Err(JsError::new(&format!("scroll direction '{other}'"))),
    };
    let alternate_value = get("alternateValue")?.as_f64().unwrap_or(0.0);
    let container = get("container")?;
    let container = if jsvalue_is_undefined_or_null(&container) {
        None
    } else {
        Some(
            container
                .dyn_into::<Element>()
                .map_err(|e| js_error("scroll container", &e))?,
        )
    };
    Ok(Some(ScrollOptions {
        direction,
        alternate_value,
        container,
    }))
}

fn style_value(value: &JsValue) -> Result<StyleValue, JsError> {
    if let Some(n) = value.as_f64() {
        return Ok(StyleValue::Number(n));
    }
    value
        .as_string()
        .map(StyleValue::Text)
        .ok_or_else(|| JsError::new("value must be a number or a string"))
}

#[wasm_bindgen]
impl VizijStyle {
    /// Create a dispatcher context. Pass a JSON config object or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<VizijStyle, JsError> {
        #[cfg(feature = "console_error")]
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let support = DomStyleSupport::new().map_err(|e| js_error("style probe", &e))?;
        let registry = StyleRegistry::standard(&cfg, support)
            .map_err(|e| JsError::new(&format!("registry error: {e}")))?;
        Ok(VizijStyle {
            config: cfg,
            registry,
        })
    }

    /// Wrap `element` for dispatch. Same as `new StyleTarget(element)`.
    pub fn target(&self, element: Element) -> Result<StyleTarget, JsError> {
        StyleTarget::new(element)
    }

    /// Dispatch one property write. `scroll` is `{ direction: "Left" | "Top",
    /// alternateValue?: number, container?: Element }` and only read for
    /// `"scroll"`. Returns `{ property, value, channel }`.
    #[wasm_bindgen(js_name = set_property_value)]
    pub fn set_property_value(
        &self,
        target: &mut StyleTarget,
        property: &str,
        value: JsValue,
        root_value: Option<String>,
        scroll: JsValue,
    ) -> Result<JsValue, JsError> {
        let value = style_value(&value)?;
        let scroll = parse_scroll(&scroll)?;

        let mut viewport = None;
        let mut container = None;
        let mut request = WriteRequest::new(property, value);
        if let Some(root) = root_value.as_deref() {
            request = request.with_root_value(root);
        }
        if let Some(opts) = scroll {
            let scroll_request = match opts.container {
                Some(el) => ScrollRequest::container(
                    container.insert(DomScrollContainer::new(el)),
                    opts.direction,
                ),
                None => ScrollRequest::window(
                    viewport.insert(
                        WindowViewport::current().ok_or_else(|| JsError::new("no window"))?,
                    ),
                    opts.direction,
                    opts.alternate_value,
                ),
            };
            request = request.with_scroll(scroll_request);
        }

        let resolved = Dispatcher::new(&self.registry, &self.config)
            .apply(&mut target.dom, &mut target.data, request)
            .map_err(|e| JsError::new(&format!("set_property_value: {e}")))?;
        swb::to_value(&resolved).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Write the target's cached transform terms as one `transform` value.
    /// Returns the resolved write, or null when nothing is cached.
    #[wasm_bindgen(js_name = flush_transforms)]
    pub fn flush_transforms(&self, target: &mut StyleTarget) -> Result<JsValue, JsError> {
        let dispatcher = Dispatcher::new(&self.registry, &self.config);
        match flush_transform_cache(&dispatcher, &mut target.dom, &mut target.data) {
            Ok(Some(resolved)) => {
                swb::to_value(&resolved).map_err(|e| JsError::new(&format!("outputs error: {e}")))
            }
            Ok(None) => Ok(JsValue::NULL),
            Err(e) => Err(JsError::new(&format!("flush_transforms: {e}"))),
        }
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
