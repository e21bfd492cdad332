#![cfg(target_arch = "wasm32")]
use js_sys::Reflect;
use serde_json::json;
use serde_wasm_bindgen as swb;
use vizij_style_wasm::{abi_version, StyleTarget, VizijStyle};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn field(obj: &JsValue, key: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(key)).unwrap()
}

fn inline_style(el: &Element, key: &str) -> String {
    let style = field(el.as_ref(), "style");
    field(&style, key).as_string().unwrap_or_default()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn plain_style_write_lands_on_element() {
    let style = VizijStyle::new(JsValue::UNDEFINED).unwrap();
    let el = document().create_element("div").unwrap();
    let mut target = StyleTarget::new(el.clone()).unwrap();

    let out = style
        .set_property_value(&mut target, "width", JsValue::from_str("42px"), None, JsValue::UNDEFINED)
        .unwrap();
    assert_eq!(field(&out, "channel").as_string().as_deref(), Some("style"));
    assert_eq!(inline_style(&el, "width"), "42px");
}

#[wasm_bindgen_test]
fn transforms_are_cached_until_flushed() {
    let style = VizijStyle::new(JsValue::NULL).unwrap();
    let el = document().create_element("div").unwrap();
    let mut target = StyleTarget::new(el.clone()).unwrap();

    style
        .set_property_value(&mut target, "translateX", JsValue::from_str("10px"), None, JsValue::UNDEFINED)
        .unwrap();
    assert_eq!(inline_style(&el, "transform"), "");

    let flushed = style.flush_transforms(&mut target).unwrap();
    assert!(!flushed.is_null());
    assert_eq!(inline_style(&el, "transform"), "translateX(10px)");
}

#[wasm_bindgen_test]
fn svg_dimension_is_an_attribute() {
    let style = VizijStyle::new(JsValue::UNDEFINED).unwrap();
    let el = document()
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "circle")
        .unwrap();
    let mut target = StyleTarget::new(el.clone()).unwrap();
    assert!(target.is_svg());

    let out = style
        .set_property_value(&mut target, "cx", JsValue::from_f64(25.0), None, JsValue::UNDEFINED)
        .unwrap();
    assert_eq!(field(&out, "channel").as_string().as_deref(), Some("attribute"));
    assert_eq!(el.get_attribute("cx").as_deref(), Some("25"));
}

#[wasm_bindgen_test]
fn hook_merges_into_supplied_root() {
    let cfg = swb::to_value(&json!({ "debug": "trace" })).unwrap();
    let style = VizijStyle::new(cfg).unwrap();
    let el = document().create_element("div").unwrap();
    let mut target = style.target(el).unwrap();

    let out = style
        .set_property_value(
            &mut target,
            "textShadowBlur",
            JsValue::from_str("3px"),
            Some("black 1px 1px 0px".to_string()),
            JsValue::UNDEFINED,
        )
        .unwrap();
    assert_eq!(field(&out, "value").as_string().as_deref(), Some("black 1px 1px 3px"));
}

#[wasm_bindgen_test]
fn container_scroll_sets_offset() {
    let style = VizijStyle::new(JsValue::UNDEFINED).unwrap();
    let doc = document();
    let container = doc.create_element("div").unwrap();
    container
        .set_attribute("style", "width: 50px; height: 50px; overflow: scroll")
        .unwrap();
    let inner = doc.create_element("div").unwrap();
    inner.set_attribute("style", "width: 10px; height: 500px").unwrap();
    container.append_child(&inner).unwrap();
    doc.body().unwrap().append_child(&container).unwrap();

    let mut target = style.target(inner).unwrap();
    let scroll = js_sys::Object::new();
    Reflect::set(&scroll, &"direction".into(), &"Top".into()).unwrap();
    Reflect::set(&scroll, &"container".into(), container.as_ref()).unwrap();

    let out = style
        .set_property_value(&mut target, "scroll", JsValue::from_f64(30.0), None, scroll.into())
        .unwrap();
    assert_eq!(field(&out, "channel").as_string().as_deref(), Some("scroll"));
    assert_eq!(container.scroll_top(), 30);
    container.remove();
}
