use crate::constants::{CONFIG_ATTRIBUTES, DATA_SRC_ATTRIBUTE, DEFAULT_DATA_URL, TAG_CLASS};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// `(key, value)` pairs for every config attribute present on `el`.
pub fn config_overrides(el: &web::Element) -> Vec<(String, String)> {
    CONFIG_ATTRIBUTES
        .iter()
        .filter_map(|key| {
            el.get_attribute(&format!("data-{}", key))
                .map(|value| (key.to_string(), value))
        })
        .collect()
}

pub fn data_url(el: &web::Element) -> String {
    el.get_attribute(DATA_SRC_ATTRIBUTE)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

/// The label element an event landed on, if any.
pub fn label_target(ev: &web::Event) -> Option<web::HtmlElement> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    let tag = el.closest(&format!(".{}", TAG_CLASS)).ok()??;
    tag.dyn_into::<web::HtmlElement>().ok()
}

pub fn is_inside(container: &web::Element, ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}
