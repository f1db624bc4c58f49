use crate::bindings;
use crate::dom::{self, add_listener};
use crate::tooltip;
use tagsphere_core::{InputQueue, SceneInput};
use web_sys as web;

/// Delegated hover, leave and click handling for every label in
/// `container`, including ones created after this call.
pub fn wire_label_handlers(
    document: &web::Document,
    container: &web::HtmlElement,
    inputs: &InputQueue,
) {
    let target: web::EventTarget = container.clone().into();

    let doc = document.clone();
    add_listener(&target, "mouseover", move |ev: web::MouseEvent| {
        if let Some(tag) = dom::label_target(&ev) {
            let data = tag.dataset();
            let text = data.get("text").unwrap_or_default();
            let weight = data.get("weight").unwrap_or_default();
            tooltip::show(
                &doc,
                &bindings::tooltip_text(&text, &weight),
                ev.page_x(),
                ev.page_y(),
            );
        }
    });

    let doc = document.clone();
    add_listener(&target, "mouseout", move |ev: web::MouseEvent| {
        if dom::label_target(&ev).is_some() {
            tooltip::hide(&doc);
        }
    });

    let inputs = inputs.clone();
    add_listener(&target, "click", move |ev: web::MouseEvent| {
        if let Some(tag) = dom::label_target(&ev) {
            ev.prevent_default();
            match tag.dataset().get("index").and_then(|i| i.parse().ok()) {
                Some(index) => inputs.push(SceneInput::LabelClick { index }),
                None => log::warn!("[tag] clicked element without an index"),
            }
        }
    });
}
