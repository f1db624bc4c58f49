use crate::bindings;
use crate::constants::*;
use crate::dom::{self, add_listener, set_style};
use tagsphere_core::{InputQueue, PaletteName};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the control buttons and the palette selector. Missing controls are
/// skipped; the sphere runs without them.
pub fn wire_controls(document: &web::Document, inputs: &InputQueue, current: PaletteName) {
    let controls = match document.query_selector(CONTROLS_SELECTOR) {
        Ok(Some(el)) => el,
        _ => {
            log::info!("[controls] no {} container; controls disabled", CONTROLS_SELECTOR);
            return;
        }
    };
    let target: web::EventTarget = controls.clone().into();

    let inputs_click = inputs.clone();
    add_listener(&target, "click", move |ev: web::MouseEvent| {
        let Some(button) = button_target(&ev) else {
            return;
        };
        if let Some(cmd) = bindings::command_for_button(&button.id()) {
            log::debug!("[controls] {:?}", cmd);
            inputs_click.push(cmd);
        }
    });

    add_listener(&target, "mouseover", |ev: web::MouseEvent| {
        if let Some(button) = button_target(&ev) {
            set_style(&button, "background", BUTTON_BACKGROUND_HOVER);
        }
    });
    add_listener(&target, "mouseout", |ev: web::MouseEvent| {
        if let Some(button) = button_target(&ev) {
            set_style(&button, "background", BUTTON_BACKGROUND);
        }
    });

    if let Some(select) = palette_selector(document, &controls) {
        populate(document, &select, current);
        let inputs_change = inputs.clone();
        let select_for_change = select.clone();
        let select_target: web::EventTarget = select.into();
        add_listener(&select_target, "change", move |_ev: web::Event| {
            let value = select_for_change.value();
            match bindings::command_for_palette(&value) {
                Some(cmd) => inputs_change.push(cmd),
                None => log::warn!("[controls] unknown palette {:?}", value),
            }
        });
    }
}

fn button_target(ev: &web::Event) -> Option<web::HtmlElement> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.closest("button").ok()??.dyn_into::<web::HtmlElement>().ok()
}

/// The page's selector, or a new one appended to the controls.
fn palette_selector(
    document: &web::Document,
    controls: &web::Element,
) -> Option<web::HtmlSelectElement> {
    if let Some(existing) = dom::element_by_id::<web::HtmlSelectElement>(document, PALETTE_SELECTOR_ID)
    {
        return Some(existing);
    }
    let select = document
        .create_element("select")
        .ok()?
        .dyn_into::<web::HtmlSelectElement>()
        .ok()?;
    select.set_id(PALETTE_SELECTOR_ID);
    _ = controls.append_child(&select);
    Some(select)
}

fn populate(document: &web::Document, select: &web::HtmlSelectElement, current: PaletteName) {
    if select.length() > 0 {
        select.set_value(current.as_str());
        return;
    }
    for palette in PaletteName::ALL {
        let option = match document
            .create_element("option")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlOptionElement>().ok())
        {
            Some(o) => o,
            None => continue,
        };
        option.set_value(palette.as_str());
        option.set_text(palette.display_name());
        _ = select.append_child(&option);
    }
    select.set_value(current.as_str());
}
