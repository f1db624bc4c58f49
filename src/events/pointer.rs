use crate::bindings;
use crate::dom::{self, add_listener};
use std::cell::Cell;
use std::rc::Rc;
use tagsphere_core::{InputQueue, SceneInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub inputs: InputQueue,
    /// Set between a background press and the matching release.
    pub pressed: Rc<Cell<bool>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_release(&w, "mouseup");
    wire_release(&w, "mouseleave");
    wire_wheel(&w);
}

fn wire_mousedown(w: &PointerWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.document.clone().into();
    add_listener(&target, "mousedown", move |ev: web::MouseEvent| {
        let inside = dom::is_inside(&w.container, &ev);
        let on_label = dom::label_target(&ev).is_some();
        if !bindings::is_drag_target(inside, on_label) {
            return;
        }
        w.pressed.set(true);
        w.inputs.push(SceneInput::DragStart {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
        log::debug!("[mouse] drag start at ({}, {})", ev.client_x(), ev.client_y());
        ev.prevent_default();
    });
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let target: web::EventTarget = w.document.clone().into();
    add_listener(&target, "mousemove", move |ev: web::MouseEvent| {
        if !w.pressed.get() {
            return;
        }
        w.inputs.push(SceneInput::DragMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    });
}

fn wire_release(w: &PointerWiring, event: &str) {
    let w = w.clone();
    let target: web::EventTarget = w.document.clone().into();
    add_listener(&target, event, move |_ev: web::MouseEvent| {
        if w.pressed.replace(false) {
            w.inputs.push(SceneInput::DragEnd);
            log::debug!("[mouse] drag end");
        }
    });
}

fn wire_wheel(w: &PointerWiring) {
    let w = w.clone();
    let container = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        w.inputs.push(SceneInput::Wheel {
            delta_y: ev.delta_y() as f32,
        });
    }) as Box<dyn FnMut(_)>);

    // Non-passive so the page does not scroll while zooming the sphere.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = container.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
