//! DOM implementation of the scene's drawing surface: one `<a class="tag">`
//! per label, absolutely positioned inside the container.

use crate::bindings;
use crate::constants::{PAUSE_BUTTON_ID, TAG_CLASS};
use crate::dom::{self, set_style};
use crate::style;
use instant::Instant;
use std::time::Duration;
use tagsphere_core::constants::COLOR_TRANSITION_MS;
use tagsphere_core::{Label, LabelVisual, Surface, Transition};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DomSurface {
    document: web::Document,
    container: web::HtmlElement,
    elements: Vec<web::HtmlElement>,
    /// End of the color ease that follows a palette change.
    recolor_until: Option<Instant>,
}

impl DomSurface {
    pub fn new(document: web::Document, container: web::HtmlElement) -> Self {
        Self {
            document,
            container,
            elements: Vec::new(),
            recolor_until: None,
        }
    }

    fn create_label(&self, index: usize, label: &Label) -> Option<web::HtmlElement> {
        let el = self
            .document
            .create_element("a")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_class_name(TAG_CLASS);
        _ = el.set_attribute("href", "#");
        el.set_text_content(Some(&label.text));
        let data = el.dataset();
        _ = data.set("index", &index.to_string());
        _ = data.set("text", &label.text);
        _ = data.set("weight", &label.weight.to_string());
        set_style(&el, "position", "absolute");
        set_style(&el, "left", "0");
        set_style(&el, "top", "0");
        set_style(&el, "font-size", &style::font_size(label.font_size));
        set_style(&el, "color", label.color);
        Some(el)
    }
}

impl Surface for DomSurface {
    fn rebuild(&mut self, labels: &[Label]) {
        for el in self.elements.drain(..) {
            el.remove();
        }
        for (i, label) in labels.iter().enumerate() {
            match self.create_label(i, label) {
                Some(el) => {
                    _ = self.container.append_child(&el);
                    self.elements.push(el);
                }
                None => log::error!("[surface] could not create element for {:?}", label.text),
            }
        }
        log::info!("[surface] built {} labels", self.elements.len());
    }

    fn recolor(&mut self, labels: &[Label]) {
        self.recolor_until =
            Some(Instant::now() + Duration::from_millis(COLOR_TRANSITION_MS as u64));
        for (el, label) in self.elements.iter().zip(labels) {
            set_style(el, "transition", &style::transition(Transition::Immediate, true));
            set_style(el, "color", label.color);
        }
    }

    fn place(&mut self, index: usize, visual: &LabelVisual, transition: Transition) {
        let Some(el) = self.elements.get(index) else {
            return;
        };
        let recoloring = self.recolor_until.is_some_and(|until| Instant::now() < until);
        set_style(el, "transition", &style::transition(transition, recoloring));
        set_style(el, "transform", &style::transform(visual));
        set_style(el, "opacity", &style::opacity(visual));
        set_style(el, "text-shadow", &style::text_shadow(visual));
    }

    fn set_depth(&mut self, index: usize, depth: i32) {
        if let Some(el) = self.elements.get(index) {
            set_style(el, "z-index", &style::z_index(depth));
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if let Some(btn) = dom::element_by_id::<web::HtmlElement>(&self.document, PAUSE_BUTTON_ID) {
            btn.set_text_content(Some(bindings::pause_button_label(paused)));
        }
    }
}
