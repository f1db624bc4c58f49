use crate::constants::{TOOLTIP_ID, TOOLTIP_OFFSET_PX};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, text: &str, page_x: i32, page_y: i32) {
    if let Some(el) = crate::dom::element_by_id::<web::HtmlElement>(document, TOOLTIP_ID) {
        el.set_text_content(Some(text));
        let style = el.style();
        _ = style.set_property("left", &format!("{}px", page_x + TOOLTIP_OFFSET_PX));
        _ = style.set_property("top", &format!("{}px", page_y + TOOLTIP_OFFSET_PX));
        _ = style.set_property("opacity", "1");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = crate::dom::element_by_id::<web::HtmlElement>(document, TOOLTIP_ID) {
        _ = el.style().set_property("opacity", "0");
    }
}
