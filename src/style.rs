// CSS text for a label's visual state. Pure string formatting so it can be
// tested on the host.

use tagsphere_core::constants::COLOR_TRANSITION_MS;
use tagsphere_core::{LabelVisual, Transition};

#[inline]
fn seconds(ms: u32) -> f64 {
    ms as f64 / 1000.0
}

pub fn transform(v: &LabelVisual) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
        v.translate.x, v.translate.y, v.scale
    )
}

pub fn opacity(v: &LabelVisual) -> String {
    format!("{:.3}", v.opacity)
}

/// Soft white glow; nearer labels glow wider and brighter.
pub fn text_shadow(v: &LabelVisual) -> String {
    format!(
        "0 0 {:.2}px rgba(255,255,255,{:.3})",
        v.glow_blur, v.glow_alpha
    )
}

/// Transition list for one label. `recoloring` adds the color ease used
/// right after a palette change, whether or not the label is being dragged.
pub fn transition(t: Transition, recoloring: bool) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Transition::Eased { duration_ms } = t {
        let s = seconds(duration_ms);
        parts.push(format!("transform {s}s ease-out"));
        parts.push(format!("opacity {s}s ease-out"));
    }
    if recoloring {
        parts.push(format!("color {}s ease-in-out", seconds(COLOR_TRANSITION_MS)));
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn font_size(px: f32) -> String {
    format!("{:.1}px", px)
}

pub fn z_index(depth: i32) -> String {
    depth.to_string()
}
