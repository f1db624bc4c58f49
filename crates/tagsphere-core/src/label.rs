//! Per-label state and the pure perspective projection.

use crate::config::{Bounds, SphereConfig};
use crate::constants::*;
use crate::palette::{font_size, palette_index, PaletteName, WeightRange};
use glam::{Vec2, Vec3};

/// Derived visual attributes of one label for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelVisual {
    /// Offset from the surface origin, in pixels.
    pub translate: Vec2,
    /// Uniform display scale, bounded to limit distortion. A click pulse
    /// multiplies it further for a short time.
    pub scale: f32,
    pub opacity: f32,
    /// Stacking order; larger is nearer the viewer.
    pub depth: i32,
    pub glow_blur: f32,
    pub glow_alpha: f32,
}

/// Raw perspective factor `focal / (focal − z·zoom)`.
///
/// Undefined when the denominator reaches zero; [`SphereConfig::validate`]
/// rules that out for every reachable `z`.
#[inline]
pub fn perspective_scale(z: f32, focal_length: f32, zoom: f32) -> f32 {
    focal_length / (focal_length - z * zoom)
}

/// Normalized nearness in \[0, 1\] (may slightly exceed 1 under jitter).
#[inline]
fn nearness(z: f32, radius: f32) -> f32 {
    (z + radius) / (2.0 * radius)
}

#[inline]
pub fn depth_index(z: f32, radius: f32) -> i32 {
    ((z + radius) * DEPTH_INDEX_SCALE).floor() as i32
}

/// Project a sphere-local position to its visual attributes.
pub fn project(position: Vec3, radius: f32, focal_length: f32, zoom: f32) -> LabelVisual {
    let scale = perspective_scale(position.z, focal_length, zoom);
    let near = nearness(position.z, radius);
    let glow = near.max(0.0);
    LabelVisual {
        translate: Vec2::new(position.x + radius, position.y + radius),
        scale: scale.clamp(DISPLAY_SCALE_MIN, DISPLAY_SCALE_MAX),
        opacity: near.clamp(OPACITY_MIN, 1.0),
        depth: depth_index(position.z, radius),
        glow_blur: glow * GLOW_BLUR_MAX_PX,
        glow_alpha: glow * GLOW_ALPHA_MAX,
    }
}

/// One label on the sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub weight: f32,
    /// Normalized weight in \[0, 1\], fixed when the label set is built.
    pub ratio: f32,
    pub font_size: f32,
    pub palette_index: usize,
    pub color: &'static str,
    /// Position at build time, after jitter; rotation is applied from here.
    pub home: Vec3,
    /// Current rotated position.
    pub position: Vec3,
    last_depth: Option<i32>,
    pulse_ms: f32,
}

impl Label {
    pub fn new(
        text: impl Into<String>,
        weight: f32,
        home: Vec3,
        range: &WeightRange,
        palette: PaletteName,
        font_bounds: Bounds,
    ) -> Self {
        let ratio = range.normalize(weight);
        let colors = palette.colors();
        let idx = palette_index(ratio, colors.len());
        Self {
            text: text.into(),
            weight,
            ratio,
            font_size: font_size(ratio, font_bounds.min, font_bounds.max),
            palette_index: idx,
            color: colors.get(idx).copied().unwrap_or("#ffffff"),
            home,
            position: home,
            last_depth: None,
            pulse_ms: 0.0,
        }
    }

    /// Recolor in place for `palette`. Returns whether the color changed.
    pub fn apply_palette(&mut self, palette: PaletteName) -> bool {
        let colors = palette.colors();
        let idx = palette_index(self.ratio, colors.len());
        let color = colors.get(idx).copied().unwrap_or(self.color);
        let changed = color != self.color;
        self.palette_index = idx;
        self.color = color;
        changed
    }

    pub fn project(&self, config: &SphereConfig, zoom: f32) -> LabelVisual {
        let mut visual = project(self.position, config.radius, config.focal_length, zoom);
        if self.is_pulsing() {
            visual.scale *= CLICK_PULSE_SCALE;
        }
        visual
    }

    /// Start (or restart) the click pulse.
    pub fn pulse(&mut self) {
        self.pulse_ms = CLICK_PULSE_MS;
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse_ms > 0.0
    }

    /// Run the pulse down by `elapsed_ms` of frame time.
    pub fn decay_pulse(&mut self, elapsed_ms: f32) {
        self.pulse_ms = (self.pulse_ms - elapsed_ms).max(0.0);
    }

    /// Record `depth` as written to the surface. Returns `true` when it
    /// differs from the previously recorded value and must be reapplied.
    pub fn take_depth_change(&mut self, depth: i32) -> bool {
        if self.last_depth == Some(depth) {
            return false;
        }
        self.last_depth = Some(depth);
        true
    }
}
