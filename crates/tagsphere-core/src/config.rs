//! Per-session sphere configuration.
//!
//! `SphereConfig` is fixed for the lifetime of a scene. Values that the user
//! changes at runtime (zoom, speed multiplier, auto-rotation speed) live in
//! [`crate::motion::Tuning`]; the config only supplies their defaults and
//! bounds.

use crate::constants::*;
use crate::error::ConfigError;
use crate::palette::PaletteName;

/// Inclusive `[min, max]` window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    pub radius: f32,
    pub focal_length: f32,
    pub base_angular_step: f32,
    pub damping: f32,
    pub max_speed: f32,
    pub auto_rotation_speed: f32,
    pub jitter: f32,
    pub font_size: Bounds,
    pub zoom: Bounds,
    pub speed_multiplier: Bounds,
    pub auto_speed: Bounds,
    pub palette: PaletteName,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            focal_length: DEFAULT_FOCAL_LENGTH,
            base_angular_step: BASE_ANGULAR_STEP,
            damping: DEFAULT_DAMPING,
            max_speed: DEFAULT_MAX_SPEED,
            auto_rotation_speed: DEFAULT_AUTO_ROTATION_SPEED,
            jitter: LAYOUT_JITTER,
            font_size: Bounds::new(DEFAULT_MIN_FONT_SIZE, DEFAULT_MAX_FONT_SIZE),
            zoom: Bounds::new(ZOOM_MIN, ZOOM_MAX),
            speed_multiplier: Bounds::new(SPEED_MULTIPLIER_MIN, SPEED_MULTIPLIER_MAX),
            auto_speed: Bounds::new(AUTO_SPEED_MIN, AUTO_SPEED_MAX),
            palette: PaletteName::Default,
        }
    }
}

impl SphereConfig {
    /// Largest |z| a label can reach: the radius plus the jitter on every axis.
    pub fn max_depth(&self) -> f32 {
        self.radius + self.jitter * 3.0_f32.sqrt()
    }

    /// Check the invariants the projection and motion code rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        for (name, b) in [
            ("font size", self.font_size),
            ("zoom", self.zoom),
            ("speed multiplier", self.speed_multiplier),
            ("auto speed", self.auto_speed),
        ] {
            if b.min > b.max {
                return Err(ConfigError::InvertedBounds {
                    name,
                    min: b.min,
                    max: b.max,
                });
            }
        }
        // focal - z * zoom must stay positive for every reachable z
        let max_depth = self.max_depth() * self.zoom.max;
        if !(self.focal_length > max_depth) {
            return Err(ConfigError::FocalLengthTooSmall {
                focal_length: self.focal_length,
                max_depth,
            });
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::NonPositiveMaxSpeed(self.max_speed));
        }
        if !self.auto_speed.contains(self.auto_rotation_speed) {
            return Err(ConfigError::AutoSpeedOutOfRange {
                value: self.auto_rotation_speed,
                min: self.auto_speed.min,
                max: self.auto_speed.max,
            });
        }
        Ok(())
    }

    /// Apply one `key = value` override, as found in the host's `data-*`
    /// attributes. Keys are kebab-case; unknown keys are rejected.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let number = || -> Result<f32, ConfigError> {
            value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })
        };
        match key {
            "radius" => self.radius = number()?,
            "focal-length" => self.focal_length = number()?,
            "damping" => self.damping = number()?,
            "max-speed" => self.max_speed = number()?,
            "auto-rotation-speed" => self.auto_rotation_speed = number()?,
            "jitter" => self.jitter = number()?.abs(),
            "min-font-size" => self.font_size.min = number()?,
            "max-font-size" => self.font_size.max = number()?,
            "palette" => self.palette = value.parse()?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply a batch of overrides. Entries are retried until no more can
    /// be applied, so dependent keys (radius with focal length, min with
    /// max font size) are accepted in any order. Entries that never fit
    /// are logged and skipped.
    pub fn with_overrides<'a>(mut self, overrides: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut pending: Vec<(&str, &str)> = overrides.into_iter().collect();
        loop {
            let before = pending.len();
            pending.retain(|&(key, value)| {
                let mut candidate = self.clone();
                let applied = candidate
                    .apply_override(key, value)
                    .and_then(|_| candidate.validate())
                    .is_ok();
                if applied {
                    self = candidate;
                }
                !applied
            });
            if pending.is_empty() || pending.len() == before {
                break;
            }
        }
        for (key, value) in pending {
            let mut candidate = self.clone();
            let err = candidate
                .apply_override(key, value)
                .and_then(|_| candidate.validate());
            if let Err(e) = err {
                log::warn!("[config] ignoring override {}={}: {}", key, value, e);
            }
        }
        self
    }
}
