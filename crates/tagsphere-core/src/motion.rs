//! Angular velocity integration: drag, inertia, damping and auto-spin.
//!
//! The two velocities are cross-coupled with the two angles. Horizontal
//! pointer travel produces `velocity_a`, which advances `angle_b` (spin
//! around the vertical axis); vertical travel produces `velocity_b`, which
//! advances `angle_a`.

use crate::config::SphereConfig;
use crate::constants::*;
use glam::Vec2;

/// Velocity and angle state of the single active sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub velocity_a: f32,
    pub velocity_b: f32,
    pub angle_a: f32,
    pub angle_b: f32,
    pub dragging: bool,
    pub paused: bool,
}

/// Runtime-adjustable knobs, seeded from [`SphereConfig`] and restored on
/// reset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub zoom: f32,
    pub speed_multiplier: f32,
    pub auto_rotation_speed: f32,
}

impl Tuning {
    pub fn from_config(config: &SphereConfig) -> Self {
        Self {
            zoom: 1.0_f32.clamp(config.zoom.min, config.zoom.max),
            speed_multiplier: 1.0_f32.clamp(config.speed_multiplier.min, config.speed_multiplier.max),
            auto_rotation_speed: config.auto_speed.clamp(config.auto_rotation_speed),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionController {
    pub state: MotionState,
    pub tuning: Tuning,
    last_pointer: Option<Vec2>,
}

#[inline]
fn clamp_speed(v: f32, max_speed: f32) -> f32 {
    v.clamp(-max_speed, max_speed)
}

impl MotionController {
    pub fn new(config: &SphereConfig) -> Self {
        Self {
            state: MotionState::default(),
            tuning: Tuning::from_config(config),
            last_pointer: None,
        }
    }

    /// Idle spin velocity for axis A at the current tuning.
    pub fn auto_velocity_a(&self) -> f32 {
        AUTO_ROTATION_AXIS_A * self.tuning.auto_rotation_speed * self.tuning.speed_multiplier
    }

    /// Idle spin velocity for axis B at the current tuning.
    pub fn auto_velocity_b(&self) -> f32 {
        AUTO_ROTATION_AXIS_B * self.tuning.auto_rotation_speed * self.tuning.speed_multiplier
    }

    /// Advance one frame. `dt` is elapsed time in units of the 16 ms
    /// reference frame.
    pub fn tick(&mut self, dt: f32, config: &SphereConfig) {
        if self.state.paused {
            return;
        }
        let auto_a = clamp_speed(self.auto_velocity_a(), config.max_speed);
        let auto_b = clamp_speed(self.auto_velocity_b(), config.max_speed);
        let s = &mut self.state;
        s.velocity_a = clamp_speed(s.velocity_a * config.damping, config.max_speed);
        s.velocity_b = clamp_speed(s.velocity_b * config.damping, config.max_speed);

        if !s.dragging {
            if s.velocity_a.abs() < REST_VELOCITY_THRESHOLD {
                s.velocity_a = auto_a;
            }
            if s.velocity_b.abs() < REST_VELOCITY_THRESHOLD {
                s.velocity_b = auto_b;
            }
        }

        s.angle_a += s.velocity_b * dt;
        s.angle_b += s.velocity_a * dt;
    }

    pub fn drag_start(&mut self, pointer: Vec2) {
        self.state.dragging = true;
        self.last_pointer = Some(pointer);
    }

    /// Convert pointer travel since the last sample into velocity and apply
    /// it to the angles immediately. Ignored unless a drag is active.
    pub fn drag_move(&mut self, pointer: Vec2, config: &SphereConfig) {
        if !self.state.dragging {
            return;
        }
        let Some(last) = self.last_pointer.replace(pointer) else {
            return;
        };
        let delta = pointer - last;
        let s = &mut self.state;
        s.velocity_a = clamp_speed(delta.x * DRAG_SENSITIVITY, config.max_speed);
        s.velocity_b = clamp_speed(delta.y * DRAG_SENSITIVITY, config.max_speed);
        s.angle_b += s.velocity_a;
        s.angle_a += s.velocity_b;
    }

    /// End the drag; the last velocity carries on as inertia.
    pub fn drag_end(&mut self) {
        self.state.dragging = false;
        self.last_pointer = None;
    }

    pub fn wheel(&mut self, delta_y: f32, config: &SphereConfig) {
        if !delta_y.is_finite() {
            return;
        }
        self.tuning.zoom = config.zoom.clamp(self.tuning.zoom - delta_y * WHEEL_ZOOM_RATE);
        log::debug!("[motion] zoom={:.3}", self.tuning.zoom);
    }

    /// Scale both speed knobs by `factor`. Ignored while paused. Axes at
    /// rest pick up the new idle speed at once. Returns whether the
    /// adjustment was applied.
    pub fn adjust_speed(&mut self, factor: f32, config: &SphereConfig) -> bool {
        if self.state.paused {
            log::info!("[motion] speed change ignored while paused");
            return false;
        }
        self.tuning.speed_multiplier = config
            .speed_multiplier
            .clamp(self.tuning.speed_multiplier * factor);
        self.tuning.auto_rotation_speed = config
            .auto_speed
            .clamp(self.tuning.auto_rotation_speed * factor);
        let auto_a = clamp_speed(self.auto_velocity_a(), config.max_speed);
        let auto_b = clamp_speed(self.auto_velocity_b(), config.max_speed);
        if self.state.velocity_a.abs() < REST_VELOCITY_THRESHOLD {
            self.state.velocity_a = auto_a;
        }
        if self.state.velocity_b.abs() < REST_VELOCITY_THRESHOLD {
            self.state.velocity_b = auto_b;
        }
        log::info!(
            "[motion] speed multiplier={:.2} auto={:.2}",
            self.tuning.speed_multiplier,
            self.tuning.auto_rotation_speed
        );
        true
    }

    pub fn speed_up(&mut self, config: &SphereConfig) -> bool {
        self.adjust_speed(SPEED_UP_FACTOR, config)
    }

    pub fn slow_down(&mut self, config: &SphereConfig) -> bool {
        self.adjust_speed(SLOW_DOWN_FACTOR, config)
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused && !self.state.paused {
            self.state.velocity_a = 0.0;
            self.state.velocity_b = 0.0;
        }
        self.state.paused = paused;
        log::info!("[motion] paused={}", paused);
    }

    /// Flip the paused flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.state.paused);
        self.state.paused
    }

    /// Back to rest: zero velocities and angles, default tuning, unpaused.
    pub fn reset(&mut self, config: &SphereConfig) {
        self.state = MotionState::default();
        self.tuning = Tuning::from_config(config);
        self.last_pointer = None;
    }
}
