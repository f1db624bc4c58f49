//! The single active sphere: configuration, label set and motion state.
//!
//! `Scene` replaces what would otherwise be ambient globals. The animation
//! loop owns it; everything that changes the sphere goes through `&mut Scene`.

use crate::config::SphereConfig;
use crate::constants::FRAME_REFERENCE_MS;
use crate::data::LabelItem;
use crate::error::ConfigError;
use crate::input::{Command, SceneInput};
use crate::label::Label;
use crate::layout::jittered_sphere;
use crate::motion::MotionController;
use crate::palette::{PaletteName, WeightRange};
use crate::rotation::RotationEngine;
use crate::surface::{Surface, Transition};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Structural effect of an input that the surface must mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneChange {
    /// The label collection was replaced; surface elements must be recreated.
    Rebuilt,
    /// Label colors changed in place.
    Recolored,
    /// The paused flag changed to the given value.
    PauseChanged(bool),
}

pub struct Scene {
    config: SphereConfig,
    items: Vec<LabelItem>,
    labels: Vec<Label>,
    motion: MotionController,
    rotation: RotationEngine,
    palette: PaletteName,
    seed: u64,
}

impl Scene {
    /// Validate `config` and build the label set from `items`. `seed` fixes
    /// the layout jitter so every rebuild of this scene is identical.
    pub fn new(config: SphereConfig, items: Vec<LabelItem>, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut scene = Self {
            motion: MotionController::new(&config),
            rotation: RotationEngine::new(config.base_angular_step),
            palette: config.palette,
            config,
            items,
            labels: Vec::new(),
            seed,
        };
        scene.rebuild();
        Ok(scene)
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut [Label] {
        &mut self.labels
    }

    pub fn motion(&self) -> &MotionController {
        &self.motion
    }

    pub fn motion_mut(&mut self) -> &mut MotionController {
        &mut self.motion
    }

    pub fn palette(&self) -> PaletteName {
        self.palette
    }

    pub fn zoom(&self) -> f32 {
        self.motion.tuning.zoom
    }

    pub fn is_dragging(&self) -> bool {
        self.motion.state.dragging
    }

    /// Recreate every label from the current items and palette, then place
    /// them at the current angles.
    pub fn rebuild(&mut self) {
        let range = WeightRange::from_weights(self.items.iter().map(|i| i.weight));
        let mut rng = StdRng::seed_from_u64(self.seed);
        let homes = jittered_sphere(self.items.len(), self.config.radius, self.config.jitter, &mut rng);
        self.labels = match range {
            Some(range) => self
                .items
                .iter()
                .zip(homes)
                .map(|(item, home)| {
                    Label::new(
                        item.text.clone(),
                        item.weight,
                        home,
                        &range,
                        self.palette,
                        self.config.font_size,
                    )
                })
                .collect(),
            None => Vec::new(),
        };
        self.rotate();
        log::info!("[scene] built {} labels", self.labels.len());
    }

    /// Recolor the existing labels. Returns `false` when `palette` is
    /// already active.
    pub fn set_palette(&mut self, palette: PaletteName) -> bool {
        if palette == self.palette {
            return false;
        }
        self.palette = palette;
        for label in &mut self.labels {
            label.apply_palette(palette);
        }
        log::info!("[palette] switched to {}", palette);
        true
    }

    /// Zero the motion, restore default tuning and rebuild the labels. The
    /// active palette is kept.
    pub fn reset(&mut self) {
        self.motion.reset(&self.config);
        self.rebuild();
        log::info!("[scene] reset");
    }

    /// Route one input to the motion controller or the scene.
    pub fn apply(&mut self, input: SceneInput) -> Option<SceneChange> {
        match input {
            SceneInput::DragStart { x, y } => {
                self.motion.drag_start(Vec2::new(x, y));
                None
            }
            SceneInput::DragMove { x, y } => {
                self.motion.drag_move(Vec2::new(x, y), &self.config);
                None
            }
            SceneInput::DragEnd => {
                self.motion.drag_end();
                None
            }
            SceneInput::Wheel { delta_y } => {
                self.motion.wheel(delta_y, &self.config);
                None
            }
            SceneInput::LabelClick { index } => {
                if let Some(label) = self.labels.get_mut(index) {
                    label.pulse();
                    log::info!("[tag] clicked {} (weight {})", label.text, label.weight);
                }
                None
            }
            SceneInput::Command(command) => self.command(command),
        }
    }

    fn command(&mut self, command: Command) -> Option<SceneChange> {
        match command {
            Command::TogglePause => Some(SceneChange::PauseChanged(self.motion.toggle_pause())),
            Command::SpeedUp => {
                self.motion.speed_up(&self.config);
                None
            }
            Command::SlowDown => {
                self.motion.slow_down(&self.config);
                None
            }
            Command::Reset => {
                self.reset();
                Some(SceneChange::Rebuilt)
            }
            Command::SelectPalette(p) => self.set_palette(p).then_some(SceneChange::Recolored),
        }
    }

    /// Integrate motion for `dt` reference frames and rotate all labels.
    /// Click pulses run down even while paused.
    pub fn tick(&mut self, dt: f32) {
        self.motion.tick(dt, &self.config);
        self.rotate();
        let elapsed_ms = dt * FRAME_REFERENCE_MS as f32;
        for label in &mut self.labels {
            label.decay_pulse(elapsed_ms);
        }
    }

    /// Recompute every label position from the absolute angles.
    pub fn rotate(&mut self) {
        let s = &self.motion.state;
        self.rotation.apply(&mut self.labels, s.angle_a, s.angle_b);
    }

    /// Project every label and write it to `surface`. Depth is only written
    /// when it changed since the last emit.
    pub fn emit<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let transition = Transition::for_dragging(self.is_dragging());
        let zoom = self.zoom();
        let config = &self.config;
        for (i, label) in self.labels.iter_mut().enumerate() {
            let visual = label.project(config, zoom);
            surface.place(i, &visual, transition);
            if label.take_depth_change(visual.depth) {
                surface.set_depth(i, visual.depth);
            }
        }
    }
}
