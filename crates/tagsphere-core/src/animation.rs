//! Per-frame driver.
//!
//! Each frame drains queued input into the scene, mirrors structural changes
//! to the surface, integrates motion for the elapsed time and emits every
//! label's projection. Hosts either call [`AnimationLoop::frame`] from their
//! own refresh callback or hand a [`FrameClock`] to [`AnimationLoop::run`].

use crate::constants::FRAME_REFERENCE_MS;
use crate::input::InputQueue;
use crate::scene::{Scene, SceneChange};
use crate::surface::Surface;
use std::cell::Cell;
use std::rc::Rc;

/// Converts host timestamps into elapsed time in reference frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed reference frames since the previous call. The first call
    /// counts as exactly one frame; a clock that runs backwards yields 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / FRAME_REFERENCE_MS).max(0.0),
            None => 1.0,
        };
        self.last_ms = Some(now_ms);
        dt as f32
    }
}

/// Source of frame timestamps in milliseconds. `None` means the host has
/// gone away and the loop should end.
pub trait FrameClock {
    fn next_frame(&mut self) -> Option<f64>;
}

/// Cancels a running loop. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

pub struct AnimationLoop {
    scene: Scene,
    inputs: InputQueue,
    timer: FrameTimer,
    stop: StopHandle,
    surface_built: bool,
}

impl AnimationLoop {
    pub fn new(scene: Scene, inputs: InputQueue) -> Self {
        Self {
            scene,
            inputs,
            timer: FrameTimer::new(),
            stop: StopHandle::default(),
            surface_built: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Handle for pushing input from event handlers.
    pub fn inputs(&self) -> InputQueue {
        self.inputs.clone()
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Run one frame at host time `now_ms`. Returns `false` once stopped,
    /// in which case nothing is done and the host should stop scheduling.
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> bool {
        if self.stop.is_stopped() {
            return false;
        }
        if !self.surface_built {
            surface.rebuild(self.scene.labels());
            self.surface_built = true;
        }
        for input in self.inputs.drain() {
            match self.scene.apply(input) {
                Some(SceneChange::Rebuilt) => {
                    surface.rebuild(self.scene.labels());
                    surface.set_paused(false);
                }
                Some(SceneChange::Recolored) => surface.recolor(self.scene.labels()),
                Some(SceneChange::PauseChanged(paused)) => surface.set_paused(paused),
                None => {}
            }
        }
        let dt = self.timer.advance(now_ms);
        self.scene.tick(dt);
        self.scene.emit(surface);
        log::trace!("[frame] dt={:.2}", dt);
        true
    }

    /// Drive frames from `clock` until it runs dry or the loop is stopped.
    /// Returns the number of frames rendered.
    pub fn run<C, S>(&mut self, clock: &mut C, surface: &mut S) -> usize
    where
        C: FrameClock + ?Sized,
        S: Surface + ?Sized,
    {
        let mut frames = 0;
        while let Some(now_ms) = clock.next_frame() {
            if !self.frame(now_ms, surface) {
                break;
            }
            frames += 1;
        }
        frames
    }
}
