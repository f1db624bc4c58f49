//! Input messages from the host and the queue that carries them to the
//! frame.
//!
//! Event handlers never touch the scene directly: they push a
//! [`SceneInput`] and the next frame drains the queue before integrating
//! motion.

use crate::palette::PaletteName;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Discrete user command, typically from a button or selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    SpeedUp,
    SlowDown,
    Reset,
    SelectPalette(PaletteName),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneInput {
    /// Pointer pressed on the sphere background at `(x, y)` client pixels.
    DragStart { x: f32, y: f32 },
    /// Pointer moved to `(x, y)`; only meaningful during a drag.
    DragMove { x: f32, y: f32 },
    DragEnd,
    /// Wheel delta in pixels; positive scrolls down and zooms out.
    Wheel { delta_y: f32 },
    /// A label was clicked; `index` is its position in the label set.
    LabelClick { index: usize },
    Command(Command),
}

impl From<Command> for SceneInput {
    fn from(c: Command) -> Self {
        SceneInput::Command(c)
    }
}

/// Shared single-threaded FIFO of pending inputs.
///
/// Cloning yields another handle to the same queue.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    inner: Rc<RefCell<VecDeque<SceneInput>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, input: impl Into<SceneInput>) {
        self.inner.borrow_mut().push_back(input.into());
    }

    /// Take every pending input in arrival order.
    pub fn drain(&self) -> Vec<SceneInput> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
