//! Contract between the scene and whatever draws the labels.

use crate::constants::MOTION_TRANSITION_MS;
use crate::label::{Label, LabelVisual};

/// How the surface should move from the previous visual state to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Jump straight to the new state (direct manipulation).
    Immediate,
    /// Short ease-out over `duration_ms` (idle motion).
    Eased { duration_ms: u32 },
}

impl Transition {
    pub fn for_dragging(dragging: bool) -> Self {
        if dragging {
            Transition::Immediate
        } else {
            Transition::Eased {
                duration_ms: MOTION_TRANSITION_MS,
            }
        }
    }
}

/// A drawing target holding one element per label, addressed by index.
pub trait Surface {
    /// Discard existing elements and create one per label.
    fn rebuild(&mut self, labels: &[Label]);

    /// Label colors changed in place.
    fn recolor(&mut self, labels: &[Label]);

    /// Position, scale, opacity and glow for one label.
    fn place(&mut self, index: usize, visual: &LabelVisual, transition: Transition);

    /// Stacking order for one label. Only called when the value changed.
    fn set_depth(&mut self, index: usize, depth: i32);

    /// Pause state changed; surfaces with controls may reflect it.
    fn set_paused(&mut self, _paused: bool) {}
}
