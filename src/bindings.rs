// Pure mapping from DOM facts to scene inputs and control text.

use crate::constants::*;
use tagsphere_core::{Command, PaletteName};

/// Command bound to a control button id.
#[inline]
pub fn command_for_button(id: &str) -> Option<Command> {
    match id {
        PAUSE_BUTTON_ID => Some(Command::TogglePause),
        SPEED_UP_BUTTON_ID => Some(Command::SpeedUp),
        SLOW_DOWN_BUTTON_ID => Some(Command::SlowDown),
        RESET_BUTTON_ID => Some(Command::Reset),
        _ => None,
    }
}

/// Palette command for a selector value; unknown values are ignored.
#[inline]
pub fn command_for_palette(value: &str) -> Option<Command> {
    value.parse::<PaletteName>().ok().map(Command::SelectPalette)
}

#[inline]
pub fn pause_button_label(paused: bool) -> &'static str {
    if paused {
        RESUME_LABEL
    } else {
        PAUSE_LABEL
    }
}

/// A press starts a drag only on the sphere background, not on a label.
#[inline]
pub fn is_drag_target(inside_wrap: bool, on_label: bool) -> bool {
    inside_wrap && !on_label
}

pub fn tooltip_text(text: &str, weight: &str) -> String {
    format!("{} (weight: {})", text, weight)
}
