//! Input events consumed by the capture loop.
//!
//! Backends translate their raw mouse/keyboard callbacks into [`InputEvent`]
//! with [`InputEvent::from_mouse`] and [`InputEvent::from_key`], so the loop
//! only ever matches on a closed set of variants.

use log::debug;
use planar_measure_core::PixelPoint;
use serde::{Deserialize, Serialize};

pub const QUIT_KEY: char = 'q';
pub const SAVE_FRAME_KEY: char = 's';

/// Everything the measurement loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Record a new point.
    Press(PixelPoint),
    /// Drop every recorded point.
    Reset,
    /// Stop the loop after the current iteration.
    Quit,
    /// Write the current frame to the snapshot path.
    SaveFrame,
    /// Anything else; ignored.
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseAction {
    LeftDown,
    LeftDoubleClick,
    RightDown,
    MiddleDown,
    /// Vertical wheel; positive delta scrolls up.
    Wheel { delta: i32 },
    Move,
    Other,
}

/// One raw mouse callback, already decoded from backend flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseInput {
    pub action: MouseAction,
    pub position: PixelPoint,
    /// Ctrl is held and no other modifier or button flag is set.
    pub ctrl_only: bool,
}

impl InputEvent {
    pub fn from_mouse(input: MouseInput) -> Self {
        let MouseInput {
            action,
            position,
            ctrl_only,
        } = input;
        match action {
            MouseAction::LeftDown => {
                debug!("left button pressed at ({}, {})", position.x, position.y);
                InputEvent::Press(position)
            }
            MouseAction::LeftDoubleClick => {
                debug!("left button double clicked");
                InputEvent::Other
            }
            MouseAction::RightDown => {
                debug!("right button pressed");
                InputEvent::Other
            }
            MouseAction::MiddleDown => {
                debug!("middle button pressed");
                InputEvent::Other
            }
            MouseAction::Wheel { delta } => {
                debug!("scroll {}", if delta > 0 { "up" } else { "down" });
                InputEvent::Other
            }
            MouseAction::Move | MouseAction::Other if ctrl_only => InputEvent::Reset,
            MouseAction::Move | MouseAction::Other => InputEvent::Other,
        }
    }

    /// Map a polled key code; negative codes mean no key was pressed.
    pub fn from_key(code: i32) -> Option<Self> {
        if code < 0 {
            return None;
        }
        let event = match char::from_u32(code as u32) {
            Some(QUIT_KEY) => InputEvent::Quit,
            Some(SAVE_FRAME_KEY) => InputEvent::SaveFrame,
            _ => InputEvent::Other,
        };
        Some(event)
    }
}
