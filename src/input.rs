//! Keyboard state to paddle intent
//!
//! Key callbacks may fire at any time between steps. The latest event wins;
//! nothing is queued. The driver takes one snapshot per step.

use crate::sim::StepInput;

/// Held-key flags for the two paddle directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub right_held: bool,
    pub left_held: bool,
}

/// Direction a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Right,
    Left,
}

fn direction_for(key: &str) -> Option<Direction> {
    match key {
        "Right" | "ArrowRight" => Some(Direction::Right),
        "Left" | "ArrowLeft" => Some(Direction::Left),
        _ => None,
    }
}

impl InputState {
    /// Handle a key press. Presses are ignored unless a level is in play.
    pub fn key_down(&mut self, key: &str, playing: bool) {
        if !playing {
            return;
        }
        match direction_for(key) {
            Some(Direction::Right) => self.right_held = true,
            Some(Direction::Left) => self.left_held = true,
            None => {}
        }
    }

    /// Handle a key release
    pub fn key_up(&mut self, key: &str) {
        match direction_for(key) {
            Some(Direction::Right) => self.right_held = false,
            Some(Direction::Left) => self.left_held = false,
            None => {}
        }
    }

    /// Intent for the next step
    pub fn snapshot(&self) -> StepInput {
        StepInput {
            right: self.right_held,
            left: self.left_held,
        }
    }
}
