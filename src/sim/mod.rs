//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per call, no delta time
//! - No randomness
//! - Stable scan order over the brick grid (column-major)
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod state;
pub mod tick;

pub use bricks::{Brick, BrickGrid, BrickLayout, BrickStatus, grid_dimensions};
pub use state::{Arena, Ball, GamePhase, GameState, Paddle};
pub use tick::{StepInput, StepOutcome, autopilot_input, tick};
