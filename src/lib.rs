//! Brickfall - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball, paddle, brick grid, collisions)
//! - `game`: Level/phase state machine and the driver command interface
//! - `renderer`: Draw-call adapter and WebGPU pipeline
//! - `input`: Keyboard events to paddle intent
//! - `ui`: Screen toggling collaborator
//! - `settings`: Data-driven configuration

pub mod color;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::GameError;
pub use game::{Command, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_HEIGHT: f32 = 700.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 250.0;
    pub const PADDLE_HEIGHT: f32 = 25.0;
    /// Paddle top edge sits this far above the canvas bottom
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    /// Horizontal pixels per frame
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_COLOR: [f32; 4] = [0.53, 0.81, 0.92, 1.0];

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Launch speed per axis at level 0; each level adds `BALL_SPEED_PER_LEVEL`
    pub const BALL_BASE_SPEED: f32 = 4.0;
    pub const BALL_SPEED_PER_LEVEL: f32 = 0.5;

    /// Paddle deflection: dx = hit * (PADDLE_DEFLECT_BASE + level * PADDLE_DEFLECT_PER_LEVEL)
    pub const PADDLE_DEFLECT_BASE: f32 = 6.0;
    pub const PADDLE_DEFLECT_PER_LEVEL: f32 = 0.5;

    /// Brick layout
    pub const BRICK_WIDTH: f32 = 85.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Grid size at level 0; rows grow every 2 levels, columns every 3
    pub const BASE_BRICK_ROWS: u32 = 5;
    pub const BASE_BRICK_COLUMNS: u32 = 10;

    /// Brick tint (HSL)
    pub const BRICK_SATURATION: f32 = 0.8;
    pub const BRICK_LIGHTNESS: f32 = 0.6;

    /// Points per destroyed brick, multiplied by the current level
    pub const BRICK_POINTS: u64 = 10;

    /// Segments used to tessellate the ball
    pub const CIRCLE_SEGMENTS: u32 = 20;

    /// Frame clear color
    pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.1, 1.0];
}

/// Axis-aligned rectangle test with inclusive edges
#[inline]
pub fn point_in_rect(px: f32, py: f32, x: f32, y: f32, width: f32, height: f32) -> bool {
    px >= x && px <= x + width && py >= y && py <= y + height
}
