//! Game state and core simulation types
//!
//! `GameState` owns every entity. Nothing else holds a reference into it
//! between steps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use crate::consts::*;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing in play yet
    Idle,
    /// Active gameplay
    Playing,
    /// Every brick destroyed, waiting for advance
    LevelComplete,
    /// Ball lost, waiting for restart
    GameOver,
}

/// Playfield size in pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl Arena {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            color: BALL_COLOR,
        }
    }

    /// Per-axis launch speed for a level
    pub fn launch_speed(level: u32) -> f32 {
        BALL_BASE_SPEED + level as f32 * BALL_SPEED_PER_LEVEL
    }

    /// Center the ball and launch it up-right at the level's speed
    pub fn reset(&mut self, arena: &Arena, level: u32) {
        let speed = Self::launch_speed(level);
        self.pos = arena.center();
        self.vel = Vec2::new(speed, -speed);
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per frame
    pub speed: f32,
    pub color: [f32; 4],
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            color: PADDLE_COLOR,
        }
    }
}

impl Paddle {
    /// Horizontal center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Place the paddle at bottom-center
    pub fn reset(&mut self, arena: &Arena) {
        self.pos = Vec2::new(
            arena.width / 2.0 - self.width / 2.0,
            arena.height - PADDLE_BOTTOM_OFFSET,
        );
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    /// Current level (1-based)
    pub level: u32,
    pub phase: GamePhase,
    pub score: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Replaced wholesale on every level setup
    pub bricks: BrickGrid,
    /// Steps taken in the current level
    pub frame: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arena::default())
    }
}

impl GameState {
    /// Create an idle game for the given playfield
    pub fn new(arena: Arena) -> Self {
        let mut state = Self {
            arena,
            level: 1,
            phase: GamePhase::Idle,
            score: 0,
            paddle: Paddle::default(),
            ball: Ball::new(BALL_RADIUS),
            bricks: BrickGrid::for_level(1),
            frame: 0,
        };
        state.paddle.reset(&arena);
        state.ball.reset(&arena, 1);
        state
    }

    /// Override the paddle speed (from settings)
    pub fn with_paddle_speed(mut self, speed: f32) -> Self {
        self.paddle.speed = speed;
        self
    }

    /// Rebuild the grid and reset ball and paddle for the current level, then
    /// enter `Playing`
    pub fn setup_level(&mut self) {
        self.bricks = BrickGrid::for_level(self.level);
        self.ball.reset(&self.arena, self.level);
        self.paddle.reset(&self.arena);
        self.frame = 0;
        self.phase = GamePhase::Playing;

        log::info!(
            "Level {}: {}x{} grid, {} bricks",
            self.level,
            self.bricks.columns(),
            self.bricks.rows(),
            self.bricks.remaining()
        );
    }

    /// Active bricks left in the current level
    pub fn remaining_bricks(&self) -> u32 {
        self.bricks.remaining()
    }
}
