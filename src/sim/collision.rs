//! Collision predicates for the rectangular playfield
//!
//! Bricks are tested against the ball's center point only. Walls, paddle and
//! the loss line use the ball's radius.

use glam::Vec2;

use super::state::{Arena, Ball, Paddle};
use crate::consts::{PADDLE_DEFLECT_BASE, PADDLE_DEFLECT_PER_LEVEL};

/// Ball edge is past the left or right wall
#[inline]
pub fn hits_side_wall(ball: &Ball, arena: &Arena) -> bool {
    ball.pos.x + ball.radius > arena.width || ball.pos.x - ball.radius < 0.0
}

/// Ball edge is past the top wall. There is no bottom wall.
#[inline]
pub fn hits_top_wall(ball: &Ball) -> bool {
    ball.pos.y - ball.radius < 0.0
}

/// Ball bottom has passed the paddle top while its center is strictly inside
/// the paddle's horizontal span
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius > paddle.pos.y
        && ball.pos.x > paddle.pos.x
        && ball.pos.x < paddle.right()
}

/// Normalized distance from the paddle center, roughly [-1, 1]
#[inline]
pub fn hit_offset(ball_x: f32, paddle: &Paddle) -> f32 {
    (ball_x - paddle.center_x()) / (paddle.width / 2.0)
}

/// Horizontal velocity after a paddle bounce. Replaces the previous dx.
#[inline]
pub fn paddle_bounce_dx(hit: f32, level: u32) -> f32 {
    hit * (PADDLE_DEFLECT_BASE + level as f32 * PADDLE_DEFLECT_PER_LEVEL)
}

/// Ball will be below the loss line after its next move
#[inline]
pub fn is_lost(ball: &Ball, arena: &Arena) -> bool {
    ball.pos.y + ball.vel.y > arena.height + ball.radius
}

/// Flip the vertical component
#[inline]
pub fn reflect_y(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x, -vel.y)
}

/// Flip the horizontal component
#[inline]
pub fn reflect_x(vel: Vec2) -> Vec2 {
    Vec2::new(-vel.x, vel.y)
}
