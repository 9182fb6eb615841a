//! Per-frame simulation step
//!
//! One call advances the ball by exactly one frame. There is no delta time;
//! speeds are tuned for a display-refresh cadence.

use super::collision::{
    hit_offset, hits_paddle, hits_side_wall, hits_top_wall, is_lost, paddle_bounce_dx, reflect_x,
    reflect_y,
};
use super::state::{GamePhase, GameState};
use crate::consts::BRICK_POINTS;

/// Paddle intent for a single step, read once at the start of the step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInput {
    pub right: bool,
    pub left: bool,
}

/// What a step ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still playing, schedule another step
    Running,
    /// Last brick destroyed
    LevelComplete,
    /// Ball fell past the bottom
    GameOver,
}

/// Advance the state by one frame.
///
/// Must only be called while `Playing`; the caller enforces that. Returns the
/// outcome and sets `state.phase` to match.
pub fn tick(state: &mut GameState, input: &StepInput) -> StepOutcome {
    debug_assert_eq!(state.phase, GamePhase::Playing);
    state.frame += 1;

    // Bricks: full scan, center point only
    let center = state.ball.pos;
    let layout = state.bricks.layout;
    for column in 0..state.bricks.columns() {
        for row in 0..state.bricks.rows() {
            if layout.cell_contains(column, row, center) && state.bricks.destroy(column, row) {
                state.ball.vel = reflect_y(state.ball.vel);
                state.score += BRICK_POINTS * state.level as u64;
                log::debug!(
                    "Brick ({}, {}) destroyed, {} left",
                    column,
                    row,
                    state.bricks.remaining()
                );
            }
        }
    }
    if state.bricks.is_cleared() {
        state.phase = GamePhase::LevelComplete;
        return StepOutcome::LevelComplete;
    }

    state.ball.pos += state.ball.vel;

    if hits_side_wall(&state.ball, &state.arena) {
        state.ball.vel = reflect_x(state.ball.vel);
    }
    if hits_top_wall(&state.ball) {
        state.ball.vel = reflect_y(state.ball.vel);
    }

    if hits_paddle(&state.ball, &state.paddle) {
        state.ball.vel = reflect_y(state.ball.vel);
        let hit = hit_offset(state.ball.pos.x, &state.paddle);
        state.ball.vel.x = paddle_bounce_dx(hit, state.level);
    }

    // Look-ahead uses dy as left by the paddle check above
    if is_lost(&state.ball, &state.arena) {
        state.phase = GamePhase::GameOver;
        return StepOutcome::GameOver;
    }

    let paddle = &mut state.paddle;
    if input.right && paddle.pos.x < state.arena.width - paddle.width {
        paddle.pos.x += paddle.speed;
    } else if input.left && paddle.pos.x > 0.0 {
        paddle.pos.x -= paddle.speed;
    }

    StepOutcome::Running
}

/// Demo-mode intent: steer the paddle center toward the ball
pub fn autopilot_input(state: &GameState) -> StepInput {
    let dead_zone = state.paddle.speed / 2.0;
    let offset = state.ball.pos.x - state.paddle.center_x();
    StepInput {
        right: offset > dead_zone,
        left: offset < -dead_zone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BrickStatus;
    use crate::sim::state::Arena;
    use glam::Vec2;

    fn playing(level: u32) -> GameState {
        let mut state = GameState::new(Arena::default());
        state.level = level;
        state.setup_level();
        state
    }

    /// Place the ball far from bricks, walls and paddle
    fn park_ball(state: &mut GameState, vel: Vec2) {
        state.ball.pos = Vec2::new(500.0, 450.0);
        state.ball.vel = vel;
    }

    #[test]
    fn test_brick_hit_at_top_left_corner() {
        let mut state = playing(1);
        let corner = state.bricks.position(0, 0);
        state.ball.pos = corner;
        let vel = state.ball.vel;

        let outcome = tick(&mut state, &StepInput::default());

        assert_eq!(outcome, StepOutcome::Running);
        assert_eq!(state.remaining_bricks(), 49);
        assert!(!state.bricks.get(0, 0).is_some_and(|b| b.is_active()));
        assert_eq!(state.bricks.active().count(), 49);
        assert_eq!(state.ball.vel.y, -vel.y);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_single_brick_hit_changes_nothing_else() {
        let mut state = playing(2);
        let corner = state.bricks.position(4, 3);
        state.ball.pos = corner + Vec2::new(40.0, 15.0);
        state.ball.vel = Vec2::new(1.0, -2.0);
        let before = state.bricks.clone();

        tick(&mut state, &StepInput::default());

        assert_eq!(state.ball.vel.y, 2.0);
        assert_eq!(state.remaining_bricks(), before.remaining() - 1);
        for (column, row, _) in before.active() {
            let active = state.bricks.get(column, row).is_some_and(|b| b.is_active());
            assert_eq!(active, (column, row) != (4, 3));
        }
    }

    #[test]
    fn test_scan_hits_every_brick_under_center() {
        let mut state = playing(1);
        state.bricks.layout.padding = 0.0;
        // Shared edge of (0, 0) and (1, 0)
        state.ball.pos = Vec2::new(115.0, 70.0);
        state.ball.vel = Vec2::new(1.0, -3.0);

        let outcome = tick(&mut state, &StepInput::default());

        assert_eq!(outcome, StepOutcome::Running);
        assert_eq!(state.bricks.get(0, 0).map(|b| b.status), Some(BrickStatus::Destroyed));
        assert_eq!(state.bricks.get(1, 0).map(|b| b.status), Some(BrickStatus::Destroyed));
        assert_eq!(state.remaining_bricks(), 48);
        // Flipped once per brick
        assert_eq!(state.ball.vel, Vec2::new(1.0, -3.0));
        assert_eq!(state.score, 20);
    }

    #[test]
    fn test_last_brick_completes_level_and_skips_physics() {
        let mut state = playing(1);
        let cells: Vec<(u32, u32)> = state.bricks.active().map(|(c, r, _)| (c, r)).collect();
        for &(c, r) in &cells[1..] {
            state.bricks.destroy(c, r);
        }
        assert_eq!(state.remaining_bricks(), 1);

        let (c, r) = cells[0];
        let pos = state.bricks.position(c, r) + Vec2::new(10.0, 10.0);
        state.ball.pos = pos;
        state.ball.vel = Vec2::new(3.0, -3.0);
        let paddle = state.paddle.clone();

        let outcome = tick(&mut state, &StepInput { right: true, left: false });

        assert_eq!(outcome, StepOutcome::LevelComplete);
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.ball.vel, Vec2::new(3.0, 3.0));
        assert_eq!(state.paddle, paddle);
    }

    #[test]
    fn test_integrates_one_step() {
        let mut state = playing(1);
        park_ball(&mut state, Vec2::new(4.5, -4.5));
        tick(&mut state, &StepInput::default());
        assert_eq!(state.ball.pos, Vec2::new(504.5, 445.5));
        assert_eq!(state.ball.vel, Vec2::new(4.5, -4.5));
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = playing(1);
        state.ball.pos = Vec2::new(state.arena.width - 22.0, 450.0);
        state.ball.vel = Vec2::new(4.0, 1.0);
        tick(&mut state, &StepInput::default());
        assert_eq!(state.ball.vel, Vec2::new(-4.0, 1.0));
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = playing(1);
        // Column gap at the top edge, no bricks there
        state.ball.pos = Vec2::new(500.0, 22.0);
        state.ball.vel = Vec2::new(0.0, -4.0);
        tick(&mut state, &StepInput::default());
        assert_eq!(state.ball.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_paddle_center_hit_zeroes_dx() {
        let mut state = playing(3);
        let paddle_top = state.paddle.pos.y;
        state.ball.pos = Vec2::new(state.paddle.center_x() - 2.0, paddle_top - 22.0);
        state.ball.vel = Vec2::new(2.0, 5.0);

        let outcome = tick(&mut state, &StepInput::default());

        assert_eq!(outcome, StepOutcome::Running);
        assert_eq!(state.ball.vel, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_paddle_edge_hit_overrides_dx() {
        let mut state = playing(2);
        let paddle_top = state.paddle.pos.y;
        let half = state.paddle.width / 2.0;
        // Lands three quarters of the way to the right edge
        state.ball.pos = Vec2::new(state.paddle.center_x() + half * 0.75, paddle_top - 25.0);
        state.ball.vel = Vec2::new(-9.0, 6.0);

        tick(&mut state, &StepInput::default());

        let hit = (state.ball.pos.x - state.paddle.center_x()) / half;
        assert_eq!(state.ball.vel.y, -6.0);
        assert!((state.ball.vel.x - hit * 7.0).abs() < 1e-4);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_ball_lost_below_canvas() {
        let mut state = playing(1);
        state.ball.pos = Vec2::new(50.0, state.arena.height + 10.0);
        state.paddle.pos.x = 600.0;
        state.ball.vel = Vec2::new(0.0, 6.0);
        let paddle = state.paddle.clone();

        let outcome = tick(&mut state, &StepInput { right: false, left: true });

        assert_eq!(outcome, StepOutcome::GameOver);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Paddle does not move on the losing frame
        assert_eq!(state.paddle, paddle);
    }

    #[test]
    fn test_paddle_bounce_can_save_below_line() {
        // The look-ahead sees the dy flipped by the paddle in the same frame
        let mut state = playing(1);
        state.ball.pos = Vec2::new(state.paddle.center_x(), state.arena.height + 15.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        let outcome = tick(&mut state, &StepInput::default());

        assert_eq!(outcome, StepOutcome::Running);
        assert_eq!(state.ball.vel.y, -4.0);
    }

    #[test]
    fn test_paddle_moves_right_with_priority() {
        let mut state = playing(1);
        park_ball(&mut state, Vec2::new(0.0, -1.0));
        let x = state.paddle.pos.x;
        tick(&mut state, &StepInput { right: true, left: true });
        assert_eq!(state.paddle.pos.x, x + state.paddle.speed);
    }

    #[test]
    fn test_paddle_moves_left() {
        let mut state = playing(1);
        park_ball(&mut state, Vec2::new(0.0, -1.0));
        let x = state.paddle.pos.x;
        tick(&mut state, &StepInput { right: false, left: true });
        assert_eq!(state.paddle.pos.x, x - state.paddle.speed);
    }

    #[test]
    fn test_paddle_stops_at_edges() {
        let mut state = playing(1);
        park_ball(&mut state, Vec2::new(0.0, -1.0));
        state.paddle.pos.x = state.arena.width - state.paddle.width;
        tick(&mut state, &StepInput { right: true, left: false });
        assert_eq!(state.paddle.pos.x, state.arena.width - state.paddle.width);

        park_ball(&mut state, Vec2::new(0.0, -1.0));
        state.paddle.pos.x = 0.0;
        tick(&mut state, &StepInput { right: false, left: true });
        assert_eq!(state.paddle.pos.x, 0.0);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut state = playing(1);
        state.ball.pos.x = state.paddle.center_x() + 100.0;
        assert_eq!(autopilot_input(&state), StepInput { right: true, left: false });
        state.ball.pos.x = state.paddle.center_x() - 100.0;
        assert_eq!(autopilot_input(&state), StepInput { right: false, left: true });
        state.ball.pos.x = state.paddle.center_x() + 1.0;
        assert_eq!(autopilot_input(&state), StepInput::default());
    }
}
