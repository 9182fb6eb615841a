//! Rendering module
//!
//! The simulation only sees the `Renderer` trait. `FrameBatch` tessellates a
//! frame on the CPU and `RenderState` uploads it through WebGPU.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::FrameBatch;
pub use pipeline::{RenderError, RenderState};
pub use vertex::Vertex;

use crate::sim::GameState;

/// Draw-call sink. Coordinates are canvas pixels, origin top-left, y down.
pub trait Renderer {
    fn clear_frame(&mut self);
    fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: [f32; 4]);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: [f32; 4]);
}

/// Emit the current frame: active bricks, then paddle, then ball
pub fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState) {
    renderer.clear_frame();

    let layout = state.bricks.layout;
    for (column, row, brick) in state.bricks.active() {
        let corner = layout.position(column, row);
        renderer.draw_rectangle(corner.x, corner.y, layout.width, layout.height, brick.color);
    }

    let paddle = &state.paddle;
    renderer.draw_rectangle(
        paddle.pos.x,
        paddle.pos.y,
        paddle.width,
        paddle.height,
        paddle.color,
    );

    let ball = &state.ball;
    renderer.draw_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);
}
