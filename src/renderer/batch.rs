//! CPU-side frame batching
//!
//! Collects one frame of draw calls as a triangle list ready for upload.

use glam::Vec2;

use super::Renderer;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::CIRCLE_SEGMENTS;

/// One frame of tessellated geometry
#[derive(Debug, Default, Clone)]
pub struct FrameBatch {
    vertices: Vec<Vertex>,
    /// Shapes drawn since the last clear
    draw_calls: usize,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Renderer for FrameBatch {
    fn clear_frame(&mut self) {
        self.vertices.clear();
        self.draw_calls = 0;
    }

    fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) {
        self.vertices
            .extend_from_slice(&shapes::rectangle(x, y, width, height, color));
        self.draw_calls += 1;
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(Vec2::new(x, y), radius, color, CIRCLE_SEGMENTS));
        self.draw_calls += 1;
    }
}
