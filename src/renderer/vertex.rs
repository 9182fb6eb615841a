//! Colored triangle-list vertex
//!
//! `FrameBatch` fills these in canvas pixels (origin top-left, y down).
//! `RenderState::render` maps each position through `canvas_to_ndc` before
//! upload, so the shader only ever sees clip-space coordinates.

use bytemuck::{Pod, Zeroable};

/// One corner of a filled shape: position plus straight RGBA
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// `@location(0)` position, `@location(1)` color in `shader.wgsl`
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same color at a different position
    pub const fn moved_to(self, x: f32, y: f32) -> Self {
        Self::new(x, y, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
