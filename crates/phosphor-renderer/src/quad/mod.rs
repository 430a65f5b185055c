//! Instanced solid rectangles: backgrounds, stripes, underlines, grid
//! lines and the glitch line.

mod renderer;

pub use renderer::QuadRenderer;

use phosphor_common::Color;

/// One filled rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct QuadInstance {
    /// `[x, y, width, height]`, origin top-left.
    pub rect: [f32; 4],
    /// Straight RGBA, 0.0..=1.0.
    pub color: [f32; 4],
}

impl QuadInstance {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            rect: [x, y, width, height],
            color: color.to_f32_array(),
        }
    }

    /// Same rectangle with the color's alpha scaled by `alpha`.
    pub fn faded(mut self, alpha: f32) -> Self {
        self.color[3] *= alpha.clamp(0.0, 1.0);
        self
    }
}

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Vertex {
    pub position: [f32; 2],
}

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Uniforms {
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

pub(crate) const QUAD_VERTICES: &[Vertex] = &[
    Vertex { position: [0.0, 0.0] },
    Vertex { position: [1.0, 0.0] },
    Vertex { position: [1.0, 1.0] },
    Vertex { position: [0.0, 1.0] },
];

pub(crate) const QUAD_INDICES: &[u16] = &[0, 1, 2, 0, 2, 3];

/// Initial instance capacity; the buffer grows on demand.
pub(crate) const INITIAL_CAPACITY: usize = 512;
