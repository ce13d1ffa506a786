//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::state::BrickColor;

/// Simple 2D vertex with position and color, ready for a GPU vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride between consecutive vertices
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    pub const BRICK_RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BRICK_ORANGE: [f32; 4] = [1.0, 0.5, 0.0, 1.0];
    pub const BRICK_YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BRICK_GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BRICK_CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
}

impl BrickColor {
    pub fn rgba(self) -> [f32; 4] {
        match self {
            BrickColor::Red => colors::BRICK_RED,
            BrickColor::Orange => colors::BRICK_ORANGE,
            BrickColor::Yellow => colors::BRICK_YELLOW,
            BrickColor::Green => colors::BRICK_GREEN,
            BrickColor::Cyan => colors::BRICK_CYAN,
        }
    }
}
