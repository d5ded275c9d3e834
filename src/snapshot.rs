//! Render-ready view of a simulation
//!
//! Drawing is left to the caller. This module only turns state into
//! screen-space buffers (`bytemuck::Pod`, ready for a GPU upload) or a
//! serializable `Snapshot` for headless consumers.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::sim::{Body, Boundary, FrameSize, SimulationState};

/// Simple 2D vertex with position and color
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
}

/// One ball, drawn as an instanced circle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

/// Colors for scene elements
pub mod colors {
    /// #22D3EE
    pub const BOUNDARY: [f32; 4] = [0.133, 0.827, 0.933, 1.0];
    pub const BOUNDARY_FILL: [f32; 4] = [0.133, 0.827, 0.933, 0.05];
    pub const BALL_OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

/// Expand 0xRRGGBB into normalized RGBA
pub fn rgb_to_rgba(rgb: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha]
}

#[inline]
fn to_screen(p: Vec2, frame: FrameSize) -> [f32; 2] {
    (frame.center() + p).to_array()
}

/// Boundary as a closed line strip (first vertex repeated at the end)
pub fn boundary_outline(boundary: &Boundary, frame: FrameSize) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = boundary
        .vertices
        .iter()
        .map(|&p| {
            let [x, y] = to_screen(p, frame);
            Vertex::new(x, y, colors::BOUNDARY)
        })
        .collect();
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    vertices
}

/// One instance per body, in body order
pub fn ball_instances(bodies: &[Body], frame: FrameSize) -> Vec<BallInstance> {
    bodies
        .iter()
        .map(|b| BallInstance {
            center: to_screen(b.pos, frame),
            radius: b.radius,
            color: rgb_to_rgba(b.color, 1.0),
        })
        .collect()
}

/// A body as seen by a renderer
#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub id: u32,
    /// Screen-space center
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// CSS-style hex color
    pub color: String,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub frame: FrameSize,
    pub rotation: f32,
    /// Screen-space boundary loop (not closed)
    pub boundary: Vec<[f32; 2]>,
    pub balls: Vec<BallView>,
}

impl Snapshot {
    pub fn capture(state: &SimulationState, config: &SimulationConfig, frame: FrameSize) -> Self {
        let boundary = state.boundary(config, frame);
        Self {
            frame,
            rotation: state.rotation(),
            boundary: boundary
                .vertices
                .iter()
                .map(|&p| to_screen(p, frame))
                .collect(),
            balls: state
                .bodies()
                .iter()
                .map(|b| {
                    let [x, y] = to_screen(b.pos, frame);
                    BallView {
                        id: b.id,
                        x,
                        y,
                        radius: b.radius,
                        color: format!("#{:06X}", b.color & 0xFF_FFFF),
                    }
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
