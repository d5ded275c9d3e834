//! Boundary geometry
//!
//! The boundary is a closed vertex loop (last vertex connects back to the
//! first), regenerated every step from the accumulated rotation angle.

use glam::Vec2;
use serde::Serialize;
use std::f32::consts::{PI, TAU};

use crate::config::SimulationConfig;
use crate::consts::STAR_INNER_RATIO;
use crate::polar_to_cartesian;

/// Vertices of a regular polygon, first vertex at angle `rotation`
pub fn generate_polygon(sides: u32, radius: f32, center: Vec2, rotation: f32) -> Vec<Vec2> {
    debug_assert!(sides >= 3, "polygon needs at least 3 sides");
    (0..sides)
        .map(|i| {
            let theta = i as f32 * TAU / sides as f32 + rotation;
            center + polar_to_cartesian(radius, theta)
        })
        .collect()
}

/// Vertices of a star, alternating outer and inner radius, starting with an
/// outer vertex at angle `rotation`
pub fn generate_star(
    points: u32,
    outer_radius: f32,
    inner_radius: f32,
    center: Vec2,
    rotation: f32,
) -> Vec<Vec2> {
    debug_assert!(points >= 2, "star needs at least 2 points");
    (0..points * 2)
        .map(|i| {
            let theta = i as f32 * PI / points as f32 + rotation;
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            center + polar_to_cartesian(r, theta)
        })
        .collect()
}

/// A closed boundary loop centered on the origin of the body frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boundary {
    /// Circumradius (outer radius for stars)
    pub radius: f32,
    pub vertices: Vec<Vec2>,
}

impl Boundary {
    /// Build the boundary a config describes at the given rotation
    pub fn for_config(config: &SimulationConfig, radius: f32, rotation: f32) -> Self {
        let vertices = if config.shape_type.is_star() {
            generate_star(
                config.vertex_count,
                radius,
                radius * STAR_INNER_RATIO,
                Vec2::ZERO,
                rotation,
            )
        } else {
            generate_polygon(config.vertex_count, radius, Vec2::ZERO, rotation)
        };
        Self { radius, vertices }
    }

    pub fn from_vertices(vertices: Vec<Vec2>) -> Self {
        let radius = vertices.iter().map(|v| v.length()).fold(0.0, f32::max);
        Self { radius, vertices }
    }

    /// Edges as (p1, p2) pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
