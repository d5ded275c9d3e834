//! Collision detection and response
//!
//! Two resolvers run every step: bodies against the boundary edges, then
//! bodies against each other. Both are positional-correction schemes, not a
//! constraint solver: each contact is fixed independently and corrections
//! from several contacts in one step simply add up.

use glam::Vec2;

use super::shape::Boundary;
use super::state::Body;
use super::vector::{dot, normalize, reflect};
use crate::consts::WALL_BIAS;

/// Result of testing a body against one boundary edge
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the body penetrates the edge
    pub hit: bool,
    /// Edge normal pointing toward the boundary interior
    pub normal: Vec2,
    /// Signed distance of the body center from the edge line along `normal`
    pub distance: f32,
    /// How far the body must move along `normal` to become tangent
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            distance: f32::MAX,
            penetration: 0.0,
        }
    }
}

/// Unit normal of edge p1 → p2 that faces the origin.
///
/// Works for either winding order: the left-hand perpendicular is flipped
/// whenever it points away from the origin.
pub fn inward_normal(p1: Vec2, p2: Vec2) -> Vec2 {
    let edge = p2 - p1;
    let normal = normalize(Vec2::new(-edge.y, edge.x));
    if dot(normal, -p1) < 0.0 { -normal } else { normal }
}

/// Check a body against the infinite line through edge p1 → p2
pub fn edge_collision(pos: Vec2, radius: f32, p1: Vec2, p2: Vec2) -> CollisionResult {
    let normal = inward_normal(p1, p2);
    let distance = dot(pos - p1, normal);

    if distance < radius {
        CollisionResult {
            hit: true,
            normal,
            distance,
            penetration: radius - distance,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Resolve one body against every boundary edge.
///
/// `restitution` is the effective wall bounciness (config × multiplier).
/// Returns the number of edges the body was touching.
pub fn resolve_boundary(body: &mut Body, boundary: &Boundary, restitution: f32) -> usize {
    let mut contacts = 0;

    for (p1, p2) in boundary.edges() {
        let result = edge_collision(body.pos, body.radius, p1, p2);
        if !result.hit {
            continue;
        }
        contacts += 1;

        body.pos += result.normal * result.penetration;

        // Only bounce if moving into the wall
        if dot(body.vel, result.normal) < 0.0 {
            body.vel = reflect(body.vel, result.normal) * restitution;
            body.vel += result.normal * WALL_BIAS;
        }
    }

    contacts
}

/// Resolve a single pair of bodies. Returns true if they overlapped.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let total_radius = a.radius + b.radius;

    if distance >= total_radius {
        return false;
    }

    // Split the overlap evenly so the pair ends exactly touching
    let overlap = total_radius - distance;
    let separation = if distance == 0.0 {
        Vec2::X
    } else {
        normalize(delta)
    };
    a.pos -= separation * (overlap / 2.0);
    b.pos += separation * (overlap / 2.0);

    // Coincident bodies have no defined normal, so they only get pushed apart
    let normal = normalize(delta);
    let speed_along_normal = dot(b.vel - a.vel, normal);

    if speed_along_normal < 0.0 {
        // Equal masses: swap the normal components, keep the tangential ones
        let a_normal = normal * dot(a.vel, normal);
        let b_normal = normal * dot(b.vel, normal);
        let a_tangent = a.vel - a_normal;
        let b_tangent = b.vel - b_normal;

        a.vel = a_tangent + b_normal;
        b.vel = b_tangent + a_normal;
    }

    true
}

/// Resolve every unordered pair once, in (i, j > i) order.
///
/// Corrections from earlier pairs are visible to later ones, so clusters of
/// three or more bodies resolve differently depending on body order.
/// Returns the number of overlapping pairs.
pub fn resolve_pairs(bodies: &mut [Body]) -> usize {
    let mut contacts = 0;

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                contacts += 1;
            }
        }
    }

    contacts
}
