//! Per-frame simulation step
//!
//! Advances a `SimulationState` by one external tick. The order is fixed:
//! rotate, rebuild the boundary, integrate, wall collisions, pair
//! collisions, runaway clamp.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{resolve_boundary, resolve_pairs};
use super::shape::Boundary;
use super::state::SimulationState;
use crate::config::SimulationConfig;
use crate::consts::{RUNAWAY_MARGIN, SHAPE_RADIUS_FRACTION};
use crate::settings::GlobalSettings;

/// Size of the drawing surface; only used to size the boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

impl FrameSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Boundary circumradius for this frame
    #[inline]
    pub fn shape_radius(&self) -> f32 {
        self.width.min(self.height) * SHAPE_RADIUS_FRACTION
    }

    /// Screen position of the body-frame origin
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// What happened during one step
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Boundary the bodies were resolved against
    pub boundary: Boundary,
    /// Body-edge contacts resolved
    pub wall_contacts: usize,
    /// Overlapping body pairs resolved
    pub pair_contacts: usize,
    /// Bodies reset to the center by the runaway clamp
    pub clamped: usize,
    /// True if the step was skipped because time is frozen
    pub paused: bool,
}

/// Advance the simulation by one tick
pub fn step(
    state: &mut SimulationState,
    config: &SimulationConfig,
    settings: &GlobalSettings,
    frame: FrameSize,
) -> StepReport {
    // Frozen time changes nothing, not even pending wall corrections
    if settings.is_paused() {
        return StepReport {
            boundary: state.boundary(config, frame),
            wall_contacts: 0,
            pair_contacts: 0,
            clamped: 0,
            paused: true,
        };
    }

    let dt = settings.time_scale;
    state.steps += 1;

    // 1. Rotate, then 2. rebuild the boundary at the new angle
    state.rotation += config.rotation_speed * settings.rotation_multiplier * dt;
    let boundary = state.boundary(config, frame);

    // 3. Forces and integration
    let gravity = config.gravity * settings.gravity_multiplier * dt;
    let damping = 1.0 - config.friction * dt;
    for body in &mut state.bodies {
        body.vel.y += gravity;
        body.vel *= damping;
        body.pos += body.vel * dt;
    }

    // 4. Walls
    let restitution = config.restitution * settings.bounciness_multiplier;
    let wall_contacts: usize = state
        .bodies
        .iter_mut()
        .map(|body| resolve_boundary(body, &boundary, restitution))
        .sum();

    // 5. Pairs
    let pair_contacts = resolve_pairs(&mut state.bodies);

    // 6. Runaway clamp
    let limit = boundary.radius + RUNAWAY_MARGIN;
    let mut clamped = 0;
    for body in &mut state.bodies {
        if body.pos.length() > limit {
            log::warn!(
                "Body {} escaped to {:?} (limit {}), resetting to center",
                body.id,
                body.pos,
                limit
            );
            body.pos = Vec2::ZERO;
            body.vel = Vec2::ZERO;
            clamped += 1;
        }
    }

    log::debug!(
        "step {}: rotation={:.3} walls={} pairs={} clamped={}",
        state.steps,
        state.rotation,
        wall_contacts,
        pair_contacts,
        clamped
    );

    StepReport {
        boundary,
        wall_contacts,
        pair_contacts,
        clamped,
        paused: false,
    }
}
