//! Polybounce - circular bodies inside a rotating polygon or star
//!
//! Core modules:
//! - `sim`: Simulation step (integration, boundary and pairwise collisions)
//! - `config`: Per-run simulation configuration
//! - `settings`: Global multipliers that may change between steps
//! - `snapshot`: Render-ready view of the current state
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use config::{ShapeKind, SimulationConfig};
pub use error::{ConfigError, Result};
pub use settings::GlobalSettings;
pub use sim::{Body, Boundary, FrameSize, SimulationState, StepReport, step};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Boundary radius as a fraction of the smaller frame dimension
    pub const SHAPE_RADIUS_FRACTION: f32 = 0.45;
    /// Star inner radius as a fraction of the outer radius
    pub const STAR_INNER_RATIO: f32 = 0.4;

    /// Upper bound on polygon sides or star points
    pub const MAX_VERTICES: u32 = 1024;

    /// Bodies spawn within this distance of the center
    pub const SPAWN_RADIUS: f32 = 30.0;
    /// Initial speed is scaled by a random factor in [MIN, MIN + 1)
    pub const SPAWN_SPEED_MIN_FACTOR: f32 = 0.5;

    /// Outward velocity added after a wall bounce so bodies don't rest on an edge
    pub const WALL_BIAS: f32 = 0.1;
    /// Bodies farther than shape radius + this are reset to the center
    pub const RUNAWAY_MARGIN: f32 = 50.0;

    /// Default ball color (#FACC15)
    pub const BALL_COLOR: u32 = 0xFACC15;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
