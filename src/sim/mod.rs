//! Simulation module
//!
//! All physics lives here. Nothing in this module renders, sleeps or reads
//! the clock:
//! - One `step` per external tick
//! - Randomness only through an injected RNG
//! - Stable body order (pair resolution depends on it)

pub mod collision;
pub mod shape;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{CollisionResult, edge_collision, resolve_boundary, resolve_pairs};
pub use shape::{Boundary, generate_polygon, generate_star};
pub use state::{Body, SimulationState};
pub use tick::{FrameSize, StepReport, step};
