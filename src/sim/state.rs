//! Simulation state and body types
//!
//! A `SimulationState` is owned by exactly one driver. It is created from a
//! validated config and replaced wholesale on reset.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::shape::Boundary;
use super::tick::FrameSize;
use crate::config::SimulationConfig;
use crate::consts::*;
use crate::error::Result;
use crate::polar_to_cartesian;

/// A simulated ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique within one simulation instance
    pub id: u32,
    /// Position relative to the boundary center
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0xRRGGBB, display only
    pub color: u32,
}

impl Body {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color: BALL_COLOR,
        }
    }

    /// Place a body at a random point near the center, moving in a random
    /// direction at a randomized fraction of `initial_speed`
    pub fn spawn<R: Rng>(id: u32, radius: f32, initial_speed: f32, rng: &mut R) -> Self {
        let angle = rng.random::<f32>() * TAU;
        let dist = rng.random::<f32>() * SPAWN_RADIUS;
        let speed = initial_speed * (SPAWN_SPEED_MIN_FACTOR + rng.random::<f32>());
        let vel_angle = rng.random::<f32>() * TAU;

        Self::new(
            id,
            polar_to_cartesian(dist, angle),
            polar_to_cartesian(speed, vel_angle),
            radius,
        )
    }

    /// Kinetic energy assuming unit mass
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.vel.length_squared()
    }
}

/// Everything that changes from step to step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Bodies in a stable order (pair resolution depends on it)
    pub bodies: Vec<Body>,
    /// Accumulated boundary rotation (radians)
    pub rotation: f32,
    /// Steps taken since initialization
    pub steps: u64,
}

impl SimulationState {
    /// Create bodies for a config using the supplied random source
    pub fn initialize<R: Rng>(config: &SimulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let bodies: Vec<Body> = (0..config.ball_count)
            .map(|i| Body::spawn(i, config.ball_size, config.initial_speed, &mut *rng))
            .collect();

        log::info!(
            "Initialized #{} '{}' ({} {}): {} bodies",
            config.id,
            config.name,
            config.vertex_count,
            config.shape_type.as_str(),
            bodies.len()
        );

        Ok(Self {
            bodies,
            rotation: 0.0,
            steps: 0,
        })
    }

    /// Create a reproducible state from a seed
    pub fn seeded(config: &SimulationConfig, seed: u64) -> Result<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::initialize(config, &mut rng)
    }

    /// Build a state from explicit bodies (rotation starts at zero)
    pub fn with_bodies(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            rotation: 0.0,
            steps: 0,
        }
    }

    /// Discard all bodies and start over.
    ///
    /// On a config error the current state is left untouched.
    pub fn reset<R: Rng>(&mut self, config: &SimulationConfig, rng: &mut R) -> Result<()> {
        *self = Self::initialize(config, rng)?;
        log::info!("Simulation '{}' reset", config.name);
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Boundary at the current rotation, sized for `frame`
    pub fn boundary(&self, config: &SimulationConfig, frame: FrameSize) -> Boundary {
        Boundary::for_config(config, frame.shape_radius(), self.rotation)
    }

    /// Total kinetic energy (unit masses)
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_initialize_spawns_near_center() {
        let config = SimulationConfig {
            ball_count: 50,
            initial_speed: 4.0,
            ..Default::default()
        };
        let state = SimulationState::seeded(&config, 12345).unwrap();

        assert_eq!(state.bodies.len(), 50);
        assert_eq!(state.rotation, 0.0);
        for (i, body) in state.bodies.iter().enumerate() {
            assert_eq!(body.id, i as u32);
            assert_eq!(body.radius, config.ball_size);
            assert!(body.pos.length() <= SPAWN_RADIUS + 1e-4);
            let speed = body.vel.length();
            assert!(speed >= 2.0 - 1e-4 && speed <= 6.0 + 1e-4, "speed {speed}");
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let config = SimulationConfig::default();
        let a = SimulationState::seeded(&config, 99999).unwrap();
        let b = SimulationState::seeded(&config, 99999).unwrap();
        assert_eq!(a, b);

        let c = SimulationState::seeded(&config, 11111).unwrap();
        assert_ne!(a.bodies, c.bodies);
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        let config = SimulationConfig {
            vertex_count: 1,
            ..Default::default()
        };
        assert_eq!(
            SimulationState::seeded(&config, 1),
            Err(ConfigError::TooFewSides(1))
        );

        // Rejected before any boundary is generated
        let huge_star = SimulationConfig {
            shape_type: crate::config::ShapeKind::Star,
            vertex_count: 1 << 31,
            ..Default::default()
        };
        assert!(matches!(
            SimulationState::seeded(&huge_star, 1),
            Err(ConfigError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_reset_replaces_everything() {
        let config = SimulationConfig::default();
        let mut state = SimulationState::seeded(&config, 7).unwrap();
        state.rotation = 3.0;
        state.steps = 40;
        state.bodies.clear();

        let mut rng = Pcg32::seed_from_u64(7);
        state.reset(&config, &mut rng).unwrap();
        assert_eq!(state, SimulationState::seeded(&config, 7).unwrap());
    }

    #[test]
    fn test_failed_reset_keeps_state() {
        let config = SimulationConfig::default();
        let mut state = SimulationState::seeded(&config, 7).unwrap();
        let before = state.clone();

        let bad = SimulationConfig {
            ball_size: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(8);
        assert!(state.reset(&bad, &mut rng).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_zero_balls() {
        let config = SimulationConfig {
            ball_count: 0,
            ..Default::default()
        };
        let state = SimulationState::seeded(&config, 3).unwrap();
        assert!(state.bodies().is_empty());
        assert_eq!(state.kinetic_energy(), 0.0);
    }
}
