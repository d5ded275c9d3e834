//! Per-run simulation configuration
//!
//! Field names follow the camelCase JSON an external UI produces, so a
//! config object can be loaded directly with `SimulationConfig::from_json`.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_VERTICES;
use crate::error::{ConfigError, Result};

/// Boundary shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    #[default]
    Square,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Star => "star",
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, ShapeKind::Star)
    }

    /// Side count the name implies (points for a star)
    pub fn nominal_vertex_count(&self) -> u32 {
        match self {
            ShapeKind::Triangle => 3,
            ShapeKind::Square => 4,
            ShapeKind::Pentagon => 5,
            ShapeKind::Hexagon => 6,
            ShapeKind::Octagon => 8,
            ShapeKind::Star => 5,
        }
    }
}

/// Simulation parameters, fixed for the duration of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Scenario id, reported in initialization logs
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub shape_type: ShapeKind,
    /// Polygon side count, or star point count. Authoritative over `shape_type`.
    pub vertex_count: u32,
    /// Downward acceleration per step
    pub gravity: f32,
    /// Fraction of velocity lost per step (0 to 1)
    pub friction: f32,
    /// Wall bounciness (0 to 1+)
    pub restitution: f32,
    /// Radians per step
    pub rotation_speed: f32,
    pub ball_count: u32,
    pub ball_size: f32,
    pub initial_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let shape_type = ShapeKind::Square;
        Self {
            id: 0,
            name: "Square".to_string(),
            shape_type,
            vertex_count: shape_type.nominal_vertex_count(),
            gravity: 0.2,
            friction: 0.001,
            restitution: 0.9,
            rotation_speed: 0.01,
            ball_count: 5,
            ball_size: 10.0,
            initial_speed: 3.0,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<()> {
        if self.shape_type.is_star() {
            if self.vertex_count < 2 {
                return Err(ConfigError::TooFewPoints(self.vertex_count));
            }
        } else if self.vertex_count < 3 {
            return Err(ConfigError::TooFewSides(self.vertex_count));
        }
        if self.vertex_count > MAX_VERTICES {
            return Err(ConfigError::TooManyVertices {
                count: self.vertex_count,
                max: MAX_VERTICES,
            });
        }

        if !self.ball_size.is_finite() || self.ball_size <= 0.0 {
            return Err(ConfigError::InvalidBallSize(self.ball_size));
        }

        let coefficients = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("restitution", self.restitution),
            ("rotationSpeed", self.rotation_speed),
            ("initialSpeed", self.initial_speed),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        Ok(())
    }
}
