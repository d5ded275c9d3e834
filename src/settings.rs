//! Global simulation settings
//!
//! Multipliers applied on top of `SimulationConfig` every step. Unlike the
//! config these may change between steps without resetting the simulation.

use serde::{Deserialize, Serialize};

/// Slider ranges used by the control panel
///
/// Time scale never reaches zero here; pausing is a separate toggle.
pub mod ranges {
    pub const TIME_SCALE: (f32, f32) = (0.1, 3.0);
    pub const GRAVITY: (f32, f32) = (0.0, 3.0);
    pub const ROTATION: (f32, f32) = (0.0, 5.0);
    pub const BOUNCINESS: (f32, f32) = (0.1, 1.0);
}

/// Global multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Simulation speed; 0 freezes every instance
    pub time_scale: f32,
    pub gravity_multiplier: f32,
    pub rotation_multiplier: f32,
    /// Scales wall restitution only
    pub bounciness_multiplier: f32,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            gravity_multiplier: 1.0,
            rotation_multiplier: 1.0,
            bounciness_multiplier: 1.0,
        }
    }
}

impl GlobalSettings {
    /// True when stepping has no effect
    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }

    /// Same settings with time frozen
    pub fn paused(self) -> Self {
        Self {
            time_scale: 0.0,
            ..self
        }
    }

    /// Same settings running at normal speed
    pub fn resumed(self) -> Self {
        Self {
            time_scale: 1.0,
            ..self
        }
    }

    /// Flip between paused and normal speed
    pub fn toggle_pause(&mut self) {
        *self = if self.is_paused() {
            self.resumed()
        } else {
            self.paused()
        };
    }

    /// Clamp every multiplier into its slider range.
    ///
    /// The simulation accepts any finite value; this is for callers that want
    /// UI-equivalent bounds. A paused setting stays paused, and clamping never
    /// pauses a running one.
    pub fn clamped(self) -> Self {
        let clamp = |v: f32, (lo, hi): (f32, f32)| v.clamp(lo, hi);
        let time_scale = if self.is_paused() {
            0.0
        } else {
            clamp(self.time_scale, ranges::TIME_SCALE)
        };
        Self {
            time_scale,
            gravity_multiplier: clamp(self.gravity_multiplier, ranges::GRAVITY),
            rotation_multiplier: clamp(self.rotation_multiplier, ranges::ROTATION),
            bounciness_multiplier: clamp(self.bounciness_multiplier, ranges::BOUNCINESS),
        }
    }
}
