//! Data-driven game balance
//!
//! Every knob defaults to the classic values in [`crate::consts`]; a JSON
//! file can override any subset of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Absolute vertical ball speed per tick
    pub velocity_y: f32,
    /// Minimum horizontal launch speed magnitude
    pub velocity_x_min: f32,
    /// Maximum horizontal launch speed magnitude
    pub velocity_x_max: f32,
    /// Balls per game
    pub turns: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            velocity_y: VELOCITY_Y,
            velocity_x_min: VELOCITY_X_MIN,
            velocity_x_max: VELOCITY_X_MAX,
            turns: NTURNS,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Lookahead margin for horizontal wall/side probes: one tick of travel.
    #[inline]
    pub fn x_margin(&self) -> f32 {
        self.velocity_x_max
    }

    /// Lookahead margin for vertical wall/side probes: one tick of travel.
    #[inline]
    pub fn y_margin(&self) -> f32 {
        self.velocity_y
    }
}
