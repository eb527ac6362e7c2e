//! Data-driven game balance
//!
//! All gameplay numbers live in one serde struct so a run can be re-balanced
//! from a JSON file without touching simulation code. Defaults reproduce the
//! reference configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values consumed at world construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll speed at the start of a run (units/s)
    pub base_speed: f32,
    /// Extra scroll speed per score point
    pub speed_per_point: f32,
    /// Seconds between obstacle spawns
    pub spawn_interval: f32,
    /// Vertical scale range for spawned obstacles
    pub obstacle_scale_min: f32,
    pub obstacle_scale_max: f32,
    /// Horizontal spawn position, viewport space (off-screen right)
    pub obstacle_spawn_x: f32,
    /// Impulse applied on a grounded jump
    pub jump_impulse: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: START_SPEED,
            speed_per_point: SPEED_PER_POINT,
            spawn_interval: SPAWN_INTERVAL,
            obstacle_scale_min: OBSTACLE_MIN_SCALE,
            obstacle_scale_max: OBSTACLE_MAX_SCALE,
            obstacle_spawn_x: OBSTACLE_SPAWN_X,
            jump_impulse: JUMP_IMPULSE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
