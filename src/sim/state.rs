//! Run state and core simulation types
//!
//! Score/speed progression and the Active→Dead state machine live here.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active gameplay
    Active,
    /// Run ended by an obstacle hit
    Dead,
}

/// One-shot simulation outputs, drained by the host each frame.
///
/// The sim never renders or plays feedback itself; it signals the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Emitted exactly once, at the Active→Dead transition.
    HeroDied,
    /// A new obstacle entered the world off-screen right.
    ObstacleSpawned { scale: f32 },
}

/// The visible region of the world, scene coordinates.
///
/// Left edge is at x = 0, right edge at x = `width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0, "degenerate viewport");
        Self { width, height }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        0.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.width
    }
}

/// The authoritative run-state machine: phase, score, scroll speed.
///
/// Invariant: `scroll_speed = base_speed + speed_per_point * score`,
/// non-decreasing while Active, frozen at the frame of death.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    phase: RunPhase,
    score: u64,
    scroll_speed: f32,
    base_speed: f32,
    speed_per_point: f32,
}

impl RunState {
    pub fn new(tuning: &Tuning) -> Self {
        assert!(
            tuning.speed_per_point >= 0.0,
            "speed progression must be non-decreasing"
        );
        Self {
            phase: RunPhase::Active,
            score: 0,
            scroll_speed: tuning.base_speed,
            base_speed: tuning.base_speed,
            speed_per_point: tuning.speed_per_point,
        }
    }

    /// Advance score and speed by one tick.
    ///
    /// Score counts ticks, not seconds: one point per call. The host clock is
    /// fixed-rate, so this is 60 points/s in the reference configuration.
    pub fn advance(&mut self, dt: f32) {
        debug_assert!(dt > 0.0, "non-positive timestep");
        if self.phase == RunPhase::Dead {
            return;
        }
        self.score += 1;
        self.scroll_speed = self.base_speed + self.speed_per_point * self.score as f32;
    }

    /// End the run. One-way; returns true only on the actual transition.
    pub fn kill(&mut self) -> bool {
        if self.phase == RunPhase::Dead {
            return false;
        }
        self.phase = RunPhase::Dead;
        true
    }

    /// Reinitialize for a fresh run (restart, not part of the frame loop).
    pub fn reset(&mut self) {
        self.phase = RunPhase::Active;
        self.score = 0;
        self.scroll_speed = self.base_speed;
    }

    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }
}
