//! Jump input gating
//!
//! One discrete tap maps to at most one impulse request. The gate is
//! edge-triggered: input while airborne or after death is dropped, never
//! queued, and ground contact re-arms it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{RunPhase, RunState};

/// An impulse-application request for the physics-owned player body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpImpulse(pub Vec2);

/// Gates raw tap events against run phase and ground contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputGate {
    grounded: bool,
    impulse: Vec2,
}

impl InputGate {
    /// The hero starts a run standing on the ground.
    pub fn new(impulse: Vec2) -> Self {
        Self {
            grounded: true,
            impulse,
        }
    }

    /// Handle one tap. Returns the impulse to apply, or None if dropped.
    pub fn on_jump(&mut self, run: &RunState) -> Option<JumpImpulse> {
        if run.phase() == RunPhase::Dead {
            return None;
        }
        if !self.grounded {
            return None;
        }
        self.grounded = false;
        Some(JumpImpulse(self.impulse))
    }

    /// Re-arm jumping. Idempotent while already grounded.
    pub fn set_grounded(&mut self) {
        self.grounded = true;
    }

    #[inline]
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn reset(&mut self) {
        self.grounded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn gate() -> InputGate {
        InputGate::new(Vec2::new(0.0, 100.0))
    }

    #[test]
    fn test_one_impulse_until_ground_contact() {
        let run = RunState::new(&Tuning::default());
        let mut gate = gate();

        let first = gate.on_jump(&run);
        assert_eq!(first, Some(JumpImpulse(Vec2::new(0.0, 100.0))));

        // Airborne: dropped silently, no queueing.
        assert!(gate.on_jump(&run).is_none());
        assert!(gate.on_jump(&run).is_none());

        gate.set_grounded();
        assert!(gate.on_jump(&run).is_some());
    }

    #[test]
    fn test_dead_run_drops_input() {
        let mut run = RunState::new(&Tuning::default());
        run.kill();

        let mut gate = gate();
        assert!(gate.grounded());
        assert!(gate.on_jump(&run).is_none());
        // The drop did not consume the ground flag.
        assert!(gate.grounded());
    }

    #[test]
    fn test_ground_contact_is_idempotent() {
        let run = RunState::new(&Tuning::default());
        let mut gate = gate();
        gate.set_grounded();
        gate.set_grounded();
        assert!(gate.on_jump(&run).is_some());
        assert!(gate.on_jump(&run).is_none());
    }
}
