//! Collaborator seams between the simulation and its host
//!
//! The simulation never talks to a physics engine, a scene graph or a clock
//! directly. The host owns those and bridges them through the traits here,
//! driving `World::advance` at a fixed rate via `FrameClock`.

/// Outbound physics capability: apply a 2D impulse to a body.
///
/// The physics collaborator owns the player body; the sim only issues
/// requests against it.
pub trait ImpulseBody {
    fn apply_impulse(&mut self, impulse: glam::Vec2);
}

/// Score display collaborator. The sim pushes the counter, the host renders.
pub trait ScoreSink {
    fn set_score(&mut self, score: u64);
}

/// Fixed-step driver: accumulates wall time and emits whole simulation
/// steps, capped per frame to avoid the spiral of death after a long stall.
#[derive(Debug, Clone)]
pub struct FrameClock {
    dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        assert!(dt > 0.0, "non-positive timestep");
        assert!(max_substeps > 0, "frame clock needs at least one substep");
        Self {
            dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Feed elapsed wall time; run `step` once per whole timestep, at most
    /// `max_substeps` times. Leftover time stays in the accumulator.
    pub fn tick(&mut self, elapsed: f32, mut step: impl FnMut(f32)) -> u32 {
        // Clamp pathological frame gaps the way a render host would.
        self.accumulator += elapsed.min(0.25);

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            step(self.dt);
            self.accumulator -= self.dt;
            substeps += 1;
        }
        substeps
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
