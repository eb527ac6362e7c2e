//! Obstacle spawning, scrolling and reclamation
//!
//! Obstacles live in their own layer that scrolls with the world, so every
//! obstacle moves at the current world speed regardless of when it spawned.
//! A timer fires at most one spawn per advance; the only randomized property
//! is the vertical scale, drawn from a seeded RNG for determinism.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Viewport;
use crate::tuning::Tuning;

/// The prototype an obstacle is cloned from: a fixed baseline y-position.
///
/// Spawns randomize vertical scale only; with a fixed anchor that moves the
/// apparent height and position together. The y value is never randomized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleTemplate {
    /// Baseline vertical position, viewport space.
    pub base_y: f32,
}

/// A live obstacle. Liveness is membership in the spawner's active set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Position in obstacle-layer space.
    pub pos: Vec2,
    /// Vertical scale applied to the template.
    pub scale_y: f32,
}

/// Owns the active-obstacle set exclusively; no other component mutates it.
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    /// Obstacle layer origin, viewport space.
    origin: Vec2,
    template: ObstacleTemplate,
    obstacles: Vec<Obstacle>,
    /// Accumulates dt; resets to 0 when a spawn fires.
    spawn_timer: f32,
    spawn_interval: f32,
    spawn_x: f32,
    scale_min: f32,
    scale_max: f32,
    rng: Pcg32,
    next_id: u32,
}

impl ObstacleSpawner {
    pub fn new(template: ObstacleTemplate, tuning: &Tuning, seed: u64) -> Self {
        assert!(tuning.spawn_interval > 0.0, "spawn interval must be positive");
        assert!(
            tuning.obstacle_scale_min <= tuning.obstacle_scale_max,
            "inverted obstacle scale range"
        );
        Self {
            origin: Vec2::ZERO,
            template,
            obstacles: Vec::new(),
            spawn_timer: 0.0,
            spawn_interval: tuning.spawn_interval,
            spawn_x: tuning.obstacle_spawn_x,
            scale_min: tuning.obstacle_scale_min,
            scale_max: tuning.obstacle_scale_max,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Scroll the obstacle layer, reclaim exited obstacles, maybe spawn one.
    ///
    /// Returns the scale of the obstacle spawned this call, if any. At most
    /// one spawn fires per call no matter how large `dt` is; the timer never
    /// batches catch-up spawns after a long pause.
    pub fn advance(&mut self, dt: f32, scroll_speed: f32, viewport: &Viewport) -> Option<f32> {
        debug_assert!(dt > 0.0, "non-positive timestep");

        self.origin.x -= scroll_speed * dt;

        // Reclaim obstacles fully past the viewport's left boundary.
        let origin_x = self.origin.x;
        let left = viewport.left();
        self.obstacles.retain(|o| origin_x + o.pos.x > left);

        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval {
            self.spawn_timer = 0.0;
            return Some(self.spawn());
        }
        None
    }

    fn spawn(&mut self) -> f32 {
        let scale = self.rng.random_range(self.scale_min..=self.scale_max);
        let view_pos = Vec2::new(self.spawn_x, self.template.base_y);
        let obstacle = Obstacle {
            id: self.next_id,
            pos: view_pos - self.origin,
            scale_y: scale,
        };
        self.next_id += 1;
        self.obstacles.push(obstacle);
        scale
    }

    /// Active obstacles, oldest first (spawn order, stable ids).
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Obstacle center positions in viewport space.
    pub fn viewport_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.obstacles.iter().map(|o| self.origin + o.pos)
    }

    #[inline]
    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Clear the active set and timer for a fresh run.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
        self.origin = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    fn spawner(seed: u64) -> ObstacleSpawner {
        ObstacleSpawner::new(
            ObstacleTemplate { base_y: 48.0 },
            &Tuning::default(),
            seed,
        )
    }

    fn viewport() -> Viewport {
        Viewport::new(568.0, 320.0)
    }

    #[test]
    fn test_spawn_fencepost() {
        // With dt = 0.5 (exactly representable) the timer reaches the 4 s
        // interval on the 8th advance: increment first, then check.
        let mut s = spawner(7);
        let vp = viewport();
        for _ in 0..7 {
            assert!(s.advance(0.5, 200.0, &vp).is_none());
        }
        assert!(s.advance(0.5, 200.0, &vp).is_some());
        assert_eq!(s.obstacles().len(), 1);
        assert_eq!(s.spawn_timer(), 0.0);
    }

    #[test]
    fn test_at_most_one_spawn_per_advance() {
        // A 10 s step covers two and a half intervals but spawns once.
        let mut s = spawner(7);
        assert!(s.advance(10.0, 200.0, &viewport()).is_some());
        assert_eq!(s.obstacles().len(), 1);
        assert_eq!(s.spawn_timer(), 0.0);
    }

    #[test]
    fn test_spawn_uses_template_y_and_scale_range() {
        let mut s = spawner(99);
        let vp = viewport();
        for _ in 0..200 {
            s.advance(0.5, 0.0, &vp);
        }
        assert!(!s.obstacles().is_empty());
        let tuning = Tuning::default();
        for (pos, o) in s.viewport_positions().zip(s.obstacles()) {
            assert_eq!(pos.y, 48.0);
            assert!(o.scale_y >= tuning.obstacle_scale_min);
            assert!(o.scale_y <= tuning.obstacle_scale_max);
        }
    }

    #[test]
    fn test_obstacles_reclaimed_past_left_edge() {
        let mut s = spawner(3);
        let vp = viewport();
        s.advance(4.0, 0.0, &vp);
        assert_eq!(s.obstacles().len(), 1);

        // Spawned at x = 600; at 200 units/s it exits after 3 s of scroll.
        let mut frames = 0;
        while !s.obstacles().is_empty() && frames < 600 {
            s.advance(SIM_DT, 200.0, &vp);
            frames += 1;
        }
        // Second interval has not elapsed yet at ~3 s, so the set is empty.
        assert!(s.obstacles().is_empty());
        assert!(frames > 150 && frames < 200, "exited after {frames} frames");
    }

    #[test]
    fn test_determinism_with_same_seed() {
        let mut a = spawner(1234);
        let mut b = spawner(1234);
        let vp = viewport();
        for _ in 0..1000 {
            let ra = a.advance(SIM_DT, 250.0, &vp);
            let rb = b.advance(SIM_DT, 250.0, &vp);
            assert_eq!(ra, rb);
        }
        let pa: Vec<_> = a.viewport_positions().collect();
        let pb: Vec<_> = b.viewport_positions().collect();
        assert_eq!(pa, pb);
    }

    proptest! {
        /// The timer invariant holds and spawns never batch, for any dt.
        #[test]
        fn prop_timer_bounded_and_throttled(
            steps in proptest::collection::vec(1e-3f32..20.0, 1..100)
        ) {
            let mut s = spawner(42);
            let vp = viewport();
            for dt in steps {
                let before = s.obstacles().len();
                s.advance(dt, 100.0, &vp);
                let after = s.obstacles().len();
                prop_assert!(after <= before + 1);
                prop_assert!(s.spawn_timer() >= 0.0);
                prop_assert!(s.spawn_timer() < Tuning::default().spawn_interval);
            }
        }
    }
}
