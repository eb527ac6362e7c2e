//! Fixed timestep world update
//!
//! Per-frame orchestration: scroll the strips, advance the spawner, then
//! accumulate score/speed. Contact events and tap events arrive between
//! frames on the same thread and mutate the world through the two entry
//! points below; the world never reads ambient state.

use serde::{Deserialize, Serialize};

use super::contact::{ContactCategory, ContactEvent};
use super::input::{InputGate, JumpImpulse};
use super::scroll::{ScrollField, StripSpec};
use super::spawn::{ObstacleSpawner, ObstacleTemplate};
use super::state::{GameEvent, RunState, Viewport};
use crate::tuning::Tuning;

/// Everything the world needs, injected at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub viewport: Viewport,
    pub strips: Vec<StripSpec>,
    pub template: ObstacleTemplate,
    pub tuning: Tuning,
    /// RNG seed for obstacle scale draws.
    pub seed: u64,
}

impl WorldConfig {
    /// The reference scene: one ground strip of two viewport-wide tiles.
    pub fn reference(seed: u64) -> Self {
        use crate::consts::*;
        Self {
            viewport: Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            strips: vec![StripSpec {
                y: 32.0,
                tile_extent: VIEWPORT_WIDTH,
                tile_count: 2,
            }],
            template: ObstacleTemplate { base_y: 48.0 },
            tuning: Tuning::default(),
            seed,
        }
    }
}

/// The simulation core: run state, scroll field, spawner, input gate.
#[derive(Debug, Clone)]
pub struct World {
    run: RunState,
    scroll: ScrollField,
    spawner: ObstacleSpawner,
    gate: InputGate,
    viewport: Viewport,
    strips: Vec<StripSpec>,
    frame: u64,
    events: Vec<GameEvent>,
}

impl World {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            run: RunState::new(&config.tuning),
            scroll: ScrollField::new(&config.strips),
            spawner: ObstacleSpawner::new(config.template, &config.tuning, config.seed),
            gate: InputGate::new(config.tuning.jump_impulse),
            viewport: config.viewport,
            strips: config.strips.clone(),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Advance one frame. Scrolling uses the speed computed last frame; the
    /// world keeps moving after death, only score and speed freeze.
    pub fn advance(&mut self, dt: f32) {
        assert!(dt > 0.0, "non-positive timestep");

        let speed = self.run.scroll_speed();
        self.scroll.advance(dt, speed, &self.viewport);
        if let Some(scale) = self.spawner.advance(dt, speed, &self.viewport) {
            self.events.push(GameEvent::ObstacleSpawned { scale });
        }
        self.run.advance(dt);
        self.frame += 1;
    }

    /// Classify one begin-contact report from the physics collaborator.
    ///
    /// Ground is checked first, unconditionally, then obstacle; a single
    /// event may trip both rules.
    pub fn handle_contact(&mut self, event: ContactEvent) {
        if event.involves(ContactCategory::Ground) {
            self.gate.set_grounded();
        }
        if event.involves(ContactCategory::Obstacle) && self.run.kill() {
            self.events.push(GameEvent::HeroDied);
        }
    }

    /// Handle one tap. Returns the impulse request to forward to the
    /// physics collaborator, or None if the input was gated off.
    pub fn on_jump_input(&mut self) -> Option<JumpImpulse> {
        self.gate.on_jump(&self.run)
    }

    /// Take all pending one-shot events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Restart the run in place. External to the per-frame loop.
    pub fn reset(&mut self) {
        self.run.reset();
        self.gate.reset();
        self.spawner.reset();
        self.scroll = ScrollField::new(&self.strips);
        self.frame = 0;
        self.events.clear();
    }

    #[inline]
    pub fn run(&self) -> &RunState {
        &self.run
    }

    #[inline]
    pub fn scroll(&self) -> &ScrollField {
        &self.scroll
    }

    #[inline]
    pub fn spawner(&self) -> &ObstacleSpawner {
        &self.spawner
    }

    #[inline]
    pub fn gate(&self) -> &InputGate {
        &self.gate
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
