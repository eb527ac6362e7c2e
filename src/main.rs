//! Cliff Dash headless demo host
//!
//! Drives the simulation core at the fixed reference rate with a scripted
//! run: jump, land, then hit an obstacle. Stands in for the render loop,
//! physics engine and input layer so every collaborator seam is exercised.

use glam::Vec2;

use cliff_dash::Tuning;
use cliff_dash::consts::{MAX_SUBSTEPS, SIM_DT};
use cliff_dash::host::{FrameClock, ImpulseBody, ScoreSink};
use cliff_dash::sim::{ContactCategory, ContactEvent, GameEvent, RunPhase, World, WorldConfig};

/// Stand-in for the physics-owned player body.
struct Hero {
    impulses_applied: u32,
}

impl ImpulseBody for Hero {
    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulses_applied += 1;
        log::info!("impulse applied to hero: {impulse}");
    }
}

/// Stand-in for the score label.
struct ScoreLabel {
    shown: u64,
}

impl ScoreSink for ScoreLabel {
    fn set_score(&mut self, score: u64) {
        self.shown = score;
        if score.is_multiple_of(60) {
            log::debug!("score label: {score}");
        }
    }
}

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) => {
            log::error!("cannot read tuning file {path}: {err}");
            std::process::exit(1);
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("loaded tuning from {path}");
            tuning
        }
        Err(err) => {
            log::error!("malformed tuning file {path}: {err}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let mut config = WorldConfig::reference(2017);
    config.tuning = load_tuning();

    let mut world = World::new(&config);
    let mut clock = FrameClock::new(SIM_DT, MAX_SUBSTEPS);
    let mut hero = Hero {
        impulses_applied: 0,
    };
    let mut label = ScoreLabel { shown: 0 };

    log::info!(
        "starting run: base speed {}, spawn interval {} s",
        config.tuning.base_speed,
        config.tuning.spawn_interval
    );

    // Scripted ten-second run at the fixed rate.
    for frame in 0..600u32 {
        match frame {
            30 => {
                if let Some(impulse) = world.on_jump_input() {
                    hero.apply_impulse(impulse.0);
                }
            }
            31 => {
                // Airborne tap: must be dropped.
                assert!(world.on_jump_input().is_none());
            }
            75 => {
                world.handle_contact(ContactEvent::new(
                    ContactCategory::Player,
                    ContactCategory::Ground,
                ));
            }
            540 => {
                world.handle_contact(ContactEvent::new(
                    ContactCategory::Player,
                    ContactCategory::Obstacle,
                ));
            }
            _ => {}
        }

        clock.tick(SIM_DT, |dt| world.advance(dt));
        label.set_score(world.run().score());

        for event in world.drain_events() {
            match event {
                GameEvent::HeroDied => log::info!("hero died at frame {}", world.frame()),
                GameEvent::ObstacleSpawned { scale } => {
                    log::info!("obstacle spawned, scale {scale:.2}")
                }
            }
        }
    }

    assert_eq!(world.run().phase(), RunPhase::Dead);
    log::info!(
        "run over: score {}, final speed {:.1}, {} obstacle(s) on screen, {} impulse(s)",
        label.shown,
        world.run().scroll_speed(),
        world.spawner().obstacles().len(),
        hero.impulses_applied
    );
}
