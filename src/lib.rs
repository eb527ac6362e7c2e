//! Cliff Dash - a side-scrolling endless runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scrolling, spawning, contacts, run state)
//! - `host`: Collaborator seams (physics body, score display, frame clock)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio and the physics solver itself live outside this crate;
//! the simulation only consumes contact events and emits impulse requests.

pub mod host;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz reference clock)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Reference viewport, scene coordinates (left edge at x = 0)
    pub const VIEWPORT_WIDTH: f32 = 568.0;
    pub const VIEWPORT_HEIGHT: f32 = 320.0;

    /// Scroll speed at the start of a run (units/s)
    pub const START_SPEED: f32 = 200.0;
    /// Extra scroll speed per score point
    pub const SPEED_PER_POINT: f32 = 0.01;

    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 4.0;
    /// Vertical scale range for spawned obstacles
    pub const OBSTACLE_MIN_SCALE: f32 = 0.3;
    pub const OBSTACLE_MAX_SCALE: f32 = 1.3;
    /// Horizontal spawn position, viewport space (off-screen right)
    pub const OBSTACLE_SPAWN_X: f32 = 600.0;

    /// Upward impulse applied on a grounded jump
    pub const JUMP_IMPULSE: Vec2 = Vec2::new(0.0, 100.0);
}
