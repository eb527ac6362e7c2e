//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies
//!
//! Contact events and input events arrive from external collaborators but are
//! dispatched on the frame thread, never concurrently with `World::advance`.

pub mod contact;
pub mod input;
pub mod scroll;
pub mod spawn;
pub mod state;
pub mod tick;

pub use contact::{CategoryMask, ContactCategory, ContactEvent};
pub use input::{InputGate, JumpImpulse};
pub use scroll::{ScrollField, Strip, StripSpec, Tile};
pub use spawn::{Obstacle, ObstacleSpawner, ObstacleTemplate};
pub use state::{GameEvent, RunPhase, RunState, Viewport};
pub use tick::{World, WorldConfig};
