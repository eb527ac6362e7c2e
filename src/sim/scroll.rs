//! Infinite horizontal scrolling via tile recycling
//!
//! Each strip (ground, background) is a fixed pool of tiles under a shared
//! layer origin. The origin shifts left every frame; a tile that fully exits
//! the viewport is repositioned flush past the strip's rightmost tile, so the
//! strip reads as an endless contiguous band. No allocation after startup.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Viewport;

/// Startup description of one strip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StripSpec {
    /// Vertical offset of the strip's tiles, viewport space.
    pub y: f32,
    /// Horizontal extent of one tile.
    pub tile_extent: f32,
    /// Fixed pool size. Zero is a caller precondition violation.
    pub tile_count: usize,
}

/// One recyclable tile, positioned in strip-layer space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tile {
    half_extent: f32,
    pos: Vec2,
}

impl Tile {
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }
}

/// A horizontally tiled repeating layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strip {
    /// Layer origin, viewport space. Tiles are positioned relative to this.
    origin: Vec2,
    tiles: Vec<Tile>,
}

impl Strip {
    fn new(spec: &StripSpec) -> Self {
        assert!(spec.tile_count > 0, "strip configured with zero tiles");
        assert!(spec.tile_extent > 0.0, "strip tile extent must be positive");

        // Lay tiles contiguously from the viewport's left edge rightward.
        let tiles = (0..spec.tile_count)
            .map(|i| Tile {
                half_extent: spec.tile_extent / 2.0,
                pos: Vec2::new(
                    spec.tile_extent / 2.0 + i as f32 * spec.tile_extent,
                    spec.y,
                ),
            })
            .collect();

        Self {
            origin: Vec2::ZERO,
            tiles,
        }
    }

    /// Tile center positions in viewport space.
    pub fn viewport_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.tiles.iter().map(|t| self.origin + t.pos)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn advance(&mut self, dt: f32, scroll_speed: f32, viewport: &Viewport) {
        self.origin.x -= scroll_speed * dt;

        for i in 0..self.tiles.len() {
            let half = self.tiles[i].half_extent;
            let view_x = self.origin.x + self.tiles[i].pos.x;

            // Fully off-screen left once the trailing edge crosses x = 0.
            if view_x <= -half {
                // Sit flush past the strip's current rightmost tile; a
                // single-tile pool wraps relative to the viewport instead.
                let rightmost = self
                    .tiles
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, t)| self.origin.x + t.pos.x + t.half_extent)
                    .reduce(f32::max)
                    .unwrap_or(viewport.right());

                self.tiles[i].pos.x = rightmost + half - self.origin.x;
            }
        }
    }
}

/// All scrolling strips, advanced together at the shared world speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollField {
    strips: Vec<Strip>,
}

impl ScrollField {
    pub fn new(specs: &[StripSpec]) -> Self {
        assert!(!specs.is_empty(), "scroll field configured with no strips");
        Self {
            strips: specs.iter().map(Strip::new).collect(),
        }
    }

    /// Shift every strip left by `scroll_speed * dt` and recycle exited tiles.
    pub fn advance(&mut self, dt: f32, scroll_speed: f32, viewport: &Viewport) {
        debug_assert!(dt > 0.0, "non-positive timestep");
        for strip in &mut self.strips {
            strip.advance(dt, scroll_speed, viewport);
        }
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }
}
