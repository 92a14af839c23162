//! Ninja Arena - a tile-world arcade brawler
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (movement, combat, levels)
//! - `tuning`: Data-driven game balance and start-of-game templates
//! - `map`: Tile-map data supplied by the level loader (world bounds only)

pub mod map;
pub mod sim;
pub mod tuning;

pub use map::{TileLayer, TileMap};
pub use tuning::{GameConfig, StartLayout, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical sprite extent (pixels) for every 1x entity
    pub const SPRITE_SIZE: f32 = 16.0;
    /// Tile size used by the tile map
    pub const TILE_SIZE: u32 = 16;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: u32 = 320;
    pub const SCREEN_HEIGHT: u32 = 240;

    /// Player is placed here whenever a level is cleared
    pub const MAP_CENTER_X: f32 = 160.0;
    pub const MAP_CENTER_Y: f32 = 120.0;

    /// Nominal frame rate the cooldowns are tuned for
    pub const FRAMES_PER_SECOND: u32 = 60;
}

/// Centre of the map, where the player respawns between levels
#[inline]
pub fn map_center() -> Vec2 {
    Vec2::new(consts::MAP_CENTER_X, consts::MAP_CENTER_Y)
}

/// Offset from a sprite's top-left corner to its centre
#[inline]
pub fn sprite_center_offset() -> Vec2 {
    Vec2::splat(consts::SPRITE_SIZE / 2.0)
}
